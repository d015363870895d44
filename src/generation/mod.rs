//! World generation.
//!
//! `WorldGenerator` places the ladder, treasure, monster and pits on a fresh
//! grid so that the treasure can always be carried back to the ladder.

pub mod generator;

pub use generator::WorldGenerator;

//! Connectivity oracle.
//!
//! Answers "is there a passable path from A to B". The world generator uses
//! it after every obstacle placement to keep the world solvable.

pub mod connectivity;

pub use connectivity::{connected, connected_by};

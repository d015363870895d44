//! # rust-wumpus
//!
//! A grid-world hunt: explorers enter a dungeon through a ladder, dodge pits
//! and a monster, find the treasure and climb back out.
//!
//! ## Design Principles
//!
//! 1. **Always Solvable**: The generator checks connectivity after every
//!    obstacle it places. The treasure can always be carried to the ladder.
//!
//! 2. **Value Semantics**: A `World` is never mutated once handed out. Each
//!    resolved action yields a new world; earlier worlds stay valid.
//!
//! 3. **Deterministic**: All randomness flows through an explicit, seeded
//!    `GameRng`. Same seed, same config, same player count, same world.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) cloning via `im-rs`, so every turn
//!   can copy the world instead of editing it in place.
//!
//! - **Tagged Entities**: Ladder, monster, treasure, weapons and explorers
//!   are variants of one `Entity` sum type. Item ownership is a value
//!   (`Owner::Tile` or `Owner::Explorer`) that is rebound on transfer.
//!
//! ## Modules
//!
//! - `core`: Coordinates, players, actions, RNG, configuration, errors
//! - `world`: Grid, entities, items, world state, percepts
//! - `search`: Connectivity oracle
//! - `generation`: Solvable world generator
//! - `rules`: RulesEngine trait, turn engine, scoring, observations

pub mod core;
pub mod world;
pub mod search;
pub mod generation;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Coord, Direction,
    PlayerId, PlayerMap,
    GameRng, GameRngState,
    DensityRange, GeneratorConfig, ScoreConfig,
    Action, ActionRecord,
    EngineError, GenerationError, SnapshotError, TurnError,
};

pub use crate::world::{
    Entity, Explorer, Item, Owner, Occupant,
    Grid, Tile, TileKind,
    Percept, Percepts, PlayerStatus, World,
};

pub use crate::search::connected;

pub use crate::generation::WorldGenerator;

pub use crate::rules::{
    GameResult, RulesEngine,
    Transition, TurnEngine,
    Observation, observe,
    score_for, scores,
};

//! Core value types: coordinates, players, actions, RNG, configuration, errors.
//!
//! Everything here is game-mechanics free. The world model and rules build
//! on these types.

pub mod coord;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;

pub use coord::{Coord, Direction};
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use config::{DensityRange, GeneratorConfig, ScoreConfig};
pub use action::{Action, ActionRecord};
pub use error::{EngineError, GenerationError, Result, SnapshotError, TurnError};

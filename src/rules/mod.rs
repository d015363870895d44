//! Game rules.
//!
//! - `engine`: the `RulesEngine` trait and `GameResult`
//! - `turn`: `TurnEngine`, which resolves explorer actions
//! - `score`: per-player scoring
//! - `observation`: the filtered view a player is given

pub mod engine;
pub mod turn;
pub mod score;
pub mod observation;

pub use engine::{GameResult, RulesEngine};
pub use turn::{Transition, TurnEngine};
pub use score::{score_for, scores};
pub use observation::{observe, Observation};

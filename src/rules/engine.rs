//! Rules engine trait.
//!
//! A rules engine defines:
//! - What actions are legal
//! - How an action turns one world into the next
//! - When the game is over and who won

use serde::{Deserialize, Serialize};

use crate::core::{Action, PlayerId, TurnError};
use crate::world::World;

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Exactly one player escaped with the treasure.
    Winner(PlayerId),
    /// Several players escaped.
    Winners(Vec<PlayerId>),
    /// Nobody escaped.
    NoWinner,
}

impl GameResult {
    /// Build a result from the players who escaped.
    #[must_use]
    pub fn from_escaped(mut escaped: Vec<PlayerId>) -> Self {
        match escaped.len() {
            0 => GameResult::NoWinner,
            1 => GameResult::Winner(escaped[0]),
            _ => {
                escaped.sort_unstable();
                GameResult::Winners(escaped)
            }
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
            GameResult::NoWinner => false,
        }
    }
}

/// Rules engine trait.
///
/// Worlds are values: `apply_action` never touches its input and returns
/// the successor world.
///
/// ## Implementation Notes
///
/// - `legal_actions`: Return empty vec if player can't act
/// - `apply_action`: Must be deterministic and reject actions not listed
///   by `legal_actions`
/// - `is_terminal`: Return None while any player can still act
pub trait RulesEngine {
    /// Legal actions for `player` in `world`.
    fn legal_actions(&self, world: &World, player: PlayerId) -> Vec<Action>;

    /// Apply an action, producing the next world.
    fn apply_action(&self, world: &World, player: PlayerId, action: Action) -> Result<World, TurnError>;

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn is_terminal(&self, world: &World) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Whether `action` is currently legal for `player`.
    fn is_legal(&self, world: &World, player: PlayerId, action: Action) -> bool {
        self.legal_actions(world, player).contains(&action)
    }

    /// Apply a sequence of actions, each by whoever's turn it is.
    ///
    /// Stops at the first rejected action.
    fn play_out(&self, world: &World, actions: &[Action]) -> Result<World, TurnError> {
        let mut current = world.clone();
        for &action in actions {
            let player = current.current_player();
            current = self.apply_action(&current, player, action)?;
        }
        Ok(current)
    }
}

//! Explorer actions and the action history record.
//!
//! An explorer has seven action kinds. Which of them are legal in a given
//! world is decided by the rules engine; this module only names them.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// A single explorer action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Action {
    /// Rotate facing 90 degrees counter-clockwise.
    TurnLeft,
    /// Rotate facing 90 degrees clockwise.
    TurnRight,
    /// Step one tile along the current facing.
    MoveForward,
    /// Pick up an item lying on the current tile.
    Grab,
    /// Drop the most recently grabbed item onto the current tile.
    Release,
    /// Spend a weapon charge along the current facing.
    FireArrow,
    /// Leave the world via the ladder.
    Climb,
}

impl Action {
    /// Every action kind, in enumeration order.
    pub const ALL: [Action; 7] = [
        Action::TurnLeft,
        Action::TurnRight,
        Action::MoveForward,
        Action::Grab,
        Action::Release,
        Action::FireArrow,
        Action::Climb,
    ];

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Action::TurnLeft => "TurnLeft",
            Action::TurnRight => "TurnRight",
            Action::MoveForward => "MoveForward",
            Action::Grab => "Grab",
            Action::Release => "Release",
            Action::FireArrow => "FireArrow",
            Action::Climb => "Climb",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A resolved action with metadata for history tracking.
///
/// Used for:
/// - Scoring (action and arrow costs)
/// - Replay/debugging
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Round number when the action was taken (starts at 1).
    pub turn: u32,

    /// Sequence number across the whole game.
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}

//! Error types.
//!
//! - `GenerationError`: the generator could not build a world. Fatal for that
//!   request; callers retry with other dimensions or configuration.
//! - `TurnError`: an action was rejected at the boundary. The world is never
//!   partially updated.
//! - `SnapshotError`: a world snapshot could not be encoded or decoded.

use thiserror::Error;

use super::action::Action;
use super::player::PlayerId;

/// World generation failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    #[error("grid {width}x{height} is smaller than the minimum {min_width}x{min_height}")]
    GridTooSmall {
        width: i32,
        height: i32,
        min_width: i32,
        min_height: i32,
    },

    #[error("a world needs at least one player")]
    NoPlayers,

    #[error("{0} players exceeds the supported maximum")]
    TooManyPlayers(usize),

    #[error("invalid pit density range [{min}, {max}]")]
    InvalidDensityRange { min: f64, max: f64 },

    #[error("no empty space left to place the {placing}")]
    NoEmptySpace { placing: &'static str },

    #[error("could not place a reachable treasure after {attempts} attempts")]
    TreasureUnplaceable { attempts: u32 },

    #[error("could not place the monster after {attempts} attempts")]
    MonsterUnplaceable { attempts: u32 },

    #[error("placed {placed} pits on {tiles} tiles, at least {required} required")]
    PitDensity {
        placed: usize,
        required: usize,
        tiles: usize,
    },
}

/// Rejected turn requests.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnError {
    #[error("{0} is not part of this world")]
    UnknownPlayer(PlayerId),

    #[error("{player} acted out of turn, current player is {current}")]
    OutOfTurn { player: PlayerId, current: PlayerId },

    #[error("{action} is not a legal action for {player}")]
    IllegalAction { player: PlayerId, action: Action },
}

/// Snapshot encode/decode failures.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("failed to encode world snapshot: {0}")]
    Encode(#[source] bincode::Error),

    #[error("failed to decode world snapshot: {0}")]
    Decode(#[source] bincode::Error),
}

/// Any error raised by the engine.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Turn(#[from] TurnError),

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

/// Convenience Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = TurnError::OutOfTurn {
            player: PlayerId::new(1),
            current: PlayerId::new(0),
        };
        assert_eq!(
            err.to_string(),
            "Player 1 acted out of turn, current player is Player 0"
        );

        let err = TurnError::IllegalAction {
            player: PlayerId::new(0),
            action: Action::FireArrow,
        };
        assert_eq!(err.to_string(), "FireArrow is not a legal action for Player 0");

        let err = GenerationError::MonsterUnplaceable { attempts: 1000 };
        assert_eq!(err.to_string(), "could not place the monster after 1000 attempts");
    }

    #[test]
    fn test_engine_error_conversion() {
        let err: EngineError = GenerationError::NoPlayers.into();
        assert!(matches!(err, EngineError::Generation(GenerationError::NoPlayers)));
        assert_eq!(err.to_string(), "a world needs at least one player");

        let err: EngineError = TurnError::UnknownPlayer(PlayerId::new(4)).into();
        assert!(matches!(err, EngineError::Turn(_)));
    }
}

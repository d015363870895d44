//! What a player is allowed to see.
//!
//! An observation carries the acting explorer's own state and percepts, and
//! nothing about the map.

use serde::{Deserialize, Serialize};

use crate::core::{Direction, PlayerId};
use crate::world::{sense, HeldItems, PlayerStatus, Percepts, World};

/// A player's filtered view of a world.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    pub player: PlayerId,
    pub status: PlayerStatus,
    /// Empty once the player is terminal.
    pub percepts: Percepts,
    /// `None` if the player has no explorer.
    pub facing: Option<Direction>,
    /// Held items, bottom of the stack first.
    pub held: HeldItems,
}

/// Observe `world` as `player`. `None` for unknown players.
#[must_use]
pub fn observe(player: PlayerId, world: &World) -> Option<Observation> {
    let status = world.status(player)?;
    let explorer = world.explorer(player);

    Some(Observation {
        player,
        status,
        percepts: sense(world, player),
        facing: explorer.map(|x| x.facing()),
        held: explorer.map(|x| x.held().iter().copied().collect()).unwrap_or_default(),
    })
}

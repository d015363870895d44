//! Percepts: what an explorer senses from its current surroundings.
//!
//! Percepts are derived from a world on demand and never stored.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::entity::{Entity, Occupant};
use super::state::{PlayerStatus, World};
use crate::core::PlayerId;

/// A sensory cue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Percept {
    /// A pit is cardinal-adjacent.
    Breeze,
    /// A monster is cardinal-adjacent.
    Stench,
    /// The treasure lies on the current tile.
    Glitter,
    /// The last move ran into the edge of the grid.
    Bump,
}

/// A set of percepts, ordered for stable output.
pub type Percepts = BTreeSet<Percept>;

/// Percepts for `player` in `world`.
///
/// Empty for unknown players, players without an explorer and players in a
/// terminal status.
#[must_use]
pub fn sense(world: &World, player: PlayerId) -> Percepts {
    let mut percepts = Percepts::new();

    let Some(status) = world.status(player) else {
        return percepts;
    };
    if status.is_terminal() {
        return percepts;
    }
    let Some(explorer) = world.explorer(player) else {
        return percepts;
    };

    let here = explorer.position();
    for next in here.neighbors() {
        if world.grid().is_pit(next) {
            percepts.insert(Percept::Breeze);
        }
        if world
            .entities_at(next)
            .any(|e| matches!(e, Entity::Monster(_)))
        {
            percepts.insert(Percept::Stench);
        }
    }

    if world
        .entities_at(here)
        .any(|e| matches!(e, Entity::Treasure(_)))
    {
        percepts.insert(Percept::Glitter);
    }

    if status == PlayerStatus::RanIntoWall {
        percepts.insert(Percept::Bump);
    }

    percepts
}

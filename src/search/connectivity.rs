//! Reachability between two coordinates.
//!
//! Greedy best-first search: the frontier is ordered by squared Euclidean
//! distance to the goal and the search stops the moment the goal is popped.
//! Every passable neighbour is eventually enqueued, so the answer is exact
//! for reachability; the ordering only affects how quickly it is found.
//! Each coordinate is visited at most once, so the search always terminates.
//!
//! Movement is 4-directional.

use rustc_hash::FxHashSet;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::core::Coord;
use crate::world::World;

/// Whether an explorer could walk from `source` to `goal` in `world`.
///
/// Pits and live monsters block the way; explorers do not. False when either
/// coordinate lies outside the grid.
///
/// ```
/// use rust_wumpus::core::Coord;
/// use rust_wumpus::search::connected;
/// use rust_wumpus::world::{TileKind, World};
///
/// let mut world = World::new(3, 3, 1);
/// for y in 0..3 {
///     world.set_tile(Coord::new(1, y), TileKind::Pit);
/// }
/// assert!(!connected(Coord::new(0, 0), Coord::new(2, 2), &world));
///
/// world.set_tile(Coord::new(1, 1), TileKind::Empty);
/// assert!(connected(Coord::new(0, 0), Coord::new(2, 2), &world));
/// ```
#[must_use]
pub fn connected(source: Coord, goal: Coord, world: &World) -> bool {
    connected_by(source, goal, |c| world.contains(c), |c| world.is_walkable(c))
}

/// Best-first reachability over an arbitrary passability predicate.
///
/// `contains` bounds the search area; `is_passable` decides which in-bounds
/// neighbours may be entered. The source itself is never tested.
pub fn connected_by<C, P>(source: Coord, goal: Coord, contains: C, mut is_passable: P) -> bool
where
    C: Fn(Coord) -> bool,
    P: FnMut(Coord) -> bool,
{
    if !contains(source) || !contains(goal) {
        return false;
    }

    let mut frontier = BinaryHeap::new();
    let mut seen = FxHashSet::default();

    frontier.push(Reverse((source.distance_squared(goal), source)));
    seen.insert(source);

    while let Some(Reverse((_, current))) = frontier.pop() {
        if current == goal {
            return true;
        }

        for next in current.neighbors() {
            if !contains(next) || seen.contains(&next) {
                continue;
            }
            if !is_passable(next) {
                continue;
            }
            seen.insert(next);
            frontier.push(Reverse((next.distance_squared(goal), next)));
        }
    }

    false
}

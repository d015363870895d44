//! World model: terrain, entities, items, player statuses and percepts.
//!
//! ## Key Types
//!
//! - `Grid` / `Tile`: immutable terrain values keyed by coordinate
//! - `Entity`: ladder, monster, treasure, weapon or explorer
//! - `Item` / `Owner`: ownable entities and who holds them
//! - `World`: one complete game state
//! - `Percept`: sensory cues derived from a world

pub mod tile;
pub mod entity;
pub mod state;
pub mod percept;

pub use tile::{Grid, Tile, TileKind};
pub use entity::{Entity, Explorer, HeldItems, Item, Ladder, Monster, Occupant, Owner, Treasure, Weapon};
pub use state::{PlayerStatus, World};
pub use percept::{sense, Percept, Percepts};

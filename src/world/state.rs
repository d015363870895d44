//! World state: terrain, entities, player statuses and history.
//!
//! ## Value semantics
//!
//! A `World` is never changed after it has been handed out. The turn engine
//! clones a world (O(1), thanks to `im` persistent structures), edits the
//! clone and returns it as the next state.
//!
//! ## Invariants
//!
//! A world built by the generator holds exactly one ladder, exactly one
//! treasure (lying on a tile or carried), at most one monster and exactly one
//! explorer per player. The monster and pits never share a coordinate with
//! each other or with the ladder or the treasure.
//!
//! Explorers are the exception to "one impassable entity per tile": every
//! explorer starts on the ladder and explorers may share any tile. Walking
//! and connectivity ignore explorers (`World::is_walkable`).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, Explorer, Item, Ladder, Monster, Occupant, Treasure};
use super::tile::{Grid, TileKind};
use crate::core::{Action, ActionRecord, Coord, PlayerId, PlayerMap, SnapshotError};

/// Per-player status.
///
/// `Ok` and `RanIntoWall` are live; the other three end the player's game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerStatus {
    #[default]
    Ok,
    RanIntoWall,
    Eaten,
    FellToDeath,
    EscapedWithTreasure,
}

impl PlayerStatus {
    /// Whether the player's participation is over.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            PlayerStatus::Eaten | PlayerStatus::FellToDeath | PlayerStatus::EscapedWithTreasure
        )
    }
}

impl std::fmt::Display for PlayerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PlayerStatus::Ok => "OK",
            PlayerStatus::RanIntoWall => "ran into a wall",
            PlayerStatus::Eaten => "eaten",
            PlayerStatus::FellToDeath => "fell to death",
            PlayerStatus::EscapedWithTreasure => "escaped with the treasure",
        };
        f.write_str(name)
    }
}

/// A complete game world.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct World {
    grid: Grid,
    entities: Vector<Entity>,
    statuses: PlayerMap<PlayerStatus>,
    current: PlayerId,
    turn: u32,
    history: Vector<ActionRecord>,
}

impl World {
    /// An empty world: all-empty terrain, no entities, every player OK.
    ///
    /// The first player is current and the turn counter starts at 1.
    #[must_use]
    pub fn new(width: i32, height: i32, player_count: usize) -> Self {
        Self {
            grid: Grid::new(width, height),
            entities: Vector::new(),
            statuses: PlayerMap::with_value(player_count, PlayerStatus::Ok),
            current: PlayerId::new(0),
            turn: 1,
            history: Vector::new(),
        }
    }

    // === Terrain ===

    /// The terrain grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn width(&self) -> i32 {
        self.grid.width()
    }

    #[must_use]
    pub fn height(&self) -> i32 {
        self.grid.height()
    }

    /// Whether `coord` is inside the grid.
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        self.grid.contains(coord)
    }

    /// Swap in a new tile of `kind` at `coord`.
    pub fn set_tile(&mut self, coord: Coord, kind: TileKind) {
        self.grid.replace(coord, kind);
    }

    /// Whether a path may cross `coord`: inside the grid, passable terrain,
    /// and only passable entities on it.
    #[must_use]
    pub fn is_passable(&self, coord: Coord) -> bool {
        self.grid.tile(coord).is_some_and(|t| t.is_passable())
            && self.entities_at(coord).all(Occupant::is_passable)
    }

    /// Whether an explorer can walk across `coord`: like `is_passable`, but
    /// other explorers never block the way.
    #[must_use]
    pub fn is_walkable(&self, coord: Coord) -> bool {
        self.grid.tile(coord).is_some_and(|t| t.is_passable())
            && self
                .entities_at(coord)
                .filter(|e| e.as_explorer().is_none())
                .all(Occupant::is_passable)
    }

    /// Whether `coord` is empty terrain holding no entity.
    #[must_use]
    pub fn is_vacant(&self, coord: Coord) -> bool {
        self.grid
            .tile(coord)
            .is_some_and(|t| t.kind() == TileKind::Empty)
            && self.entities_at(coord).next().is_none()
    }

    /// Every vacant coordinate, in row-major order.
    #[must_use]
    pub fn vacant_coords(&self) -> Vec<Coord> {
        self.grid
            .tiles()
            .map(|t| t.coord())
            .filter(|&c| self.is_vacant(c))
            .collect()
    }

    // === Entities ===

    /// All entities lying in the world. Held items are inside explorers.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Entities at `coord`.
    pub fn entities_at(&self, coord: Coord) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(move |e| e.position() == coord)
    }

    /// Add an entity.
    pub fn add_entity(&mut self, entity: impl Into<Entity>) {
        self.entities.push_back(entity.into());
    }

    /// The ladder.
    #[must_use]
    pub fn ladder(&self) -> Option<&Ladder> {
        self.entities.iter().find_map(|e| match e {
            Entity::Ladder(l) => Some(l),
            _ => None,
        })
    }

    /// The monster, if the world has one.
    #[must_use]
    pub fn monster(&self) -> Option<&Monster> {
        self.entities.iter().find_map(Entity::as_monster)
    }

    /// The treasure, wherever it is: on a tile or carried.
    #[must_use]
    pub fn treasure(&self) -> Option<Treasure> {
        self.entities
            .iter()
            .find_map(|e| match e {
                Entity::Treasure(t) => Some(*t),
                _ => None,
            })
            .or_else(|| {
                self.explorers()
                    .flat_map(|x| x.held().iter())
                    .find_map(|item| match item {
                        Item::Treasure(t) => Some(*t),
                        Item::Weapon(_) => None,
                    })
            })
    }

    /// All explorers.
    pub fn explorers(&self) -> impl Iterator<Item = &Explorer> {
        self.entities.iter().filter_map(Entity::as_explorer)
    }

    /// The explorer controlled by `player`.
    #[must_use]
    pub fn explorer(&self, player: PlayerId) -> Option<&Explorer> {
        self.explorers().find(|x| x.player() == player)
    }

    /// Replace the explorer belonging to `explorer.player()`, or add it.
    pub fn set_explorer(&mut self, explorer: Explorer) {
        let slot = self
            .entities
            .iter()
            .position(|e| e.as_explorer().is_some_and(|x| x.player() == explorer.player()));
        match slot {
            Some(index) => {
                self.entities.set(index, Entity::Explorer(explorer));
            }
            None => self.entities.push_back(Entity::Explorer(explorer)),
        }
    }

    /// Replace the monster at `monster.position()`.
    pub fn set_monster(&mut self, monster: Monster) {
        let slot = self.entities.iter().position(|e| {
            e.as_monster()
                .is_some_and(|m| m.position() == monster.position())
        });
        if let Some(index) = slot {
            self.entities.set(index, Entity::Monster(monster));
        }
    }

    /// Take the first item lying at `coord` out of the world.
    pub fn take_item_at(&mut self, coord: Coord) -> Option<Item> {
        let index = self
            .entities
            .iter()
            .position(|e| e.position() == coord && e.as_item().is_some())?;
        self.entities.remove(index).as_item()
    }

    /// Put an item into the world at its owner's position.
    pub fn put_item(&mut self, item: Item) {
        self.entities.push_back(item.into());
    }

    // === Players ===

    /// Number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.statuses.player_count()
    }

    /// Roster in turn order.
    pub fn players(&self) -> impl Iterator<Item = PlayerId> {
        self.statuses.player_ids()
    }

    /// Status of `player`, or `None` for an unknown player.
    #[must_use]
    pub fn status(&self, player: PlayerId) -> Option<PlayerStatus> {
        self.statuses.try_get(player).copied()
    }

    /// All statuses.
    #[must_use]
    pub fn statuses(&self) -> &PlayerMap<PlayerStatus> {
        &self.statuses
    }

    /// Set `player`'s status. Unknown players are ignored.
    pub fn set_status(&mut self, player: PlayerId, status: PlayerStatus) {
        if self.statuses.contains(player) {
            self.statuses[player] = status;
        }
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    /// Whether every player has reached a terminal status.
    #[must_use]
    pub fn all_finished(&self) -> bool {
        self.statuses.iter().all(|(_, s)| s.is_terminal())
    }

    // === History ===

    /// Round number, starting at 1.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Every resolved action, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Record `action` by `player` and pass the turn on.
    ///
    /// The turn goes to the next roster player, cyclically, whose status is
    /// not terminal. If nobody is left the current player stays. Wrapping
    /// past the end of the roster starts a new round.
    pub fn record_and_advance(&mut self, player: PlayerId, action: Action) {
        let sequence = u32::try_from(self.history.len()).unwrap_or(u32::MAX);
        self.history
            .push_back(ActionRecord::new(player, action, self.turn, sequence));

        let count = self.player_count();
        if count == 0 {
            return;
        }
        let start = self.current.index();
        for step in 1..=count {
            let index = (start + step) % count;
            let candidate = PlayerId::new(index as u8);
            if !self.statuses[candidate].is_terminal() {
                if index <= start {
                    self.turn += 1;
                }
                self.current = candidate;
                return;
            }
        }
    }

    // === Snapshots ===

    /// Encode this world as a bincode snapshot.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(SnapshotError::Encode)
    }

    /// Decode a world from a bincode snapshot.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        bincode::deserialize(bytes).map_err(SnapshotError::Decode)
    }
}

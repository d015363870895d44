//! Entities: everything that occupies a position independently of terrain.
//!
//! All entities are value types. Every state change (a monster slain, an
//! explorer stepping forward, an item changing hands) builds a new value and
//! leaves the old one untouched, so worlds handed out earlier never change.
//!
//! ## Capabilities
//!
//! Every entity implements [`Occupant`] (position and passability) and
//! `Clone`, which is the "duplicate as an independent copy" capability.
//!
//! ## Items and ownership
//!
//! Treasure and weapons are items. An item's [`Owner`] is either a tile or
//! an explorer, and the item's position is always its owner's position.
//! Moving an item between owners rebinds a copy; see [`Item::with_owner`].

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Coord, Direction, PlayerId};

/// Position and passability, shared by every entity.
pub trait Occupant {
    /// Where the entity is.
    fn position(&self) -> Coord;

    /// Whether an explorer path may cross the entity's tile.
    fn is_passable(&self) -> bool;
}

/// Who holds an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Owner {
    /// Lying on the tile at this coordinate.
    Tile(Coord),
    /// Carried by `player`'s explorer, currently standing at `at`.
    Explorer { player: PlayerId, at: Coord },
}

impl Owner {
    /// The owner's position.
    #[must_use]
    pub const fn position(&self) -> Coord {
        match *self {
            Owner::Tile(coord) => coord,
            Owner::Explorer { at, .. } => at,
        }
    }

    /// The carrying player, if held.
    #[must_use]
    pub const fn player(&self) -> Option<PlayerId> {
        match *self {
            Owner::Tile(_) => None,
            Owner::Explorer { player, .. } => Some(player),
        }
    }
}

/// The exit. Always passable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ladder {
    position: Coord,
}

impl Ladder {
    #[must_use]
    pub const fn new(position: Coord) -> Self {
        Self { position }
    }
}

impl Occupant for Ladder {
    fn position(&self) -> Coord {
        self.position
    }

    fn is_passable(&self) -> bool {
        true
    }
}

/// The monster. Impassable while alive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Monster {
    position: Coord,
    alive: bool,
}

impl Monster {
    /// A live monster.
    #[must_use]
    pub const fn new(position: Coord) -> Self {
        Self {
            position,
            alive: true,
        }
    }

    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.alive
    }

    /// The slain version of this monster. Slaying is irreversible and a
    /// second call changes nothing.
    #[must_use]
    pub const fn slain(&self) -> Self {
        Self {
            position: self.position,
            alive: false,
        }
    }
}

impl Occupant for Monster {
    fn position(&self) -> Coord {
        self.position
    }

    fn is_passable(&self) -> bool {
        !self.alive
    }
}

/// The treasure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Treasure {
    owner: Owner,
}

impl Treasure {
    #[must_use]
    pub const fn new(owner: Owner) -> Self {
        Self { owner }
    }

    #[must_use]
    pub const fn owner(&self) -> Owner {
        self.owner
    }

    /// Whether an explorer is carrying it.
    #[must_use]
    pub const fn is_carried(&self) -> bool {
        matches!(self.owner, Owner::Explorer { .. })
    }
}

impl Occupant for Treasure {
    fn position(&self) -> Coord {
        self.owner.position()
    }

    fn is_passable(&self) -> bool {
        true
    }
}

/// A single-use weapon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Weapon {
    owner: Owner,
    charged: bool,
}

impl Weapon {
    /// A charged weapon.
    #[must_use]
    pub const fn new(owner: Owner) -> Self {
        Self {
            owner,
            charged: true,
        }
    }

    #[must_use]
    pub const fn owner(&self) -> Owner {
        self.owner
    }

    #[must_use]
    pub const fn is_charged(&self) -> bool {
        self.charged
    }

    /// Fire the weapon.
    ///
    /// Returns the spent weapon and whether a charge was available. Firing a
    /// spent weapon returns it unchanged with `false`.
    #[must_use]
    pub const fn fire(&self) -> (Self, bool) {
        let spent = Self {
            owner: self.owner,
            charged: false,
        };
        (spent, self.charged)
    }
}

impl Occupant for Weapon {
    fn position(&self) -> Coord {
        self.owner.position()
    }

    fn is_passable(&self) -> bool {
        true
    }
}

/// An ownable entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Item {
    Treasure(Treasure),
    Weapon(Weapon),
}

impl Item {
    #[must_use]
    pub const fn owner(&self) -> Owner {
        match self {
            Item::Treasure(t) => t.owner,
            Item::Weapon(w) => w.owner,
        }
    }

    /// A copy of this item bound to `owner`.
    #[must_use]
    pub const fn with_owner(&self, owner: Owner) -> Self {
        match *self {
            Item::Treasure(_) => Item::Treasure(Treasure { owner }),
            Item::Weapon(w) => Item::Weapon(Weapon {
                owner,
                charged: w.charged,
            }),
        }
    }

    #[must_use]
    pub const fn is_treasure(&self) -> bool {
        matches!(self, Item::Treasure(_))
    }

    /// The weapon, if this item is one.
    #[must_use]
    pub const fn as_weapon(&self) -> Option<&Weapon> {
        match self {
            Item::Weapon(w) => Some(w),
            Item::Treasure(_) => None,
        }
    }
}

impl Occupant for Item {
    fn position(&self) -> Coord {
        self.owner().position()
    }

    fn is_passable(&self) -> bool {
        true
    }
}

/// Items carried by an explorer. The top of the stack is the last element.
pub type HeldItems = SmallVec<[Item; 2]>;

/// A player-controlled explorer.
///
/// Impassable. Carries an ordered stack of items and faces one of the four
/// cardinal directions.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Explorer {
    player: PlayerId,
    position: Coord,
    facing: Direction,
    held: HeldItems,
}

impl Explorer {
    /// An empty-handed explorer.
    #[must_use]
    pub fn new(player: PlayerId, position: Coord, facing: Direction) -> Self {
        Self {
            player,
            position,
            facing,
            held: SmallVec::new(),
        }
    }

    /// The controlling player.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.player
    }

    #[must_use]
    pub fn facing(&self) -> Direction {
        self.facing
    }

    /// Held items, bottom of the stack first.
    #[must_use]
    pub fn held(&self) -> &[Item] {
        &self.held
    }

    /// The owner value items held by this explorer carry.
    #[must_use]
    pub fn as_owner(&self) -> Owner {
        Owner::Explorer {
            player: self.player,
            at: self.position,
        }
    }

    /// Coordinate one step ahead.
    #[must_use]
    pub fn ahead(&self) -> Coord {
        self.position + self.facing.offset()
    }

    #[must_use]
    pub fn turned_left(&self) -> Self {
        Self {
            facing: self.facing.turn_left(),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn turned_right(&self) -> Self {
        Self {
            facing: self.facing.turn_right(),
            ..self.clone()
        }
    }

    /// This explorer relocated to `position`, held items rebound to follow.
    #[must_use]
    pub fn moved_to(&self, position: Coord) -> Self {
        let owner = Owner::Explorer {
            player: self.player,
            at: position,
        };
        Self {
            player: self.player,
            position,
            facing: self.facing,
            held: self.held.iter().map(|item| item.with_owner(owner)).collect(),
        }
    }

    /// This explorer with `item` pushed on top of its stack.
    #[must_use]
    pub fn grab(&self, item: &Item) -> Self {
        let mut next = self.clone();
        next.held.push(item.with_owner(self.as_owner()));
        next
    }

    /// Pop the most recently grabbed item, rebound to the current tile.
    ///
    /// Returns `None` when empty-handed.
    #[must_use]
    pub fn release(&self) -> Option<(Self, Item)> {
        let mut next = self.clone();
        let item = next.held.pop()?;
        let dropped = item.with_owner(Owner::Tile(self.position));
        Some((next, dropped))
    }

    #[must_use]
    pub fn holds_treasure(&self) -> bool {
        self.held.iter().any(Item::is_treasure)
    }

    /// Whether any held weapon still has its charge.
    #[must_use]
    pub fn has_charged_weapon(&self) -> bool {
        self.held
            .iter()
            .any(|item| item.as_weapon().is_some_and(Weapon::is_charged))
    }

    /// Spend the top-most charged weapon.
    ///
    /// Returns `None` when no held weapon has a charge.
    #[must_use]
    pub fn fire(&self) -> Option<Self> {
        let index = self
            .held
            .iter()
            .rposition(|item| item.as_weapon().is_some_and(Weapon::is_charged))?;
        let mut next = self.clone();
        if let Item::Weapon(weapon) = next.held[index] {
            let (spent, _) = weapon.fire();
            next.held[index] = Item::Weapon(spent);
        }
        Some(next)
    }
}

impl Occupant for Explorer {
    fn position(&self) -> Coord {
        self.position
    }

    fn is_passable(&self) -> bool {
        false
    }
}

/// Any entity placed in a world.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Entity {
    Ladder(Ladder),
    Monster(Monster),
    Treasure(Treasure),
    Weapon(Weapon),
    Explorer(Explorer),
}

impl Entity {
    /// The item view of a treasure or weapon.
    #[must_use]
    pub fn as_item(&self) -> Option<Item> {
        match self {
            Entity::Treasure(t) => Some(Item::Treasure(*t)),
            Entity::Weapon(w) => Some(Item::Weapon(*w)),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_explorer(&self) -> Option<&Explorer> {
        match self {
            Entity::Explorer(e) => Some(e),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_monster(&self) -> Option<&Monster> {
        match self {
            Entity::Monster(m) => Some(m),
            _ => None,
        }
    }
}

impl From<Item> for Entity {
    fn from(item: Item) -> Self {
        match item {
            Item::Treasure(t) => Entity::Treasure(t),
            Item::Weapon(w) => Entity::Weapon(w),
        }
    }
}

impl Occupant for Entity {
    fn position(&self) -> Coord {
        match self {
            Entity::Ladder(e) => e.position(),
            Entity::Monster(e) => e.position(),
            Entity::Treasure(e) => e.position(),
            Entity::Weapon(e) => e.position(),
            Entity::Explorer(e) => e.position(),
        }
    }

    fn is_passable(&self) -> bool {
        match self {
            Entity::Ladder(e) => e.is_passable(),
            Entity::Monster(e) => e.is_passable(),
            Entity::Treasure(e) => e.is_passable(),
            Entity::Weapon(e) => e.is_passable(),
            Entity::Explorer(e) => e.is_passable(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn explorer_at(x: i32, y: i32) -> Explorer {
        Explorer::new(PlayerId::new(0), Coord::new(x, y), Direction::East)
    }

    #[test]
    fn test_passability() {
        let at = Coord::new(0, 0);
        assert!(Ladder::new(at).is_passable());
        assert!(!Monster::new(at).is_passable());
        assert!(Monster::new(at).slain().is_passable());
        assert!(Treasure::new(Owner::Tile(at)).is_passable());
        assert!(Weapon::new(Owner::Tile(at)).is_passable());
        assert!(!explorer_at(0, 0).is_passable());
    }

    #[test]
    fn test_monster_slain_once() {
        let monster = Monster::new(Coord::new(2, 2));
        let dead = monster.slain();

        assert!(monster.is_alive());
        assert!(!dead.is_alive());
        assert_eq!(dead.slain(), dead);
        assert_eq!(dead.position(), Coord::new(2, 2));
    }

    #[test]
    fn test_weapon_single_use() {
        let weapon = Weapon::new(Owner::Tile(Coord::new(1, 1)));

        let (spent, had_charge) = weapon.fire();
        assert!(had_charge);
        assert!(!spent.is_charged());

        let (still_spent, had_charge) = spent.fire();
        assert!(!had_charge);
        assert_eq!(still_spent, spent);
    }

    #[test]
    fn test_grab_rebinds_owner() {
        let explorer = explorer_at(1, 2);
        let lying = Item::Treasure(Treasure::new(Owner::Tile(Coord::new(1, 2))));

        let holding = explorer.grab(&lying);

        assert!(holding.holds_treasure());
        assert!(!explorer.holds_treasure());
        let held = holding.held()[0];
        assert_eq!(held.owner().player(), Some(PlayerId::new(0)));
        assert_eq!(held.position(), Coord::new(1, 2));
        // The original item value is untouched.
        assert_eq!(lying.owner(), Owner::Tile(Coord::new(1, 2)));
    }

    #[test]
    fn test_held_items_follow_explorer() {
        let lying = Item::Weapon(Weapon::new(Owner::Tile(Coord::new(0, 0))));
        let explorer = explorer_at(0, 0).grab(&lying).moved_to(Coord::new(1, 0));

        assert_eq!(explorer.position(), Coord::new(1, 0));
        assert_eq!(explorer.held()[0].position(), Coord::new(1, 0));
    }

    #[test]
    fn test_release_is_lifo() {
        let at = Coord::new(3, 3);
        let treasure = Item::Treasure(Treasure::new(Owner::Tile(at)));
        let weapon = Item::Weapon(Weapon::new(Owner::Tile(at)));
        let explorer = explorer_at(3, 3).grab(&treasure).grab(&weapon);

        let (explorer, dropped) = explorer.release().unwrap();
        assert!(dropped.as_weapon().is_some());
        assert_eq!(dropped.owner(), Owner::Tile(at));
        assert!(explorer.holds_treasure());

        let (explorer, dropped) = explorer.release().unwrap();
        assert!(dropped.is_treasure());
        assert!(explorer.release().is_none());
    }

    #[test]
    fn test_fire_spends_top_charged_weapon() {
        let at = Coord::new(0, 0);
        let weapon = Item::Weapon(Weapon::new(Owner::Tile(at)));
        let armed = explorer_at(0, 0).grab(&weapon).grab(&weapon);

        let once = armed.fire().unwrap();
        assert!(once.has_charged_weapon());
        assert!(once.held()[0].as_weapon().unwrap().is_charged());
        assert!(!once.held()[1].as_weapon().unwrap().is_charged());

        let twice = once.fire().unwrap();
        assert!(!twice.has_charged_weapon());
        assert!(twice.fire().is_none());
        assert_eq!(twice.held().len(), 2);
    }

    #[test]
    fn test_turning() {
        let explorer = explorer_at(0, 0);
        assert_eq!(explorer.turned_left().facing(), Direction::North);
        assert_eq!(explorer.turned_right().facing(), Direction::South);
        assert_eq!(explorer.ahead(), Coord::new(1, 0));
    }

    #[test]
    fn test_entity_item_conversion() {
        let item = Item::Weapon(Weapon::new(Owner::Tile(Coord::new(2, 0))));
        let entity = Entity::from(item);

        assert_eq!(entity.as_item(), Some(item));
        assert_eq!(entity.position(), Coord::new(2, 0));
        assert!(entity.as_explorer().is_none());
        assert!(Entity::Ladder(Ladder::new(Coord::new(0, 0))).as_item().is_none());
    }
}

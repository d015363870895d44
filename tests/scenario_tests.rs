//! Hand-built scenarios with known outcomes.

use rust_wumpus::core::{Action, Coord, Direction, PlayerId};
use rust_wumpus::rules::{GameResult, RulesEngine, TurnEngine};
use rust_wumpus::search::connected;
use rust_wumpus::world::{Entity, Explorer, Ladder, Occupant, Owner, PlayerStatus, TileKind, Treasure, World};

fn player() -> PlayerId {
    PlayerId::new(0)
}

/// 4x4 world with the ladder at (0,0) and the treasure at (3,3).
fn corner_world() -> World {
    let mut world = World::new(4, 4, 1);
    world.add_entity(Entity::Ladder(Ladder::new(Coord::new(0, 0))));
    world.add_entity(Entity::Treasure(Treasure::new(Owner::Tile(Coord::new(3, 3)))));
    world
}

/// Before any pit is dug, the far corner reaches the ladder.
#[test]
fn test_corner_treasure_reaches_ladder() {
    let world = corner_world();
    assert!(connected(Coord::new(3, 3), Coord::new(0, 0), &world));
    assert!(connected(Coord::new(0, 0), Coord::new(3, 3), &world));
}

/// Walking east into a pit ends the game for that player.
#[test]
fn test_walk_into_pit() {
    let engine = TurnEngine::default();
    let mut world = corner_world();
    world.set_tile(Coord::new(2, 1), TileKind::Pit);
    world.set_explorer(Explorer::new(player(), Coord::new(1, 1), Direction::East));

    let t = engine.resolve(&world, player(), Action::MoveForward).unwrap();

    assert_eq!(t.status, PlayerStatus::FellToDeath);
    assert_eq!(t.world.explorer(player()).unwrap().position(), Coord::new(2, 1));
    assert!(engine.actions_for(player(), &t.world).is_empty());
    assert_eq!(engine.is_terminal(&t.world), Some(GameResult::NoWinner));
}

/// Climbing without the treasure does nothing.
#[test]
fn test_climb_without_treasure() {
    let engine = TurnEngine::default();
    let mut world = corner_world();
    world.set_explorer(Explorer::new(player(), Coord::new(0, 0), Direction::South));

    let t = engine.resolve(&world, player(), Action::Climb).unwrap();

    assert_eq!(t.status, PlayerStatus::Ok);
    assert_eq!(t.world.grid(), world.grid());
    assert!(t.world.entities().eq(world.entities()));
    assert_eq!(t.world.statuses(), world.statuses());
    assert!(!engine.actions_for(player(), &t.world).is_empty());

    // Only the bookkeeping moves on.
    assert_eq!(t.world.history().len(), 1);
    assert_eq!(t.world.history()[0].action, Action::Climb);
    assert_eq!(t.world.turn(), world.turn() + 1);
}

/// Fetch the treasure from the far corner and climb out.
#[test]
fn test_full_escape() {
    let engine = TurnEngine::default();
    let mut world = corner_world();
    world.set_explorer(Explorer::new(player(), Coord::new(0, 0), Direction::East));

    let route = [
        Action::MoveForward,
        Action::MoveForward,
        Action::MoveForward,
        Action::TurnRight,
        Action::MoveForward,
        Action::MoveForward,
        Action::MoveForward,
        Action::Grab,
        Action::TurnRight,
        Action::MoveForward,
        Action::MoveForward,
        Action::MoveForward,
        Action::TurnRight,
        Action::MoveForward,
        Action::MoveForward,
        Action::MoveForward,
        Action::Climb,
    ];
    let end = engine.play_out(&world, &route).unwrap();

    assert_eq!(end.status(player()), Some(PlayerStatus::EscapedWithTreasure));
    assert_eq!(engine.is_terminal(&end), Some(GameResult::Winner(player())));
    assert!(end.treasure().is_some_and(|t| t.is_carried()));
    assert_eq!(end.history().len(), route.len());
}

/// Bumping into the edge is reported once, then clears.
#[test]
fn test_bump_at_edge() {
    let engine = TurnEngine::default();
    let mut world = corner_world();
    world.set_explorer(Explorer::new(player(), Coord::new(0, 0), Direction::West));

    let t = engine.resolve(&world, player(), Action::MoveForward).unwrap();
    assert_eq!(t.status, PlayerStatus::RanIntoWall);
    assert!(t.percepts.contains(&rust_wumpus::Percept::Bump));
    assert_eq!(t.world.explorer(player()).unwrap().position(), Coord::new(0, 0));

    let t = engine.resolve(&t.world, player(), Action::TurnLeft).unwrap();
    assert_eq!(t.status, PlayerStatus::Ok);
    assert!(!t.percepts.contains(&rust_wumpus::Percept::Bump));
}

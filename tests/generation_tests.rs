//! World generation invariants.
//!
//! Every generated world must be solvable, keep the ladder's neighbours free
//! of pits and respect the configured pit density, or generation must fail
//! with a density error.

use proptest::prelude::*;

use rust_wumpus::core::{GameRng, GenerationError, GeneratorConfig};
use rust_wumpus::generation::WorldGenerator;
use rust_wumpus::search::connected;
use rust_wumpus::world::{Entity, Occupant, World};

fn generate(width: i32, height: i32, players: usize, seed: u64) -> Result<World, GenerationError> {
    WorldGenerator::default().generate(width, height, players, &mut GameRng::new(seed))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// The treasure reaches the ladder, and the ladder reaches the treasure.
    #[test]
    fn prop_generated_worlds_are_solvable(
        width in 4i32..14,
        height in 4i32..14,
        players in 1usize..5,
        seed in any::<u64>()
    ) {
        match generate(width, height, players, seed) {
            Ok(world) => {
                let ladder = world.ladder().unwrap().position();
                let treasure = world.treasure().unwrap().position();
                prop_assert!(connected(treasure, ladder, &world));
                prop_assert!(connected(ladder, treasure, &world));
            }
            Err(err) => {
                prop_assert!(matches!(err, GenerationError::PitDensity { .. }), "unexpected error: {:?}", err);
            }
        }
    }

    /// No pit is cardinal-adjacent to the ladder.
    #[test]
    fn prop_entrance_is_clear(
        width in 4i32..14,
        height in 4i32..14,
        seed in any::<u64>()
    ) {
        if let Ok(world) = generate(width, height, 1, seed) {
            let ladder = world.ladder().unwrap().position();
            for next in ladder.neighbors() {
                prop_assert!(!world.grid().is_pit(next));
            }
        }
    }

    /// The pit count lies inside the configured density range.
    #[test]
    fn prop_pit_density_in_range(
        width in 4i32..14,
        height in 4i32..14,
        seed in any::<u64>()
    ) {
        let range = GeneratorConfig::default().pit_density;
        match generate(width, height, 1, seed) {
            Ok(world) => {
                let tiles = world.grid().len();
                let pits = world.grid().pit_count();
                prop_assert!(pits >= range.min_count(tiles));
                prop_assert!(pits <= range.max_count(tiles));
            }
            Err(err) => {
                prop_assert!(matches!(err, GenerationError::PitDensity { .. }), "unexpected error: {:?}", err);
            }
        }
    }

    /// Same seed, same world.
    #[test]
    fn prop_generation_is_deterministic(
        width in 4i32..10,
        height in 4i32..10,
        players in 1usize..4,
        seed in any::<u64>()
    ) {
        prop_assert_eq!(
            generate(width, height, players, seed),
            generate(width, height, players, seed)
        );
    }
}

/// One ladder, one treasure, one monster, one explorer per player.
#[test]
fn test_entity_census() {
    let world = generate(10, 10, 4, 2024).unwrap();

    let ladders = world.entities().filter(|e| matches!(e, Entity::Ladder(_))).count();
    let treasures = world.entities().filter(|e| matches!(e, Entity::Treasure(_))).count();
    let monsters = world.entities().filter(|e| matches!(e, Entity::Monster(_))).count();

    assert_eq!(ladders, 1);
    assert_eq!(treasures, 1);
    assert_eq!(monsters, 1);
    assert_eq!(world.explorers().count(), 4);
    assert!(world.monster().unwrap().is_alive());
}

/// Monster and pits never share a tile with each other, the ladder or the
/// treasure.
#[test]
fn test_no_colocation() {
    for seed in 0..50 {
        let Ok(world) = generate(6, 6, 1, seed) else {
            continue;
        };
        let ladder = world.ladder().unwrap().position();
        let treasure = world.treasure().unwrap().position();
        let monster = world.monster().unwrap().position();

        assert_ne!(monster, ladder);
        assert_ne!(monster, treasure);
        assert_ne!(ladder, treasure);
        for coord in [ladder, treasure, monster] {
            assert!(!world.grid().is_pit(coord), "seed {seed}: pit at {coord}");
        }
    }
}

/// Different seeds give different worlds.
#[test]
fn test_different_seeds_differ() {
    let worlds: Vec<World> = (0..8).filter_map(|seed| generate(8, 8, 1, seed).ok()).collect();
    assert!(worlds.windows(2).any(|pair| pair[0] != pair[1]));
}

/// Invalid requests are rejected before anything is placed.
#[test]
fn test_invalid_requests() {
    assert!(matches!(
        generate(2, 10, 1, 0),
        Err(GenerationError::GridTooSmall { .. })
    ));
    assert_eq!(generate(8, 8, 0, 0), Err(GenerationError::NoPlayers));

    let strict = WorldGenerator::new(GeneratorConfig::default().with_min_size(8, 8));
    assert!(matches!(
        strict.generate(6, 6, 1, &mut GameRng::new(0)),
        Err(GenerationError::GridTooSmall { min_width: 8, min_height: 8, .. })
    ));
}

/// Generated worlds survive a snapshot.
#[test]
fn test_snapshot_of_generated_world() {
    let world = generate(9, 7, 2, 5).unwrap();
    let restored = World::from_bytes(&world.to_bytes().unwrap()).unwrap();
    assert_eq!(world, restored);
}

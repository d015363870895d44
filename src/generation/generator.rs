//! Solvable world generation.
//!
//! Placement runs in a fixed order, each step relying on the one before:
//!
//! 1. **Ladder** at a uniformly sampled coordinate.
//! 2. **Treasure** on a vacant coordinate connected to the ladder.
//! 3. **Monster** on a vacant coordinate that does not cut the
//!    treasure-to-ladder path.
//! 4. **Pits** up to a sampled density, each kept only if the path survives
//!    and the pit is not next to the ladder.
//!
//! Explorers are then put on the ladder. The connectivity check after every
//! obstacle is what guarantees the treasure can always be carried out.
//!
//! Every step has a bounded budget, so generation always terminates.

use tracing::{debug, info, trace, warn};

use crate::core::{Coord, Direction, GameRng, GenerationError, GeneratorConfig, PlayerId};
use crate::search::connected_by;
use crate::world::{Entity, Explorer, Item, Ladder, Monster, Owner, TileKind, Treasure, Weapon, World};

/// Builds worlds from a `GeneratorConfig`.
///
/// ```
/// use rust_wumpus::core::{GameRng, GeneratorConfig};
/// use rust_wumpus::generation::WorldGenerator;
/// use rust_wumpus::search::connected;
/// use rust_wumpus::world::Occupant;
///
/// let generator = WorldGenerator::new(GeneratorConfig::default());
/// let world = generator.generate(8, 8, 1, &mut GameRng::new(42)).unwrap();
///
/// let ladder = world.ladder().unwrap().position();
/// let treasure = world.treasure().unwrap().position();
/// assert!(connected(treasure, ladder, &world));
/// ```
#[derive(Clone, Debug, Default)]
pub struct WorldGenerator {
    config: GeneratorConfig,
}

impl WorldGenerator {
    /// Create a generator.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// The generator's configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a `width` x `height` world for `player_count` players.
    ///
    /// Fails when the request is invalid or a placement budget runs out.
    pub fn generate(
        &self,
        width: i32,
        height: i32,
        player_count: usize,
        rng: &mut GameRng,
    ) -> Result<World, GenerationError> {
        self.validate(width, height, player_count)?;

        let mut world = World::new(width, height, player_count);

        let ladder = self.place_ladder(&mut world, rng);
        let treasure = self.place_treasure(&mut world, ladder, rng)?;
        self.place_monster(&mut world, treasure, ladder, rng)?;
        let pits = self.place_pits(&mut world, treasure, ladder, rng)?;
        self.place_explorers(&mut world, ladder, rng);

        info!(
            width,
            height,
            players = player_count,
            pits,
            seed = rng.seed(),
            "generated world"
        );
        Ok(world)
    }

    fn validate(&self, width: i32, height: i32, player_count: usize) -> Result<(), GenerationError> {
        if width < self.config.min_width || height < self.config.min_height {
            return Err(GenerationError::GridTooSmall {
                width,
                height,
                min_width: self.config.min_width,
                min_height: self.config.min_height,
            });
        }
        if player_count == 0 {
            return Err(GenerationError::NoPlayers);
        }
        if player_count > self.config.max_players.min(usize::from(u8::MAX)) {
            return Err(GenerationError::TooManyPlayers(player_count));
        }
        let density = self.config.pit_density;
        if !density.is_valid() {
            return Err(GenerationError::InvalidDensityRange {
                min: density.min,
                max: density.max,
            });
        }
        Ok(())
    }

    fn place_ladder(&self, world: &mut World, rng: &mut GameRng) -> Coord {
        let ladder = Coord::new(
            rng.gen_range(0..world.width()),
            rng.gen_range(0..world.height()),
        );
        world.add_entity(Entity::Ladder(Ladder::new(ladder)));
        debug!(%ladder, "placed ladder");
        ladder
    }

    fn place_treasure(
        &self,
        world: &mut World,
        ladder: Coord,
        rng: &mut GameRng,
    ) -> Result<Coord, GenerationError> {
        let vacant = world.vacant_coords();
        if vacant.is_empty() {
            return Err(GenerationError::NoEmptySpace { placing: "treasure" });
        }

        for attempt in 0..self.config.treasure_retries {
            let Some(&candidate) = rng.choose(&vacant) else {
                break;
            };
            if connected_by(candidate, ladder, |c| world.contains(c), |c| world.is_walkable(c)) {
                world.add_entity(Entity::Treasure(Treasure::new(Owner::Tile(candidate))));
                debug!(treasure = %candidate, attempt, "placed treasure");
                return Ok(candidate);
            }
            trace!(%candidate, attempt, "treasure candidate cannot reach the ladder");
        }

        Err(GenerationError::TreasureUnplaceable {
            attempts: self.config.treasure_retries,
        })
    }

    fn place_monster(
        &self,
        world: &mut World,
        treasure: Coord,
        ladder: Coord,
        rng: &mut GameRng,
    ) -> Result<Coord, GenerationError> {
        let vacant = world.vacant_coords();
        if vacant.is_empty() {
            return Err(GenerationError::NoEmptySpace { placing: "monster" });
        }

        for attempt in 0..self.config.monster_retries {
            let Some(&candidate) = rng.choose(&vacant) else {
                break;
            };
            if still_solvable(world, treasure, ladder, candidate) {
                world.add_entity(Entity::Monster(Monster::new(candidate)));
                debug!(monster = %candidate, attempt, "placed monster");
                return Ok(candidate);
            }
            trace!(%candidate, attempt, "monster candidate would cut the escape path");
        }

        Err(GenerationError::MonsterUnplaceable {
            attempts: self.config.monster_retries,
        })
    }

    fn place_pits(
        &self,
        world: &mut World,
        treasure: Coord,
        ladder: Coord,
        rng: &mut GameRng,
    ) -> Result<usize, GenerationError> {
        let range = self.config.pit_density;
        let tiles = world.grid().len();
        let density = rng.gen_closed(range.min, range.max);
        let required = range.min_count(tiles);
        let quota = pit_quota(tiles, density, required, range.max_count(tiles));

        let mut candidates: Vec<Coord> = world
            .vacant_coords()
            .into_iter()
            .filter(|c| !c.is_adjacent(ladder))
            .collect();

        let mut placed = 0;
        let mut failures = 0;
        while placed < quota && failures < self.config.pit_failure_budget {
            if candidates.is_empty() {
                break;
            }
            let index = rng.gen_range_usize(0..candidates.len());
            let candidate = candidates[index];

            if still_solvable(world, treasure, ladder, candidate) {
                world.set_tile(candidate, TileKind::Pit);
                candidates.swap_remove(index);
                placed += 1;
                failures = 0;
                trace!(pit = %candidate, placed, quota, "placed pit");
            } else {
                failures += 1;
                trace!(%candidate, failures, "pit candidate would cut the escape path");
            }
        }

        if placed < quota {
            warn!(placed, quota, failures, "pit placement stopped early");
        }
        if placed < required {
            return Err(GenerationError::PitDensity {
                placed,
                required,
                tiles,
            });
        }

        debug!(placed, quota, density, "placed pits");
        Ok(placed)
    }

    fn place_explorers(&self, world: &mut World, ladder: Coord, rng: &GameRng) {
        let mut facing_rng = rng.for_context("facing");
        let players: Vec<PlayerId> = world.players().collect();

        for player in players {
            let facing = facing_rng
                .choose(&Direction::ALL)
                .copied()
                .unwrap_or(Direction::North);
            let mut explorer = Explorer::new(player, ladder, facing);
            if self.config.arm_explorers {
                let weapon = Item::Weapon(Weapon::new(explorer.as_owner()));
                explorer = explorer.grab(&weapon);
            }
            debug!(%player, %facing, armed = self.config.arm_explorers, "placed explorer");
            world.set_explorer(explorer);
        }
    }
}

/// Whether the treasure still reaches the ladder with `blocked` made
/// impassable.
fn still_solvable(world: &World, treasure: Coord, ladder: Coord, blocked: Coord) -> bool {
    connected_by(
        treasure,
        ladder,
        |c| world.contains(c),
        |c| c != blocked && world.is_walkable(c),
    )
}

/// Pit target for `density`, clamped to counts whose fraction stays within
/// the configured range.
fn pit_quota(tiles: usize, density: f64, min_count: usize, max_count: usize) -> usize {
    let target = (tiles as f64 * density).round() as usize;
    target.min(max_count).max(min_count)
}

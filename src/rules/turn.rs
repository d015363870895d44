//! The turn engine: one authoritative transition per submitted action.
//!
//! Each player's explorer runs a small state machine over `PlayerStatus`.
//! `OK` and `RanIntoWall` are live states; `Eaten`, `FellToDeath` and
//! `EscapedWithTreasure` absorb every later action.
//!
//! Resolution order:
//! 1. Reject unknown players, out-of-turn actions and illegal actions
//! 2. Clone the world and apply the action to the clone
//! 3. Record the action in history and pass the turn on
//! 4. Recompute percepts for the acting player

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::engine::{GameResult, RulesEngine};
use crate::core::{Action, Coord, GameRng, GenerationError, GeneratorConfig, PlayerId, TurnError};
use crate::generation::WorldGenerator;
use crate::world::{sense, Entity, Explorer, Occupant, PlayerStatus, Percepts, World};

/// Outcome of resolving one action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// The successor world.
    pub world: World,
    /// The acting player's status in `world`.
    pub status: PlayerStatus,
    /// What the acting player senses in `world`. Empty once terminal.
    pub percepts: Percepts,
}

/// Turn engine for the hunt.
#[derive(Clone, Debug, Default)]
pub struct TurnEngine {
    generator: WorldGenerator,
}

impl TurnEngine {
    /// Create a turn engine whose worlds come from `config`.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            generator: WorldGenerator::new(config),
        }
    }

    /// The world generator backing `new_world`.
    #[must_use]
    pub fn generator(&self) -> &WorldGenerator {
        &self.generator
    }

    /// Generate a fresh world for players `0..player_count`.
    pub fn new_world(
        &self,
        width: i32,
        height: i32,
        player_count: usize,
        seed: u64,
    ) -> Result<World, GenerationError> {
        let mut rng = GameRng::new(seed);
        self.generator.generate(width, height, player_count, &mut rng)
    }

    /// Legal actions for `player`.
    ///
    /// Empty when the player is unknown, finished or not on turn. FireArrow
    /// is listed only while a charged weapon is held.
    #[must_use]
    pub fn actions_for(&self, player: PlayerId, world: &World) -> Vec<Action> {
        let Some(status) = world.status(player) else {
            return Vec::new();
        };
        if status.is_terminal() || world.current_player() != player {
            return Vec::new();
        }
        let Some(explorer) = world.explorer(player) else {
            return Vec::new();
        };

        let armed = explorer.has_charged_weapon();
        Action::ALL
            .into_iter()
            .filter(|&action| action != Action::FireArrow || armed)
            .collect()
    }

    /// What `player` senses in `world`. Empty once terminal.
    #[must_use]
    pub fn percepts_for(&self, player: PlayerId, world: &World) -> Percepts {
        sense(world, player)
    }

    /// Resolve `action` by `player`, producing the next world.
    ///
    /// `world` is left untouched. A no-op (Grab with nothing underfoot,
    /// Release empty-handed, an unqualified Climb) leaves the board, entities
    /// and statuses as they were; only the bookkeeping moves on: the action
    /// is appended to history and the turn passes to the next player.
    pub fn resolve(&self, world: &World, player: PlayerId, action: Action) -> Result<Transition, TurnError> {
        if world.status(player).is_none() {
            return Err(TurnError::UnknownPlayer(player));
        }
        let current = world.current_player();
        if current != player {
            return Err(TurnError::OutOfTurn { player, current });
        }
        if !self.actions_for(player, world).contains(&action) {
            return Err(TurnError::IllegalAction { player, action });
        }
        let explorer = world
            .explorer(player)
            .cloned()
            .ok_or(TurnError::UnknownPlayer(player))?;

        let mut next = world.clone();
        let status = match action {
            Action::TurnLeft => {
                next.set_explorer(explorer.turned_left());
                PlayerStatus::Ok
            }
            Action::TurnRight => {
                next.set_explorer(explorer.turned_right());
                PlayerStatus::Ok
            }
            Action::MoveForward => move_forward(&mut next, &explorer),
            Action::Grab => {
                if let Some(item) = next.take_item_at(explorer.position()) {
                    next.set_explorer(explorer.grab(&item));
                }
                PlayerStatus::Ok
            }
            Action::Release => {
                if let Some((released, item)) = explorer.release() {
                    next.set_explorer(released);
                    next.put_item(item);
                }
                PlayerStatus::Ok
            }
            Action::FireArrow => {
                if let Some(spent) = explorer.fire() {
                    next.set_explorer(spent);
                    shoot(&mut next, &explorer);
                }
                PlayerStatus::Ok
            }
            Action::Climb => {
                let on_ladder = next
                    .ladder()
                    .is_some_and(|ladder| ladder.position() == explorer.position());
                if on_ladder && explorer.holds_treasure() {
                    PlayerStatus::EscapedWithTreasure
                } else {
                    PlayerStatus::Ok
                }
            }
        };

        next.set_status(player, status);
        next.record_and_advance(player, action);

        let percepts = sense(&next, player);
        debug!(
            %player,
            %action,
            %status,
            turn = next.turn(),
            next_player = %next.current_player(),
            "resolved action"
        );

        Ok(Transition {
            world: next,
            status,
            percepts,
        })
    }
}

/// Step `explorer` one tile ahead.
fn move_forward(world: &mut World, explorer: &Explorer) -> PlayerStatus {
    let destination = explorer.ahead();
    if !world.contains(destination) {
        return PlayerStatus::RanIntoWall;
    }

    let monster_waits = world
        .entities_at(destination)
        .filter_map(Entity::as_monster)
        .any(|m| m.is_alive());
    let pit = world.grid().is_pit(destination);

    world.set_explorer(explorer.moved_to(destination));

    if monster_waits {
        PlayerStatus::Eaten
    } else if pit {
        PlayerStatus::FellToDeath
    } else {
        PlayerStatus::Ok
    }
}

/// Slay the first live monster along `explorer`'s facing, up to the edge.
fn shoot(world: &mut World, explorer: &Explorer) {
    let step = explorer.facing().offset();
    let mut target: Coord = explorer.position() + step;

    while world.contains(target) {
        let live = world
            .entities_at(target)
            .filter_map(Entity::as_monster)
            .find(|m| m.is_alive())
            .copied();
        if let Some(monster) = live {
            world.set_monster(monster.slain());
            debug!(monster = %target, "monster slain");
            return;
        }
        target = target + step;
    }
}

impl RulesEngine for TurnEngine {
    fn legal_actions(&self, world: &World, player: PlayerId) -> Vec<Action> {
        self.actions_for(player, world)
    }

    fn apply_action(&self, world: &World, player: PlayerId, action: Action) -> Result<World, TurnError> {
        self.resolve(world, player, action).map(|t| t.world)
    }

    fn is_terminal(&self, world: &World) -> Option<GameResult> {
        if !world.all_finished() {
            return None;
        }
        let escaped = world
            .statuses()
            .iter()
            .filter(|(_, s)| **s == PlayerStatus::EscapedWithTreasure)
            .map(|(p, _)| p)
            .collect();
        Some(GameResult::from_escaped(escaped))
    }
}

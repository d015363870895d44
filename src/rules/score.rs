//! Per-player scoring.
//!
//! A score rewards escaping with the treasure, punishes dying and charges
//! for every action taken, with arrows costing extra.

use crate::core::{Action, PlayerId, PlayerMap, ScoreConfig};
use crate::world::{PlayerStatus, World};

/// Score for `player` in `world`. Unknown players score zero.
#[must_use]
pub fn score_for(player: PlayerId, world: &World, config: &ScoreConfig) -> i64 {
    let Some(status) = world.status(player) else {
        return 0;
    };

    let outcome = match status {
        PlayerStatus::EscapedWithTreasure => config.treasure_value,
        PlayerStatus::Eaten | PlayerStatus::FellToDeath => -config.death_penalty,
        PlayerStatus::Ok | PlayerStatus::RanIntoWall => 0,
    };

    let spent: i64 = world
        .history()
        .iter()
        .filter(|record| record.player == player)
        .map(|record| match record.action {
            Action::FireArrow => config.action_cost + config.arrow_cost,
            _ => config.action_cost,
        })
        .sum();

    outcome - spent
}

/// Scores for every player.
#[must_use]
pub fn scores(world: &World, config: &ScoreConfig) -> PlayerMap<i64> {
    PlayerMap::new(world.player_count(), |player| score_for(player, world, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_world_scores_zero() {
        let world = World::new(4, 4, 2);
        let all = scores(&world, &ScoreConfig::default());
        assert!(all.iter().all(|(_, s)| *s == 0));
    }

    #[test]
    fn test_costs_and_outcomes() {
        let config = ScoreConfig::default();
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);
        let mut world = World::new(4, 4, 2);

        world.record_and_advance(p0, Action::MoveForward);
        world.record_and_advance(p1, Action::FireArrow);
        world.record_and_advance(p0, Action::Climb);
        world.set_status(p0, PlayerStatus::EscapedWithTreasure);
        world.set_status(p1, PlayerStatus::Eaten);

        assert_eq!(score_for(p0, &world, &config), 1000 - 2);
        assert_eq!(score_for(p1, &world, &config), -1000 - 1 - 10);
        assert_eq!(score_for(PlayerId::new(9), &world, &config), 0);

        let all = scores(&world, &config);
        assert_eq!(all[p0], 998);
        assert_eq!(all[p1], -1011);
    }
}

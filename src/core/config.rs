//! Tuning configuration.
//!
//! - `DensityRange`: closed percentage range for pit density
//! - `GeneratorConfig`: world-generation limits and retry budgets
//! - `ScoreConfig`: scoring weights
//!
//! The retry budgets and density bounds are tuning values with no deeper
//! derivation. They are defaults, and every one can be overridden.

use serde::{Deserialize, Serialize};

/// Closed range `[min, max]` of tile fractions.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DensityRange {
    /// Lower bound, inclusive.
    pub min: f64,
    /// Upper bound, inclusive.
    pub max: f64,
}

impl DensityRange {
    /// Create a new range. Validity is checked by `is_valid`.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Both bounds lie in `[0, 1]` and `min <= max`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        (0.0..=1.0).contains(&self.min) && (0.0..=1.0).contains(&self.max) && self.min <= self.max
    }

    /// Whether `value` lies within the closed range.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Smallest tile count whose fraction of `tiles` reaches `min`.
    #[must_use]
    pub fn min_count(&self, tiles: usize) -> usize {
        (tiles as f64 * self.min).ceil() as usize
    }

    /// Largest tile count whose fraction of `tiles` stays within `max`.
    #[must_use]
    pub fn max_count(&self, tiles: usize) -> usize {
        (tiles as f64 * self.max).floor() as usize
    }
}

impl Default for DensityRange {
    fn default() -> Self {
        Self::new(0.12, 0.37)
    }
}

/// World generator configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Smallest accepted grid width.
    pub min_width: i32,

    /// Smallest accepted grid height.
    pub min_height: i32,

    /// Target pit density is sampled from this range.
    pub pit_density: DensityRange,

    /// Candidate draws for the treasure before giving up.
    pub treasure_retries: u32,

    /// Candidate draws for the monster before giving up.
    pub monster_retries: u32,

    /// Consecutive rejected pit candidates before pit placement stops.
    pub pit_failure_budget: u32,

    /// Every explorer starts holding one charged weapon.
    pub arm_explorers: bool,

    /// Most players a single world accepts.
    pub max_players: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_width: 4,
            min_height: 4,
            pit_density: DensityRange::default(),
            treasure_retries: 1000,
            monster_retries: 1000,
            pit_failure_budget: 50,
            arm_explorers: true,
            max_players: 255,
        }
    }
}

impl GeneratorConfig {
    /// Override the pit density range.
    #[must_use]
    pub fn with_pit_density(mut self, min: f64, max: f64) -> Self {
        self.pit_density = DensityRange::new(min, max);
        self
    }

    /// Override the monster retry budget.
    #[must_use]
    pub fn with_monster_retries(mut self, retries: u32) -> Self {
        self.monster_retries = retries;
        self
    }

    /// Override the treasure retry budget.
    #[must_use]
    pub fn with_treasure_retries(mut self, retries: u32) -> Self {
        self.treasure_retries = retries;
        self
    }

    /// Override the consecutive pit failure budget.
    #[must_use]
    pub fn with_pit_failure_budget(mut self, budget: u32) -> Self {
        self.pit_failure_budget = budget;
        self
    }

    /// Start explorers with or without a weapon.
    #[must_use]
    pub fn with_armed_explorers(mut self, armed: bool) -> Self {
        self.arm_explorers = armed;
        self
    }

    /// Override the minimum grid size.
    #[must_use]
    pub fn with_min_size(mut self, width: i32, height: i32) -> Self {
        self.min_width = width;
        self.min_height = height;
        self
    }
}

/// Scoring weights.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreConfig {
    /// Awarded for escaping with the treasure.
    pub treasure_value: i64,
    /// Deducted for being eaten or falling into a pit.
    pub death_penalty: i64,
    /// Deducted for every action taken.
    pub action_cost: i64,
    /// Deducted, on top of `action_cost`, for every arrow fired.
    pub arrow_cost: i64,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            treasure_value: 1000,
            death_penalty: 1000,
            action_cost: 1,
            arrow_cost: 10,
        }
    }
}

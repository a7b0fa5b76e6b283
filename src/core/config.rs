//! Session configuration.
//!
//! Hosts configure a session at startup with a `GameConfig`:
//! - `Scoring`: point values for each kind of move
//! - `history_capacity`: how many undo steps are kept
//! - `seed`: fixed seed for reproducible deals, or `None` for entropy
//!
//! Both types are serde-friendly so a host can load them from its own
//! settings file.

use serde::{Deserialize, Serialize};

/// Default number of undo snapshots kept.
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// Score deltas per move kind.
///
/// Deltas are applied one at a time and the running score is floored at
/// zero after each, so a penalty is never carried into a later gain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoring {
    pub waste_to_tableau: i32,
    pub waste_to_foundation: i32,
    pub tableau_to_foundation: i32,
    /// Turning a tableau card face-up, automatically or by hand.
    pub flip_card: i32,
    /// Turning the waste back over into the stock.
    pub recycle_stock: i32,
}

impl Default for Scoring {
    fn default() -> Self {
        Self {
            waste_to_tableau: 5,
            waste_to_foundation: 10,
            tableau_to_foundation: 10,
            flip_card: 5,
            recycle_stock: -100,
        }
    }
}

impl Scoring {
    /// Apply one delta to a score, flooring at zero.
    #[must_use]
    pub fn apply(score: u32, delta: i32) -> u32 {
        let next = i64::from(score) + i64::from(delta);
        u32::try_from(next.max(0)).unwrap_or(u32::MAX)
    }
}

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Score values.
    pub scoring: Scoring,

    /// Maximum undo snapshots kept. Oldest are dropped first.
    pub history_capacity: usize,

    /// Seed for the deal RNG. `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            scoring: Scoring::default(),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed deal seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the score values.
    #[must_use]
    pub fn with_scoring(mut self, scoring: Scoring) -> Self {
        self.scoring = scoring;
        self
    }

    /// Set the undo depth.
    #[must_use]
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scoring() {
        let s = Scoring::default();
        assert_eq!(s.waste_to_tableau, 5);
        assert_eq!(s.waste_to_foundation, 10);
        assert_eq!(s.tableau_to_foundation, 10);
        assert_eq!(s.flip_card, 5);
        assert_eq!(s.recycle_stock, -100);
    }

    #[test]
    fn test_apply_floors_at_zero() {
        assert_eq!(Scoring::apply(50, -100), 0);
        assert_eq!(Scoring::apply(30, -100), 0);
        assert_eq!(Scoring::apply(0, 10), 10);
        assert_eq!(Scoring::apply(150, -100), 50);
    }

    #[test]
    fn test_floor_is_per_delta() {
        // -100 from 30 floors to 0 before the +10 is added.
        let score = Scoring::apply(Scoring::apply(30, -100), 10);
        assert_eq!(score, 10);
    }

    #[test]
    fn test_config_builder() {
        let config = GameConfig::new()
            .with_seed(7)
            .with_history_capacity(10)
            .with_scoring(Scoring {
                recycle_stock: -20,
                ..Scoring::default()
            });

        assert_eq!(config.seed, Some(7));
        assert_eq!(config.history_capacity, 10);
        assert_eq!(config.scoring.recycle_stock, -20);
        assert_eq!(config.scoring.flip_card, 5);
    }

    #[test]
    fn test_config_serde_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"seed": 3}"#).unwrap();
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.history_capacity, DEFAULT_HISTORY_CAPACITY);
        assert_eq!(config.scoring, Scoring::default());

        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}

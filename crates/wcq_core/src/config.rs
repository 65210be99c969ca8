//! # Simulation Configuration
//!
//! Every tunable number in one place. Rulebook facts (group counts, slot
//! counts) stay in the confederation drivers; this covers the match model
//! and the global knobs around it.
//!
//! ```rust
//! use wcq_core::config::SimConfig;
//!
//! let config = SimConfig::default();
//! let calm = SimConfig::low_variance();
//! assert!(calm.match_model.goal_std_dev < config.match_model.goal_std_dev);
//! ```

use crate::data::DEFAULT_RATING;
use crate::engine::match_sim::MAX_EXPECTED_GOALS;
use crate::engine::MatchModel;
use crate::error::{Result, SimError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Places at the finals.
pub const TOURNAMENT_SIZE: usize = 48;
/// Largest accepted `|rating_scale|`; 0.01 already makes a 500-point gap worth e^5.
pub const MAX_RATING_SCALE: f64 = 0.01;
pub const MAX_GOAL_STD_DEV: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub match_model: MatchModel,
    /// Rating for teams absent from the rating table
    pub default_rating: f64,
    /// Qualifiers per iteration after normalisation
    pub tournament_size: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            match_model: MatchModel::default(),
            default_rating: DEFAULT_RATING,
            tournament_size: TOURNAMENT_SIZE,
        }
    }
}

impl SimConfig {
    /// Tighter score spread; results follow ratings more closely.
    pub fn low_variance() -> Self {
        let mut cfg = Self::default();
        cfg.match_model.goal_std_dev = 0.5;
        cfg
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(json)
            .map_err(|e| SimError::Config(format!("cannot parse config: {}", e)))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        let m = &self.match_model;
        if !(m.base_goals > 0.0 && m.base_goals <= MAX_EXPECTED_GOALS) {
            return Err(SimError::Config(format!(
                "match_model.base_goals must be in (0, {}], got {}",
                MAX_EXPECTED_GOALS, m.base_goals
            )));
        }
        if !(m.rating_scale.is_finite() && m.rating_scale.abs() <= MAX_RATING_SCALE) {
            return Err(SimError::Config(format!(
                "match_model.rating_scale must be within ±{}, got {}",
                MAX_RATING_SCALE, m.rating_scale
            )));
        }
        if !(m.goal_std_dev > 0.0 && m.goal_std_dev <= MAX_GOAL_STD_DEV) {
            return Err(SimError::Config(format!(
                "match_model.goal_std_dev must be in (0, {}], got {}",
                MAX_GOAL_STD_DEV, m.goal_std_dev
            )));
        }
        if !self.default_rating.is_finite() {
            return Err(SimError::Config("default_rating must be finite".into()));
        }
        if self.tournament_size == 0 {
            return Err(SimError::Config("tournament_size must be at least 1".into()));
        }
        Ok(())
    }
}

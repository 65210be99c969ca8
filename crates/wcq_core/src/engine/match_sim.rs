//! # Match Model
//!
//! Rating differential → expected goals → sampled score.
//!
//! ## Formula
//! - expected goals (X vs Y) = `base_goals · exp(rating_scale · (rating_X − rating_Y))`
//! - realised goals = `floor(N(expected, goal_std_dev) + 0.5)`, clamped at zero
//!
//! Equal ratings give equal means. Huge differentials push the weaker side
//! to zero while the stronger side can run up large scores; accepted noise.

use super::SimRng;
use crate::models::Team;
use rand_distr::{Distribution, StandardNormal};
use serde::{Deserialize, Serialize};

pub const BASE_GOALS: f64 = 1.3;
pub const RATING_SCALE: f64 = 0.002;
pub const GOAL_STD_DEV: f64 = 1.0;
/// Ceiling on either side's expectation; an overflowing exponent lands here.
pub const MAX_EXPECTED_GOALS: f64 = 20.0;
/// Ceiling on a realised score.
pub const MAX_GOALS: u32 = 99;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchModel {
    /// Expected goals for either side when ratings are equal
    pub base_goals: f64,
    /// Exponential sensitivity to the rating gap
    pub rating_scale: f64,
    /// Spread of the realised score around the expectation
    pub goal_std_dev: f64,
}

impl Default for MatchModel {
    fn default() -> Self {
        Self {
            base_goals: BASE_GOALS,
            rating_scale: RATING_SCALE,
            goal_std_dev: GOAL_STD_DEV,
        }
    }
}

impl MatchModel {
    /// (expected goals for A, expected goals for B)
    pub fn expected_goals(&self, rating_a: f64, rating_b: f64) -> (f64, f64) {
        let diff = rating_a - rating_b;
        let capped = |xg: f64| xg.min(MAX_EXPECTED_GOALS);
        (
            capped(self.base_goals * (self.rating_scale * diff).exp()),
            capped(self.base_goals * (-self.rating_scale * diff).exp()),
        )
    }

    /// Plays one match and returns (goals for A, goals for B).
    pub fn simulate(&self, a: &Team, b: &Team, rng: &mut SimRng) -> (u32, u32) {
        let (xg_a, xg_b) = self.expected_goals(a.rating, b.rating);
        let goals_a = self.sample_goals(xg_a, rng);
        let goals_b = self.sample_goals(xg_b, rng);
        tracing::trace!(home = %a.name, away = %b.name, goals_a, goals_b, "match");
        (goals_a, goals_b)
    }

    fn sample_goals(&self, expected: f64, rng: &mut SimRng) -> u32 {
        let z: f64 = StandardNormal.sample(rng);
        let goals = (expected + self.goal_std_dev * z + 0.5).floor();
        if goals > 0.0 {
            goals.min(MAX_GOALS as f64) as u32
        } else {
            0
        }
    }
}

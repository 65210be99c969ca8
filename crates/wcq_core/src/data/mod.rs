//! Reference data
//!
//! Read-only inputs shared by every iteration:
//! - Rating table (team → rating, confederation)
//! - Live standings (confederation → group → partial records)
//! - Static qualifier lists (hosts, pre-qualified, OFC, UEFA pool)

pub mod embedded;
pub mod qualifiers;
pub mod ratings;
pub mod standings;

pub use qualifiers::StaticQualifiers;
pub use ratings::{RatingEntry, RatingTable, DEFAULT_RATING};
pub use standings::{LiveStandings, SeedRow};

use crate::error::{Result, SimError};

/// Everything the pipeline reads but never mutates.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub ratings: RatingTable,
    pub standings: LiveStandings,
    pub qualifiers: StaticQualifiers,
}

impl ReferenceData {
    pub fn new(ratings: RatingTable, standings: LiveStandings, qualifiers: StaticQualifiers) -> Self {
        Self {
            ratings,
            standings,
            qualifiers,
        }
    }

    /// Parses the tables embedded at compile time.
    pub fn embedded() -> Result<Self> {
        Self::from_json(
            embedded::RATINGS_JSON,
            embedded::STANDINGS_JSON,
            embedded::QUALIFIERS_JSON,
        )
    }

    pub fn from_json(ratings: &str, standings: &str, qualifiers: &str) -> Result<Self> {
        let entries: Vec<RatingEntry> =
            serde_json::from_str(ratings).map_err(SimError::data("ratings"))?;
        let standings: LiveStandings =
            serde_json::from_str(standings).map_err(SimError::data("standings"))?;
        let qualifiers: StaticQualifiers =
            serde_json::from_str(qualifiers).map_err(SimError::data("qualifiers"))?;

        tracing::debug!(teams = entries.len(), "reference data loaded");
        Ok(Self::new(RatingTable::new(entries), standings, qualifiers))
    }

    pub fn with_default_rating(mut self, rating: f64) -> Self {
        self.ratings.set_default_rating(rating);
        self
    }
}

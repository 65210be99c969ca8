//! Rating table: team name → strength scalar and confederation.

use crate::models::{team::sort_by_rating_desc, Confederation, Team};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Rating assigned to teams absent from the table.
pub const DEFAULT_RATING: f64 = 500.0;

/// One row of `ratings.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingEntry {
    pub team: String,
    pub confederation: Confederation,
    pub rating: f64,
}

#[derive(Debug, Clone)]
pub struct RatingTable {
    index: HashMap<String, usize>,
    /// Sorted by rating, highest first; file order breaks ties.
    ranked: Vec<Team>,
    default_rating: f64,
}

impl RatingTable {
    pub fn new(entries: Vec<RatingEntry>) -> Self {
        let mut ranked: Vec<Team> = Vec::with_capacity(entries.len());
        for entry in entries {
            // Later duplicates are ignored
            if ranked.iter().any(|t| t.name == entry.team) {
                continue;
            }
            ranked.push(Team::new(entry.team, entry.rating, entry.confederation));
        }
        sort_by_rating_desc(&mut ranked);

        let index = ranked
            .iter()
            .enumerate()
            .map(|(i, t)| (t.name.clone(), i))
            .collect();

        Self {
            index,
            ranked,
            default_rating: DEFAULT_RATING,
        }
    }

    pub fn with_default_rating(mut self, rating: f64) -> Self {
        self.default_rating = rating;
        self
    }

    pub fn set_default_rating(&mut self, rating: f64) {
        self.default_rating = rating;
    }

    pub fn default_rating(&self) -> f64 {
        self.default_rating
    }

    /// Looks a team up by name. Unknown names produce a synthetic team with
    /// the default rating so the pipeline keeps running on partial data.
    pub fn team(&self, name: &str) -> Team {
        match self.get(name) {
            Some(team) => team.clone(),
            None => {
                tracing::trace!(team = name, rating = self.default_rating, "team missing from rating table");
                Team::unaffiliated(name, self.default_rating)
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Team> {
        self.index.get(name).map(|&i| &self.ranked[i])
    }

    pub fn rating(&self, name: &str) -> f64 {
        self.get(name).map_or(self.default_rating, |t| t.rating)
    }

    pub fn confederation(&self, name: &str) -> Option<Confederation> {
        self.get(name).and_then(|t| t.confederation)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Every known team, strongest first.
    pub fn by_rating_desc(&self) -> impl Iterator<Item = &Team> {
        self.ranked.iter()
    }

    pub fn members_of(&self, confederation: Confederation) -> impl Iterator<Item = &Team> {
        self.ranked
            .iter()
            .filter(move |t| t.confederation == Some(confederation))
    }

    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(team: &str, conf: Confederation, rating: f64) -> RatingEntry {
        RatingEntry {
            team: team.to_string(),
            confederation: conf,
            rating,
        }
    }

    #[test]
    fn test_unknown_team_gets_default_rating() {
        let table = RatingTable::new(vec![entry("Spain", Confederation::UEFA, 2150.0)]);
        let ghost = table.team("Atlantis");
        assert_eq!(ghost.rating, DEFAULT_RATING);
        assert_eq!(ghost.confederation, None);

        let table = table.with_default_rating(320.0);
        assert_eq!(table.rating("Atlantis"), 320.0);
        assert_eq!(table.rating("Spain"), 2150.0);
    }

    #[test]
    fn test_ranked_order_and_lookup() {
        let table = RatingTable::new(vec![
            entry("Fiji", Confederation::OFC, 1200.0),
            entry("Japan", Confederation::AFC, 1920.0),
            entry("Iran", Confederation::AFC, 1820.0),
            entry("Japan", Confederation::AFC, 100.0),
        ]);
        let names: Vec<_> = table.by_rating_desc().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Japan", "Iran", "Fiji"]);
        assert_eq!(table.len(), 3);
        assert_eq!(table.confederation("Fiji"), Some(Confederation::OFC));
        assert_eq!(table.members_of(Confederation::AFC).count(), 2);
    }
}

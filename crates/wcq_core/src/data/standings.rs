//! Live standings: the partial group records a simulation starts from.

use super::RatingTable;
use crate::models::{Confederation, Group, GroupRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One team's results so far. Missing counts default to zero; played,
/// goal difference and points are always derived.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedRow {
    pub team: String,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
}

impl SeedRow {
    pub fn record(&self) -> GroupRecord {
        GroupRecord::from_results(
            self.wins,
            self.draws,
            self.losses,
            self.goals_for,
            self.goals_against,
        )
    }
}

/// confederation → group name → rows in seeding order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LiveStandings {
    confederations: BTreeMap<String, BTreeMap<String, Vec<SeedRow>>>,
}

impl LiveStandings {
    pub fn rows(&self, confederation: Confederation, group: &str) -> Option<&[SeedRow]> {
        self.confederations
            .get(confederation.as_str())
            .and_then(|groups| groups.get(group))
            .map(Vec::as_slice)
    }

    pub fn group_names(&self, confederation: Confederation) -> impl Iterator<Item = &str> {
        self.confederations
            .get(confederation.as_str())
            .into_iter()
            .flat_map(|groups| groups.keys().map(String::as_str))
    }

    /// Builds a simulation-ready group from the seed rows, if any exist.
    /// Each call yields fresh copies of the records.
    pub fn group(
        &self,
        confederation: Confederation,
        name: &str,
        target_matches_per_team: u32,
        ratings: &RatingTable,
    ) -> Option<Group> {
        let rows = self.rows(confederation, name)?;
        let mut group = Group::new(name, target_matches_per_team);
        for row in rows {
            group.push(ratings.team(&row.team), row.record());
        }
        Some(group)
    }

    pub fn insert(&mut self, confederation: Confederation, group: impl Into<String>, rows: Vec<SeedRow>) {
        self.confederations
            .entry(confederation.as_str().to_string())
            .or_default()
            .insert(group.into(), rows);
    }

    pub fn all_rows(&self) -> impl Iterator<Item = (&str, &str, &SeedRow)> {
        self.confederations.iter().flat_map(|(conf, groups)| {
            groups.iter().flat_map(move |(group, rows)| {
                rows.iter().map(move |row| (conf.as_str(), group.as_str(), row))
            })
        })
    }
}

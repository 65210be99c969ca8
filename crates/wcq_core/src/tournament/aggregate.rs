//! Cross-iteration counts of who qualified and how.

use crate::models::Qualifier;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Qualification counts per team and per (team, path).
///
/// Ordered maps keep every derived table reproducible byte for byte.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aggregate {
    pub iterations: u64,
    pub counts: BTreeMap<String, u64>,
    pub paths: BTreeMap<String, BTreeMap<String, u64>>,
}

impl Aggregate {
    pub fn record(&mut self, qualified: &[Qualifier]) {
        self.iterations += 1;
        for q in qualified {
            *self.counts.entry(q.team.name.clone()).or_default() += 1;
            *self
                .paths
                .entry(q.team.name.clone())
                .or_default()
                .entry(q.path.clone())
                .or_default() += 1;
        }
    }

    /// Count addition; associative and commutative.
    pub fn merge(mut self, other: Aggregate) -> Aggregate {
        self.iterations += other.iterations;
        for (team, count) in other.counts {
            *self.counts.entry(team).or_default() += count;
        }
        for (team, labels) in other.paths {
            let mine = self.paths.entry(team).or_default();
            for (label, count) in labels {
                *mine.entry(label).or_default() += count;
            }
        }
        self
    }

    pub fn count(&self, team: &str) -> u64 {
        self.counts.get(team).copied().unwrap_or(0)
    }

    pub fn probability(&self, team: &str) -> f64 {
        if self.iterations == 0 {
            return 0.0;
        }
        self.count(team) as f64 / self.iterations as f64
    }

    /// (team, probability), most likely first; name breaks ties.
    pub fn probabilities(&self) -> Vec<(String, f64)> {
        let mut rows: Vec<(String, u64)> = self.counts.iter().map(|(t, &c)| (t.clone(), c)).collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        rows.into_iter()
            .map(|(team, count)| (team, count as f64 / self.iterations as f64))
            .collect()
    }

    /// (path, probability) for one team, most likely first.
    pub fn path_probabilities(&self, team: &str) -> Vec<(String, f64)> {
        let Some(labels) = self.paths.get(team) else {
            return Vec::new();
        };
        let mut rows: Vec<(&String, &u64)> = labels.iter().collect();
        rows.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
        rows.into_iter()
            .map(|(label, &count)| (label.clone(), count as f64 / self.iterations as f64))
            .collect()
    }

    /// Sum of all team probabilities; equals the field size.
    pub fn expected_qualifiers(&self) -> f64 {
        if self.iterations == 0 {
            return 0.0;
        }
        self.counts.values().sum::<u64>() as f64 / self.iterations as f64
    }

    pub fn is_empty(&self) -> bool {
        self.iterations == 0
    }
}

//! # Qualification Pathways
//!
//! One driver per confederation. Each driver hard-codes its rulebook
//! (rounds, group sizes, slot counts) and composes the group and knockout
//! engines over the live standings.
//!
//! ## Failure policy
//! A group that is missing from the data, or has fewer teams than the
//! rules expect, is skipped: it produces no qualifiers and nobody from it
//! advances. The tournament normalizer makes up the shortfall.

pub mod afc;
pub mod caf;
pub mod concacaf;
pub mod conmebol;
pub mod icp;
pub mod ofc;
pub mod uefa;

pub use afc::Afc;
pub use caf::Caf;
pub use concacaf::Concacaf;
pub use conmebol::Conmebol;
pub use icp::inter_confederation_playoff;
pub use ofc::Ofc;
pub use uefa::Uefa;

use crate::data::ReferenceData;
use crate::engine::{simulate_group, GroupOutcome, MatchModel, SimRng, Slots};
use crate::models::team::sort_by_rating_desc;
use crate::models::{Confederation, Group, PathwayResult, Team};

/// Path labels attached to every qualifier.
pub mod labels {
    pub const AFC_PRE_QUALIFIED: &str = "AFC Pre-qualified";
    pub const AFC_THIRD_ROUND: &str = "AFC Third Round (Top 2)";
    pub const AFC_FOURTH_ROUND: &str = "AFC Fourth Round (Group Winner)";
    pub const CAF_GROUP_WINNER: &str = "CAF Group Winner";
    pub const HOST: &str = "Host Nation";
    pub const CONCACAF_THIRD_ROUND: &str = "CONCACAF Third Round (Group Winner)";
    pub const CONMEBOL_DIRECT: &str = "CONMEBOL Direct (Top 6)";
    pub const OFC_DIRECT: &str = "OFC Direct";
    pub const UEFA_GROUP_WINNER: &str = "UEFA Group Winner";
    pub const UEFA_PLAYOFF_PATHS: [&str; 3] = [
        "UEFA Playoff Path A",
        "UEFA Playoff Path B",
        "UEFA Playoff Path C",
    ];
    pub const ICP: &str = "Inter-confederation Playoff";
    pub const FILLER: &str = "FIFA Ranking Filler";
}

/// Read-only inputs for one driver call.
#[derive(Debug, Clone, Copy)]
pub struct SimContext<'a> {
    pub data: &'a ReferenceData,
    pub model: &'a MatchModel,
}

impl<'a> SimContext<'a> {
    pub fn new(data: &'a ReferenceData, model: &'a MatchModel) -> Self {
        Self { data, model }
    }

    pub fn team(&self, name: &str) -> Team {
        self.data.ratings.team(name)
    }

    /// A group seeded from live standings (fresh record copies).
    pub fn seeded_group(&self, confederation: Confederation, name: &str, target: u32) -> Option<Group> {
        self.data
            .standings
            .group(confederation, name, target, &self.data.ratings)
    }

    /// Simulates `group` if it has at least `expected_size` teams and
    /// records its final table in `result`. Under-populated groups are skipped.
    pub fn play_group(
        &self,
        result: &mut PathwayResult,
        group: Option<Group>,
        expected_size: usize,
        slots: Slots,
        rng: &mut SimRng,
    ) -> Option<GroupOutcome> {
        let group = group?;
        if group.len() < expected_size {
            tracing::debug!(
                confederation = %result.confederation,
                group = %group.name,
                size = group.len(),
                expected_size,
                "under-populated group skipped"
            );
            return None;
        }
        let outcome = simulate_group(&group, slots, self.model, rng);
        result.record_table(group.name.clone(), outcome.standings.clone());
        Some(outcome)
    }
}

/// The per-confederation seam. Drivers are stateless.
pub trait ConfederationDriver: Send + Sync {
    fn confederation(&self) -> Confederation;

    fn run(&self, ctx: &SimContext<'_>, rng: &mut SimRng) -> PathwayResult;
}

/// All six drivers in a fixed order. The order is part of the random
/// stream, so changing it changes seeded results.
pub const DRIVERS: [&dyn ConfederationDriver; 6] = [&Afc, &Caf, &Concacaf, &Conmebol, &Ofc, &Uefa];

pub fn driver_for(confederation: Confederation) -> &'static dyn ConfederationDriver {
    match confederation {
        Confederation::AFC => &Afc,
        Confederation::CAF => &Caf,
        Confederation::CONCACAF => &Concacaf,
        Confederation::CONMEBOL => &Conmebol,
        Confederation::OFC => &Ofc,
        Confederation::UEFA => &Uefa,
    }
}

/// The `count` highest-rated teams. Rating stands in for the real
/// cross-group tiebreaks (points, goal difference against common opponents).
pub fn best_by_rating(mut teams: Vec<Team>, count: usize) -> Vec<Team> {
    sort_by_rating_desc(&mut teams);
    teams.truncate(count);
    teams
}

/// Serpentine seeding: strongest to pot 0, then 1..k-1, then back down.
pub fn snake_distribute(mut teams: Vec<Team>, buckets: usize) -> Vec<Vec<Team>> {
    let mut out = vec![Vec::new(); buckets];
    if buckets == 0 {
        return out;
    }
    sort_by_rating_desc(&mut teams);
    for (i, team) in teams.into_iter().enumerate() {
        let lap = i / buckets;
        let pos = i % buckets;
        let idx = if lap % 2 == 0 { pos } else { buckets - 1 - pos };
        out[idx].push(team);
    }
    out
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::data::{LiveStandings, RatingEntry, RatingTable, ReferenceData, StaticQualifiers};
    use crate::models::Confederation;

    /// Minimal reference data for driver tests.
    pub fn data_with(
        ratings: &[(&str, Confederation, f64)],
        standings: LiveStandings,
        qualifiers: StaticQualifiers,
    ) -> ReferenceData {
        let entries = ratings
            .iter()
            .map(|&(team, confederation, rating)| RatingEntry {
                team: team.to_string(),
                confederation,
                rating,
            })
            .collect();
        ReferenceData::new(RatingTable::new(entries), standings, qualifiers)
    }
}

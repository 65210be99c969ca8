//! CAF: nine groups, winners qualify, the four best runners-up play off
//! for the inter-confederation playoff place.
//!
//! "Best" runners-up are ranked by rating. The real rule compares records
//! against the teams that finished first to fifth; that data is not
//! modelled, so rating is the proxy.

use super::labels::CAF_GROUP_WINNER;
use super::{best_by_rating, ConfederationDriver, SimContext};
use crate::engine::{knockout, SimRng, Slots};
use crate::models::{Confederation, PathwayResult};

/// (group, expected teams, matches per team). Group E lost a team to
/// withdrawal and plays a five-team double round-robin.
pub const GROUPS: [(&str, usize, u32); 9] = [
    ("A", 6, 10),
    ("B", 6, 10),
    ("C", 6, 10),
    ("D", 6, 10),
    ("E", 5, 8),
    ("F", 6, 10),
    ("G", 6, 10),
    ("H", 6, 10),
    ("I", 6, 10),
];

pub const RUNNERS_UP_PLAYOFF: usize = 4;

pub struct Caf;

impl ConfederationDriver for Caf {
    fn confederation(&self) -> Confederation {
        Confederation::CAF
    }

    fn run(&self, ctx: &SimContext<'_>, rng: &mut SimRng) -> PathwayResult {
        let mut result = PathwayResult::new(Confederation::CAF);
        let mut runners_up = Vec::new();

        for (name, size, matches) in GROUPS {
            let group = ctx.seeded_group(Confederation::CAF, name, matches);
            if let Some(outcome) = ctx.play_group(&mut result, group, size, Slots::new(1, 1), rng) {
                result.qualify_all(outcome.direct, CAF_GROUP_WINNER);
                runners_up.extend(outcome.playoff);
            }
        }

        let contenders = best_by_rating(runners_up, RUNNERS_UP_PLAYOFF);
        for team in knockout(&contenders, ctx.model, rng) {
            result.send_to_playoff(team);
        }
        result
    }
}

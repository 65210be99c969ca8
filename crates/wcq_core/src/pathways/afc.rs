//! AFC: Third Round groups → Fourth Round triangles → Fifth Round tie.
//!
//! 8 direct places + 1 inter-confederation playoff entrant.

use super::labels::{AFC_FOURTH_ROUND, AFC_PRE_QUALIFIED, AFC_THIRD_ROUND};
use super::{snake_distribute, ConfederationDriver, SimContext};
use crate::engine::{knockout, SimRng, Slots};
use crate::models::{Confederation, Group, PathwayResult};

pub const THIRD_ROUND_GROUPS: [&str; 3] = ["Third Round A", "Third Round B", "Third Round C"];
pub const THIRD_ROUND_SIZE: usize = 6;
pub const THIRD_ROUND_MATCHES: u32 = 10;
pub const FOURTH_ROUND_GROUPS: [&str; 2] = ["Fourth Round A", "Fourth Round B"];
pub const FOURTH_ROUND_SIZE: usize = 3;
/// Single-leg triangle
pub const FOURTH_ROUND_MATCHES: u32 = 2;

pub struct Afc;

impl ConfederationDriver for Afc {
    fn confederation(&self) -> Confederation {
        Confederation::AFC
    }

    fn run(&self, ctx: &SimContext<'_>, rng: &mut SimRng) -> PathwayResult {
        let mut result = PathwayResult::new(Confederation::AFC);

        for name in &ctx.data.qualifiers.afc_pre_qualified {
            result.qualify(ctx.team(name), AFC_PRE_QUALIFIED);
        }

        // Third Round: top two qualify, third and fourth go on
        let mut fourth_round = Vec::new();
        for name in THIRD_ROUND_GROUPS {
            let group = ctx.seeded_group(Confederation::AFC, name, THIRD_ROUND_MATCHES);
            if let Some(outcome) =
                ctx.play_group(&mut result, group, THIRD_ROUND_SIZE, Slots::new(2, 2), rng)
            {
                result.qualify_all(outcome.direct, AFC_THIRD_ROUND);
                fourth_round.extend(outcome.playoff);
            }
        }

        // Fourth Round: winners qualify, runners-up meet in the Fifth Round
        let mut fifth_round = Vec::new();
        let pots = snake_distribute(fourth_round, FOURTH_ROUND_GROUPS.len());
        for (name, teams) in FOURTH_ROUND_GROUPS.into_iter().zip(pots) {
            let group = Group::from_teams(name, teams, FOURTH_ROUND_MATCHES);
            if let Some(outcome) =
                ctx.play_group(&mut result, Some(group), FOURTH_ROUND_SIZE, Slots::new(1, 1), rng)
            {
                result.qualify_all(outcome.direct, AFC_FOURTH_ROUND);
                fifth_round.extend(outcome.playoff);
            }
        }

        for team in knockout(&fifth_round, ctx.model, rng) {
            result.send_to_playoff(team);
        }
        result
    }
}

//! CONCACAF: hosts qualify automatically; Second Round (6 × 5, single
//! leg) feeds a Third Round (3 × 4, home and away). Third Round winners
//! qualify; the two best runners-up go to the inter-confederation playoff.

use super::labels::{CONCACAF_THIRD_ROUND, HOST};
use super::{best_by_rating, snake_distribute, ConfederationDriver, SimContext};
use crate::engine::{SimRng, Slots};
use crate::models::{Confederation, Group, PathwayResult};

pub const SECOND_ROUND_GROUPS: [&str; 6] = [
    "Second Round A",
    "Second Round B",
    "Second Round C",
    "Second Round D",
    "Second Round E",
    "Second Round F",
];
pub const SECOND_ROUND_SIZE: usize = 5;
pub const SECOND_ROUND_MATCHES: u32 = 4;
pub const THIRD_ROUND_GROUPS: [&str; 3] = ["Third Round A", "Third Round B", "Third Round C"];
pub const THIRD_ROUND_SIZE: usize = 4;
pub const THIRD_ROUND_MATCHES: u32 = 6;

pub struct Concacaf;

impl ConfederationDriver for Concacaf {
    fn confederation(&self) -> Confederation {
        Confederation::CONCACAF
    }

    fn run(&self, ctx: &SimContext<'_>, rng: &mut SimRng) -> PathwayResult {
        let mut result = PathwayResult::new(Confederation::CONCACAF);

        for name in &ctx.data.qualifiers.hosts {
            result.qualify(ctx.team(name), HOST);
        }

        // Second Round: top two advance (30 → 12)
        let mut advancing = Vec::new();
        for name in SECOND_ROUND_GROUPS {
            let group = ctx.seeded_group(Confederation::CONCACAF, name, SECOND_ROUND_MATCHES);
            if let Some(outcome) =
                ctx.play_group(&mut result, group, SECOND_ROUND_SIZE, Slots::new(2, 0), rng)
            {
                advancing.extend(outcome.direct);
            }
        }

        // Third Round: pots by rating
        let mut runners_up = Vec::new();
        let pots = snake_distribute(advancing, THIRD_ROUND_GROUPS.len());
        for (name, teams) in THIRD_ROUND_GROUPS.into_iter().zip(pots) {
            let group = Group::from_teams(name, teams, THIRD_ROUND_MATCHES);
            if let Some(outcome) =
                ctx.play_group(&mut result, Some(group), THIRD_ROUND_SIZE, Slots::new(1, 1), rng)
            {
                result.qualify_all(outcome.direct, CONCACAF_THIRD_ROUND);
                runners_up.extend(outcome.playoff);
            }
        }

        for team in best_by_rating(runners_up, Confederation::CONCACAF.playoff_allocation()) {
            result.send_to_playoff(team);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ReferenceData;
    use crate::engine::MatchModel;
    use rand::SeedableRng;

    #[test]
    fn test_embedded_concacaf_hosts_plus_three() {
        let data = ReferenceData::embedded().unwrap();
        let model = MatchModel::default();
        let ctx = SimContext::new(&data, &model);

        for seed in 0..20 {
            let mut rng = SimRng::seed_from_u64(seed);
            let result = Concacaf.run(&ctx, &mut rng);

            assert_eq!(result.direct.len(), 6);
            let hosts: Vec<_> = result.direct.iter().take(3).map(|q| q.team.name.as_str()).collect();
            assert_eq!(hosts, vec!["Canada", "Mexico", "USA"]);
            assert_eq!(result.playoff.len(), 2);
            // 6 Second Round + 3 Third Round tables
            assert_eq!(result.tables.len(), 9);
        }
    }

    #[test]
    fn test_completed_second_round_is_deterministic() {
        let data = ReferenceData::embedded().unwrap();
        let model = MatchModel::default();
        let ctx = SimContext::new(&data, &model);
        let mut rng = SimRng::seed_from_u64(8);
        let result = Concacaf.run(&ctx, &mut rng);

        let third_round: Vec<&str> = result
            .tables
            .iter()
            .filter(|t| t.name.starts_with("Third Round"))
            .flat_map(|t| t.standings.iter().map(|s| s.team.name.as_str()))
            .collect();
        for team in ["Panama", "Jamaica", "Honduras", "Costa Rica", "Curaçao", "Suriname"] {
            assert!(third_round.contains(&team), "{} should reach the Third Round", team);
        }
        assert!(!third_round.contains(&"Cuba"));
    }
}

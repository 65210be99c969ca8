//! UEFA: twelve groups (A–F of four, G–L of five) built from the 54-team
//! pool. Winners qualify. The best twelve playoff candidates form three
//! four-team paths whose winners qualify; the thirteenth candidate goes
//! to the inter-confederation playoff.
//!
//! Candidates are all runners-up by rating, followed by third-placed
//! teams by rating. There are only twelve runners-up, so the thirteenth
//! candidate is always the best third-placed team.

use super::labels::{UEFA_GROUP_WINNER, UEFA_PLAYOFF_PATHS};
use super::{best_by_rating, snake_distribute, ConfederationDriver, SimContext};
use crate::engine::{knockout, SimRng, Slots};
use crate::models::team::sort_by_rating_desc;
use crate::models::{Confederation, Group, PathwayResult, Team};
use std::collections::HashSet;

/// (group, teams). Four-team groups play 6 matches, five-team groups 8.
pub const GROUPS: [(&str, usize); 12] = [
    ("A", 4),
    ("B", 4),
    ("C", 4),
    ("D", 4),
    ("E", 4),
    ("F", 4),
    ("G", 5),
    ("H", 5),
    ("I", 5),
    ("J", 5),
    ("K", 5),
    ("L", 5),
];

pub const PATH_SIZE: usize = 4;

pub fn matches_for(size: usize) -> u32 {
    2 * (size as u32).saturating_sub(1)
}

pub struct Uefa;

impl Uefa {
    /// Groups seeded from live data where present, topped up from the
    /// unassigned pool (strongest first, serpentine across open groups).
    pub fn build_groups(ctx: &SimContext<'_>) -> Vec<Group> {
        let mut groups: Vec<Group> = GROUPS
            .iter()
            .map(|&(name, size)| {
                ctx.seeded_group(Confederation::UEFA, name, matches_for(size))
                    .unwrap_or_else(|| Group::new(name, matches_for(size)))
            })
            .collect();

        let assigned: HashSet<&str> = groups
            .iter()
            .flat_map(|g| g.teams().map(|t| t.name.as_str()))
            .collect();
        let mut seen = HashSet::new();
        let mut pool: Vec<Team> = ctx
            .data
            .qualifiers
            .uefa_pool
            .iter()
            .filter(|name| !assigned.contains(name.as_str()) && seen.insert(name.as_str()))
            .map(|name| ctx.team(name))
            .collect();
        sort_by_rating_desc(&mut pool);

        let mut pool = pool.into_iter();
        let open: Vec<usize> = (0..groups.len())
            .filter(|&i| groups[i].len() < GROUPS[i].1)
            .collect();
        let mut forward = true;
        'fill: while !open.iter().all(|&i| groups[i].len() >= GROUPS[i].1) {
            let order: Vec<usize> = if forward {
                open.clone()
            } else {
                open.iter().rev().copied().collect()
            };
            for i in order {
                if groups[i].len() >= GROUPS[i].1 {
                    continue;
                }
                match pool.next() {
                    Some(team) => groups[i].push(team, Default::default()),
                    None => break 'fill,
                }
            }
            forward = !forward;
        }
        groups
    }
}

impl ConfederationDriver for Uefa {
    fn confederation(&self) -> Confederation {
        Confederation::UEFA
    }

    fn run(&self, ctx: &SimContext<'_>, rng: &mut SimRng) -> PathwayResult {
        let mut result = PathwayResult::new(Confederation::UEFA);
        let mut runners_up = Vec::new();
        let mut thirds = Vec::new();

        for (group, &(_, size)) in Uefa::build_groups(ctx).into_iter().zip(GROUPS.iter()) {
            if let Some(outcome) = ctx.play_group(&mut result, Some(group), size, Slots::new(1, 1), rng) {
                result.qualify_all(outcome.direct, UEFA_GROUP_WINNER);
                runners_up.extend(outcome.playoff);
                thirds.extend(outcome.eliminated.into_iter().take(1));
            }
        }

        let path_places = PATH_SIZE * UEFA_PLAYOFF_PATHS.len();
        let mut candidates = best_by_rating(runners_up, usize::MAX);
        candidates.extend(best_by_rating(thirds, usize::MAX));
        let icp_entrant = candidates.get(path_places).cloned();
        candidates.truncate(path_places);

        let paths = snake_distribute(candidates, UEFA_PLAYOFF_PATHS.len());
        for (label, path) in UEFA_PLAYOFF_PATHS.into_iter().zip(paths) {
            result.qualify_all(knockout(&path, ctx.model, rng), label);
        }

        if let Some(team) = icp_entrant {
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
    fn test_pool_partition_covers_54_teams_once() {
        let data = ReferenceData::embedded().unwrap();
        let model = MatchModel::default();
        let ctx = SimContext::new(&data, &model);
        let groups = Uefa::build_groups(&ctx);

        let mut all = HashSet::new();
        for (group, &(name, size)) in groups.iter().zip(GROUPS.iter()) {
            assert_eq!(group.name, name);
            assert_eq!(group.len(), size, "group {}", name);
            assert_eq!(group.target_matches_per_team, matches_for(size));
            for team in group.teams() {
                assert!(all.insert(team.name.clone()), "{} placed twice", team.name);
            }
        }
        assert_eq!(all.len(), 54);
        // Seeded group keeps its live members
        assert!(groups[4].contains("Spain"));
        // K and L come from the pool
        assert!(groups[10].contains("England") || groups[11].contains("England"));
    }

    #[test]
    fn test_embedded_uefa_fifteen_places() {
        let data = ReferenceData::embedded().unwrap();
        let model = MatchModel::default();
        let ctx = SimContext::new(&data, &model);

        for seed in 0..10 {
            let mut rng = SimRng::seed_from_u64(seed);
            let result = Uefa.run(&ctx, &mut rng);

            let winners = result.direct.iter().filter(|q| q.path == UEFA_GROUP_WINNER).count();
            assert_eq!(winners, 12);
            for label in UEFA_PLAYOFF_PATHS {
                assert_eq!(result.direct.iter().filter(|q| q.path == label).count(), 1);
            }
            assert_eq!(result.direct.len(), 15);
            assert_eq!(result.playoff.len(), 1);
            assert!(!result.is_qualified(&result.playoff[0].name));
        }
    }

    #[test]
    fn test_matches_for_group_sizes() {
        assert_eq!(matches_for(4), 6);
        assert_eq!(matches_for(5), 8);
        assert_eq!(matches_for(0), 0);
    }
}

//! # Group Engine
//!
//! Completes a partially played round-robin and splits the final table
//! into direct qualifiers, playoff entrants and eliminated teams.
//!
//! ## Pairing
//! Fixtures are not scheduled up front. Each step picks a team with the
//! most matches left and pairs it with another team that still has
//! capacity (random among equals). Preferring the teams furthest from
//! their target keeps the group from stalling with one team stranded.
//! Pair repetition is not tracked, so a "double round-robin" here means
//! the right number of matches per team, not a strict home/away schedule.

use super::{MatchModel, SimRng};
use crate::models::record::compare_standings;
use crate::models::{Group, Standing, Team};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// How many places a group hands out. Counts saturate at the group size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slots {
    pub direct: usize,
    pub playoff: usize,
}

impl Slots {
    pub const fn new(direct: usize, playoff: usize) -> Self {
        Self { direct, playoff }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupOutcome {
    pub direct: Vec<Team>,
    pub playoff: Vec<Team>,
    pub eliminated: Vec<Team>,
    /// Final table, sorted
    pub standings: Vec<Standing>,
    /// Matches simulated in this call (not counting seeded results)
    pub matches_simulated: u32,
}

/// 2 when the target covers a home-and-away round-robin, otherwise 1.
pub fn legs_for(team_count: usize, target_matches_per_team: u32) -> u32 {
    if team_count < 2 {
        return 0;
    }
    if target_matches_per_team as usize >= 2 * (team_count - 1) {
        2
    } else {
        1
    }
}

pub fn sort_standings(standings: &mut [Standing]) {
    // Stable: full ties keep seeding order
    standings.sort_by(compare_standings);
}

pub fn simulate_group(group: &Group, slots: Slots, model: &MatchModel, rng: &mut SimRng) -> GroupOutcome {
    if group.len() < 2 {
        return GroupOutcome {
            direct: Vec::new(),
            playoff: Vec::new(),
            eliminated: group.teams().cloned().collect(),
            standings: group.entries.clone(),
            matches_simulated: 0,
        };
    }

    let target = group.target_matches_per_team;
    let mut table = group.entries.clone();

    let n = table.len() as u32;
    let total_pairings = n * (n - 1) / 2 * legs_for(table.len(), target);
    let already_played: u32 = table.iter().map(|s| s.record.played).sum::<u32>() / 2;
    let mut remaining = total_pairings.saturating_sub(already_played);
    let mut matches_simulated = 0;

    while remaining > 0 {
        let Some((a, b)) = pick_pairing(&table, target, rng) else {
            tracing::debug!(
                group = %group.name,
                remaining,
                "no eligible pairing left; group ends early"
            );
            break;
        };
        let (goals_a, goals_b) = model.simulate(&table[a].team, &table[b].team, rng);
        table[a].record.record_match(goals_a, goals_b);
        table[b].record.record_match(goals_b, goals_a);
        remaining -= 1;
        matches_simulated += 1;
    }

    sort_standings(&mut table);
    let (direct, playoff, eliminated) = partition(&table, slots);

    GroupOutcome {
        direct,
        playoff,
        eliminated,
        standings: table,
        matches_simulated,
    }
}

fn partition(table: &[Standing], slots: Slots) -> (Vec<Team>, Vec<Team>, Vec<Team>) {
    let n_direct = slots.direct.min(table.len());
    let n_playoff = slots.playoff.min(table.len() - n_direct);
    let teams = |rows: &[Standing]| rows.iter().map(|s| s.team.clone()).collect::<Vec<_>>();

    (
        teams(&table[..n_direct]),
        teams(&table[n_direct..n_direct + n_playoff]),
        teams(&table[n_direct + n_playoff..]),
    )
}

/// Returns indices of the next two teams to meet, or `None` when fewer
/// than two teams remain below the target.
fn pick_pairing(table: &[Standing], target: u32, rng: &mut SimRng) -> Option<(usize, usize)> {
    let capacity = |i: usize| target.saturating_sub(table[i].record.played);
    let eligible: Vec<usize> = (0..table.len()).filter(|&i| capacity(i) > 0).collect();
    if eligible.len() < 2 {
        return None;
    }

    let first = pick_most_capacity(&eligible, capacity, rng)?;
    let rest: Vec<usize> = eligible.into_iter().filter(|&i| i != first).collect();
    let second = pick_most_capacity(&rest, capacity, rng)?;
    Some((first, second))
}

fn pick_most_capacity(
    candidates: &[usize],
    capacity: impl Fn(usize) -> u32,
    rng: &mut SimRng,
) -> Option<usize> {
    let max = candidates.iter().map(|&i| capacity(i)).max()?;
    let top: Vec<usize> = candidates
        .iter()
        .copied()
        .filter(|&i| capacity(i) == max)
        .collect();
    top.choose(rng).copied()
}

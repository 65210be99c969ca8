//! Single-elimination brackets.
//!
//! Each round the strongest surviving team meets the weakest, the second
//! strongest meets the second weakest, and so on. An odd team out gets a
//! bye. Draws go to the higher-rated side as a stand-in for penalties.

use super::{MatchModel, SimRng};
use crate::models::team::sort_by_rating_desc;
use crate::models::Team;
use rand::seq::SliceRandom;

/// Plays one tie and returns the team that goes through.
pub fn play_tie<'t>(a: &'t Team, b: &'t Team, model: &MatchModel, rng: &mut SimRng) -> &'t Team {
    let (goals_a, goals_b) = model.simulate(a, b, rng);
    if goals_a > goals_b {
        a
    } else if goals_b > goals_a {
        b
    } else if b.rating > a.rating {
        b
    } else {
        a
    }
}

/// Runs the bracket to completion. Returns the winner as a one-element
/// list, or an empty list for an empty bracket.
pub fn knockout(teams: &[Team], model: &MatchModel, rng: &mut SimRng) -> Vec<Team> {
    if teams.len() <= 1 {
        return teams.to_vec();
    }

    let mut bracket = teams.to_vec();
    // Shuffle first so equal ratings are not always seeded in input order
    bracket.shuffle(rng);
    sort_by_rating_desc(&mut bracket);

    let n = bracket.len();
    let mut survivors = Vec::with_capacity(n / 2 + 1);
    for i in 0..n / 2 {
        let winner = play_tie(&bracket[i], &bracket[n - 1 - i], model, rng);
        survivors.push(winner.clone());
    }
    if n % 2 == 1 {
        survivors.push(bracket[n / 2].clone());
    }

    knockout(&survivors, model, rng)
}

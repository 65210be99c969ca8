//! Inter-confederation playoff: up to two places for the entrants the
//! confederations send on.
//!
//! - 4+ entrants: shuffle, take two disjoint pairs, each pair's winner qualifies
//! - 2–3 entrants: one knockout, one qualifier
//! - fewer: nobody

use super::labels::ICP;
use crate::engine::{knockout, MatchModel, SimRng};
use crate::models::{Qualifier, Team};
use rand::seq::SliceRandom;

pub fn inter_confederation_playoff(entrants: &[Team], model: &MatchModel, rng: &mut SimRng) -> Vec<Qualifier> {
    let brackets: Vec<Vec<Team>> = match entrants.len() {
        0 | 1 => Vec::new(),
        2 | 3 => vec![entrants.to_vec()],
        _ => {
            let mut drawn = entrants.to_vec();
            drawn.shuffle(rng);
            vec![drawn[0..2].to_vec(), drawn[2..4].to_vec()]
        }
    };

    brackets
        .iter()
        .flat_map(|bracket| knockout(bracket, model, rng))
        .map(|team| Qualifier::new(team, ICP))
        .collect()
}

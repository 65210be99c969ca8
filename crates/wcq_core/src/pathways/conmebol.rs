//! CONMEBOL: one ten-team league, home and away. Top six qualify,
//! seventh goes to the inter-confederation playoff.

use super::labels::CONMEBOL_DIRECT;
use super::{ConfederationDriver, SimContext};
use crate::engine::{SimRng, Slots};
use crate::models::{Confederation, PathwayResult};

pub const LEAGUE: &str = "League";
pub const LEAGUE_SIZE: usize = 10;
pub const LEAGUE_MATCHES: u32 = 18;

pub struct Conmebol;

impl ConfederationDriver for Conmebol {
    fn confederation(&self) -> Confederation {
        Confederation::CONMEBOL
    }

    fn run(&self, ctx: &SimContext<'_>, rng: &mut SimRng) -> PathwayResult {
        let mut result = PathwayResult::new(Confederation::CONMEBOL);
        let group = ctx.seeded_group(Confederation::CONMEBOL, LEAGUE, LEAGUE_MATCHES);
        if let Some(outcome) = ctx.play_group(&mut result, group, LEAGUE_SIZE, Slots::new(6, 1), rng) {
            result.qualify_all(outcome.direct, CONMEBOL_DIRECT);
            for team in outcome.playoff {
                result.send_to_playoff(team);
            }
        }
        result
    }
}

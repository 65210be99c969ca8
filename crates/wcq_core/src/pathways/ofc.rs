//! OFC: both places were settled before the simulation window.

use super::labels::OFC_DIRECT;
use super::{ConfederationDriver, SimContext};
use crate::engine::SimRng;
use crate::models::{Confederation, PathwayResult};

pub struct Ofc;

impl ConfederationDriver for Ofc {
    fn confederation(&self) -> Confederation {
        Confederation::OFC
    }

    fn run(&self, ctx: &SimContext<'_>, _rng: &mut SimRng) -> PathwayResult {
        let mut result = PathwayResult::new(Confederation::OFC);
        let qualifiers = &ctx.data.qualifiers;
        if let Some(name) = &qualifiers.ofc_direct {
            result.qualify(ctx.team(name), OFC_DIRECT);
        }
        if let Some(name) = &qualifiers.ofc_playoff {
            result.send_to_playoff(ctx.team(name));
        }
        result
    }
}

//! # Tournament Pipeline
//!
//! One iteration = six confederation drivers → inter-confederation
//! playoff → normalizer. The Monte Carlo layer repeats that N times and
//! accumulates an [`Aggregate`].
//!
//! ## Determinism
//! Iteration `i` draws from `ChaCha8Rng::seed_from_u64(seed)` on stream
//! `i`. Iterations therefore do not depend on each other, the parallel
//! run produces exactly the sequential result, and iteration 0 is the
//! same draw as a single detailed simulation with the same seed.

pub mod aggregate;
pub mod normalizer;

pub use aggregate::Aggregate;
pub use normalizer::normalize;

use crate::config::SimConfig;
use crate::data::ReferenceData;
use crate::engine::SimRng;
use crate::models::{IterationResult, PathwayResult, Qualifier, Team};
use crate::pathways::{inter_confederation_playoff, SimContext, DRIVERS};
use rand::SeedableRng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Everything one iteration produced, for the detailed trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IterationReport {
    pub pathways: Vec<PathwayResult>,
    pub playoff_entrants: Vec<Team>,
    pub playoff_qualifiers: Vec<Qualifier>,
    /// Normalized field
    pub qualified: IterationResult,
}

impl IterationReport {
    /// Number of normalizer filler places used.
    pub fn filler_count(&self) -> usize {
        self.qualified
            .iter()
            .filter(|q| q.path == crate::pathways::labels::FILLER)
            .count()
    }
}

/// Random source for iteration `iteration` of a run seeded with `seed`.
pub fn iteration_rng(seed: u64, iteration: u64) -> SimRng {
    let mut rng = SimRng::seed_from_u64(seed);
    rng.set_stream(iteration);
    rng
}

pub struct Simulator<'a> {
    data: &'a ReferenceData,
    config: &'a SimConfig,
}

impl<'a> Simulator<'a> {
    pub fn new(data: &'a ReferenceData, config: &'a SimConfig) -> Self {
        Self { data, config }
    }

    pub fn simulate_iteration_detailed(&self, rng: &mut SimRng) -> IterationReport {
        let ctx = SimContext::new(self.data, &self.config.match_model);

        let pathways: Vec<PathwayResult> = DRIVERS.iter().map(|d| d.run(&ctx, rng)).collect();
        let playoff_entrants: Vec<Team> = pathways.iter().flat_map(|p| p.playoff.iter().cloned()).collect();
        let playoff_qualifiers = inter_confederation_playoff(&playoff_entrants, ctx.model, rng);

        let combined: Vec<Qualifier> = pathways
            .iter()
            .flat_map(|p| p.direct.iter().cloned())
            .chain(playoff_qualifiers.iter().cloned())
            .collect();
        let qualified = normalize(combined, &self.data.ratings, self.config.tournament_size);

        IterationReport {
            pathways,
            playoff_entrants,
            playoff_qualifiers,
            qualified,
        }
    }

    pub fn simulate_iteration(&self, rng: &mut SimRng) -> IterationResult {
        self.simulate_iteration_detailed(rng).qualified
    }

    /// The single simulation shown before the probability tables
    /// (identical to iteration 0 of [`Simulator::run`]).
    pub fn single(&self, seed: u64) -> IterationReport {
        let mut rng = iteration_rng(seed, 0);
        self.simulate_iteration_detailed(&mut rng)
    }

    pub fn run(&self, iterations: u64, seed: u64) -> Aggregate {
        self.run_with_progress(iterations, seed, |_| {})
    }

    /// Sequential run; `on_progress` receives the number of finished iterations.
    pub fn run_with_progress(&self, iterations: u64, seed: u64, mut on_progress: impl FnMut(u64)) -> Aggregate {
        tracing::info!(iterations, seed, "monte carlo run started");
        let mut aggregate = Aggregate::default();
        for i in 0..iterations {
            let mut rng = iteration_rng(seed, i);
            aggregate.record(&self.simulate_iteration(&mut rng));
            on_progress(i + 1);
        }
        tracing::info!(teams = aggregate.counts.len(), "monte carlo run finished");
        aggregate
    }

    /// Iterations spread over the rayon pool; same result as [`Simulator::run`].
    pub fn run_parallel(&self, iterations: u64, seed: u64) -> Aggregate {
        self.run_parallel_with_progress(iterations, seed, |_| {})
    }

    pub fn run_parallel_with_progress(
        &self,
        iterations: u64,
        seed: u64,
        on_progress: impl Fn(u64) + Sync,
    ) -> Aggregate {
        tracing::info!(iterations, seed, threads = rayon::current_num_threads(), "parallel monte carlo run started");
        let aggregate = (0..iterations)
            .into_par_iter()
            .fold(Aggregate::default, |mut agg, i| {
                let mut rng = iteration_rng(seed, i);
                agg.record(&self.simulate_iteration(&mut rng));
                on_progress(1);
                agg
            })
            .reduce(Aggregate::default, Aggregate::merge);
        tracing::info!(teams = aggregate.counts.len(), "parallel monte carlo run finished");
        aggregate
    }
}

//! # wcq_core - World Cup 2026 Qualification Simulator
//!
//! Monte Carlo estimate of which national teams reach the 48-team 2026
//! World Cup. Each iteration runs the six confederation qualifying
//! formats from the current partial standings, the inter-confederation
//! playoff, and a normalizer that guarantees exactly 48 unique teams.
//!
//! ## Features
//! - Deterministic (same seed = same result, sequential or parallel)
//! - Reference data embedded at build time, replaceable via JSON
//! - Per-team qualification probabilities and path breakdowns

// Doc formatting lints - purely cosmetic
#![allow(clippy::doc_lazy_continuation)]
// Tuple tables for group layouts
#![allow(clippy::type_complexity)]

pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod models;
pub mod pathways;
pub mod tournament;

pub use config::SimConfig;
pub use data::ReferenceData;
pub use engine::{MatchModel, SimRng};
pub use error::{Result, SimError};
pub use models::{Confederation, IterationResult, PathwayResult, Qualifier, Team};
pub use tournament::{iteration_rng, normalize, Aggregate, IterationReport, Simulator};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

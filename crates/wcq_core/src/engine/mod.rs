//! Match, group and knockout engines.
//!
//! All randomness flows through a single [`SimRng`] handed down by the
//! caller, so a seed fixes every score, pairing and bracket shuffle.

pub mod group;
pub mod knockout;
pub mod match_sim;

pub use group::{legs_for, simulate_group, sort_standings, GroupOutcome, Slots};
pub use knockout::{knockout, play_tie};
pub use match_sim::MatchModel;

/// Random source used everywhere in the simulator.
pub type SimRng = rand_chacha::ChaCha8Rng;

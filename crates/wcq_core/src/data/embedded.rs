//! Reference tables compiled into the binary.
//!
//! `include_str!` keeps the JSON snapshots inside the executable so a run
//! needs no file I/O. Snapshot: after the June 2025 international window.

/// Team name → rating and confederation (~207 teams).
pub const RATINGS_JSON: &str = include_str!("../../../../data/ratings.json");

/// Confederation → group → partial records.
pub const STANDINGS_JSON: &str = include_str!("../../../../data/standings.json");

/// Hosts, pre-qualified teams, OFC placings, UEFA pool.
pub const QUALIFIERS_JSON: &str = include_str!("../../../../data/qualifiers.json");

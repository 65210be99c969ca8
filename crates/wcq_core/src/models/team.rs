use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Continental governing bodies taking part in qualification.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Confederation {
    AFC,
    CAF,
    CONCACAF,
    CONMEBOL,
    OFC,
    UEFA,
}

impl Confederation {
    pub const ALL: [Confederation; 6] = [
        Confederation::AFC,
        Confederation::CAF,
        Confederation::CONCACAF,
        Confederation::CONMEBOL,
        Confederation::OFC,
        Confederation::UEFA,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Confederation::AFC => "AFC",
            Confederation::CAF => "CAF",
            Confederation::CONCACAF => "CONCACAF",
            Confederation::CONMEBOL => "CONMEBOL",
            Confederation::OFC => "OFC",
            Confederation::UEFA => "UEFA",
        }
    }

    /// Number of teams this confederation sends to the inter-confederation playoff.
    pub fn playoff_allocation(&self) -> usize {
        match self {
            Confederation::CONCACAF => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for Confederation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Confederation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Confederation::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown confederation: {}", s))
    }
}

/// A national team as seen by the simulator.
///
/// Identity is the (case-sensitive) name. Teams missing from the rating
/// table carry the default rating and no confederation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub rating: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confederation: Option<Confederation>,
}

impl Team {
    pub fn new(name: impl Into<String>, rating: f64, confederation: Confederation) -> Self {
        Self {
            name: name.into(),
            rating,
            confederation: Some(confederation),
        }
    }

    pub fn unaffiliated(name: impl Into<String>, rating: f64) -> Self {
        Self {
            name: name.into(),
            rating,
            confederation: None,
        }
    }
}

/// Stable sort by rating, highest first. Equal ratings keep their input order.
pub fn sort_by_rating_desc(teams: &mut [Team]) {
    teams.sort_by(|a, b| b.rating.total_cmp(&a.rating));
}

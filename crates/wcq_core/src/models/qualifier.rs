use super::{Confederation, Standing, Team};
use serde::{Deserialize, Serialize};

/// A team holding a World Cup place together with the route that earned it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Qualifier {
    pub team: Team,
    pub path: String,
}

impl Qualifier {
    pub fn new(team: Team, path: impl Into<String>) -> Self {
        Self {
            team,
            path: path.into(),
        }
    }
}

/// Exactly `tournament_size` qualifiers with unique team names.
pub type IterationResult = Vec<Qualifier>;

/// Final table of one simulated group, kept for the detailed trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupTable {
    pub name: String,
    pub standings: Vec<Standing>,
}

/// What one confederation produced in one iteration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathwayResult {
    pub confederation: Confederation,
    pub direct: Vec<Qualifier>,
    pub playoff: Vec<Team>,
    #[serde(default)]
    pub tables: Vec<GroupTable>,
}

impl PathwayResult {
    pub fn new(confederation: Confederation) -> Self {
        Self {
            confederation,
            direct: Vec::new(),
            playoff: Vec::new(),
            tables: Vec::new(),
        }
    }

    /// Adds a direct qualifier. A team already qualified keeps its first path.
    pub fn qualify(&mut self, team: Team, path: impl Into<String>) {
        if self.is_qualified(&team.name) {
            return;
        }
        self.direct.push(Qualifier::new(team, path));
    }

    pub fn qualify_all(&mut self, teams: impl IntoIterator<Item = Team>, path: &str) {
        for team in teams {
            self.qualify(team, path);
        }
    }

    pub fn is_qualified(&self, name: &str) -> bool {
        self.direct.iter().any(|q| q.team.name == name)
    }

    pub fn send_to_playoff(&mut self, team: Team) {
        self.playoff.push(team);
    }

    pub fn record_table(&mut self, name: impl Into<String>, standings: Vec<Standing>) {
        self.tables.push(GroupTable {
            name: name.into(),
            standings,
        });
    }
}

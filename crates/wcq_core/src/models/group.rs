use super::{GroupRecord, Standing, Team};
use serde::{Deserialize, Serialize};

/// One round-robin group: its members in seeding order, their starting
/// records, and how many matches each team plays in total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    pub entries: Vec<Standing>,
    pub target_matches_per_team: u32,
}

impl Group {
    pub fn new(name: impl Into<String>, target_matches_per_team: u32) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
            target_matches_per_team,
        }
    }

    /// Fresh group where nobody has played yet.
    pub fn from_teams(name: impl Into<String>, teams: Vec<Team>, target_matches_per_team: u32) -> Self {
        let mut group = Self::new(name, target_matches_per_team);
        for team in teams {
            group.push(team, GroupRecord::default());
        }
        group
    }

    pub fn push(&mut self, team: Team, record: GroupRecord) {
        self.entries.push(Standing::new(team, record));
    }

    pub fn with_team(mut self, team: Team, record: GroupRecord) -> Self {
        self.push(team, record);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|s| s.team.name == name)
    }

    pub fn teams(&self) -> impl Iterator<Item = &Team> {
        self.entries.iter().map(|s| &s.team)
    }
}

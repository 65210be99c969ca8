use super::Team;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Per-team statistics within one group.
///
/// `played`, `goal_difference` and `points` are kept in sync by every
/// mutating method; construct through [`GroupRecord::from_results`] rather
/// than filling the fields by hand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRecord {
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i32,
    pub points: u32,
}

impl GroupRecord {
    pub fn from_results(wins: u32, draws: u32, losses: u32, goals_for: u32, goals_against: u32) -> Self {
        Self {
            played: wins + draws + losses,
            wins,
            draws,
            losses,
            goals_for,
            goals_against,
            goal_difference: goals_for as i32 - goals_against as i32,
            points: 3 * wins + draws,
        }
    }

    /// Apply one match from this team's point of view.
    pub fn record_match(&mut self, scored: u32, conceded: u32) {
        match scored.cmp(&conceded) {
            Ordering::Greater => {
                self.wins += 1;
                self.points += 3;
            }
            Ordering::Equal => {
                self.draws += 1;
                self.points += 1;
            }
            Ordering::Less => self.losses += 1,
        }
        self.played += 1;
        self.goals_for += scored;
        self.goals_against += conceded;
        self.goal_difference = self.goals_for as i32 - self.goals_against as i32;
    }

    pub fn is_consistent(&self) -> bool {
        self.played == self.wins + self.draws + self.losses
            && self.goal_difference == self.goals_for as i32 - self.goals_against as i32
            && self.points == 3 * self.wins + self.draws
    }
}

/// A team paired with its record; one row of a group table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub team: Team,
    pub record: GroupRecord,
}

impl Standing {
    pub fn new(team: Team, record: GroupRecord) -> Self {
        Self { team, record }
    }
}

/// Table order: points, goal difference, goals scored, then rating (all descending).
pub fn compare_standings(a: &Standing, b: &Standing) -> Ordering {
    b.record
        .points
        .cmp(&a.record.points)
        .then(b.record.goal_difference.cmp(&a.record.goal_difference))
        .then(b.record.goals_for.cmp(&a.record.goals_for))
        .then(b.team.rating.total_cmp(&a.team.rating))
}

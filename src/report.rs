use log::error;
use serde::{Deserialize, Serialize};

use crate::error::GroupError;
use crate::fixture::Match;
use crate::group::Group;
use crate::team::Team;

// One result as the statistics collector expects it. Teams are referenced by key.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MatchRecord {
    pub home: String,
    pub away: String,
    #[serde(rename = "homeGoals")]
    pub home_goals: u32,
    #[serde(rename = "awayGoals")]
    pub away_goals: u32,
}

impl From<&Match> for MatchRecord {
    fn from(m: &Match) -> Self {
        Self {
            home: m.home.key.clone(),
            away: m.away.key.clone(),
            home_goals: m.home_goals,
            away_goals: m.away_goals,
        }
    }
}

pub fn try_results_to_json(matches: &[Match]) -> Result<String, GroupError> {
    let records: Vec<MatchRecord> = matches.iter().map(MatchRecord::from).collect();
    Ok(serde_json::to_string(&records)?)
}

/// JSON array of results in fixture order. An empty string means encoding failed,
/// no matches at all gives `[]`.
pub fn results_to_json(matches: &[Match]) -> String {
    match try_results_to_json(matches) {
        Ok(json) => json,
        Err(e) => {
            error!("Could not serialize results: {e}");
            String::new()
        }
    }
}

pub fn standings_table(teams: &[Team]) -> String {
    let mut out = format!("|{0:3} | {1:20} | {2:2} | {3:2} | {4:2} | {5:2} | {6:7} | {7:3} | {8:3}\n",
        "#", "Team", "P", "W", "D", "L", "Goals", "GD", "Pts",
    );

    for (i, t) in teams.iter().enumerate() {
        out += &format!("|{0:3} | {1:20} | {2:2} | {3:2} | {4:2} | {5:2} | {6:>3}-{7:<3} | {8:3} | {9:3}\n",
            i + 1,
            t.name,
            t.matches_played(),
            t.wins,
            t.draws,
            t.losses,
            t.goals_scored,
            t.goals_conceded,
            t.goal_difference(),
            t.points(),
        );
    }

    out
}

pub fn results_table(matches: &[Match]) -> String {
    let mut out = String::new();
    for m in matches {
        let score = if m.played { format!("{} - {}", m.home_goals, m.away_goals) } else { "-".to_string() };
        out += &format!("{0:>20} {1:^7} {2:<20}\n", m.home.name, score, m.away.name);
    }
    out
}

pub fn prediction_verdict(group: &Group) -> String {
    let Some(winner) = group.winner() else {
        return "No teams in the group".to_string();
    };

    match group.prediction_correct() {
        Some(true) => format!("You made the right choice! {} has won the group!", winner.name),
        Some(false) => format!("You didn't think {} would win this group? Better luck next time!", winner.name),
        None => format!("{} has won the group!", winner.name),
    }
}

use log::{debug, warn};
use rand::Rng;

use crate::error::GroupError;
use crate::fixture::Match;
use crate::ranking::sort_standings;
use crate::schedule::create_matches;
use crate::sim_context::SimContext;
use crate::team::Team;

/// A group of teams playing each other home and away before the knockout rounds.
///
/// `teams` is in roster order until the group has been simulated, standings order after.
#[derive(Debug, Clone, Default)]
pub struct Group {
    pub teams: Vec<Team>,
    pub matches: Vec<Match>,
    pub predicted_winner: Option<String>,
}

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_teams(teams: Vec<Team>) -> Result<Self, GroupError> {
        let mut group = Self::new();
        for team in teams {
            group.add_team(team)?;
        }
        Ok(group)
    }

    pub fn add_team(&mut self, team: Team) -> Result<(), GroupError> {
        if self.team(&team.key).is_some() {
            return Err(GroupError::DuplicateTeamKey(team.key));
        }

        self.teams.push(team);
        Ok(())
    }

    /// Schedules the double round-robin. Call once every team is in.
    pub fn create_matches(&mut self) -> Result<(), GroupError> {
        self.matches = create_matches(&self.teams)?;
        Ok(())
    }

    pub fn set_prediction(&mut self, key: &str) -> Result<(), GroupError> {
        if self.team(key).is_none() {
            return Err(GroupError::UnknownTeam(key.to_owned()));
        }

        self.predicted_winner = Some(key.to_owned());
        Ok(())
    }

    /// Plays every fixture in order, then sorts the standings.
    ///
    /// Both teams are re-read from the roster before each kickoff, so results from earlier
    /// fixtures feed into the scoring chances of later ones.
    pub fn simulate<R: Rng>(&mut self, ctx: &SimContext, rng: &mut R) -> Result<(), GroupError> {
        if self.matches.is_empty() {
            return Err(GroupError::NoFixtures);
        }

        // Checked up front so a rejected run leaves teams and fixtures untouched
        if let Some(m) = self.matches.iter().find(|m| m.played) {
            return Err(GroupError::MatchAlreadyPlayed {
                home: m.home.key.clone(),
                away: m.away.key.clone(),
            });
        }

        for idx in 0..self.matches.len() {
            let mut m = self.matches[idx].clone();

            match self.team(&m.home.key) {
                Some(home) => m.home = home.clone(),
                None => warn!("Home team {} not in group, playing with stale snapshot", m.home.key),
            }
            match self.team(&m.away.key) {
                Some(away) => m.away = away.clone(),
                None => warn!("Away team {} not in group, playing with stale snapshot", m.away.key),
            }

            m.play(ctx, rng)?;

            self.update_team(&m.home);
            self.update_team(&m.away);
            self.matches[idx] = m;
        }

        self.sort();

        if let Some(winner) = self.winner() {
            debug!("{} wins the group with {} points", winner.name, winner.points());
        }

        Ok(())
    }

    pub fn sort(&mut self) {
        sort_standings(&mut self.teams, &self.matches);
    }

    /// Top of the table. Only meaningful once the group has been simulated.
    pub fn winner(&self) -> Option<&Team> {
        self.teams.first()
    }

    pub fn prediction_correct(&self) -> Option<bool> {
        let predicted = self.predicted_winner.as_ref()?;
        let winner = self.winner()?;
        Some(&winner.key == predicted)
    }

    pub fn team(&self, key: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.key == key)
    }

    pub fn is_finished(&self) -> bool {
        !self.matches.is_empty() && self.matches.iter().all(|m| m.played)
    }

    /// Zeroes all stats and reschedules, keeping the roster and the prediction.
    pub fn reset(&mut self) -> Result<(), GroupError> {
        for team in &mut self.teams {
            team.reset();
        }
        self.create_matches()
    }

    // Unknown keys are skipped, a partial roster should not stop the group.
    fn update_team(&mut self, team: &Team) {
        match self.teams.iter_mut().find(|t| t.key == team.key) {
            Some(t) => *t = team.clone(),
            None => warn!("Team {} not in group, result not recorded", team.key),
        }
    }
}

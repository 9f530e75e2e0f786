use log::{debug, trace};
use rand::Rng;

use crate::error::GroupError;
use crate::sim_context::SimContext;
use crate::team::Team;

// Teams are snapshots. The group refreshes them by key before kickoff so that
// earlier results feed into the points term of the scoring chance.
#[derive(Debug, Clone)]
pub struct Match {
    pub home: Team,
    pub away: Team,
    pub home_goals: u32,
    pub away_goals: u32,
    pub played: bool,
}

impl Match {
    pub fn new(home: Team, away: Team) -> Self {
        Self {
            home,
            away,
            home_goals: 0,
            away_goals: 0,
            played: false,
        }
    }

    pub fn involves(&self, key: &str) -> bool {
        self.home.key == key || self.away.key == key
    }

    pub fn is_between(&self, key_1: &str, key_2: &str) -> bool {
        (self.home.key == key_1 && self.away.key == key_2)
            || (self.home.key == key_2 && self.away.key == key_1)
    }

    /// Same fixture with the venues swapped, unplayed.
    pub fn reversed(&self) -> Self {
        Self::new(self.away.clone(), self.home.clone())
    }

    /// Simulates the score and books it on both team snapshots. A match can only be played once.
    pub fn play<R: Rng>(&mut self, ctx: &SimContext, rng: &mut R) -> Result<(), GroupError> {
        if self.played {
            return Err(GroupError::MatchAlreadyPlayed {
                home: self.home.key.clone(),
                away: self.away.key.clone(),
            });
        }

        let (home_goals, away_goals) = simulate_score(&self.home, &self.away, ctx, rng);
        self.home_goals = home_goals;
        self.away_goals = away_goals;
        self.played = true;

        self.home.record_result(home_goals, away_goals);
        self.away.record_result(away_goals, home_goals);

        Ok(())
    }
}

/// Plays `ctx.attack_rounds` rounds with one chance per side, home first.
pub fn simulate_score<R: Rng>(home: &Team, away: &Team, ctx: &SimContext, rng: &mut R) -> (u32, u32) {
    debug!("======== {} vs {} ========", home.name, away.name);

    let mut goals = [0u32; 2];
    let mut handicap = [0i32; 2];

    for round in 0..ctx.attack_rounds {
        for side in 0..2 {
            let (attacker, defender) = if side == 0 { (home, away) } else { (away, home) };
            let (goals_for, goals_against) = (goals[side], goals[1 - side]);

            // Still short of one goal per round played: the handicap keeps piling up
            if goals_for < round {
                handicap[side] += round as i32;
            }

            let chance = scoring_chance(
                attacker,
                defender,
                side == 0,
                goals_for,
                goals_against,
                round,
                handicap[side],
                ctx,
            );
            trace!("Chance for {} to score: {}%", attacker.name, chance);

            let dice = rng.random_range(0..ctx.roll_sides) as i32;
            if dice <= chance {
                goals[side] += 1;
                debug!("Goal for {}! {} - {}", attacker.name, goals[0], goals[1]);
            }
        }
    }

    debug!("Full time: {} {} - {} {}", home.name, goals[0], goals[1], away.name);

    (goals[0], goals[1])
}

/// Chance in percent for `attacker` to score in the given round. Never negative.
#[allow(clippy::too_many_arguments)]
pub fn scoring_chance(
    attacker: &Team,
    defender: &Team,
    is_home: bool,
    goals_for: u32,
    goals_against: u32,
    round: u32,
    handicap: i32,
    ctx: &SimContext,
) -> i32 {
    let mut chance = ctx.base_chance;

    if is_home {
        chance += ctx.home_advantage;
    }

    chance += attacker.rating - defender.rating;
    chance += (attacker.points() as i32 - defender.points() as i32).div_euclid(2);

    if goals_for < goals_against {
        chance -= ctx.behind_penalty;
    }

    chance -= ctx.round_decay * round as i32;

    if handicap > 0 {
        chance /= handicap;
    }

    chance.max(0)
}

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;

use crate::error::GroupError;
use crate::group::Group;
use crate::sim_context::SimContext;
use crate::team::Team;

// Plays the group `runs` times and reports how often each team topped it, best odds first.
// Teams that never won are still listed, with 0.0.
pub fn winner_odds(roster: &[Team], ctx: &SimContext, runs: u32, seed: u64) -> Result<Vec<(String, f64)>, GroupError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut group_wins: HashMap<String, u32> = roster.iter().map(|t| (t.key.clone(), 0)).collect();

    for _ in 0..runs {
        let group = run_group(roster, ctx, &mut rng)?;
        if let Some(winner) = group.winner() {
            *group_wins.entry(winner.key.clone()).or_insert(0) += 1;
        }
    }

    let mut odds: Vec<(String, f64)> = roster
        .iter()
        .map(|t| (t.key.clone(), group_wins[&t.key] as f64 / runs.max(1) as f64))
        .collect();

    odds.sort_by(|a, b| b.1.total_cmp(&a.1));

    Ok(odds)
}

// Mean goals per match across all simulated fixtures. Handy when retuning SimContext.
pub fn average_goals(roster: &[Team], ctx: &SimContext, runs: u32, seed: u64) -> Result<f64, GroupError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut goals = 0u64;
    let mut matches_played = 0u64;

    for _ in 0..runs {
        let group = run_group(roster, ctx, &mut rng)?;
        for m in &group.matches {
            goals += (m.home_goals + m.away_goals) as u64;
            matches_played += 1;
        }
    }

    if matches_played == 0 {
        return Ok(0.0);
    }

    Ok(goals as f64 / matches_played as f64)
}

fn run_group(roster: &[Team], ctx: &SimContext, rng: &mut StdRng) -> Result<Group, GroupError> {
    let mut group = Group::with_teams(roster.to_vec())?;
    group.create_matches()?;
    group.simulate(ctx, rng)?;
    Ok(group)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_loader::default_roster;

    #[test]
    fn odds_sum_to_one_and_are_sorted() {
        let odds = winner_odds(&default_roster(), &SimContext::default(), 200, 1994).unwrap();

        assert_eq!(odds.len(), 4);
        let total: f64 = odds.iter().map(|(_, p)| p).sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert!(odds.windows(2).all(|w| w[0].1 >= w[1].1));
    }

    #[test]
    fn odds_are_reproducible() {
        let a = winner_odds(&default_roster(), &SimContext::default(), 50, 7).unwrap();
        let b = winner_odds(&default_roster(), &SimContext::default(), 50, 7).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn strongest_side_is_usually_favourite() {
        let roster = vec![
            Team::new("Giants", "GIANTS", 100),
            Team::new("Minnows", "MINNOWS", 20),
            Team::new("Plankton", "PLANKTON", 10),
        ];
        let odds = winner_odds(&roster, &SimContext::default(), 200, 3).unwrap();
        assert_eq!(odds[0].0, "GIANTS");
    }

    #[test]
    fn average_goals_is_low_scoring() {
        let avg = average_goals(&default_roster(), &SimContext::default(), 100, 11).unwrap();
        assert!(avg > 0.0);
        assert!(avg < 2.0 * SimContext::default().max_goals() as f64);
    }

    #[test]
    fn bad_roster_is_reported() {
        let result = winner_odds(&default_roster()[..1], &SimContext::default(), 10, 1);
        assert!(matches!(result, Err(GroupError::InvalidRosterSize(1))));
    }
}

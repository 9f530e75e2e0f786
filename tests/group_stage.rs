//! Whole pipeline: roster, fixtures, simulation, standings, JSON.

use group_stage_sim::data_loader::default_roster;
use group_stage_sim::{results_to_json, Group, GroupError, MatchRecord, SimContext, Team};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn play_group(teams: Vec<Team>, seed: u64) -> Group {
    let mut group = Group::with_teams(teams).unwrap();
    group.create_matches().unwrap();
    let mut rng = StdRng::seed_from_u64(seed);
    group.simulate(&SimContext::default(), &mut rng).unwrap();
    group
}

fn roster(n: usize) -> Vec<Team> {
    (0..n).map(|i| Team::new(&format!("Club {i}"), &format!("C{i}"), 50 + i as i32 * 5)).collect()
}

#[test]
fn same_seed_same_group() {
    let a = play_group(default_roster(), 1995);
    let b = play_group(default_roster(), 1995);

    assert_eq!(a.teams, b.teams);
    assert_eq!(results_to_json(&a.matches), results_to_json(&b.matches));
}

#[test]
fn groups_of_any_size_finish() {
    for n in 2..=7 {
        let group = play_group(roster(n), n as u64);
        assert_eq!(group.matches.len(), n * (n - 1));
        assert!(group.is_finished());

        let total_points: u32 = group.teams.iter().map(|t| t.points()).sum();
        let draws = group.matches.iter().filter(|m| m.home_goals == m.away_goals).count() as u32;
        let decided = group.matches.len() as u32 - draws;
        assert_eq!(total_points, decided * 3 + draws * 2);
    }
}

#[test]
fn goals_per_side_never_exceed_ten() {
    for seed in 0..20 {
        let group = play_group(default_roster(), seed);
        assert!(group.matches.iter().all(|m| m.home_goals <= 10 && m.away_goals <= 10));
    }
}

#[test]
fn json_lists_every_fixture_in_order() {
    let group = play_group(default_roster(), 77);
    let decoded: Vec<MatchRecord> = serde_json::from_str(&results_to_json(&group.matches)).unwrap();

    assert_eq!(decoded.len(), 12);
    for (record, m) in decoded.iter().zip(&group.matches) {
        assert_eq!(record, &MatchRecord::from(m));
    }
    assert_eq!(decoded[0].home, "AJAX");
    assert_eq!(decoded[0].away, "MILAN");
}

#[test]
fn winner_tops_the_table() {
    let group = play_group(default_roster(), 2024);
    let winner = group.winner().unwrap();
    assert!(group.teams.iter().all(|t| t.points() <= winner.points()));
}

#[test]
fn single_team_cannot_be_scheduled() {
    let mut group = Group::with_teams(roster(1)).unwrap();
    assert!(matches!(group.create_matches(), Err(GroupError::InvalidRosterSize(1))));
}

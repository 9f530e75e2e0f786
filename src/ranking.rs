use std::cmp::Ordering;

use crate::fixture::Match;
use crate::team::Team;

/*
    Standings order, each criterion only consulted when the previous ones are level:
    1. Points
    2. Goal difference
    3. Goals scored
    4. Goals conceded (more conceded ranks higher)
    5. Aggregate result between the two teams, then name (later in the alphabet ranks higher)

    4 and the name fallback are kept exactly as the classic group tables had them.
*/
pub fn compare_standing(a: &Team, b: &Team, matches: &[Match]) -> Ordering {
    b.points().cmp(&a.points())
        .then_with(|| b.goal_difference().cmp(&a.goal_difference()))
        .then_with(|| b.goals_scored.cmp(&a.goals_scored))
        .then_with(|| b.goals_conceded.cmp(&a.goals_conceded))
        .then_with(|| aggregate_result(a, b, matches))
}

// Head to head only: 3 points for winning a meeting, 1 each for a draw. Goals don't count.
pub fn aggregate_result(a: &Team, b: &Team, matches: &[Match]) -> Ordering {
    let (points_a, points_b) = aggregate_points(&a.key, &b.key, matches);

    points_b.cmp(&points_a)
        .then_with(|| b.name.cmp(&a.name))
}

pub fn aggregate_points(key_a: &str, key_b: &str, matches: &[Match]) -> (u32, u32) {
    let mut points_a = 0;
    let mut points_b = 0;

    for m in matches {
        if !m.is_between(key_a, key_b) { continue; }

        let (goals_a, goals_b) = if m.home.key == key_a {
            (m.home_goals, m.away_goals)
        } else {
            (m.away_goals, m.home_goals)
        };

        match goals_a.cmp(&goals_b) {
            Ordering::Greater => points_a += 3,
            Ordering::Less => points_b += 3,
            Ordering::Equal => {
                points_a += 1;
                points_b += 1;
            }
        }
    }

    (points_a, points_b)
}

// Insertion sort, stable. Head to head can go round in circles between three teams,
// which slice::sort_by is allowed to panic on.
pub fn sort_standings(teams: &mut [Team], matches: &[Match]) {
    for i in 1..teams.len() {
        let mut j = i;
        while j > 0 && compare_standing(&teams[j], &teams[j - 1], matches) == Ordering::Less {
            teams.swap(j, j - 1);
            j -= 1;
        }
    }
}

use crate::error::GroupError;
use crate::fixture::Match;
use crate::team::Team;

/*
    Double round-robin by the circle method. Team 0 stays put while the others rotate.
    Venues alternate per round: team 0 hosts on even rounds, travels on odd rounds, and the
    remaining pairings flip along with it. For four teams this gives the 1994-95 Champions League
    Group D calendar, e.g. Ajax, Salzburg, AEK, Milan:

        Ajax - Milan, Salzburg - AEK, AEK - Ajax, Milan - Salzburg, Ajax - Salzburg, AEK - Milan

    The return leg mirrors the first: the last first-leg fixture is the first one to be returned.
*/
pub fn create_matches(teams: &[Team]) -> Result<Vec<Match>, GroupError> {
    if teams.len() < 2 {
        return Err(GroupError::InvalidRosterSize(teams.len()));
    }

    let first_leg = first_leg_pairings(teams.len());
    let first_leg_count = first_leg.len();

    let mut matches: Vec<Match> = first_leg
        .into_iter()
        .map(|(home, away)| Match::new(teams[home].clone(), teams[away].clone()))
        .collect();

    // Every reversed fixture goes in at the same position, so the block comes out mirrored
    for idx in 0..first_leg_count {
        let return_match = matches[idx].reversed();
        matches.insert(first_leg_count, return_match);
    }

    debug_assert_eq!(matches.len(), teams.len() * (teams.len() - 1));

    Ok(matches)
}

// Home/away roster indices for one meeting of every pair.
fn first_leg_pairings(team_count: usize) -> Vec<(usize, usize)> {
    // Odd rosters get a bye slot, which is index `team_count` and never plays
    let ring = if team_count % 2 == 0 { team_count - 1 } else { team_count };
    let wrap = |idx: usize| if idx % ring == 0 { ring } else { idx % ring };

    let mut pairings = Vec::with_capacity(team_count * (team_count - 1) / 2);

    let mut rounds = ring;
    while rounds > 0 {
        let flip = (ring - rounds) % 2 == 1;

        if rounds < team_count {
            pairings.push(if flip { (rounds, 0) } else { (0, rounds) });
        }

        for d in 1..=(ring - 1) / 2 {
            let a = wrap(rounds + ring - d);
            let b = wrap(rounds + d);
            if a >= team_count || b >= team_count { continue; }

            let (low, high) = (a.min(b), a.max(b));
            pairings.push(if flip { (high, low) } else { (low, high) });
        }

        rounds -= 1;
    }

    pairings
}

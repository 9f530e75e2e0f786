use env_logger::Env;
use log::{error, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;
use std::path::Path;

use group_stage_sim::analysis::winner_odds;
use group_stage_sim::data_loader::{default_roster, load_roster};
use group_stage_sim::report::{prediction_verdict, results_table, standings_table};
use group_stage_sim::*;

/*
    Inputs come from the environment:
    ROSTER     path to a .csv (name,key,rating) or .json roster, defaults to 1994-95 Group D
    PREDICT    key of the team you think wins the group
    SEED       fixes the dice, otherwise every run is different
    ODDS_RUNS  also estimate winner odds over this many runs
*/
fn main() {
    env_logger::Builder::from_env(Env::default()
        .default_filter_or("info")
    ).init();

    if let Err(e) = run() {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), GroupError> {
    let ctx = SimContext::default();

    let roster = match env::var("ROSTER") {
        Ok(path) => load_roster(Path::new(&path))?,
        Err(_) => default_roster(),
    };

    let mut group = Group::with_teams(roster.clone())?;
    group.create_matches()?;

    if let Ok(key) = env::var("PREDICT") {
        group.set_prediction(&key)?;
    }

    let seed = match env::var("SEED").ok().map(|s| s.parse::<u64>()) {
        Some(Ok(seed)) => seed,
        Some(Err(_)) => {
            warn!("SEED is not a number, using a random one");
            rand::random()
        }
        None => rand::random(),
    };
    info!("Kickoff with seed {seed}");

    let mut rng = StdRng::seed_from_u64(seed);
    group.simulate(&ctx, &mut rng)?;

    println!("{}", prediction_verdict(&group));
    println!();
    println!("{}", results_table(&group.matches));
    println!("{}", standings_table(&group.teams));
    println!("{}", results_to_json(&group.matches));

    if let Some(runs) = env::var("ODDS_RUNS").ok().and_then(|s| s.parse::<u32>().ok()) {
        for (key, odds) in winner_odds(&roster, &ctx, runs, seed)? {
            println!("{0:10} | {1:5.1}%", key, odds * 100.0);
        }
    }

    Ok(())
}

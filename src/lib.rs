pub mod analysis;
pub mod data_loader;
pub mod error;
pub mod fixture;
pub mod group;
pub mod ranking;
pub mod report;
pub mod schedule;
pub mod sim_context;
pub mod team;

pub use error::GroupError;
pub use fixture::{scoring_chance, simulate_score, Match};
pub use group::Group;
pub use ranking::{aggregate_result, compare_standing, sort_standings};
pub use report::{results_to_json, try_results_to_json, MatchRecord};
pub use schedule::create_matches;
pub use sim_context::SimContext;
pub use team::Team;

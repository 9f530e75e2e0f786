use thiserror::Error;

#[derive(Error, Debug)]
pub enum GroupError {
    #[error("A group needs at least two teams, got {0}")]
    InvalidRosterSize(usize),

    #[error("Team key {0} is already in the group")]
    DuplicateTeamKey(String),

    #[error("No team with key {0} in the group")]
    UnknownTeam(String),

    #[error("No fixtures scheduled, create the matches first")]
    NoFixtures,

    #[error("Match {home} vs {away} has already been played")]
    MatchAlreadyPlayed { home: String, away: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

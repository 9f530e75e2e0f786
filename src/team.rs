// Rating runs from 0 (very weak) to 100 (very strong). Professional clubs sit in the 50 - 100 range.
#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub name: String,
    pub key: String,
    pub rating: i32,

    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub goals_scored: u32,
    pub goals_conceded: u32,
}

impl Team {
    pub fn new(name: &str, key: &str, rating: i32) -> Self {
        Self {
            name: name.to_owned(),
            key: key.to_owned(),
            rating,

            wins: 0,
            losses: 0,
            draws: 0,
            goals_scored: 0,
            goals_conceded: 0,
        }
    }

    /// 3 for a win, 1 for a draw.
    pub fn points(&self) -> u32 {
        self.wins * 3 + self.draws
    }

    pub fn goal_difference(&self) -> i32 {
        self.goals_scored as i32 - self.goals_conceded as i32
    }

    pub fn matches_played(&self) -> u32 {
        self.wins + self.draws + self.losses
    }

    /// Books one finished match from this team's point of view.
    pub fn record_result(&mut self, goals_for: u32, goals_against: u32) {
        match goals_for.cmp(&goals_against) {
            std::cmp::Ordering::Greater => self.wins += 1,
            std::cmp::Ordering::Less => self.losses += 1,
            std::cmp::Ordering::Equal => self.draws += 1,
        }

        self.goals_scored += goals_for;
        self.goals_conceded += goals_against;
    }

    // The only way stats ever go down.
    pub fn reset(&mut self) {
        self.wins = 0;
        self.losses = 0;
        self.draws = 0;
        self.goals_scored = 0;
        self.goals_conceded = 0;
    }
}

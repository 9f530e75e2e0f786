// Tunables for the score simulation. All chances are whole percentages.
#[derive(Debug, Clone)]
pub struct SimContext {
    pub attack_rounds: u32,     // Also the cap on goals per side
    pub roll_sides: u32,        // Dice is rolled in 0..roll_sides

    pub base_chance: i32,
    pub home_advantage: i32,
    pub behind_penalty: i32,
    pub round_decay: i32,       // Subtracted once per round already played
}

impl SimContext {
    pub fn default() -> Self {
        Self {
            attack_rounds: 10,
            roll_sides: 100,

            base_chance: 40,
            home_advantage: 10,
            behind_penalty: 10,
            round_decay: 10,
        }
    }

    pub fn max_goals(&self) -> u32 {
        self.attack_rounds
    }
}

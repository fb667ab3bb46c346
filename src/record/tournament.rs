use super::*;
use crate::policy::AiType;

/// The full persisted account of one tournament.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TournamentRecord {
    pub number: u32,
    pub seed: u64,
    pub hands_per_level: u32,
    pub ai_types: Vec<AiType>,
    /// Rank per seat, 1 for the winner.
    pub finishing_order: Vec<u8>,
    /// Hand index each seat busted on. `None` for the winner.
    pub game_eliminated: Vec<Option<u32>>,
    pub hands: Vec<HandRecord>,
}

impl TournamentRecord {
    pub fn n(&self) -> usize {
        self.ai_types.len()
    }
    pub fn num_games(&self) -> u32 {
        self.hands.len() as u32
    }
    pub fn winner(&self) -> Option<usize> {
        self.finishing_order.iter().position(|r| *r == 1)
    }
    /// The compact view the summary parser recovers from disk.
    pub fn summary(&self) -> Summary {
        Summary {
            tournament_number: self.number,
            random_seed: self.seed,
            initial_player_count: self.n(),
            hands_per_level: self.hands_per_level,
            ai_types: self.ai_types.clone(),
            finishing_order: self.finishing_order.clone(),
            game_eliminated: self.game_eliminated.clone(),
            num_games: self.num_games(),
        }
    }
}

impl std::fmt::Display for TournamentRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.summary())
    }
}

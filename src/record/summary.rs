use crate::policy::AiType;

/// Compact per-tournament outcome, readable without the hand log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub tournament_number: u32,
    pub random_seed: u64,
    pub initial_player_count: usize,
    pub hands_per_level: u32,
    pub ai_types: Vec<AiType>,
    pub finishing_order: Vec<u8>,
    pub game_eliminated: Vec<Option<u32>>,
    pub num_games: u32,
}

impl Summary {
    /// Seat that finished first.
    pub fn winner(&self) -> Option<usize> {
        self.finishing_order.iter().position(|r| *r == 1)
    }
    /// Structural checks every completed tournament satisfies.
    pub fn validate(&self) -> Result<(), String> {
        let n = self.initial_player_count;
        if self.ai_types.len() != n
            || self.finishing_order.len() != n
            || self.game_eliminated.len() != n
        {
            return Err("per-seat arrays disagree on player count".to_string());
        }
        let mut ranks = self.finishing_order.clone();
        ranks.sort_unstable();
        if !ranks.iter().copied().eq(1..=n as u8) {
            return Err(format!("finishing order {:?} is not a permutation", self.finishing_order));
        }
        let survivors = self
            .game_eliminated
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_none())
            .map(|(seat, _)| seat)
            .collect::<Vec<_>>();
        if survivors.len() != 1 {
            return Err(format!("{} survivors", survivors.len()));
        }
        if Some(survivors[0]) != self.winner() {
            return Err("survivor is not ranked first".to_string());
        }
        if let Some(e) = self
            .game_eliminated
            .iter()
            .flatten()
            .find(|e| **e >= self.num_games)
        {
            return Err(format!("elimination at hand {} of {}", e, self.num_games));
        }
        Ok(())
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(
            f,
            "tournament {}  seed {}  players {}  hands {}",
            self.tournament_number, self.random_seed, self.initial_player_count, self.num_games
        )?;
        for seat in 0..self.initial_player_count {
            let eliminated = match self.game_eliminated[seat] {
                Some(hand) => format!("out on hand {}", hand),
                None => "winner".to_string(),
            };
            writeln!(
                f,
                "  seat {:>2}  {:<10}  rank {:>2}  {}",
                seat, self.ai_types[seat], self.finishing_order[seat], eliminated
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> Summary {
        Summary {
            tournament_number: 0,
            random_seed: 7,
            initial_player_count: 3,
            hands_per_level: 10,
            ai_types: vec![AiType::Random, AiType::TAG, AiType::LAG],
            finishing_order: vec![3, 1, 2],
            game_eliminated: vec![Some(4), None, Some(9)],
            num_games: 10,
        }
    }

    #[test]
    fn valid_summary_passes() {
        assert!(summary().validate().is_ok());
        assert_eq!(summary().winner(), Some(1));
    }

    #[test]
    fn duplicate_ranks_fail() {
        let mut s = summary();
        s.finishing_order = vec![2, 1, 2];
        assert!(s.validate().is_err());
    }

    #[test]
    fn late_elimination_fails() {
        let mut s = summary();
        s.game_eliminated[2] = Some(10);
        assert!(s.validate().is_err());
    }

    #[test]
    fn two_survivors_fail() {
        let mut s = summary();
        s.game_eliminated[0] = None;
        assert!(s.validate().is_err());
    }
}

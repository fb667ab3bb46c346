use super::card::Card;
use super::hand::Hand;
use super::street::Street;

/// The community cards visible to all players.
///
/// Cards are kept in the order they were dealt so a record can replay
/// the flop, turn and river exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Board(Vec<Card>);

impl Board {
    pub fn empty() -> Self {
        Self(Vec::with_capacity(5))
    }
    pub fn add(&mut self, hand: Hand) {
        self.0.extend(hand);
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    /// Infers the current street from board size.
    pub fn street(&self) -> Street {
        Street::from(self.0.len())
    }
    /// Cards revealed on a street, in deal order.
    pub fn on(&self, street: Street) -> Hand {
        let lo = street.n_observed().saturating_sub(street.n_dealt());
        let hi = street.n_observed().min(self.0.len());
        Hand::from(self.0.get(lo..hi).unwrap_or_default().to_vec())
    }
}

impl From<&Board> for Hand {
    fn from(board: &Board) -> Self {
        Hand::from(board.0.clone())
    }
}
impl From<Vec<Card>> for Board {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<String>>()
                .join(" ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn streets_follow_size() {
        let mut board = Board::empty();
        assert_eq!(board.street(), Street::Pref);
        board.add(Hand::try_from("2c 7d Ks").unwrap());
        assert_eq!(board.street(), Street::Flop);
        board.add(Hand::try_from("Ah").unwrap());
        assert_eq!(board.street(), Street::Turn);
        board.add(Hand::try_from("5h").unwrap());
        assert_eq!(board.street(), Street::Rive);
    }

    #[test]
    fn cards_by_street() {
        let board = Board::from(Hand::try_from("2c 7d Ks Ah 5h").unwrap().collect::<Vec<_>>());
        assert_eq!(board.on(Street::Turn).size(), 1);
        assert_eq!(board.on(Street::Flop).size(), 3);
        assert_eq!(board.on(Street::Pref).size(), 0);
    }
}

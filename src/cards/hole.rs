use super::card::Card;
use super::hand::Hand;
use super::rank::Rank;

/// A player's two private hole cards.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Hole(Hand);

impl Hole {
    /// Higher card first.
    pub fn cards(&self) -> (Card, Card) {
        let mut cards = self.0.into_iter();
        let lo = cards.next();
        let hi = cards.next();
        match (hi, lo) {
            (Some(hi), Some(lo)) => (hi, lo),
            _ => unreachable!("hole holds two cards"),
        }
    }
    pub fn ranks(&self) -> (Rank, Rank) {
        let (hi, lo) = self.cards();
        (hi.rank(), lo.rank())
    }
    pub fn is_suited(&self) -> bool {
        let (hi, lo) = self.cards();
        hi.suit() == lo.suit()
    }
    pub fn is_pair(&self) -> bool {
        let (hi, lo) = self.ranks();
        hi == lo
    }
}

impl From<(Card, Card)> for Hole {
    fn from((a, b): (Card, Card)) -> Self {
        debug_assert!(a != b);
        Self(Hand::add(Hand::from(a), Hand::from(b)))
    }
}
impl From<Hole> for Hand {
    fn from(hole: Hole) -> Self {
        hole.0
    }
}

impl TryFrom<&str> for Hole {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let hand = Hand::try_from(s)?;
        match hand.size() {
            2 => Ok(Self(hand)),
            _ => Err("hole must contain exactly two cards".into()),
        }
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let (hi, lo) = self.cards();
        write!(f, "{}{}", hi, lo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_card_first() {
        let hole = Hole::try_from("2c As").unwrap();
        assert_eq!(hole.ranks(), (Rank::Ace, Rank::Two));
        assert!(!hole.is_suited());
        assert!(!hole.is_pair());
    }

    #[test]
    fn suited_connectors() {
        let hole = Hole::try_from("9h Th").unwrap();
        assert!(hole.is_suited());
        assert_eq!(hole.to_string(), "Th9h");
    }
}

use super::card::Card;
use super::hand::Hand;
use super::hole::Hole;
use super::street::Street;
use crate::rng::Source;

/// A shuffled deck dealt from the top.
///
/// The order is fixed once, by the tournament's [`Source`], at the start of
/// every hand. Dealing never consults the generator again, so hole cards and
/// board are a pure function of the shuffle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck(Vec<Card>);

impl Deck {
    /// A fresh 52-card deck in shuffled order.
    pub fn shuffled(source: &mut Source) -> Self {
        let mut cards = Hand::from(Hand::mask()).collect::<Vec<Card>>();
        source.shuffle(&mut cards);
        cards.reverse();
        Self(cards)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    /// Removes and returns the top card.
    pub fn draw(&mut self) -> Card {
        self.0.pop().expect("52 cards cover ten seats and a board")
    }
    /// Burns one card, then reveals the next street's cards.
    pub fn deal(&mut self, street: Street) -> Hand {
        self.draw();
        (0..street.n_revealed())
            .map(|_| self.draw())
            .map(Hand::from)
            .fold(Hand::empty(), Hand::add)
    }
    /// One round of hole cards, first card to every seat then the second.
    pub fn holes(&mut self, n: usize) -> Vec<Hole> {
        let first = (0..n).map(|_| self.draw()).collect::<Vec<Card>>();
        let other = (0..n).map(|_| self.draw()).collect::<Vec<Card>>();
        first.into_iter().zip(other).map(Hole::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deals_without_replacement() {
        let mut deck = Deck::shuffled(&mut Source::from(7));
        let holes = deck.holes(10);
        let flop = deck.deal(Street::Pref);
        let turn = deck.deal(Street::Flop);
        let rive = deck.deal(Street::Turn);
        let seen = holes
            .into_iter()
            .map(Hand::from)
            .chain([flop, turn, rive])
            .fold(Hand::empty(), Hand::add);
        assert_eq!(seen.size(), 25);
        assert_eq!(deck.len(), 52 - 25 - 3);
    }

    #[test]
    fn same_seed_same_order() {
        let a = Deck::shuffled(&mut Source::from(42));
        let b = Deck::shuffled(&mut Source::from(42));
        let c = Deck::shuffled(&mut Source::from(43));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}

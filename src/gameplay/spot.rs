use super::*;
use crate::Chips;
use crate::Position;
use crate::cards::*;

/// Everything the acting seat is allowed to see when it decides.
///
/// Built from a [`Game`] at a choice node, then widened with tournament
/// context by the table. Policies only ever receive a `Spot`, never the
/// game itself, so opponents' hole cards cannot leak into a decision.
#[derive(Debug, Clone, PartialEq)]
pub struct Spot {
    position: Position,
    dealer: Position,
    seats: usize,
    active: usize,
    hole: Hole,
    board: Board,
    pot: Chips,
    stack: Chips,
    spent: Chips,
    to_call: Chips,
    to_raise: Chips,
    blinds: (Chips, Chips),
    legal: Vec<Action>,
    entrants: usize,
    chips: Chips,
}

impl From<&Game> for Spot {
    fn from(game: &Game) -> Self {
        let position = game.actor();
        let seat = game.seats()[position];
        Self {
            position,
            dealer: game.dealer(),
            seats: game.n(),
            active: game.active(),
            hole: seat.cards(),
            board: game.board().clone(),
            pot: game.pot(),
            stack: seat.stack(),
            spent: seat.spent(),
            to_call: game.to_call(),
            to_raise: game.to_raise(),
            blinds: game.blinds(),
            legal: game.legal(),
            entrants: game.n(),
            chips: game.total(),
        }
    }
}

impl Spot {
    /// Adds tournament context: players who started and chips in play.
    pub fn within(mut self, entrants: usize, chips: Chips) -> Self {
        self.entrants = entrants;
        self.chips = chips;
        self
    }
    /// Hand position of the acting seat.
    pub fn position(&self) -> Position {
        self.position
    }
    pub fn dealer(&self) -> Position {
        self.dealer
    }
    /// Seats dealt into the hand, which is every player still alive.
    pub fn seats(&self) -> usize {
        self.seats
    }
    /// Seats that have not folded.
    pub fn active(&self) -> usize {
        self.active
    }
    pub fn hole(&self) -> Hole {
        self.hole
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn street(&self) -> Street {
        self.board.street()
    }
    pub fn pot(&self) -> Chips {
        self.pot
    }
    pub fn stack(&self) -> Chips {
        self.stack
    }
    pub fn spent(&self) -> Chips {
        self.spent
    }
    pub fn to_call(&self) -> Chips {
        self.to_call
    }
    pub fn to_raise(&self) -> Chips {
        self.to_raise
    }
    pub fn blinds(&self) -> (Chips, Chips) {
        self.blinds
    }
    pub fn big_blind(&self) -> Chips {
        self.blinds.1
    }
    pub fn legal(&self) -> &[Action] {
        &self.legal
    }
    pub fn entrants(&self) -> usize {
        self.entrants
    }
    pub fn chips(&self) -> Chips {
        self.chips
    }
    /// Seats acting after the button, counting from 0 at the button.
    pub fn offset(&self) -> usize {
        (self.position + self.seats - self.dealer) % self.seats
    }
    pub fn name(&self) -> PositionName {
        PositionName::from_seat(self.position, self.dealer, self.seats)
    }
    /// Made-hand strength over hole and board cards.
    pub fn strength(&self) -> Strength {
        Strength::from(Hand::add(Hand::from(self.hole), Hand::from(&self.board)))
    }
    pub fn may(&self, label: &str) -> bool {
        self.legal.iter().any(|a| a.label() == label)
    }
    /// First legal action with the given label.
    pub fn find(&self, label: &str) -> Option<Action> {
        self.legal.iter().copied().find(|a| a.label() == label)
    }
    /// Check if possible, otherwise fold.
    pub fn passive(&self) -> Action {
        self.find("Check").unwrap_or(Action::Fold)
    }
}

impl std::fmt::Display for Spot {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:<5} {} | {} | pot {} stack {} call {}",
            self.name().to_string(),
            self.hole,
            self.board,
            self.pot,
            self.stack,
            self.to_call
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> Game {
        let holes = ["As Ks", "7c 2d", "Qh Qd"];
        let mut game = Game::new(
            holes
                .iter()
                .map(|h| (Hole::try_from(*h).unwrap(), 1000))
                .collect(),
            0,
            25,
            50,
        );
        while game.must_post() {
            game.act(game.posts());
        }
        game
    }

    #[test]
    fn hides_opponents() {
        let spot = game().spot();
        assert_eq!(spot.position(), 0);
        assert_eq!(spot.hole(), Hole::try_from("As Ks").unwrap());
        assert_eq!(spot.to_call(), 50);
        assert_eq!(spot.pot(), 75);
        assert_eq!(spot.name(), PositionName::BTN);
        assert_eq!(spot.chips(), 3000);
    }

    #[test]
    fn passive_prefers_check() {
        let spot = game().spot();
        assert_eq!(spot.passive(), Action::Fold);
        assert!(spot.may("Raise"));
        assert_eq!(spot.find("Call"), Some(Action::Call(50)));
    }

    #[test]
    fn within_overrides_context() {
        let spot = game().spot().within(10, 50000);
        assert_eq!(spot.entrants(), 10);
        assert_eq!(spot.chips(), 50000);
        assert_eq!(spot.seats(), 3);
    }
}

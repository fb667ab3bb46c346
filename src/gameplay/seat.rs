use crate::Chips;
use crate::cards::*;

/// A player's state within one hand.
///
/// # Fields
///
/// - `state`: Betting, Shoving (all-in), or Folding
/// - `stack`: Chips behind (not yet committed)
/// - `stake`: Chips committed this street
/// - `spent`: Total chips committed this hand
/// - `acted`: Has made a voluntary decision since the last raise
/// - `cards`: Hole cards (private)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Seat {
    state: State,
    stack: Chips,
    stake: Chips,
    spent: Chips,
    acted: bool,
    cards: Hole,
}

impl From<(Hole, Chips)> for Seat {
    fn from((cards, stack): (Hole, Chips)) -> Self {
        Self {
            cards,
            stack,
            spent: 0,
            stake: 0,
            acted: false,
            state: State::Betting,
        }
    }
}

impl Seat {
    pub fn stack(&self) -> Chips {
        self.stack
    }
    pub fn stake(&self) -> Chips {
        self.stake
    }
    pub fn state(&self) -> State {
        self.state
    }
    pub fn spent(&self) -> Chips {
        self.spent
    }
    pub fn cards(&self) -> Hole {
        self.cards
    }
    pub fn acted(&self) -> bool {
        self.acted
    }
    /// Commits chips from stack to pot.
    pub fn bet(&mut self, bet: Chips) {
        debug_assert!(bet <= self.stack);
        self.stack -= bet;
        self.stake += bet;
        self.spent += bet;
    }
    pub fn reset_state(&mut self, state: State) {
        self.state = state;
    }
    pub fn reset_stake(&mut self) {
        self.stake = 0;
    }
    pub fn reset_acted(&mut self, acted: bool) {
        self.acted = acted;
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {} {}", self.state, format!("${:>6}", self.stack), self.cards)
    }
}

/// Player betting status within a hand.
///
/// - `Betting`: Active and can still make decisions
/// - `Shoving`: All-in, no more decisions but still in the pot
/// - `Folding`: Out of the hand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    Betting,
    Shoving,
    Folding,
}

impl State {
    /// True if player is still competing for the pot.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Betting | Self::Shoving)
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            State::Betting => write!(f, "P"),
            State::Shoving => write!(f, "S"),
            State::Folding => write!(f, "F"),
        }
    }
}

use super::*;
use crate::Chips;
use crate::cards::*;

/// One seat's account at the end of a hand: what it put in, what it took
/// out, and whether it was still in to contest the pot.
#[derive(Debug, Clone)]
pub struct Settlement {
    risked: Chips,
    reward: Chips,
    status: State,
    strength: Strength,
}

impl From<(Chips, State, Strength)> for Settlement {
    fn from((risked, status, strength): (Chips, State, Strength)) -> Self {
        Self {
            risked,
            reward: 0,
            status,
            strength,
        }
    }
}

impl Settlement {
    pub fn risked(&self) -> Chips {
        self.risked
    }
    pub fn reward(&self) -> Chips {
        self.reward
    }
    pub fn status(&self) -> State {
        self.status
    }
    pub fn strength(&self) -> &Strength {
        &self.strength
    }
    /// Folded seats never win, whatever they hold.
    pub fn contests(&self) -> bool {
        self.status != State::Folding
    }
    /// Net chips, negative for a loss.
    pub fn won(&self) -> Chips {
        self.reward - self.risked
    }
    pub fn add(&mut self, amount: Chips) {
        self.reward += amount;
    }
}

impl std::fmt::Display for Settlement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:>+7} {}", self.won(), self.strength)
    }
}

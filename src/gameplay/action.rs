use crate::Chips;
use crate::cards::*;

const MASK: u32 = 0xFF;
const BITS: u32 = MASK.count_ones();

/// A player decision or chance event in a hand.
///
/// Betting variants carry the chips moved from the actor's stack by that
/// action, not the size of the bet they reach. Draws carry the revealed
/// board cards.
///
/// # Serialization
///
/// Actions pack into `u32` for the record format: 8 bits for the variant
/// tag, the remaining 24 bits for chips or up to three cards.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub enum Action {
    Draw(Hand),
    Fold,
    Call(Chips),
    Check,
    Raise(Chips),
    Shove(Chips),
    Blind(Chips),
}

impl Action {
    pub fn is_choice(&self) -> bool {
        !self.is_chance()
    }
    pub fn is_chance(&self) -> bool {
        matches!(self, Action::Draw(_))
    }
    pub fn is_aggro(&self) -> bool {
        matches!(self, Action::Raise(_) | Action::Shove(_))
    }
    pub fn is_blind(&self) -> bool {
        matches!(self, Action::Blind(_))
    }
    /// Chips moved by a betting action.
    pub fn amount(&self) -> Chips {
        match *self {
            Action::Call(amount)
            | Action::Raise(amount)
            | Action::Shove(amount)
            | Action::Blind(amount) => amount,
            _ => 0,
        }
    }
    pub fn label(&self) -> &'static str {
        match self {
            Action::Fold => "Fold",
            Action::Check => "Check",
            Action::Call(_) => "Call",
            Action::Raise(_) => "Raise",
            Action::Shove(_) => "Shove",
            Action::Draw(_) => "Draw",
            Action::Blind(_) => "Blind",
        }
    }
}

impl TryFrom<u32> for Action {
    type Error = String;
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        let kind = value & MASK;
        let data = value >> BITS;
        let bets = data as Chips;
        match kind {
            0 => Ok(Action::Fold),
            1 => Ok(Action::Check),
            2 => Ok(Action::Call(bets)),
            3 => Ok(Action::Raise(bets)),
            4 => Ok(Action::Shove(bets)),
            5 => Ok(Action::Blind(bets)),
            6 => [0, 1, 2]
                .iter()
                .map(|i| BITS * i)
                .map(|r| data >> r)
                .map(|x| x & MASK)
                .filter(|&x| x > 0)
                .map(|x| Card::try_from(x as u8 - 1).map(Hand::from))
                .collect::<Result<Vec<Hand>, _>>()
                .map(|hands| hands.into_iter().fold(Hand::empty(), Hand::add))
                .map(Action::Draw),
            _ => Err(format!("unknown action tag {}", kind)),
        }
    }
}

impl From<Action> for u32 {
    fn from(action: Action) -> Self {
        match action {
            Action::Fold => 0,
            Action::Check => 1,
            Action::Call(bets) => 2 | ((bets as u32) << BITS),
            Action::Raise(bets) => 3 | ((bets as u32) << BITS),
            Action::Shove(bets) => 4 | ((bets as u32) << BITS),
            Action::Blind(bets) => 5 | ((bets as u32) << BITS),
            Action::Draw(hand) => {
                6 | (hand
                    .into_iter()
                    .take(3)
                    .map(|c| u8::from(c))
                    .map(|c| c as u32 + 1)
                    .enumerate()
                    .map(|(i, x)| x << (i as u32 * BITS))
                    .fold(0u32, |hand, card| hand | card)
                    << BITS)
            }
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Action::Fold => write!(f, "FOLD"),
            Action::Check => write!(f, "CHECK"),
            Action::Draw(hand) => write!(f, "DEAL  {}", hand),
            Action::Call(amount) => write!(f, "CALL  {}", amount),
            Action::Blind(amount) => write!(f, "BLIND {}", amount),
            Action::Raise(amount) => write!(f, "RAISE {}", amount),
            Action::Shove(amount) => write!(f, "SHOVE {}", amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u32() {
        for action in [
            Action::Fold,
            Action::Raise(1),
            Action::Blind(25),
            Action::Call(50000),
            Action::Shove(1738),
            Action::Draw(Hand::try_from("2c Th As").unwrap()),
        ] {
            assert_eq!(Ok(action), Action::try_from(u32::from(action)));
        }
    }

    #[test]
    fn unknown_tag_rejected() {
        assert!(Action::try_from(0xFFu32).is_err());
    }
}

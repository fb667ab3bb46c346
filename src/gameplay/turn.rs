/// Whose turn it is to act in a hand.
///
/// - `Choice(usize)`: the seat at this hand position must decide
/// - `Chance`: the dealer reveals the next street
/// - `Terminal`: the hand is over, compute payoffs
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum Turn {
    Terminal,
    Chance,
    Choice(usize),
}

impl Turn {
    pub fn is_choice(&self) -> bool {
        matches!(self, Self::Choice(_))
    }
    pub fn is_chance(&self) -> bool {
        matches!(self, Self::Chance)
    }
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminal)
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Choice(c) => write!(f, "P{}", c),
            Self::Terminal => write!(f, "-"),
            Self::Chance => write!(f, "?"),
        }
    }
}

/// Named position at a poker table relative to the dealer button.
///
/// Position names vary by table size:
/// - Heads-up (2): BTN (=SB), BB
/// - 3..=6: BTN, SB, BB, then UTG/HJ/CO as seats allow
/// - 7..=10: BTN, SB, BB, UTG(0..n), MP(0..n), HJ, CO
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PositionName {
    BTN,
    SB,
    BB,
    UTG(usize),
    MP(usize),
    HJ,
    CO,
}

impl PositionName {
    /// Computes the position name for a seat relative to the dealer.
    pub fn from_seat(seat: usize, dealer: usize, table: usize) -> Self {
        let offset = (seat + table - dealer) % table;
        let behind = table - offset;
        match (table, offset) {
            (2, 0) => Self::BTN,
            (2, _) => Self::BB,
            (_, 0) => Self::BTN,
            (_, 1) => Self::SB,
            (_, 2) => Self::BB,
            (_, _) if behind == 1 && table > 4 => Self::CO,
            (_, _) if behind == 2 && table > 5 => Self::HJ,
            (t, o) if t >= 7 && o >= 5 => Self::MP(o - 5),
            (_, o) => Self::UTG(o - 3),
        }
    }
}

impl std::fmt::Display for PositionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BTN => write!(f, "BTN"),
            Self::SB => write!(f, "SB"),
            Self::BB => write!(f, "BB"),
            Self::UTG(0) => write!(f, "UTG"),
            Self::UTG(n) => write!(f, "UTG+{}", n),
            Self::MP(0) => write!(f, "MP"),
            Self::MP(n) => write!(f, "MP+{}", n),
            Self::HJ => write!(f, "HJ"),
            Self::CO => write!(f, "CO"),
        }
    }
}

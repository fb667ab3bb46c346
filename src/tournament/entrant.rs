use crate::Chips;
use crate::STARTING_STACK;
use crate::policy::AiType;

/// A tournament seat: who plays it and how it is doing.
///
/// Unlike a hand [`Seat`](crate::gameplay::Seat), an entrant lives for the
/// whole tournament. Once eliminated it keeps its hand index and rank and
/// is never dealt in again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entrant {
    tag: AiType,
    stack: Chips,
    rank: Option<u8>,
    eliminated: Option<u32>,
}

impl From<AiType> for Entrant {
    fn from(tag: AiType) -> Self {
        Self {
            tag,
            stack: STARTING_STACK,
            rank: None,
            eliminated: None,
        }
    }
}

impl Entrant {
    pub fn tag(&self) -> AiType {
        self.tag
    }
    pub fn stack(&self) -> Chips {
        self.stack
    }
    pub fn rank(&self) -> Option<u8> {
        self.rank
    }
    /// Hand index this seat busted on.
    pub fn eliminated(&self) -> Option<u32> {
        self.eliminated
    }
    pub fn is_alive(&self) -> bool {
        self.stack > 0
    }
    pub fn win(&mut self, delta: Chips) {
        debug_assert!(self.stack + delta >= 0);
        self.stack += delta;
    }
    pub fn eliminate(&mut self, hand: u32, rank: u8) {
        debug_assert!(self.stack == 0);
        self.eliminated = Some(hand);
        self.rank = Some(rank);
    }
    pub fn crown(&mut self) {
        debug_assert!(self.stack > 0);
        self.rank = Some(1);
    }
}

impl std::fmt::Display for Entrant {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match (self.rank, self.eliminated) {
            (Some(r), Some(h)) => write!(f, "{:<10} #{:<2} out on hand {}", self.tag, r, h),
            (Some(r), None) => write!(f, "{:<10} #{:<2} ${}", self.tag, r, self.stack),
            _ => write!(f, "{:<10}     ${}", self.tag, self.stack),
        }
    }
}

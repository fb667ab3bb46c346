use crate::BIG_BLIND;
use crate::BLIND_MULTIPLIERS;
use crate::Chips;
use crate::SMALL_BLIND;

/// Blind level ordinal. Advances once every `hands_per_level` hands and
/// keeps counting after the schedule tops out, while blinds stay put.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(u32);

impl Level {
    /// Level in force for the given zero-based hand.
    pub fn of(hand: u32, hands_per_level: u32) -> Self {
        debug_assert!(hands_per_level > 0);
        Self(hand / hands_per_level)
    }
    pub fn index(&self) -> u32 {
        self.0
    }
    fn multiplier(&self) -> Chips {
        let top = BLIND_MULTIPLIERS.len() - 1;
        BLIND_MULTIPLIERS[(self.0 as usize).min(top)]
    }
    pub fn small(&self) -> Chips {
        SMALL_BLIND * self.multiplier()
    }
    pub fn big(&self) -> Chips {
        BIG_BLIND * self.multiplier()
    }
}

impl From<u32> for Level {
    fn from(n: u32) -> Self {
        Self(n)
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "L{} {}/{}", self.0, self.small(), self.big())
    }
}

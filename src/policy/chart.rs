use crate::cards::*;
use crate::gameplay::Spot;

/// How late a seat acts after the flop, in thirds of the table.
///
/// The small blind acts first and the button last. Heads-up the button is
/// `Late` and the big blind `Mid`. A starting hand is listed at the
/// tightest tier it may be opened from, and a seat in tier `t` plays every
/// hand listed at `t` or tighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    Early,
    Mid,
    Late,
}

impl Tier {
    pub fn of(spot: &Spot) -> Self {
        let n = spot.seats();
        let order = (spot.offset() + n - 1) % n;
        match (n, (3 * order) / n) {
            (2, 1) => Self::Late,
            (2, _) => Self::Mid,
            (_, 0) => Self::Early,
            (_, 1) => Self::Mid,
            _ => Self::Late,
        }
    }
    /// One tier looser.
    pub fn later(self) -> Self {
        match self {
            Self::Early => Self::Mid,
            Self::Mid | Self::Late => Self::Late,
        }
    }
}

/// Starting-hand charts keyed by shorthand: `AKs`, `AKo`, `TT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chart {
    FullRingTag,
    ShortHandedTag,
    Lag,
}

impl Chart {
    /// Earliest tier the hole cards may be played from, if at all.
    pub fn tier(&self, hole: Hole) -> Option<Tier> {
        let name = Self::shorthand(hole);
        self.table()
            .iter()
            .find(|(hand, _)| *hand == name)
            .map(|(_, tier)| *tier)
    }
    /// Premium hands: listed in the tightest tier.
    pub fn is_premium(&self, hole: Hole) -> bool {
        self.tier(hole) == Some(Tier::Early)
    }
    fn shorthand(hole: Hole) -> String {
        let (hi, lo) = hole.ranks();
        match (hole.is_pair(), hole.is_suited()) {
            (true, _) => format!("{}{}", hi, lo),
            (false, true) => format!("{}{}s", hi, lo),
            (false, false) => format!("{}{}o", hi, lo),
        }
    }
    fn table(&self) -> &'static [(&'static str, Tier)] {
        match self {
            Self::FullRingTag => FULL_RING_TAG,
            Self::ShortHandedTag => SHORT_HANDED_TAG,
            Self::Lag => LAG,
        }
    }
}

const FULL_RING_TAG: &[(&str, Tier)] = &[
    ("AA", Tier::Early),
    ("KK", Tier::Early),
    ("QQ", Tier::Early),
    ("JJ", Tier::Early),
    ("AKs", Tier::Early),
    ("AQs", Tier::Mid),
    ("TT", Tier::Mid),
    ("AKo", Tier::Mid),
    ("AJs", Tier::Late),
    ("KQs", Tier::Late),
    ("AQo", Tier::Late),
    ("99", Tier::Late),
];

const SHORT_HANDED_TAG: &[(&str, Tier)] = &[
    ("AA", Tier::Early),
    ("KK", Tier::Early),
    ("QQ", Tier::Early),
    ("JJ", Tier::Early),
    ("AKs", Tier::Early),
    ("AQs", Tier::Early),
    ("AKo", Tier::Early),
    ("AQo", Tier::Mid),
    ("AJs", Tier::Mid),
    ("KQs", Tier::Mid),
    ("TT", Tier::Mid),
    ("99", Tier::Mid),
    ("ATs", Tier::Late),
    ("AJo", Tier::Late),
    ("KJs", Tier::Late),
    ("88", Tier::Late),
];

const LAG: &[(&str, Tier)] = &[
    ("AA", Tier::Early),
    ("KK", Tier::Early),
    ("QQ", Tier::Early),
    ("JJ", Tier::Early),
    ("TT", Tier::Early),
    ("99", Tier::Early),
    ("88", Tier::Early),
    ("77", Tier::Early),
    ("AKs", Tier::Early),
    ("AQs", Tier::Early),
    ("AJs", Tier::Early),
    ("ATs", Tier::Early),
    ("KQs", Tier::Early),
    ("KJs", Tier::Early),
    ("KTs", Tier::Early),
    ("QJs", Tier::Early),
    ("QTs", Tier::Early),
    ("JTs", Tier::Early),
    ("J9s", Tier::Early),
    ("T9s", Tier::Early),
    ("AKo", Tier::Early),
    ("66", Tier::Mid),
    ("55", Tier::Mid),
    ("A9s", Tier::Mid),
    ("A8s", Tier::Mid),
    ("A7s", Tier::Mid),
    ("A6s", Tier::Mid),
    ("K9s", Tier::Mid),
    ("Q9s", Tier::Mid),
    ("Q8s", Tier::Mid),
    ("J8s", Tier::Mid),
    ("T8s", Tier::Mid),
    ("98s", Tier::Mid),
    ("AQo", Tier::Mid),
    ("44", Tier::Late),
    ("33", Tier::Late),
    ("22", Tier::Late),
    ("A5s", Tier::Late),
    ("A4s", Tier::Late),
    ("A3s", Tier::Late),
    ("A2s", Tier::Late),
    ("K8s", Tier::Late),
    ("K7s", Tier::Late),
    ("K6s", Tier::Late),
    ("K5s", Tier::Late),
    ("K4s", Tier::Late),
    ("K3s", Tier::Late),
    ("K2s", Tier::Late),
    ("J7s", Tier::Late),
    ("T7s", Tier::Late),
    ("97s", Tier::Late),
    ("96s", Tier::Late),
    ("87s", Tier::Late),
    ("86s", Tier::Late),
    ("76s", Tier::Late),
    ("75s", Tier::Late),
    ("65s", Tier::Late),
    ("54s", Tier::Late),
    ("AJo", Tier::Late),
];

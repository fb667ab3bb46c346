use super::rank::Rank;

/// Tie-breaking ranks outside a hand's category, as a 13-bit rank mask.
///
/// Every hand of one category plays the same number of kickers, so the
/// integer order of the masks is the poker order.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct Kickers(u16);

impl From<u16> for Kickers {
    fn from(bits: u16) -> Self {
        Self(bits & Rank::mask())
    }
}

/// Ranks low to high.
impl From<Kickers> for Vec<Rank> {
    fn from(kickers: Kickers) -> Self {
        Rank::all()
            .into_iter()
            .filter(|r| kickers.0 & u16::from(*r) != 0)
            .collect()
    }
}

impl std::fmt::Display for Kickers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        Vec::<Rank>::from(*self)
            .iter()
            .rev()
            .try_for_each(|rank| write!(f, "{}", rank))
    }
}

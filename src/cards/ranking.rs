use super::rank::Rank;

/// Hand category with the ranks that make it, weakest first.
///
/// Ties within a category fall through to [`Kickers`](super::kicks::Kickers).
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub enum Ranking {
    HighCard(Rank),
    OnePair(Rank),
    TwoPair(Rank, Rank),
    ThreeOAK(Rank),
    Straight(Rank),
    Flush(Rank),
    FullHouse(Rank, Rank),
    FourOAK(Rank),
    StraightFlush(Rank),
}

impl Ranking {
    /// Cards outside the category that still play in a five-card hand.
    pub fn n_kickers(&self) -> usize {
        match self {
            Self::HighCard(_) => 4,
            Self::OnePair(_) => 3,
            Self::ThreeOAK(_) => 2,
            Self::TwoPair(..) | Self::FourOAK(_) => 1,
            Self::Straight(_) | Self::Flush(_) | Self::FullHouse(..) | Self::StraightFlush(_) => 0,
        }
    }
    /// HighCard = 0 through StraightFlush = 8.
    pub fn category(&self) -> u8 {
        match self {
            Self::HighCard(_) => 0,
            Self::OnePair(_) => 1,
            Self::TwoPair(..) => 2,
            Self::ThreeOAK(_) => 3,
            Self::Straight(_) => 4,
            Self::Flush(_) => 5,
            Self::FullHouse(..) => 6,
            Self::FourOAK(_) => 7,
            Self::StraightFlush(_) => 8,
        }
    }
    /// Ranks still free to serve as kickers.
    pub fn mask(&self) -> u16 {
        match *self {
            Self::TwoPair(hi, lo) => Rank::mask() & !(u16::from(hi) | u16::from(lo)),
            Self::HighCard(r) | Self::OnePair(r) | Self::ThreeOAK(r) | Self::FourOAK(r) => {
                Rank::mask() & !u16::from(r)
            }
            Self::Straight(_) | Self::Flush(_) | Self::FullHouse(..) | Self::StraightFlush(_) => 0,
        }
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::HighCard(r) => write!(f, "{} high", r),
            Self::OnePair(r) => write!(f, "pair of {}", r),
            Self::TwoPair(hi, lo) => write!(f, "two pair {}{}", hi, lo),
            Self::ThreeOAK(r) => write!(f, "three {}", r),
            Self::Straight(r) => write!(f, "straight to {}", r),
            Self::Flush(r) => write!(f, "flush {} high", r),
            Self::FullHouse(hi, lo) => write!(f, "full house {}{}", hi, lo),
            Self::FourOAK(r) => write!(f, "four {}", r),
            Self::StraightFlush(r) => write!(f, "straight flush to {}", r),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_are_ordered() {
        let hands = [
            Ranking::HighCard(Rank::Ace),
            Ranking::OnePair(Rank::Two),
            Ranking::TwoPair(Rank::Three, Rank::Two),
            Ranking::ThreeOAK(Rank::Two),
            Ranking::Straight(Rank::Five),
            Ranking::Flush(Rank::Seven),
            Ranking::FullHouse(Rank::Two, Rank::Three),
            Ranking::FourOAK(Rank::Two),
            Ranking::StraightFlush(Rank::Five),
        ];
        assert!(hands.windows(2).all(|w| w[0] < w[1]));
        assert!(hands.iter().enumerate().all(|(i, r)| r.category() as usize == i));
    }
}

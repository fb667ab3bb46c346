/// Betting rounds, in order.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Street {
    Pref,
    Flop,
    Turn,
    Rive,
}

impl Street {
    /// Panics past the river, which has no successor.
    pub const fn next(&self) -> Self {
        match self {
            Self::Pref => Self::Flop,
            Self::Flop => Self::Turn,
            Self::Turn => Self::Rive,
            Self::Rive => panic!("no street after the river"),
        }
    }
    /// Size of the board once this street is dealt.
    pub const fn n_observed(&self) -> usize {
        match self {
            Self::Pref => 0,
            Self::Flop => 3,
            Self::Turn => 4,
            Self::Rive => 5,
        }
    }
    /// Cards this street adds to the board.
    pub const fn n_dealt(&self) -> usize {
        match self {
            Self::Pref => 0,
            Self::Flop => 3,
            Self::Turn | Self::Rive => 1,
        }
    }
    /// Cards the next street adds, i.e. dealt on leaving this one.
    pub const fn n_revealed(&self) -> usize {
        self.next().n_dealt()
    }
}

/// Street implied by a board of `n` cards.
impl From<usize> for Street {
    fn from(n: usize) -> Self {
        match n {
            0 => Self::Pref,
            3 => Self::Flop,
            4 => Self::Turn,
            5 => Self::Rive,
            _ => panic!("no street has {} board cards", n),
        }
    }
}

impl std::fmt::Display for Street {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.pad(match self {
            Self::Pref => "preflop",
            Self::Flop => "flop",
            Self::Turn => "turn",
            Self::Rive => "river",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_grows_three_one_one() {
        assert_eq!(Street::Pref.n_revealed(), 3);
        assert_eq!(Street::Flop.n_revealed(), 1);
        assert_eq!(Street::Turn.n_revealed(), 1);
        assert_eq!(Street::from(Street::Turn.n_observed()), Street::Turn);
    }
}

use super::*;
use crate::Chips;

/// Splits the chips at the end of a hand.
///
/// Pots are layered by contribution level: every distinct amount risked
/// closes a slice that only seats who reached it can win. Each slice goes
/// to the strongest contesting seats in it, split evenly, with odd chips to
/// the earliest seats in hand order. Uncalled excess forms a slice its
/// owner wins alone.
pub struct Showdown {
    payouts: Vec<Settlement>,
}

impl From<Vec<Settlement>> for Showdown {
    fn from(payouts: Vec<Settlement>) -> Self {
        Self { payouts }
    }
}

impl Showdown {
    pub fn settle(mut self) -> Vec<Settlement> {
        let mut levels = self
            .payouts
            .iter()
            .map(|p| p.risked())
            .filter(|r| *r > 0)
            .collect::<Vec<Chips>>();
        levels.sort_unstable();
        levels.dedup();
        let mut floor = 0;
        let mut carry = 0;
        for level in levels {
            let chips = carry + self.slice(floor, level);
            let winners = self.winners(level);
            if winners.is_empty() {
                carry = chips;
            } else {
                self.split(&winners, chips);
                carry = 0;
            }
            floor = level;
        }
        if carry > 0 {
            let winners = self.winners(0);
            self.split(&winners, carry);
        }
        debug_assert_eq!(
            self.payouts.iter().map(|p| p.risked()).sum::<Chips>(),
            self.payouts.iter().map(|p| p.reward()).sum::<Chips>(),
            "undistributed chips at showdown"
        );
        self.payouts
    }

    /// Chips committed between two contribution levels.
    fn slice(&self, floor: Chips, level: Chips) -> Chips {
        self.payouts
            .iter()
            .map(|p| p.risked().clamp(floor, level) - floor)
            .sum()
    }

    /// Best contesting hands among seats that put in at least `level`.
    fn winners(&self, level: Chips) -> Vec<usize> {
        let eligible = || {
            self.payouts
                .iter()
                .enumerate()
                .filter(|(_, p)| p.contests())
                .filter(move |(_, p)| p.risked() >= level)
        };
        match eligible().map(|(_, p)| p.strength()).max() {
            None => vec![],
            Some(best) => eligible()
                .filter(|(_, p)| p.strength() == best)
                .map(|(i, _)| i)
                .collect(),
        }
    }

    /// Pays out a slice, odd chips first to the earliest winners.
    fn split(&mut self, winners: &[usize], chips: Chips) {
        let n = winners.len() as Chips;
        for (k, i) in winners.iter().enumerate() {
            let bonus = if (k as Chips) < chips % n { 1 } else { 0 };
            self.payouts[*i].add(chips / n + bonus);
        }
    }
}

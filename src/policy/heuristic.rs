use super::*;
use crate::BLUFF_FREQUENCY;
use crate::Chips;
use crate::FULL_RING;
use crate::OPEN_SIZE;
use crate::cards::*;
use crate::gameplay::*;
use crate::rng::Source;

/// Chart-driven preflop play and made-hand postflop play.
///
/// # Preflop
///
/// - Hands outside the chart for this seat's tier are checked or folded
/// - Premium hands (listed in the tightest tier) raise and re-raise
/// - Other playable hands open to `OPEN_SIZE` big blinds, or call a bet
///   no larger than that (twice that for loose play)
///
/// # Postflop
///
/// - Two pair or better bets half the pot and raises into bets
/// - One pair calls bets up to half the pot; loose play also leads with it
/// - Nothing checks or folds, except for occasional loose bluffs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heuristic {
    loose: bool,
    shift: bool,
}

impl Heuristic {
    /// Tight-aggressive.
    pub fn tag() -> Self {
        Self {
            loose: false,
            shift: false,
        }
    }
    /// Loose-aggressive.
    pub fn lag() -> Self {
        Self {
            loose: true,
            shift: false,
        }
    }
    /// Tight charts played as if one tier later.
    pub fn mtag() -> Self {
        Self {
            loose: false,
            shift: true,
        }
    }

    fn chart(&self, spot: &Spot) -> Chart {
        match (self.loose, spot.seats() >= FULL_RING) {
            (true, _) => Chart::Lag,
            (false, true) => Chart::FullRingTag,
            (false, false) => Chart::ShortHandedTag,
        }
    }
    fn tier(&self, spot: &Spot) -> Tier {
        match self.shift {
            true => Tier::of(spot).later(),
            false => Tier::of(spot),
        }
    }

    fn preflop(&self, spot: &Spot) -> Action {
        let chart = self.chart(spot);
        let hole = spot.hole();
        let seat = self.tier(spot);
        match chart.tier(hole) {
            None => spot.passive(),
            Some(tier) if tier > seat => spot.passive(),
            Some(_) if chart.is_premium(hole) => {
                let target = 3 * (spot.to_call() + spot.big_blind());
                Self::aggress(spot, target)
            }
            Some(_) if spot.to_call() + spot.spent() <= spot.big_blind() => {
                let target = OPEN_SIZE * spot.big_blind() - spot.spent();
                Self::aggress(spot, target)
            }
            Some(_) if spot.to_call() <= self.tolerance(spot) => Self::defend(spot),
            Some(_) => spot.passive(),
        }
    }

    fn postflop(&self, spot: &Spot, rng: &mut Source) -> Action {
        let half = spot.to_call() + spot.pot() / 2;
        match spot.strength().ranking() {
            r if r.category() >= 2 => Self::aggress(spot, half),
            Ranking::OnePair(_) if self.loose && spot.may("Check") => Self::aggress(spot, half),
            Ranking::OnePair(_) if spot.to_call() <= spot.pot() / 2 => Self::defend(spot),
            Ranking::HighCard(_)
                if self.loose && spot.may("Check") && rng.chance(BLUFF_FREQUENCY) =>
            {
                Self::aggress(spot, half)
            }
            _ => spot.passive(),
        }
    }

    /// Largest preflop bet a playable hand will call.
    fn tolerance(&self, spot: &Spot) -> Chips {
        match self.loose {
            true => 2 * OPEN_SIZE * spot.big_blind(),
            false => OPEN_SIZE * spot.big_blind(),
        }
    }
    /// Raise toward `target` chips, or the closest aggressive option.
    fn aggress(spot: &Spot, target: Chips) -> Action {
        if spot.may("Raise") {
            Action::Raise(target.clamp(spot.to_raise(), spot.stack() - 1))
        } else if let Some(shove) = spot.find("Shove") {
            shove
        } else {
            Self::defend(spot)
        }
    }
    /// Call if facing a bet, check otherwise.
    fn defend(spot: &Spot) -> Action {
        spot.find("Call")
            .or_else(|| spot.find("Check"))
            .or_else(|| spot.find("Shove"))
            .unwrap_or(Action::Fold)
    }
}

impl Policy for Heuristic {
    fn decide(&self, spot: &Spot, rng: &mut Source) -> crate::Result<Action> {
        match spot.street() {
            Street::Pref => Ok(self.preflop(spot)),
            _ => Ok(self.postflop(spot, rng)),
        }
    }
}

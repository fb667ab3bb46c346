use super::card::Card;
use super::hand::Hand;
use super::kicks::Kickers;
use super::rank::Rank;
use super::ranking::Ranking;
use super::suit::Suit;

/// A-2-3-4-5 as a rank mask.
const WHEEL: u16 = 0b_1000000001111;

/// Ranks one to seven cards.
///
/// Counts cards per rank once up front, then walks the categories from
/// straight flush down and takes the first that matches. Folded seats and
/// early all-ins can be ranked on partial boards.
pub struct Evaluator {
    hand: Hand,
    counts: [u8; 13],
}

impl From<Hand> for Evaluator {
    fn from(hand: Hand) -> Self {
        let mut counts = [0u8; 13];
        for card in Vec::<Card>::from(hand) {
            counts[u8::from(card.rank()) as usize] += 1;
        }
        Self { hand, counts }
    }
}

impl Evaluator {
    pub fn find_ranking(&self) -> Ranking {
        let flush = self.flush();
        if let Some(high) = flush.and_then(|suit| straight(u16::from(self.hand.of(&suit)))) {
            return Ranking::StraightFlush(high);
        }
        if let Some(quads) = self.highest(4, None) {
            return Ranking::FourOAK(quads);
        }
        if let Some(trips) = self.highest(3, None) {
            if let Some(pair) = self.highest(2, Some(trips)) {
                return Ranking::FullHouse(trips, pair);
            }
        }
        if let Some(suit) = flush {
            return Ranking::Flush(Rank::from(u16::from(self.hand.of(&suit))));
        }
        if let Some(high) = straight(u16::from(self.hand)) {
            return Ranking::Straight(high);
        }
        if let Some(trips) = self.highest(3, None) {
            return Ranking::ThreeOAK(trips);
        }
        match self.highest(2, None) {
            Some(hi) => match self.highest(2, Some(hi)) {
                Some(lo) => Ranking::TwoPair(hi, lo),
                None => Ranking::OnePair(hi),
            },
            None => Ranking::HighCard(self.highest(1, None).unwrap_or(Rank::Two)),
        }
    }

    /// Best remaining ranks outside the ranking itself, as many as the
    /// category plays.
    pub fn find_kickers(&self, ranking: Ranking) -> Kickers {
        let n = ranking.n_kickers();
        let mut bits = u16::from(self.hand) & ranking.mask();
        while bits.count_ones() as usize > n {
            bits &= bits - 1;
        }
        Kickers::from(bits)
    }

    /// Highest rank held at least `n` times, other than `skip`.
    fn highest(&self, n: u8, skip: Option<Rank>) -> Option<Rank> {
        (0..13u8)
            .rev()
            .map(Rank::from)
            .filter(|r| Some(*r) != skip)
            .find(|r| self.counts[u8::from(*r) as usize] >= n)
    }

    fn flush(&self) -> Option<Suit> {
        Suit::all()
            .into_iter()
            .find(|suit| self.hand.of(suit).size() >= 5)
    }
}

/// Top rank of the best five-card run in a rank mask.
fn straight(ranks: u16) -> Option<Rank> {
    match ranks & ranks << 1 & ranks << 2 & ranks << 3 & ranks << 4 {
        0 if ranks & WHEEL == WHEEL => Some(Rank::Five),
        0 => None,
        runs => Some(Rank::from(runs)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(cards: &str) -> (Ranking, Vec<Rank>) {
        let eval = Evaluator::from(Hand::try_from(cards).unwrap());
        let ranking = eval.find_ranking();
        let mut kickers = Vec::<Rank>::from(eval.find_kickers(ranking));
        kickers.reverse();
        (ranking, kickers)
    }

    #[test]
    fn high_card() {
        use Rank::*;
        assert_eq!(
            eval("As Kh Qd Jc 9s"),
            (Ranking::HighCard(Ace), vec![King, Queen, Jack, Nine])
        );
        assert_eq!(eval("As Kh"), (Ranking::HighCard(Ace), vec![King]));
    }

    #[test]
    fn pairs() {
        use Rank::*;
        assert_eq!(
            eval("As Ah Kd Qc Js"),
            (Ranking::OnePair(Ace), vec![King, Queen, Jack])
        );
        assert_eq!(
            eval("As Ah Kd Kc Qs Jh 9d"),
            (Ranking::TwoPair(Ace, King), vec![Queen])
        );
        assert_eq!(
            eval("As Ah Kd Kc Qs Qh Jd"),
            (Ranking::TwoPair(Ace, King), vec![Queen])
        );
    }

    #[test]
    fn sets_and_boats() {
        use Rank::*;
        assert_eq!(
            eval("As Ah Ad Kc Qs"),
            (Ranking::ThreeOAK(Ace), vec![King, Queen])
        );
        assert_eq!(eval("2s 2h 2d 3c 3s"), (Ranking::FullHouse(Two, Three), vec![]));
        assert_eq!(
            eval("As Ah Ad Kc Ks Kh Qd"),
            (Ranking::FullHouse(Ace, King), vec![])
        );
        assert_eq!(
            eval("As Ah Ad Ac Ks Kh Qd"),
            (Ranking::FourOAK(Ace), vec![King])
        );
    }

    #[test]
    fn straights() {
        use Rank::*;
        assert_eq!(eval("Ts Jh Qd Kc As"), (Ranking::Straight(Ace), vec![]));
        assert_eq!(eval("As 2h 3d 4c 5s"), (Ranking::Straight(Five), vec![]));
        assert_eq!(eval("As 2s 3h 4d 5c 6s"), (Ranking::Straight(Six), vec![]));
    }

    #[test]
    fn flushes() {
        use Rank::*;
        assert_eq!(eval("As Ks Qs Js 9s"), (Ranking::Flush(Ace), vec![]));
        assert_eq!(eval("4h 6h 7h 8h 9h Ts"), (Ranking::Flush(Nine), vec![]));
        assert_eq!(eval("As 2s 3s 4s 5s"), (Ranking::StraightFlush(Five), vec![]));
        assert_eq!(
            eval("Kh Ah Ad As Ks Qs Js 9s"),
            (Ranking::FullHouse(Ace, King), vec![])
        );
        assert_eq!(
            eval("Ts Js Qs Ks As Ah Ad Ac"),
            (Ranking::StraightFlush(Ace), vec![])
        );
    }
}

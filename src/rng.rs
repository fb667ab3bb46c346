use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Per-tournament deterministic random stream.
///
/// One `Source` is built from each tournament's seed and threaded by `&mut`
/// through dealing and every stochastic policy decision. It is never shared
/// between tournaments, so a tournament replays bit-identically from its
/// seed no matter how the batch is scheduled.
///
/// Backed by [`StdRng`] (ChaCha12), whose output does not depend on the
/// platform's word size.
#[derive(Debug, Clone)]
pub struct Source {
    seed: u64,
    rng: StdRng,
}

impl From<u64> for Source {
    fn from(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Source {
    pub fn seed(&self) -> u64 {
        self.seed
    }
    /// Fisher-Yates in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
    /// Uniform draw from a half-open range. Empty ranges yield `range.start`.
    pub fn uniform<T>(&mut self, range: std::ops::Range<T>) -> T
    where
        T: rand::distr::uniform::SampleUniform + PartialOrd + Copy,
    {
        if range.start < range.end {
            self.rng.random_range(range)
        } else {
            range.start
        }
    }
    /// Bernoulli trial.
    pub fn chance(&mut self, p: crate::Probability) -> bool {
        self.rng.random_bool(p.clamp(0., 1.) as f64)
    }
    /// Index sampled proportionally to non-negative weights, or 0 when no
    /// weight is positive.
    pub fn weighted(&mut self, weights: &[crate::Probability]) -> usize {
        WeightedIndex::new(weights)
            .map(|distribution| distribution.sample(&mut self.rng))
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = Source::from(99);
        let mut b = Source::from(99);
        let xs = (0..32).map(|_| a.uniform(0..1000u32)).collect::<Vec<_>>();
        let ys = (0..32).map(|_| b.uniform(0..1000u32)).collect::<Vec<_>>();
        assert_eq!(xs, ys);
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = Source::from(1);
        let mut b = Source::from(2);
        let xs = (0..32).map(|_| a.uniform(0..1000u32)).collect::<Vec<_>>();
        let ys = (0..32).map(|_| b.uniform(0..1000u32)).collect::<Vec<_>>();
        assert_ne!(xs, ys);
    }

    #[test]
    fn empty_range_is_start() {
        let mut source = Source::from(0);
        assert_eq!(source.uniform(5..5), 5);
    }

    #[test]
    fn weighted_skips_zeros() {
        let mut source = Source::from(3);
        for _ in 0..100 {
            let i = source.weighted(&[0., 1., 0., 2.]);
            assert!(i == 1 || i == 3);
        }
        assert_eq!(source.weighted(&[0., 0.]), 0);
        assert_eq!(source.weighted(&[]), 0);
    }

    #[test]
    fn chance_respects_certainties() {
        let mut source = Source::from(5);
        assert!((0..100).all(|_| source.chance(1.)));
        assert!((0..100).all(|_| !source.chance(0.)));
        let hits = (0..1000).filter(|_| source.chance(0.25)).count();
        assert!(hits > 150 && hits < 350);
    }
}

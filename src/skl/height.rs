use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::config::LevelDistribution;

/// Draws level counts in `1..=max_levels` for new nodes.
#[derive(Debug, Clone)]
pub(crate) struct HeightGenerator {
    rng: StdRng,
    max_levels: usize,
    distribution: LevelDistribution,
}
impl HeightGenerator {
    pub(crate) fn new(
        max_levels: usize,
        distribution: LevelDistribution,
        seed: Option<u64>,
    ) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            max_levels,
            distribution,
        }
    }
    #[inline]
    pub(crate) fn random_height(&mut self) -> usize {
        match self.distribution {
            LevelDistribution::Uniform => self.rng.gen_range(1..=self.max_levels),
            LevelDistribution::Geometric {
                numerator,
                denominator,
            } => {
                let mut h = 1;
                while h < self.max_levels && self.rng.gen_ratio(numerator, denominator) {
                    h += 1;
                }
                h
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_in_range() {
        let mut gen = HeightGenerator::new(5, LevelDistribution::Uniform, Some(42));
        let mut seen = [0usize; 6];
        for _ in 0..10_000 {
            let h = gen.random_height();
            assert!((1..=5).contains(&h));
            seen[h] += 1;
        }
        // every level shows up, roughly 2000 times each
        for count in &seen[1..] {
            assert!(*count > 1500 && *count < 2500, "{:?}", seen);
        }
    }
    #[test]
    fn test_seeded_is_deterministic() {
        let mut a = HeightGenerator::new(8, LevelDistribution::Uniform, Some(7));
        let mut b = HeightGenerator::new(8, LevelDistribution::Uniform, Some(7));
        let xs: Vec<_> = (0..100).map(|_| a.random_height()).collect();
        let ys: Vec<_> = (0..100).map(|_| b.random_height()).collect();
        assert_eq!(xs, ys);
    }
    #[test]
    fn test_single_level() {
        let mut gen = HeightGenerator::new(1, LevelDistribution::geometric(), None);
        assert!((0..100).all(|_| gen.random_height() == 1));
        let mut gen = HeightGenerator::new(1, LevelDistribution::Uniform, None);
        assert!((0..100).all(|_| gen.random_height() == 1));
    }
    #[test]
    fn test_geometric() {
        let distribution = LevelDistribution::Geometric {
            numerator: 1,
            denominator: 3,
        };
        let mut gen = HeightGenerator::new(20, distribution, Some(1));
        let count = 100_000;
        let mut promoted = 0;
        for _ in 0..count {
            let h = gen.random_height();
            assert!((1..=20).contains(&h));
            if h > 1 {
                promoted += 1;
            }
        }
        let ratio = promoted as f64 / count as f64;
        assert!((ratio - 1.0 / 3.0).abs() < 0.01, "{}", ratio);
    }
}

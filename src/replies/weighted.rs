use rand::{
    distributions::{Distribution, WeightedIndex},
    Rng,
};

pub use rand::distributions::WeightedError;

/// A fixed table of options drawn by weight.
///
/// Weights are raw, not normalized: an option with weight 95 next to
/// one with weight 5 is drawn 95% of the time. Zero-weight options are
/// never drawn. Every draw is independent.
#[derive(Debug, Clone)]
pub struct Weighted<T> {
    options: Vec<T>,
    dist: WeightedIndex<f32>,
}

impl<T> Weighted<T> {
    /// Fails if the table is empty, a weight is negative, or no weight
    /// is positive.
    pub fn new(options: impl IntoIterator<Item = (T, f32)>) -> Result<Self, WeightedError> {
        let (options, weights): (Vec<T>, Vec<f32>) = options.into_iter().unzip();
        let dist = WeightedIndex::new(weights)?;

        Ok(Self { options, dist })
    }

    /// Draws one option.
    pub fn pick(&self, rng: &mut impl Rng) -> &T {
        &self.options[self.dist.sample(rng)]
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn draw_frequency_follows_weights() {
        let options = Weighted::new([("line", 95.0), ("sticker", 5.0)]).unwrap();
        let mut rng = StdRng::seed_from_u64(0xC1A);

        const TRIALS: usize = 100_000;
        let lines = (0..TRIALS)
            .filter(|_| *options.pick(&mut rng) == "line")
            .count();

        // ~14 standard deviations of slack on 100k draws
        let frequency = lines as f64 / TRIALS as f64;
        assert!((frequency - 0.95).abs() < 0.01, "observed {frequency}");
    }

    #[test]
    fn single_option_is_always_drawn() {
        let options = Weighted::new([("only", 1.0)]).unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..1_000 {
            assert_eq!(*options.pick(&mut rng), "only");
        }
    }

    #[test]
    fn zero_weight_is_never_drawn() {
        let options = Weighted::new([("kept", 1.0), ("never", 0.0)]).unwrap();
        let mut rng = StdRng::seed_from_u64(2);

        for _ in 0..10_000 {
            assert_eq!(*options.pick(&mut rng), "kept");
        }
    }

    #[test]
    fn rejects_tables_with_no_positive_weight() {
        assert!(Weighted::new([("a", 0.0), ("b", 0.0)]).is_err());
        assert!(Weighted::<&str>::new([]).is_err());
    }
}

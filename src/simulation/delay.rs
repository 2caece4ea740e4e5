use rand::Rng;

/// Source of the probabilistic delay draw.
///
/// Every `rand::Rng` is a `DelayRoll`; tests supply fixed outcomes.
pub trait DelayRoll {
    /// Returns `true` with the given probability
    fn roll(&mut self, probability: f64) -> bool;
}

impl<R: Rng + ?Sized> DelayRoll for R {
    fn roll(&mut self, probability: f64) -> bool {
        // Also rejects NaN
        if !(probability > 0.0) {
            return false;
        }
        if probability >= 1.0 {
            return true;
        }
        self.gen_bool(probability)
    }
}

/// Always returns the same outcome
#[derive(Debug, Clone, Copy)]
pub struct FixedRoll(pub bool);

impl DelayRoll for FixedRoll {
    fn roll(&mut self, _probability: f64) -> bool {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_rng_extremes() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(!rng.roll(0.0));
        assert!(!rng.roll(-1.0));
        assert!(!rng.roll(f64::NAN));
        assert!(rng.roll(1.0));
        assert!(rng.roll(3.5));
    }

    #[test]
    fn test_rng_frequency_roughly_matches() {
        let mut rng = StdRng::seed_from_u64(42);
        let hits = (0..10_000).filter(|_| rng.roll(0.3)).count();
        assert!((2_700..3_300).contains(&hits), "hits = {}", hits);
    }

    #[test]
    fn test_fixed_roll() {
        assert!(FixedRoll(true).roll(0.0));
        assert!(!FixedRoll(false).roll(1.0));
    }
}

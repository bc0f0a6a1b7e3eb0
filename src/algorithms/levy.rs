use crate::error::{OptimizationError, OptimizationResult};
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

/// Lévy distribution with location 0 and scale `c`.
///
/// Sampled as `c / Z²` with `Z ~ N(0, 1)`, the same parameterization as
/// `scipy.stats.levy(scale=c)`. Support is `(0, ∞)` with a `x^(-3/2)` tail.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Levy {
    scale: f64,
}

impl Levy {
    pub fn new(scale: f64) -> OptimizationResult<Self> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(OptimizationError::config(format!(
                "Lévy scale must be finite and positive, got {}",
                scale
            )));
        }
        Ok(Self { scale })
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl Distribution<f64> for Levy {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let z: f64 = StandardNormal.sample(rng);
        // z == 0 yields +inf, which the flight's bounds check rejects
        self.scale / (z * z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    #[test]
    fn test_rejects_bad_scale() {
        assert!(Levy::new(0.0).is_err());
        assert!(Levy::new(-1.0).is_err());
        assert!(Levy::new(f64::INFINITY).is_err());
        assert!(Levy::new(1.5).is_ok());
    }

    #[test]
    fn test_samples_are_positive() {
        let levy = Levy::new(1.5).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            assert!(levy.sample(&mut rng) > 0.0);
        }
    }

    #[test]
    fn test_median_tracks_scale() {
        // median of c / Z² is c / 0.4549 ≈ 2.198·c
        let levy = Levy::new(2.0).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let mut samples: Vec<f64> = (0..20_000).map(|_| levy.sample(&mut rng)).collect();
        samples.sort_by(|a, b| a.total_cmp(b));
        let median = samples[samples.len() / 2];
        assert!((median - 4.396).abs() < 0.4, "median {}", median);
    }
}

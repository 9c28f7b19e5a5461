//! Injectable randomness.
//!
//! Every generation step draws through [`RandomSource`], so callers can hand
//! in a seeded [`rand::rngs::StdRng`] for reproducible webs or a
//! [`SequenceSource`] to pin down exact draws in tests.

use std::f64::consts::TAU;

use rand::Rng;
use rand_distr::StandardNormal;

/// Random draws used by the generators.
pub trait RandomSource {
    /// A uniformly distributed value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// A uniformly distributed integer in `[0, bound)`. Returns 0 when `bound` is 0.
    fn next_below(&mut self, bound: u32) -> u32;

    /// A normally distributed value with the given mean and standard deviation.
    fn next_normal(&mut self, mean: f64, std_dev: f64) -> f64;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_f64(&mut self) -> f64 {
        self.gen::<f64>()
    }

    fn next_below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.gen_range(0..bound)
    }

    fn next_normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        let z: f64 = self.sample(StandardNormal);
        mean + std_dev * z
    }
}

/// Replays a fixed cycle of values in `[0, 1)`.
///
/// Integer draws scale the current value by the bound, so `0.5` picks the
/// middle of any range.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceSource {
    /// Creates a source cycling through `values`. Values are clamped into `[0, 1)`;
    /// an empty list behaves like a constant `0.0`.
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        let values = values
            .into_iter()
            .map(|v| v.clamp(0.0, 1.0 - f64::EPSILON))
            .collect();
        Self { values, cursor: 0 }
    }

    /// A source returning the same value forever.
    #[must_use]
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for SequenceSource {
    fn next_f64(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let v = self.values[self.cursor];
        self.cursor = (self.cursor + 1) % self.values.len();
        v
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn next_below(&mut self, bound: u32) -> u32 {
        let scaled = (self.next_f64() * f64::from(bound)).floor() as u32;
        scaled.min(bound.saturating_sub(1))
    }

    /// Box-Muller over the next two values, so `0.0` as the first value
    /// always lands on the mean.
    fn next_normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64();
        let u2 = self.next_f64();
        let z = (-2.0 * (1.0 - u1).ln()).sqrt() * (TAU * u2).cos();
        mean + std_dev * z
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn seeded_rng_is_reproducible() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        for _ in 0..16 {
            assert_eq!(a.next_f64().to_bits(), b.next_f64().to_bits());
            assert_eq!(a.next_below(100), b.next_below(100));
        }
    }

    #[test]
    fn rng_draws_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v));
            assert!(rng.next_below(13) < 13);
        }
        assert_eq!(rng.next_below(0), 0);
    }

    #[test]
    fn rng_normal_draws_center_on_mean() {
        let mut rng = StdRng::seed_from_u64(5);
        let draws: Vec<f64> = (0..4000).map(|_| rng.next_normal(10.0, 2.0)).collect();
        let mean = draws.iter().sum::<f64>() / 4000.0;
        assert!((mean - 10.0).abs() < 0.2, "mean {mean}");
        let within = draws.iter().filter(|v| (8.0..12.0).contains(*v)).count();
        assert!(within > 2400 && within < 3100, "{within} draws within one deviation");
    }

    #[test]
    fn sequence_normal_follows_box_muller() {
        let mut src = SequenceSource::new(vec![0.0, 0.7]);
        assert!((src.next_normal(3.0, 5.0) - 3.0).abs() < 1e-12);

        // -2 ln(1 - u1) = 4, so z = 2 cos(0) = 2.
        let mut src = SequenceSource::new(vec![1.0 - (-2.0f64).exp(), 0.0]);
        assert!((src.next_normal(1.0, 0.5) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn sequence_cycles() {
        let mut src = SequenceSource::new(vec![0.1, 0.2, 0.3]);
        let drawn: Vec<f64> = (0..5).map(|_| src.next_f64()).collect();
        assert_eq!(drawn, vec![0.1, 0.2, 0.3, 0.1, 0.2]);
    }

    #[test]
    fn sequence_scales_integers() {
        let mut src = SequenceSource::new(vec![0.5, 0.0, 0.999]);
        assert_eq!(src.next_below(10), 5);
        assert_eq!(src.next_below(10), 0);
        assert_eq!(src.next_below(10), 9);
    }

    #[test]
    fn sequence_clamps_out_of_range_values() {
        let mut src = SequenceSource::new(vec![1.5, -0.2]);
        assert!(src.next_f64() < 1.0);
        assert!(src.next_f64().abs() < f64::EPSILON);
        assert_eq!(SequenceSource::new(vec![]).next_below(4), 0);
    }
}

//! Broadband excitation noise for plucking strings.

use crate::Signal;
use rand::Rng;

/// Lowest value a pluck can write into a string.
pub const PLUCK_MIN: f64 = -0.5;

/// Upper (exclusive) bound of a pluck sample.
pub const PLUCK_MAX: f64 = 0.5;

/// A white noise generator scaled for string excitation.
///
/// Each sample is drawn independently and uniformly from `[-0.5, +0.5)`.
/// The generator is injected so plucks can be reproduced exactly in tests,
/// and so voices never share hidden generator state.
pub struct PluckNoise<R: Rng = rand::rngs::ThreadRng> {
    rng: R,
}

impl PluckNoise<rand::rngs::ThreadRng> {
    /// Creates a pluck noise source backed by the thread-local generator.
    ///
    /// # Examples
    ///
    /// ```
    /// use plectrum::{PluckNoise, Signal};
    ///
    /// let mut noise = PluckNoise::new();
    /// let sample = noise.next_sample();
    /// assert!((-0.5..0.5).contains(&sample));
    /// ```
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for PluckNoise<rand::rngs::ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> PluckNoise<R> {
    /// Creates a pluck noise source with a custom RNG.
    ///
    /// # Arguments
    ///
    /// * `rng` - Random number generator to use; `&mut R` works as well
    ///
    /// # Examples
    ///
    /// ```
    /// use plectrum::{PluckNoise, Signal};
    /// use rand::SeedableRng;
    ///
    /// let rng = rand::rngs::StdRng::seed_from_u64(42);
    /// let mut noise = PluckNoise::with_rng(rng);
    /// let sample = noise.next_sample();
    /// ```
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Signal for PluckNoise<R> {
    fn next_sample(&mut self) -> f64 {
        self.rng.gen_range(PLUCK_MIN..PLUCK_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_sample_range() {
        let mut noise = PluckNoise::new();
        for _ in 0..10000 {
            let sample = noise.next_sample();
            assert!((PLUCK_MIN..PLUCK_MAX).contains(&sample));
        }
    }

    #[test]
    fn test_randomness() {
        let mut noise = PluckNoise::new();
        let samples: Vec<f64> = (0..100).map(|_| noise.next_sample()).collect();
        let first = samples[0];
        let all_same = samples.iter().all(|&s| s == first);
        assert!(!all_same, "Pluck noise should produce varying samples");
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = PluckNoise::with_rng(StdRng::seed_from_u64(7));
        let mut b = PluckNoise::with_rng(StdRng::seed_from_u64(7));
        for _ in 0..64 {
            assert_eq!(a.next_sample(), b.next_sample());
        }
    }

    #[test]
    fn test_borrowed_rng_advances_caller_state() {
        let mut rng = StdRng::seed_from_u64(3);
        let first = {
            let mut noise = PluckNoise::with_rng(&mut rng);
            noise.next_sample()
        };
        let second = PluckNoise::with_rng(&mut rng).next_sample();
        assert_ne!(first, second);
    }

    #[test]
    fn test_mean_is_near_zero() {
        let mut noise = PluckNoise::with_rng(StdRng::seed_from_u64(11));
        let n = 20000;
        let mean: f64 = (0..n).map(|_| noise.next_sample()).sum::<f64>() / n as f64;
        assert!(mean.abs() < 0.02, "mean was {}", mean);
    }
}

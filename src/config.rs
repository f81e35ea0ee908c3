//! Synthesizer configuration.

use crate::strings::validate_decay;
use crate::{DEFAULT_DECAY, Error, GuitarString, Result, Tuning};

/// Default output sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// Default concert pitch (A4) in Hz.
pub const CONCERT_A: f64 = 440.0;

/// Keyboard index that sounds the concert pitch by default.
pub const DEFAULT_REFERENCE_INDEX: usize = 24;

/// Parameters shared by every string of a bank.
///
/// Exactly one tuning scheme is active per configuration.
///
/// # Examples
///
/// ```
/// use plectrum::{SynthConfig, Tuning};
///
/// let config = SynthConfig::default()
///     .with_tuning(Tuning::EqualTemperament)
///     .with_concert_pitch(442.0);
/// config.validate().unwrap();
/// assert!((config.frequency(24) - 442.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynthConfig {
    /// Output sample rate in Hz
    pub sample_rate: u32,
    /// Pitch of the reference index in Hz
    pub concert_pitch: f64,
    /// Spacing between adjacent indices
    pub tuning: Tuning,
    /// Index that sounds `concert_pitch`
    pub reference_index: usize,
    /// Per-step energy decay of every string
    pub decay: f64,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            concert_pitch: CONCERT_A,
            tuning: Tuning::default(),
            reference_index: DEFAULT_REFERENCE_INDEX,
            decay: DEFAULT_DECAY,
        }
    }
}

impl SynthConfig {
    /// Sets the sample rate.
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Sets the concert pitch.
    pub fn with_concert_pitch(mut self, concert_pitch: f64) -> Self {
        self.concert_pitch = concert_pitch;
        self
    }

    /// Sets the tuning scheme.
    pub fn with_tuning(mut self, tuning: Tuning) -> Self {
        self.tuning = tuning;
        self
    }

    /// Sets which index sounds the concert pitch.
    pub fn with_reference_index(mut self, reference_index: usize) -> Self {
        self.reference_index = reference_index;
        self
    }

    /// Sets the per-step decay.
    pub fn with_decay(mut self, decay: f64) -> Self {
        self.decay = decay;
        self
    }

    /// Checks every field.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfiguration`] for a zero sample rate, a concert
    /// pitch that is not finite and positive, a bad stretch ratio, or a decay
    /// outside `[0, 1)`.
    pub fn validate(&self) -> Result<()> {
        if self.sample_rate == 0 {
            return Err(Error::InvalidConfiguration(
                "sample rate must be non-zero".into(),
            ));
        }
        if !self.concert_pitch.is_finite() || self.concert_pitch <= 0.0 {
            return Err(Error::InvalidConfiguration(format!(
                "concert pitch must be finite and positive, got {}",
                self.concert_pitch
            )));
        }
        self.tuning.validate()?;
        validate_decay(self.decay)
    }

    /// Target frequency of keyboard `index` under the active tuning.
    ///
    /// Far from the reference index this may underflow to zero or overflow
    /// to infinity; [`string`](SynthConfig::string) rejects both.
    pub fn frequency(&self, index: usize) -> f64 {
        let steps = index as f64 - self.reference_index as f64;
        self.tuning.frequency(self.concert_pitch, steps)
    }

    /// Builds the silent string for keyboard `index`.
    pub fn string(&self, index: usize) -> Result<GuitarString> {
        GuitarString::new(self.frequency(index), self.sample_rate)?.with_decay(self.decay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SynthConfig::default();
        assert_eq!(config.sample_rate, 44100);
        assert_eq!(config.concert_pitch, 440.0);
        assert_eq!(config.reference_index, 24);
        assert_eq!(config.decay, 0.996);
        assert_eq!(config.tuning, Tuning::stretched());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_reference_index_sounds_concert_pitch() {
        let config = SynthConfig::default();
        assert!((config.frequency(24) - 440.0).abs() < 1e-9);
        assert!(config.frequency(0) < config.frequency(1));
    }

    #[test]
    fn test_equal_temperament_keys() {
        let config = SynthConfig::default().with_tuning(Tuning::EqualTemperament);
        assert!((config.frequency(12) - 220.0).abs() < 1e-9);
        assert!((config.frequency(36) - 880.0).abs() < 1e-9);
    }

    #[test]
    fn test_string_uses_config() {
        let config = SynthConfig::default().with_decay(0.99);
        let string = config.string(24).unwrap();
        assert_eq!(string.period(), 101);
        assert_eq!(string.decay(), 0.99);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_distant_index_is_not_clamped() {
        let ratio = 1.0 + 1e-10;
        let config = SynthConfig::default()
            .with_tuning(Tuning::Stretched { ratio })
            .with_reference_index(0);
        let index = 1_usize << 32;
        let want = 440.0 * ratio.powf(index as f64);
        assert!((config.frequency(index) - want).abs() < 1e-6);
    }

    #[test]
    fn test_unplayable_index_is_rejected() {
        let config = SynthConfig::default().with_reference_index(usize::MAX);
        assert_eq!(config.frequency(0), 0.0);
        assert!(matches!(
            config.string(0),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_validate_rejects() {
        let bad = [
            SynthConfig::default().with_sample_rate(0),
            SynthConfig::default().with_concert_pitch(0.0),
            SynthConfig::default().with_concert_pitch(f64::INFINITY),
            SynthConfig::default().with_tuning(Tuning::Stretched { ratio: -1.0 }),
            SynthConfig::default().with_decay(1.0),
        ];
        for config in bad {
            assert!(matches!(
                config.validate(),
                Err(Error::InvalidConfiguration(_))
            ));
        }
    }
}

//! Tuning schemes mapping a keyboard index to a frequency in Hz.

use crate::{Error, Result};

/// Per-step ratio of the stretched tuning, slightly wider than a semitone.
pub const DEFAULT_STRETCH: f64 = 1.05956;

/// Semitone ratio of twelve-tone equal temperament.
pub const SEMITONE: f64 = 1.059_463_094_359_295_3;

/// How successive keyboard positions are spaced in pitch.
///
/// Both schemes are anchored on a reference pitch sounded by the reference
/// index; every other index is some number of steps away from it.
///
/// # Examples
///
/// ```
/// use plectrum::Tuning;
///
/// let equal = Tuning::EqualTemperament;
/// assert!((equal.frequency(440.0, 12.0) - 880.0).abs() < 1e-9);
///
/// let stretched = Tuning::stretched();
/// assert!(stretched.frequency(440.0, 12.0) > 880.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tuning {
    /// `f = reference * 2^(steps / 12)`
    EqualTemperament,
    /// `f = reference * ratio^steps`
    Stretched {
        /// Frequency ratio between adjacent steps
        ratio: f64,
    },
}

impl Tuning {
    /// Stretched tuning with the default ratio.
    pub fn stretched() -> Self {
        Tuning::Stretched {
            ratio: DEFAULT_STRETCH,
        }
    }

    /// Frequency `steps` positions away from `reference`.
    ///
    /// # Arguments
    ///
    /// * `reference` - Pitch of the reference position in Hz
    /// * `steps` - Signed distance from the reference position
    pub fn frequency(&self, reference: f64, steps: f64) -> f64 {
        match self {
            Tuning::EqualTemperament => reference * 2.0_f64.powf(steps / 12.0),
            Tuning::Stretched { ratio } => reference * ratio.powf(steps),
        }
    }

    /// Rejects stretch ratios that are not finite and positive.
    pub fn validate(&self) -> Result<()> {
        match self {
            Tuning::EqualTemperament => Ok(()),
            Tuning::Stretched { ratio } if ratio.is_finite() && *ratio > 0.0 => Ok(()),
            Tuning::Stretched { ratio } => Err(Error::InvalidConfiguration(format!(
                "stretch ratio must be finite and positive, got {}",
                ratio
            ))),
        }
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Tuning::stretched()
    }
}

impl std::str::FromStr for Tuning {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "equal" | "equal-temperament" | "12tet" => Ok(Tuning::EqualTemperament),
            "stretched" | "stretch" => Ok(Tuning::stretched()),
            _ => Err(Error::InvalidConfiguration(format!(
                "unknown tuning '{}'",
                s
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_temperament_octaves() {
        let tuning = Tuning::EqualTemperament;
        assert!((tuning.frequency(440.0, 0.0) - 440.0).abs() < 1e-9);
        assert!((tuning.frequency(440.0, -12.0) - 220.0).abs() < 1e-9);
        assert!((tuning.frequency(440.0, 24.0) - 1760.0).abs() < 1e-9);
    }

    #[test]
    fn test_equal_temperament_semitone() {
        let tuning = Tuning::EqualTemperament;
        assert!((tuning.frequency(1.0, 1.0) - SEMITONE).abs() < 1e-12);
        // A4 -> C5
        assert!((tuning.frequency(440.0, 3.0) - 523.25).abs() < 0.01);
    }

    #[test]
    fn test_stretched() {
        let tuning = Tuning::stretched();
        assert!((tuning.frequency(440.0, 0.0) - 440.0).abs() < 1e-9);
        assert!((tuning.frequency(440.0, 1.0) - 440.0 * DEFAULT_STRETCH).abs() < 1e-9);
        assert!((tuning.frequency(440.0, -24.0) - 440.0 * DEFAULT_STRETCH.powi(-24)).abs() < 1e-9);
    }

    #[test]
    fn test_stretched_is_wider_than_equal() {
        let equal = Tuning::EqualTemperament.frequency(440.0, 12.0);
        let stretched = Tuning::stretched().frequency(440.0, 12.0);
        assert!(stretched > equal);
        let equal_low = Tuning::EqualTemperament.frequency(440.0, -12.0);
        let stretched_low = Tuning::stretched().frequency(440.0, -12.0);
        assert!(stretched_low < equal_low);
    }

    #[test]
    fn test_fractional_steps() {
        let quarter_tone = Tuning::EqualTemperament.frequency(440.0, 0.5);
        assert!((quarter_tone - 440.0 * SEMITONE.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_validate() {
        assert!(Tuning::EqualTemperament.validate().is_ok());
        assert!(Tuning::stretched().validate().is_ok());
        assert!(Tuning::Stretched { ratio: 0.0 }.validate().is_err());
        assert!(Tuning::Stretched { ratio: f64::NAN }.validate().is_err());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("equal".parse::<Tuning>().unwrap(), Tuning::EqualTemperament);
        assert_eq!("Stretched".parse::<Tuning>().unwrap(), Tuning::stretched());
        assert!("pythagorean".parse::<Tuning>().is_err());
    }
}

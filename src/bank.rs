//! A bank of independent strings mixed into one output.
//!
//! # Tick ordering
//!
//! Every output tick reads the current sample of every string and sums them
//! before any string is advanced. Advancing first would run the filter twice
//! for the strings visited early in the loop, so [`StringBank::tick`] is the
//! only place the two phases happen and they never interleave.
//!
//! # Idle gating
//!
//! A freshly built bank is silent and frozen: ticks return `0.0` and leave the
//! strings alone until the first pluck. After that every tick advances every
//! string, plucked or not.

use crate::{GuitarString, KeyLayout, Result, SynthConfig};
use rand::Rng;

/// Owns one [`GuitarString`] per keyboard index.
///
/// # Examples
///
/// ```
/// use plectrum::{StringBank, SynthConfig};
/// use rand::SeedableRng;
///
/// let mut bank = StringBank::new(&SynthConfig::default(), 37).unwrap();
/// let mut rng = rand::rngs::StdRng::seed_from_u64(5);
///
/// assert!(bank.pluck(24, &mut rng).unwrap());
/// let mut block = [0.0; 256];
/// bank.process(&mut block).unwrap();
/// assert!(block.iter().any(|&s| s != 0.0));
/// ```
#[derive(Debug, Clone)]
pub struct StringBank {
    strings: Vec<GuitarString>,
    config: SynthConfig,
    started: bool,
    ticks: u64,
}

impl StringBank {
    /// Builds `voices` silent strings tuned by `config`, index 0 lowest.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfiguration`](crate::Error::InvalidConfiguration) if
    /// the configuration does not validate or yields an unusable frequency.
    pub fn new(config: &SynthConfig, voices: usize) -> Result<Self> {
        config.validate()?;
        let strings = (0..voices)
            .map(|index| config.string(index))
            .collect::<Result<Vec<_>>>()?;

        tracing::info!(
            voices,
            sample_rate = config.sample_rate,
            tuning = ?config.tuning,
            "string bank ready"
        );

        Ok(Self {
            strings,
            config: *config,
            started: false,
            ticks: 0,
        })
    }

    /// Builds one string per key of `layout`.
    pub fn for_layout(config: &SynthConfig, layout: &KeyLayout) -> Result<Self> {
        Self::new(config, layout.len())
    }

    /// Plucks string `index` with noise drawn from `rng`.
    ///
    /// Returns `Ok(false)` without touching anything when `index` is outside
    /// the bank.
    pub fn pluck<R: Rng + ?Sized>(&mut self, index: usize, rng: &mut R) -> Result<bool> {
        let voices = self.strings.len();
        let Some(string) = self.strings.get_mut(index) else {
            tracing::debug!(index, voices, "ignoring pluck outside the bank");
            return Ok(false);
        };

        string.pluck(rng)?;
        self.started = true;
        tracing::trace!(index, "pluck");
        Ok(true)
    }

    /// Produces one output sample: the sum of every string's current sample,
    /// after which every string advances one step.
    ///
    /// The sum is not clamped.
    pub fn tick(&mut self) -> Result<f64> {
        if !self.started {
            return Ok(0.0);
        }

        let mut total = 0.0;
        for string in &self.strings {
            total += string.sample()?;
        }
        for string in &mut self.strings {
            string.advance()?;
        }

        self.ticks = self.ticks.saturating_add(1);
        Ok(total)
    }

    /// Fills `buffer` with consecutive ticks.
    pub fn process(&mut self, buffer: &mut [f64]) -> Result<()> {
        for sample in buffer.iter_mut() {
            *sample = self.tick()?;
        }
        Ok(())
    }

    /// Returns true once any string has been plucked.
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Number of ticks that advanced the strings.
    pub fn time(&self) -> u64 {
        self.ticks
    }

    /// Number of strings.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Returns true if the bank holds no strings.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// The string at `index`.
    pub fn voice(&self, index: usize) -> Option<&GuitarString> {
        self.strings.get(index)
    }

    /// The configuration the bank was built from.
    pub fn config(&self) -> &SynthConfig {
        &self.config
    }
}

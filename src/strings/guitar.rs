//! Karplus-Strong plucked string.

use crate::buffer::RingBuffer;
use crate::{Error, PluckNoise, Result, Signal};
use rand::Rng;

/// Energy decay factor applied on every step.
pub const DEFAULT_DECAY: f64 = 0.996;

/// A single plucked string simulated with the Karplus-Strong algorithm.
///
/// The string's state is a delay line of `N` samples, where `N` is one period
/// of the target pitch. A pluck fills the delay line with noise; every
/// [`advance`](GuitarString::advance) replaces the front sample with the
/// decayed average of the first two, a two-tap low-pass that lets high
/// partials die out faster than the fundamental.
///
/// The delay line is full after construction and after every operation.
///
/// # Examples
///
/// ```
/// use plectrum::GuitarString;
/// use rand::SeedableRng;
///
/// let mut string = GuitarString::new(440.0, 44100).unwrap();
/// assert_eq!(string.period(), 101);
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
/// string.pluck(&mut rng).unwrap();
///
/// for _ in 0..1000 {
///     let _out = string.sample().unwrap();
///     string.advance().unwrap();
/// }
/// assert_eq!(string.time(), 1000);
/// ```
#[derive(Debug, Clone)]
pub struct GuitarString {
    buffer: RingBuffer,
    decay: f64,
    steps: u64,
    sample_rate: Option<u32>,
}

impl GuitarString {
    /// Creates a silent string tuned to `frequency`.
    ///
    /// The period is `ceil(sample_rate / frequency)` samples, rounded up so
    /// the string never sounds sharper than requested.
    ///
    /// # Arguments
    ///
    /// * `frequency` - Target pitch in Hz, finite and positive
    /// * `sample_rate` - Sample rate in Hz, non-zero
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfiguration`] for a zero sample rate or a frequency
    /// that is not finite and positive.
    pub fn new(frequency: f64, sample_rate: u32) -> Result<Self> {
        let period = period_for(frequency, sample_rate)?;
        let mut string = Self::with_capacity(period, Some(sample_rate))?;
        string.fill(std::iter::repeat(0.0))?;
        Ok(string)
    }

    /// Creates a string whose delay line holds exactly `samples`, front first.
    ///
    /// Used to drive the model deterministically.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfiguration`] if `samples` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use plectrum::GuitarString;
    ///
    /// let string = GuitarString::from_samples(&[0.2, 0.4, 0.5]).unwrap();
    /// assert_eq!(string.period(), 3);
    /// assert_eq!(string.sample().unwrap(), 0.2);
    /// ```
    pub fn from_samples(samples: &[f64]) -> Result<Self> {
        if samples.is_empty() {
            return Err(Error::InvalidConfiguration(
                "a string needs at least one sample".into(),
            ));
        }
        let mut string = Self::with_capacity(samples.len(), None)?;
        string.fill(samples.iter().copied())?;
        Ok(string)
    }

    /// Sets the decay factor applied on every step.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfiguration`] unless `0.0 <= decay < 1.0`.
    pub fn with_decay(mut self, decay: f64) -> Result<Self> {
        validate_decay(decay)?;
        self.decay = decay;
        Ok(self)
    }

    fn with_capacity(period: usize, sample_rate: Option<u32>) -> Result<Self> {
        Ok(Self {
            buffer: RingBuffer::try_new(period)?,
            decay: DEFAULT_DECAY,
            steps: 0,
            sample_rate,
        })
    }

    fn fill(&mut self, values: impl IntoIterator<Item = f64>) -> Result<()> {
        for value in values.into_iter().take(self.buffer.capacity()) {
            self.buffer.enqueue(value)?;
        }
        Ok(())
    }

    /// Plucks the string: every sample is replaced by uniform noise in
    /// `[-0.5, +0.5)` drawn from `rng`.
    ///
    /// The step counter is left alone.
    pub fn pluck<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        self.excite(PluckNoise::with_rng(rng))
    }

    /// Replaces every sample, in order, with the next value of `source`.
    pub fn excite(&mut self, mut source: impl Signal) -> Result<()> {
        for _ in 0..self.buffer.capacity() {
            self.buffer.dequeue()?;
            self.buffer.enqueue(source.next_sample())?;
        }
        Ok(())
    }

    /// Replaces the contents of the delay line with `samples`, front first.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfiguration`] if `samples.len()` differs from the
    /// period; the string is left unchanged.
    pub fn load(&mut self, samples: &[f64]) -> Result<()> {
        if samples.len() != self.period() {
            return Err(Error::InvalidConfiguration(format!(
                "expected {} samples, got {}",
                self.period(),
                samples.len()
            )));
        }
        for &value in samples {
            self.buffer.dequeue()?;
            self.buffer.enqueue(value)?;
        }
        Ok(())
    }

    /// Advances the simulation by one step.
    ///
    /// Removes the front sample, averages it with the sample behind it,
    /// scales by the decay factor and appends the result.
    ///
    /// # Errors
    ///
    /// [`Error::Underflow`] only if the delay line were empty, which the
    /// constructors rule out.
    pub fn advance(&mut self) -> Result<()> {
        let first = self.buffer.dequeue()?;
        // With a one-sample period the removed sample is also the next one
        let second = if self.buffer.is_empty() {
            first
        } else {
            self.buffer.peek()?
        };
        self.buffer.enqueue(self.decay * (first + second) / 2.0)?;
        self.steps = self.steps.saturating_add(1);
        Ok(())
    }

    /// The sound the string is making right now: the front of the delay line.
    pub fn sample(&self) -> Result<f64> {
        self.buffer.peek()
    }

    /// Number of completed [`advance`](GuitarString::advance) calls.
    ///
    /// Saturates at `u64::MAX`.
    pub fn time(&self) -> u64 {
        self.steps
    }

    /// Length of the delay line in samples.
    pub fn period(&self) -> usize {
        self.buffer.capacity()
    }

    /// Number of samples currently held; always equal to the period.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Always false: a string never holds fewer than one sample.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Decay factor applied on every step.
    pub fn decay(&self) -> f64 {
        self.decay
    }

    /// The pitch actually produced, `sample_rate / period`.
    ///
    /// `None` for strings built from explicit samples.
    pub fn frequency(&self) -> Option<f64> {
        self.sample_rate.map(|rate| f64::from(rate) / self.period() as f64)
    }

    /// Sum of squared samples in the delay line.
    pub fn energy(&self) -> f64 {
        self.buffer.iter().map(|s| s * s).sum()
    }

    /// Iterates over the delay line from front to back.
    pub fn samples(&self) -> impl Iterator<Item = f64> + '_ {
        self.buffer.iter()
    }
}

/// Largest delay line a string may ask for.
const MAX_PERIOD: usize = isize::MAX as usize / std::mem::size_of::<f64>();

/// Number of samples in one period of `frequency` at `sample_rate`.
///
/// # Errors
///
/// [`Error::InvalidConfiguration`] for a zero sample rate, a frequency that
/// is not finite and positive, or one so low its period cannot be stored.
///
/// # Examples
///
/// ```
/// use plectrum::strings::period_for;
///
/// assert_eq!(period_for(440.0, 44100).unwrap(), 101);
/// ```
pub fn period_for(frequency: f64, sample_rate: u32) -> Result<usize> {
    if sample_rate == 0 {
        return Err(Error::InvalidConfiguration(
            "sample rate must be non-zero".into(),
        ));
    }
    if !frequency.is_finite() || frequency <= 0.0 {
        return Err(Error::InvalidConfiguration(format!(
            "frequency must be finite and positive, got {}",
            frequency
        )));
    }
    let period = (f64::from(sample_rate) / frequency).ceil();
    if !period.is_finite() || period > MAX_PERIOD as f64 {
        return Err(Error::InvalidConfiguration(format!(
            "frequency {} Hz is too low for a {} Hz sample rate",
            frequency, sample_rate
        )));
    }
    Ok(period as usize)
}

pub(crate) fn validate_decay(decay: f64) -> Result<()> {
    if !(0.0..1.0).contains(&decay) {
        return Err(Error::InvalidConfiguration(format!(
            "decay must be in [0, 1), got {}",
            decay
        )));
    }
    Ok(())
}

//! Core signal trait.
//!
//! Strings are excited through `Signal`: a constant (`f64`), a noise
//! generator, or anything else that yields samples.

/// Common interface for anything that yields a stream of samples.
///
/// Strings are excited by draining one period's worth of values out of a
/// `Signal`: silence, white noise, or a recorded waveform all fit.
pub trait Signal {
    /// Generates the next sample from the signal.
    fn next_sample(&mut self) -> f64;
}

/// Implementation of `Signal` for `f64` representing a constant signal value.
///
/// `0.0` is silence, which is how a freshly tuned string starts out.
///
/// # Examples
///
/// ```
/// use plectrum::Signal;
///
/// let mut silence = 0.0_f64;
/// assert_eq!(silence.next_sample(), 0.0);
/// assert_eq!(silence.next_sample(), 0.0);
/// ```
impl Signal for f64 {
    fn next_sample(&mut self) -> f64 {
        *self
    }
}

impl<S: Signal + ?Sized> Signal for &mut S {
    fn next_sample(&mut self) -> f64 {
        (**self).next_sample()
    }
}

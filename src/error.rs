//! Error type shared by the buffer, the string model and the bank.

use std::fmt;

/// Errors raised when a precondition of the synthesis core is violated.
///
/// Overflow and underflow leave the buffer untouched; the caller decides
/// whether the failed operation is fatal.
#[derive(Debug)]
pub enum Error {
    /// `enqueue` was called on a full buffer.
    Overflow {
        /// Capacity of the buffer that rejected the sample
        capacity: usize,
    },
    /// `dequeue` or `peek` was called on an empty buffer.
    Underflow,
    /// A frequency, sample rate, decay, layout or sample array was rejected.
    InvalidConfiguration(String),
    /// Writing a rendered file failed.
    #[cfg(feature = "wav")]
    Wav(hound::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Overflow { capacity } => {
                write!(f, "ring buffer overflow (capacity {})", capacity)
            }
            Error::Underflow => write!(f, "ring buffer underflow"),
            Error::InvalidConfiguration(s) => write!(f, "invalid configuration: {}", s),
            #[cfg(feature = "wav")]
            Error::Wav(e) => write!(f, "wav output failed: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            #[cfg(feature = "wav")]
            Error::Wav(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(feature = "wav")]
impl From<hound::Error> for Error {
    fn from(err: hound::Error) -> Self {
        Error::Wav(err)
    }
}

/// Shorthand for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

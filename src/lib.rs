//! Plectrum - Karplus-Strong plucked-string synthesis for Rust
//!
//! A bank of strings, each a lossy delay line sized to one period of its
//! pitch, is plucked with noise and mixed into a single stream one sample at
//! a time.

pub mod bank;
pub mod buffer;
pub mod config;
mod error;
pub mod keyboard;
pub mod noise;
#[cfg(feature = "wav")]
pub mod render;
mod signal;
pub mod strings;
pub mod tuning;

// Re-export commonly used types at the crate root
pub use bank::StringBank;
pub use buffer::RingBuffer;
pub use config::{CONCERT_A, DEFAULT_SAMPLE_RATE, SynthConfig};
pub use error::{Error, Result};
pub use keyboard::KeyLayout;
pub use noise::PluckNoise;
pub use signal::Signal;
pub use strings::{DEFAULT_DECAY, GuitarString};
pub use tuning::Tuning;

//! Physically modeled strings.

mod guitar;

pub use guitar::{DEFAULT_DECAY, GuitarString, period_for};
pub(crate) use guitar::validate_decay;

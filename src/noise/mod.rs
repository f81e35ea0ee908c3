//! Noise generators used to excite strings.

mod white;

pub use white::{PLUCK_MAX, PLUCK_MIN, PluckNoise};

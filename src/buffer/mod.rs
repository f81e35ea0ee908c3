//! Sample buffers.

mod ring;

pub use ring::RingBuffer;

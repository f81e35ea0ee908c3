//! Fixed-capacity FIFO of samples with wraparound indexing.

use crate::{Error, Result};

/// A bounded first-in, first-out queue of `f64` samples.
///
/// Storage is allocated once in [`RingBuffer::new`] and never grows, so the
/// queue is safe to use from an audio callback. `head` is the slot that the
/// next `dequeue`/`peek` reads, `tail` the slot the next `enqueue` writes.
///
/// A capacity of zero is legal: the buffer is then empty and full at the same
/// time, and every `enqueue` overflows.
///
/// # Examples
///
/// ```
/// use plectrum::RingBuffer;
///
/// let mut buffer = RingBuffer::new(3);
/// buffer.enqueue(1.0).unwrap();
/// buffer.enqueue(2.0).unwrap();
/// assert_eq!(buffer.dequeue().unwrap(), 1.0);
/// assert_eq!(buffer.peek().unwrap(), 2.0);
/// assert_eq!(buffer.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct RingBuffer {
    storage: Box<[f64]>,
    head: usize,
    tail: usize,
    count: usize,
}

impl RingBuffer {
    /// Creates an empty buffer that can hold `capacity` samples.
    pub fn new(capacity: usize) -> Self {
        Self {
            storage: vec![0.0; capacity].into_boxed_slice(),
            head: 0,
            tail: 0,
            count: 0,
        }
    }

    /// Creates an empty buffer, reporting allocation failure instead of
    /// aborting.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfiguration`] if `capacity` samples cannot be
    /// allocated.
    pub fn try_new(capacity: usize) -> Result<Self> {
        let mut storage = Vec::new();
        storage.try_reserve_exact(capacity).map_err(|e| {
            Error::InvalidConfiguration(format!(
                "cannot allocate {} samples: {}",
                capacity, e
            ))
        })?;
        storage.resize(capacity, 0.0);
        Ok(Self {
            storage: storage.into_boxed_slice(),
            head: 0,
            tail: 0,
            count: 0,
        })
    }

    /// Maximum number of samples the buffer can hold.
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Number of samples currently queued.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if no samples are queued.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns true if the buffer holds `capacity` samples.
    pub fn is_full(&self) -> bool {
        self.count == self.storage.len()
    }

    /// Appends `sample` at the back of the queue.
    ///
    /// # Errors
    ///
    /// [`Error::Overflow`] if the buffer is already full. The buffer is left
    /// unchanged.
    pub fn enqueue(&mut self, sample: f64) -> Result<()> {
        if self.is_full() {
            return Err(Error::Overflow {
                capacity: self.capacity(),
            });
        }

        self.storage[self.tail] = sample;
        self.tail = (self.tail + 1) % self.storage.len();
        self.count += 1;
        Ok(())
    }

    /// Removes and returns the sample at the front of the queue.
    ///
    /// # Errors
    ///
    /// [`Error::Underflow`] if the buffer is empty. The buffer is left
    /// unchanged.
    pub fn dequeue(&mut self) -> Result<f64> {
        if self.is_empty() {
            return Err(Error::Underflow);
        }

        let front = self.storage[self.head];
        self.head = (self.head + 1) % self.storage.len();
        self.count -= 1;
        Ok(front)
    }

    /// Returns the sample at the front of the queue without removing it.
    ///
    /// # Errors
    ///
    /// [`Error::Underflow`] if the buffer is empty.
    pub fn peek(&self) -> Result<f64> {
        if self.is_empty() {
            return Err(Error::Underflow);
        }
        Ok(self.storage[self.head])
    }

    /// Iterates over the queued samples from front to back.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        let capacity = self.storage.len();
        (0..self.count).map(move |offset| self.storage[(self.head + offset) % capacity])
    }
}

//! Read-ahead FIFO sample buffer
//!
//! Stages decoded samples between a producer and a consumer that work in
//! strict alternation: the consumer drains everything before the producer
//! refills. Samples are written at the tail and read from the head.
//!
//! # Layout
//!
//! ```text
//! 0              start           end                capacity
//! |   consumed    |    readable    |     writable      |
//! ```
//!
//! There is no wraparound. Space consumed at the head is not writable again
//! until the buffer is cleared or its capacity is adjusted.
//!
//! # Threading
//!
//! Not designed for concurrent readers and writers. Samples reserved for
//! writing are immediately readable, even before the writer has filled them,
//! and nothing here synchronizes. Share across threads only behind external
//! mutual exclusion.

use super::{IndexRange, ReadableSlice, SampleBuffer, WritableSlice};
use crate::error::BufferError;
use tracing::{debug, trace};

/// FIFO sample buffer with fixed capacity and range checking
///
/// Only [`adjust_capacity`](Self::adjust_capacity) and [`new`](Self::new)
/// allocate. All other operations are O(1) (apart from the caller copying
/// samples through the returned views) and clamp requested lengths to what
/// is available instead of failing.
///
/// # Examples
///
/// ```
/// use mixkit_engine::ReadAheadSampleBuffer;
///
/// let mut buffer = ReadAheadSampleBuffer::new(4096).unwrap();
/// let decoded = [0.25f32; 1024];
///
/// let mut tail = buffer.write_to_tail(decoded.len());
/// let written = tail.length();
/// tail.copy_from_slice(&decoded[..written]);
///
/// let head = buffer.read_from_head(512);
/// assert_eq!(head.length(), 512);
/// assert_eq!(buffer.readable_length(), 512);
/// ```
#[derive(Debug, Default)]
pub struct ReadAheadSampleBuffer {
    sample_buffer: SampleBuffer,
    readable_range: IndexRange,
}

impl ReadAheadSampleBuffer {
    /// Create an empty buffer holding up to `capacity` samples
    ///
    /// A capacity of 0 creates a disabled buffer that accepts no samples
    /// until [`adjust_capacity`](Self::adjust_capacity) is called.
    pub fn new(capacity: usize) -> Result<Self, BufferError> {
        let buffer = Self {
            sample_buffer: SampleBuffer::new(capacity)?,
            readable_range: IndexRange::EMPTY,
        };
        buffer.debug_assert_invariant();
        Ok(buffer)
    }

    /// Exchange contents with another buffer without allocating
    pub fn swap(&mut self, that: &mut Self) {
        std::mem::swap(self, that);
    }

    /// The maximum capacity of the buffer
    pub fn capacity(&self) -> usize {
        self.sample_buffer.capacity()
    }

    /// Adjust the capacity, taking the current contents into account
    ///
    /// Unread samples are never discarded: the resulting capacity is
    /// `max(capacity, readable_length())`, so it may be higher than
    /// requested when shrinking. Unread samples keep their order and are
    /// moved to the front, which also makes the consumed head space
    /// writable again.
    ///
    /// Allocates. Never call this from the real-time thread. On allocation
    /// failure the buffer is left unchanged.
    pub fn adjust_capacity(&mut self, capacity: usize) -> Result<(), BufferError> {
        let new_capacity = capacity.max(self.readable_length());
        if new_capacity != self.capacity() {
            debug!(
                "Adjusting read-ahead buffer capacity: {} -> {} (requested {}, readable {})",
                self.capacity(),
                new_capacity,
                capacity,
                self.readable_length()
            );
            self.readable_range = self
                .sample_buffer
                .resize_retaining(new_capacity, self.readable_range)?;
        }
        self.debug_assert_invariant();
        Ok(())
    }

    /// Discard all buffered samples
    ///
    /// Keeps the allocation; the whole capacity becomes writable again.
    pub fn clear(&mut self) {
        self.readable_range = IndexRange::EMPTY;
        self.debug_assert_invariant();
    }

    pub fn is_empty(&self) -> bool {
        self.readable_range.is_empty()
    }

    /// The number of samples that could be written instantly without
    /// internal reorganization
    ///
    /// Only the space between the end of the readable samples and the end
    /// of the allocated buffer is available for writing!
    pub fn writable_length(&self) -> usize {
        self.capacity() - self.readable_range.end()
    }

    /// Reserve space at the tail for writing samples
    ///
    /// Reserves `min(max_write_length, writable_length())` samples directly
    /// after the readable samples and returns them for filling. The reserved
    /// samples count as readable immediately; there is no commit step.
    pub fn write_to_tail(&mut self, max_write_length: usize) -> WritableSlice<'_> {
        let write_length = max_write_length.min(self.writable_length());
        let write_range = IndexRange::forward(self.readable_range.end(), write_length);
        self.readable_range.grow_back(write_length);
        self.debug_assert_invariant();
        trace!("write_to_tail: requested {}, reserved {}", max_write_length, write_length);
        self.sample_buffer.writable_slice(write_range)
    }

    /// The number of readable samples
    pub fn readable_length(&self) -> usize {
        self.readable_range.length()
    }

    /// Consume samples from the head
    ///
    /// Returns the next `min(max_read_length, readable_length())` samples
    /// and removes them from the readable range.
    pub fn read_from_head(&mut self, max_read_length: usize) -> ReadableSlice<'_> {
        let read_length = max_read_length.min(self.readable_length());
        let read_range = IndexRange::forward(self.readable_range.start(), read_length);
        self.readable_range.shrink_front(read_length);
        self.debug_assert_invariant();
        trace!("read_from_head: requested {}, consumed {}", max_read_length, read_length);
        self.sample_buffer.readable_slice(read_range)
    }

    /// Discard the most recently written samples at the tail
    ///
    /// Returns the number of samples actually dropped, at most
    /// `readable_length()`.
    pub fn drop_from_tail(&mut self, max_drop_length: usize) -> usize {
        let drop_length = max_drop_length.min(self.readable_length());
        self.readable_range.shrink_back(drop_length);
        self.debug_assert_invariant();
        drop_length
    }

    #[inline]
    fn debug_assert_invariant(&self) {
        debug_assert!(
            IndexRange::between(0, self.capacity()).contains_range(&self.readable_range),
            "readable range {} exceeds capacity {}",
            self.readable_range,
            self.capacity()
        );
    }
}

impl Clone for ReadAheadSampleBuffer {
    /// Deep copy with the same capacity, layout and readable samples
    fn clone(&self) -> Self {
        Self {
            sample_buffer: self.sample_buffer.clone(),
            readable_range: self.readable_range,
        }
    }

    /// Clone into a temporary, then swap it in
    fn clone_from(&mut self, source: &Self) {
        let mut tmp = source.clone();
        self.swap(&mut tmp);
    }
}

//! Fixed-capacity contiguous sample storage
//!
//! `SampleBuffer` owns a flat array of samples whose size only changes on
//! explicit reallocation. Views into the storage are handed out as
//! [`ReadableSlice`] / [`WritableSlice`] borrows, so a view can never outlive
//! the next mutating call on its owner.

use super::{IndexRange, Sample};
use crate::error::BufferError;
use std::ops::{Deref, DerefMut};

/// Contiguous sample storage with fixed capacity
#[derive(Debug, Clone, Default)]
pub struct SampleBuffer {
    /// Invariant: `data.len()` is the capacity
    data: Vec<Sample>,
}

impl SampleBuffer {
    /// Allocate zero-initialised storage for `capacity` samples
    ///
    /// Allocation failure is reported instead of aborting the process.
    pub fn new(capacity: usize) -> Result<Self, BufferError> {
        Ok(Self {
            data: allocate(capacity)?,
        })
    }

    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Reallocate to `capacity` samples, keeping the samples in `retain`
    ///
    /// The retained samples are moved to the beginning of the new storage
    /// in their original order. Returns their new position. On allocation
    /// failure the buffer is left unchanged.
    ///
    /// # Panics
    /// If `retain` is not inside the current storage or does not fit into
    /// `capacity`.
    pub fn resize_retaining(
        &mut self,
        capacity: usize,
        retain: IndexRange,
    ) -> Result<IndexRange, BufferError> {
        assert!(IndexRange::between(0, self.capacity()).contains_range(&retain));
        assert!(retain.length() <= capacity);

        let mut data = allocate(capacity)?;
        data[..retain.length()].copy_from_slice(&self.data[retain.as_range()]);
        self.data = data;

        Ok(IndexRange::forward(0, retain.length()))
    }

    /// Read-only view of `range`
    pub fn readable_slice(&self, range: IndexRange) -> ReadableSlice<'_> {
        ReadableSlice {
            data: &self.data[range.as_range()],
        }
    }

    /// Writable view of `range`
    pub fn writable_slice(&mut self, range: IndexRange) -> WritableSlice<'_> {
        WritableSlice {
            data: &mut self.data[range.as_range()],
        }
    }
}

fn allocate(capacity: usize) -> Result<Vec<Sample>, BufferError> {
    let mut data = Vec::new();
    data.try_reserve_exact(capacity)
        .map_err(|source| BufferError::Allocation { capacity, source })?;
    // Fits into the reservation, no further allocation
    data.resize(capacity, 0.0);
    Ok(data)
}

/// Borrowed read-only samples
#[derive(Debug, Clone, Copy)]
pub struct ReadableSlice<'a> {
    data: &'a [Sample],
}

impl<'a> ReadableSlice<'a> {
    pub fn length(&self) -> usize {
        self.data.len()
    }

    pub fn as_slice(&self) -> &'a [Sample] {
        self.data
    }
}

impl Deref for ReadableSlice<'_> {
    type Target = [Sample];

    fn deref(&self) -> &[Sample] {
        self.data
    }
}

/// Borrowed writable samples
#[derive(Debug)]
pub struct WritableSlice<'a> {
    data: &'a mut [Sample],
}

impl WritableSlice<'_> {
    pub fn length(&self) -> usize {
        self.data.len()
    }

    pub fn as_mut_slice(&mut self) -> &mut [Sample] {
        &mut *self.data
    }
}

impl Deref for WritableSlice<'_> {
    type Target = [Sample];

    fn deref(&self) -> &[Sample] {
        &*self.data
    }
}

impl DerefMut for WritableSlice<'_> {
    fn deref_mut(&mut self) -> &mut [Sample] {
        &mut *self.data
    }
}

//! Sample storage and staging buffers

pub mod index_range;
pub mod read_ahead;
pub mod sample_buffer;
pub mod types;

pub use index_range::IndexRange;
pub use read_ahead::ReadAheadSampleBuffer;
pub use sample_buffer::{ReadableSlice, SampleBuffer, WritableSlice};
pub use types::Sample;

//! Audio sample types

/// One audio sample value (one channel of one frame)
///
/// Buffers in this crate count samples, not frames: a stereo frame
/// occupies two consecutive slots.
pub type Sample = f32;

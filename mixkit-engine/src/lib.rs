//! # mixkit Engine Library (mixkit-engine)
//!
//! Real-time primitives for the mixing engine.
//!
//! **Purpose:** Stage decoded audio between a producer and the audio callback
//! without allocating, and turn the crossfader position into per-deck gains
//! once per processing block.
//!
//! **Threading:** Nothing in this crate synchronizes internally. Every type is
//! meant to be driven from the single real-time audio thread; only
//! capacity changes and settings updates may allocate or log above trace
//! level, and those belong on the control path.

pub mod audio;
pub mod error;
pub mod mixer;

pub use audio::{ReadAheadSampleBuffer, Sample};
pub use error::{BufferError, Error, Result};
pub use mixer::XfaderControl;

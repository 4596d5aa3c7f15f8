//! Mixer control

pub mod xfader_control;

pub use xfader_control::XfaderControl;

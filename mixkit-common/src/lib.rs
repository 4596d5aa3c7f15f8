//! # mixkit Common Library
//!
//! Shared code for the mixkit audio engine including:
//! - Crossfader gain curve calculations
//! - Mixer settings metadata and validation
//! - Configuration loading
//! - Logging initialisation

pub mod config;
pub mod error;
pub mod logging;
pub mod params;
pub mod xfader;

pub use error::{Error, Result};
pub use params::MixerSettings;
pub use xfader::XfadeGains;

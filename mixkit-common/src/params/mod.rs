//! Mixer settings management
//!
//! Centralized schema for the crossfader options persisted by the settings
//! store. The store itself is owned by the host application; this module only
//! describes the options (key, default, range, validator) and holds one
//! validated snapshot of their values.
//!
//! # Usage
//!
//! ```rust
//! use mixkit_common::params::MixerSettings;
//!
//! let mut settings = MixerSettings::default();
//! settings.set_xfader_transform(2.0).unwrap();
//! assert!(settings.set_xfader_transform(5000.0).is_err());
//! ```

use crate::xfader::{TRANSFORM_DEFAULT, XFADER_CONSTPWR};
use serde::Serialize;

// Module declarations
mod init;
mod metadata;
mod setters;

/// Resolved crossfader settings
///
/// Values are only changed through the validated setters, so a
/// `MixerSettings` is always inside the documented bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MixerSettings {
    /// Curve steepness
    ///
    /// Valid range: [0.6, 1000.0]
    /// Default: 1.0
    xfader_transform: f64,

    /// Mixing law blend, additive (0.0) to constant power (1.0)
    ///
    /// Valid range: [0.0, 1.0]
    /// Default: 1.0
    xfader_curve: f64,

    /// Swap deck orientation on the crossfader
    ///
    /// Default: false
    xfader_reverse: bool,
}

impl Default for MixerSettings {
    fn default() -> Self {
        Self {
            xfader_transform: TRANSFORM_DEFAULT,
            xfader_curve: XFADER_CONSTPWR,
            xfader_reverse: false,
        }
    }
}

impl MixerSettings {
    pub fn xfader_transform(&self) -> f64 {
        self.xfader_transform
    }

    pub fn xfader_curve(&self) -> f64 {
        self.xfader_curve
    }

    pub fn xfader_reverse(&self) -> bool {
        self.xfader_reverse
    }
}

/// The options of the `[Mixer Profile]` settings group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MixerOption {
    XfaderTransform,
    XfaderCurve,
    XfaderReverse,
}

impl MixerOption {
    /// All options, in metadata order
    pub fn all_variants() -> &'static [MixerOption] {
        &[
            MixerOption::XfaderTransform,
            MixerOption::XfaderCurve,
            MixerOption::XfaderReverse,
        ]
    }

    /// Metadata record describing this option
    pub fn metadata(&self) -> &'static ParamMetadata {
        let index = match self {
            MixerOption::XfaderTransform => 0,
            MixerOption::XfaderCurve => 1,
            MixerOption::XfaderReverse => 2,
        };
        &MixerSettings::metadata()[index]
    }
}

/// Metadata for a single mixer option
///
/// Single source of truth for loading, setters and any settings UI.
///
/// # Fields
///
/// - `key`: Configuration file key (e.g., "xfader_transform")
/// - `group`: Settings store group (e.g., "[Mixer Profile]")
/// - `item`: Settings store item within the group (e.g., "xFaderCurve")
/// - `data_type`: Rust type as string (e.g., "f64")
/// - `default_value`: Default value as string (e.g., "1.0")
/// - `description`: Human-readable description
/// - `validation_range`: Valid range as string (e.g., "0.6-1000.0")
/// - `validator`: Function that validates string input
///
/// Validator errors use the format `"{key}: {specific_reason}"`.
///
/// # Example
///
/// ```rust
/// # use mixkit_common::params::MixerOption;
/// let meta = MixerOption::XfaderTransform.metadata();
/// assert!((meta.validator)("1.0").is_ok());
/// assert!((meta.validator)("0.1").is_err());
/// ```
#[derive(Debug)]
pub struct ParamMetadata {
    pub key: &'static str,
    pub group: &'static str,
    pub item: &'static str,
    pub data_type: &'static str,
    pub default_value: &'static str,
    pub description: &'static str,
    pub validation_range: &'static str,
    pub validator: fn(&str) -> Result<(), String>,
}

//! Mixer option metadata definitions
//!
//! Single source of truth for option validation

use super::{MixerSettings, ParamMetadata};
use crate::xfader::{
    TRANSFORM_MAX, TRANSFORM_MIN, XFADER_ADDITIVE, XFADER_CONFIG_GROUP, XFADER_CONSTPWR,
    XFADER_MODE_KEY, XFADER_REVERSE_KEY, XFADER_TRANSFORM_KEY,
};

impl MixerSettings {
    /// Get metadata for all crossfader options
    ///
    /// Returns a static reference to the option metadata array. This is the
    /// single source of truth for:
    /// - Option names and types
    /// - Default values
    /// - Validation ranges
    /// - Validation logic
    ///
    /// # Example: Validating an Option
    ///
    /// ```rust
    /// # use mixkit_common::params::MixerSettings;
    /// let metadata = MixerSettings::metadata();
    /// let curve_meta = metadata.iter()
    ///     .find(|m| m.key == "xfader_curve")
    ///     .unwrap();
    ///
    /// assert!((curve_meta.validator)("0.5").is_ok());
    /// assert!((curve_meta.validator)("2.0").is_err());
    /// ```
    pub fn metadata() -> &'static [ParamMetadata] {
        &[
            // Crossfader transform
            ParamMetadata {
                key: "xfader_transform",
                group: XFADER_CONFIG_GROUP,
                item: XFADER_TRANSFORM_KEY,
                data_type: "f64",
                default_value: "1.0",
                description: "Crossfader curve steepness (higher = sharper cut)",
                validation_range: "0.6-1000.0",
                validator: |s| {
                    let v: f64 = s.parse()
                        .map_err(|_| "xfader_transform: invalid number format".to_string())?;
                    if !(TRANSFORM_MIN..=TRANSFORM_MAX).contains(&v) {
                        return Err(format!(
                            "xfader_transform: value {} out of range [{}, {}]",
                            v, TRANSFORM_MIN, TRANSFORM_MAX
                        ));
                    }
                    Ok(())
                },
            },

            // Crossfader mixing law
            ParamMetadata {
                key: "xfader_curve",
                group: XFADER_CONFIG_GROUP,
                item: XFADER_MODE_KEY,
                data_type: "f64",
                default_value: "1.0",
                description: "Crossfader mixing law (0.0 = additive, 1.0 = constant power)",
                validation_range: "0.0-1.0",
                validator: |s| {
                    let v: f64 = s.parse()
                        .map_err(|_| "xfader_curve: invalid number format".to_string())?;
                    if !(XFADER_ADDITIVE..=XFADER_CONSTPWR).contains(&v) {
                        return Err(format!(
                            "xfader_curve: value {} out of range [{}, {}]",
                            v, XFADER_ADDITIVE, XFADER_CONSTPWR
                        ));
                    }
                    Ok(())
                },
            },

            // Crossfader orientation
            ParamMetadata {
                key: "xfader_reverse",
                group: XFADER_CONFIG_GROUP,
                item: XFADER_REVERSE_KEY,
                data_type: "bool",
                default_value: "false",
                description: "Swap the decks on the crossfader",
                validation_range: "true|false",
                validator: |s| {
                    s.parse::<bool>()
                        .map(|_| ())
                        .map_err(|_| format!("xfader_reverse: expected true or false, got '{}'", s))
                },
            },
        ]
    }

    /// Find the metadata record for a configuration file key
    pub fn metadata_for(key: &str) -> Option<&'static ParamMetadata> {
        Self::metadata().iter().find(|m| m.key == key)
    }
}

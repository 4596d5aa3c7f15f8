//! Option setter methods with metadata-based validation
//!
//! All setters delegate to metadata validators

use super::{MixerOption, MixerSettings};

impl MixerSettings {
    /// Validate and update xfader_transform
    ///
    /// # Validation
    /// - Delegates to metadata validator for range checking
    /// - Must be in range [0.6, 1000.0] (see ParamMetadata)
    pub fn set_xfader_transform(&mut self, value: f64) -> Result<(), String> {
        let meta = MixerOption::XfaderTransform.metadata();
        (meta.validator)(&value.to_string())?;

        self.xfader_transform = value;
        Ok(())
    }

    /// Validate and update xfader_curve
    ///
    /// # Validation
    /// - Delegates to metadata validator for range checking
    /// - Must be in range [0.0, 1.0] (see ParamMetadata)
    pub fn set_xfader_curve(&mut self, value: f64) -> Result<(), String> {
        let meta = MixerOption::XfaderCurve.metadata();
        (meta.validator)(&value.to_string())?;

        self.xfader_curve = value;
        Ok(())
    }

    /// Update xfader_reverse (every value is valid)
    pub fn set_xfader_reverse(&mut self, value: bool) {
        self.xfader_reverse = value;
    }

    /// Validate and update an option from its string form
    ///
    /// Used by loaders that only see raw values (settings store, TOML).
    /// On error the current value is left untouched.
    pub fn set_from_str(&mut self, option: MixerOption, value: &str) -> Result<(), String> {
        (option.metadata().validator)(value)?;

        match option {
            MixerOption::XfaderTransform => {
                self.xfader_transform = value
                    .parse()
                    .map_err(|_| "xfader_transform: invalid number format".to_string())?;
            }
            MixerOption::XfaderCurve => {
                self.xfader_curve = value
                    .parse()
                    .map_err(|_| "xfader_curve: invalid number format".to_string())?;
            }
            MixerOption::XfaderReverse => {
                self.xfader_reverse = value
                    .parse()
                    .map_err(|_| "xfader_reverse: expected true or false".to_string())?;
            }
        }
        Ok(())
    }
}

//! Option loading from raw settings
//!
//! Metadata-based loading from the `[mixer_profile]` configuration table

use super::{MixerOption, MixerSettings};
use tracing::{debug, warn};

impl MixerSettings {
    /// Build settings from the `[mixer_profile]` table of a config file
    ///
    /// # Error Handling Policy
    ///
    /// 1. Option missing: use default, continue
    /// 2. Type mismatch: log WARN, use default, continue
    /// 3. Out of range: log WARN, use default, continue
    /// 4. Unknown key: log WARN, ignore
    /// 5. Process all independently (no fail-fast)
    pub fn from_toml_table(table: &toml::Table) -> Self {
        let mut settings = Self::default();

        for option in MixerOption::all_variants() {
            let meta = option.metadata();

            let Some(value) = table.get(meta.key) else {
                debug!("Mixer option '{}' not set, using default: {}", meta.key, meta.default_value);
                continue;
            };

            let raw = match value {
                toml::Value::Float(v) => v.to_string(),
                toml::Value::Integer(v) => v.to_string(),
                toml::Value::Boolean(v) => v.to_string(),
                toml::Value::String(s) => s.clone(),
                other => {
                    warn!(
                        "Mixer option '{}' has unsupported type {}, using default: {}",
                        meta.key,
                        other.type_str(),
                        meta.default_value
                    );
                    continue;
                }
            };

            if let Err(e) = settings.set_from_str(*option, &raw) {
                warn!("{}, using default: {}", e, meta.default_value);
            }
        }

        for key in table.keys() {
            if Self::metadata_for(key).is_none() {
                warn!("Unknown mixer option '{}' ignored", key);
            }
        }

        settings
    }
}

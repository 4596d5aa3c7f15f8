//! Crossfader control
//!
//! Holds the resolved crossfader settings for the mixer. The settings side
//! (`apply_settings`) runs on the control path whenever the user changes the
//! mixer profile; the mixer calls [`XfaderControl::gains`] once per processing
//! block on the audio thread.

use crate::Result;
use mixkit_common::params::MixerSettings;
use mixkit_common::xfader::{get_power_calibration, get_xfade_gains, XfadeGains};
use tracing::debug;

/// Resolved inputs of the crossfader gain calculation
///
/// Caches the power calibration so it is only recomputed when the
/// transform changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XfaderControl {
    transform: f64,
    calibration: f64,
    curve: f64,
    reverse: bool,
}

impl Default for XfaderControl {
    fn default() -> Self {
        Self::from_settings(&MixerSettings::default())
    }
}

impl XfaderControl {
    pub fn from_settings(settings: &MixerSettings) -> Self {
        let transform = settings.xfader_transform();
        Self {
            transform,
            calibration: get_power_calibration(transform),
            curve: settings.xfader_curve(),
            reverse: settings.xfader_reverse(),
        }
    }

    /// Resolve settings from the config file and build the control
    ///
    /// See [`mixkit_common::config::load_mixer_settings`] for the lookup order.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let settings = mixkit_common::config::load_mixer_settings(config_path)?;
        Ok(Self::from_settings(&settings))
    }

    /// Take over changed settings
    pub fn apply_settings(&mut self, settings: &MixerSettings) {
        let transform = settings.xfader_transform();
        if transform != self.transform {
            debug!("Crossfader transform changed: {} -> {}", self.transform, transform);
            self.transform = transform;
            self.calibration = get_power_calibration(transform);
        }
        if settings.xfader_curve() != self.curve {
            debug!("Crossfader curve changed: {} -> {}", self.curve, settings.xfader_curve());
            self.curve = settings.xfader_curve();
        }
        if settings.xfader_reverse() != self.reverse {
            debug!("Crossfader reverse changed: {}", settings.xfader_reverse());
            self.reverse = settings.xfader_reverse();
        }
    }

    pub fn transform(&self) -> f64 {
        self.transform
    }

    pub fn calibration(&self) -> f64 {
        self.calibration
    }

    pub fn curve(&self) -> f64 {
        self.curve
    }

    pub fn reverse(&self) -> bool {
        self.reverse
    }

    /// Deck gains for the current slider position
    ///
    /// Real-time safe: no allocation, no locking, no logging.
    #[inline]
    pub fn gains(&self, position: f64) -> XfadeGains {
        get_xfade_gains(position, self.transform, self.calibration, self.curve, self.reverse)
    }
}

//! Crossfader gain curve calculations
//!
//! Converts a crossfader slider position into the two per-deck gain
//! multipliers. The curve scalar blends between two mixing laws:
//! - Additive: each deck stays at full level until the slider crosses the
//!   center, then cuts along the transform curve. Total level varies with
//!   position (both decks at unity in the center).
//! - Constant power: cut points are pulled towards the center by the power
//!   calibration and the pair is normalised so that `gain1² + gain2² = 1`.
//!
//! Everything here is pure and allocation-free. The mixer calls
//! [`get_xfade_gains`] once per processing block with the latest slider
//! position; [`get_power_calibration`] only needs re-evaluating when the
//! configured transform changes.

use serde::{Deserialize, Serialize};

/// Gain multiplier applied to samples
pub type SampleGain = f32;

/// Curve value selecting the additive mixing law
pub const XFADER_ADDITIVE: f64 = 0.0;

/// Curve value selecting the constant-power mixing law
pub const XFADER_CONSTPWR: f64 = 1.0;

/// Settings group holding all crossfader options
pub const XFADER_CONFIG_GROUP: &str = "[Mixer Profile]";

/// Settings item for the transform (curve steepness)
pub const XFADER_TRANSFORM_KEY: &str = "xFaderCurve";

/// Settings item for the curve (mixing law blend)
pub const XFADER_MODE_KEY: &str = "xFaderMode";

/// Settings item for the reverse orientation flag
pub const XFADER_REVERSE_KEY: &str = "xFaderReverse";

/// Default transform: linear cut
pub const TRANSFORM_DEFAULT: f64 = 1.0;

/// Smallest accepted transform (slowest cut)
pub const TRANSFORM_MIN: f64 = 0.6;

/// Largest accepted transform (practically a hard cut)
pub const TRANSFORM_MAX: f64 = 1000.0;

/// Per-deck gains produced for one processing block
///
/// `gain1` scales the deck on the left end of the crossfader,
/// `gain2` the deck on the right end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct XfadeGains {
    pub gain1: SampleGain,
    pub gain2: SampleGain,
}

impl XfadeGains {
    /// Both decks at full level
    pub const UNITY: XfadeGains = XfadeGains {
        gain1: 1.0,
        gain2: 1.0,
    };

    /// Exchange the two deck gains
    pub fn swapped(self) -> Self {
        XfadeGains {
            gain1: self.gain2,
            gain2: self.gain1,
        }
    }
}

impl From<XfadeGains> for (SampleGain, SampleGain) {
    fn from(gains: XfadeGains) -> Self {
        (gains.gain1, gains.gain2)
    }
}

/// Calculate the power calibration for a transform
///
/// Returns the transform root of 0.5: the distance past the cut point at
/// which the transform curve reaches half gain. The constant-power law uses
/// it to offset the cut points so both decks meet at the same level in the
/// center.
///
/// `transform` is expected inside `[TRANSFORM_MIN, TRANSFORM_MAX]`; callers
/// clamp before calling.
pub fn get_power_calibration(transform: f64) -> f64 {
    0.5f64.powf(1.0 / transform)
}

/// Calculate the deck gains for a crossfader position
///
/// # Arguments
/// * `position` - Slider position, -1.0 (deck 1 only) to 1.0 (deck 2 only), 0.0 = center
/// * `transform` - Curve steepness, see [`TRANSFORM_MIN`]..[`TRANSFORM_MAX`]
/// * `calibration` - Result of [`get_power_calibration`] for `transform`
/// * `curve` - 0.0 ([`XFADER_ADDITIVE`]) to 1.0 ([`XFADER_CONSTPWR`]), blends linearly in between
/// * `reverse` - Swap the decks (mirror the slider)
///
/// Out-of-range inputs are not guarded; gains never go negative.
pub fn get_xfade_gains(
    position: f64,
    transform: f64,
    calibration: f64,
    curve: f64,
    reverse: bool,
) -> XfadeGains {
    // Additive: cut starts at the center
    let additive1 = fade_out(position, transform);
    let additive2 = fade_out(-position, transform);

    // Constant power: cut starts `calibration` before the center
    let mut power1 = fade_out(position + calibration, transform);
    let mut power2 = fade_out(calibration - position, transform);
    let norm = (power1 * power1 + power2 * power2).sqrt();
    if norm > 0.0 {
        power1 /= norm;
        power2 /= norm;
    }

    let gains = XfadeGains {
        gain1: (additive1 + (power1 - additive1) * curve) as SampleGain,
        gain2: (additive2 + (power2 - additive2) * curve) as SampleGain,
    };

    if reverse {
        gains.swapped()
    } else {
        gains
    }
}

/// Gain of a deck whose slider is `distance` past its cut point
fn fade_out(distance: f64, transform: f64) -> f64 {
    if distance <= 0.0 {
        return 1.0;
    }
    // Prevent phase reversal beyond the end of the slider
    (1.0 - distance.powf(transform)).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn transforms() -> [f64; 5] {
        [TRANSFORM_MIN, TRANSFORM_DEFAULT, 2.0, 50.0, TRANSFORM_MAX]
    }

    #[test]
    fn test_default_calibration() {
        // Linear transform: half gain half way along the slider
        assert!((get_power_calibration(TRANSFORM_DEFAULT) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_calibration_is_deterministic() {
        for transform in transforms() {
            assert_eq!(
                get_power_calibration(transform).to_bits(),
                get_power_calibration(transform).to_bits()
            );
        }
    }

    #[test]
    fn test_calibration_reaches_half_gain() {
        for transform in transforms() {
            let calibration = get_power_calibration(transform);
            assert!(calibration > 0.0 && calibration < 1.0);
            assert!((fade_out(calibration, transform) - 0.5).abs() < 1e-9);
        }
    }

    #[test]
    fn test_additive_endpoints() {
        for transform in transforms() {
            let calibration = get_power_calibration(transform);

            let left = get_xfade_gains(-1.0, transform, calibration, XFADER_ADDITIVE, false);
            assert_eq!(left, XfadeGains { gain1: 1.0, gain2: 0.0 });

            let right = get_xfade_gains(1.0, transform, calibration, XFADER_ADDITIVE, false);
            assert_eq!(right, XfadeGains { gain1: 0.0, gain2: 1.0 });

            let center = get_xfade_gains(0.0, transform, calibration, XFADER_ADDITIVE, false);
            assert_eq!(center, XfadeGains::UNITY);
        }
    }

    #[test]
    fn test_additive_linear_cut() {
        let calibration = get_power_calibration(TRANSFORM_DEFAULT);
        let gains = get_xfade_gains(0.25, TRANSFORM_DEFAULT, calibration, XFADER_ADDITIVE, false);
        assert!((gains.gain1 - 0.75).abs() < EPSILON);
        assert_eq!(gains.gain2, 1.0);
    }

    #[test]
    fn test_constant_power_endpoints() {
        for transform in transforms() {
            let calibration = get_power_calibration(transform);

            let left = get_xfade_gains(-1.0, transform, calibration, XFADER_CONSTPWR, false);
            assert!((left.gain1 - 1.0).abs() < EPSILON, "{:?}", left);
            assert!(left.gain2.abs() < EPSILON, "{:?}", left);

            let right = get_xfade_gains(1.0, transform, calibration, XFADER_CONSTPWR, false);
            assert!(right.gain1.abs() < EPSILON, "{:?}", right);
            assert!((right.gain2 - 1.0).abs() < EPSILON, "{:?}", right);
        }
    }

    #[test]
    fn test_constant_power_center_is_balanced() {
        for transform in transforms() {
            let calibration = get_power_calibration(transform);
            let gains = get_xfade_gains(0.0, transform, calibration, XFADER_CONSTPWR, false);
            assert_eq!(gains.gain1, gains.gain2);
            assert!((gains.gain1 - std::f32::consts::FRAC_1_SQRT_2).abs() < EPSILON);
        }
    }

    #[test]
    fn test_constant_power_keeps_power() {
        for transform in transforms() {
            let calibration = get_power_calibration(transform);
            for step in 0..=40 {
                let position = -1.0 + step as f64 * 0.05;
                let gains = get_xfade_gains(position, transform, calibration, XFADER_CONSTPWR, false);
                let power = gains.gain1 * gains.gain1 + gains.gain2 * gains.gain2;
                assert!(
                    (power - 1.0).abs() < 1e-5,
                    "transform {} position {}: power {}",
                    transform,
                    position,
                    power
                );
            }
        }
    }

    #[test]
    fn test_curve_blends_laws() {
        let transform = TRANSFORM_DEFAULT;
        let calibration = get_power_calibration(transform);
        let position = -0.3;

        let additive = get_xfade_gains(position, transform, calibration, XFADER_ADDITIVE, false);
        let power = get_xfade_gains(position, transform, calibration, XFADER_CONSTPWR, false);
        let half = get_xfade_gains(position, transform, calibration, 0.5, false);

        assert!((half.gain1 - (additive.gain1 + power.gain1) / 2.0).abs() < EPSILON);
        assert!((half.gain2 - (additive.gain2 + power.gain2) / 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_reverse_mirrors_position() {
        for transform in transforms() {
            let calibration = get_power_calibration(transform);
            for curve in [XFADER_ADDITIVE, 0.25, XFADER_CONSTPWR] {
                for step in 0..=20 {
                    let position = -1.0 + step as f64 * 0.1;
                    let reversed = get_xfade_gains(position, transform, calibration, curve, true);
                    let mirrored = get_xfade_gains(-position, transform, calibration, curve, false);
                    assert_eq!(reversed, mirrored);
                }
            }
        }
    }

    #[test]
    fn test_no_phase_reversal_past_end() {
        let transform = 0.8;
        let calibration = get_power_calibration(transform);
        for curve in [XFADER_ADDITIVE, XFADER_CONSTPWR] {
            let gains = get_xfade_gains(1.5, transform, calibration, curve, false);
            assert!(gains.gain1 >= 0.0);
            assert!(gains.gain2 >= 0.0);
        }
    }

    #[test]
    fn test_tuple_conversion() {
        let (gain1, gain2): (SampleGain, SampleGain) = XfadeGains { gain1: 0.25, gain2: 0.75 }.into();
        assert_eq!(gain1, 0.25);
        assert_eq!(gain2, 0.75);
    }
}

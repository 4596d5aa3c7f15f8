//! Integration tests for per-block crossfader gains

use mixkit_common::params::MixerSettings;
use mixkit_common::xfader::{XFADER_ADDITIVE, XFADER_CONSTPWR};
use mixkit_engine::{ReadAheadSampleBuffer, XfaderControl};

/// Apply the block gains to two staged decks and sum them
fn mix_block(
    control: &XfaderControl,
    position: f64,
    deck1: &mut ReadAheadSampleBuffer,
    deck2: &mut ReadAheadSampleBuffer,
    out: &mut [f32],
) {
    let gains = control.gains(position);
    let len = out.len();
    let left = deck1.read_from_head(len);
    for (o, s) in out.iter_mut().zip(left.iter()) {
        *o = s * gains.gain1;
    }
    let right = deck2.read_from_head(len);
    for (o, s) in out.iter_mut().zip(right.iter()) {
        *o += s * gains.gain2;
    }
}

fn staged_deck(value: f32) -> ReadAheadSampleBuffer {
    let mut deck = ReadAheadSampleBuffer::new(64).unwrap();
    deck.write_to_tail(64).fill(value);
    deck
}

#[test]
fn test_full_left_only_plays_deck1() {
    let control = XfaderControl::default();
    let mut deck1 = staged_deck(1.0);
    let mut deck2 = staged_deck(0.25);
    let mut out = [0.0f32; 16];

    mix_block(&control, -1.0, &mut deck1, &mut deck2, &mut out);
    assert!(out.iter().all(|&s| (s - 1.0).abs() < 1e-6));
}

#[test]
fn test_reverse_setting_swaps_decks() {
    let mut settings = MixerSettings::default();
    settings.set_xfader_reverse(true);
    let control = XfaderControl::from_settings(&settings);

    let mut deck1 = staged_deck(1.0);
    let mut deck2 = staged_deck(0.25);
    let mut out = [0.0f32; 16];

    mix_block(&control, -1.0, &mut deck1, &mut deck2, &mut out);
    assert!(out.iter().all(|&s| (s - 0.25).abs() < 1e-6));
}

#[test]
fn test_center_gains_equal_for_every_curve() {
    let mut settings = MixerSettings::default();
    for transform in [0.6, 1.0, 3.0, 1000.0] {
        settings.set_xfader_transform(transform).unwrap();
        for curve in [XFADER_ADDITIVE, 0.5, XFADER_CONSTPWR] {
            settings.set_xfader_curve(curve).unwrap();
            let gains = XfaderControl::from_settings(&settings).gains(0.0);
            assert_eq!(gains.gain1, gains.gain2, "transform {} curve {}", transform, curve);
        }
    }
}

#[test]
fn test_settings_change_between_blocks() {
    let mut control = XfaderControl::default();
    let before = control.gains(0.5);

    let mut settings = MixerSettings::default();
    settings.set_xfader_curve(XFADER_ADDITIVE).unwrap();
    control.apply_settings(&settings);
    let after = control.gains(0.5);

    // Additive keeps deck 2 at unity on its own half
    assert_eq!(after.gain2, 1.0);
    assert!((after.gain1 - 0.5).abs() < 1e-6);
    assert_ne!(before, after);
}

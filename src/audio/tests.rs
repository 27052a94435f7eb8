//! Audio domain: tests for gain conversion and mixer application.

use super::mixer::{Mixer, MixerParam, db_to_linear, linear_to_db};
use super::systems::{one_shot_gain, push_volumes};
use crate::settings::{PrefsStore, Settings};

// -----------------------------------------------------------------------------
// Gain conversion tests
// -----------------------------------------------------------------------------

#[test]
fn test_linear_to_db_reference_points() {
    assert!((linear_to_db(1.0) - 0.0).abs() < 1e-5);
    // Half volume is about -6.02 dB
    assert!((linear_to_db(0.5) - (-6.0206)).abs() < 1e-3);
    assert!((linear_to_db(0.1) - (-20.0)).abs() < 1e-4);
}

#[test]
fn test_linear_to_db_floors_at_the_silence_guard() {
    // Zero and negative inputs hit the 0.01 floor instead of log10(0)
    let floor_db = linear_to_db(0.01);
    assert_eq!(linear_to_db(0.0), floor_db);
    assert_eq!(linear_to_db(-3.0), floor_db);
    assert!((floor_db - (-40.0)).abs() < 1e-4);
    // Over-unity input clamps to 0 dB
    assert!((linear_to_db(2.0) - 0.0).abs() < 1e-5);
}

#[test]
fn test_db_to_linear_inverts_linear_to_db() {
    for v in [0.05, 0.25, 0.5, 0.75, 1.0] {
        let round_trip = db_to_linear(linear_to_db(v));
        assert!((round_trip - v).abs() < 1e-4);
    }
}

// -----------------------------------------------------------------------------
// Mixer tests
// -----------------------------------------------------------------------------

#[test]
fn test_mixer_defaults_to_unity_gain() {
    let mixer = Mixer::default();
    for param in [
        MixerParam::Master,
        MixerParam::Music,
        MixerParam::Sfx,
        MixerParam::UiSfx,
    ] {
        assert_eq!(mixer.db(param), 0.0);
    }
}

#[test]
fn test_channel_db_routes_through_master() {
    let mut mixer = Mixer::default();
    mixer.set_db(MixerParam::Master, -6.0);
    mixer.set_db(MixerParam::Music, -3.0);
    assert_eq!(mixer.channel_db(MixerParam::Music), -9.0);
}

#[test]
fn test_push_volumes_writes_sfx_db_to_both_sfx_and_ui() {
    let mut prefs = PrefsStore::in_memory();
    let mut settings = Settings::default();
    settings.set_sfx_volume(&mut prefs, 0.5);

    let mut mixer = Mixer::default();
    push_volumes(&settings, &mut mixer);

    let expected = linear_to_db(0.5);
    assert_eq!(mixer.db(MixerParam::Sfx), expected);
    assert_eq!(mixer.db(MixerParam::UiSfx), expected);
    assert!((expected - (-6.0206)).abs() < 1e-3);
}

#[test]
fn test_push_volumes_applies_all_sliders() {
    let mut prefs = PrefsStore::in_memory();
    let mut settings = Settings::default();
    settings.set_master_volume(&mut prefs, 1.0);
    settings.set_music_volume(&mut prefs, 0.1);

    let mut mixer = Mixer::default();
    push_volumes(&settings, &mut mixer);

    assert_eq!(mixer.db(MixerParam::Master), 0.0);
    assert!((mixer.db(MixerParam::Music) - (-20.0)).abs() < 1e-4);
}

// -----------------------------------------------------------------------------
// One-shot scaling tests
// -----------------------------------------------------------------------------

#[test]
fn test_one_shot_gain_scales_linearly() {
    let mixer = Mixer::default();
    let base = one_shot_gain(&mixer, MixerParam::UiSfx, 1.0);
    let half = one_shot_gain(&mixer, MixerParam::UiSfx, 0.5);
    assert!((half - base * 0.5).abs() < 1e-5);
}

#[test]
fn test_one_shot_scale_clamps_to_zero_to_four() {
    let mixer = Mixer::default();
    assert_eq!(one_shot_gain(&mixer, MixerParam::Sfx, -2.0), 0.0);
    let capped = one_shot_gain(&mixer, MixerParam::Sfx, 100.0);
    assert_eq!(capped, one_shot_gain(&mixer, MixerParam::Sfx, 4.0));
}

//! Settings domain: validated user preferences and immediate persistence.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::settings::prefs::PrefsStore;

// Keys under which settings are persisted
pub const KEY_MASTER: &str = "settings_master";
pub const KEY_MUSIC: &str = "settings_music";
pub const KEY_SFX: &str = "settings_sfx";
pub const KEY_SHOW_TIME: &str = "settings_show_time";
pub const KEY_SHOW_DEATHS: &str = "settings_show_deaths";

const DEFAULT_MASTER: f32 = 0.5;
const DEFAULT_MUSIC: f32 = 0.5;
const DEFAULT_SFX: f32 = 0.5;
const DEFAULT_SHOW_TIME: bool = true;
const DEFAULT_SHOW_DEATHS: bool = true;

/// User preferences. Volume fields are always in `[0,1]`; every setter
/// clamps before storing and persists through the prefs store immediately.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Settings {
    master_volume: f32,
    music_volume: f32,
    sfx_volume: f32,
    show_time: bool,
    show_deaths: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: DEFAULT_MASTER,
            music_volume: DEFAULT_MUSIC,
            sfx_volume: DEFAULT_SFX,
            show_time: DEFAULT_SHOW_TIME,
            show_deaths: DEFAULT_SHOW_DEATHS,
        }
    }
}

impl Settings {
    /// Build settings from stored preferences, keeping the defaults for
    /// absent keys. Stored volumes are clamped in case the file was edited.
    pub fn from_prefs(prefs: &PrefsStore) -> Self {
        let defaults = Self::default();
        Self {
            master_volume: prefs
                .get_f32(KEY_MASTER, defaults.master_volume)
                .clamp(0.0, 1.0),
            music_volume: prefs
                .get_f32(KEY_MUSIC, defaults.music_volume)
                .clamp(0.0, 1.0),
            sfx_volume: prefs.get_f32(KEY_SFX, defaults.sfx_volume).clamp(0.0, 1.0),
            show_time: prefs.get_bool(KEY_SHOW_TIME, defaults.show_time),
            show_deaths: prefs.get_bool(KEY_SHOW_DEATHS, defaults.show_deaths),
        }
    }

    pub fn master_volume(&self) -> f32 {
        self.master_volume
    }

    pub fn music_volume(&self) -> f32 {
        self.music_volume
    }

    pub fn sfx_volume(&self) -> f32 {
        self.sfx_volume
    }

    pub fn show_time(&self) -> bool {
        self.show_time
    }

    pub fn show_deaths(&self) -> bool {
        self.show_deaths
    }

    pub fn set_master_volume(&mut self, prefs: &mut PrefsStore, value: f32) {
        self.master_volume = value.clamp(0.0, 1.0);
        prefs.set_f32(KEY_MASTER, self.master_volume);
        prefs.flush();
    }

    pub fn set_music_volume(&mut self, prefs: &mut PrefsStore, value: f32) {
        self.music_volume = value.clamp(0.0, 1.0);
        prefs.set_f32(KEY_MUSIC, self.music_volume);
        prefs.flush();
    }

    pub fn set_sfx_volume(&mut self, prefs: &mut PrefsStore, value: f32) {
        self.sfx_volume = value.clamp(0.0, 1.0);
        prefs.set_f32(KEY_SFX, self.sfx_volume);
        prefs.flush();
    }

    pub fn set_show_time(&mut self, prefs: &mut PrefsStore, show: bool) {
        self.show_time = show;
        prefs.set_bool(KEY_SHOW_TIME, show);
        prefs.flush();
    }

    pub fn set_show_deaths(&mut self, prefs: &mut PrefsStore, show: bool) {
        self.show_deaths = show;
        prefs.set_bool(KEY_SHOW_DEATHS, show);
        prefs.flush();
    }

    /// Restore every field to its default. Composed of the individual
    /// setters, so the same persistence side effects fire.
    pub fn reset_to_defaults(&mut self, prefs: &mut PrefsStore) {
        self.set_master_volume(prefs, DEFAULT_MASTER);
        self.set_music_volume(prefs, DEFAULT_MUSIC);
        self.set_sfx_volume(prefs, DEFAULT_SFX);
        self.set_show_time(prefs, DEFAULT_SHOW_TIME);
        self.set_show_deaths(prefs, DEFAULT_SHOW_DEATHS);
    }
}

/// Fired by whoever mutates [`Settings`] so the audio router re-applies
/// mixer volumes.
#[derive(Debug)]
pub struct SettingsChanged;

impl Message for SettingsChanged {}

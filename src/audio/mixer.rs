//! Audio domain: mixer parameters in decibels and gain conversion.

use bevy::prelude::*;

/// Named gain controls consumed by the playback channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MixerParam {
    Master,
    Music,
    Sfx,
    UiSfx,
}

/// Decibel value per mixer parameter. Channels route through the master
/// bus, so their effective gain is master + channel (decibel addition is
/// linear multiplication).
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Mixer {
    master_db: f32,
    music_db: f32,
    sfx_db: f32,
    ui_sfx_db: f32,
}

impl Default for Mixer {
    fn default() -> Self {
        // 0 dB = unity gain on every bus until settings are applied
        Self {
            master_db: 0.0,
            music_db: 0.0,
            sfx_db: 0.0,
            ui_sfx_db: 0.0,
        }
    }
}

impl Mixer {
    pub fn db(&self, param: MixerParam) -> f32 {
        match param {
            MixerParam::Master => self.master_db,
            MixerParam::Music => self.music_db,
            MixerParam::Sfx => self.sfx_db,
            MixerParam::UiSfx => self.ui_sfx_db,
        }
    }

    pub fn set_db(&mut self, param: MixerParam, db: f32) {
        match param {
            MixerParam::Master => self.master_db = db,
            MixerParam::Music => self.music_db = db,
            MixerParam::Sfx => self.sfx_db = db,
            MixerParam::UiSfx => self.ui_sfx_db = db,
        }
    }

    /// Effective gain of a channel after the master bus.
    pub fn channel_db(&self, param: MixerParam) -> f32 {
        self.master_db + self.db(param)
    }
}

/// Converts a linear `[0,1]` volume to decibels. Input is floored at 0.01
/// so a zeroed slider never reaches `log10(0)`.
pub fn linear_to_db(value: f32) -> f32 {
    20.0 * value.clamp(0.01, 1.0).log10()
}

pub fn db_to_linear(db: f32) -> f32 {
    10f32.powf(db / 20.0)
}

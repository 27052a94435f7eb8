//! Audio domain: router plugin wiring and public exports.

mod events;
mod mixer;
mod systems;

#[cfg(test)]
mod tests;

pub use events::{PlayMusic, PlaySfx, PlaySfxOneShot, PlayUiSfx};
pub use mixer::{Mixer, MixerParam, db_to_linear, linear_to_db};
pub use systems::UiSounds;

use bevy::prelude::*;

use crate::audio::systems::{
    ActiveMusic, apply_volumes_on_change, apply_volumes_on_startup, handle_play_music,
    handle_play_sfx, handle_play_sfx_one_shot, handle_play_ui_sfx, load_ui_sounds,
    sync_channel_volumes,
};

pub struct AudioRouterPlugin;

impl Plugin for AudioRouterPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Mixer>()
            .init_resource::<ActiveMusic>()
            .init_resource::<UiSounds>()
            .add_message::<PlayMusic>()
            .add_message::<PlaySfx>()
            .add_message::<PlaySfxOneShot>()
            .add_message::<PlayUiSfx>()
            .add_systems(Startup, (load_ui_sounds, apply_volumes_on_startup))
            .add_systems(
                Update,
                (
                    apply_volumes_on_change,
                    handle_play_music,
                    handle_play_sfx,
                    handle_play_sfx_one_shot,
                    handle_play_ui_sfx,
                    sync_channel_volumes,
                )
                    .chain(),
            );
    }
}

//! Session domain: coordinator plugin wiring and public exports.

mod events;
mod resources;
mod state;
mod systems;

#[cfg(test)]
mod tests;

pub use events::{LevelComplete, PlayerDied, ResetRun, RespawnPlayer, SetPaused};
pub use resources::{PendingAdvance, RunStats, SceneRefs, SessionTuning};
pub use state::SessionState;

use bevy::prelude::*;

use crate::scenes::handle_scene_requests;
use crate::session::systems::{
    handle_level_complete, handle_player_died, handle_reset_run, handle_respawn,
    handle_scene_loaded, handle_set_paused, tick_pending_advance, tick_run_timer,
};

pub struct SessionPlugin;

impl Plugin for SessionPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<SessionState>()
            .init_resource::<RunStats>()
            .init_resource::<SceneRefs>()
            .init_resource::<SessionTuning>()
            .init_resource::<PendingAdvance>()
            .add_message::<PlayerDied>()
            .add_message::<RespawnPlayer>()
            .add_message::<LevelComplete>()
            .add_message::<ResetRun>()
            .add_message::<SetPaused>()
            .add_systems(
                Update,
                (
                    tick_run_timer,
                    handle_set_paused,
                    handle_reset_run,
                    handle_player_died,
                    handle_respawn,
                    handle_level_complete,
                    tick_pending_advance,
                    // Reference resolution must see the entities the scene
                    // load spawned this frame
                    handle_scene_loaded.after(handle_scene_requests),
                ),
            );
    }
}

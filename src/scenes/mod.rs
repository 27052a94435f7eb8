//! Scenes domain: navigator plugin wiring and public exports.

mod events;
mod plan;
mod systems;

#[cfg(test)]
mod tests;

pub use events::{QuitRequest, SceneLoaded, SceneRequest, SceneTarget};
pub use plan::{SceneDef, SceneKind, ScenePlan};
pub use systems::{ActiveScene, GameOverUi, SceneScoped, SpawnPointMarker};

pub(crate) use systems::handle_scene_requests;

use bevy::prelude::*;

use crate::scenes::systems::{handle_quit_requests, request_start_screen, setup_scene_plan};

pub struct ScenesPlugin;

impl Plugin for ScenesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ScenePlan>()
            .init_resource::<ActiveScene>()
            .add_message::<SceneRequest>()
            .add_message::<QuitRequest>()
            .add_message::<SceneLoaded>()
            .add_systems(Startup, (setup_scene_plan, request_start_screen).chain())
            .add_systems(Update, (handle_scene_requests, handle_quit_requests));
    }
}

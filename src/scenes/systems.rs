//! Scenes domain: scene loading, navigation, and scene-scoped lifecycle.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use std::path::Path;

use crate::audio::PlayMusic;
use crate::scenes::events::{QuitRequest, SceneLoaded, SceneRequest, SceneTarget};
use crate::scenes::plan::{SceneKind, ScenePlan, load_scene_plan};
use crate::session::RunStats;

/// Path of the scene plan data file.
const SCENES_PATH: &str = "assets/data/scenes.ron";

/// Despawned on every scene load; everything belonging to a scene carries
/// this.
#[derive(Component)]
pub struct SceneScoped;

/// Tags the position the player respawns at.
#[derive(Component)]
pub struct SpawnPointMarker;

/// Tags the game-over overlay owned by the ui collaborators; the session
/// coordinator resolves it by this marker on every load.
#[derive(Component)]
pub struct GameOverUi;

/// Currently loaded scene.
#[derive(Resource, Debug, Default)]
pub struct ActiveScene {
    pub index: Option<usize>,
    pub name: String,
}

pub(crate) fn setup_scene_plan(mut plan: ResMut<ScenePlan>) {
    match load_scene_plan(Path::new(SCENES_PATH)) {
        Ok(loaded) => {
            info!("Loaded scene plan with {} scenes", loaded.scenes.len());
            *plan = loaded;
        }
        Err(e) => {
            warn!("{}; using built-in scene plan", e);
        }
    }
}

pub(crate) fn request_start_screen(mut requests: MessageWriter<SceneRequest>) {
    requests.write(SceneRequest(SceneTarget::StartScreen));
}

/// Resolves a navigation target to a plan index. The second value reports
/// whether a fresh run starts, in which case the caller resets the stats
/// before loading.
pub(crate) fn resolve_target(
    plan: &ScenePlan,
    current: Option<usize>,
    target: SceneTarget,
) -> (Option<usize>, bool) {
    match target {
        SceneTarget::FirstLevel => (plan.first_level(), true),
        SceneTarget::StartScreen => (plan.start_index(), false),
        SceneTarget::NextScene => match current {
            // Advancing from the end screen replays from the top of the
            // plan with a fresh run
            Some(index) if plan.kind_of(index) == Some(SceneKind::End) => {
                ((!plan.scenes.is_empty()).then_some(0), true)
            }
            Some(index) => (plan.next_after(index), false),
            None => ((!plan.scenes.is_empty()).then_some(0), false),
        },
    }
}

/// The single place scene loads happen: tears down the previous scene's
/// entities, updates [`ActiveScene`], spawns the new scene's scaffold, and
/// broadcasts [`SceneLoaded`]. Consumers are ordered after this system, so
/// notification order is deterministic.
pub(crate) fn handle_scene_requests(
    mut commands: Commands,
    mut requests: MessageReader<SceneRequest>,
    mut loaded: MessageWriter<SceneLoaded>,
    mut music: MessageWriter<PlayMusic>,
    plan: Res<ScenePlan>,
    mut active: ResMut<ActiveScene>,
    mut stats: ResMut<RunStats>,
    scoped: Query<Entity, With<SceneScoped>>,
    asset_server: Res<AssetServer>,
) {
    for request in requests.read() {
        let (index, fresh_run) = resolve_target(&plan, active.index, request.0);
        let Some(index) = index else {
            warn!("Scene plan has no scene for {:?}", request.0);
            continue;
        };
        if fresh_run {
            stats.reset_run();
        }

        let def = &plan.scenes[index];
        for entity in &scoped {
            commands.entity(entity).despawn();
        }
        if let Some((x, y)) = def.spawn_point {
            commands.spawn((SceneScoped, SpawnPointMarker, Transform::from_xyz(x, y, 0.0)));
        }
        if let Some(track) = &def.music {
            music.write(PlayMusic {
                clip: Some(asset_server.load(track.clone())),
            });
        }

        active.index = Some(index);
        active.name = def.name.clone();
        info!("Loaded scene '{}' ({:?})", def.name, def.kind);
        loaded.write(SceneLoaded {
            name: def.name.clone(),
            kind: def.kind,
        });
    }
}

pub(crate) fn handle_quit_requests(
    mut requests: MessageReader<QuitRequest>,
    mut exit: MessageWriter<AppExit>,
) {
    if requests.read().next().is_some() {
        info!("Quit requested");
        exit.write(AppExit::Success);
    }
}

//! Session domain: coordinator systems.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::audio::{PlayUiSfx, UiSounds};
use crate::scenes::{
    GameOverUi, SceneKind, SceneLoaded, SceneRequest, SceneTarget, SpawnPointMarker,
};
use crate::session::events::{LevelComplete, PlayerDied, ResetRun, RespawnPlayer, SetPaused};
use crate::session::resources::{PendingAdvance, RunStats, SceneRefs, SessionTuning};
use crate::session::state::SessionState;

/// Reacts to every scene load regardless of current state: clears the
/// completion latch, recomputes timing from the scene's kind, and
/// re-resolves the scene-scoped references. Stale handles from the
/// previous scene are dropped before the lookups run.
pub(crate) fn handle_scene_loaded(
    mut loads: MessageReader<SceneLoaded>,
    mut stats: ResMut<RunStats>,
    mut refs: ResMut<SceneRefs>,
    mut pending: ResMut<PendingAdvance>,
    mut next_state: ResMut<NextState<SessionState>>,
    spawn_points: Query<Entity, With<SpawnPointMarker>>,
    game_over_ui: Query<Entity, With<GameOverUi>>,
) {
    for load in loads.read() {
        let timed = load.kind == SceneKind::Level;
        stats.enter_scene(timed);
        pending.cancel();

        refs.clear();
        refs.spawn_point = spawn_points.iter().next();
        refs.game_over_ui = game_over_ui.iter().next();
        if timed && refs.spawn_point.is_none() {
            warn!("No spawn point found in scene '{}'", load.name);
        }

        next_state.set(if timed {
            SessionState::Running
        } else {
            SessionState::Idle
        });
        info!("Scene '{}' loaded, timing = {}", load.name, timed);
    }
}

/// Accumulates play time on the real-time clock, so an engine-side time
/// freeze never stalls the run clock; pause is tracked independently.
pub(crate) fn tick_run_timer(time: Res<Time<Real>>, mut stats: ResMut<RunStats>) {
    stats.tick(time.delta_secs());
}

pub(crate) fn handle_player_died(
    mut deaths: MessageReader<PlayerDied>,
    mut stats: ResMut<RunStats>,
    refs: Res<SceneRefs>,
    mut next_state: ResMut<NextState<SessionState>>,
    mut visibility: Query<&mut Visibility>,
) {
    for _ in deaths.read() {
        let count = stats.record_death();
        info!("Player died, death count = {}", count);

        match refs.game_over_ui.and_then(|e| visibility.get_mut(e).ok()) {
            Some(mut vis) => *vis = Visibility::Visible,
            None => warn!("Game-over ui not found in this scene"),
        }
        next_state.set(SessionState::GameOver);
    }
}

/// Puts the actor back at the spawn point with zeroed velocity. An
/// unresolved spawn point leaves the actor where it is.
pub(crate) fn handle_respawn(
    mut requests: MessageReader<RespawnPlayer>,
    refs: Res<SceneRefs>,
    stats: Res<RunStats>,
    mut next_state: ResMut<NextState<SessionState>>,
    mut actors: Query<(&mut Transform, Option<&mut LinearVelocity>), Without<SpawnPointMarker>>,
    spawn_points: Query<&Transform, With<SpawnPointMarker>>,
    mut visibility: Query<&mut Visibility>,
) {
    for request in requests.read() {
        let Ok((mut transform, velocity)) = actors.get_mut(request.actor) else {
            warn!("Respawn requested for unknown actor {:?}", request.actor);
            continue;
        };
        if let Some(mut velocity) = velocity {
            velocity.0 = Vec2::ZERO;
        }
        match refs.spawn_point.and_then(|e| spawn_points.get(e).ok()) {
            Some(spawn) => {
                transform.translation.x = spawn.translation.x;
                transform.translation.y = spawn.translation.y;
            }
            None => warn!("Spawn point not found in this scene"),
        }
        if let Some(mut vis) = refs.game_over_ui.and_then(|e| visibility.get_mut(e).ok()) {
            *vis = Visibility::Hidden;
        }
        if stats.is_timing() {
            next_state.set(SessionState::Running);
        }
    }
}

pub(crate) fn handle_level_complete(
    mut triggers: MessageReader<LevelComplete>,
    mut stats: ResMut<RunStats>,
    mut pending: ResMut<PendingAdvance>,
    tuning: Res<SessionTuning>,
    sounds: Res<UiSounds>,
    mut ui_sfx: MessageWriter<PlayUiSfx>,
    mut next_state: ResMut<NextState<SessionState>>,
) {
    for _ in triggers.read() {
        // Latched: a second trigger in the same scene is a silent no-op
        if !stats.try_complete_level() {
            continue;
        }
        ui_sfx.write(PlayUiSfx {
            clip: sounds.level_complete.clone(),
            volume_scale: 1.0,
        });
        pending.schedule(tuning.level_complete_delay);
        next_state.set(SessionState::LevelCompleting);
        info!(
            "Level completed, advancing in {}s",
            tuning.level_complete_delay
        );
    }
}

/// Ticks the delayed advance on real time, so the delay elapses even while
/// virtual time is frozen, and requests the next scene when it fires.
pub(crate) fn tick_pending_advance(
    time: Res<Time<Real>>,
    mut pending: ResMut<PendingAdvance>,
    mut requests: MessageWriter<SceneRequest>,
) {
    if pending.tick(time.delta()) {
        requests.write(SceneRequest(SceneTarget::NextScene));
    }
}

pub(crate) fn handle_set_paused(
    mut requests: MessageReader<SetPaused>,
    mut stats: ResMut<RunStats>,
    state: Res<State<SessionState>>,
    mut next_state: ResMut<NextState<SessionState>>,
) {
    for request in requests.read() {
        stats.set_paused(request.0);
        match (state.get(), request.0) {
            (SessionState::Running, true) => next_state.set(SessionState::Paused),
            (SessionState::Paused, false) => next_state.set(SessionState::Running),
            _ => {}
        }
    }
}

pub(crate) fn handle_reset_run(
    mut requests: MessageReader<ResetRun>,
    mut stats: ResMut<RunStats>,
) {
    if requests.read().next().is_some() {
        stats.reset_run();
        info!("Run reset");
    }
}

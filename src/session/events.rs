//! Session domain: collaborator-facing messages.

use bevy::ecs::message::Message;
use bevy::prelude::Entity;

/// The player died: bumps the death counter and shows the game-over overlay.
#[derive(Debug)]
pub struct PlayerDied;

impl Message for PlayerDied {}

/// Asks the coordinator to put the actor back at the current spawn point
/// with zeroed velocity.
#[derive(Debug)]
pub struct RespawnPlayer {
    pub actor: Entity,
}

impl Message for RespawnPlayer {}

/// The level's end trigger fired. Duplicate triggers are latched away.
#[derive(Debug)]
pub struct LevelComplete;

impl Message for LevelComplete {}

/// Starts a new run: zeroes deaths and play time.
#[derive(Debug)]
pub struct ResetRun;

impl Message for ResetRun {}

/// Pause-menu collaborators toggle run-clock accumulation with this.
#[derive(Debug)]
pub struct SetPaused(pub bool);

impl Message for SetPaused {}

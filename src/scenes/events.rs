//! Scenes domain: navigation requests and load notifications.

use bevy::ecs::message::Message;

use crate::scenes::plan::SceneKind;

/// Where the navigator should go next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneTarget {
    /// First level scene, starting a fresh run.
    FirstLevel,
    /// Designated start scene, unconditionally.
    StartScreen,
    /// Next scene in the plan; past the last level this is the end scene,
    /// and from the end scene a fresh run begins at the top of the plan.
    NextScene,
}

#[derive(Debug)]
pub struct SceneRequest(pub SceneTarget);

impl Message for SceneRequest {}

/// Asks the process to terminate.
#[derive(Debug)]
pub struct QuitRequest;

impl Message for QuitRequest {}

/// Broadcast after a scene load. The session coordinator re-resolves its
/// scene-scoped references on every one of these.
#[derive(Debug)]
pub struct SceneLoaded {
    pub name: String,
    pub kind: SceneKind,
}

impl Message for SceneLoaded {}

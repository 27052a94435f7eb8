//! Session domain: coordinator state machine.

use bevy::prelude::*;

/// Run-level state machine driven by scene loads and collaborator calls.
#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum SessionState {
    /// Non-level scene (menus, end screen); the run clock is stopped.
    #[default]
    Idle,
    Running,
    /// Run clock suspended; everything else is retained.
    Paused,
    /// Level finished; waiting out the delay before the next scene loads.
    LevelCompleting,
    GameOver,
}

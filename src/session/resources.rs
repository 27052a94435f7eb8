//! Session domain: run statistics, scene references, and the advance timer.

use bevy::prelude::*;
use std::time::Duration;

/// Run-level counters and flags. `death_count` and `time_played` reset
/// together through [`RunStats::reset_run`], never independently.
#[derive(Resource, Debug, Default)]
pub struct RunStats {
    death_count: u32,
    time_played: f32,
    is_paused: bool,
    is_timing: bool,
    level_completed: bool,
}

impl RunStats {
    pub fn death_count(&self) -> u32 {
        self.death_count
    }

    /// Seconds of play time accumulated this run.
    pub fn time_played(&self) -> f32 {
        self.time_played
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    pub fn is_timing(&self) -> bool {
        self.is_timing
    }

    pub fn record_death(&mut self) -> u32 {
        self.death_count += 1;
        self.death_count
    }

    /// Advances the run clock. No-op outside level scenes or while paused.
    pub fn tick(&mut self, delta_secs: f32) {
        if self.is_timing && !self.is_paused {
            self.time_played += delta_secs;
        }
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.is_paused = paused;
    }

    /// Called on every scene load regardless of prior state: clears the
    /// completion latch and recomputes whether the run clock runs here.
    pub fn enter_scene(&mut self, timed: bool) {
        self.level_completed = false;
        self.is_timing = timed;
    }

    /// Latches level completion. Returns false when already latched, so a
    /// duplicate trigger does nothing.
    pub fn try_complete_level(&mut self) -> bool {
        if self.level_completed {
            return false;
        }
        self.level_completed = true;
        true
    }

    /// Starts a fresh run. Pause and timing are scene state and stay put.
    pub fn reset_run(&mut self) {
        self.death_count = 0;
        self.time_played = 0.0;
    }
}

/// Handles into the current scene, re-resolved on every load and never
/// carried across scenes.
#[derive(Resource, Debug, Default)]
pub struct SceneRefs {
    pub spawn_point: Option<Entity>,
    pub game_over_ui: Option<Entity>,
}

impl SceneRefs {
    pub fn clear(&mut self) {
        self.spawn_point = None;
        self.game_over_ui = None;
    }
}

/// Tunables for the coordinator.
#[derive(Resource, Debug, Clone)]
pub struct SessionTuning {
    /// Seconds between level completion and the next scene load, measured
    /// in real time.
    pub level_complete_delay: f32,
}

impl Default for SessionTuning {
    fn default() -> Self {
        Self {
            level_complete_delay: 0.6,
        }
    }
}

/// The one pending delayed scene advance. Scheduling a new one replaces
/// (and thereby cancels) whatever was pending.
#[derive(Resource, Debug, Default)]
pub struct PendingAdvance {
    timer: Option<Timer>,
}

impl PendingAdvance {
    pub fn schedule(&mut self, delay_secs: f32) {
        self.timer = Some(Timer::from_seconds(delay_secs, TimerMode::Once));
    }

    pub fn cancel(&mut self) {
        self.timer = None;
    }

    pub fn is_scheduled(&self) -> bool {
        self.timer.is_some()
    }

    /// Ticks the pending timer. Returns true exactly once, when it fires.
    pub fn tick(&mut self, delta: Duration) -> bool {
        let Some(timer) = self.timer.as_mut() else {
            return false;
        };
        timer.tick(delta);
        if timer.is_finished() {
            self.timer = None;
            true
        } else {
            false
        }
    }
}

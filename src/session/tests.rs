//! Session domain: tests for run statistics, the completion latch, and the
//! delayed advance.

use std::time::Duration;

use super::{PendingAdvance, RunStats, SceneRefs, SessionTuning};
use bevy::ecs::world::World;

// -----------------------------------------------------------------------------
// RunStats tests
// -----------------------------------------------------------------------------

#[test]
fn test_deaths_count_up_and_reset_to_zero() {
    let mut stats = RunStats::default();
    stats.reset_run();

    assert_eq!(stats.record_death(), 1);
    assert_eq!(stats.record_death(), 2);
    assert_eq!(stats.death_count(), 2);

    stats.reset_run();
    assert_eq!(stats.death_count(), 0);
}

#[test]
fn test_reset_run_zeroes_deaths_and_time_together() {
    let mut stats = RunStats::default();
    stats.enter_scene(true);
    stats.record_death();
    stats.tick(12.5);
    assert!(stats.time_played() > 0.0);

    stats.reset_run();
    assert_eq!(stats.death_count(), 0);
    assert_eq!(stats.time_played(), 0.0);
}

#[test]
fn test_reset_run_leaves_pause_and_timing_alone() {
    let mut stats = RunStats::default();
    stats.enter_scene(true);
    stats.set_paused(true);

    stats.reset_run();
    assert!(stats.is_paused());
    assert!(stats.is_timing());
}

#[test]
fn test_clock_only_runs_in_timed_unpaused_scenes() {
    let mut stats = RunStats::default();

    // Untimed scene: no accumulation
    stats.enter_scene(false);
    stats.tick(1.0);
    assert_eq!(stats.time_played(), 0.0);

    // Level scene: accumulates
    stats.enter_scene(true);
    stats.tick(1.0);
    assert_eq!(stats.time_played(), 1.0);

    // Paused: stops
    stats.set_paused(true);
    stats.tick(1.0);
    assert_eq!(stats.time_played(), 1.0);

    // Unpaused: resumes immediately
    stats.set_paused(false);
    stats.tick(0.5);
    assert_eq!(stats.time_played(), 1.5);
}

#[test]
fn test_time_played_never_decreases_across_ticks() {
    let mut stats = RunStats::default();
    stats.enter_scene(true);
    let mut last = stats.time_played();
    for i in 0..100 {
        stats.set_paused(i % 3 == 0);
        stats.tick(0.016);
        assert!(stats.time_played() >= last);
        last = stats.time_played();
    }
}

// -----------------------------------------------------------------------------
// Completion latch tests
// -----------------------------------------------------------------------------

#[test]
fn test_level_complete_latch_fires_once() {
    let mut stats = RunStats::default();
    stats.enter_scene(true);

    assert!(stats.try_complete_level());
    assert!(!stats.try_complete_level());
    assert!(!stats.try_complete_level());
}

#[test]
fn test_scene_load_clears_the_latch_regardless_of_prior_state() {
    let mut stats = RunStats::default();
    stats.enter_scene(true);
    assert!(stats.try_complete_level());

    stats.enter_scene(true);
    assert!(stats.try_complete_level());

    // Kind is recomputed from the new scene on every load
    stats.enter_scene(false);
    assert!(!stats.is_timing());
    stats.enter_scene(true);
    assert!(stats.is_timing());
}

// -----------------------------------------------------------------------------
// Scene reference tests
// -----------------------------------------------------------------------------

#[test]
fn test_scene_refs_clear_drops_both_handles() {
    let mut world = World::new();
    let mut refs = SceneRefs {
        spawn_point: Some(world.spawn_empty().id()),
        game_over_ui: Some(world.spawn_empty().id()),
    };
    refs.clear();
    assert!(refs.spawn_point.is_none());
    assert!(refs.game_over_ui.is_none());
}

// -----------------------------------------------------------------------------
// Delayed advance tests
// -----------------------------------------------------------------------------

#[test]
fn test_pending_advance_fires_exactly_once_after_the_delay() {
    let mut pending = PendingAdvance::default();
    pending.schedule(0.6);
    assert!(pending.is_scheduled());

    assert!(!pending.tick(Duration::from_millis(300)));
    assert!(pending.tick(Duration::from_millis(400)));
    // Spent: no further firing, nothing scheduled
    assert!(!pending.tick(Duration::from_millis(400)));
    assert!(!pending.is_scheduled());
}

#[test]
fn test_scheduling_replaces_a_pending_advance() {
    let mut pending = PendingAdvance::default();
    pending.schedule(0.6);
    assert!(!pending.tick(Duration::from_millis(500)));

    // Rescheduling cancels the old timer; the new one starts from zero
    pending.schedule(0.6);
    assert!(!pending.tick(Duration::from_millis(500)));
    assert!(pending.tick(Duration::from_millis(200)));
}

#[test]
fn test_cancel_stops_a_pending_advance() {
    let mut pending = PendingAdvance::default();
    pending.schedule(0.1);
    pending.cancel();
    assert!(!pending.is_scheduled());
    assert!(!pending.tick(Duration::from_secs(1)));
}

#[test]
fn test_default_delay_matches_tuning() {
    assert_eq!(SessionTuning::default().level_complete_delay, 0.6);
}

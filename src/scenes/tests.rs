//! Scenes domain: tests for plan lookups and navigation resolution.

use super::plan::{SceneDef, SceneKind, ScenePlan};
use super::systems::resolve_target;
use super::SceneTarget;

fn test_plan() -> ScenePlan {
    ScenePlan {
        scenes: vec![
            SceneDef {
                name: "StartScreen".to_string(),
                kind: SceneKind::Start,
                spawn_point: None,
                music: None,
            },
            SceneDef {
                name: "Level_01".to_string(),
                kind: SceneKind::Level,
                spawn_point: Some((0.0, 0.0)),
                music: None,
            },
            SceneDef {
                name: "Level_02".to_string(),
                kind: SceneKind::Level,
                spawn_point: Some((16.0, 0.0)),
                music: None,
            },
            SceneDef {
                name: "EndScreen".to_string(),
                kind: SceneKind::End,
                spawn_point: None,
                music: None,
            },
        ],
    }
}

// -----------------------------------------------------------------------------
// Plan lookup tests
// -----------------------------------------------------------------------------

#[test]
fn test_plan_designated_indices() {
    let plan = test_plan();
    assert_eq!(plan.start_index(), Some(0));
    assert_eq!(plan.first_level(), Some(1));
    assert_eq!(plan.end_index(), Some(3));
}

#[test]
fn test_next_after_walks_the_plan_in_order() {
    let plan = test_plan();
    assert_eq!(plan.next_after(0), Some(1));
    assert_eq!(plan.next_after(1), Some(2));
}

#[test]
fn test_next_after_last_level_is_the_end_scene() {
    let plan = test_plan();
    assert_eq!(plan.next_after(2), Some(3));
    assert_eq!(plan.kind_of(3), Some(SceneKind::End));
}

#[test]
fn test_next_after_past_the_list_falls_back_to_the_end_scene() {
    let plan = test_plan();
    assert_eq!(plan.next_after(3), plan.end_index());
    assert_eq!(plan.next_after(99), plan.end_index());
}

#[test]
fn test_default_plan_is_well_formed() {
    let plan = ScenePlan::default();
    assert!(plan.start_index().is_some());
    assert!(plan.first_level().is_some());
    assert!(plan.end_index().is_some());
    // Every level scene needs a spawn point
    for def in plan.scenes.iter().filter(|s| s.kind == SceneKind::Level) {
        assert!(def.spawn_point.is_some(), "{} has no spawn point", def.name);
    }
}

// -----------------------------------------------------------------------------
// Navigation resolution tests
// -----------------------------------------------------------------------------

#[test]
fn test_first_level_starts_a_fresh_run() {
    let plan = test_plan();
    let (index, fresh_run) = resolve_target(&plan, Some(3), SceneTarget::FirstLevel);
    assert_eq!(index, plan.first_level());
    assert!(fresh_run);
}

#[test]
fn test_start_screen_loads_unconditionally_without_reset() {
    let plan = test_plan();
    for current in [None, Some(1), Some(3)] {
        let (index, fresh_run) = resolve_target(&plan, current, SceneTarget::StartScreen);
        assert_eq!(index, Some(0));
        assert!(!fresh_run);
    }
}

#[test]
fn test_next_scene_from_a_level_does_not_reset() {
    let plan = test_plan();
    let (index, fresh_run) = resolve_target(&plan, Some(1), SceneTarget::NextScene);
    assert_eq!(index, Some(2));
    assert!(!fresh_run);
}

#[test]
fn test_next_scene_from_last_level_reaches_the_end_scene() {
    let plan = test_plan();
    let (index, fresh_run) = resolve_target(&plan, Some(2), SceneTarget::NextScene);
    assert_eq!(index, Some(3));
    assert!(!fresh_run);
}

#[test]
fn test_next_scene_from_end_scene_resets_and_replays_from_the_top() {
    let plan = test_plan();
    let (index, fresh_run) = resolve_target(&plan, Some(3), SceneTarget::NextScene);
    assert_eq!(index, Some(0));
    assert!(fresh_run);
}

#[test]
fn test_resolution_on_an_empty_plan_yields_nothing() {
    let plan = ScenePlan { scenes: Vec::new() };
    for target in [
        SceneTarget::FirstLevel,
        SceneTarget::StartScreen,
        SceneTarget::NextScene,
    ] {
        let (index, _) = resolve_target(&plan, None, target);
        assert_eq!(index, None);
    }
}

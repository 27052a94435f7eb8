//! Scenes domain: the ordered scene plan and its RON loader.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Category a scene belongs to. Only `Level` scenes run the play-time clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum SceneKind {
    Start,
    Level,
    End,
}

/// One entry in the ordered scene list.
#[derive(Debug, Clone, Deserialize)]
pub struct SceneDef {
    pub name: String,
    pub kind: SceneKind,
    /// Where the player respawns in this scene, when it has gameplay.
    #[serde(default)]
    pub spawn_point: Option<(f32, f32)>,
    /// Asset path of the background track this scene requests on load.
    #[serde(default)]
    pub music: Option<String>,
}

/// Wrapper matching the layout of `assets/data/scenes.ron`.
#[derive(Debug, Deserialize)]
pub struct ScenePlanData {
    pub scenes: Vec<SceneDef>,
}

/// Error type for scene plan loading failures.
#[derive(Debug)]
pub struct PlanLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for PlanLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// The ordered scene list. This is the sole encoding of level ordering and
/// termination policy; reordering levels means editing the plan, nothing else.
#[derive(Resource, Debug)]
pub struct ScenePlan {
    pub scenes: Vec<SceneDef>,
}

impl Default for ScenePlan {
    fn default() -> Self {
        // Built-in plan used when assets/data/scenes.ron is missing
        Self {
            scenes: vec![
                SceneDef {
                    name: "StartScreen".to_string(),
                    kind: SceneKind::Start,
                    spawn_point: None,
                    music: Some("audio/music_menu.ogg".to_string()),
                },
                SceneDef {
                    name: "Level_01".to_string(),
                    kind: SceneKind::Level,
                    spawn_point: Some((-320.0, -96.0)),
                    music: Some("audio/music_caves.ogg".to_string()),
                },
                SceneDef {
                    name: "Level_02".to_string(),
                    kind: SceneKind::Level,
                    spawn_point: Some((-288.0, -64.0)),
                    music: Some("audio/music_caves.ogg".to_string()),
                },
                SceneDef {
                    name: "Level_03".to_string(),
                    kind: SceneKind::Level,
                    spawn_point: Some((-352.0, -128.0)),
                    music: Some("audio/music_depths.ogg".to_string()),
                },
                SceneDef {
                    name: "EndScreen".to_string(),
                    kind: SceneKind::End,
                    spawn_point: None,
                    music: Some("audio/music_menu.ogg".to_string()),
                },
            ],
        }
    }
}

impl ScenePlan {
    pub fn get(&self, index: usize) -> Option<&SceneDef> {
        self.scenes.get(index)
    }

    pub fn kind_of(&self, index: usize) -> Option<SceneKind> {
        self.scenes.get(index).map(|s| s.kind)
    }

    /// Index of the designated start scene.
    pub fn start_index(&self) -> Option<usize> {
        self.scenes.iter().position(|s| s.kind == SceneKind::Start)
    }

    /// Index of the first level scene.
    pub fn first_level(&self) -> Option<usize> {
        self.scenes.iter().position(|s| s.kind == SceneKind::Level)
    }

    /// Index of the designated end scene.
    pub fn end_index(&self) -> Option<usize> {
        self.scenes.iter().position(|s| s.kind == SceneKind::End)
    }

    /// Scene following `index` in the plan, or the end scene once the list
    /// runs out.
    pub fn next_after(&self, index: usize) -> Option<usize> {
        if index + 1 < self.scenes.len() {
            Some(index + 1)
        } else {
            self.end_index()
        }
    }
}

fn ron_options() -> ron::Options {
    ron::Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Load the scene plan from a RON file.
pub fn load_scene_plan(path: &Path) -> Result<ScenePlan, PlanLoadError> {
    let file = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| PlanLoadError {
        file: file.clone(),
        message: format!("IO error: {}", e),
    })?;
    let data: ScenePlanData = ron_options()
        .from_str(&contents)
        .map_err(|e| PlanLoadError {
            file,
            message: format!("Parse error: {}", e),
        })?;
    Ok(ScenePlan { scenes: data.scenes })
}

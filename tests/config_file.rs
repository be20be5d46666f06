//! Loading animation configuration documents from disk.

use std::fs;
use std::path::PathBuf;

use bevy::prelude::*;
use idle_sway::{AnimationConfig, ConfigError, EngagementPolicy};
use rstest::{fixture, rstest};

/// A JSON file under the system temp directory, removed on drop.
struct ScratchFile(PathBuf);

impl ScratchFile {
    fn with_contents(name: &str, contents: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "idle_sway_{}_{name}.json",
            std::process::id()
        ));
        fs::write(&path, contents)
            .unwrap_or_else(|e| panic!("failed to write {}: {e}", path.display()));
        Self(path)
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.0);
    }
}

#[fixture]
fn full_document() -> &'static str {
    r#"{
        "animate_position": true,
        "animate_rotation": false,
        "animate_scale": true,
        "position_amplitude": [20.0, 20.0],
        "rotation_amplitude": 10.0,
        "scale_amplitude": [0.05, 0.1],
        "position_frequency": 1.0,
        "rotation_frequency": 0.5,
        "scale_frequency": 2.0,
        "force_center_pivot": false,
        "paused": false,
        "engagement": "reevaluate"
    }"#
}

#[rstest]
fn loads_full_document(full_document: &str) {
    let file = ScratchFile::with_contents("full", full_document);
    let config = AnimationConfig::load(&file.0)
        .unwrap_or_else(|e| panic!("config should load: {e}"));

    assert!(!config.animate_rotation);
    assert_eq!(config.position_amplitude, Vec2::new(20.0, 20.0));
    assert_eq!(config.scale_amplitude, Vec2::new(0.05, 0.1));
    assert!((config.scale_frequency - 2.0).abs() < f32::EPSILON);
    assert!(!config.force_center_pivot);
    assert_eq!(config.engagement, EngagementPolicy::Reevaluate);
}

#[rstest]
fn empty_object_is_the_default() {
    let file = ScratchFile::with_contents("empty", "{}");
    let config = AnimationConfig::load(&file.0)
        .unwrap_or_else(|e| panic!("config should load: {e}"));
    assert_eq!(config, AnimationConfig::default());
}

#[rstest]
fn malformed_file_reports_its_path() {
    let file = ScratchFile::with_contents("broken", r#"{ "rotation_amplitude": "wide" }"#);
    let err = AnimationConfig::load(&file.0).expect_err("config should be rejected");

    match &err {
        ConfigError::Parse { path, .. } => assert_eq!(path.as_ref(), Some(&file.0)),
        ConfigError::Io { .. } => panic!("expected a parse error, got {err:?}"),
    }
    assert!(err.to_string().contains(&file.0.display().to_string()));
}

//! Unit tests for config module.

use course_canvas::config::EngineConfig;
use course_canvas::constants::{DRAG_THRESHOLD, MAX_SCALE};
use course_canvas::engine::CanvasEngine;
use course_canvas::input::{InputState, PointerEvent};
use course_canvas::surface::{FixedContainer, Scene};
use course_canvas::types::{NodeOptions, NodeType, Point};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_load_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("canvas.json");
    fs::write(&path, r#"{ "drag_threshold": 12.0, "copy_suffix": " copy" }"#).unwrap();

    let config = EngineConfig::load(&path).unwrap();
    assert_eq!(config.drag_threshold, 12.0);
    assert_eq!(config.copy_suffix, " copy");
    assert_eq!(config.max_scale, MAX_SCALE);
}

#[test]
fn test_load_missing_file_names_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.json");

    let err = EngineConfig::load(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("absent.json"));
}

#[test]
fn test_load_rejects_invalid_values() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, r#"{ "min_scale": 0.0 }"#).unwrap();

    assert!(EngineConfig::load(&path).is_err());
}

#[test]
fn test_default_matches_constants() {
    let config = EngineConfig::default();
    assert_eq!(config.drag_threshold, DRAG_THRESHOLD);
    assert!(config.validate().is_ok());
}

#[test]
fn test_engine_honours_configured_threshold() {
    let config = EngineConfig {
        drag_threshold: 20.0,
        ..EngineConfig::default()
    };
    let mut engine =
        CanvasEngine::with_config(Scene::new(), FixedContainer::new(800.0, 600.0), config).unwrap();
    let node = engine.create_node(
        NodeType::Topic,
        "Sticky",
        0.0,
        0.0,
        NodeOptions::new().with_id("n"),
    );
    engine.add_node(node, None).unwrap();

    engine.handle_pointer_down(&PointerEvent::primary(10.0, 10.0));
    engine.handle_pointer_move(Point::new(25.0, 10.0));
    assert!(engine.input_state().is_pending());

    engine.handle_pointer_move(Point::new(31.0, 10.0));
    assert!(matches!(engine.input_state(), InputState::DraggingNode { .. }));
}

#[test]
fn test_engine_rejects_inverted_or_nan_scale_bounds() {
    for (min_scale, max_scale) in [(2.0, 0.5), (0.1, f64::NAN), (f64::NAN, 3.0)] {
        let config = EngineConfig {
            min_scale,
            max_scale,
            ..EngineConfig::default()
        };
        let result =
            CanvasEngine::with_config(Scene::new(), FixedContainer::new(800.0, 600.0), config);
        assert!(result.is_err(), "accepted {min_scale}..{max_scale}");
    }
}

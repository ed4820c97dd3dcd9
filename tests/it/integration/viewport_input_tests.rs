//! Viewport Input Integration Tests
//!
//! Zoom, wheel, pan and fit-to-screen driven through the engine.

use crate::helpers::{CONTAINER, course_engine, single_node_engine};
use course_canvas::constants::{MAX_SCALE, MIN_SCALE};
use course_canvas::engine::CanvasEngine;
use course_canvas::input::WheelEvent;
use course_canvas::surface::{FixedContainer, Scene};
use course_canvas::types::Point;

fn screen_of(engine: &CanvasEngine, canvas: Point) -> Point {
    engine.viewport().canvas_to_screen(canvas)
}

#[test]
fn test_focal_zoom_keeps_point_under_cursor() {
    let mut engine = single_node_engine();
    let focus = Point::new(500.0, 400.0);
    let canvas = engine.viewport().screen_to_canvas(focus);

    engine.zoom(2.0, Some(focus));
    let after = screen_of(&engine, canvas);
    assert!((after.x - focus.x).abs() < 1e-9);
    assert!((after.y - focus.y).abs() < 1e-9);
    assert_eq!(engine.content().transform(), "translate(-500px, -400px) scale(2)");
}

#[test]
fn test_focal_zoom_subtracts_container_origin() {
    let mut engine = CanvasEngine::new(Scene::new(), FixedContainer::new(800.0, 600.0).at(200.0, 100.0));
    // Client (600, 400) is container-local (400, 300)
    engine.zoom(2.0, Some(Point::new(600.0, 400.0)));
    assert_eq!(engine.viewport().translate, Point::new(-400.0, -300.0));
}

#[test]
fn test_wheel_direction() {
    let mut engine = single_node_engine();
    engine.handle_wheel(&WheelEvent::new(0.0, 0.0, 120.0));
    assert!((engine.viewport().scale - 0.9).abs() < 1e-12);

    engine.reset_view();
    engine.handle_wheel(&WheelEvent::new(0.0, 0.0, -120.0));
    assert!((engine.viewport().scale - 1.1).abs() < 1e-12);
}

#[test]
fn test_wheel_is_clamped() {
    let mut engine = single_node_engine();
    for _ in 0..100 {
        engine.handle_wheel(&WheelEvent::new(10.0, 10.0, -1.0));
    }
    assert_eq!(engine.viewport().scale, MAX_SCALE);

    for _ in 0..200 {
        engine.handle_wheel(&WheelEvent::new(10.0, 10.0, 1.0));
    }
    assert_eq!(engine.viewport().scale, MIN_SCALE);
}

#[test]
fn test_wheel_during_drag_keeps_gesture() {
    let mut engine = single_node_engine();
    engine.handle_pointer_down(&course_canvas::input::PointerEvent::primary(150.0, 120.0));
    engine.handle_wheel(&WheelEvent::new(150.0, 120.0, -1.0));
    assert!(engine.input_state().is_pending());
}

#[test]
fn test_fit_demo_course() {
    let mut engine = course_engine();
    engine.zoom(0.3, None);
    engine.pan(-999.0, 123.0);

    assert!(engine.fit_to_screen());
    // Bounds (150, 100, 600x440) fit at 100% and center in 1000x800
    assert_eq!(engine.viewport().scale, 1.0);
    assert_eq!(engine.viewport().translate, Point::new(50.0, 80.0));
    assert_eq!(engine.content().transform(), "translate(50px, 80px) scale(1)");
}

#[test]
fn test_fit_shrinks_large_content() {
    let mut engine = course_engine();
    engine.container_mut().resize(400.0, 300.0);
    assert!(engine.fit_to_screen());

    // min((400 - 100) / 600, (300 - 100) / 440)
    assert!((engine.viewport().scale - 200.0 / 440.0).abs() < 1e-12);
    let bounds = engine.bounds().unwrap();
    let center = screen_of(&engine, bounds.center());
    assert!((center.x - 200.0).abs() < 1e-9);
    assert!((center.y - 150.0).abs() < 1e-9);
}

#[test]
fn test_fit_empty_canvas_is_noop() {
    let mut engine = CanvasEngine::headless(CONTAINER.0, CONTAINER.1);
    engine.pan(10.0, 10.0);
    assert!(!engine.fit_to_screen());
    assert_eq!(engine.viewport().translate, Point::new(10.0, 10.0));
}

//! Pointer Gesture Integration Tests
//!
//! Press / move / release sequences through the input state machine.

use crate::helpers::{
    TestCanvasBuilder, assert_position, course_engine, drag, id, recorder, single_node_engine,
};
use course_canvas::engine::CanvasEngine;
use course_canvas::input::{InputState, Key, PointerEvent};
use course_canvas::surface::{FixedContainer, NodeMarker, Scene};
use course_canvas::types::{NodeOptions, NodeType, Point};
use std::cell::RefCell;
use std::rc::Rc;

// ============================================================================
// Drag threshold
// ============================================================================

#[test]
fn test_press_arms_pending_drag_and_selects() {
    let mut engine = single_node_engine();
    engine.handle_pointer_down(&PointerEvent::primary(150.0, 120.0));

    assert!(engine.input_state().is_pending());
    assert_eq!(engine.selected(), Some(&id("n")));
    assert!(engine.content().has_marker(&id("n"), NodeMarker::Selected));
}

#[test]
fn test_movement_within_threshold_is_a_click() {
    let mut engine = single_node_engine();
    let (clicks, hook) = recorder();
    engine.set_on_node_click(hook);

    drag(&mut engine, (150.0, 120.0), &[(154.0, 120.0), (155.0, 125.0)]);

    assert_position(&engine, "n", 100.0, 100.0);
    assert_eq!(*clicks.borrow(), vec!["n".to_string()]);
    assert!(engine.input_state().is_idle());
}

#[test]
fn test_crossing_threshold_starts_drag() {
    let mut engine = single_node_engine();
    let (clicks, hook) = recorder();
    engine.set_on_node_click(hook);

    engine.handle_pointer_down(&PointerEvent::primary(150.0, 120.0));
    engine.handle_pointer_move(Point::new(156.0, 120.0));

    assert!(engine.input_state().is_dragging_node());
    assert!(engine.content().has_marker(&id("n"), NodeMarker::Dragging));
    // The grab point stays under the pointer
    assert_position(&engine, "n", 106.0, 100.0);

    engine.handle_pointer_move(Point::new(250.0, 300.0));
    assert_position(&engine, "n", 200.0, 280.0);
    assert_eq!(engine.node_at(Point::new(210.0, 290.0)), Some(&id("n")));

    engine.handle_pointer_up();
    assert!(engine.input_state().is_idle());
    assert!(!engine.content().has_marker(&id("n"), NodeMarker::Dragging));
    assert!(clicks.borrow().is_empty());
}

#[test]
fn test_vertical_travel_alone_crosses_threshold() {
    let mut engine = single_node_engine();
    drag(&mut engine, (150.0, 120.0), &[(150.0, 114.0)]);
    assert_position(&engine, "n", 100.0, 94.0);
}

#[test]
fn test_drag_at_scale_converts_to_canvas_units() {
    let mut engine = TestCanvasBuilder::new()
        .with_node("n", NodeType::Topic, "Node", (100.0, 100.0, 200.0, 80.0), None)
        .with_scale(2.0)
        .build();

    // Node top-left sits at client (200, 200)
    engine.handle_pointer_down(&PointerEvent::primary(210.0, 210.0));
    engine.handle_pointer_move(Point::new(260.0, 210.0));
    engine.handle_pointer_up();

    assert_position(&engine, "n", 125.0, 100.0);
}

#[test]
fn test_drag_with_offset_container() {
    let mut engine = CanvasEngine::new(Scene::new(), FixedContainer::new(800.0, 600.0).at(100.0, 50.0));
    let node = engine.create_node(
        NodeType::Topic,
        "Node",
        0.0,
        0.0,
        NodeOptions::new().with_id("n").with_size(200.0, 80.0),
    );
    engine.add_node(node, None).unwrap();

    engine.handle_pointer_down(&PointerEvent::primary(150.0, 100.0));
    assert!(engine.input_state().is_pending());

    engine.handle_pointer_move(Point::new(250.0, 150.0));
    engine.handle_pointer_up();
    assert_position(&engine, "n", 100.0, 50.0);
}

#[test]
fn test_drag_redraws_only_touching_connections() {
    let mut engine = course_engine();
    let draws_before = engine.content().connection_draws;

    // t1_1 spans (150, 400) to (350, 460) with the identity viewport
    drag(&mut engine, (200.0, 420.0), &[(230.0, 420.0), (260.0, 420.0)]);

    // One incoming connection, redrawn on each of two moves
    assert_eq!(engine.content().connection_draws - draws_before, 2);
    let path = &engine
        .content()
        .connection(&course_canvas::types::ConnectionKey::new(&id("ch1"), &id("t1_1")))
        .unwrap()
        .path;
    assert_eq!(path.end, Point::new(310.0, 400.0));
}

// ============================================================================
// Other buttons and clicks
// ============================================================================

#[test]
fn test_double_click_uses_its_own_hook() {
    let mut engine = single_node_engine();
    let (clicks, click_hook) = recorder();
    let (doubles, double_hook) = recorder();
    engine.set_on_node_click(click_hook);
    engine.set_on_node_double_click(double_hook);

    engine.handle_pointer_down(&PointerEvent::primary(150.0, 120.0));
    engine.handle_pointer_up();
    engine.handle_pointer_down(&PointerEvent::primary(150.0, 120.0).with_click_count(2));
    engine.handle_pointer_up();

    assert_eq!(clicks.borrow().len(), 1);
    assert_eq!(doubles.borrow().len(), 1);
}

#[test]
fn test_double_click_falls_back_to_click_hook() {
    let mut engine = single_node_engine();
    let (clicks, hook) = recorder();
    engine.set_on_node_click(hook);

    engine.handle_pointer_down(&PointerEvent::primary(150.0, 120.0).with_click_count(2));
    engine.handle_pointer_up();
    assert_eq!(clicks.borrow().len(), 1);
}

#[test]
fn test_right_click_selects_and_notifies() {
    let mut engine = single_node_engine();
    let seen: Rc<RefCell<Vec<(String, Point)>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    engine.set_on_node_right_click(move |node, event| {
        sink.borrow_mut().push((node.id.to_string(), event.position));
    });

    engine.handle_pointer_down(&PointerEvent::secondary(160.0, 130.0));
    assert!(engine.input_state().is_idle());
    assert_eq!(engine.selected(), Some(&id("n")));
    assert_eq!(*seen.borrow(), vec![("n".to_string(), Point::new(160.0, 130.0))]);

    // Secondary press on empty canvas does nothing
    engine.handle_pointer_down(&PointerEvent::secondary(900.0, 700.0));
    assert!(engine.input_state().is_idle());
    assert_eq!(seen.borrow().len(), 1);
}

#[test]
fn test_middle_press_on_node_is_ignored() {
    let mut engine = single_node_engine();
    engine.handle_pointer_down(&PointerEvent::middle(150.0, 120.0));
    assert!(engine.input_state().is_idle());
    assert_eq!(engine.selected(), None);
}

// ============================================================================
// Panning
// ============================================================================

#[test]
fn test_pan_on_empty_canvas() {
    let mut engine = single_node_engine();
    engine.handle_pointer_down(&PointerEvent::primary(900.0, 700.0));
    assert!(engine.input_state().is_panning());
    assert!(engine.container().panning);

    engine.handle_pointer_move(Point::new(950.0, 720.0));
    assert_eq!(engine.viewport().translate, Point::new(50.0, 20.0));
    assert_eq!(engine.content().transform(), "translate(50px, 20px) scale(1)");

    engine.handle_pointer_up();
    assert!(engine.input_state().is_idle());
    assert!(!engine.container().panning);
    // The node did not move in canvas space
    assert_position(&engine, "n", 100.0, 100.0);
}

#[test]
fn test_middle_press_pans_too() {
    let mut engine = single_node_engine();
    engine.handle_pointer_down(&PointerEvent::middle(900.0, 700.0));
    engine.handle_pointer_move(Point::new(890.0, 690.0));
    engine.handle_pointer_up();
    assert_eq!(engine.viewport().translate, Point::new(-10.0, -10.0));
}

#[test]
fn test_press_during_gesture_is_ignored() {
    let mut engine = single_node_engine();
    engine.handle_pointer_down(&PointerEvent::primary(900.0, 700.0));
    engine.handle_pointer_down(&PointerEvent::primary(150.0, 120.0));

    assert!(engine.input_state().is_panning());
    assert_eq!(engine.selected(), None);
}

// ============================================================================
// Escape
// ============================================================================

#[test]
fn test_escape_restores_dragged_node() {
    let mut engine = single_node_engine();
    let (clicks, hook) = recorder();
    engine.set_on_node_click(hook);

    engine.handle_pointer_down(&PointerEvent::primary(150.0, 120.0));
    engine.handle_pointer_move(Point::new(400.0, 400.0));
    assert!(engine.handle_key_down(&Key::Escape));

    assert_eq!(*engine.input_state(), InputState::Idle);
    assert_position(&engine, "n", 100.0, 100.0);
    assert!(!engine.content().has_marker(&id("n"), NodeMarker::Dragging));
    assert_eq!(engine.node_at(Point::new(150.0, 120.0)), Some(&id("n")));

    // The release after a cancel reports nothing
    engine.handle_pointer_up();
    assert!(clicks.borrow().is_empty());
}

#[test]
fn test_escape_restores_pan() {
    let mut engine = single_node_engine();
    engine.pan(30.0, 30.0);
    engine.handle_pointer_down(&PointerEvent::primary(900.0, 700.0));
    engine.handle_pointer_move(Point::new(700.0, 500.0));

    assert!(engine.cancel_gesture());
    assert_eq!(engine.viewport().translate, Point::new(30.0, 30.0));
    assert!(!engine.container().panning);
}

#[test]
fn test_escape_when_idle_is_not_consumed() {
    let mut engine = single_node_engine();
    assert!(!engine.handle_key_down(&Key::Escape));
    assert!(!engine.handle_key_down(&Key::Other("Delete".to_string())));
}

#[test]
fn test_deleting_dragged_node_ends_gesture() {
    let mut engine = course_engine();
    drag(&mut engine, (200.0, 420.0), &[]);
    engine.handle_pointer_down(&PointerEvent::primary(200.0, 420.0));
    engine.handle_pointer_move(Point::new(260.0, 420.0));

    engine.delete_node(&id("t1_1")).unwrap();
    assert!(engine.input_state().is_idle());

    engine.handle_pointer_move(Point::new(300.0, 420.0));
    engine.handle_pointer_up();
    assert!(engine.input_state().is_idle());
}

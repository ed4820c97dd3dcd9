//! Unit tests for tasks module, using the canvas engine as the task target.

use crate::helpers::{course_engine, id};
use course_canvas::engine::CanvasEngine;
use course_canvas::tasks::{CancellationToken, TaskQueue};
use std::time::Duration;

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

#[test]
fn test_task_mutates_engine_when_due() {
    let mut engine = course_engine();
    let mut queue: TaskQueue<CanvasEngine> = TaskQueue::new();
    let token = CancellationToken::for_node(engine.generation(), id("t1_1"));

    queue.schedule(ms(2000), "retitle", Some(token), |engine, _| {
        engine.set_node_title(&id("t1_1"), "Renamed").unwrap();
    });

    let report = queue.advance(ms(1999), &mut engine);
    assert!(report.ran.is_empty());
    assert_eq!(engine.node(&id("t1_1")).unwrap().title, "Rethinking your role");

    let report = queue.advance(ms(1), &mut engine);
    assert_eq!(report.ran, vec!["retitle"]);
    assert_eq!(engine.node(&id("t1_1")).unwrap().title, "Renamed");
    assert!(queue.is_idle());
}

#[test]
fn test_deleted_node_skips_task() {
    let mut engine = course_engine();
    let mut queue: TaskQueue<CanvasEngine> = TaskQueue::new();
    let token = CancellationToken::for_node(engine.generation(), id("t2_2"));
    queue.schedule(ms(100), "enhance", Some(token), |engine, _| {
        engine.set_node_content(&id("t2_2"), None).unwrap();
    });

    engine.delete_node(&id("t2_2")).unwrap();
    let report = queue.advance(ms(100), &mut engine);
    assert_eq!(report.skipped, vec!["enhance"]);
    assert!(report.ran.is_empty());
}

#[test]
fn test_clear_invalidates_canvas_tokens() {
    let mut engine = course_engine();
    let mut queue: TaskQueue<CanvasEngine> = TaskQueue::new();
    let token = CancellationToken::for_canvas(engine.generation());
    queue.schedule(ms(500), "fit", Some(token.clone()), |engine, _| {
        engine.fit_to_screen();
    });

    assert!(!token.is_stale(&engine));
    engine.clear();
    assert!(token.is_stale(&engine));

    let report = queue.advance(ms(500), &mut engine);
    assert_eq!(report.skipped, vec!["fit"]);
}

#[test]
fn test_chained_follow_ups_within_one_advance() {
    let mut engine = CanvasEngine::headless(800.0, 600.0);
    let mut queue: TaskQueue<CanvasEngine> = TaskQueue::new();

    queue.schedule(ms(100), "first", None, |_, spawner| {
        spawner.schedule(ms(100), "second", None, |_, spawner| {
            spawner.schedule(ms(100), "third", None, |_, _| {});
        });
    });

    let report = queue.advance(ms(250), &mut engine);
    assert_eq!(report.ran, vec!["first", "second"]);
    assert_eq!(queue.pending(), 1);

    let report = queue.advance(ms(50), &mut engine);
    assert_eq!(report.ran, vec!["third"]);
    assert_eq!(queue.now(), ms(300));
}

#[test]
fn test_same_instant_runs_in_schedule_order() {
    let mut engine = CanvasEngine::headless(800.0, 600.0);
    let mut queue: TaskQueue<CanvasEngine> = TaskQueue::new();
    for label in ["a", "b", "c"] {
        queue.schedule(ms(10), label, None, |_, _| {});
    }
    let cancelled = queue.schedule(ms(10), "d", None, |_, _| {});
    assert!(queue.cancel(cancelled));

    let report = queue.advance(ms(10), &mut engine);
    assert_eq!(report.ran, vec!["a", "b", "c"]);
}

#[test]
fn test_explicit_cancel_is_shared_between_clones() {
    let engine = CanvasEngine::headless(800.0, 600.0);
    let token = CancellationToken::for_canvas(engine.generation());
    let clone = token.clone();

    clone.cancel();
    assert!(token.is_cancelled());
    assert!(token.is_stale(&engine));
    assert_eq!(token.node(), None);
}

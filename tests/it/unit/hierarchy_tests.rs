//! Unit tests for hierarchy module.

use crate::helpers::{TestCanvasBuilder, course_engine, id};
use course_canvas::engine::CanvasEngine;
use course_canvas::error::CanvasError;
use course_canvas::hierarchy::{CourseReview, CourseTree};
use course_canvas::types::Point;

#[test]
fn test_tree_from_demo_course() {
    let engine = course_engine();
    let snapshot = engine.snapshot();
    let tree = CourseTree::build(&snapshot).unwrap();

    assert_eq!(tree.title(), "Team Management for Product Managers");
    let chapters: Vec<&str> = tree.chapters().iter().map(|c| c.node.id.as_str()).collect();
    assert_eq!(chapters, vec!["ch1", "ch2"]);
    assert_eq!(tree.chapters()[1].children[0].node.id, id("t2_1"));
    assert_eq!(tree.nodes().len(), 7);
    assert_eq!(tree.root.count(), 7);
}

#[test]
fn test_walk_is_parents_first() {
    let engine = course_engine();
    let snapshot = engine.snapshot();
    let tree = CourseTree::build(&snapshot).unwrap();

    let order: Vec<&str> = tree.nodes().iter().map(|n| n.id.as_str()).collect();
    assert_eq!(order[1..4], ["ch1", "t1_1", "t1_2"]);
}

#[test]
fn test_membership_ignores_positions() {
    let mut engine = course_engine();
    engine.move_node(&id("t2_2"), Point::new(-900.0, -900.0)).unwrap();

    let snapshot = engine.snapshot();
    let tree = CourseTree::build(&snapshot).unwrap();
    assert_eq!(tree.chapters()[1].children[1].node.id, id("t2_2"));
}

#[test]
fn test_tree_errors() {
    let empty = CanvasEngine::headless(800.0, 600.0);
    assert_eq!(
        CourseTree::build(&empty.snapshot()),
        Err(CanvasError::EmptyCanvas)
    );

    let mut engine = course_engine();
    engine.delete_node(&id("ch1")).unwrap();
    let snapshot = engine.snapshot();
    let tree = CourseTree::build(&snapshot).unwrap();
    // Orphaned topics drop out of the tree
    assert_eq!(tree.nodes().len(), 4);
}

#[test]
fn test_review_counts() {
    let engine = course_engine();
    let review = CourseReview::analyze(&engine.snapshot());

    assert_eq!(review.node_count, 7);
    assert_eq!(review.chapter_count, 2);
    assert_eq!(review.topic_count, 4);
    assert_eq!(review.detached_count, 0);
    assert!(!review.dense);
    assert_eq!(
        review.summary(),
        "2 chapters, 4 topics. Topic density is comfortable."
    );
}

#[test]
fn test_review_detached_and_dense() {
    let mut builder = TestCanvasBuilder::new()
        .with_root("r", "Course", (0.0, 0.0))
        .with_chapter("c", "r", "Chapter", (0.0, 200.0));
    const TOPICS: [&str; 13] = [
        "t0", "t1", "t2", "t3", "t4", "t5", "t6", "t7", "t8", "t9", "t10", "t11", "t12",
    ];
    for (i, topic) in TOPICS.into_iter().enumerate() {
        builder = builder.with_topic(topic, "c", "Topic", (0.0, 300.0 + 70.0 * i as f64));
    }
    let mut engine = builder.build();
    engine.duplicate_node(&id("t0")).unwrap();

    let review = CourseReview::analyze(&engine.snapshot());
    assert_eq!(review.topic_count, 14);
    assert_eq!(review.detached_count, 1);
    assert!(review.dense);
    assert!(review.summary().contains("consider trimming"));
}

#[test]
fn test_review_of_empty_canvas() {
    let engine = CanvasEngine::headless(800.0, 600.0);
    let review = CourseReview::analyze(&engine.snapshot());
    assert_eq!(review.node_count, 0);
    assert_eq!(review.detached_count, 0);
}

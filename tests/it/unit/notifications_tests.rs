//! Unit tests for notifications module.

use course_canvas::notifications::{Notice, NoticeCenter, NoticeVariant};
use std::time::Duration;

#[test]
fn test_notice_creation() {
    let notice = Notice::success("Saved");
    assert_eq!(notice.message, "Saved");
    assert_eq!(notice.variant, NoticeVariant::Success);
    assert_eq!(notice.duration, Duration::from_secs(3));
}

#[test]
fn test_variant_durations_and_icons() {
    assert_eq!(NoticeVariant::Info.default_duration(), Duration::from_secs(3));
    assert_eq!(NoticeVariant::Warning.default_duration(), Duration::from_secs(4));
    assert_eq!(NoticeVariant::Error.default_duration(), Duration::from_secs(5));

    assert_eq!(NoticeVariant::Success.icon(), "✓");
    assert_eq!(NoticeVariant::Error.icon(), "✗");
    assert_eq!(NoticeVariant::Info.icon(), "ℹ");
    assert_eq!(NoticeVariant::Warning.icon(), "⚠");
}

#[test]
fn test_center_assigns_ids_and_removes() {
    let mut center = NoticeCenter::new();
    let first = center.push(Notice::info("One"));
    let second = center.push(Notice::error("Two"));
    assert_ne!(first, second);
    assert_eq!(center.count(), 2);

    center.remove(first);
    assert_eq!(center.count(), 1);
    assert_eq!(center.latest().map(|n| n.id), Some(second));

    center.clear();
    assert_eq!(center.count(), 0);
}

#[test]
fn test_notices_expire_by_variant() {
    let mut center = NoticeCenter::new();
    center.push(Notice::info("Short"));
    center.push(Notice::warning("Medium"));
    center.push(Notice::error("Long"));

    center.advance(Duration::from_secs(3));
    let left: Vec<&str> = center.notices().iter().map(|n| n.message.as_str()).collect();
    assert_eq!(left, vec!["Medium", "Long"]);

    center.advance(Duration::from_secs(1));
    assert_eq!(center.count(), 1);

    center.advance(Duration::from_secs(1));
    assert_eq!(center.count(), 0);
}

#[test]
fn test_not_immediately_expired() {
    let notice = Notice::success("Fresh");
    assert!(!notice.is_expired());
    assert_eq!(notice.remaining_percent(), 1.0);
}

//! Unit tests for perf module.

use course_canvas::perf::{OperationStats, PerfMonitor, ScopedTimer, measure};

#[test]
fn test_operation_stats_recording() {
    let mut monitor = PerfMonitor::new();
    monitor.record_operation("update_connections", 5.0);
    monitor.record_operation("update_connections", 10.0);
    monitor.record_operation("update_connections", 15.0);

    let stats = monitor.get_operation_stats("update_connections").unwrap();
    assert!((stats.average() - 10.0).abs() < 0.001);
    assert_eq!(stats.count(), 3);
    assert_eq!(stats.min_ms(), 5.0);
    assert_eq!(stats.max_ms(), 15.0);
}

#[test]
fn test_stats_keep_a_rolling_window() {
    let mut stats = OperationStats::default();
    for _ in 0..100 {
        stats.record(1.0);
    }
    for _ in 0..100 {
        stats.record(3.0);
    }
    assert_eq!(stats.count(), 200);
    assert!((stats.average() - 3.0).abs() < 0.001);
    assert_eq!(stats.p95(), 3.0);
}

#[test]
fn test_empty_stats() {
    let stats = OperationStats::default();
    assert_eq!(stats.average(), 0.0);
    assert_eq!(stats.p95(), 0.0);
    assert_eq!(stats.min_ms(), 0.0);
}

#[test]
fn test_slowest_orders_by_average() {
    let mut monitor = PerfMonitor::new();
    monitor.record_operation("fast", 1.0);
    monitor.record_operation("slow", 40.0);
    monitor.record_operation("medium", 8.0);

    let names: Vec<&str> = monitor.slowest(2).iter().map(|(name, _)| *name).collect();
    assert_eq!(names, vec!["slow", "medium"]);

    monitor.log_summary_if_slow();
    monitor.reset();
    assert!(monitor.get_operation_stats("slow").is_none());
}

#[test]
fn test_time_records_and_returns() {
    let mut monitor = PerfMonitor::new();
    let value = monitor.time("sum", || (1..=10).sum::<u32>());
    assert_eq!(value, 55);
    assert_eq!(monitor.get_operation_stats("sum").unwrap().count(), 1);

    let (result, elapsed_ms) = measure(|| "done");
    assert_eq!(result, "done");
    assert!(elapsed_ms >= 0.0);
}

#[test]
fn test_scoped_timer() {
    // High threshold, nothing is logged on drop
    let timer = ScopedTimer::new("test_op", 1000.0);
    assert_eq!(timer.name(), "test_op");
    assert!(timer.elapsed_ms() >= 0.0);
}

//! Unit tests for the course canvas.

mod config_tests;
mod hierarchy_tests;
mod notifications_tests;
mod perf_tests;
mod tasks_tests;

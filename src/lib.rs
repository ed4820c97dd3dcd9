//! Headless node-graph canvas for assembling course outlines.
//!
//! The [`engine::CanvasEngine`] owns nodes, connections, viewport and pointer
//! state and drives a pluggable rendering surface. [`studio::CourseStudio`]
//! layers simulated course generation, suggestions, notices and export on top.

pub mod config;
pub mod connections;
pub mod constants;
pub mod course;
pub mod engine;
pub mod error;
pub mod export;
pub mod hierarchy;
pub mod input;
pub mod notifications;
pub mod perf;
pub mod spatial_index;
pub mod studio;
pub mod surface;
pub mod tasks;
pub mod types;
pub mod viewport;

pub use engine::{CanvasEngine, CanvasSnapshot};
pub use error::{CanvasError, CanvasResult};
pub use studio::CourseStudio;
pub use types::{Node, NodeId, NodeOptions, NodeType, Point, Rect, Size};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Install a `tracing` subscriber honouring `RUST_LOG`, defaulting to
/// `course_canvas=info`. Safe to call more than once.
pub fn init_logging() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "course_canvas=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

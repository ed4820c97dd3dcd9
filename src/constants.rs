//! Engine-wide constants.
//!
//! Centralizes magic numbers for geometry, interaction and timing. Most of
//! these are the defaults behind [`crate::config::EngineConfig`].

// ============================================================================
// Zoom & Pan
// ============================================================================

/// Minimum zoom level
pub const MIN_SCALE: f64 = 0.1;

/// Maximum zoom level
pub const MAX_SCALE: f64 = 3.0;

/// Default zoom level
pub const DEFAULT_SCALE: f64 = 1.0;

/// Scale factor applied when the wheel scrolls up/toward the user
pub const WHEEL_ZOOM_IN: f64 = 1.1;

/// Scale factor applied when the wheel scrolls down/away from the user
pub const WHEEL_ZOOM_OUT: f64 = 0.9;

/// Total margin (both sides) left around the content by fit-to-screen
pub const FIT_PADDING: f64 = 100.0;

// ============================================================================
// Input Handling
// ============================================================================

/// Pointer travel (screen px, either axis) a press must exceed to become a drag
pub const DRAG_THRESHOLD: f64 = 5.0;

// ============================================================================
// Node Defaults
// ============================================================================

/// Default node box size when the factory options omit one
pub const DEFAULT_NODE_SIZE: (f64, f64) = (200.0, 80.0);

/// Offset applied to both axes when duplicating a node
pub const DUPLICATE_OFFSET: f64 = 50.0;

/// Suffix appended to a duplicated node's title
pub const COPY_SUFFIX: &str = " (copy)";

// ============================================================================
// Animation & Timing
// ============================================================================

/// How long a freshly added node keeps its `growing` marker
pub const GROW_ANIMATION_MS: u64 = 600;

/// How long a freshly drawn connection keeps its `drawing` marker
pub const CONNECTION_ANIMATION_MS: u64 = 800;

/// Simulated course generation latency
pub const GENERATION_DELAY_MS: u64 = 3000;

/// Delay between building a course and fitting it to the screen
pub const FIT_AFTER_BUILD_MS: u64 = 500;

/// Simulated latency of an AI enhance request
pub const ENHANCE_DELAY_MS: u64 = 2000;

/// Delay before an applied suggestion starts adding nodes
pub const SUGGESTION_DELAY_MS: u64 = 1500;

/// Stagger between interaction nodes added by a suggestion
pub const INTERACTION_STAGGER_MS: u64 = 300;

/// Stagger between case study nodes added by a suggestion
pub const CASE_STUDY_STAGGER_MS: u64 = 500;

// ============================================================================
// Course Layout
// ============================================================================

/// Root node box: position and size
pub const ROOT_ORIGIN: (f64, f64) = (400.0, 100.0);
pub const ROOT_SIZE: (f64, f64) = (300.0, 80.0);

/// First chapter position; chapters step right by `CHAPTER_SPACING_X`
pub const CHAPTER_ORIGIN: (f64, f64) = (200.0, 250.0);
pub const CHAPTER_SPACING_X: f64 = 300.0;
pub const CHAPTER_SIZE: (f64, f64) = (250.0, 70.0);

/// Topics start left of and below their chapter, then step diagonally
pub const TOPIC_OFFSET: (f64, f64) = (-50.0, 150.0);
pub const TOPIC_STEP: (f64, f64) = (50.0, 80.0);
pub const TOPIC_SIZE: (f64, f64) = (200.0, 60.0);

/// Nodes added by suggestions
pub const SUGGESTION_NODE_SIZE: (f64, f64) = (160.0, 60.0);
pub const INTERACTION_OFFSET: (f64, f64) = (250.0, 50.0);
pub const CASE_STUDY_OFFSET: (f64, f64) = (180.0, 80.0);

/// Number of topics that receive a case study
pub const CASE_STUDY_COUNT: usize = 2;

// ============================================================================
// Export
// ============================================================================

/// Padding around the content in exported SVG diagrams
pub const SVG_PADDING: f64 = 50.0;

/// Topic count above which the review flags the course as dense
pub const DENSE_TOPIC_COUNT: usize = 12;

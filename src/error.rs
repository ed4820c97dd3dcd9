//! Error types for canvas operations
//!
//! Structural violations are rejected at the API boundary and never leave the
//! node or connection collections partially mutated.

use crate::types::NodeId;
use thiserror::Error;

/// Errors returned by engine and export operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CanvasError {
    /// The root node can never be deleted
    #[error("the root node cannot be deleted")]
    RootDeletion,

    /// `add_node` was given a parent that is not on the canvas
    #[error("parent node {0} is not on the canvas")]
    InvalidParent(NodeId),

    /// Referenced node is not on the canvas
    #[error("node {0} is not on the canvas")]
    NodeNotFound(NodeId),

    /// A node with this id is already on the canvas
    #[error("node {0} is already on the canvas")]
    DuplicateNode(NodeId),

    /// The canvas already holds a root node
    #[error("the canvas already has a root node")]
    DuplicateRoot,

    /// Node type outside the closed root/chapter/topic set
    #[error("unknown node type: {0}")]
    InvalidNodeType(String),

    /// Operation needs at least one node
    #[error("nothing to export: the canvas is empty")]
    EmptyCanvas,

    /// Operation needs a root node
    #[error("the canvas has no root node")]
    MissingRoot,
}

/// Result type alias for canvas operations
pub type CanvasResult<T> = Result<T, CanvasError>;

/// Errors that can occur while reading engine configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// JSON parsing error from serde_json
    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Values parsed but are out of range
    #[error("invalid config: {0}")]
    Invalid(String),
}

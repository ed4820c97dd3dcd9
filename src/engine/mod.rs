//! Canvas engine - owner of the node tree, connections and viewport.
//!
//! This module is organized into several submodules:
//! - `state` - The `CanvasEngine` struct, hooks and read-only queries
//! - `lifecycle` - Node creation, insertion, deletion, duplication and clearing
//! - `editing` - Selection and in-place node edits
//! - `rendering` - Connection drawing and cosmetic animation timers
//!
//! Pointer handling lives in [`crate::input`] as further `impl CanvasEngine`
//! blocks, the same way the viewport operations do.

mod editing;
mod lifecycle;
mod rendering;
mod state;

pub use state::{CanvasEngine, CanvasSnapshot, NodeHooks};

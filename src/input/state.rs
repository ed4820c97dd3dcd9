//! Input state machine - unified state management for pointer gestures.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> PendingNodeDrag          (primary press on a node)
//! Idle -> PanningCanvas            (primary or middle press on empty canvas)
//! PendingNodeDrag -> DraggingNode  (pointer travels past the drag threshold)
//!
//! Any -> Idle                      (pointer up, or Escape to cancel)
//! ```

use crate::types::{NodeId, Point};

/// Unified input state for all pointer interactions.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum InputState {
    /// No active gesture
    #[default]
    Idle,

    /// Pressed on a node, not yet moved far enough to count as a drag
    PendingNodeDrag {
        node: NodeId,
        /// Client position of the press
        press: Point,
        /// Offset from the node's top-left (client space) to the pointer
        drag_offset: Point,
        /// Node position when the press started
        origin: Point,
        click_count: u32,
    },

    /// Dragging a node
    DraggingNode {
        node: NodeId,
        drag_offset: Point,
        /// Node position before the drag, restored on cancel
        origin: Point,
    },

    /// Panning the canvas
    PanningCanvas {
        /// Client position of the press
        press: Point,
        /// Viewport translation when the press started
        translate_start: Point,
    },
}

impl InputState {
    /// Returns true if the state is Idle
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true while a press on a node has not yet become a drag
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::PendingNodeDrag { .. })
    }

    /// Returns true if currently dragging a node
    pub fn is_dragging_node(&self) -> bool {
        matches!(self, Self::DraggingNode { .. })
    }

    /// Returns true if currently panning the canvas
    pub fn is_panning(&self) -> bool {
        matches!(self, Self::PanningCanvas { .. })
    }

    /// Node the current gesture started on, if any
    pub fn node_id(&self) -> Option<&NodeId> {
        match self {
            Self::PendingNodeDrag { node, .. } | Self::DraggingNode { node, .. } => Some(node),
            _ => None,
        }
    }

    /// Node being dragged, if the threshold has been crossed
    pub fn dragged_node(&self) -> Option<&NodeId> {
        match self {
            Self::DraggingNode { node, .. } => Some(node),
            _ => None,
        }
    }

    /// Reset to Idle state
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    /// Promote a pending press to a drag. No-op in any other state.
    pub fn start_dragging(&mut self) {
        if let Self::PendingNodeDrag {
            node,
            drag_offset,
            origin,
            ..
        } = self
        {
            *self = Self::DraggingNode {
                node: node.clone(),
                drag_offset: *drag_offset,
                origin: *origin,
            };
        }
    }
}

//! Pointer move handling - drag threshold, node dragging, canvas panning.
//!
//! ## Performance Notes
//!
//! Pointer move fires many times per second during a gesture. A node drag
//! only redraws the connections touching the dragged node, never the full set.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use crate::engine::CanvasEngine;
use crate::input::InputState;
use crate::input::coords::CoordinateConverter;
use crate::profile_scope;
use crate::surface::{ContainerSurface, ContentSurface, NodeMarker};
use crate::types::{NodeId, Point};
use tracing::debug;

impl<C: ContentSurface, V: ContainerSurface> CanvasEngine<C, V> {
    /// Handle pointer movement to a client position.
    pub fn handle_pointer_move(&mut self, position: Point) {
        profile_scope!("handle_pointer_move");

        match self.input_state.clone() {
            InputState::Idle => {}
            InputState::PendingNodeDrag {
                node,
                press,
                drag_offset,
                ..
            } => {
                let threshold = self.config.drag_threshold;
                let dx = (position.x - press.x).abs();
                let dy = (position.y - press.y).abs();
                if dx > threshold || dy > threshold {
                    debug!(node = %node, "Drag started");
                    self.content.set_node_marker(&node, NodeMarker::Dragging, true);
                    self.input_state.start_dragging();
                    self.drag_node_to(&node, position, drag_offset);
                }
            }
            InputState::DraggingNode {
                node, drag_offset, ..
            } => {
                self.drag_node_to(&node, position, drag_offset);
            }
            InputState::PanningCanvas {
                press,
                translate_start,
            } => {
                self.viewport.translate = translate_start + (position - press);
                self.sync_transform();
            }
        }
    }

    fn drag_node_to(&mut self, id: &NodeId, position: Point, drag_offset: Point) {
        profile_scope!("node_drag");

        let ctx = self.coordinate_context();
        let canvas = CoordinateConverter::client_to_canvas(position - drag_offset, &ctx);

        let Some(node) = self.node_mut(id) else {
            // Deleted mid-gesture
            self.input_state.reset();
            return;
        };
        node.position = canvas;
        let node = node.clone();

        self.spatial.update(id, node.rect());
        self.content.update_node(&node);
        self.update_node_connections(id);
    }
}

//! Pointer up handling - click notification and gesture end.

use crate::engine::CanvasEngine;
use crate::input::InputState;
use crate::surface::{ContainerSurface, ContentSurface, NodeMarker};
use crate::types::NodeId;
use tracing::debug;

impl<C: ContentSurface, V: ContainerSurface> CanvasEngine<C, V> {
    /// Finish the current gesture.
    ///
    /// A press that never crossed the drag threshold is reported as a click
    /// (or a double-click for the second press of a pair) and leaves the node
    /// where it was.
    pub fn handle_pointer_up(&mut self) {
        match std::mem::take(&mut self.input_state) {
            InputState::Idle => {}
            InputState::PendingNodeDrag {
                node, click_count, ..
            } => {
                if click_count >= 2 {
                    self.notify_double_click(&node);
                } else {
                    self.notify_click(&node);
                }
            }
            InputState::DraggingNode { node, .. } => {
                self.content.set_node_marker(&node, NodeMarker::Dragging, false);
                if let Some(moved) = self.node(&node) {
                    debug!(
                        node = %node,
                        x = moved.position.x,
                        y = moved.position.y,
                        "Drag finished"
                    );
                }
            }
            InputState::PanningCanvas { .. } => {
                self.container.set_panning(false);
            }
        }
    }

    fn notify_click(&mut self, id: &NodeId) {
        let Some(node) = self.nodes.iter().find(|n| &n.id == id) else {
            return;
        };
        if let Some(hook) = self.hooks.on_click.as_mut() {
            hook(node);
        }
    }

    /// Falls back to the click hook when no double-click hook is set.
    fn notify_double_click(&mut self, id: &NodeId) {
        let Some(node) = self.nodes.iter().find(|n| &n.id == id) else {
            return;
        };
        if let Some(hook) = self.hooks.on_double_click.as_mut() {
            hook(node);
        } else if let Some(hook) = self.hooks.on_click.as_mut() {
            hook(node);
        }
    }
}

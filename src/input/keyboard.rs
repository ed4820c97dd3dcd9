//! Keyboard handling. Escape aborts the active gesture.

use crate::engine::CanvasEngine;
use crate::input::{InputState, Key};
use crate::surface::{ContainerSurface, ContentSurface, NodeMarker};
use tracing::debug;

impl<C: ContentSurface, V: ContainerSurface> CanvasEngine<C, V> {
    /// Returns true if the key was consumed.
    pub fn handle_key_down(&mut self, key: &Key) -> bool {
        match key {
            Key::Escape => self.cancel_gesture(),
            Key::Other(_) => false,
        }
    }

    /// Abort the active gesture, restoring the pre-gesture node position or
    /// viewport translation. No click is reported. Returns false when idle.
    pub fn cancel_gesture(&mut self) -> bool {
        match std::mem::take(&mut self.input_state) {
            InputState::Idle => false,
            InputState::PendingNodeDrag { .. } => true,
            InputState::DraggingNode { node, origin, .. } => {
                debug!(node = %node, "Drag cancelled");
                self.content.set_node_marker(&node, NodeMarker::Dragging, false);
                // The node may have been deleted mid-drag
                let _ = self.move_node(&node, origin);
                true
            }
            InputState::PanningCanvas {
                translate_start, ..
            } => {
                self.viewport.translate = translate_start;
                self.sync_transform();
                self.container.set_panning(false);
                true
            }
        }
    }
}

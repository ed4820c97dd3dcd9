//! Pointer down handling - selection and gesture start.

use crate::engine::CanvasEngine;
use crate::input::coords::{CoordinateContext, CoordinateConverter};
use crate::input::{InputState, PointerButton, PointerEvent};
use crate::profile_scope;
use crate::surface::{ContainerSurface, ContentSurface};
use crate::types::NodeId;
use tracing::trace;

impl<C: ContentSurface, V: ContainerSurface> CanvasEngine<C, V> {
    pub(crate) fn coordinate_context(&self) -> CoordinateContext<'_> {
        CoordinateContext::new(self.container.origin(), &self.viewport)
    }

    /// Handle a pointer press at client coordinates.
    ///
    /// - Primary press on a node selects it and arms a pending drag.
    /// - Secondary press on a node selects it and fires the right-click hook.
    /// - Primary or middle press on empty canvas starts panning.
    ///
    /// Presses arriving while a gesture is already active are ignored.
    pub fn handle_pointer_down(&mut self, event: &PointerEvent) {
        profile_scope!("handle_pointer_down");

        if !self.input_state.is_idle() {
            return;
        }

        let ctx = self.coordinate_context();
        let canvas = CoordinateConverter::client_to_canvas(event.position, &ctx);
        let hit = self.node_at(canvas).cloned();

        match (event.button, hit) {
            (PointerButton::Primary, Some(id)) => self.press_node(&id, event),
            (PointerButton::Secondary, Some(id)) => {
                // Selection cannot fail: the id came from the hit test
                let _ = self.select_node(Some(&id));
                self.notify_right_click(&id, event);
            }
            (PointerButton::Middle, Some(_)) | (PointerButton::Secondary, None) => {}
            (PointerButton::Primary | PointerButton::Middle, None) => {
                trace!(x = event.position.x, y = event.position.y, "Start panning");
                self.input_state = InputState::PanningCanvas {
                    press: event.position,
                    translate_start: self.viewport.translate,
                };
                self.container.set_panning(true);
            }
        }
    }

    fn press_node(&mut self, id: &NodeId, event: &PointerEvent) {
        let Some(origin) = self.node(id).map(|n| n.position) else {
            return;
        };
        let _ = self.select_node(Some(id));

        let ctx = self.coordinate_context();
        let node_client = CoordinateConverter::canvas_to_client(origin, &ctx);
        self.input_state = InputState::PendingNodeDrag {
            node: id.clone(),
            press: event.position,
            drag_offset: event.position - node_client,
            origin,
            click_count: event.click_count,
        };
    }

    fn notify_right_click(&mut self, id: &NodeId, event: &PointerEvent) {
        let Some(node) = self.nodes.iter().find(|n| &n.id == id) else {
            return;
        };
        if let Some(hook) = self.hooks.on_right_click.as_mut() {
            hook(node, event);
        }
    }
}

//! Viewport operations - zoom, pan, reset, fit-to-screen and wheel input.

use crate::engine::CanvasEngine;
use crate::input::WheelEvent;
use crate::input::coords::CoordinateConverter;
use crate::surface::{ContainerSurface, ContentSurface};
use crate::types::Point;
use tracing::debug;

impl<C: ContentSurface, V: ContainerSurface> CanvasEngine<C, V> {
    /// Multiply the scale by `factor`, clamped to the configured bounds.
    ///
    /// With a `center` (client coordinates) the point under it stays fixed,
    /// otherwise the canvas scales around the current origin.
    pub fn zoom(&mut self, factor: f64, center: Option<Point>) {
        let ctx = self.coordinate_context();
        let local = center.map(|c| CoordinateConverter::client_to_local(c, &ctx));
        if self.viewport.zoom(factor, local) {
            self.sync_transform();
        }
    }

    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.viewport.pan(dx, dy);
        self.sync_transform();
    }

    pub fn reset_view(&mut self) {
        self.viewport.reset();
        self.sync_transform();
    }

    /// Fit every node into the container. Returns false on an empty canvas.
    pub fn fit_to_screen(&mut self) -> bool {
        let Some(bounds) = self.bounds() else {
            return false;
        };

        let container = self.container.client_size();
        self.viewport.fit(bounds, container, self.config.fit_padding);
        debug!(
            scale = self.viewport.scale,
            x = self.viewport.translate.x,
            y = self.viewport.translate.y,
            "Fit to screen"
        );
        self.sync_transform();
        true
    }

    /// Wheel input zooms around the pointer. Does not touch the gesture state.
    pub fn handle_wheel(&mut self, event: &WheelEvent) {
        let factor = if event.delta_y > 0.0 {
            self.config.wheel_zoom_out
        } else {
            self.config.wheel_zoom_in
        };
        self.zoom(factor, Some(event.position));
    }
}

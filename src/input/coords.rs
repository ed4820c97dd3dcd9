//! Coordinate conversion utilities for canvas interactions.
//!
//! Three spaces are involved: client (host window), container-local (client
//! minus the container origin) and canvas (container-local with the viewport
//! transform inverted).

use crate::types::{Point, Rect, Size};
use crate::viewport::Viewport;

/// Context needed for coordinate conversions
pub struct CoordinateContext<'a> {
    pub container_origin: Point,
    pub viewport: &'a Viewport,
}

impl<'a> CoordinateContext<'a> {
    #[inline]
    pub fn new(container_origin: Point, viewport: &'a Viewport) -> Self {
        Self {
            container_origin,
            viewport,
        }
    }
}

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert a client position to container-local screen space
    #[inline]
    pub fn client_to_local(client: Point, ctx: &CoordinateContext<'_>) -> Point {
        client - ctx.container_origin
    }

    /// Convert a client position to canvas space
    #[inline]
    pub fn client_to_canvas(client: Point, ctx: &CoordinateContext<'_>) -> Point {
        ctx.viewport
            .screen_to_canvas(Self::client_to_local(client, ctx))
    }

    /// Convert a canvas position to client space
    #[inline]
    pub fn canvas_to_client(canvas: Point, ctx: &CoordinateContext<'_>) -> Point {
        ctx.viewport.canvas_to_screen(canvas) + ctx.container_origin
    }

    /// Client-space box of a canvas-space rectangle
    pub fn canvas_rect_to_client(rect: Rect, ctx: &CoordinateContext<'_>) -> Rect {
        let origin = Self::canvas_to_client(rect.origin, ctx);
        let scale = ctx.viewport.scale;
        Rect {
            origin,
            size: Size::new(rect.size.width * scale, rect.size.height * scale),
        }
    }

    /// Convert a delta from screen to canvas (for drag operations)
    #[inline]
    pub fn delta_screen_to_canvas(delta: Point, scale: f64) -> Point {
        Point::new(delta.x / scale, delta.y / scale)
    }
}

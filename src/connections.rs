//! Connection curve geometry.
//!
//! A connection leaves the parent's bottom-center and enters the child's
//! top-center through a quadratic curve whose single control point sits
//! directly below the start, at the vertical midpoint.

use crate::types::{ConnectionKey, Point, Rect};

#[derive(Clone, Debug, PartialEq)]
pub struct ConnectionPath {
    pub key: ConnectionKey,
    pub start: Point,
    pub control: Point,
    pub end: Point,
}

impl ConnectionPath {
    pub fn between(key: ConnectionKey, from: &Rect, to: &Rect) -> Self {
        let start = from.bottom_center();
        let end = to.top_center();
        let mid_y = start.y + (end.y - start.y) / 2.0;

        Self {
            key,
            start,
            control: Point::new(start.x, mid_y),
            end,
        }
    }

    /// SVG path data (`M .. Q ..`).
    pub fn svg_data(&self) -> String {
        format!(
            "M {} {} Q {} {} {} {}",
            self.start.x, self.start.y, self.control.x, self.control.y, self.end.x, self.end.y
        )
    }

    /// Point on the curve at parameter `t` in `[0, 1]`.
    pub fn point_at(&self, t: f64) -> Point {
        let t = t.clamp(0.0, 1.0);
        let u = 1.0 - t;
        Point::new(
            u * u * self.start.x + 2.0 * u * t * self.control.x + t * t * self.end.x,
            u * u * self.start.y + 2.0 * u * t * self.control.y + t * t * self.end.y,
        )
    }
}

//! Viewport transform - pan/zoom state mapping canvas space to screen space.
//!
//! `screen = canvas * scale + translate`, where "screen" is relative to the
//! container's top-left corner.

use crate::constants::{DEFAULT_SCALE, MAX_SCALE, MIN_SCALE};
use crate::types::{Point, Rect, Size};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub translate: Point,
    pub scale: f64,
    min_scale: f64,
    max_scale: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(MIN_SCALE, MAX_SCALE)
    }
}

impl Viewport {
    pub fn new(min_scale: f64, max_scale: f64) -> Self {
        Self {
            translate: Point::default(),
            scale: DEFAULT_SCALE,
            min_scale,
            max_scale,
        }
    }

    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }

    fn clamp_scale(&self, scale: f64) -> f64 {
        scale.clamp(self.min_scale, self.max_scale)
    }

    /// Multiply the scale by `factor`, keeping `center` (container-local)
    /// visually fixed when given. Returns true if the scale changed.
    pub fn zoom(&mut self, factor: f64, center: Option<Point>) -> bool {
        let old_scale = self.scale;
        let new_scale = self.clamp_scale(old_scale * factor);
        if (new_scale - old_scale).abs() < f64::EPSILON {
            return false;
        }

        if let Some(center) = center {
            let change = new_scale - old_scale;
            self.translate.x -= (center.x - self.translate.x) * change / old_scale;
            self.translate.y -= (center.y - self.translate.y) * change / old_scale;
        }
        self.scale = new_scale;
        true
    }

    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.translate.x += dx;
        self.translate.y += dy;
    }

    pub fn reset(&mut self) {
        self.translate = Point::default();
        self.scale = DEFAULT_SCALE;
    }

    /// Fit `content` into `container` leaving `padding` in total around it.
    ///
    /// Never zooms past 100%; the result is still clamped to the scale bounds.
    pub fn fit(&mut self, content: Rect, container: Size, padding: f64) {
        let scale_x = (container.width - padding) / content.size.width;
        let scale_y = (container.height - padding) / content.size.height;
        let scale = self.clamp_scale(scale_x.min(scale_y).min(1.0));

        self.scale = scale;
        self.translate.x =
            (container.width - content.size.width * scale) / 2.0 - content.min_x() * scale;
        self.translate.y =
            (container.height - content.size.height * scale) / 2.0 - content.min_y() * scale;
    }

    /// Container-local screen point to canvas point.
    #[inline]
    pub fn screen_to_canvas(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.translate.x) / self.scale,
            (screen.y - self.translate.y) / self.scale,
        )
    }

    /// Canvas point to container-local screen point.
    #[inline]
    pub fn canvas_to_screen(&self, canvas: Point) -> Point {
        Point::new(
            canvas.x * self.scale + self.translate.x,
            canvas.y * self.scale + self.translate.y,
        )
    }

    /// CSS transform string for the content surface.
    pub fn css_transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.translate.x, self.translate.y, self.scale
        )
    }
}

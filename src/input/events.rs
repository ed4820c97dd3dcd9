//! Input events as delivered by the host. Positions are client coordinates.

use crate::types::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub position: Point,
    pub button: PointerButton,
    /// 1 for a single press, 2 for the second press of a double-click
    pub click_count: u32,
}

impl PointerEvent {
    pub fn new(position: Point, button: PointerButton) -> Self {
        Self {
            position,
            button,
            click_count: 1,
        }
    }

    pub fn primary(x: f64, y: f64) -> Self {
        Self::new(Point::new(x, y), PointerButton::Primary)
    }

    pub fn secondary(x: f64, y: f64) -> Self {
        Self::new(Point::new(x, y), PointerButton::Secondary)
    }

    pub fn middle(x: f64, y: f64) -> Self {
        Self::new(Point::new(x, y), PointerButton::Middle)
    }

    pub fn with_click_count(mut self, click_count: u32) -> Self {
        self.click_count = click_count;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelEvent {
    pub position: Point,
    /// Positive when scrolling down/away from the user
    pub delta_y: f64,
}

impl WheelEvent {
    pub fn new(x: f64, y: f64, delta_y: f64) -> Self {
        Self {
            position: Point::new(x, y),
            delta_y,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other(String),
}

//! Pointer, wheel and keyboard input handling for the canvas.
//!
//! ## Architecture
//!
//! The input system uses an explicit state machine (`InputState`) to track
//! the current interaction mode. A press on a node does not start a drag
//! right away: the gesture stays pending until the pointer travels past the
//! drag threshold, so a plain click is never reported as a zero-distance move.
//!
//! ## Modules
//!
//! - `events` - Host-neutral pointer, wheel and key event types
//! - `state` - Input state machine enum and helper methods
//! - `coords` - Client/container/canvas coordinate conversion
//! - `mouse_down` - Pointer down handling (selection, gesture start)
//! - `drag` - Pointer move handling (threshold, node drag, pan)
//! - `mouse_up` - Pointer up handling (click notification, gesture end)
//! - `transform` - Viewport operations (zoom, pan, reset, fit, wheel)
//! - `keyboard` - Escape cancellation of an in-progress gesture

pub mod coords;
mod drag;
mod events;
mod keyboard;
mod mouse_down;
mod mouse_up;
mod state;
mod transform;

pub use events::{Key, PointerButton, PointerEvent, WheelEvent};
pub use state::InputState;

//! Render-agnostic interaction core for on-screen game controls
//!
//! Two leaf controls live here:
//!
//! 1. [`action_button`] - forwards completed taps as discrete presses
//! 2. [`drag_stick`] - turns drag deltas into a normalized 2D coordinate
//!
//! Supporting modules:
//!
//! - [`geometry`] - track bounds, knob points, deltas and stick positions
//! - [`listener`] - listener traits and the weak handle controls report through
//!
//! # Data Flow
//!
//! ```text
//! Host gestures ──► Control core ──► Listener (weak)
//!  (tap / drag)     (state + math)    on_pressed / on_position_changed / on_released
//! ```
//!
//! The core never draws anything. Toolkit adapters in [`crate::ui`] translate
//! their input into [`TapGesture`] and [`DragGesture`] values and paint from
//! the state exposed here.

pub mod action_button;
pub mod drag_stick;
pub mod geometry;
pub mod listener;

pub use action_button::{ActionButton, TapGesture};
pub use drag_stick::{DragGesture, DragStick, StickEvent, StickPhase};
pub use geometry::{DragDelta, KnobPoint, StickPosition, TrackBounds};
pub use listener::{ActionButtonOutput, DragStickOutput, Listener};

//! On-screen touch controls for games: a draggable analog stick and a tap
//! action button.
//!
//! ```text
//! ControlFactory ──► Control::Joystick(JoystickView) ──► DragStick    ──► DragStickOutput
//!                └─► Control::Button(ActionButtonView) ─► ActionButton ──► ActionButtonOutput
//! ```
//!
//! [`controls`] holds the toolkit-independent logic, [`ui`] the egui widgets
//! and [`config`] the settings file used by the demo binary.

pub mod config;
pub mod controls;
pub mod ui;

pub use controls::{
    ActionButton, ActionButtonOutput, DragDelta, DragGesture, DragStick, DragStickOutput,
    Listener, StickEvent, StickPhase, StickPosition, TapGesture, TrackBounds,
};
pub use ui::{ActionButtonView, Control, ControlFactory, ControlKind, JoystickView};

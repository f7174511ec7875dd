//! # egui Adapter Layer
//!
//! Thin widgets that put the interaction core from [`crate::controls`] on
//! screen with egui.
//!
//! ## Why This Module Exists
//!
//! The controls themselves only know about gestures, deltas and listeners.
//! Something has to:
//! - allocate screen space and paint the supplied images
//! - read pointer and touch input from egui every frame
//! - translate that input into [`crate::controls::TapGesture`] and
//!   [`crate::controls::DragGesture`] values
//!
//! Each widget does exactly that and nothing more, so swapping egui for a
//! different toolkit means rewriting this module only.
//!
//! ## Immediate Mode Integration
//!
//! egui rebuilds the UI every frame. The views are therefore long-lived
//! values owned by the host application and passed to `ui.add(&mut view)`
//! each frame. All interaction state lives in the view, never in egui memory.
//!
//! ## Components
//! - [`factory`]: [`ControlFactory`] and the [`ControlKind`] description
//! - [`joystick_view`]: [`JoystickView`] for the drag stick
//! - [`button_view`]: [`ActionButtonView`] for the action button
//! - [`common`]: shared colors, frames and [`StickStyle`]

pub mod button_view;
pub mod common;
pub mod factory;
#[cfg(test)]
mod headless;
pub mod joystick_view;

pub use button_view::ActionButtonView;
pub use common::{StickStyle, UiColors};
pub use factory::{Control, ControlFactory, ControlKind};
pub use joystick_view::{DragFrame, JoystickView, StickLayout};

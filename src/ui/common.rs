//! # UI Common Components and Utilities
//!
//! Shared styling for the egui adapters and the demo application.
//!
//! ## Key Abstractions
//!
//! ### Stick Styling
//! [`StickStyle`] controls how opaque a joystick is drawn while resting and
//! while the knob is held. The values are plain data so they can be loaded
//! from the demo configuration file.
//!
//! ### Theme Colors
//! [`UiColors`] is a small dark palette used by the demo panels and as the
//! tint baseline for control images.

use eframe::egui::{Color32, Frame, Stroke};
use serde::{Deserialize, Serialize};

/// Opacity of a joystick in its two interaction phases.
///
/// ## Usage Context
/// Read by [`super::joystick_view::JoystickView`] every frame. Values are in
/// `0.0..=1.0` and multiply the image tint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StickStyle {
    /// Opacity while nobody touches the knob
    pub alpha_idle: f32,
    /// Opacity while the knob is being dragged
    pub alpha_active: f32,
}

impl Default for StickStyle {
    fn default() -> Self {
        Self {
            alpha_idle: 0.6,
            alpha_active: 1.0,
        }
    }
}

impl StickStyle {
    /// Image tint for the given phase.
    pub fn tint(&self, dragging: bool) -> Color32 {
        let alpha = if dragging {
            self.alpha_active
        } else {
            self.alpha_idle
        };
        Color32::WHITE.gamma_multiply(alpha.clamp(0.0, 1.0))
    }
}

/// Creates a styled frame with consistent visual parameters.
///
/// # Parameters
/// - `bg_color`: Background color for the frame interior
/// - `border_color`: Color for the frame border
pub fn create_frame(bg_color: Color32, border_color: Color32) -> Frame {
    Frame::new()
        .stroke(Stroke::new(1.0, border_color))
        .fill(bg_color)
        .inner_margin(4)
        .outer_margin(2)
}

/// Dark palette shared by the demo panels.
pub struct UiColors;

impl UiColors {
    /// Primary background color for main content areas (RGB: 30, 30, 30)
    pub const MAIN_BG: Color32 = Color32::from_rgb(30, 30, 30);

    /// Deepest background color for log areas (RGB: 20, 20, 20)
    pub const EXTREME_BG: Color32 = Color32::from_rgb(20, 20, 20);

    /// Border color for component separation (RGB: 60, 60, 60)
    pub const BORDER: Color32 = Color32::from_rgb(60, 60, 60);

    /// Highlight for live listener state (RGB: 50, 200, 20) - Green
    pub const ACTIVE: Color32 = Color32::from_rgb(50, 200, 20);

    /// Highlight for dropped listener state (RGB: 200, 50, 20) - Red
    pub const INACTIVE: Color32 = Color32::from_rgb(200, 50, 20);
}

/// Darkens an image tint while a control is held down.
pub(crate) fn pressed_tint(base: Color32) -> Color32 {
    base.gamma_multiply(0.7)
}

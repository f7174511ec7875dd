//! # Control Factory
//!
//! Builds ready-to-show controls from a [`ControlKind`] description.
//!
//! ## Design Rationale
//! The description is a sum type with one variant per control, and
//! [`ControlFactory::create`] matches on it exhaustively. Adding a control
//! means adding a variant, and the compiler points at every place that has
//! to learn about it. Construction never fails: inputs are taken as given.

use eframe::egui::{self, ImageSource, Response, Ui};
use tracing::debug;

use super::button_view::ActionButtonView;
use super::joystick_view::JoystickView;
use crate::controls::{ActionButtonOutput, DragStickOutput, Listener};

/// Control to build, with everything it needs.
pub enum ControlKind {
    /// Analog stick. The knob is grabbed and dragged; every accepted move
    /// reports a new coordinate.
    Joystick {
        /// Image drawn for the draggable knob
        knob_image: ImageSource<'static>,
        /// Image drawn for the track behind the knob
        track_image: ImageSource<'static>,
        /// Side length of the square track
        width: f32,
        output: Listener<dyn DragStickOutput>,
    },
    /// Single action button.
    Button {
        image: ImageSource<'static>,
        output: Listener<dyn ActionButtonOutput>,
    },
}

/// A control produced by [`ControlFactory`].
#[derive(Debug)]
pub enum Control {
    Joystick(JoystickView),
    Button(ActionButtonView),
}

impl Control {
    pub fn as_joystick(&self) -> Option<&JoystickView> {
        match self {
            Control::Joystick(view) => Some(view),
            Control::Button(_) => None,
        }
    }

    pub fn as_joystick_mut(&mut self) -> Option<&mut JoystickView> {
        match self {
            Control::Joystick(view) => Some(view),
            Control::Button(_) => None,
        }
    }

    pub fn as_button(&self) -> Option<&ActionButtonView> {
        match self {
            Control::Button(view) => Some(view),
            Control::Joystick(_) => None,
        }
    }

    pub fn as_button_mut(&mut self) -> Option<&mut ActionButtonView> {
        match self {
            Control::Button(view) => Some(view),
            Control::Joystick(_) => None,
        }
    }
}

impl egui::Widget for &mut Control {
    fn ui(self, ui: &mut Ui) -> Response {
        match self {
            Control::Joystick(view) => ui.add(view),
            Control::Button(view) => ui.add(view),
        }
    }
}

/// Stateless builder for on-screen controls.
#[derive(Debug, Default, Clone, Copy)]
pub struct ControlFactory;

impl ControlFactory {
    pub fn new() -> Self {
        Self
    }

    pub fn create(&self, kind: ControlKind) -> Control {
        match kind {
            ControlKind::Joystick {
                knob_image,
                track_image,
                width,
                output,
            } => {
                debug!("Factory building joystick, width {}", width);
                Control::Joystick(JoystickView::new(knob_image, track_image, width, output))
            }
            ControlKind::Button { image, output } => {
                debug!("Factory building action button");
                Control::Button(ActionButtonView::new(image, output))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::{StickPhase, StickPosition};
    use egui::load::SizedTexture;
    use egui::{TextureId, Vec2};

    fn image() -> ImageSource<'static> {
        ImageSource::Texture(SizedTexture::new(TextureId::Managed(0), Vec2::splat(16.0)))
    }

    #[test]
    fn joystick_kind_builds_centered_square_stick() {
        let control = ControlFactory::new().create(ControlKind::Joystick {
            knob_image: image(),
            track_image: image(),
            width: 140.0,
            output: Listener::detached(),
        });

        let view = control.as_joystick().expect("joystick expected");
        assert!(control.as_button().is_none());
        assert_eq!(view.stick().bounds().width, 140.0);
        assert_eq!(view.stick().bounds().height, 140.0);
        assert_eq!(view.stick().phase(), StickPhase::Idle);
        assert_eq!(view.position(), StickPosition::CENTER);
        assert_eq!(view.layout().knob_diameter, 70.0);
    }

    #[test]
    fn button_kind_builds_button() {
        let mut control = ControlFactory::new().create(ControlKind::Button {
            image: image(),
            output: Listener::detached(),
        });

        assert!(control.as_joystick_mut().is_none());
        assert!(control.as_button_mut().is_some());
    }
}

//! # Joystick View
//!
//! egui adapter around the [`DragStick`] core. The view owns the images and
//! the layout, reads drag input from egui each frame and forwards it to the
//! core as [`DragGesture`] values.
//!
//! ## Layout
//!
//! ```text
//! ┌──────── width ────────┐
//! │        track          │   track: width x width, corner radius = width
//! │     ┌─ width/2 ─┐     │   knob:  width/2 square, corner radius = width/2,
//! │     │   knob    │     │          centered on the knob point
//! │     └───────────┘     │
//! └───────────────────────┘
//! ```
//!
//! Only the knob senses drags. Grabbing the track outside the knob does
//! nothing, the same as a pan recognizer attached to the knob alone.
//!
//! ## Frame Translation
//! egui reports drags as per-frame flags and a per-frame pointer delta. That
//! maps directly onto the delta model the core expects: no absolute
//! translation needs to be read back and reset.

use eframe::egui::{self, CornerRadius, Image, ImageSource, Rect, Response, Sense, Ui, Vec2};
use tracing::trace;

use super::common::StickStyle;
use crate::controls::{
    DragDelta, DragGesture, DragStick, DragStickOutput, KnobPoint, Listener, StickEvent,
    StickPosition, TrackBounds,
};

/// Sizes derived from the requested joystick width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StickLayout {
    pub track_size: Vec2,
    pub knob_diameter: f32,
    pub track_corner_radius: f32,
    pub knob_corner_radius: f32,
}

impl StickLayout {
    pub fn for_width(width: f32) -> Self {
        Self {
            track_size: Vec2::splat(width),
            knob_diameter: width / 2.0,
            track_corner_radius: width,
            knob_corner_radius: width / 2.0,
        }
    }

    /// Screen rect of the knob when the track is drawn at `track_rect`.
    pub fn knob_rect(&self, track_rect: Rect, knob: KnobPoint) -> Rect {
        Rect::from_center_size(
            track_rect.min + egui::vec2(knob.x, knob.y),
            Vec2::splat(self.knob_diameter),
        )
    }
}

/// Drag input observed on the knob during one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragFrame {
    pub started: bool,
    pub delta: Vec2,
    pub stopped: bool,
}

impl DragFrame {
    pub fn from_response(response: &Response) -> Self {
        Self {
            started: response.drag_started(),
            delta: if response.dragged() || response.drag_stopped() {
                response.drag_delta()
            } else {
                Vec2::ZERO
            },
            stopped: response.drag_stopped(),
        }
    }

    /// Gestures in delivery order: start, motion, end.
    ///
    /// Frames without pointer motion produce no `Moved` event.
    pub fn gestures(self) -> impl Iterator<Item = DragGesture> {
        let delta = DragDelta::new(self.delta.x, self.delta.y);
        let began = self.started.then_some(DragGesture::Began);
        let moved = (!delta.is_zero()).then_some(DragGesture::Moved(delta));
        let ended = self.stopped.then_some(DragGesture::Ended);
        [began, moved, ended].into_iter().flatten()
    }
}

/// On-screen analog stick.
#[derive(Debug)]
pub struct JoystickView {
    stick: DragStick,
    knob_image: ImageSource<'static>,
    track_image: ImageSource<'static>,
    layout: StickLayout,
    style: StickStyle,
}

impl JoystickView {
    /// Creates a joystick whose square track is `track_width` points wide.
    pub fn new(
        knob_image: ImageSource<'static>,
        track_image: ImageSource<'static>,
        track_width: f32,
        output: Listener<dyn DragStickOutput>,
    ) -> Self {
        Self {
            stick: DragStick::create(TrackBounds::square(track_width), output),
            knob_image,
            track_image,
            layout: StickLayout::for_width(track_width),
            style: StickStyle::default(),
        }
    }

    pub fn set_style(&mut self, style: StickStyle) {
        self.style = style;
    }

    pub fn stick(&self) -> &DragStick {
        &self.stick
    }

    pub fn layout(&self) -> &StickLayout {
        &self.layout
    }

    pub fn style(&self) -> &StickStyle {
        &self.style
    }

    pub fn position(&self) -> StickPosition {
        self.stick.position()
    }

    /// Forwards one gesture to the core.
    pub fn handle_gesture(&mut self, gesture: DragGesture) -> Option<StickEvent> {
        self.stick.handle(gesture)
    }

    /// Applies everything observed in one frame.
    pub fn apply_frame(&mut self, frame: DragFrame) -> Vec<StickEvent> {
        frame
            .gestures()
            .filter_map(|gesture| self.stick.handle(gesture))
            .collect()
    }

    fn paint(&self, ui: &Ui, track_rect: Rect) {
        let tint = self.style.tint(self.stick.is_dragging());

        Image::new(self.track_image.clone())
            .corner_radius(CornerRadius::from(self.layout.track_corner_radius))
            .tint(tint)
            .paint_at(ui, track_rect);

        let knob_rect = self.layout.knob_rect(track_rect, self.stick.knob());
        Image::new(self.knob_image.clone())
            .corner_radius(CornerRadius::from(self.layout.knob_corner_radius))
            .tint(tint)
            .paint_at(ui, knob_rect);
    }
}

impl egui::Widget for &mut JoystickView {
    fn ui(self, ui: &mut Ui) -> Response {
        let (track_rect, track_response) =
            ui.allocate_exact_size(self.layout.track_size, Sense::hover());

        let knob_rect = self.layout.knob_rect(track_rect, self.stick.knob());
        let knob_response = ui.interact(knob_rect, track_response.id.with("knob"), Sense::drag());

        let frame = DragFrame::from_response(&knob_response);
        for event in self.apply_frame(frame) {
            trace!("Joystick view event: {:?}", event);
        }
        if self.stick.is_dragging() {
            ui.ctx().request_repaint();
        }

        if ui.is_rect_visible(track_rect) {
            self.paint(ui, track_rect);
        }

        track_response | knob_response
    }
}

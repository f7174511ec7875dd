//! egui adapter around the [`ActionButton`] core.

use eframe::egui::{self, Image, ImageSource, Response, Sense, Ui, Vec2};

use super::common::pressed_tint;
use crate::controls::{ActionButton, ActionButtonOutput, Listener, TapGesture};

const DEFAULT_BUTTON_SIZE: f32 = 64.0;

/// Tap outcome observed during one frame, if any.
///
/// egui stops calling a press a click once the pointer travels past its
/// drag threshold. Such a press still counts as a tap when it is released
/// over the button, and as cancelled when released elsewhere.
pub fn tap_from_response(response: &Response) -> Option<TapGesture> {
    if response.clicked() {
        Some(TapGesture::Completed)
    } else if response.drag_stopped() {
        let release_pos = response
            .interact_pointer_pos()
            .or_else(|| response.ctx.input(|i| i.pointer.latest_pos()));
        match release_pos {
            Some(pos) if response.rect.contains(pos) => Some(TapGesture::Completed),
            _ => Some(TapGesture::Cancelled),
        }
    } else {
        None
    }
}

/// On-screen action button drawing a single image.
#[derive(Debug)]
pub struct ActionButtonView {
    button: ActionButton,
    image: ImageSource<'static>,
    size: Vec2,
}

impl ActionButtonView {
    pub fn new(image: ImageSource<'static>, output: Listener<dyn ActionButtonOutput>) -> Self {
        Self {
            button: ActionButton::create(output),
            image,
            size: Vec2::splat(DEFAULT_BUTTON_SIZE),
        }
    }

    pub fn set_size(&mut self, size: Vec2) {
        self.size = size;
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn button(&self) -> &ActionButton {
        &self.button
    }

    pub fn handle_tap(&self, gesture: TapGesture) -> bool {
        self.button.handle(gesture)
    }
}

impl egui::Widget for &mut ActionButtonView {
    fn ui(self, ui: &mut Ui) -> Response {
        let (rect, response) = ui.allocate_exact_size(self.size, Sense::click_and_drag());

        if let Some(gesture) = tap_from_response(&response) {
            self.button.handle(gesture);
        }

        if ui.is_rect_visible(rect) {
            let tint = if response.is_pointer_button_down_on() {
                pressed_tint(egui::Color32::WHITE)
            } else {
                egui::Color32::WHITE
            };
            Image::new(self.image.clone()).tint(tint).paint_at(ui, rect);
        }

        response
    }
}

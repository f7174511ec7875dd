//! Drives widgets through real egui passes without a window.
//!
//! Each call runs one frame with the given pointer events, laying the
//! widget out in a margin-free central panel so that its top-left corner
//! sits at the screen origin.

use egui::{Context, Event, Modifiers, PointerButton, Pos2, RawInput, Rect, Ui, Vec2};

const FRAME_TIME: f64 = 1.0 / 60.0;

pub(crate) struct HeadlessUi {
    ctx: Context,
    time: f64,
}

impl HeadlessUi {
    pub(crate) fn new() -> Self {
        Self {
            ctx: Context::default(),
            time: 0.0,
        }
    }

    pub(crate) fn frame(&mut self, events: Vec<Event>, mut add_contents: impl FnMut(&mut Ui)) {
        self.time += FRAME_TIME;
        let input = RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, Vec2::splat(400.0))),
            time: Some(self.time),
            events,
            ..Default::default()
        };
        let _ = self.ctx.run(input, |ctx| {
            egui::CentralPanel::default()
                .frame(egui::Frame::default())
                .show(ctx, |ui| add_contents(ui));
        });
    }

    pub(crate) fn hover(&mut self, pos: Pos2, add_contents: impl FnMut(&mut Ui)) {
        self.frame(vec![Event::PointerMoved(pos)], add_contents);
    }

    pub(crate) fn press(&mut self, pos: Pos2, add_contents: impl FnMut(&mut Ui)) {
        self.frame(vec![Event::PointerMoved(pos), button(pos, true)], add_contents);
    }

    pub(crate) fn move_to(&mut self, pos: Pos2, add_contents: impl FnMut(&mut Ui)) {
        self.hover(pos, add_contents);
    }

    pub(crate) fn release(&mut self, pos: Pos2, add_contents: impl FnMut(&mut Ui)) {
        self.frame(vec![Event::PointerMoved(pos), button(pos, false)], add_contents);
    }
}

fn button(pos: Pos2, pressed: bool) -> Event {
    Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed,
        modifiers: Modifiers::NONE,
    }
}

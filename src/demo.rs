//! Demo application showing a joystick and a jump button side by side.
//!
//! Listeners write into a shared event log that is rendered next to the
//! controls. The "Drop listeners" button releases the only strong
//! references to them, after which the controls keep working but report to
//! nobody.

use chrono::{DateTime, Local};
use eframe::egui::{
    self, load::SizedTexture, Color32, ColorImage, ImageSource, RichText, ScrollArea, TextureHandle,
    TextureOptions, Vec2,
};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;
use tracing::{debug, info};

use touch_controls::config::DemoConfig;
use touch_controls::ui::common::{create_frame, UiColors};
use touch_controls::{
    ActionButtonOutput, Control, ControlFactory, ControlKind, DragStickOutput, StickPosition,
};

const TEXTURE_SIZE: usize = 128;

struct LogEntry {
    timestamp: DateTime<Local>,
    text: String,
}

/// Bounded, newest-last log of listener callbacks.
pub struct EventLog {
    entries: RefCell<VecDeque<LogEntry>>,
    capacity: usize,
}

impl EventLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: RefCell::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    pub fn push(&self, text: String) {
        if self.capacity == 0 {
            return;
        }
        let mut entries = self.entries.borrow_mut();
        while entries.len() >= self.capacity {
            entries.pop_front();
        }
        entries.push_back(LogEntry {
            timestamp: Local::now(),
            text,
        });
    }

    fn render(&self, ui: &mut egui::Ui) {
        for entry in self.entries.borrow().iter() {
            ui.monospace(format!(
                "{} {}",
                entry.timestamp.format("%H:%M:%S%.3f"),
                entry.text
            ));
        }
    }
}

struct StickRecorder {
    log: Rc<EventLog>,
    last: Cell<StickPosition>,
}

impl DragStickOutput for StickRecorder {
    fn on_position_changed(&self, position: StickPosition) {
        self.last.set(position);
        self.log.push(format!("stick {}", position));
    }

    fn on_released(&self) {
        self.last.set(StickPosition::CENTER);
        self.log.push("stick released".to_string());
    }
}

struct JumpRecorder {
    log: Rc<EventLog>,
    jumps: Cell<u32>,
}

impl ActionButtonOutput for JumpRecorder {
    fn on_pressed(&self) {
        self.jumps.set(self.jumps.get() + 1);
        self.log.push(format!("jump #{}", self.jumps.get()));
    }
}

/// Fills a square texture with a disc of `color` on a transparent background.
fn disc_image([r, g, b]: [u8; 3]) -> ColorImage {
    let mut image = ColorImage::new([TEXTURE_SIZE, TEXTURE_SIZE], Color32::TRANSPARENT);
    let radius = TEXTURE_SIZE as f32 / 2.0;
    for y in 0..TEXTURE_SIZE {
        for x in 0..TEXTURE_SIZE {
            let dx = x as f32 + 0.5 - radius;
            let dy = y as f32 + 0.5 - radius;
            if dx * dx + dy * dy <= radius * radius {
                image.pixels[y * TEXTURE_SIZE + x] = Color32::from_rgb(r, g, b);
            }
        }
    }
    image
}

fn rgb((r, g, b): (u8, u8, u8)) -> [u8; 3] {
    [r, g, b]
}

pub struct DemoApp {
    config: DemoConfig,
    log: Rc<EventLog>,
    joystick: Control,
    jump_button: Control,
    stick_listener: Option<Rc<StickRecorder>>,
    jump_listener: Option<Rc<JumpRecorder>>,
    // Dropping a handle frees its texture.
    _textures: Vec<TextureHandle>,
}

impl DemoApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: DemoConfig) -> Self {
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        let ctx = &cc.egui_ctx;
        let textures = vec![
            ctx.load_texture("knob", disc_image(rgb(config.knob_color)), TextureOptions::LINEAR),
            ctx.load_texture("track", disc_image(rgb(config.track_color)), TextureOptions::LINEAR),
            ctx.load_texture("jump", disc_image(rgb(config.button_color)), TextureOptions::LINEAR),
        ];

        let log = Rc::new(EventLog::new(config.log_capacity));
        let stick_listener = Rc::new(StickRecorder {
            log: log.clone(),
            last: Cell::new(StickPosition::CENTER),
        });
        let jump_listener = Rc::new(JumpRecorder {
            log: log.clone(),
            jumps: Cell::new(0),
        });

        let factory = ControlFactory::new();
        let mut joystick = factory.create(ControlKind::Joystick {
            knob_image: Self::image_source(&textures[0]),
            track_image: Self::image_source(&textures[1]),
            width: config.joystick_width,
            output: (&stick_listener).into(),
        });
        if let Some(view) = joystick.as_joystick_mut() {
            view.set_style(config.stick_style);
        }

        let mut jump_button = factory.create(ControlKind::Button {
            image: Self::image_source(&textures[2]),
            output: (&jump_listener).into(),
        });
        if let Some(view) = jump_button.as_button_mut() {
            view.set_size(Vec2::splat(config.button_size));
        }

        info!("Demo controls created");
        Self {
            config,
            log,
            joystick,
            jump_button,
            stick_listener: Some(stick_listener),
            jump_listener: Some(jump_listener),
            _textures: textures,
        }
    }

    fn image_source(texture: &TextureHandle) -> ImageSource<'static> {
        ImageSource::Texture(SizedTexture::from_handle(texture))
    }

    fn listeners_attached(&self) -> bool {
        self.stick_listener.is_some() && self.jump_listener.is_some()
    }

    fn status_line(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let (label, color) = if self.listeners_attached() {
                ("listeners attached", UiColors::ACTIVE)
            } else {
                ("listeners dropped", UiColors::INACTIVE)
            };
            ui.label(RichText::new(label).color(color));

            if let Some(stick) = &self.stick_listener {
                ui.label(format!("last position {}", stick.last.get()));
            }
            if let Some(jump) = &self.jump_listener {
                ui.label(format!("jumps {}", jump.jumps.get()));
            }

            if self.listeners_attached() && ui.button("Drop listeners").clicked() {
                debug!("Dropping demo listeners");
                self.stick_listener = None;
                self.jump_listener = None;
                self.log.push("listeners dropped".to_string());
            }
        });
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::right("event_log")
            .min_width(260.0)
            .show(ctx, |ui| {
                ui.heading("Events");
                create_frame(UiColors::EXTREME_BG, UiColors::BORDER).show(ui, |ui| {
                    ScrollArea::vertical()
                        .stick_to_bottom(true)
                        .show(ui, |ui| self.log.render(ui));
                });
            });

        egui::CentralPanel::default()
            .frame(create_frame(UiColors::MAIN_BG, UiColors::BORDER))
            .show(ctx, |ui| {
                ui.ctx().request_repaint_after(Duration::from_millis(33));
                self.status_line(ui);
                ui.separator();

                ui.horizontal(|ui| {
                    ui.add(&mut self.joystick);
                    ui.add_space(self.config.joystick_width / 2.0);
                    ui.vertical(|ui| {
                        ui.add_space(self.config.joystick_width / 2.0);
                        ui.add(&mut self.jump_button);
                    });
                });

                if let Some(view) = self.joystick.as_joystick() {
                    ui.label(format!(
                        "knob {:?} / stick {}",
                        view.stick().phase(),
                        view.position()
                    ));
                }
            });
    }
}

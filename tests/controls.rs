use std::cell::{Cell, RefCell};
use std::rc::Rc;

use egui::load::SizedTexture;
use egui::{ImageSource, TextureId, Vec2};
use touch_controls::controls::KnobPoint;
use touch_controls::{
    ActionButtonOutput, Control, ControlFactory, ControlKind, DragDelta, DragGesture,
    DragStickOutput, Listener, StickEvent, StickPhase, StickPosition, TapGesture,
};

#[derive(Default)]
struct StickLog {
    positions: RefCell<Vec<StickPosition>>,
    releases: Cell<u32>,
}

impl DragStickOutput for StickLog {
    fn on_position_changed(&self, position: StickPosition) {
        self.positions.borrow_mut().push(position);
    }

    fn on_released(&self) {
        self.releases.set(self.releases.get() + 1);
    }
}

#[derive(Default)]
struct PressLog {
    presses: Cell<u32>,
}

impl ActionButtonOutput for PressLog {
    fn on_pressed(&self) {
        self.presses.set(self.presses.get() + 1);
    }
}

fn texture(id: u64) -> ImageSource<'static> {
    ImageSource::Texture(SizedTexture::new(TextureId::Managed(id), Vec2::splat(64.0)))
}

fn joystick(width: f32, log: &Rc<StickLog>) -> Control {
    ControlFactory::new().create(ControlKind::Joystick {
        knob_image: texture(1),
        track_image: texture(2),
        width,
        output: log.into(),
    })
}

fn button(log: &Rc<PressLog>) -> Control {
    ControlFactory::new().create(ControlKind::Button {
        image: texture(3),
        output: log.into(),
    })
}

#[test]
fn joystick_starts_centered() {
    let log = Rc::new(StickLog::default());
    let control = joystick(120.0, &log);
    let view = control.as_joystick().unwrap();

    assert_eq!(view.position(), StickPosition::CENTER);
    assert_eq!(view.stick().knob(), KnobPoint::new(60.0, 60.0));
    assert_eq!(view.stick().phase(), StickPhase::Idle);
}

#[test]
fn joystick_maps_track_edges_to_full_deflection() {
    let width = 120.0;
    let log = Rc::new(StickLog::default());
    let mut control = joystick(width, &log);
    let view = control.as_joystick_mut().unwrap();

    view.handle_gesture(DragGesture::Began);
    let right = view.handle_gesture(DragGesture::Moved(DragDelta::new(width / 2.0, 0.0)));
    let left = view.handle_gesture(DragGesture::Moved(DragDelta::new(-width, 0.0)));
    let top = view.handle_gesture(DragGesture::Moved(DragDelta::new(width / 2.0, -width / 2.0)));
    let bottom = view.handle_gesture(DragGesture::Moved(DragDelta::new(0.0, width)));

    assert_eq!(right, Some(StickEvent::Moved(StickPosition::new(100.0, 0.0))));
    assert_eq!(left, Some(StickEvent::Moved(StickPosition::new(-100.0, 0.0))));
    assert_eq!(top, Some(StickEvent::Moved(StickPosition::new(0.0, -100.0))));
    assert_eq!(bottom, Some(StickEvent::Moved(StickPosition::new(0.0, 100.0))));
    assert_eq!(log.positions.borrow().len(), 4);
}

#[test]
fn joystick_rejects_overflowing_move_without_callback() {
    let log = Rc::new(StickLog::default());
    let mut control = joystick(100.0, &log);
    let view = control.as_joystick_mut().unwrap();

    view.handle_gesture(DragGesture::Began);
    view.handle_gesture(DragGesture::Moved(DragDelta::new(-20.0, 30.0)));
    let before = view.stick().knob();
    let calls_before = log.positions.borrow().len();

    // y would reach 105 while x stays comfortably inside.
    let event = view.handle_gesture(DragGesture::Moved(DragDelta::new(5.0, 25.0)));

    assert_eq!(event, None);
    assert_eq!(view.stick().knob(), before);
    assert_eq!(log.positions.borrow().len(), calls_before);
}

#[test]
fn joystick_release_recenters_after_any_drag() {
    let log = Rc::new(StickLog::default());
    let mut control = joystick(100.0, &log);
    let view = control.as_joystick_mut().unwrap();

    view.handle_gesture(DragGesture::Began);
    for delta in [(10.0, 10.0), (15.0, -30.0), (200.0, 0.0), (-40.0, 5.0)] {
        view.handle_gesture(DragGesture::Moved(DragDelta::new(delta.0, delta.1)));
    }
    assert_ne!(view.position(), StickPosition::CENTER);

    let event = view.handle_gesture(DragGesture::Ended);

    assert_eq!(event, Some(StickEvent::Released));
    assert_eq!(view.stick().knob(), KnobPoint::new(50.0, 50.0));
    assert_eq!(view.position(), StickPosition::CENTER);
    assert_eq!(log.releases.get(), 1);
}

#[test]
fn button_fires_once_per_completed_tap() {
    let log = Rc::new(PressLog::default());
    let control = button(&log);
    let view = control.as_button().unwrap();

    for _ in 0..5 {
        view.handle_tap(TapGesture::Completed);
    }
    view.handle_tap(TapGesture::Cancelled);

    assert_eq!(log.presses.get(), 5);
}

#[test]
fn controls_survive_dropped_listeners() {
    let stick_log = Rc::new(StickLog::default());
    let press_log = Rc::new(PressLog::default());
    let mut stick = joystick(100.0, &stick_log);
    let tap = button(&press_log);
    drop(stick_log);
    drop(press_log);

    let view = stick.as_joystick_mut().unwrap();
    view.handle_gesture(DragGesture::Began);
    view.handle_gesture(DragGesture::Moved(DragDelta::new(10.0, 10.0)));
    assert_eq!(view.handle_gesture(DragGesture::Ended), Some(StickEvent::Released));

    assert!(!tap.as_button().unwrap().handle_tap(TapGesture::Completed));
}

#[test]
fn detached_listener_is_accepted_by_factory() {
    let mut control = ControlFactory::new().create(ControlKind::Joystick {
        knob_image: texture(1),
        track_image: texture(2),
        width: 80.0,
        output: Listener::detached(),
    });

    let view = control.as_joystick_mut().unwrap();
    let event = view.handle_gesture(DragGesture::Moved(DragDelta::new(20.0, 0.0)));
    assert_eq!(event, Some(StickEvent::Moved(StickPosition::new(50.0, 0.0))));
}

//! Drag stick interaction core
//!
//! Converts a stream of drag gestures into knob movement and normalized
//! stick coordinates.
//!
//! # State Machine
//!
//! ```text
//! Idle ──Began/Moved──► Dragging ──Ended──► Idle
//!                         │   ▲             (knob snaps to center,
//!                         └───┘              on_released fires)
//!                        Moved
//! ```
//!
//! # Out-of-bounds policy
//!
//! A move whose candidate point leaves the track on either axis is dropped as
//! a whole. The knob keeps its last accepted position and no callback fires.
//! There is no per-axis clamping: a diagonal drag that overshoots only
//! horizontally also loses its vertical component for that event.
//!
//! Rejected motion is not lost. It stays pending and is added to the next
//! delta, so the knob is always measured against the pointer's total travel
//! since the last accepted move. Dragging past the edge and coming back
//! leaves the knob where the pointer re-enters, not short of it. The pending
//! motion is cleared on release and whenever a new drag starts.

use tracing::{debug, trace};

use super::geometry::{DragDelta, KnobPoint, StickPosition, TrackBounds};
use super::listener::{DragStickOutput, Listener};

/// Gesture events delivered by the host toolkit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragGesture {
    /// Pointer went down on the knob.
    Began,
    /// Pointer moved by a delta since the previous event.
    Moved(DragDelta),
    /// Pointer lifted or the drag was cancelled by the host.
    Ended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StickPhase {
    #[default]
    Idle,
    Dragging,
}

/// What a gesture did to the stick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StickEvent {
    /// Knob accepted a move and now reports this position.
    Moved(StickPosition),
    /// Knob was released and re-centered.
    Released,
}

/// Analog stick with a knob constrained to a rectangular track.
#[derive(Debug)]
pub struct DragStick {
    bounds: TrackBounds,
    knob: KnobPoint,
    phase: StickPhase,
    // Motion rejected since the last accepted move.
    pending: DragDelta,
    output: Listener<dyn DragStickOutput>,
}

impl DragStick {
    /// Creates an idle stick with the knob at the track center.
    pub fn create(bounds: TrackBounds, output: Listener<dyn DragStickOutput>) -> Self {
        debug!(
            "Creating drag stick with track {}x{}",
            bounds.width, bounds.height
        );
        Self {
            bounds,
            knob: bounds.center(),
            phase: StickPhase::Idle,
            pending: DragDelta::ZERO,
            output,
        }
    }

    pub fn bounds(&self) -> TrackBounds {
        self.bounds
    }

    pub fn knob(&self) -> KnobPoint {
        self.knob
    }

    pub fn phase(&self) -> StickPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == StickPhase::Dragging
    }

    /// Current normalized coordinate of the knob.
    pub fn position(&self) -> StickPosition {
        StickPosition::from_knob(self.knob, self.bounds)
    }

    /// Feeds one host gesture event into the state machine.
    pub fn handle(&mut self, gesture: DragGesture) -> Option<StickEvent> {
        match gesture {
            DragGesture::Began => {
                self.begin_drag();
                None
            }
            DragGesture::Moved(delta) => self.drag_by(delta).map(StickEvent::Moved),
            DragGesture::Ended => self.release().then_some(StickEvent::Released),
        }
    }

    pub fn begin_drag(&mut self) {
        if self.phase == StickPhase::Idle {
            trace!("Drag started at {:?}", self.knob);
            self.phase = StickPhase::Dragging;
            self.pending = DragDelta::ZERO;
        }
    }

    /// Moves the knob by `delta`, plus any motion rejected since the last
    /// accepted move, if the result stays inside the track.
    ///
    /// Returns the new normalized position, or `None` when the move was
    /// rejected. A move arriving while idle starts the drag.
    pub fn drag_by(&mut self, delta: DragDelta) -> Option<StickPosition> {
        self.begin_drag();

        let travel = self.pending + delta;
        let candidate = self.knob.offset(travel);
        if !self.bounds.contains(candidate) {
            debug!(
                "Rejecting knob move to ({:.1}, {:.1}), outside track {}x{}",
                candidate.x, candidate.y, self.bounds.width, self.bounds.height
            );
            self.pending = travel;
            return None;
        }

        self.pending = DragDelta::ZERO;
        self.knob = candidate;
        let position = self.position();
        trace!("Knob moved to {}", position);
        self.output.notify(|l| l.on_position_changed(position));
        Some(position)
    }

    /// Snaps the knob back to center and notifies the listener.
    ///
    /// Returns `false` without side effects when no drag is in progress.
    pub fn release(&mut self) -> bool {
        if self.phase != StickPhase::Dragging {
            debug!("Ignoring release without an active drag");
            return false;
        }

        self.knob = self.bounds.center();
        self.pending = DragDelta::ZERO;
        self.phase = StickPhase::Idle;
        debug!("Drag stick released, knob re-centered");
        self.output.notify(|l| l.on_released());
        true
    }
}

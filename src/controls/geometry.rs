//! Plain value types shared by the interaction core.
//!
//! Nothing in here knows about a UI toolkit. Adapters convert their own
//! vector/point types into these before handing them to a control.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// Area the knob may travel in, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackBounds {
    pub width: f32,
    pub height: f32,
}

impl TrackBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Square track as produced by the control factory.
    pub fn square(width: f32) -> Self {
        Self::new(width, width)
    }

    pub fn center(&self) -> KnobPoint {
        KnobPoint::new(self.width / 2.0, self.height / 2.0)
    }

    /// Inclusive on both ends: a knob sitting exactly on an edge is inside.
    pub fn contains(&self, point: KnobPoint) -> bool {
        point.x >= 0.0 && point.y >= 0.0 && point.x <= self.width && point.y <= self.height
    }
}

/// Knob center relative to the track origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct KnobPoint {
    pub x: f32,
    pub y: f32,
}

impl KnobPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, delta: DragDelta) -> Self {
        Self::new(self.x + delta.dx, self.y + delta.dy)
    }
}

/// Pointer motion since the previous gesture event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragDelta {
    pub dx: f32,
    pub dy: f32,
}

impl DragDelta {
    pub const ZERO: Self = Self { dx: 0.0, dy: 0.0 };

    pub fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }

    pub fn is_zero(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}

impl Add for DragDelta {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.dx + other.dx, self.dy + other.dy)
    }
}

/// Normalized stick coordinate reported to listeners.
///
/// Each axis ranges over `[-100, 100]`:
/// - left / top edge: `-100`
/// - center: `0`
/// - right / bottom edge: `100`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StickPosition {
    pub x: f32,
    pub y: f32,
}

impl StickPosition {
    pub const CENTER: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Maps a knob point to percent of the half-extent on each axis.
    pub fn from_knob(knob: KnobPoint, bounds: TrackBounds) -> Self {
        Self {
            x: knob.x * 100.0 / (bounds.width / 2.0) - 100.0,
            y: knob.y * 100.0 / (bounds.height / 2.0) - 100.0,
        }
    }
}

impl fmt::Display for StickPosition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_of_track_maps_to_origin() {
        let bounds = TrackBounds::square(120.0);
        assert_eq!(
            StickPosition::from_knob(bounds.center(), bounds),
            StickPosition::CENTER
        );
    }

    #[test]
    fn edges_map_to_full_deflection() {
        let bounds = TrackBounds::new(200.0, 80.0);

        let right = StickPosition::from_knob(KnobPoint::new(200.0, 40.0), bounds);
        assert_eq!(right, StickPosition::new(100.0, 0.0));

        let left = StickPosition::from_knob(KnobPoint::new(0.0, 40.0), bounds);
        assert_eq!(left, StickPosition::new(-100.0, 0.0));

        let top = StickPosition::from_knob(KnobPoint::new(100.0, 0.0), bounds);
        assert_eq!(top, StickPosition::new(0.0, -100.0));

        let bottom = StickPosition::from_knob(KnobPoint::new(100.0, 80.0), bounds);
        assert_eq!(bottom, StickPosition::new(0.0, 100.0));
    }

    #[test]
    fn contains_is_inclusive() {
        let bounds = TrackBounds::square(50.0);
        assert!(bounds.contains(KnobPoint::new(0.0, 0.0)));
        assert!(bounds.contains(KnobPoint::new(50.0, 50.0)));
        assert!(!bounds.contains(KnobPoint::new(50.5, 10.0)));
        assert!(!bounds.contains(KnobPoint::new(10.0, -0.5)));
    }

    #[test]
    fn display_rounds_to_one_decimal() {
        assert_eq!(StickPosition::new(12.345, -100.0).to_string(), "(12.3, -100.0)");
    }
}

//! Listener capabilities and the non-owning handle controls keep to them.
//!
//! A control never owns the object it reports to. The host keeps its
//! listener in an `Rc` and hands the control a [`Listener`] built from a
//! `Weak`. Once the host drops the listener every notification is skipped
//! without error.

use std::fmt;
use std::rc::{Rc, Weak};
use tracing::trace;

use super::geometry::StickPosition;

/// Receives discrete presses from an action button.
pub trait ActionButtonOutput {
    fn on_pressed(&self);
}

/// Receives continuous position updates and the release of a drag stick.
pub trait DragStickOutput {
    /// Called on every accepted knob move.
    /// Top/left report `-100`, center `0`, bottom/right `100`.
    fn on_position_changed(&self, position: StickPosition);

    /// Called once when the user lets go of the knob.
    fn on_released(&self);
}

/// Optional weak handle to a listener.
pub struct Listener<T: ?Sized> {
    target: Option<Weak<T>>,
}

impl<T: ?Sized> Listener<T> {
    /// Handle that never delivers anything.
    pub fn detached() -> Self {
        Self { target: None }
    }

    /// Whether the listener is still alive.
    pub fn is_attached(&self) -> bool {
        self.target
            .as_ref()
            .is_some_and(|weak| weak.strong_count() > 0)
    }

    /// Runs `f` against the listener if it is still alive.
    ///
    /// Returns `true` when the callback was delivered.
    pub fn notify(&self, f: impl FnOnce(&T)) -> bool {
        match self.target.as_ref().and_then(Weak::upgrade) {
            Some(listener) => {
                f(&*listener);
                true
            }
            None => {
                trace!("Listener gone, skipping notification");
                false
            }
        }
    }
}

impl<T: ?Sized> Clone for Listener<T> {
    fn clone(&self) -> Self {
        Self {
            target: self.target.clone(),
        }
    }
}

impl<T: ?Sized> Default for Listener<T> {
    fn default() -> Self {
        Self::detached()
    }
}

impl<T: ?Sized> fmt::Debug for Listener<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Listener")
            .field("attached", &self.is_attached())
            .finish()
    }
}

impl<T: ?Sized> From<Weak<T>> for Listener<T> {
    fn from(weak: Weak<T>) -> Self {
        Self { target: Some(weak) }
    }
}

impl<L: ActionButtonOutput + 'static> From<&Rc<L>> for Listener<dyn ActionButtonOutput> {
    fn from(listener: &Rc<L>) -> Self {
        let weak = Rc::downgrade(listener) as Weak<dyn ActionButtonOutput>;
        Self::from(weak)
    }
}

impl<L: DragStickOutput + 'static> From<&Rc<L>> for Listener<dyn DragStickOutput> {
    fn from(listener: &Rc<L>) -> Self {
        let weak = Rc::downgrade(listener) as Weak<dyn DragStickOutput>;
        Self::from(weak)
    }
}

//! Tap-to-fire action button core.

use tracing::{debug, trace};

use super::listener::{ActionButtonOutput, Listener};

/// Tap outcomes reported by the host toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapGesture {
    /// Press and release both happened inside the control.
    Completed,
    /// Press was released outside the control or cancelled by the host.
    Cancelled,
}

/// Stateless button that forwards every completed tap as one press.
#[derive(Debug, Clone)]
pub struct ActionButton {
    output: Listener<dyn ActionButtonOutput>,
}

impl ActionButton {
    pub fn create(output: Listener<dyn ActionButtonOutput>) -> Self {
        debug!("Creating action button");
        Self { output }
    }

    /// Returns `true` if a press reached a live listener.
    pub fn handle(&self, gesture: TapGesture) -> bool {
        match gesture {
            TapGesture::Completed => self.tap(),
            TapGesture::Cancelled => {
                trace!("Tap cancelled, no press forwarded");
                false
            }
        }
    }

    pub fn tap(&self) -> bool {
        trace!("Action button tapped");
        self.output.notify(|l| l.on_pressed())
    }
}

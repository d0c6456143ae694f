//! Raw scroll input
//!
//! A platform-neutral carrier for wheel/trackpad deltas plus modifier
//! state. Terminal hosts build it from crossterm mouse events; GUI
//! hosts fill the deltas themselves.

pub use crossterm::event::KeyModifiers;
use crossterm::event::{MouseEvent, MouseEventKind};

/// One scroll input: signed deltas in wheel ticks plus modifiers
///
/// Positive `delta_y` scrolls the content down (toward the end of the
/// document), positive `delta_x` to the right. The engine multiplies
/// ticks by the configured wheel step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollEvent {
    pub delta_x: f64,
    pub delta_y: f64,
    pub modifiers: KeyModifiers,
}

impl ScrollEvent {
    #[must_use]
    pub fn new(delta_x: f64, delta_y: f64, modifiers: KeyModifiers) -> Self {
        Self {
            delta_x,
            delta_y,
            modifiers,
        }
    }

    /// Convert a crossterm mouse event; `None` for non-wheel kinds
    ///
    /// Crossterm reports direction only, so each event carries one
    /// tick on one axis.
    pub fn from_mouse(event: &MouseEvent) -> Option<Self> {
        let (dx, dy) = match event.kind {
            MouseEventKind::ScrollUp => (0.0, -1.0),
            MouseEventKind::ScrollDown => (0.0, 1.0),
            MouseEventKind::ScrollLeft => (-1.0, 0.0),
            MouseEventKind::ScrollRight => (1.0, 0.0),
            _ => return None,
        };
        Some(Self::new(dx, dy, event.modifiers))
    }

    /// True when neither axis carries a delta
    pub fn is_empty(&self) -> bool {
        self.delta_x == 0.0 && self.delta_y == 0.0
    }
}

//! Scroll-control proxy contract
//!
//! The engine never draws scrollbars. It publishes {range, page-step,
//! value} through [`ScrollControl`] and reads the value back after the
//! host reports a user drag via `Layout::scrolled`. One proxy exists
//! per axis.

/// Scroll axis identifier, used to address the two proxies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAxis {
    Horizontal,
    Vertical,
}

/// Contract between the engine and one scrollbar widget
///
/// The channel is bidirectional but non-reentrant: the engine writes
/// range/page-step/value, the widget mutates `set_value` on user drags
/// and the host then calls `Layout::scrolled` for that axis.
pub trait ScrollControl {
    /// Total scrollable extent in canvas units (the layout size on
    /// this axis)
    fn set_range(&mut self, range: f64);

    /// Size of one visible "page" of content (the viewport extent on
    /// this axis); widgets use it to size the thumb
    fn set_page_step(&mut self, step: f64);

    /// Move the thumb to `value` canvas units from the start
    fn set_value(&mut self, value: f64);

    fn range(&self) -> f64;

    fn page_step(&self) -> f64;

    fn value(&self) -> f64;
}

/// Plain in-memory scrollbar state
///
/// Enough for headless hosts and tests; widget toolkits adapt their
/// own scrollbar types by implementing [`ScrollControl`] instead.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollbarState {
    range: f64,
    page_step: f64,
    value: f64,
}

impl ScrollbarState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Largest value the thumb can take
    pub fn max_value(&self) -> f64 {
        (self.range - self.page_step).max(0.0)
    }
}

impl ScrollControl for ScrollbarState {
    fn set_range(&mut self, range: f64) {
        self.range = range.max(0.0);
        self.value = self.value.min(self.max_value());
    }

    fn set_page_step(&mut self, step: f64) {
        self.page_step = step.max(0.0);
        self.value = self.value.min(self.max_value());
    }

    fn set_value(&mut self, value: f64) {
        self.value = value.clamp(0.0, self.max_value());
    }

    fn range(&self) -> f64 {
        self.range
    }

    fn page_step(&self) -> f64 {
        self.page_step
    }

    fn value(&self) -> f64 {
        self.value
    }
}

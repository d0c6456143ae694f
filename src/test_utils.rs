//! Mock collaborators for driving the engine in tests

use crate::document::{DocumentView, ZoomDirection};

/// In-memory document that records every notification it receives
#[derive(Debug, Clone, Default)]
pub struct MockDocument {
    /// (width, height) per page, in document order
    pub page_sizes: Vec<(f64, f64)>,
    /// Pages reported through `selected_page_changed`, in call order
    pub selected_pages: Vec<usize>,
    pub repaint_count: usize,
    pub zoom_requests: Vec<ZoomDirection>,
}

impl MockDocument {
    #[must_use]
    pub fn new(page_sizes: Vec<(f64, f64)>) -> Self {
        Self {
            page_sizes,
            ..Self::default()
        }
    }

    /// `count` pages of identical size
    #[must_use]
    pub fn uniform(count: usize, width: f64, height: f64) -> Self {
        Self::new(vec![(width, height); count])
    }
}

impl DocumentView for MockDocument {
    fn page_count(&self) -> usize {
        self.page_sizes.len()
    }

    fn page_size(&self, page: usize) -> Option<(f64, f64)> {
        self.page_sizes.get(page).copied()
    }

    fn selected_page_changed(&mut self, page: usize) {
        self.selected_pages.push(page);
    }

    fn request_repaint(&mut self) {
        self.repaint_count += 1;
    }

    fn zoom_requested(&mut self, direction: ZoomDirection) {
        self.zoom_requests.push(direction);
    }
}

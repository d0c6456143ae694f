//! Host collaborator contract
//!
//! The engine owns no pages and renders nothing. Everything it needs
//! from the surrounding viewer, and every notification it sends back,
//! goes through [`DocumentView`].

/// Zoom intent extracted from a Ctrl+wheel scroll event
///
/// Zoom-level computation stays with the host; the engine only reports
/// the direction and re-lays-out once the host feeds back new page
/// sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// Trait for the document/view controller collaborating with the engine
///
/// Page sizes are already scaled: when the host zooms, it reports the
/// new sizes here and re-runs `Layout::layout_pages`.
pub trait DocumentView {
    /// Number of pages in the document
    fn page_count(&self) -> usize;

    /// Current rendered size of a page in canvas units
    ///
    /// `None` for an out-of-range index. Implementations must return
    /// positive sizes for every index below `page_count`.
    fn page_size(&self, page: usize) -> Option<(f64, f64)>;

    /// The page with the greatest viewport overlap changed
    fn selected_page_changed(&mut self, page: usize);

    /// The visible region needs redrawing; no geometry changed
    fn request_repaint(&mut self);

    /// User asked to zoom (Ctrl+wheel); the host owns the zoom level
    fn zoom_requested(&mut self, direction: ZoomDirection);
}

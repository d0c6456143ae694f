//! Page arrangement, scroll coordination and viewport queries
//!
//! [`Layout`] owns the virtual-canvas coordinate space of a document
//! viewer: it positions every page, tracks the scroll offset, keeps the
//! two scroll-control proxies synchronized with it, and answers
//! visibility questions. Everything runs synchronously on the host's
//! event loop; there is no deferred work and no locking.

use log::{debug, warn};

use crate::config::LayoutConfig;
use crate::document::{DocumentView, ZoomDirection};
use crate::geometry::{PageGeometry, Rect};
use crate::input::{KeyModifiers, ScrollEvent};
use crate::scrollbar::{ScrollAxis, ScrollControl, ScrollbarState};

/// Errors from viewport queries
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    /// A caller asked about a page the layout does not know. This is a
    /// caller/state desynchronization, not a condition to clamp away.
    #[error("page index {page} out of range (layout has {page_count} pages)")]
    PageOutOfRange { page: usize, page_count: usize },
}

/// Last known viewport dimensions and current scroll offset
///
/// Mutated only by the scroll coordinator. After every public call on
/// [`Layout`] the offsets satisfy
/// `0 <= scroll_x <= max(0, layout_width - widget_width)` and the Y
/// equivalent.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ViewportState {
    /// Visible-area width reported by the last `set_size`
    pub widget_width: f64,
    /// Visible-area height reported by the last `set_size`
    pub widget_height: f64,
    /// Left edge of the visible window in canvas coordinates
    pub scroll_x: f64,
    /// Top edge of the visible window in canvas coordinates
    pub scroll_y: f64,
    /// Widget width the current page geometry was computed against
    pub last_widget_width: f64,
}

/// The document-canvas layout engine
///
/// Pages are stacked vertically in document order, horizontally
/// centered, with a fixed gap between pages and outer margins around
/// the whole stack. The page table is rebuilt wholesale on every
/// layout pass and swapped in atomically, so queries never observe a
/// partially-built table.
pub struct Layout {
    pub config: LayoutConfig,

    viewport: ViewportState,

    /// Geometry of every page, rebuilt by `layout_pages`
    pages: Vec<PageGeometry>,

    /// The width and height of the complete canvas
    layout_width: f64,
    layout_height: f64,

    scroll_horizontal: Box<dyn ScrollControl>,
    scroll_vertical: Box<dyn ScrollControl>,

    /// Last page reported through `selected_page_changed`
    selected_page: Option<usize>,

    /// Set while a layout pass was skipped and geometry is stale
    needs_layout: bool,
}

impl Layout {
    /// Create an engine backed by plain in-memory scrollbar state
    #[must_use]
    pub fn new(config: LayoutConfig) -> Self {
        Self::with_scroll_controls(
            config,
            Box::new(ScrollbarState::new()),
            Box::new(ScrollbarState::new()),
        )
    }

    /// Create an engine driving the given scroll-control proxies
    #[must_use]
    pub fn with_scroll_controls(
        config: LayoutConfig,
        horizontal: Box<dyn ScrollControl>,
        vertical: Box<dyn ScrollControl>,
    ) -> Self {
        Self {
            config,
            viewport: ViewportState::default(),
            pages: Vec::new(),
            layout_width: 0.0,
            layout_height: 0.0,
            scroll_horizontal: horizontal,
            scroll_vertical: vertical,
            selected_page: None,
            needs_layout: true,
        }
    }

    /// Recompute every page position and the canvas bounds
    ///
    /// Stacks pages vertically in document order with the configured
    /// spacing, centering each page horizontally (left-aligned at the
    /// margin when a page is wider than the widget). Idempotent for
    /// unchanged inputs. Skipped entirely while the viewport is
    /// degenerate, keeping the previous geometry.
    pub fn layout_pages(&mut self, doc: &dyn DocumentView) {
        if self.viewport.widget_width <= 0.0 || self.viewport.widget_height <= 0.0 {
            warn!(
                "skipping layout pass: degenerate viewport {}x{}",
                self.viewport.widget_width, self.viewport.widget_height
            );
            self.needs_layout = true;
            return;
        }

        let page_count = doc.page_count();
        let margin = self.config.margin;

        let mut max_page_width: f64 = 0.0;
        let mut heights = Vec::with_capacity(page_count);
        for index in 0..page_count {
            let (width, height) = doc.page_size(index).unwrap_or((0.0, 0.0));
            max_page_width = max_page_width.max(width);
            heights.push((width, height));
        }

        let layout_width = margin.horizontal() + max_page_width.max(self.viewport.widget_width);

        // Build into a fresh table, then swap; queries never see a
        // half-rebuilt layout.
        let mut pages = Vec::with_capacity(page_count);
        let mut y = margin.top;
        for (index, (width, height)) in heights.into_iter().enumerate() {
            let x = ((layout_width - width) / 2.0).max(margin.left);
            pages.push(PageGeometry {
                index,
                x,
                y,
                width,
                height,
            });
            y += height + self.config.page_spacing;
        }

        let layout_height = if page_count > 0 {
            y - self.config.page_spacing + margin.bottom
        } else {
            margin.vertical()
        };

        self.pages = pages;
        self.needs_layout = false;
        self.viewport.last_widget_width = self.viewport.widget_width;
        debug!(
            "laid out {} pages, canvas {}x{}",
            page_count, layout_width, layout_height
        );

        self.set_layout_size(layout_width, layout_height);
    }

    /// Record new viewport dimensions
    ///
    /// Re-runs the page arranger when the width changed since the last
    /// layout pass (centering depends on it), then clamps the scroll
    /// offset to the valid range and republishes range and position to
    /// both proxies.
    pub fn set_size(&mut self, widget_width: f64, widget_height: f64, doc: &dyn DocumentView) {
        self.viewport.widget_width = widget_width;
        self.viewport.widget_height = widget_height;

        if widget_width != self.viewport.last_widget_width || self.needs_layout {
            self.layout_pages(doc);
        } else {
            // Height changes move the valid scroll range and the
            // vertical page step without touching page geometry.
            let (width, height) = (self.layout_width, self.layout_height);
            self.set_layout_size(width, height);
        }
    }

    /// Set the scrollable extents without recomputing page geometry
    ///
    /// Used by the arranger after every pass; also callable by hosts
    /// that pre-compute extents.
    pub fn set_layout_size(&mut self, width: f64, height: f64) {
        self.layout_width = width.max(0.0);
        self.layout_height = height.max(0.0);

        self.viewport.scroll_x = self.viewport.scroll_x.clamp(0.0, self.max_scroll_x());
        self.viewport.scroll_y = self.viewport.scroll_y.clamp(0.0, self.max_scroll_y());

        self.scroll_horizontal.set_range(self.layout_width);
        self.scroll_horizontal
            .set_page_step(self.viewport.widget_width.max(0.0));
        self.scroll_vertical.set_range(self.layout_height);
        self.scroll_vertical
            .set_page_step(self.viewport.widget_height.max(0.0));

        self.sync_scrollbars();
    }

    /// Apply a signed scroll delta, saturating at the canvas edges
    ///
    /// Never fails: deltas far beyond the valid range degrade to
    /// "scrolled to the edge". Proxies are synchronized before return.
    pub fn scroll_relative(&mut self, dx: f64, dy: f64) {
        self.viewport.scroll_x = (self.viewport.scroll_x + dx).clamp(0.0, self.max_scroll_x());
        self.viewport.scroll_y = (self.viewport.scroll_y + dy).clamp(0.0, self.max_scroll_y());
        self.sync_scrollbars();
    }

    /// Translate a raw scroll input into scrolling or a zoom request
    ///
    /// Ctrl turns the vertical wheel into a zoom request for the host
    /// (wheel up zooms in). Shift applies a vertical delta to the
    /// horizontal axis. Returns whether the event was consumed.
    pub fn scroll_event(&mut self, event: &ScrollEvent, doc: &mut dyn DocumentView) -> bool {
        if event.modifiers.contains(KeyModifiers::CONTROL) {
            let direction = if event.delta_y < 0.0 {
                ZoomDirection::In
            } else if event.delta_y > 0.0 {
                ZoomDirection::Out
            } else {
                return false;
            };
            doc.zoom_requested(direction);
            return true;
        }

        if event.is_empty() {
            return false;
        }

        let (mut dx, mut dy) = (event.delta_x, event.delta_y);
        if event.modifiers.contains(KeyModifiers::SHIFT) && dx == 0.0 {
            dx = dy;
            dy = 0.0;
        }

        self.scroll_relative(dx * self.config.wheel_step, dy * self.config.wheel_step);
        doc.request_repaint();
        true
    }

    /// A user dragged one of the scroll-control proxies
    ///
    /// The proxy's value becomes the authoritative position for that
    /// axis (clamped, bypassing delta logic), then a repaint is
    /// requested.
    pub fn scrolled(&mut self, axis: ScrollAxis, doc: &mut dyn DocumentView) {
        match axis {
            ScrollAxis::Horizontal => {
                let value = self.scroll_horizontal.value();
                self.viewport.scroll_x = value.clamp(0.0, self.max_scroll_x());
            }
            ScrollAxis::Vertical => {
                let value = self.scroll_vertical.value();
                self.viewport.scroll_y = value.clamp(0.0, self.max_scroll_y());
            }
        }
        self.sync_scrollbars();
        doc.request_repaint();
    }

    /// Mark the visible region dirty; changes no geometry
    pub fn request_repaint(&self, doc: &mut dyn DocumentView) {
        doc.request_repaint();
    }

    /// A page's top edge relative to the top of the visible window
    ///
    /// Negative when the page top is above the window; larger than the
    /// widget height when below it.
    pub fn visible_page_top(&self, page: usize) -> Result<f64, LayoutError> {
        let geometry = self.pages.get(page).ok_or(LayoutError::PageOutOfRange {
            page,
            page_count: self.pages.len(),
        })?;
        Ok(geometry.y - self.viewport.scroll_y)
    }

    /// Total scrollable extent of the canvas
    pub fn display_height(&self) -> f64 {
        self.layout_height
    }

    /// Minimal scroll adjustment putting `rect` fully inside the viewport
    ///
    /// A rectangle larger than the viewport on an axis aligns the
    /// viewport to the rectangle's start on that axis. No-op when the
    /// rectangle is already fully visible; repaints when it moved.
    pub fn ensure_rect_visible(&mut self, rect: Rect, doc: &mut dyn DocumentView) {
        if self.visible_rect().contains_rect(&rect) {
            return;
        }

        let mut scroll_x = self.viewport.scroll_x;
        if rect.width > self.viewport.widget_width || rect.x < scroll_x {
            scroll_x = rect.x;
        } else if rect.right() > scroll_x + self.viewport.widget_width {
            scroll_x = rect.right() - self.viewport.widget_width;
        }

        let mut scroll_y = self.viewport.scroll_y;
        if rect.height > self.viewport.widget_height || rect.y < scroll_y {
            scroll_y = rect.y;
        } else if rect.bottom() > scroll_y + self.viewport.widget_height {
            scroll_y = rect.bottom() - self.viewport.widget_height;
        }

        self.viewport.scroll_x = scroll_x.clamp(0.0, self.max_scroll_x());
        self.viewport.scroll_y = scroll_y.clamp(0.0, self.max_scroll_y());
        self.sync_scrollbars();
        doc.request_repaint();
    }

    /// Scroll so that the given page is visible
    pub fn ensure_page_visible(
        &mut self,
        page: usize,
        doc: &mut dyn DocumentView,
    ) -> Result<(), LayoutError> {
        let rect = self
            .pages
            .get(page)
            .ok_or(LayoutError::PageOutOfRange {
                page,
                page_count: self.pages.len(),
            })?
            .rect();
        self.ensure_rect_visible(rect, doc);
        Ok(())
    }

    /// Jump to the top of the document
    pub fn scroll_to_top(&mut self) {
        self.viewport.scroll_y = 0.0;
        self.sync_scrollbars();
    }

    /// Jump to the end of the document
    pub fn scroll_to_end(&mut self) {
        self.viewport.scroll_y = self.max_scroll_y();
        self.sync_scrollbars();
    }

    /// Report the page with the greatest viewport overlap as current
    ///
    /// Overlap is measured by visible area; ties go to the lowest
    /// index. The host is notified only when the current page actually
    /// changed. A viewport touching no page keeps the previous
    /// selection.
    pub fn check_selected_page(&mut self, doc: &mut dyn DocumentView) {
        let viewport = self.visible_rect();

        let mut best: Option<(usize, f64)> = None;
        for page in &self.pages {
            let area = page.rect().overlap_area(&viewport);
            // Strictly-greater comparison keeps the lowest index on ties
            if area > 0.0 && best.is_none_or(|(_, best_area)| area > best_area) {
                best = Some((page.index, area));
            }
        }

        if let Some((index, _)) = best {
            if self.selected_page != Some(index) {
                debug!("selected page changed to {}", index);
                self.selected_page = Some(index);
                doc.selected_page_changed(index);
            }
        }
    }

    /// Contiguous range of page indices intersecting the viewport
    pub fn visible_pages(&self) -> std::ops::Range<usize> {
        let viewport = self.visible_rect();
        let mut start = None;
        let mut end = 0;
        for page in &self.pages {
            if page.rect().intersects(&viewport) {
                if start.is_none() {
                    start = Some(page.index);
                }
                end = page.index + 1;
            } else if start.is_some() {
                // Pages are stacked in order; past the first gap
                // nothing below can intersect.
                break;
            }
        }
        match start {
            Some(first) => first..end,
            None => 0..0,
        }
    }

    /// The visible window in canvas coordinates
    pub fn visible_rect(&self) -> Rect {
        Rect::new(
            self.viewport.scroll_x,
            self.viewport.scroll_y,
            self.viewport.widget_width.max(0.0),
            self.viewport.widget_height.max(0.0),
        )
    }

    /// Geometry of every laid-out page, in document order
    pub fn pages(&self) -> &[PageGeometry] {
        &self.pages
    }

    /// Current (scroll_x, scroll_y)
    pub fn scroll_position(&self) -> (f64, f64) {
        (self.viewport.scroll_x, self.viewport.scroll_y)
    }

    /// Current (layout_width, layout_height)
    pub fn layout_size(&self) -> (f64, f64) {
        (self.layout_width, self.layout_height)
    }

    pub fn viewport(&self) -> ViewportState {
        self.viewport
    }

    /// Last page reported as current, if any
    pub fn selected_page(&self) -> Option<usize> {
        self.selected_page
    }

    pub fn scrollbar_horizontal(&self) -> &dyn ScrollControl {
        self.scroll_horizontal.as_ref()
    }

    pub fn scrollbar_horizontal_mut(&mut self) -> &mut dyn ScrollControl {
        self.scroll_horizontal.as_mut()
    }

    pub fn scrollbar_vertical(&self) -> &dyn ScrollControl {
        self.scroll_vertical.as_ref()
    }

    pub fn scrollbar_vertical_mut(&mut self) -> &mut dyn ScrollControl {
        self.scroll_vertical.as_mut()
    }

    fn max_scroll_x(&self) -> f64 {
        (self.layout_width - self.viewport.widget_width).max(0.0)
    }

    fn max_scroll_y(&self) -> f64 {
        (self.layout_height - self.viewport.widget_height).max(0.0)
    }

    /// Publish the internal position to both proxies
    fn sync_scrollbars(&mut self) {
        self.scroll_horizontal.set_value(self.viewport.scroll_x);
        self.scroll_vertical.set_value(self.viewport.scroll_y);
    }
}

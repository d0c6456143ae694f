// Document-canvas layout engine: page arrangement, scroll coordination
// and viewport queries for document viewers.
pub mod config;
pub mod document;
pub mod geometry;
pub mod input;
pub mod layout;
pub mod scrollbar;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Re-export the primary types
pub use config::{LayoutConfig, Margins};
pub use document::{DocumentView, ZoomDirection};
pub use geometry::{PageGeometry, Rect};
pub use input::ScrollEvent;
pub use layout::{Layout, LayoutError, ViewportState};
pub use scrollbar::{ScrollAxis, ScrollControl, ScrollbarState};

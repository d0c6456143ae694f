//! Layout configuration
//!
//! Margins and spacing are applied in canvas units. Hosts that persist
//! view settings can embed these structs directly, both are
//! serde-compatible.

use serde::{Deserialize, Serialize};

/// Outer border around the complete page stack
///
/// Applied once around the whole layout, not between individual pages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Margins {
    /// Same margin on all four sides
    #[must_use]
    pub fn uniform(value: f64) -> Self {
        Self {
            top: value,
            left: value,
            right: value,
            bottom: value,
        }
    }

    /// Combined left + right margin
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// Combined top + bottom margin
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(10.0)
    }
}

/// Tunables for page arrangement and wheel scrolling
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Outer border of the complete layout
    pub margin: Margins,

    /// Vertical gap between consecutive pages
    pub page_spacing: f64,

    /// Canvas units scrolled per wheel tick
    pub wheel_step: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            margin: Margins::default(),
            page_spacing: 10.0,
            wheel_step: 30.0,
        }
    }
}

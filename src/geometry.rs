//! Canvas-space geometry primitives
//!
//! All coordinates are in canvas units (f64), with the origin at the
//! top-left of the virtual canvas and y growing downward.

/// Axis-aligned rectangle in canvas coordinates
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (exclusive)
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (exclusive)
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Returns true if `other` lies entirely inside this rectangle
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Area of the overlap with `other`, 0.0 when disjoint
    pub fn overlap_area(&self, other: &Rect) -> f64 {
        let w = self.right().min(other.right()) - self.x.max(other.x);
        let h = self.bottom().min(other.bottom()) - self.y.max(other.y);
        if w > 0.0 && h > 0.0 { w * h } else { 0.0 }
    }

    /// Returns true if the rectangles share any area
    pub fn intersects(&self, other: &Rect) -> bool {
        self.overlap_area(other) > 0.0
    }
}

/// Position and size of one laid-out page on the canvas
///
/// Owned by the page arranger; the whole table is rebuilt on every
/// layout pass, entries are never patched field-by-field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    /// Ordinal position in the document (zero-based, stable)
    pub index: usize,
    /// Left edge in canvas coordinates
    pub x: f64,
    /// Top edge in canvas coordinates
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PageGeometry {
    /// The page's bounding box as a [`Rect`]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

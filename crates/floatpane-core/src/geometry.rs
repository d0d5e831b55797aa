#![forbid(unsafe_code)]

//! Geometric primitives.

/// A point in absolute document coordinates (pixels).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Containment tolerance in pixels. Coordinates are pixel-scale f64 values,
/// so rounding error from one placement correction is a few ulps (~1e-13 at
/// 1e3); 1e-9 absorbs that without admitting any visible overlap.
const CONTAINS_EPSILON: f64 = 1e-9;

/// A rectangle in absolute document coordinates (pixels).
///
/// `right`/`bottom` are always derived from the stored fields so the four
/// stored values can never drift apart. Measurements use full element bounds
/// (border included).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Create a rectangle at the document origin with the given size.
    #[inline]
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Right edge (derived).
    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge (derived).
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Top-left corner.
    #[inline]
    pub const fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Check if another rectangle lies fully inside this one.
    ///
    /// Edge comparisons carry a sub-nanopixel tolerance: a rect placed flush
    /// against an edge can land one rounding step past it when the edge value
    /// is not exactly representable.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.left >= self.left - CONTAINS_EPSILON
            && other.top >= self.top - CONTAINS_EPSILON
            && other.right() <= self.right() + CONTAINS_EPSILON
            && other.bottom() <= self.bottom() + CONTAINS_EPSILON
    }
}

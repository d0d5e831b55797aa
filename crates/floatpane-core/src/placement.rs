#![forbid(unsafe_code)]

//! Pure placement and resize math.
//!
//! These functions never mutate their inputs and hold no state; the window
//! controller calls them with boundary rects measured fresh for the current
//! frame.
//!
//! # Invariants
//!
//! 1. [`clamp_and_place`] returns a rect fully contained in the boundary with
//!    `width >= min_w` and `height >= min_h`, provided the minimums fit the
//!    boundary.
//! 2. Overflow correction runs before underflow pinning, so a rect larger
//!    than the boundary ends up pinned to the boundary's top-left.
//! 3. [`apply_resize`] keeps the opposite edge fixed when an edge resize
//!    bottoms out at the minimum size.

use bitflags::bitflags;

use crate::geometry::{Point, Rect};

bitflags! {
    /// Which sides of the rect a resize interaction moves.
    ///
    /// `LEFT`/`TOP` move the near edge (position and size change together);
    /// `WIDTH`/`HEIGHT` extend the far edge (position stays put). A handle
    /// selects at most one flag per axis.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ResizeAction: u8 {
        /// Left edge follows the pointer.
        const LEFT   = 0b0001;
        /// Top edge follows the pointer.
        const TOP    = 0b0010;
        /// Width extends toward the pointer; left edge fixed.
        const WIDTH  = 0b0100;
        /// Height extends toward the pointer; top edge fixed.
        const HEIGHT = 0b1000;
    }
}

/// One of eight edge/corner resize grips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeHandle {
    /// Top edge.
    T,
    /// Bottom edge.
    B,
    /// Left edge.
    L,
    /// Right edge.
    R,
    /// Top-left corner.
    Tl,
    /// Top-right corner.
    Tr,
    /// Bottom-right corner.
    Br,
    /// Bottom-left corner.
    Bl,
}

impl ResizeHandle {
    /// Map the grip to the edges it moves.
    pub const fn action(self) -> ResizeAction {
        match self {
            Self::T => ResizeAction::TOP,
            Self::B => ResizeAction::HEIGHT,
            Self::L => ResizeAction::LEFT,
            Self::R => ResizeAction::WIDTH,
            Self::Tl => ResizeAction::TOP.union(ResizeAction::LEFT),
            Self::Tr => ResizeAction::TOP.union(ResizeAction::WIDTH),
            Self::Br => ResizeAction::HEIGHT.union(ResizeAction::WIDTH),
            Self::Bl => ResizeAction::HEIGHT.union(ResizeAction::LEFT),
        }
    }
}

/// Clamp a requested rect into a boundary and place it.
///
/// Size is corrected first: capped at the boundary size, then raised to the
/// minimums. With `centered` the rect is centered inside the boundary;
/// otherwise it keeps its requested position, shifted back on right/bottom
/// overflow and then pinned at the boundary's start edges.
pub fn clamp_and_place(
    requested: Rect,
    boundary: Rect,
    min_w: f64,
    min_h: f64,
    centered: bool,
) -> Rect {
    // Cap at the boundary first, then raise to the minimums; a minimum
    // larger than the boundary wins.
    let width = requested.width.min(boundary.width).max(min_w);
    let height = requested.height.min(boundary.height).max(min_h);
    let mut left = requested.left;
    let mut top = requested.top;

    if centered {
        left = boundary.left + (boundary.width - width) / 2.0;
        top = boundary.top + (boundary.height - height) / 2.0;
    } else {
        // Overflow correction first, then pinning, so oversized rects land
        // on the boundary's top-left. The edge is assigned directly;
        // subtracting a computed overflow rounds and can leave the rect an
        // ulp past the boundary.
        if left + width > boundary.right() {
            left = boundary.right() - width;
        }
        if left < boundary.left {
            left = boundary.left;
        }

        if top + height > boundary.bottom() {
            top = boundary.bottom() - height;
        }
        if top < boundary.top {
            top = boundary.top;
        }
    }

    Rect::new(left, top, width, height)
}

/// The rect a maximized window occupies: the boundary's interior, exactly.
#[inline]
pub const fn maximized_rect(boundary: Rect) -> Rect {
    boundary
}

/// Apply one resize frame to `current`, following `pointer`.
///
/// The pointer is clamped into the boundary before any edge rule runs, so a
/// resize can never pull the rect outside the boundary.
pub fn apply_resize(
    current: Rect,
    action: ResizeAction,
    pointer: Point,
    boundary: Rect,
    min_w: f64,
    min_h: f64,
) -> Rect {
    let pointer_x = pointer.x.clamp(boundary.left, boundary.right());
    let pointer_y = pointer.y.clamp(boundary.top, boundary.bottom());

    let mut width = current.width;
    let mut height = current.height;
    let mut left = current.left;
    let mut top = current.top;

    if action.contains(ResizeAction::LEFT) {
        let grown = width + (left - pointer_x);
        if grown >= min_w {
            width = grown;
            left = pointer_x;
        } else {
            // Pin at the minimum, keeping the right edge where it was.
            left += width - min_w;
            width = min_w;
        }
    }

    if action.contains(ResizeAction::TOP) {
        let grown = height + (top - pointer_y);
        if grown >= min_h {
            height = grown;
            top = pointer_y;
        } else {
            top += height - min_h;
            height = min_h;
        }
    }

    if action.contains(ResizeAction::WIDTH) {
        width = (pointer_x - current.left).max(min_w);
    }

    if action.contains(ResizeAction::HEIGHT) {
        height = (pointer_y - current.top).max(min_h);
    }

    Rect::new(left, top, width, height)
}

/// Compute the dragged rect's new origin for one pointer frame.
///
/// `grab` is the offset from the pointer to the rect origin recorded when the
/// drag started. The size never changes; the origin is pinned so the rect
/// stays inside the boundary.
pub fn place_dragged(current: Rect, pointer: Point, grab: Point, boundary: Rect) -> Point {
    let mut top = pointer.y - grab.y;
    if top < boundary.top {
        top = boundary.top;
    }
    if top + current.height > boundary.bottom() {
        top = boundary.bottom() - current.height;
    }

    let mut left = pointer.x - grab.x;
    if left < boundary.left {
        left = boundary.left;
    }
    if left + current.width > boundary.right() {
        left = boundary.right() - current.width;
    }

    Point::new(left, top)
}

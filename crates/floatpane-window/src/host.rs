#![forbid(unsafe_code)]

//! Host surface abstraction.
//!
//! The core never touches a real element tree. The host implements
//! [`HostSurface`] over whatever it renders with and the controller asks it
//! for measured rects on demand; boundary measurements are taken fresh every
//! frame and never cached across frames.

use std::rc::Rc;

use floatpane_core::{Emitter, Point, PointerEvent, Rect};

/// Where emitted style positions are anchored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OffsetOrigin {
    /// Positions are already document-relative; emit them unchanged.
    Document,
    /// Positions are relative to this measured origin of the offset parent.
    Element(Point),
}

/// Signal payload for "the viewport may have changed size".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportResized;

/// Measured-rect queries a window controller needs from its host.
///
/// Every query is fallible: a `None` during mount marks the window
/// permanently invalid, a `None` later skips the frame.
pub trait HostSurface {
    /// The window element's own measured bounds.
    fn window_rect(&self) -> Option<Rect>;

    /// Usable interior of the container the window is confined to.
    fn boundary_rect(&self) -> Option<Rect>;

    /// Origin for emitted style positions.
    fn offset_origin(&self) -> Option<OffsetOrigin>;

    /// Measured title-bar bounds; its height becomes the minimum height.
    fn title_bar_rect(&self) -> Option<Rect>;
}

/// The host collaborators a controller is constructed with.
///
/// Explicit parameter passing, not ambient lookup: a standalone window (no
/// manager) just receives its own private emitter pair.
#[derive(Clone)]
pub struct HostBindings {
    /// Rect-query capability.
    pub surface: Rc<dyn HostSurface>,
    /// Host-wide pointer event stream.
    pub pointer: Emitter<PointerEvent>,
    /// Host-wide viewport-resize signal.
    pub viewport: Emitter<ViewportResized>,
}

impl HostBindings {
    /// Bundle a surface with the shared event channels.
    pub fn new(
        surface: Rc<dyn HostSurface>,
        pointer: Emitter<PointerEvent>,
        viewport: Emitter<ViewportResized>,
    ) -> Self {
        Self {
            surface,
            pointer,
            viewport,
        }
    }
}

#![forbid(unsafe_code)]

//! floatpane public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports the common types from the internal crates and offers a
//! lightweight prelude for day-to-day usage.
//!
//! A host wires up three things: a [`HostSurface`] that can measure its
//! elements, a pointer [`Emitter`] it feeds from its input source, and a
//! viewport [`Emitter`] it pings on container resize. Windows mounted over
//! those bindings manage their own geometry; an optional shared
//! [`WindowManager`] coordinates identities and stacking.

// --- Core re-exports -------------------------------------------------------

pub use floatpane_core::{
    Emitter, Point, PointerEvent, PointerPhase, Rect, ResizeAction, ResizeHandle, Subscription,
    apply_resize, clamp_and_place, maximized_rect, place_dragged,
};

// --- Window re-exports -----------------------------------------------------

pub use floatpane_window::{
    HostBindings, HostSurface, Interaction, Lifecycle, OffsetOrigin, ViewportResized,
    WindowClosed, WindowController, WindowHandle, WindowManager, WindowOptions, WindowResized,
    WindowStyle,
};

/// Direct access to the internal crates for advanced use.
pub mod core {
    pub use floatpane_core::*;
}

/// Direct access to the window/manager crate for advanced use.
pub mod window {
    pub use floatpane_window::*;
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Emitter, HostBindings, HostSurface, Lifecycle, OffsetOrigin, Point, PointerEvent,
        PointerPhase, Rect, ResizeHandle, ViewportResized, WindowController, WindowHandle,
        WindowManager, WindowOptions, WindowStyle,
    };
}

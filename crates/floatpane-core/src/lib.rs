#![forbid(unsafe_code)]

//! Core: geometry primitives, placement math, pointer events, and the
//! observer channel.
//!
//! # Role in floatpane
//! `floatpane-core` is the rendering-agnostic foundation. It owns the rect
//! types and the pure placement/resize functions that window controllers use
//! for every geometry decision, plus the [`Emitter`] channel that replaces
//! implicit reactivity with explicit subscriptions.
//!
//! # Primary responsibilities
//! - **Rect/Point**: absolute-coordinate rectangles with derived edges.
//! - **Placement**: clamping, centering, maximize, resize, and drag math.
//! - **PointerEvent**: the host-supplied pointer stream model.
//! - **Emitter**: publish-subscribe with scoped, releasable subscriptions.

pub mod event;
pub mod geometry;
pub mod placement;
pub mod signal;

pub use event::{PointerEvent, PointerPhase};
pub use geometry::{Point, Rect};
pub use placement::{
    ResizeAction, ResizeHandle, apply_resize, clamp_and_place, maximized_rect, place_dragged,
};
pub use signal::{Emitter, Subscription};

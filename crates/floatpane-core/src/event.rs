#![forbid(unsafe_code)]

//! Pointer event model.
//!
//! The host owns the real input source (DOM listeners, a winit loop, a test
//! script) and feeds a normalized stream of [`PointerEvent`]s into an
//! [`Emitter`](crate::signal::Emitter). Window controllers subscribe to that
//! stream only while a drag or resize is in progress.

use crate::geometry::Point;

/// Phase of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    /// Button pressed.
    Down,
    /// Pointer moved.
    Move,
    /// Button released.
    Up,
}

/// A pointer event: a phase plus an absolute document position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// The phase of this event.
    pub phase: PointerPhase,
    /// Pointer position in absolute document coordinates.
    pub position: Point,
}

impl PointerEvent {
    /// Create a new pointer event.
    #[must_use]
    pub const fn new(phase: PointerPhase, position: Point) -> Self {
        Self { phase, position }
    }

    /// A button-press event at the given position.
    #[must_use]
    pub const fn down(x: f64, y: f64) -> Self {
        Self::new(PointerPhase::Down, Point::new(x, y))
    }

    /// A move event at the given position.
    #[must_use]
    pub const fn moved(x: f64, y: f64) -> Self {
        Self::new(PointerPhase::Move, Point::new(x, y))
    }

    /// A button-release event at the given position.
    #[must_use]
    pub const fn up(x: f64, y: f64) -> Self {
        Self::new(PointerPhase::Up, Point::new(x, y))
    }
}

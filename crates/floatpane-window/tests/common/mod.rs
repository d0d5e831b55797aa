//! Shared fixture: a scriptable host surface and event channels.

use std::cell::Cell;
use std::rc::Rc;

use floatpane_core::{Emitter, PointerEvent, Rect};
use floatpane_window::{HostBindings, HostSurface, OffsetOrigin, ViewportResized};

/// A host surface whose measurements tests can change mid-run.
pub struct TestSurface {
    pub window: Cell<Option<Rect>>,
    pub boundary: Cell<Option<Rect>>,
    pub origin: Cell<Option<OffsetOrigin>>,
    pub title_bar: Cell<Option<Rect>>,
}

impl TestSurface {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            window: Cell::new(Some(Rect::new(0.0, 0.0, 400.0, 300.0))),
            boundary: Cell::new(Some(Rect::new(0.0, 0.0, 800.0, 600.0))),
            origin: Cell::new(Some(OffsetOrigin::Document)),
            title_bar: Cell::new(None),
        })
    }
}

impl HostSurface for TestSurface {
    fn window_rect(&self) -> Option<Rect> {
        self.window.get()
    }

    fn boundary_rect(&self) -> Option<Rect> {
        self.boundary.get()
    }

    fn offset_origin(&self) -> Option<OffsetOrigin> {
        self.origin.get()
    }

    fn title_bar_rect(&self) -> Option<Rect> {
        self.title_bar.get()
    }
}

/// A surface plus the event channels a host would own.
pub struct Fixture {
    pub surface: Rc<TestSurface>,
    pub pointer: Emitter<PointerEvent>,
    pub viewport: Emitter<ViewportResized>,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            surface: TestSurface::new(),
            pointer: Emitter::new(),
            viewport: Emitter::new(),
        }
    }

    pub fn bindings(&self) -> HostBindings {
        HostBindings::new(
            self.surface.clone(),
            self.pointer.clone(),
            self.viewport.clone(),
        )
    }
}

/// Count events delivered to a subscriber over a `Cell`.
pub fn counter<T: 'static>(emitter: &Emitter<T>) -> Rc<Cell<usize>> {
    let count = Rc::new(Cell::new(0));
    let count_inner = Rc::clone(&count);
    emitter.subscribe(move |_| count_inner.set(count_inner.get() + 1));
    count
}

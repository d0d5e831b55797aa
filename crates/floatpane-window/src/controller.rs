#![forbid(unsafe_code)]

//! Per-window controller: lifecycle state machine, interactions, geometry.
//!
//! # State machine
//!
//! Lifecycle is `Normal | Maximized | Minimized | Closed` (Closed terminal).
//! Drag and resize are orthogonal transient interactions, representable only
//! while the lifecycle is Normal; the tagged [`Interaction`] variant makes
//! "at most one active interaction" structurally impossible to violate.
//!
//! # Invariants
//!
//! 1. After every completed frame the window rect is contained in the
//!    last-measured boundary and respects the minimum size.
//! 2. Pointer-stream subscriptions acquired when an interaction starts are
//!    released on pointer-up, on close, and on drop — every exit path.
//! 3. A stacking value is only ever raised, and only when strictly below the
//!    manager's current top.
//! 4. A controller that fails to resolve its host collaborators at mount is
//!    permanently invalid: every later operation is a silent no-op.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use floatpane_core::{
    Emitter, Point, PointerEvent, PointerPhase, Rect, ResizeAction, ResizeHandle, Subscription,
    apply_resize, clamp_and_place, maximized_rect, place_dragged,
};

use crate::config::WindowOptions;
use crate::host::{HostBindings, HostSurface, OffsetOrigin, ViewportResized};
use crate::manager::WindowManager;
use crate::style::WindowStyle;

/// Fixed minimum window width in pixels.
pub const MIN_WIDTH: f64 = 150.0;

/// Minimum window height in pixels, used until the measured title-bar height
/// replaces it at mount.
pub const DEFAULT_MIN_HEIGHT: f64 = 50.0;

/// Mutually exclusive window lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lifecycle {
    /// Free-floating, the only state that permits drag/resize.
    Normal,
    /// Filling the boundary.
    Maximized,
    /// Hidden by the host; geometry retained for restore.
    Minimized,
    /// Terminal. The controller is unusable and should be discarded.
    Closed,
}

/// The transient interaction a window is currently in, if any.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Interaction {
    /// No interaction in progress.
    Idle,
    /// Dragging; `grab` is the pointer offset from the rect origin recorded
    /// at drag start.
    Dragging {
        /// Pointer-to-origin offset.
        grab: Point,
    },
    /// Resizing with the given edge rules.
    Resizing {
        /// Edges the active grip moves.
        action: ResizeAction,
    },
}

impl Interaction {
    /// True when no interaction is in progress.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// Payload of the geometry-changed notification stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowResized;

/// Payload of the close notification, fired once per window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowClosed;

/// Mutable state shared between the controller, its handle, and the event
/// subscriptions. Never exposed directly.
struct WindowCore {
    options: WindowOptions,
    surface: Rc<dyn HostSurface>,
    pointer: Emitter<PointerEvent>,
    viewport: Emitter<ViewportResized>,
    manager: Option<Rc<WindowManager>>,
    id: String,
    lifecycle: Lifecycle,
    interaction: Interaction,
    rect: Rect,
    pre_maximize_rect: Rect,
    min_width: f64,
    min_height: f64,
    offset_origin: OffsetOrigin,
    style: WindowStyle,
    valid: bool,
    initialized: bool,
    viewport_sub: Option<Subscription>,
    pointer_sub: Option<Subscription>,
    resized: Emitter<WindowResized>,
    closed: Emitter<WindowClosed>,
}

impl WindowCore {
    fn new(
        options: WindowOptions,
        bindings: HostBindings,
        manager: Option<Rc<WindowManager>>,
    ) -> Self {
        let style = WindowStyle::from_options(&options);
        Self {
            id: options.id.clone(),
            options,
            surface: bindings.surface,
            pointer: bindings.pointer,
            viewport: bindings.viewport,
            manager,
            lifecycle: Lifecycle::Normal,
            interaction: Interaction::Idle,
            rect: Rect::default(),
            pre_maximize_rect: Rect::default(),
            min_width: MIN_WIDTH,
            min_height: DEFAULT_MIN_HEIGHT,
            offset_origin: OffsetOrigin::Document,
            style,
            valid: true,
            initialized: false,
            viewport_sub: None,
            pointer_sub: None,
            resized: Emitter::new(),
            closed: Emitter::new(),
        }
    }

    /// Run the mount sequence. Returns the registration to perform once the
    /// core is no longer borrowed.
    fn mount(core: &Rc<RefCell<Self>>) -> Option<(Rc<WindowManager>, WindowHandle)> {
        {
            let mut c = core.borrow_mut();

            // Required collaborators; any failure marks the window
            // permanently invalid instead of panicking.
            let Some(_boundary) = c.surface.boundary_rect() else {
                c.valid = false;
                return None;
            };
            let Some(origin) = c.surface.offset_origin() else {
                c.valid = false;
                return None;
            };
            let Some(own_rect) = c.surface.window_rect() else {
                c.valid = false;
                return None;
            };
            c.offset_origin = origin;

            if let Some(title_bar) = c.surface.title_bar_rect() {
                c.min_height = title_bar.height;
            }

            let centered = c.options.init_centered;
            c.update_rect(own_rect, centered);

            if c.options.init_maximize {
                // Initialize mode: no stacking change, no notification.
                c.do_maximize(true);
            }

            if c.id.is_empty() {
                if let Some(manager) = &c.manager {
                    c.id = manager.next_identity();
                }
            }

            c.style.z_index = match c.options.z_index {
                Some(z_index) => z_index,
                None => match &c.manager {
                    Some(manager) => manager.next_stack_value(),
                    None => c.style.z_index,
                },
            };

            c.initialized = true;
        }

        let viewport = core.borrow().viewport.clone();
        let weak = Rc::downgrade(core);
        let sub = viewport.subscribe(move |_| {
            let Some(core) = weak.upgrade() else { return };
            let emit = core.borrow_mut().handle_viewport_resized();
            emit_resized(&core, emit);
        });
        core.borrow_mut().viewport_sub = Some(sub);

        let c = core.borrow();
        let handle = WindowHandle {
            id: c.id.clone(),
            title: c.options.title.clone(),
            core: Rc::downgrade(core),
            resized: c.resized.clone(),
        };
        c.manager.clone().map(|manager| (manager, handle))
    }

    // --- Derived capability flags -------------------------------------

    fn draggable(&self) -> bool {
        self.valid && self.options.allow_drag && self.lifecycle == Lifecycle::Normal
    }

    fn resizable(&self) -> bool {
        self.valid && self.options.allow_resize && self.lifecycle == Lifecycle::Normal
    }

    fn maximizable(&self) -> bool {
        self.valid && self.options.allow_maximize && self.lifecycle == Lifecycle::Normal
    }

    fn unmaximizable(&self) -> bool {
        self.valid && self.options.allow_maximize && self.lifecycle == Lifecycle::Maximized
    }

    fn minimizable(&self) -> bool {
        self.valid && self.options.allow_minimize && self.lifecycle == Lifecycle::Normal
    }

    fn unminimizable(&self) -> bool {
        self.valid && self.options.allow_minimize && self.lifecycle == Lifecycle::Minimized
    }

    // --- Geometry -----------------------------------------------------

    /// Clamp `requested` against a freshly measured boundary and adopt it.
    /// Skips the frame when the boundary cannot be measured.
    fn update_rect(&mut self, requested: Rect, centered: bool) {
        let Some(boundary) = self.surface.boundary_rect() else {
            return;
        };
        self.rect = clamp_and_place(requested, boundary, self.min_width, self.min_height, centered);
        self.sync_style(false);
    }

    fn sync_style(&mut self, position_only: bool) {
        // The offset parent is re-measured every frame; keep the last known
        // origin when a measurement transiently fails.
        if let Some(origin) = self.surface.offset_origin() {
            self.offset_origin = origin;
        }
        self.style.set_position(&self.rect, self.offset_origin);
        if !position_only {
            self.style.set_size(&self.rect);
        }
    }

    fn bring_to_front(&mut self) {
        let Some(manager) = &self.manager else { return };
        // Strictly-less guard: the already-topmost window never consumes a
        // new stacking value.
        if self.style.z_index < manager.current_top() {
            self.style.z_index = manager.next_stack_value();
            #[cfg(feature = "tracing")]
            tracing::trace!(id = %self.id, z_index = self.style.z_index, "window.raise");
        }
    }

    // --- Lifecycle transitions ----------------------------------------

    fn do_maximize(&mut self, initialize: bool) -> bool {
        if !self.maximizable() || !self.interaction.is_idle() {
            return false;
        }
        let Some(boundary) = self.surface.boundary_rect() else {
            return false;
        };

        self.pre_maximize_rect = self.rect;
        self.rect = maximized_rect(boundary);
        self.sync_style(false);
        self.lifecycle = Lifecycle::Maximized;

        #[cfg(feature = "tracing")]
        tracing::debug!(id = %self.id, initialize, "window.maximize");

        if initialize {
            return false;
        }
        self.bring_to_front();
        true
    }

    fn do_unmaximize(&mut self) -> bool {
        if !self.unmaximizable() {
            return false;
        }
        let restored = self.pre_maximize_rect;
        self.lifecycle = Lifecycle::Normal;
        // The boundary may have changed since the snapshot; re-clamp.
        self.update_rect(restored, false);
        self.bring_to_front();

        #[cfg(feature = "tracing")]
        tracing::debug!(id = %self.id, "window.unmaximize");
        true
    }

    fn do_minimize(&mut self) {
        if !self.minimizable() || !self.interaction.is_idle() {
            return;
        }
        // Geometry untouched: the rect is restored as-is on unminimize.
        self.lifecycle = Lifecycle::Minimized;

        #[cfg(feature = "tracing")]
        tracing::debug!(id = %self.id, "window.minimize");
    }

    fn do_unminimize(&mut self) -> bool {
        if !self.unminimizable() {
            return false;
        }
        self.lifecycle = Lifecycle::Normal;
        let current = self.rect;
        self.update_rect(current, false);
        self.bring_to_front();

        #[cfg(feature = "tracing")]
        tracing::debug!(id = %self.id, "window.unminimize");
        true
    }

    fn do_select(&mut self) -> bool {
        if self.unminimizable() {
            self.do_unminimize()
        } else {
            self.bring_to_front();
            false
        }
    }

    /// Close from any non-closed state. Associated function because the
    /// closed notification and the manager unregistration must run after the
    /// core borrow is released.
    fn close(core: &Rc<RefCell<Self>>) {
        let (closed, manager, id) = {
            let mut c = core.borrow_mut();
            if !c.valid || c.lifecycle == Lifecycle::Closed {
                return;
            }
            c.release_interaction();
            c.release_viewport();
            c.lifecycle = Lifecycle::Closed;

            #[cfg(feature = "tracing")]
            tracing::debug!(id = %c.id, "window.close");

            (c.closed.clone(), c.manager.take(), c.id.clone())
        };

        closed.emit(&WindowClosed);
        if let Some(manager) = manager {
            manager.unregister(&id);
        }
    }

    // --- Interactions -------------------------------------------------

    fn begin_drag(&mut self, pointer: Point) -> bool {
        if !self.draggable() || !self.interaction.is_idle() {
            return false;
        }
        self.bring_to_front();
        self.interaction = Interaction::Dragging {
            grab: Point::new(pointer.x - self.rect.left, pointer.y - self.rect.top),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(id = %self.id, "window.drag_start");
        true
    }

    fn begin_resize(&mut self, handle: ResizeHandle) -> bool {
        if !self.resizable() || !self.interaction.is_idle() {
            return false;
        }
        self.bring_to_front();
        self.interaction = Interaction::Resizing {
            action: handle.action(),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(id = %self.id, ?handle, "window.resize_start");
        true
    }

    /// Route one pointer event into the active interaction. Returns whether
    /// the geometry-changed notification should fire.
    fn handle_interaction_event(&mut self, event: &PointerEvent) -> bool {
        match event.phase {
            PointerPhase::Down => false,
            PointerPhase::Move => match self.interaction {
                Interaction::Dragging { grab } => self.drag_frame(event.position, grab),
                Interaction::Resizing { action } => self.resize_frame(event.position, action),
                Interaction::Idle => false,
            },
            // Interactions end on pointer-up regardless of lifecycle.
            PointerPhase::Up => {
                self.release_interaction();
                false
            }
        }
    }

    fn drag_frame(&mut self, pointer: Point, grab: Point) -> bool {
        let Some(boundary) = self.surface.boundary_rect() else {
            return false;
        };
        let origin = place_dragged(self.rect, pointer, grab, boundary);
        self.rect.left = origin.x;
        self.rect.top = origin.y;
        self.sync_style(true);
        true
    }

    fn resize_frame(&mut self, pointer: Point, action: ResizeAction) -> bool {
        let Some(boundary) = self.surface.boundary_rect() else {
            return false;
        };
        self.rect = apply_resize(
            self.rect,
            action,
            pointer,
            boundary,
            self.min_width,
            self.min_height,
        );
        self.sync_style(false);
        true
    }

    fn release_interaction(&mut self) {
        self.interaction = Interaction::Idle;
        if let Some(sub) = self.pointer_sub.take() {
            self.pointer.unsubscribe(sub);
        }
    }

    fn release_viewport(&mut self) {
        if let Some(sub) = self.viewport_sub.take() {
            self.viewport.unsubscribe(sub);
        }
    }

    // --- Viewport -----------------------------------------------------

    fn handle_viewport_resized(&mut self) -> bool {
        if !self.valid {
            return false;
        }
        match self.lifecycle {
            Lifecycle::Maximized => {
                if let Some(boundary) = self.surface.boundary_rect() {
                    self.rect = maximized_rect(boundary);
                    self.sync_style(false);
                }
            }
            Lifecycle::Normal => {
                let current = self.rect;
                self.update_rect(current, false);
            }
            // Minimized geometry is left untouched; the notification still
            // fires so hosts can re-measure dependent content.
            Lifecycle::Minimized => {}
            Lifecycle::Closed => return false,
        }
        true
    }
}

/// Emit the geometry-changed notification once the core borrow is released.
fn emit_resized(core: &Rc<RefCell<WindowCore>>, emit: bool) {
    if emit {
        let resized = core.borrow().resized.clone();
        resized.emit(&WindowResized);
    }
}

/// Subscribe the core to the pointer stream for the current interaction.
fn subscribe_pointer(core: &Rc<RefCell<WindowCore>>) {
    let pointer = core.borrow().pointer.clone();
    let weak = Rc::downgrade(core);
    let sub = pointer.subscribe(move |event| {
        let Some(core) = weak.upgrade() else { return };
        let emit = core.borrow_mut().handle_interaction_event(event);
        emit_resized(&core, emit);
    });
    core.borrow_mut().pointer_sub = Some(sub);
}

/// One floating window: owns its geometry and interaction state machine.
///
/// Created via [`WindowController::mount`]; dropping it tears the window
/// down (releases every event subscription and unregisters from the
/// manager). Cross-window effects happen only through the shared
/// [`WindowManager`] stacking counter.
pub struct WindowController {
    core: Rc<RefCell<WindowCore>>,
}

impl WindowController {
    /// Create a window and run its mount sequence.
    ///
    /// When any required host collaborator (boundary, offset origin, own
    /// rect) cannot be resolved, the controller comes back permanently
    /// invalid rather than panicking: every operation on it is a no-op.
    pub fn mount(
        options: WindowOptions,
        bindings: HostBindings,
        manager: Option<Rc<WindowManager>>,
    ) -> Self {
        let core = Rc::new(RefCell::new(WindowCore::new(options, bindings, manager)));
        if let Some((manager, handle)) = WindowCore::mount(&core) {
            manager.register(handle);
        }
        Self { core }
    }

    // --- Read-only surface --------------------------------------------

    /// The window identity (may be empty for a standalone window).
    #[must_use]
    pub fn id(&self) -> String {
        self.core.borrow().id.clone()
    }

    /// The window title.
    #[must_use]
    pub fn title(&self) -> String {
        self.core.borrow().options.title.clone()
    }

    /// Current style values for the rendering layer.
    #[must_use]
    pub fn style(&self) -> WindowStyle {
        self.core.borrow().style.clone()
    }

    /// Current absolute rect.
    #[must_use]
    pub fn rect(&self) -> Rect {
        self.core.borrow().rect
    }

    /// Current stacking value.
    #[must_use]
    pub fn z_index(&self) -> i32 {
        self.core.borrow().style.z_index
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        self.core.borrow().lifecycle
    }

    /// False when mount failed to resolve the host collaborators.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.core.borrow().valid
    }

    /// True once the mount sequence completed.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.core.borrow().initialized
    }

    /// True after `close()`.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.lifecycle() == Lifecycle::Closed
    }

    /// True while maximized.
    #[must_use]
    pub fn maximized(&self) -> bool {
        self.lifecycle() == Lifecycle::Maximized
    }

    /// True while minimized.
    #[must_use]
    pub fn minimized(&self) -> bool {
        self.lifecycle() == Lifecycle::Minimized
    }

    /// True while a drag is in progress.
    #[must_use]
    pub fn dragging(&self) -> bool {
        matches!(self.core.borrow().interaction, Interaction::Dragging { .. })
    }

    /// True while a resize is in progress.
    #[must_use]
    pub fn resizing(&self) -> bool {
        matches!(self.core.borrow().interaction, Interaction::Resizing { .. })
    }

    /// Whether the host should offer the close affordance.
    #[must_use]
    pub fn allow_close(&self) -> bool {
        self.core.borrow().options.allow_close
    }

    /// Whether a drag may start right now.
    #[must_use]
    pub fn draggable(&self) -> bool {
        self.core.borrow().draggable()
    }

    /// Whether a resize may start right now.
    #[must_use]
    pub fn resizable(&self) -> bool {
        self.core.borrow().resizable()
    }

    /// Whether `maximize()` would act right now.
    #[must_use]
    pub fn maximizable(&self) -> bool {
        self.core.borrow().maximizable()
    }

    /// Whether `unmaximize()` would act right now.
    #[must_use]
    pub fn unmaximizable(&self) -> bool {
        self.core.borrow().unmaximizable()
    }

    /// Whether `minimize()` would act right now.
    #[must_use]
    pub fn minimizable(&self) -> bool {
        self.core.borrow().minimizable()
    }

    /// Whether `unminimize()` would act right now.
    #[must_use]
    pub fn unminimizable(&self) -> bool {
        self.core.borrow().unminimizable()
    }

    /// The geometry-changed notification stream.
    #[must_use]
    pub fn on_resized(&self) -> Emitter<WindowResized> {
        self.core.borrow().resized.clone()
    }

    /// The close notification, fired once.
    #[must_use]
    pub fn on_closed(&self) -> Emitter<WindowClosed> {
        self.core.borrow().closed.clone()
    }

    /// A cheap handle suitable for registries and task bars.
    #[must_use]
    pub fn handle(&self) -> WindowHandle {
        let c = self.core.borrow();
        WindowHandle {
            id: c.id.clone(),
            title: c.options.title.clone(),
            core: Rc::downgrade(&self.core),
            resized: c.resized.clone(),
        }
    }

    // --- Lifecycle ----------------------------------------------------

    /// Maximize the window to the boundary.
    pub fn maximize(&self) {
        let emit = self.core.borrow_mut().do_maximize(false);
        emit_resized(&self.core, emit);
    }

    /// Restore the pre-maximize rect, re-clamped against the live boundary.
    pub fn unmaximize(&self) {
        let emit = self.core.borrow_mut().do_unmaximize();
        emit_resized(&self.core, emit);
    }

    /// Minimize. Geometry is retained; no notification fires.
    pub fn minimize(&self) {
        self.core.borrow_mut().do_minimize();
    }

    /// Restore from minimized, re-clamping against the live boundary.
    pub fn unminimize(&self) {
        let emit = self.core.borrow_mut().do_unminimize();
        emit_resized(&self.core, emit);
    }

    /// Unminimize if minimized (and permitted), else bring to front.
    pub fn select(&self) {
        let emit = self.core.borrow_mut().do_select();
        emit_resized(&self.core, emit);
    }

    /// Raise the window if it is not already on top.
    pub fn clicked(&self) {
        self.core.borrow_mut().bring_to_front();
    }

    /// Close the window. Terminal; fires the close notification once and
    /// unregisters from the manager exactly once.
    pub fn close(&self) {
        WindowCore::close(&self.core);
    }

    // --- Interactions -------------------------------------------------

    /// Start dragging from the given pointer position.
    pub fn start_drag(&self, pointer: Point) {
        let started = self.core.borrow_mut().begin_drag(pointer);
        if started {
            subscribe_pointer(&self.core);
        }
    }

    /// Start resizing with the given grip.
    pub fn start_resize(&self, handle: ResizeHandle) {
        let started = self.core.borrow_mut().begin_resize(handle);
        if started {
            subscribe_pointer(&self.core);
        }
    }
}

impl Drop for WindowController {
    fn drop(&mut self) {
        let (manager, id) = {
            let mut c = self.core.borrow_mut();
            c.release_interaction();
            c.release_viewport();
            (c.manager.take(), c.id.clone())
        };
        if let Some(manager) = manager {
            manager.unregister(&id);
        }
    }
}

/// A cheap, cloneable reference to a live window.
///
/// Held by the [`WindowManager`] registry and usable by host chrome (task
/// bars, window lists). Holds only a weak reference: once the controller is
/// dropped every operation becomes a silent no-op.
#[derive(Clone)]
pub struct WindowHandle {
    id: String,
    title: String,
    core: Weak<RefCell<WindowCore>>,
    resized: Emitter<WindowResized>,
}

impl WindowHandle {
    /// The window identity.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The window title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// True while the controller is still alive.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.core.strong_count() > 0
    }

    /// The window's geometry-changed notification stream.
    #[must_use]
    pub fn on_resized(&self) -> Emitter<WindowResized> {
        self.resized.clone()
    }

    /// Raise the window if it is not already on top.
    pub fn bring_to_front(&self) {
        if let Some(core) = self.core.upgrade() {
            core.borrow_mut().bring_to_front();
        }
    }

    /// Unminimize if minimized (and permitted), else bring to front.
    pub fn select(&self) {
        if let Some(core) = self.core.upgrade() {
            let emit = core.borrow_mut().do_select();
            emit_resized(&core, emit);
        }
    }

    /// Maximize the window.
    pub fn maximize(&self) {
        if let Some(core) = self.core.upgrade() {
            let emit = core.borrow_mut().do_maximize(false);
            emit_resized(&core, emit);
        }
    }

    /// Restore from maximized.
    pub fn unmaximize(&self) {
        if let Some(core) = self.core.upgrade() {
            let emit = core.borrow_mut().do_unmaximize();
            emit_resized(&core, emit);
        }
    }

    /// Minimize the window.
    pub fn minimize(&self) {
        if let Some(core) = self.core.upgrade() {
            core.borrow_mut().do_minimize();
        }
    }

    /// Restore from minimized.
    pub fn unminimize(&self) {
        if let Some(core) = self.core.upgrade() {
            let emit = core.borrow_mut().do_unminimize();
            emit_resized(&core, emit);
        }
    }

    /// Close the window.
    pub fn close(&self) {
        if let Some(core) = self.core.upgrade() {
            WindowCore::close(&core);
        }
    }

    /// A handle with no backing window, for registry tests.
    #[cfg(test)]
    pub(crate) fn detached(id: String, title: String) -> Self {
        Self {
            id,
            title,
            core: Weak::new(),
            resized: Emitter::new(),
        }
    }
}

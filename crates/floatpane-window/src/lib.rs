#![forbid(unsafe_code)]

//! Window controller and window manager.
//!
//! # Role in floatpane
//! `floatpane-window` owns the per-window state machine (lifecycle,
//! interactions, geometry) and the manager that coordinates identities and
//! stacking order across windows. It talks to the host only through the
//! [`HostSurface`] rect queries and the pointer/viewport emitters, so it has
//! no opinion about how windows are drawn.
//!
//! # Primary responsibilities
//! - **WindowController**: mount/teardown, maximize/minimize/close, drag and
//!   resize interactions, style output.
//! - **WindowManager**: registry of live windows, identity issue, and the
//!   monotonically increasing stacking counter.
//!
//! # Concurrency model
//! Single-threaded and event-driven: every transition runs synchronously on
//! a lifecycle call, a pointer event, or a viewport-resize signal. The
//! manager's counters are the only state shared across windows.

pub mod config;
pub mod controller;
pub mod host;
pub mod manager;
pub mod style;

pub use config::WindowOptions;
pub use controller::{
    Interaction, Lifecycle, WindowClosed, WindowController, WindowHandle, WindowResized,
};
pub use host::{HostBindings, HostSurface, OffsetOrigin, ViewportResized};
pub use manager::WindowManager;
pub use style::WindowStyle;

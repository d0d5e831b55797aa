//! Drag, resize, and stacking interaction tests, driven through the pointer
//! stream the way a host would.

mod common;

use std::rc::Rc;

use common::{Fixture, counter};
use floatpane_core::{Point, PointerEvent, Rect, ResizeHandle};
use floatpane_window::{WindowController, WindowManager, WindowOptions};

fn mounted(fixture: &Fixture, rect: Rect) -> WindowController {
    fixture.surface.window.set(Some(rect));
    WindowController::mount(WindowOptions::new(), fixture.bindings(), None)
}

#[test]
fn drag_follows_the_pointer_within_the_boundary() {
    let fixture = Fixture::new();
    let window = mounted(&fixture, Rect::new(100.0, 100.0, 200.0, 200.0));
    let resizes = counter(&window.on_resized());

    // Grab 10px right of and 5px below the origin.
    window.start_drag(Point::new(110.0, 105.0));
    assert!(window.dragging());
    assert_eq!(fixture.pointer.subscriber_count(), 1);

    fixture.pointer.emit(&PointerEvent::moved(310.0, 205.0));
    assert_eq!(window.rect(), Rect::new(300.0, 200.0, 200.0, 200.0));
    assert_eq!(resizes.get(), 1);

    // Push far past the corner: pinned inside the 800x600 boundary.
    fixture.pointer.emit(&PointerEvent::moved(5000.0, 5000.0));
    assert_eq!(window.rect(), Rect::new(600.0, 400.0, 200.0, 200.0));
    assert_eq!(resizes.get(), 2);

    // Drag frames update position only.
    assert_eq!(window.style().left, "600px");
    assert_eq!(window.style().width, "200px");

    fixture.pointer.emit(&PointerEvent::up(5000.0, 5000.0));
    assert!(!window.dragging());
    assert_eq!(fixture.pointer.subscriber_count(), 0);

    // The stream is released: further moves change nothing.
    fixture.pointer.emit(&PointerEvent::moved(0.0, 0.0));
    assert_eq!(window.rect(), Rect::new(600.0, 400.0, 200.0, 200.0));
}

#[test]
fn drag_with_fractional_geometry_stays_contained() {
    let fixture = Fixture::new();
    // A boundary-wide window mounted from a non-representable left edge.
    let window = mounted(&fixture, Rect::new(568.79, 0.0, 802.75, 40.0));
    let boundary = Rect::new(0.0, 0.0, 800.0, 600.0);
    assert!(boundary.contains_rect(&window.rect()));

    window.start_drag(Point::new(0.0, 0.0));
    fixture.pointer.emit(&PointerEvent::moved(123.456, 78.9));

    assert!(boundary.contains_rect(&window.rect()));
    assert_eq!(window.rect().right(), 800.0);
}

#[test]
fn drag_requires_normal_lifecycle_and_permission() {
    let fixture = Fixture::new();
    let window = WindowController::mount(
        WindowOptions::new().allow_drag(false),
        fixture.bindings(),
        None,
    );
    window.start_drag(Point::new(10.0, 10.0));
    assert!(!window.dragging());
    assert_eq!(fixture.pointer.subscriber_count(), 0);

    let fixture = Fixture::new();
    let window = WindowController::mount(WindowOptions::new(), fixture.bindings(), None);
    window.maximize();
    window.start_drag(Point::new(10.0, 10.0));
    assert!(!window.dragging());
    assert_eq!(fixture.pointer.subscriber_count(), 0);
}

#[test]
fn resize_left_grip_keeps_the_right_edge_at_the_minimum() {
    let fixture = Fixture::new();
    let window = mounted(&fixture, Rect::new(100.0, 100.0, 200.0, 200.0));

    window.start_resize(ResizeHandle::L);
    assert!(window.resizing());

    fixture.pointer.emit(&PointerEvent::moved(50.0, 150.0));
    assert_eq!(window.rect().left, 50.0);
    assert_eq!(window.rect().width, 250.0);

    // Right edge is at 300; pushing past the minimum pins width at 150.
    fixture.pointer.emit(&PointerEvent::moved(280.0, 150.0));
    assert_eq!(window.rect().width, 150.0);
    assert_eq!(window.rect().left, 150.0);
    assert_eq!(window.rect().right(), 300.0);

    fixture.pointer.emit(&PointerEvent::up(280.0, 150.0));
    assert!(!window.resizing());
    assert_eq!(fixture.pointer.subscriber_count(), 0);
}

#[test]
fn resize_corner_moves_both_axes() {
    let fixture = Fixture::new();
    let window = mounted(&fixture, Rect::new(100.0, 100.0, 200.0, 200.0));
    let resizes = counter(&window.on_resized());

    window.start_resize(ResizeHandle::Br);
    fixture.pointer.emit(&PointerEvent::moved(450.0, 520.0));

    assert_eq!(window.rect(), Rect::new(100.0, 100.0, 350.0, 420.0));
    assert_eq!(window.style().width, "350px");
    assert_eq!(window.style().height, "420px");
    assert_eq!(resizes.get(), 1);
}

#[test]
fn resize_pointer_is_clamped_to_the_boundary() {
    let fixture = Fixture::new();
    let window = mounted(&fixture, Rect::new(100.0, 100.0, 200.0, 200.0));

    window.start_resize(ResizeHandle::R);
    fixture.pointer.emit(&PointerEvent::moved(5000.0, 100.0));
    assert_eq!(window.rect().right(), 800.0);
}

#[test]
fn interactions_are_mutually_exclusive() {
    let fixture = Fixture::new();
    let window = mounted(&fixture, Rect::new(100.0, 100.0, 200.0, 200.0));

    window.start_resize(ResizeHandle::R);
    window.start_drag(Point::new(110.0, 105.0));
    assert!(window.resizing());
    assert!(!window.dragging());
    assert_eq!(fixture.pointer.subscriber_count(), 1);

    // Lifecycle transitions are blocked while an interaction is active.
    window.maximize();
    assert!(!window.maximized());
    window.minimize();
    assert!(!window.minimized());
}

#[test]
fn close_mid_drag_releases_the_pointer_stream() {
    let fixture = Fixture::new();
    let manager = Rc::new(WindowManager::new());
    fixture
        .surface
        .window
        .set(Some(Rect::new(100.0, 100.0, 200.0, 200.0)));
    let window = WindowController::mount(
        WindowOptions::new(),
        fixture.bindings(),
        Some(Rc::clone(&manager)),
    );

    window.start_drag(Point::new(110.0, 105.0));
    assert_eq!(fixture.pointer.subscriber_count(), 1);

    window.close();
    assert!(!window.dragging());
    assert_eq!(fixture.pointer.subscriber_count(), 0);
    assert!(manager.is_empty());
}

#[test]
fn bring_to_front_issues_at_most_one_value() {
    let fixture = Fixture::new();
    let manager = Rc::new(WindowManager::new());
    let first = WindowController::mount(
        WindowOptions::new(),
        fixture.bindings(),
        Some(Rc::clone(&manager)),
    );
    let second = WindowController::mount(
        WindowOptions::new(),
        fixture.bindings(),
        Some(Rc::clone(&manager)),
    );
    assert_eq!((first.z_index(), second.z_index()), (1, 2));

    // Raising the back window issues exactly one value.
    first.clicked();
    assert_eq!(first.z_index(), 3);
    assert_eq!(manager.current_top(), 3);

    // Clicking the already-top window again issues nothing.
    first.clicked();
    first.clicked();
    assert_eq!(first.z_index(), 3);
    assert_eq!(manager.current_top(), 3);

    second.clicked();
    assert_eq!(second.z_index(), 4);
}

#[test]
fn standalone_window_ignores_stacking() {
    let fixture = Fixture::new();
    let window = WindowController::mount(WindowOptions::new(), fixture.bindings(), None);
    window.clicked();
    assert_eq!(window.z_index(), 1);
}

#[test]
fn drag_raises_the_window_first() {
    let fixture = Fixture::new();
    let manager = Rc::new(WindowManager::new());
    let first = WindowController::mount(
        WindowOptions::new(),
        fixture.bindings(),
        Some(Rc::clone(&manager)),
    );
    let _second = WindowController::mount(
        WindowOptions::new(),
        fixture.bindings(),
        Some(Rc::clone(&manager)),
    );

    first.start_drag(Point::new(10.0, 10.0));
    assert_eq!(first.z_index(), 3);
}

#[test]
fn select_unminimizes_or_raises_through_the_handle() {
    let fixture = Fixture::new();
    let manager = Rc::new(WindowManager::new());
    let window = WindowController::mount(
        WindowOptions::new(),
        fixture.bindings(),
        Some(Rc::clone(&manager)),
    );
    let _other = WindowController::mount(
        WindowOptions::new(),
        fixture.bindings(),
        Some(Rc::clone(&manager)),
    );

    window.minimize();
    let handle = manager.find(&window.id()).expect("registered window");
    handle.select();
    assert!(!window.minimized());
    // Unminimize brought it to the front.
    assert_eq!(window.z_index(), 3);

    // Already on top and not minimized: selecting again changes nothing.
    handle.select();
    assert_eq!(window.z_index(), 3);
    assert_eq!(manager.current_top(), 3);
}

#[test]
fn handles_outlive_their_window_as_noops() {
    let fixture = Fixture::new();
    let manager = Rc::new(WindowManager::new());
    let handle = {
        let window = WindowController::mount(
            WindowOptions::new(),
            fixture.bindings(),
            Some(Rc::clone(&manager)),
        );
        window.handle()
    };

    assert!(!handle.is_live());
    // Silent no-ops, never panics.
    handle.maximize();
    handle.minimize();
    handle.select();
    handle.bring_to_front();
    handle.close();
}

#[test]
fn down_events_mid_interaction_are_ignored() {
    let fixture = Fixture::new();
    let window = mounted(&fixture, Rect::new(100.0, 100.0, 200.0, 200.0));

    window.start_drag(Point::new(110.0, 105.0));
    fixture.pointer.emit(&PointerEvent::down(400.0, 400.0));
    assert!(window.dragging());
    assert_eq!(window.rect(), Rect::new(100.0, 100.0, 200.0, 200.0));
}

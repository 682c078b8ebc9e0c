//! Pointer-driven drag gestures: modifier policy, capture forwarding, and
//! incremental selection.

use std::time::Instant;

use marquee_select::{
    DragController, Modifiers, Point, PressOutcome, Rect, SelectorConfig,
};

use crate::helpers::MockHost;

fn attach(host: &mut MockHost) -> DragController {
    DragController::attach(host, &SelectorConfig::default()).expect("attach should succeed")
}

fn ctrl() -> Modifiers {
    Modifiers {
        control: true,
        shift: false,
    }
}

fn shift() -> Modifiers {
    Modifiers {
        control: false,
        shift: true,
    }
}

/// The walkthrough scenario: A at (10,10,20,20), B at (50,50,20,20).
fn two_item_host() -> MockHost {
    MockHost::new()
        .with_item(Rect::new(10.0, 10.0, 20.0, 20.0))
        .with_item(Rect::new(50.0, 50.0, 20.0, 20.0))
}

#[test]
fn test_plain_drag_selects_and_deselects_incrementally() {
    let mut host = two_item_host();
    let mut controller = attach(&mut host);
    let now = Instant::now();

    controller.on_pointer_down(&mut host, Point::new(5.0, 5.0), Modifiers::none());
    assert!(controller.state().is_dragging());

    controller.on_pointer_move(&mut host, Point::new(35.0, 35.0), now);
    assert!(host.selected(0));
    assert!(!host.selected(1));

    controller.on_pointer_move(&mut host, Point::new(55.0, 55.0), now);
    assert!(host.selected(0));
    assert!(host.selected(1));

    // Shrinking back: B leaves the rectangle, A stays.
    controller.on_pointer_move(&mut host, Point::new(40.0, 40.0), now);
    assert!(host.selected(0));
    assert!(!host.selected(1));

    controller.on_pointer_up(&mut host);
    assert!(controller.state().is_idle());
    // The last computed selection stands after the gesture.
    assert!(host.selected(0));
    assert!(!host.selected(1));
}

#[test]
fn test_plain_press_clears_existing_selection() {
    let mut host = two_item_host();
    host.items[1].selected = true;
    let mut controller = attach(&mut host);

    controller.on_pointer_down(&mut host, Point::new(5.0, 5.0), Modifiers::none());
    assert_eq!(host.clear_count, 1);
    assert!(!host.selected(1));
}

#[test]
fn test_shift_drag_preserves_untouched_selection() {
    let mut host = two_item_host();
    host.items[0].selected = true;
    let mut controller = attach(&mut host);
    let now = Instant::now();

    // Rectangle stays in the lower-right corner, never visiting A.
    controller.on_pointer_down(&mut host, Point::new(80.0, 80.0), shift());
    controller.on_pointer_move(&mut host, Point::new(95.0, 95.0), now);
    controller.on_pointer_up(&mut host);

    assert_eq!(host.clear_count, 0);
    assert!(host.selected(0));
}

#[test]
fn test_ctrl_press_captures_without_starting_a_drag() {
    let mut host = two_item_host();
    let mut controller = attach(&mut host);
    let now = Instant::now();

    controller.on_pointer_down(&mut host, Point::new(5.0, 5.0), ctrl());
    assert!(controller.state().is_idle());
    assert_eq!(host.clear_count, 0);
    assert_eq!(host.capture_count, 1);

    // Moves do nothing without a gesture.
    controller.on_pointer_move(&mut host, Point::new(55.0, 55.0), now);
    assert!(!host.selected(0));
    assert!(!host.selected(1));

    // But the captured pointer is still released on pointer-up.
    controller.on_pointer_up(&mut host);
    assert_eq!(host.release_count, 1);
}

#[test]
fn test_press_outside_content_area_is_ignored() {
    let mut host = two_item_host();
    let mut controller = attach(&mut host);

    // On the scrollbar, to the right of the content area.
    controller.on_pointer_down(&mut host, Point::new(150.0, 50.0), Modifiers::none());
    assert!(controller.state().is_idle());
    assert_eq!(host.capture_count, 0);
    assert!(host.forwarded_presses.is_empty());
}

#[test]
fn test_press_is_forwarded_before_capture() {
    let mut host = two_item_host();
    let mut controller = attach(&mut host);

    controller.on_pointer_down(&mut host, Point::new(5.0, 5.0), Modifiers::none());
    assert_eq!(host.forwarded_presses, vec![Point::new(5.0, 5.0)]);
    assert_eq!(host.capture_count, 1);
    assert_eq!(host.focus_count, 1);
}

#[test]
fn test_nested_control_keeps_capture_and_suppresses_tracking() {
    let mut host = two_item_host().with_control(Rect::new(0.0, 0.0, 20.0, 20.0));
    host.press_outcome = PressOutcome::ClaimedElsewhere;
    let mut controller = attach(&mut host);
    let now = Instant::now();

    controller.on_pointer_down(&mut host, Point::new(5.0, 5.0), Modifiers::none());

    // The control's interaction wins: no capture for the drag, no
    // rectangle tracking on subsequent moves.
    assert_eq!(host.capture_count, 0);
    controller.on_pointer_move(&mut host, Point::new(90.0, 90.0), now);
    assert!(!host.selected(0));
    assert!(!host.selected(1));

    // The gesture bookkeeping still ran for the plain press: selection
    // cleared, overlay enabled. Long-standing behavior, kept on purpose.
    assert_eq!(host.clear_count, 1);
    assert!(controller.state().is_dragging());
    assert!(controller.overlay().is_enabled());

    // Pointer-up ends the gesture without releasing capture we never held.
    controller.on_pointer_up(&mut host);
    assert_eq!(host.release_count, 0);
    assert!(!controller.overlay().is_enabled());
}

#[test]
fn test_pointer_up_is_idempotent() {
    let mut host = two_item_host();
    let mut controller = attach(&mut host);
    let now = Instant::now();

    controller.on_pointer_down(&mut host, Point::new(5.0, 5.0), Modifiers::none());
    controller.on_pointer_move(&mut host, Point::new(35.0, 35.0), now);
    controller.on_pointer_up(&mut host);
    controller.on_pointer_up(&mut host);

    assert_eq!(host.release_count, 1);
    assert!(controller.state().is_idle());
    assert!(!controller.overlay().is_enabled());
    assert!(host.selected(0));
}

#[test]
fn test_selection_monotonic_under_growing_rectangle() {
    let mut host = MockHost::new()
        .with_item(Rect::new(10.0, 10.0, 10.0, 10.0))
        .with_item(Rect::new(30.0, 30.0, 10.0, 10.0))
        .with_item(Rect::new(50.0, 50.0, 10.0, 10.0))
        .with_item(Rect::new(70.0, 70.0, 10.0, 10.0));
    let mut controller = attach(&mut host);
    let now = Instant::now();

    controller.on_pointer_down(&mut host, Point::new(5.0, 5.0), Modifiers::none());

    let mut ever_selected = vec![false; 4];
    for step in [25.0, 45.0, 65.0, 85.0] {
        controller.on_pointer_move(&mut host, Point::new(step, step), now);
        for (index, flag) in ever_selected.iter_mut().enumerate() {
            *flag |= host.selected(index);
        }
    }
    controller.on_pointer_up(&mut host);

    // The rectangle only ever grew, so everything it touched is still
    // selected at the end.
    for (index, flag) in ever_selected.iter().enumerate() {
        assert!(*flag, "item {index} was never selected");
        assert!(host.selected(index));
    }
}

#[test]
fn test_items_never_visited_keep_their_state() {
    let mut host = MockHost::new()
        .with_item(Rect::new(10.0, 10.0, 10.0, 10.0))
        .with_item(Rect::new(80.0, 10.0, 10.0, 10.0))
        .with_item(Rect::new(80.0, 80.0, 10.0, 10.0));
    host.items[1].selected = true;
    let mut controller = attach(&mut host);
    let now = Instant::now();

    // Shift-drag sweeping only the left column.
    controller.on_pointer_down(&mut host, Point::new(5.0, 5.0), shift());
    controller.on_pointer_move(&mut host, Point::new(30.0, 95.0), now);
    controller.on_pointer_move(&mut host, Point::new(15.0, 15.0), now);
    controller.on_pointer_up(&mut host);

    assert!(host.selected(1), "pre-selected item outside the drag");
    assert!(!host.selected(2), "unselected item outside the drag");
}

#[test]
fn test_overlay_tracks_the_rectangle() {
    let mut host = two_item_host();
    let mut controller = attach(&mut host);
    let now = Instant::now();

    assert!(!controller.overlay().is_enabled());

    controller.on_pointer_down(&mut host, Point::new(20.0, 30.0), Modifiers::none());
    assert!(controller.overlay().is_enabled());

    controller.on_pointer_move(&mut host, Point::new(60.0, 10.0), now);
    assert_eq!(controller.overlay().area(), Rect::new(20.0, 10.0, 40.0, 20.0));

    controller.on_pointer_up(&mut host);
    assert!(!controller.overlay().is_enabled());
}

#[test]
fn test_unrealized_items_are_never_touched() {
    let mut host = MockHost::new()
        .with_unrealized_item()
        .with_item(Rect::new(10.0, 10.0, 20.0, 20.0));
    let mut controller = attach(&mut host);
    let now = Instant::now();

    controller.on_pointer_down(&mut host, Point::new(5.0, 5.0), Modifiers::none());
    controller.on_pointer_move(&mut host, Point::new(95.0, 95.0), now);
    controller.on_pointer_up(&mut host);

    assert!(!host.selected(0));
    assert!(host.selected(1));
}

//! Per-widget enable/disable and lifecycle bookkeeping.

use std::time::Instant;

use marquee_select::{Modifiers, Point, Rect, SelectorConfig, SelectorRegistry};

use crate::helpers::MockHost;

const WIDGET: u64 = 7;

#[test]
fn test_enable_attaches_and_promotes_multi_selection() {
    let mut host = MockHost::new();
    let mut registry = SelectorRegistry::new();

    assert!(registry.set_enabled(&mut host, WIDGET, true, &SelectorConfig::default()));
    assert!(registry.is_enabled(WIDGET));
    assert!(host.multi_selection);
    assert!(registry.controller(WIDGET).is_some());
}

#[test]
fn test_enable_twice_is_a_noop() {
    let mut host = MockHost::new();
    let mut registry = SelectorRegistry::new();
    let config = SelectorConfig::default();

    registry.set_enabled(&mut host, WIDGET, true, &config);
    assert!(registry.set_enabled(&mut host, WIDGET, true, &config));
    assert!(registry.is_enabled(WIDGET));
}

#[test]
fn test_enable_fails_quietly_without_scroll_content() {
    let mut host = MockHost::without_scroll_content();
    let mut registry = SelectorRegistry::new();

    // "Not applicable here": no panic, no error surfaced, just disabled.
    assert!(!registry.set_enabled(&mut host, WIDGET, true, &SelectorConfig::default()));
    assert!(!registry.is_enabled(WIDGET));
    assert!(registry.controller(WIDGET).is_none());
}

#[test]
fn test_disable_mid_drag_releases_capture() {
    let mut host = MockHost::new().with_item(Rect::new(10.0, 10.0, 20.0, 20.0));
    let mut registry = SelectorRegistry::new();
    let config = SelectorConfig::default();
    registry.set_enabled(&mut host, WIDGET, true, &config);

    let controller = registry.controller_mut(WIDGET).unwrap();
    controller.on_pointer_down(&mut host, Point::new(5.0, 5.0), Modifiers::none());
    controller.on_pointer_move(&mut host, Point::new(40.0, 40.0), Instant::now());
    assert!(host.captured);

    registry.set_enabled(&mut host, WIDGET, false, &config);
    assert!(!registry.is_enabled(WIDGET));
    assert!(!host.captured);
    assert_eq!(host.release_count, 1);
}

#[test]
fn test_widget_detach_releases_capture() {
    let mut host = MockHost::new();
    let mut registry = SelectorRegistry::new();
    registry.set_enabled(&mut host, WIDGET, true, &SelectorConfig::default());

    let controller = registry.controller_mut(WIDGET).unwrap();
    controller.on_pointer_down(&mut host, Point::new(5.0, 5.0), Modifiers::none());
    assert!(host.captured);

    registry.on_widget_detached(&mut host, WIDGET);
    assert!(!registry.is_enabled(WIDGET));
    assert!(!host.captured);
}

#[test]
fn test_disable_when_never_enabled_is_a_noop() {
    let mut host = MockHost::new();
    let mut registry = SelectorRegistry::new();

    assert!(!registry.set_enabled(&mut host, WIDGET, false, &SelectorConfig::default()));
    assert_eq!(host.release_count, 0);
}

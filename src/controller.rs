//! The drag lifecycle: pointer capture, modifier policy, start/move/stop.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Dragging     (pointer down inside the content area, Ctrl not held)
//! Dragging -> Idle     (pointer up, detach)
//! ```
//!
//! Capture and the drag state are deliberately separate. Forwarding the
//! consumed press to a nested control can hand pointer capture to that
//! control, yet the gesture bookkeeping (selection clear, overlay enable)
//! still runs for a plain press; the captured flag then gates pointer-move
//! processing so the rectangle never actually tracks. This mirrors the
//! long-standing behavior of the mechanism and is kept intentionally.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::autoscroll::AutoScroller;
use crate::error::AttachError;
use crate::geometry::{Point, Rect};
use crate::hit::ItemsSelector;
use crate::host::{ElementNode, ElementRole, Modifiers, PressOutcome, ScrollChange, SelectionHost};
use crate::overlay::{OverlayStyle, SelectionOverlay};
use crate::tree;

/// Tunables for one attached controller.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Auto-scroll repeat interval. `None` derives it from the host's
    /// key-repeat speed.
    pub tick_interval: Option<Duration>,
    pub overlay: OverlayStyle,
}

/// Whether a rectangle gesture is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        /// Pointer-down position in content space at the time of the
        /// press; re-anchored by the cumulative scroll offset on every
        /// recompute.
        start: Point,
        /// Latest pointer position in content space.
        end: Point,
    },
}

impl DragState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}

/// Orchestrates rectangle selection for one host widget.
///
/// The host forwards pointer events, scroll-changed notifications, and
/// timer polls; the controller drives the auto-scroller, the incremental
/// selector, and the overlay in response.
#[derive(Debug)]
pub struct DragController {
    state: DragState,
    captured: bool,
    auto_scroller: AutoScroller,
    selector: ItemsSelector,
    overlay: SelectionOverlay,
}

impl DragController {
    /// Attaches the mechanism to a host widget.
    ///
    /// Fails if the widget's composition tree has no scroll-content
    /// element; a widget without one cannot host the gesture. On success
    /// the host is promoted to multi-selection.
    pub fn attach<H: SelectionHost>(
        host: &mut H,
        config: &SelectorConfig,
    ) -> Result<Self, AttachError> {
        if tree::find_descendant(host.root(), |n| n.role() == ElementRole::ScrollContent)
            .is_none()
        {
            return Err(AttachError::MissingScrollContent);
        }

        host.ensure_multi_selection();

        let interval = config
            .tick_interval
            .unwrap_or_else(|| AutoScroller::repeat_interval(host.key_repeat_speed()));
        debug!(?interval, "attached rectangle selection");

        Ok(Self {
            state: DragState::Idle,
            captured: false,
            auto_scroller: AutoScroller::new(interval),
            selector: ItemsSelector::new(),
            overlay: SelectionOverlay::new(config.overlay),
        })
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    /// The overlay rectangle the host should render.
    pub fn overlay(&self) -> &SelectionOverlay {
        &self.overlay
    }

    /// Cumulative scroll offset accumulated during the current drag.
    pub fn scroll_offset(&self) -> Point {
        self.auto_scroller.offset()
    }

    /// Handles a pointer press.
    ///
    /// Presses outside the content area (on a scrollbar, say) are ignored.
    /// Otherwise the press is forwarded to whatever sits under the pointer
    /// first; a nested control claiming capture for itself wins over the
    /// rectangle. Ctrl-press leaves the gesture to the host's default
    /// click handling; any other press starts the rectangle, clearing the
    /// selection unless Shift preserves it.
    pub fn on_pointer_down<H: SelectionHost>(
        &mut self,
        host: &mut H,
        position: Point,
        modifiers: Modifiers,
    ) {
        let size = host.content_size();
        let inside = position.x >= 0.0
            && position.x < size.width
            && position.y >= 0.0
            && position.y < size.height;
        if !inside {
            return;
        }

        self.captured = self.try_capture(host, position);

        if !modifiers.control {
            self.start_selection(host, position, modifiers);
        }
    }

    /// Handles pointer movement while the gesture holds capture.
    pub fn on_pointer_move<H: SelectionHost>(
        &mut self,
        host: &mut H,
        position: Point,
        now: Instant,
    ) {
        if !self.captured {
            return;
        }
        let DragState::Dragging { end, .. } = &mut self.state else {
            return;
        };
        *end = position;

        self.auto_scroller.update(host, position, now);
        self.refresh_selection(host);
    }

    /// Ends the gesture. Idempotent; the last computed selection stands.
    ///
    /// Capture is released even when no rectangle ever started (a
    /// Ctrl-press captures the pointer without starting the gesture).
    pub fn on_pointer_up<H: SelectionHost>(&mut self, host: &mut H) {
        if self.captured {
            self.captured = false;
            host.release_pointer();
        }
        if self.state.is_idle() {
            return;
        }
        self.stop_selection();
    }

    /// Handles a scroll-position-changed notification from the host.
    ///
    /// The previous hit-test rectangle shifts opposite to the scroll, and
    /// the selection re-evaluates even without pointer movement: scrolling
    /// alone changes which items fall under a stationary rectangle.
    pub fn on_scroll_changed<H: SelectionHost>(&mut self, host: &mut H, change: ScrollChange) {
        let delta = self
            .auto_scroller
            .on_scroll_changed(host, &change, &mut self.selector);
        if delta.is_some() {
            self.refresh_selection(host);
        }
    }

    /// Drives the auto-scroll repeat timer; the host calls this from its
    /// event loop. Returns true if a tick fired.
    pub fn poll<H: SelectionHost>(&mut self, host: &mut H, now: Instant) -> bool {
        self.auto_scroller.poll(host, now)
    }

    /// Detaches from the widget, releasing capture on every exit path so
    /// the widget is never left captured forever.
    pub fn detach<H: SelectionHost>(&mut self, host: &mut H) {
        if self.captured {
            self.captured = false;
            host.release_pointer();
        }
        self.stop_selection();
        debug!("detached rectangle selection");
    }

    // Lets the element under the pointer respond to the press we consumed
    // before claiming capture for the drag. If that element (or anything
    // that is not the list itself) takes capture, the controller yields.
    fn try_capture<H: SelectionHost>(&self, host: &mut H, position: Point) -> bool {
        if tree::hit_test(host.root(), position).is_some() {
            if host.forward_press(position) == PressOutcome::ClaimedElsewhere {
                return false;
            }
        }
        host.capture_pointer()
    }

    fn start_selection<H: SelectionHost>(
        &mut self,
        host: &mut H,
        position: Point,
        modifiers: Modifiers,
    ) {
        trace!(x = position.x, y = position.y, "start rectangle");

        // The press never reached the list, so hand it focus manually.
        host.focus();

        self.state = DragState::Dragging {
            start: position,
            end: position,
        };

        if modifiers.is_plain() {
            host.clear_selection();
        }

        self.selector.reset();
        self.refresh_selection(host);

        self.overlay.set_enabled(true);
        self.auto_scroller.set_enabled(true);
    }

    // Disable the timer before dropping the drag state it reads.
    fn stop_selection(&mut self) {
        trace!("stop rectangle");
        self.auto_scroller.set_enabled(false);
        self.overlay.set_enabled(false);
        self.state = DragState::Idle;
    }

    // Recomputes the selection area from the (offset-translated) anchor and
    // the latest pointer position, then runs a hit-test pass in the item
    // container's space.
    fn refresh_selection<H: SelectionHost>(&mut self, host: &mut H) {
        let DragState::Dragging { start, end } = self.state else {
            return;
        };

        let anchor = self.auto_scroller.translate(start);
        let area = Rect::from_corners(anchor, end);
        self.overlay.set_area(area);

        let top_left = host.content_to_items(area.top_left());
        let bottom_right = host.content_to_items(area.bottom_right());
        self.selector
            .update_selection(host, Rect::from_corners(top_left, bottom_right));
    }
}

//! Timer-driven auto-scrolling while the pointer is outside the viewport.
//!
//! The scroller compares the latest pointer position against the content
//! area on each axis independently and issues line-scroll commands through
//! the host. The repeat timer is plain deadline math over `Instant`s passed
//! in by the host's event loop (`poll`), so there is no thread or runtime
//! and tests can drive time explicitly.
//!
//! The timer disarms itself whenever the pointer is back inside the content
//! area. The next excursion then triggers an immediate evaluation through
//! `update` and re-applies the full initial delay, matching the
//! press-and-hold repeat curve users expect.

use std::time::{Duration, Instant};

use crate::constants::{KEYBOARD_SPEED_MAX, MAX_REPEAT_MS, MIN_REPEAT_MS};
use crate::geometry::Point;
use crate::host::{ScrollChange, ScrollDirection, SelectionHost};
use crate::offset::{OffsetDelta, ScrollOffsetListener, ScrollOffsetTracker};

/// Scrolls the host line-by-line while the pointer is dragged outside the
/// content area, and accounts for the resulting scroll offset.
#[derive(Debug)]
pub struct AutoScroller {
    tracker: ScrollOffsetTracker,
    interval: Duration,
    enabled: bool,
    pointer: Point,
    /// Deadline of the next repeat tick; `None` while the timer is
    /// disarmed.
    next_tick: Option<Instant>,
}

impl AutoScroller {
    pub fn new(interval: Duration) -> Self {
        Self {
            tracker: ScrollOffsetTracker::new(),
            interval,
            enabled: false,
            pointer: Point::default(),
            next_tick: None,
        }
    }

    /// Maps the platform keyboard-repeat speed (0 = slow .. 31 = fast) to a
    /// repeat interval, clamped to [33 ms, 400 ms].
    pub fn repeat_interval(key_repeat_speed: u32) -> Duration {
        let speed = u64::from(key_repeat_speed.min(KEYBOARD_SPEED_MAX));
        let span = MAX_REPEAT_MS - MIN_REPEAT_MS;
        let ms = MAX_REPEAT_MS - speed * span / u64::from(KEYBOARD_SPEED_MAX);
        Duration::from_millis(ms.clamp(MIN_REPEAT_MS, MAX_REPEAT_MS))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enables or disables the scroller. Any change disarms the timer and
    /// zeroes the cumulative offset, so each drag starts from a clean
    /// state.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            self.enabled = enabled;
            self.next_tick = None;
            self.tracker.reset();
        }
    }

    /// Current cumulative pixel offset since the scroller was enabled.
    pub fn offset(&self) -> Point {
        self.tracker.offset()
    }

    /// Shifts `point` back by the cumulative offset, keeping the drag
    /// anchor fixed in content space while the viewport scrolls.
    pub fn translate(&self, point: Point) -> Point {
        self.tracker.translate(point)
    }

    /// Records the latest pointer position. If the repeat timer is not
    /// armed, evaluates immediately so the very first out-of-bounds
    /// position scrolls without waiting a full tick.
    pub fn update<H: SelectionHost>(&mut self, host: &mut H, pointer: Point, now: Instant) {
        self.pointer = pointer;

        if self.enabled && self.next_tick.is_none() {
            self.evaluate(host, now);
        }
    }

    /// Fires the repeat tick if its deadline has passed. Returns true if an
    /// evaluation ran.
    pub fn poll<H: SelectionHost>(&mut self, host: &mut H, now: Instant) -> bool {
        match self.next_tick {
            Some(deadline) if self.enabled && now >= deadline => {
                self.evaluate(host, now);
                true
            }
            _ => false,
        }
    }

    /// Applies one scroll change to the offset tracker and notifies the
    /// listener. Scroll events arriving while the scroller is disabled are
    /// ignored; offset accounting only matters during a drag.
    pub fn on_scroll_changed<H, L>(
        &mut self,
        host: &H,
        change: &ScrollChange,
        listener: &mut L,
    ) -> Option<OffsetDelta>
    where
        H: SelectionHost,
        L: ScrollOffsetListener + ?Sized,
    {
        if !self.enabled {
            return None;
        }
        let delta = self.tracker.apply(host, change);
        listener.offset_changed(delta);
        Some(delta)
    }

    // One edge evaluation: scroll a line per out-of-bounds axis, then arm
    // the timer only if something scrolled. Disarming while inside the
    // bounds is what restores the initial delay on the next excursion.
    fn evaluate<H: SelectionHost>(&mut self, host: &mut H, now: Instant) {
        let size = host.content_size();
        let mut scrolled = false;

        if self.pointer.x > size.width {
            host.scroll_line(ScrollDirection::Right);
            scrolled = true;
        } else if self.pointer.x < 0.0 {
            host.scroll_line(ScrollDirection::Left);
            scrolled = true;
        }

        if self.pointer.y > size.height {
            host.scroll_line(ScrollDirection::Down);
            scrolled = true;
        } else if self.pointer.y < 0.0 {
            host.scroll_line(ScrollDirection::Up);
            scrolled = true;
        }

        self.next_tick = if scrolled { Some(now + self.interval) } else { None };
    }
}

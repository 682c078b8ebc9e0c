//! Incremental (hysteresis) selection updates.
//!
//! An item's selected flag is only touched when it newly enters or newly
//! leaves the drag rectangle; everything else is left alone. That is what
//! lets selections made by ordinary clicks outside the rectangle's
//! ever-visited region survive a drag gesture. The previous rectangle is
//! kept in the same viewport-relative space as item bounds, so it must be
//! shifted opposite to content scroll whenever the viewport moves mid-drag.

use crate::geometry::Rect;
use crate::host::SelectionHost;
use crate::offset::{OffsetDelta, ScrollOffsetListener};

/// Updates each realized item's selected flag from the current and previous
/// selection rectangles.
#[derive(Debug, Default)]
pub struct ItemsSelector {
    /// Rectangle used in the most recent pass; `None` until the first pass
    /// after a reset, and `None` never intersects anything.
    previous_area: Option<Rect>,
}

impl ItemsSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets the previous rectangle; called at drag start.
    pub fn reset(&mut self) {
        self.previous_area = None;
    }

    /// Shifts the previous rectangle opposite to a content scroll so it
    /// stays aligned with the (now-moved) viewport-relative item bounds.
    pub fn scroll(&mut self, dx: f32, dy: f32) {
        if let Some(area) = &mut self.previous_area {
            area.offset(-dx, -dy);
        }
    }

    /// Runs one hit-test pass with `area` in the item container's space.
    ///
    /// Realized items intersecting `area` are selected; items that only
    /// intersect the previous rectangle (we selected them last pass, the
    /// rectangle has since moved off) are deselected; all others are left
    /// untouched. Unrealized items are skipped entirely.
    pub fn update_selection<H: SelectionHost>(&mut self, host: &mut H, area: Rect) {
        for index in 0..host.item_count() {
            let Some(bounds) = host.item_bounds(index) else {
                continue;
            };

            if bounds.intersects(&area) {
                host.set_selected(index, true);
            } else if self
                .previous_area
                .is_some_and(|previous| bounds.intersects(&previous))
            {
                host.set_selected(index, false);
            }
        }
        self.previous_area = Some(area);
    }
}

impl ScrollOffsetListener for ItemsSelector {
    fn offset_changed(&mut self, delta: OffsetDelta) {
        self.scroll(delta.horizontal, delta.vertical);
    }
}

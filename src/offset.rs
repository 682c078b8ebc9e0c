//! Cumulative scroll-offset accounting.
//!
//! Converts the host's scroll-changed notifications into a cumulative pixel
//! offset so the drag rectangle's anchor can stay fixed in content space
//! while the viewport scrolls underneath it. Pixel-unit hosts report deltas
//! directly; logical-unit hosts report item counts on the vertical axis,
//! which are converted by summing the realized extents of the items crossed.
//! Unrealized items contribute nothing - an accepted imprecision under
//! virtualization.

use crate::geometry::Point;
use crate::host::{ScrollChange, ScrollUnit, SelectionHost};

/// The pixel delta produced by one applied scroll change.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OffsetDelta {
    pub horizontal: f32,
    pub vertical: f32,
}

/// Observer notified whenever the tracker applies a scroll change.
pub trait ScrollOffsetListener {
    fn offset_changed(&mut self, delta: OffsetDelta);
}

/// Accumulates pixel displacement from scroll changes since the last reset.
#[derive(Debug, Default)]
pub struct ScrollOffsetTracker {
    offset: Point,
}

impl ScrollOffsetTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current cumulative pixel offset.
    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Zeroes the cumulative offset; called whenever a new drag starts.
    pub fn reset(&mut self) {
        self.offset = Point::default();
    }

    /// Returns `point` shifted back by the cumulative offset, mapping a
    /// content-space point recorded at drag start into the current
    /// viewport-relative space.
    pub fn translate(&self, point: Point) -> Point {
        Point::new(point.x - self.offset.x, point.y - self.offset.y)
    }

    /// Applies one scroll change, converting logical vertical deltas into
    /// pixels, and returns the resulting pixel delta.
    pub fn apply<H: SelectionHost>(&mut self, host: &H, change: &ScrollChange) -> OffsetDelta {
        let horizontal = change.horizontal;
        let vertical = match host.scroll_unit() {
            ScrollUnit::Pixel => change.vertical,
            // The vertical offset counts items; walk the realized containers
            // between the old and new offset and sum their extents. The
            // horizontal axis is always pixel-based.
            ScrollUnit::Logical => {
                if change.vertical < 0.0 {
                    let start = change.vertical_offset;
                    let end = change.vertical_offset - change.vertical;
                    -Self::realized_span(host, start, end)
                } else {
                    let start = change.vertical_offset - change.vertical;
                    let end = change.vertical_offset;
                    Self::realized_span(host, start, end)
                }
            }
        };

        self.offset.x += horizontal;
        self.offset.y += vertical;
        OffsetDelta { horizontal, vertical }
    }

    // Sums realized extents over the half-open logical range [start, end).
    fn realized_span<H: SelectionHost>(host: &H, start: f32, end: f32) -> f32 {
        let start = start.max(0.0) as usize;
        let end = end.max(0.0) as usize;
        (start..end).filter_map(|i| host.item_extent(i)).sum()
    }
}

//! Render state for the selection rectangle.
//!
//! The crate does not draw; the host renders the overlay above item content
//! (below modal surfaces) whenever it is enabled. The overlay must never
//! intercept pointer events - when the host models it as an [`ElementNode`],
//! `hit_test_visible` must return false.
//!
//! [`ElementNode`]: crate::host::ElementNode

use serde::{Deserialize, Serialize};

use crate::constants::{OVERLAY_BORDER_WIDTH, OVERLAY_FILL_OPACITY};
use crate::geometry::Rect;

/// Visual style of the selection rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlayStyle {
    /// Opacity of the fill, 0.0 to 1.0; the fill uses the host's highlight
    /// color.
    pub fill_opacity: f32,
    /// Border width in pixels.
    pub border_width: f32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            fill_opacity: OVERLAY_FILL_OPACITY,
            border_width: OVERLAY_BORDER_WIDTH,
        }
    }
}

/// The selection rectangle the host should draw, in scroll-content space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SelectionOverlay {
    enabled: bool,
    area: Rect,
    style: OverlayStyle,
}

impl SelectionOverlay {
    pub fn new(style: OverlayStyle) -> Self {
        Self {
            enabled: false,
            area: Rect::default(),
            style,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
    }

    pub fn style(&self) -> OverlayStyle {
        self.style
    }

    /// The area shifted by half the border width so the border lands on
    /// pixel boundaries and renders crisp.
    pub fn snapped_area(&self) -> Rect {
        let half = self.style.border_width / 2.0;
        let mut area = self.area;
        area.offset(half, half);
        area
    }
}

//! The trait seam to the external list widget.
//!
//! The host owns items, geometry, scrolling, pointer capture, and the
//! selection collection. This crate only ever talks to it through
//! [`SelectionHost`], passed by `&mut` into every entry point for the
//! duration of that call. [`ElementNode`] exposes the widget's composition
//! tree so the controller can locate the scroll-content element at attach
//! time and find the element under the pointer when forwarding a press.

use crate::geometry::{Point, Rect, Size};

/// How the host reports scroll positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollUnit {
    /// Offsets and changes are in pixels.
    Pixel,
    /// Vertical offsets and changes count logical items; the pixel
    /// equivalent must be derived from realized item extents.
    Logical,
}

/// One line-scroll command issued by the auto-scroller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
    Left,
    Right,
}

/// A scroll-position-changed notification from the host.
///
/// `vertical_offset` is the position *after* the change, in the host's
/// scroll unit (see [`SelectionHost::scroll_unit`]). For
/// [`ScrollUnit::Logical`] hosts the horizontal axis is still pixel-based;
/// only the vertical axis counts items.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollChange {
    pub horizontal: f32,
    pub vertical: f32,
    pub vertical_offset: f32,
}

/// Modifier keys held at pointer-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub control: bool,
    pub shift: bool,
}

impl Modifiers {
    pub fn none() -> Self {
        Self::default()
    }

    /// True when neither Ctrl nor Shift is held, i.e. a plain drag that
    /// replaces the current selection.
    pub fn is_plain(&self) -> bool {
        !self.control && !self.shift
    }
}

/// Result of forwarding a synthesized press to the element under the
/// pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// Nobody claimed pointer capture in response to the press.
    Unclaimed,
    /// The list widget itself claimed capture (its default behavior); the
    /// controller may take it over.
    ClaimedByList,
    /// A nested interactive element claimed capture for its own
    /// interaction; the controller must yield.
    ClaimedElsewhere,
}

/// Structural role of a node in the widget's composition tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementRole {
    /// The scrollable content presenter the drag operates inside. Attach
    /// fails if the widget has no such descendant.
    ScrollContent,
    /// A realized list item container.
    Item,
    /// An interactive control (button, link, ...) nested inside an item.
    Control,
    Other,
}

/// One node of the host widget's composition tree.
///
/// Bounds are in scroll-content space; children are assumed clipped to
/// their parent, and later children render on top of earlier ones.
pub trait ElementNode {
    fn role(&self) -> ElementRole;

    fn bounds(&self) -> Rect;

    /// Whether the node participates in hit testing. Render-only surfaces
    /// such as the selection overlay return false.
    fn hit_test_visible(&self) -> bool {
        true
    }

    fn child_count(&self) -> usize;

    fn child(&self, index: usize) -> Option<&Self>
    where
        Self: Sized;
}

/// Everything the drag-selection subsystem needs from the host widget.
///
/// Item queries are index-based; an item whose geometry the host has not
/// realized (virtualized out of view) reports `None` and is skipped for
/// that pass.
pub trait SelectionHost {
    type Node: ElementNode;

    /// Root of the widget's composition tree.
    fn root(&self) -> &Self::Node;

    /// Size of the scrollable content area (the viewport), in pixels.
    fn content_size(&self) -> Size;

    fn item_count(&self) -> usize;

    /// Bounds of a realized item in the item container's coordinate space,
    /// or `None` if the item is not realized.
    fn item_bounds(&self, index: usize) -> Option<Rect>;

    /// Realized height of an item plus its vertical margins, used to
    /// convert logical scroll deltas into pixels. `None` if not realized.
    fn item_extent(&self, index: usize) -> Option<f32>;

    /// Transforms a point from scroll-content space into the item
    /// container's coordinate space.
    fn content_to_items(&self, point: Point) -> Point;

    fn scroll_unit(&self) -> ScrollUnit;

    /// Scrolls the viewport by one line in the given direction.
    fn scroll_line(&mut self, direction: ScrollDirection);

    /// Platform keyboard-repeat speed, 0 (slow) to 31 (fast); drives the
    /// default auto-scroll interval.
    fn key_repeat_speed(&self) -> u32;

    /// Promotes a single-selection widget to multi-selection. Called once
    /// at attach; a rectangle that can only ever select one item is
    /// pointless.
    fn ensure_multi_selection(&mut self);

    fn clear_selection(&mut self);

    fn set_selected(&mut self, index: usize, selected: bool);

    /// Synthesizes a press equivalent to the one the controller consumed
    /// and dispatches it to the element under `position`, reporting who
    /// claimed pointer capture in response.
    fn forward_press(&mut self, position: Point) -> PressOutcome;

    /// Claims pointer capture for the drag. Returns false if the platform
    /// refused.
    fn capture_pointer(&mut self) -> bool;

    fn release_pointer(&mut self);

    /// Moves keyboard focus to the list; the controller consumed the press
    /// the widget would normally focus itself on.
    fn focus(&mut self);
}

//! Rubber-band (marquee) selection for scrollable, virtualized list views.
//!
//! The host widget owns items, geometry, and scrolling; this crate owns the
//! gesture. A [`DragController`] is attached per widget (usually through a
//! [`SelectorRegistry`]) and the host forwards pointer events, scroll-changed
//! notifications, and timer polls into it. The controller keeps the drag
//! rectangle anchored in content space while the viewport auto-scrolls
//! underneath it, and updates item selection incrementally so selections made
//! outside the rectangle survive the gesture.
//!
//! ## Architecture
//!
//! - `geometry` - plain-f32 points and rectangles shared across the crate
//! - `host` - the trait seam to the external list widget
//! - `tree` - breadth-first search and hit testing over the widget's
//!   composition tree
//! - `offset` - cumulative scroll-offset accounting (pixel and logical units)
//! - `autoscroll` - timer-driven line scrolling when the pointer leaves the
//!   viewport
//! - `hit` - incremental (hysteresis) selection updates against the current
//!   and previous rectangles
//! - `overlay` - the selection rectangle's render state
//! - `controller` - the drag lifecycle: capture, modifiers, start/move/stop
//! - `registry` - per-widget enable/disable bookkeeping
//!
//! All of it is single-threaded and callback-driven: every entry point takes
//! the host by `&mut` and runs to completion inside the host's event loop.

pub mod autoscroll;
pub mod constants;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod hit;
pub mod host;
pub mod offset;
pub mod overlay;
pub mod registry;
pub mod tree;

pub use autoscroll::AutoScroller;
pub use controller::{DragController, DragState, SelectorConfig};
pub use error::AttachError;
pub use geometry::{Point, Rect, Size};
pub use hit::ItemsSelector;
pub use host::{
    ElementNode, ElementRole, Modifiers, PressOutcome, ScrollChange, ScrollDirection,
    ScrollUnit, SelectionHost,
};
pub use offset::{OffsetDelta, ScrollOffsetListener, ScrollOffsetTracker};
pub use overlay::{OverlayStyle, SelectionOverlay};
pub use registry::SelectorRegistry;
pub use tree::{find_descendant, hit_test};

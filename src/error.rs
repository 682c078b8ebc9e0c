//! Error types for attaching the selection mechanism to a widget.

use thiserror::Error;

/// Errors that can occur while attaching a [`DragController`] to a host
/// widget.
///
/// Attach failure is an expected negative outcome, not a fault: the widget
/// simply does not support rectangle selection and the mechanism never
/// activates for it.
///
/// [`DragController`]: crate::controller::DragController
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachError {
    /// The widget's composition tree has no scroll-content element, so
    /// there is nothing for the drag to operate inside.
    #[error("widget has no scrollable content element")]
    MissingScrollContent,
}

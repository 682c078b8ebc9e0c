//! Per-widget enable/disable bookkeeping.
//!
//! One [`DragController`] exists per enabled widget. The registry is an
//! explicit owned map held by whatever manages widget lifecycle - there is
//! no ambient global. Enabling a widget that does not support the gesture
//! (no scrollable content) is reported as "not applicable" via a log line
//! and otherwise ignored; the mechanism simply never activates there.

use std::collections::HashMap;

use tracing::debug;

use crate::controller::{DragController, SelectorConfig};
use crate::host::SelectionHost;

/// Maps widget ids to their attached controllers.
#[derive(Debug, Default)]
pub struct SelectorRegistry {
    attached: HashMap<u64, DragController>,
}

impl SelectorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables rectangle selection for one widget.
    ///
    /// Enabling attaches a controller (a no-op if already enabled);
    /// disabling detaches it and releases any capture it holds. Returns
    /// whether the widget is enabled afterwards.
    pub fn set_enabled<H: SelectionHost>(
        &mut self,
        host: &mut H,
        widget_id: u64,
        enabled: bool,
        config: &SelectorConfig,
    ) -> bool {
        if enabled {
            if self.attached.contains_key(&widget_id) {
                return true;
            }
            match DragController::attach(host, config) {
                Ok(controller) => {
                    self.attached.insert(widget_id, controller);
                    true
                }
                Err(error) => {
                    debug!(widget_id, %error, "rectangle selection not applicable");
                    false
                }
            }
        } else {
            if let Some(mut controller) = self.attached.remove(&widget_id) {
                controller.detach(host);
            }
            false
        }
    }

    pub fn is_enabled(&self, widget_id: u64) -> bool {
        self.attached.contains_key(&widget_id)
    }

    /// The controller for a widget, for routing its pointer and scroll
    /// events.
    pub fn controller_mut(&mut self, widget_id: u64) -> Option<&mut DragController> {
        self.attached.get_mut(&widget_id)
    }

    pub fn controller(&self, widget_id: u64) -> Option<&DragController> {
        self.attached.get(&widget_id)
    }

    /// Drops the controller for a widget leaving the tree, releasing any
    /// capture it still holds.
    pub fn on_widget_detached<H: SelectionHost>(&mut self, host: &mut H, widget_id: u64) {
        if let Some(mut controller) = self.attached.remove(&widget_id) {
            controller.detach(host);
        }
    }
}

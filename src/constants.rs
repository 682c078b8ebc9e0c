//! Crate-wide constants.
//!
//! Centralizes magic numbers for the auto-scroll repeat timer and the
//! selection overlay so tunables live in one place.

// ============================================================================
// Auto-Scroll Timer
// ============================================================================

/// Slowest auto-scroll repeat interval in milliseconds.
///
/// Matches the platform key-repeat curve: keyboard speed 0 repeats every
/// 400 ms.
pub const MAX_REPEAT_MS: u64 = 400;

/// Fastest auto-scroll repeat interval in milliseconds (keyboard speed 31).
pub const MIN_REPEAT_MS: u64 = 33;

/// Upper bound of the platform keyboard-speed scale (0 = slow, 31 = fast).
pub const KEYBOARD_SPEED_MAX: u32 = 31;

// ============================================================================
// Selection Overlay
// ============================================================================

/// Opacity of the overlay's fill, 0.0 (transparent) to 1.0 (opaque)
pub const OVERLAY_FILL_OPACITY: f32 = 0.4;

/// Border width of the overlay rectangle in pixels
pub const OVERLAY_BORDER_WIDTH: f32 = 1.0;

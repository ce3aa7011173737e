// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Diagram**: Variant shown at startup
//! - **Interaction**: Pulse animation and double-click timing
//! - **Session**: In-memory record history
//! - **Ticks**: Animation refresh rate

use crate::domain::body::{Gender, Side};
use crate::domain::interaction::{double_click_bounds, pulse_bounds};

// ==========================================================================
// Diagram Defaults
// ==========================================================================

/// Gender of the diagram shown at startup.
pub const DEFAULT_GENDER: Gender = Gender::Male;

/// Side of the diagram shown at startup.
pub const DEFAULT_SIDE: Side = Side::Front;

// ==========================================================================
// Interaction Defaults
// ==========================================================================

/// Default pulse animation length in milliseconds.
pub const DEFAULT_PULSE_DURATION_MS: u64 = pulse_bounds::DEFAULT_MS;

/// Minimum pulse animation length in milliseconds.
pub const MIN_PULSE_DURATION_MS: u64 = pulse_bounds::MIN_MS;

/// Maximum pulse animation length in milliseconds.
pub const MAX_PULSE_DURATION_MS: u64 = pulse_bounds::MAX_MS;

/// Default double-click window in milliseconds.
pub const DEFAULT_DOUBLE_CLICK_MS: u64 = double_click_bounds::DEFAULT_MS;

/// Minimum double-click window in milliseconds.
pub const MIN_DOUBLE_CLICK_MS: u64 = double_click_bounds::MIN_MS;

/// Maximum double-click window in milliseconds.
pub const MAX_DOUBLE_CLICK_MS: u64 = double_click_bounds::MAX_MS;

// ==========================================================================
// Session Defaults
// ==========================================================================

/// Number of confirmed records kept in the on-screen history.
pub const SESSION_HISTORY_LIMIT: usize = 20;

// ==========================================================================
// Tick Defaults
// ==========================================================================

/// Interval of the animation tick while a pulse or a load is in progress.
pub const TICK_INTERVAL_MS: u64 = 16;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_PULSE_DURATION_MS > 0);
    assert!(MIN_PULSE_DURATION_MS <= DEFAULT_PULSE_DURATION_MS);
    assert!(DEFAULT_PULSE_DURATION_MS <= MAX_PULSE_DURATION_MS);

    assert!(MIN_DOUBLE_CLICK_MS > 0);
    assert!(MIN_DOUBLE_CLICK_MS <= DEFAULT_DOUBLE_CLICK_MS);
    assert!(DEFAULT_DOUBLE_CLICK_MS <= MAX_DOUBLE_CLICK_MS);

    // A tick slower than the shortest pulse would skip the animation.
    assert!(TICK_INTERVAL_MS < MIN_PULSE_DURATION_MS);

    assert!(SESSION_HISTORY_LIMIT > 0);
};

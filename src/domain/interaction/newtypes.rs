// SPDX-License-Identifier: MPL-2.0
//! Interaction newtypes.
//!
//! This module provides type-safe wrappers for interaction timings,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Pulse Bounds
// =============================================================================

/// Zone pulse animation length bounds (100 ms to 2 s).
pub mod pulse_bounds {
    /// Minimum pulse duration in milliseconds.
    pub const MIN_MS: u64 = 100;
    /// Maximum pulse duration in milliseconds.
    pub const MAX_MS: u64 = 2_000;
    /// Default pulse duration in milliseconds.
    pub const DEFAULT_MS: u64 = 450;
}

// =============================================================================
// PulseDuration
// =============================================================================

/// Length of the cosmetic pulse played on a clicked zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseDuration(u64);

impl PulseDuration {
    /// Creates a new pulse duration, clamping the value to the valid range.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(ms.clamp(pulse_bounds::MIN_MS, pulse_bounds::MAX_MS))
    }

    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for PulseDuration {
    fn default() -> Self {
        Self(pulse_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// Double Click Bounds
// =============================================================================

/// Double-click window bounds (150 ms to 1 s).
pub mod double_click_bounds {
    /// Minimum window in milliseconds.
    pub const MIN_MS: u64 = 150;
    /// Maximum window in milliseconds.
    pub const MAX_MS: u64 = 1_000;
    /// Default window in milliseconds.
    pub const DEFAULT_MS: u64 = 400;
}

// =============================================================================
// DoubleClickWindow
// =============================================================================

/// Maximum delay between two clicks on the same zone for them to count as
/// a double click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoubleClickWindow(u64);

impl DoubleClickWindow {
    /// Creates a new window, clamping the value to the valid range.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(ms.clamp(double_click_bounds::MIN_MS, double_click_bounds::MAX_MS))
    }

    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }

    /// Whether `elapsed` between two clicks falls inside the window.
    #[must_use]
    pub fn contains(self, elapsed: Duration) -> bool {
        elapsed <= self.as_duration()
    }
}

impl Default for DoubleClickWindow {
    fn default() -> Self {
        Self(double_click_bounds::DEFAULT_MS)
    }
}

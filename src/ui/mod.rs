// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! one handles its own messages and reports effects to the application.
//!
//! # Screens
//!
//! - [`body_map`] - Single-select body map with head drill-down
//! - [`zone_picker`] - Multi-select zone picker with double-click details
//!
//! # Shared Infrastructure
//!
//! - [`diagram_pane`] - Diagram loading, mounting and placeholders
//! - [`zone_overlay`] - Canvas overlay hit-testing the mounted diagram
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theme`] - Zone highlight colors and styling helpers
//! - [`navbar`] - Screen switcher
//! - [`notifications`] - Toast notification system for user feedback

pub mod body_map;
pub mod design_tokens;
pub mod diagram_pane;
pub mod navbar;
pub mod notifications;
pub mod styles;
pub mod theme;
pub mod widgets;
pub mod zone_overlay;
pub mod zone_picker;

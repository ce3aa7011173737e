// SPDX-License-Identifier: MPL-2.0
//! `pain_map` is an interactive body pain map built with the Iced GUI
//! framework.
//!
//! A clickable body diagram lets the user pick the zone that hurts, with a
//! close-up of the head reached by clicking it; a second screen selects
//! several zones at once. Diagrams are SVG files looked up by gender, side
//! and view, and every clickable path is identified by its `id`.

pub mod app;
pub mod diagram;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod record;
pub mod ui;

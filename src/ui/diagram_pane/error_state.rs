// SPDX-License-Identifier: MPL-2.0
//! Inline placeholder shown when a diagram cannot be loaded.

use crate::error::Error;

/// Error state for displaying user-friendly errors with optional details.
#[derive(Debug, Clone)]
pub struct State {
    /// i18n key for the friendly error message.
    friendly_key: &'static str,
    /// Technical error details.
    details: String,
    /// Whether to show the technical details.
    show_details: bool,
}

/// Messages for the error state sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Toggle visibility of technical details.
    ToggleDetails,
}

impl State {
    /// Create a new error state from a failed diagram load.
    #[must_use]
    pub fn new(error: &Error) -> Self {
        Self {
            friendly_key: error.i18n_key(),
            details: error.to_string(),
            show_details: false,
        }
    }

    /// Handle an error state message.
    pub fn handle(&mut self, msg: Message) {
        match msg {
            Message::ToggleDetails => self.show_details = !self.show_details,
        }
    }

    #[must_use]
    pub fn friendly_key(&self) -> &'static str {
        self.friendly_key
    }

    #[must_use]
    pub fn details(&self) -> &str {
        &self.details
    }

    #[must_use]
    pub fn show_details(&self) -> bool {
        self.show_details
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::body::{Gender, Side};
use crate::ui::body_map;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::zone_picker;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    BodyMap(body_map::Message),
    ZonePicker(zone_picker::Message),
    Notification(notifications::NotificationMessage),
    /// Confirm the pending pick and write it as a pain record.
    ConfirmRecord,
    /// Discard the pending pick.
    CancelRecord,
    CloseDetails,
    ClearSelection,
    Tick(Instant),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `ru`, `en-US`).
    pub lang: Option<String>,
    /// Directory holding `pain-map/*.svg`; wins over `base_url`.
    pub assets_dir: Option<String>,
    /// Base URL serving `pain-map/*.svg`.
    pub base_url: Option<String>,
    pub gender: Option<Gender>,
    pub side: Option<Side>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `PAIN_MAP_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}

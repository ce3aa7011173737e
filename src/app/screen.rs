// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Single-select body map feeding pain records.
    #[default]
    BodyMap,
    /// Multi-select zone picker.
    ZonePicker,
}

impl Screen {
    pub const ALL: [Screen; 2] = [Screen::BodyMap, Screen::ZonePicker];

    /// i18n key of the navbar tab.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Screen::BodyMap => "nav-body-map",
            Screen::ZonePicker => "nav-zone-picker",
        }
    }
}

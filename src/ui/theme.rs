// SPDX-License-Identifier: MPL-2.0
//! Shared UI color helpers for the body map, the zone picker and their
//! overlays.

use crate::ui::design_tokens::{opacity, palette};
use iced::widget::container;
use iced::{Color, Theme};

/// Standard color for error text.
pub fn error_text_color() -> Color {
    palette::ERROR_500
}

/// Standard color for muted/secondary text.
pub fn muted_text_color() -> Color {
    palette::GRAY_400
}

// ============================================================================
// Zone Overlay Colors
// ============================================================================

/// Fill drawn over the zone under the cursor.
pub fn zone_hover_fill() -> Color {
    Color {
        a: opacity::OVERLAY_SUBTLE,
        ..palette::PRIMARY_400
    }
}

/// Outline of the zone under the cursor.
pub fn zone_hover_outline() -> Color {
    palette::PRIMARY_600
}

/// Fill of zones held in a multi-selection.
pub fn zone_selected_fill() -> Color {
    Color {
        a: opacity::OVERLAY_MEDIUM,
        ..palette::ERROR_500
    }
}

/// Outline of zones held in a multi-selection.
pub fn zone_selected_outline() -> Color {
    palette::ERROR_500
}

/// Pulse ring color at full strength; the overlay fades its alpha.
pub fn zone_pulse_color() -> Color {
    palette::ERROR_500
}

/// Background behind the diagram so the drawing reads in both themes.
pub fn diagram_surface(theme: &Theme) -> container::Style {
    let is_light = matches!(theme, Theme::Light);
    container::Style {
        background: Some(iced::Background::Color(if is_light {
            palette::WHITE
        } else {
            palette::GRAY_100
        })),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_fill_is_translucent() {
        let fill = zone_hover_fill();
        assert!(fill.a > 0.0 && fill.a < 1.0);
    }

    #[test]
    fn selected_fill_is_stronger_than_hover() {
        assert!(zone_selected_fill().a > zone_hover_fill().a);
    }

    #[test]
    fn diagram_surface_has_a_background() {
        assert!(diagram_surface(&Theme::Dark).background.is_some());
        assert!(diagram_surface(&Theme::Light).background.is_some());
    }
}

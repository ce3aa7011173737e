// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the pain map screens.
//!
//! Every color, gap and stroke width the body map, the zone picker, the
//! sidebar and the toasts use is named here, so screens never carry raw
//! numbers. Zone highlight colors are composed from these in
//! [`theme`](super::theme).
//!
//! ```
//! use pain_map::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let hover = Color {
//!     a: opacity::OVERLAY_SUBTLE,
//!     ..palette::PRIMARY_400
//! };
//! assert!(hover.a < 1.0);
//! assert!(spacing::MD > spacing::SM);
//! ```

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    /// Muted text.
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    /// Hovered zone fill.
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    /// Active toggle and primary action.
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    /// Hovered zone outline.
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    /// Selected zones, the pick pulse and load errors.
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

pub mod opacity {
    /// Hovered zone fill.
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    /// Selected zone fill.
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    /// Sidebar cards and toasts.
    pub const SURFACE: f32 = 0.95;
}

/// 4px steps.
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
}

pub mod sizing {
    /// Loading spinner diameter.
    pub const ICON_XL: f32 = 48.0;

    pub const SIDEBAR_WIDTH: f32 = 290.0;
    pub const TOAST_WIDTH: f32 = 320.0;

    /// Outline width of the hovered zone.
    pub const ZONE_OUTLINE: f32 = 2.0;
    /// Stroke width of the pulse ring at its start.
    pub const PULSE_STROKE: f32 = 4.0;
    /// How far the pulse ring grows past the zone outline, as a fraction of
    /// the zone size.
    pub const PULSE_SPREAD: f32 = 0.35;
}

pub mod typography {
    /// Section headers and toast glyphs.
    pub const TITLE_SM: f32 = 18.0;
    /// Emphasized text.
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const BODY_SM: f32 = 13.0;
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    /// Accent borders of toasts and the confirmation card.
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);

    assert!(opacity::OVERLAY_MEDIUM > opacity::OVERLAY_SUBTLE);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(sizing::PULSE_STROKE > sizing::ZONE_OUTLINE);
    assert!(sizing::PULSE_SPREAD > 0.0 && sizing::PULSE_SPREAD < 1.0);

    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};

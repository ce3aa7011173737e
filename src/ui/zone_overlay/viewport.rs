// SPDX-License-Identifier: MPL-2.0
//! Mapping between widget coordinates and diagram coordinates.
//!
//! The SVG widget draws the diagram with `ContentFit::Contain`: scaled
//! uniformly to fit the widget and centered along the slack axis. The
//! overlay shares the widget's bounds, so it applies the same fit.

use crate::diagram::DiagramPoint;
use iced::{Point, Size};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    offset_x: f32,
    offset_y: f32,
    display_width: f32,
    display_height: f32,
    scale: f32,
}

impl Viewport {
    /// Fit of a `content` sized drawing inside `bounds`. `None` when either
    /// size is degenerate.
    #[must_use]
    pub fn contain(bounds: Size, content: (f32, f32)) -> Option<Self> {
        let (content_width, content_height) = content;
        if bounds.width <= 0.0
            || bounds.height <= 0.0
            || content_width <= 0.0
            || content_height <= 0.0
        {
            return None;
        }

        let content_aspect = content_width / content_height;
        let bounds_aspect = bounds.width / bounds.height;

        let (display_width, display_height, offset_x, offset_y) = if content_aspect > bounds_aspect
        {
            // Wider than the widget: fit to width.
            let display_height = bounds.width / content_aspect;
            (
                bounds.width,
                display_height,
                0.0,
                (bounds.height - display_height) / 2.0,
            )
        } else {
            let display_width = bounds.height * content_aspect;
            (
                display_width,
                bounds.height,
                (bounds.width - display_width) / 2.0,
                0.0,
            )
        };

        Some(Self {
            offset_x,
            offset_y,
            display_width,
            display_height,
            scale: display_width / content_width,
        })
    }

    /// Converts a widget-relative position to diagram coordinates. Positions
    /// in the letterbox around the drawing are not part of it.
    #[must_use]
    pub fn to_diagram(&self, position: Point) -> Option<DiagramPoint> {
        let x = position.x - self.offset_x;
        let y = position.y - self.offset_y;
        if x < 0.0 || y < 0.0 || x > self.display_width || y > self.display_height {
            return None;
        }
        Some(DiagramPoint::new(x / self.scale, y / self.scale))
    }

    #[must_use]
    pub fn to_screen(&self, point: DiagramPoint) -> Point {
        Point::new(
            self.offset_x + point.x * self.scale,
            self.offset_y + point.y * self.scale,
        )
    }

    /// Screen pixels per diagram unit.
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale
    }
}

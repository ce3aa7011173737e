// SPDX-License-Identifier: MPL-2.0
//! Canvas program layered over a rendered diagram.
//!
//! One instance per mounted scene receives every pointer event for the whole
//! drawing, hit-tests it against the scene and publishes [`OverlayEvent`]s
//! stamped with the scene's generation.

use super::pulse::PulseFrame;
use super::viewport::Viewport;
use super::OverlayEvent;
use crate::diagram::{DiagramScene, FillRule, Outline, Region};
use crate::domain::body::ZoneId;
use crate::ui::design_tokens::{border, sizing};
use crate::ui::theme;
use iced::widget::canvas::{self, fill, Canvas, Frame, Geometry, Path, Stroke};
use iced::widget::Action;
use iced::{mouse, Color, Element, Length, Rectangle, Renderer, Theme};
use std::time::Instant;

/// Hover tracked inside the canvas so moves within one zone publish nothing.
#[derive(Debug, Default)]
pub struct HoverState {
    generation: u64,
    zone: Option<ZoneId>,
}

impl HoverState {
    fn current(&self, generation: u64) -> Option<&ZoneId> {
        if self.generation == generation {
            self.zone.as_ref()
        } else {
            None
        }
    }
}

pub struct ZoneOverlay<'a> {
    scene: &'a DiagramScene,
    generation: u64,
    selected: &'a [ZoneId],
    pulse: Option<PulseFrame<'a>>,
}

impl<'a> ZoneOverlay<'a> {
    #[must_use]
    pub fn new(scene: &'a DiagramScene, generation: u64) -> Self {
        Self {
            scene,
            generation,
            selected: &[],
            pulse: None,
        }
    }

    /// Zones painted as selected.
    #[must_use]
    pub fn selected(mut self, zones: &'a [ZoneId]) -> Self {
        self.selected = zones;
        self
    }

    #[must_use]
    pub fn pulse(mut self, pulse: Option<PulseFrame<'a>>) -> Self {
        self.pulse = pulse;
        self
    }

    pub fn into_element(self) -> Element<'a, OverlayEvent> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn viewport(&self, bounds: Rectangle) -> Option<Viewport> {
        Viewport::contain(bounds.size(), self.scene.size())
    }

    fn hit(&self, bounds: Rectangle, cursor: mouse::Cursor) -> Option<&'a Region> {
        let position = cursor.position_in(bounds)?;
        let point = self.viewport(bounds)?.to_diagram(position)?;
        self.scene.hit_test(point)
    }
}

impl canvas::Program<OverlayEvent> for ZoneOverlay<'_> {
    type State = HoverState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<OverlayEvent>> {
        match event {
            iced::Event::Mouse(mouse::Event::CursorMoved { .. } | mouse::Event::CursorEntered) => {
                let hovered = self.hit(bounds, cursor).map(|region| region.id().clone());
                if state.generation == self.generation && state.zone == hovered {
                    return None;
                }
                state.generation = self.generation;
                state.zone = hovered.clone();
                Some(Action::publish(OverlayEvent::Hovered {
                    generation: self.generation,
                    zone: hovered,
                }))
            }
            iced::Event::Mouse(mouse::Event::CursorLeft) => {
                state.zone.take().map(|_| {
                    Action::publish(OverlayEvent::Hovered {
                        generation: self.generation,
                        zone: None,
                    })
                })
            }
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let region = self.hit(bounds, cursor)?;
                Some(
                    Action::publish(OverlayEvent::Clicked {
                        generation: self.generation,
                        zone: region.id().clone(),
                        at: Instant::now(),
                    })
                    .and_capture(),
                )
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let Some(viewport) = self.viewport(bounds) else {
            return vec![frame.into_geometry()];
        };

        for zone in self.selected {
            if let Some(region) = self.scene.region(zone) {
                let outline = region.outline();
                let path = outline_path(outline, &viewport, 1.0);
                frame.fill(&path, solid(theme::zone_selected_fill(), outline.rule()));
                frame.stroke(
                    &path,
                    Stroke::default()
                        .with_width(border::WIDTH_SM)
                        .with_color(theme::zone_selected_outline()),
                );
            }
        }

        if let Some(region) = state
            .current(self.generation)
            .and_then(|zone| self.scene.region(zone))
        {
            let outline = region.outline();
            let path = outline_path(outline, &viewport, 1.0);
            frame.fill(&path, solid(theme::zone_hover_fill(), outline.rule()));
            frame.stroke(
                &path,
                Stroke::default()
                    .with_width(sizing::ZONE_OUTLINE)
                    .with_color(theme::zone_hover_outline()),
            );
        }

        if let Some(pulse) = self.pulse {
            if let Some(region) = self.scene.region(pulse.zone) {
                let remaining = 1.0 - pulse.progress.clamp(0.0, 1.0);
                let grow = 1.0 + sizing::PULSE_SPREAD * pulse.progress;
                let path = outline_path(region.outline(), &viewport, grow);
                frame.stroke(
                    &path,
                    Stroke::default()
                        .with_width(border::WIDTH_SM + sizing::PULSE_STROKE * remaining)
                        .with_color(Color {
                            a: remaining,
                            ..theme::zone_pulse_color()
                        }),
                );
            }
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.hit(bounds, cursor).is_some() {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}

fn solid(color: Color, rule: FillRule) -> canvas::Fill {
    canvas::Fill {
        style: canvas::Style::Solid(color),
        rule: match rule {
            FillRule::NonZero => fill::Rule::NonZero,
            FillRule::EvenOdd => fill::Rule::EvenOdd,
        },
    }
}

/// Screen-space path of `outline`, scaled by `grow` around its center.
fn outline_path(outline: &Outline, viewport: &Viewport, grow: f32) -> Path {
    let center = outline.bounds().center();
    Path::new(|builder| {
        for polygon in outline.polygons() {
            let mut points = polygon.iter().map(|point| {
                let mut scaled = *point;
                scaled.x = center.x + (point.x - center.x) * grow;
                scaled.y = center.y + (point.y - center.y) * grow;
                viewport.to_screen(scaled)
            });
            if let Some(first) = points.next() {
                builder.move_to(first);
                for point in points {
                    builder.line_to(point);
                }
                builder.close();
            }
        }
    })
}

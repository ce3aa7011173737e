// SPDX-License-Identifier: MPL-2.0
//! Diagram pane shared by the body map and the zone picker.
//!
//! Owns one diagram at a time: issues load requests, mounts the scene that
//! answers the newest one, renders it under a [`ZoneOverlay`] and filters
//! overlay events so only those of the mounted scene get through.

pub mod error_state;
pub mod loading;

use crate::diagram::{self, DiagramScene, DiagramSource};
use crate::domain::body::{DiagramVariant, ZoneCatalog, ZoneId, ZoneLabel};
use crate::domain::interaction::PulseDuration;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::theme;
use crate::ui::widgets::AnimatedSpinner;
use crate::ui::zone_overlay::{OverlayEvent, Pulse, PulseFrame, ZoneOverlay};
use iced::widget::{button, container, stack, svg, Column, Container, Text};
use iced::{alignment, ContentFit, Element, Length, Task};
use std::sync::Arc;
use std::time::Instant;

/// Scene currently attached to the overlay.
#[derive(Debug, Clone)]
struct Mounted {
    scene: Arc<DiagramScene>,
    handle: svg::Handle,
    generation: u64,
}

#[derive(Debug, Clone)]
enum Content {
    Idle,
    Loading,
    Ready(Mounted),
    Failed(error_state::State),
}

#[derive(Debug, Clone)]
pub enum Message {
    Loaded {
        generation: u64,
        result: Result<Arc<DiagramScene>, Error>,
    },
    Overlay(OverlayEvent),
    Tick(Instant),
    Error(error_state::Message),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// A zone of the mounted scene was clicked.
    Clicked { zone: ZoneId, at: Instant },
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub selected: &'a [ZoneId],
}

#[derive(Debug, Clone)]
pub struct State {
    source: Arc<DiagramSource>,
    catalog: Arc<ZoneCatalog>,
    loading: loading::State,
    content: Content,
    hovered: Option<ZoneId>,
    pulse: Option<Pulse>,
    /// Clock of the last tick, used to sample the pulse animation.
    now: Instant,
    /// Number of scenes mounted so far.
    attachments: u64,
}

impl State {
    #[must_use]
    pub fn new(source: Arc<DiagramSource>, catalog: Arc<ZoneCatalog>) -> Self {
        Self {
            source,
            catalog,
            loading: loading::State::default(),
            content: Content::Idle,
            hovered: None,
            pulse: None,
            now: Instant::now(),
            attachments: 0,
        }
    }

    /// Detaches the current scene and starts loading `variant`.
    ///
    /// Responses to earlier requests still in flight are dropped when they
    /// arrive.
    pub fn request(&mut self, variant: DiagramVariant) -> Task<Message> {
        let generation = self.loading.begin();
        self.content = Content::Loading;
        self.hovered = None;
        self.pulse = None;
        log::debug!("requesting diagram {} (generation {})", variant, generation);

        let source = Arc::clone(&self.source);
        let catalog = Arc::clone(&self.catalog);
        Task::perform(diagram::load(source, catalog, variant), move |result| {
            Message::Loaded { generation, result }
        })
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::Loaded { generation, result } => {
                self.finish_load(generation, result);
                Effect::None
            }
            Message::Overlay(event) => self.handle_overlay(event),
            Message::Tick(now) => {
                self.now = now;
                self.loading.tick();
                if self.pulse.as_ref().is_some_and(|pulse| pulse.is_expired(now)) {
                    self.pulse = None;
                }
                Effect::None
            }
            Message::Error(msg) => {
                if let Content::Failed(error) = &mut self.content {
                    error.handle(msg);
                }
                Effect::None
            }
        }
    }

    fn finish_load(&mut self, generation: u64, result: Result<Arc<DiagramScene>, Error>) {
        let Some(elapsed) = self.loading.finish(generation) else {
            log::debug!("dropping stale diagram response (generation {})", generation);
            return;
        };

        match result {
            Ok(scene) => {
                let handle = svg::Handle::from_memory(scene.markup().to_vec());
                log::debug!(
                    "mounted diagram {} with {} regions in {:?}",
                    scene.variant(),
                    scene.regions().len(),
                    elapsed
                );
                self.content = Content::Ready(Mounted {
                    scene,
                    handle,
                    generation,
                });
                self.attachments += 1;
            }
            Err(err) => {
                log::warn!("failed to load diagram: {}", err);
                self.content = Content::Failed(error_state::State::new(&err));
            }
        }
    }

    fn handle_overlay(&mut self, event: OverlayEvent) -> Effect {
        let Some(mounted) = self.mounted() else {
            return Effect::None;
        };
        if event.generation() != mounted.generation {
            log::debug!(
                "ignoring overlay event from generation {} (mounted {})",
                event.generation(),
                mounted.generation
            );
            return Effect::None;
        }

        match event {
            OverlayEvent::Hovered { zone, .. } => {
                self.hovered = zone;
                Effect::None
            }
            OverlayEvent::Clicked { zone, at, .. } => Effect::Clicked { zone, at },
        }
    }

    fn mounted(&self) -> Option<&Mounted> {
        match &self.content {
            Content::Ready(mounted) => Some(mounted),
            _ => None,
        }
    }

    /// Scene attached to the overlay, if any.
    #[must_use]
    pub fn scene(&self) -> Option<&DiagramScene> {
        self.mounted().map(|mounted| mounted.scene.as_ref())
    }

    /// Label of `zone`: the mounted scene's label when the zone is part of
    /// it, otherwise a fresh catalog lookup.
    #[must_use]
    pub fn label(&self, zone: &ZoneId) -> ZoneLabel {
        self.scene()
            .and_then(|scene| scene.region(zone))
            .map_or_else(|| self.catalog.resolve(zone), |region| region.label().clone())
    }

    #[must_use]
    pub fn hovered(&self) -> Option<&ZoneId> {
        self.hovered.as_ref()
    }

    /// Plays the pick highlight on `zone` of the mounted scene.
    pub fn start_pulse(&mut self, zone: ZoneId, duration: PulseDuration, at: Instant) {
        let Some(generation) = self.mounted().map(|mounted| mounted.generation) else {
            return;
        };
        self.now = at;
        self.pulse = Some(Pulse::start(zone, generation, at, duration));
    }

    #[must_use]
    pub fn pulse(&self) -> Option<&Pulse> {
        self.pulse.as_ref()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    /// Whether the pane needs animation ticks.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.loading.is_loading() || self.pulse.is_some()
    }

    #[must_use]
    pub fn error(&self) -> Option<&error_state::State> {
        match &self.content {
            Content::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Number of scenes attached to an overlay so far.
    #[must_use]
    pub fn attachments(&self) -> u64 {
        self.attachments
    }

    /// Number of load requests issued so far.
    #[must_use]
    pub fn requests(&self) -> u64 {
        self.loading.requests()
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let body: Element<'a, Message> = match &self.content {
            Content::Idle => Column::new().into(),
            Content::Loading => loading_view(ctx.i18n, self.loading.spinner_rotation()),
            Content::Failed(error) => error_view(ctx.i18n, error),
            Content::Ready(mounted) => {
                let pulse = self.pulse.as_ref().and_then(|pulse| {
                    if pulse.generation() != mounted.generation {
                        return None;
                    }
                    pulse.progress(self.now).map(|progress| PulseFrame {
                        zone: pulse.zone(),
                        progress,
                    })
                });

                let drawing = svg(mounted.handle.clone())
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .content_fit(ContentFit::Contain);
                let overlay = ZoneOverlay::new(&mounted.scene, mounted.generation)
                    .selected(ctx.selected)
                    .pulse(pulse)
                    .into_element()
                    .map(Message::Overlay);

                stack![drawing, overlay].into()
            }
        };

        Container::new(body)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(theme::diagram_surface)
            .into()
    }
}

fn loading_view(i18n: &I18n, rotation: f32) -> Element<'_, Message> {
    let spinner = AnimatedSpinner::new(palette::PRIMARY_500, rotation).into_element();

    Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(spinner)
        .push(
            Text::new(i18n.tr("body-map-loading"))
                .size(typography::BODY)
                .color(theme::muted_text_color()),
        )
        .into()
}

fn error_view<'a>(i18n: &'a I18n, error: &'a error_state::State) -> Element<'a, Message> {
    let toggle_label = if error.show_details() {
        i18n.tr("error-hide-details")
    } else {
        i18n.tr("error-show-details")
    };

    let mut content = Column::new()
        .spacing(spacing::SM)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new(i18n.tr(error.friendly_key()))
                .size(typography::BODY_LG)
                .color(theme::error_text_color()),
        )
        .push(
            button(Text::new(toggle_label).size(typography::BODY_SM))
                .on_press(Message::Error(error_state::Message::ToggleDetails)),
        );

    if error.show_details() {
        content = content.push(
            container(
                Text::new(error.details())
                    .size(typography::CAPTION)
                    .color(theme::muted_text_color()),
            )
            .padding(spacing::MD)
            .width(Length::Fill),
        );
    }

    content.into()
}

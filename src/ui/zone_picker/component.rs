// SPDX-License-Identifier: MPL-2.0
//! Zone picker component.
//!
//! The diagram variant is chosen by the host when the picker is created and
//! never changes afterwards. Every click toggles the clicked zone; the second
//! click of a double click also requests the zone's details.

use super::double_click::DoubleClickDetector;
use super::selection::SelectionSet;
use crate::diagram::DiagramSource;
use crate::domain::body::{DiagramVariant, ZoneCatalog, ZoneId, ZoneLabel};
use crate::domain::interaction::{DoubleClickWindow, PulseDuration};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::diagram_pane;
use crate::ui::theme;
use iced::widget::{Column, Text};
use iced::{Element, Length, Task};
use std::sync::Arc;
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Message {
    Pane(diagram_pane::Message),
}

/// Outcome of one toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChange {
    pub zone: ZoneId,
    /// Whether `zone` is selected after the click.
    pub selected: bool,
    /// Whole selection after the click, in selection order.
    pub all: Vec<ZoneId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    SelectionChanged(SelectionChange),
    /// Second click of a double click. The click toggled the zone like any
    /// other, and `change` reports that toggle.
    DetailsRequested { change: SelectionChange },
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone)]
pub struct State {
    variant: DiagramVariant,
    pane: diagram_pane::State,
    selection: SelectionSet,
    detector: DoubleClickDetector,
    pulse_duration: PulseDuration,
}

impl State {
    /// Creates the picker with an initial selection and starts loading
    /// `variant`.
    pub fn new(
        source: Arc<DiagramSource>,
        catalog: Arc<ZoneCatalog>,
        variant: DiagramVariant,
        initial: impl IntoIterator<Item = ZoneId>,
        pulse_duration: PulseDuration,
        double_click: DoubleClickWindow,
    ) -> (Self, Task<Message>) {
        let mut pane = diagram_pane::State::new(source, catalog);
        let task = pane.request(variant).map(Message::Pane);
        let state = Self {
            variant,
            pane,
            selection: SelectionSet::new(initial),
            detector: DoubleClickDetector::new(double_click),
            pulse_duration,
        };
        (state, task)
    }

    /// Replaces the selection with the host's copy. Reports nothing.
    pub fn set_selected(&mut self, zones: impl IntoIterator<Item = ZoneId>) {
        self.selection.replace(zones);
        self.detector.reset();
    }

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::Pane(msg) => {
                let effect = match self.pane.handle(msg) {
                    diagram_pane::Effect::None => Effect::None,
                    diagram_pane::Effect::Clicked { zone, at } => self.handle_click(zone, at),
                };
                (effect, Task::none())
            }
        }
    }

    fn handle_click(&mut self, zone: ZoneId, at: Instant) -> Effect {
        let selected = self.selection.toggle(&zone);
        if selected {
            self.pane.start_pulse(zone.clone(), self.pulse_duration, at);
        }
        let is_double = self.detector.register(&zone, at);

        let change = SelectionChange {
            zone,
            selected,
            all: self.selection.as_slice().to_vec(),
        };
        log::debug!(
            "zone {} {} ({} selected)",
            change.zone,
            if selected { "selected" } else { "deselected" },
            change.all.len()
        );

        if is_double {
            Effect::DetailsRequested { change }
        } else {
            Effect::SelectionChanged(change)
        }
    }

    #[must_use]
    pub fn variant(&self) -> DiagramVariant {
        self.variant
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    #[must_use]
    pub fn label(&self, zone: &ZoneId) -> ZoneLabel {
        self.pane.label(zone)
    }

    #[must_use]
    pub fn pane(&self) -> &diagram_pane::State {
        &self.pane
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.pane.is_animating()
    }

    pub fn set_timing(&mut self, pulse_duration: PulseDuration, double_click: DoubleClickWindow) {
        self.pulse_duration = pulse_duration;
        self.detector.set_window(double_click);
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;

        let summary = if self.selection.is_empty() {
            i18n.tr("picker-selected-none")
        } else {
            let names: Vec<String> = self
                .selection
                .as_slice()
                .iter()
                .map(|zone| self.pane.label(zone).text().to_string())
                .collect();
            let count = self.selection.len().to_string();
            format!(
                "{} ({})",
                i18n.tr_with_args("picker-selected-count", &[("count", count.as_str())]),
                names.join(", ")
            )
        };

        let pane = self
            .pane
            .view(diagram_pane::ViewContext {
                i18n,
                selected: self.selection.as_slice(),
            })
            .map(Message::Pane);

        Column::new()
            .spacing(spacing::SM)
            .width(Length::Fill)
            .height(Length::Fill)
            .push(
                Text::new(i18n.tr("picker-hint"))
                    .size(typography::BODY)
                    .color(theme::muted_text_color()),
            )
            .push(Text::new(summary).size(typography::BODY))
            .push(pane)
            .into()
    }
}

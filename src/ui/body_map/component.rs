// SPDX-License-Identifier: MPL-2.0
//! Body map component: gender/side toggles over a diagram pane.
//!
//! Clicking the head of the full body opens the head close-up; any other
//! click is reported to the host as a [`ZoneSelection`].

use super::view_state::{ClickOutcome, ViewState};
use super::{gender_label, side_label};
use crate::diagram::DiagramSource;
use crate::domain::body::{Gender, Side, View, ZoneCatalog, ZoneId, ZoneSelection};
use crate::domain::interaction::PulseDuration;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::diagram_pane;
use crate::ui::styles;
use crate::ui::theme;
use iced::widget::{button, Column, Row, Text};
use iced::{alignment, Element, Length, Task};
use std::sync::Arc;
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Message {
    GenderSelected(Gender),
    SideSelected(Side),
    BackRequested,
    Pane(diagram_pane::Message),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    ZonePicked(ZoneSelection),
    /// Gender or side changed; the host may remember them.
    PreferencesChanged { gender: Gender, side: Side },
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone)]
pub struct State {
    view_state: ViewState,
    pane: diagram_pane::State,
    pulse_duration: PulseDuration,
}

impl State {
    /// Creates the component and issues the load of the initial full-body
    /// diagram.
    pub fn new(
        source: Arc<DiagramSource>,
        catalog: Arc<ZoneCatalog>,
        gender: Gender,
        side: Side,
        pulse_duration: PulseDuration,
    ) -> (Self, Task<Message>) {
        let mut state = Self {
            view_state: ViewState::new(gender, side),
            pane: diagram_pane::State::new(source, catalog),
            pulse_duration,
        };
        let task = state.reload();
        (state, task)
    }

    fn reload(&mut self) -> Task<Message> {
        self.pane
            .request(self.view_state.variant())
            .map(Message::Pane)
    }

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::GenderSelected(gender) => {
                let changed_preference = gender != self.view_state.gender();
                if !self.view_state.set_gender(gender) {
                    return (Effect::None, Task::none());
                }
                (self.preference_effect(changed_preference), self.reload())
            }
            Message::SideSelected(side) => {
                let changed_preference = side != self.view_state.side();
                if !self.view_state.set_side(side) {
                    return (Effect::None, Task::none());
                }
                (self.preference_effect(changed_preference), self.reload())
            }
            Message::BackRequested => {
                if self.view_state.back() {
                    (Effect::None, self.reload())
                } else {
                    (Effect::None, Task::none())
                }
            }
            Message::Pane(msg) => match self.pane.handle(msg) {
                diagram_pane::Effect::None => (Effect::None, Task::none()),
                diagram_pane::Effect::Clicked { zone, at } => self.handle_click(zone, at),
            },
        }
    }

    fn preference_effect(&self, changed: bool) -> Effect {
        if changed {
            Effect::PreferencesChanged {
                gender: self.view_state.gender(),
                side: self.view_state.side(),
            }
        } else {
            Effect::None
        }
    }

    fn handle_click(&mut self, zone: ZoneId, at: Instant) -> (Effect, Task<Message>) {
        match self.view_state.classify(&zone) {
            ClickOutcome::DrillDown => {
                self.view_state.drill_down();
                (Effect::None, self.reload())
            }
            ClickOutcome::Select => {
                let selection = ZoneSelection {
                    zone_name: self.pane.label(&zone).text().to_string(),
                    zone_code: zone.clone(),
                    gender_code: self.view_state.gender(),
                    side: self.view_state.side(),
                };
                log::debug!("zone picked: {} ({})", selection.zone_code, selection.zone_name);
                self.pane.start_pulse(zone, self.pulse_duration, at);
                (Effect::ZonePicked(selection), Task::none())
            }
        }
    }

    #[must_use]
    pub fn view_state(&self) -> &ViewState {
        &self.view_state
    }

    #[must_use]
    pub fn pane(&self) -> &diagram_pane::State {
        &self.pane
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.pane.is_animating()
    }

    pub fn set_pulse_duration(&mut self, duration: PulseDuration) {
        self.pulse_duration = duration;
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;

        let mut toolbar = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center);
        for gender in Gender::ALL {
            toolbar = toolbar.push(toggle(
                gender_label(i18n, gender),
                gender == self.view_state.gender(),
                Message::GenderSelected(gender),
            ));
        }
        toolbar = toolbar.push(Text::new("|").color(theme::muted_text_color()));
        for side in Side::ALL {
            toolbar = toolbar.push(toggle(
                side_label(i18n, side),
                side == self.view_state.side(),
                Message::SideSelected(side),
            ));
        }
        if self.view_state.view() == View::Head {
            toolbar = toolbar.push(
                button(Text::new(i18n.tr("view-back-to-body")))
                    .style(styles::button::primary)
                    .on_press(Message::BackRequested),
            );
        }

        let status = match self.pane.hovered() {
            Some(zone) => {
                let label = self.pane.label(zone);
                let key = if label.is_unknown() {
                    "hovered-zone-unknown"
                } else {
                    "hovered-zone"
                };
                i18n.tr_with_args(key, &[("zone", label.text())])
            }
            None if self.view_state.view() == View::Head => i18n.tr("body-map-hint-head"),
            None => i18n.tr("body-map-hint-full"),
        };

        let pane = self
            .pane
            .view(diagram_pane::ViewContext { i18n, selected: &[] })
            .map(Message::Pane);

        Column::new()
            .spacing(spacing::SM)
            .width(Length::Fill)
            .height(Length::Fill)
            .push(toolbar)
            .push(
                Text::new(status)
                    .size(typography::BODY)
                    .color(theme::muted_text_color()),
            )
            .push(pane)
            .into()
    }
}

fn toggle<'a>(label: String, active: bool, message: Message) -> Element<'a, Message> {
    let style = if active {
        styles::button::selected
    } else {
        styles::button::unselected
    };
    button(Text::new(label).size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .style(style)
        .on_press(message)
        .into()
}

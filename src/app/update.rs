// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.

use super::config::Config;
use super::{persistence, Message, Screen};
use crate::domain::body::{ZoneId, ZoneSelection};
use crate::record::{PainRecordDraft, RecordSink, SessionHistory};
use crate::ui::body_map::{self, Effect as BodyMapEffect};
use crate::ui::diagram_pane;
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::{self, Notification};
use crate::ui::zone_picker::{self, Effect as ZonePickerEffect};
use iced::Task;
use std::time::Instant;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub config: &'a mut Config,
    pub body_map: &'a mut body_map::State,
    pub zone_picker: &'a mut zone_picker::State,
    /// Pick waiting for confirmation.
    pub pending: &'a mut Option<ZoneSelection>,
    /// Zone whose details panel is open on the picker screen.
    pub details: &'a mut Option<ZoneId>,
    pub history: &'a mut SessionHistory,
    pub sink: &'a mut dyn RecordSink,
    pub notifications: &'a mut notifications::Manager,
}

pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message, *ctx.screen) {
        NavbarEvent::None => {}
        NavbarEvent::SwitchTo(screen) => *ctx.screen = screen,
    }
    Task::none()
}

pub fn handle_body_map_message(
    ctx: &mut UpdateContext<'_>,
    message: body_map::Message,
) -> Task<Message> {
    let (effect, task) = ctx.body_map.handle_message(message);
    match effect {
        BodyMapEffect::None => {}
        BodyMapEffect::ZonePicked(selection) => *ctx.pending = Some(selection),
        BodyMapEffect::PreferencesChanged { gender, side } => {
            persistence::persist_variant_preference(ctx.config, gender, side);
        }
    }
    task.map(Message::BodyMap)
}

pub fn handle_zone_picker_message(
    ctx: &mut UpdateContext<'_>,
    message: zone_picker::Message,
) -> Task<Message> {
    let (effect, task) = ctx.zone_picker.handle_message(message);
    match effect {
        ZonePickerEffect::None | ZonePickerEffect::SelectionChanged(_) => {}
        ZonePickerEffect::DetailsRequested { change } => *ctx.details = Some(change.zone),
    }
    task.map(Message::ZonePicker)
}

/// Writes the pending pick. On failure the pick stays pending so the user
/// can try again.
pub fn handle_confirm_record(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(selection) = ctx.pending.take() else {
        return Task::none();
    };

    let draft = PainRecordDraft::from_selection(selection.clone(), chrono::Utc::now());
    match ctx.sink.submit(&draft) {
        Ok(()) => {
            ctx.history.push(draft);
            ctx.notifications.dismiss_key("notification-record-error");
            ctx.notifications
                .push(Notification::success("notification-record-saved"));
        }
        Err(err) => {
            log::warn!("could not write pain record: {}", err);
            *ctx.pending = Some(selection);
            ctx.notifications
                .push(Notification::error("notification-record-error"));
        }
    }
    Task::none()
}

pub fn handle_clear_selection(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.zone_picker.set_selected(Vec::new());
    *ctx.details = None;
    Task::none()
}

/// Advances both diagram panes and the notification timers.
pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    let body_map_task = handle_body_map_message(
        ctx,
        body_map::Message::Pane(diagram_pane::Message::Tick(now)),
    );
    let picker_task = handle_zone_picker_message(
        ctx,
        zone_picker::Message::Pane(diagram_pane::Message::Tick(now)),
    );
    ctx.notifications.tick(now);
    Task::batch([body_map_task, picker_task])
}

// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Each screen is its component next to a fixed-width sidebar: the
//! confirmation card and session history on the body map, the details panel
//! on the zone picker. Toasts float above everything.

use super::{Message, Screen};
use crate::domain::body::{ZoneId, ZoneSelection};
use crate::i18n::fluent::I18n;
use crate::record::SessionHistory;
use crate::ui::body_map::{self, gender_label, side_label};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{self, Toast};
use crate::ui::styles;
use crate::ui::theme;
use crate::ui::zone_picker;
use iced::widget::{button, stack, Column, Container, Row, Scrollable, Text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub body_map: &'a body_map::State,
    pub zone_picker: &'a zone_picker::State,
    pub pending: Option<&'a ZoneSelection>,
    pub details: Option<&'a ZoneId>,
    pub history: &'a SessionHistory,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let (main, sidebar): (Element<'_, Message>, Element<'_, Message>) = match ctx.screen {
        Screen::BodyMap => (
            ctx.body_map
                .view(body_map::ViewContext { i18n })
                .map(Message::BodyMap),
            body_map_sidebar(i18n, ctx.pending, ctx.history),
        ),
        Screen::ZonePicker => (
            ctx.zone_picker
                .view(zone_picker::ViewContext { i18n })
                .map(Message::ZonePicker),
            zone_picker_sidebar(i18n, ctx.zone_picker, ctx.details),
        ),
    };

    let navbar_view = navbar::view(NavbarViewContext {
        i18n,
        current: ctx.screen,
    })
    .map(Message::Navbar);

    let content = Row::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .width(Length::Fill)
        .height(Length::Fill)
        .push(Container::new(main).width(Length::Fill).height(Length::Fill))
        .push(
            Container::new(sidebar)
                .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
                .height(Length::Fill)
                .padding(spacing::SM)
                .style(styles::container::panel),
        );

    let page = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(navbar_view)
        .push(content);

    let toasts = Toast::view_overlay(ctx.notifications, i18n).map(Message::Notification);

    stack![page, toasts].into()
}

fn body_map_sidebar<'a>(
    i18n: &'a I18n,
    pending: Option<&'a ZoneSelection>,
    history: &'a SessionHistory,
) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::MD).width(Length::Fill);

    if let Some(selection) = pending {
        column = column.push(confirm_card(i18n, selection));
    }

    column = column.push(Text::new(i18n.tr("history-title")).size(typography::TITLE_SM));
    if history.is_empty() {
        column = column.push(
            Text::new(i18n.tr("history-empty"))
                .size(typography::BODY_SM)
                .color(theme::muted_text_color()),
        );
    } else {
        let entries = Column::with_children(history.iter().map(|draft| {
            let line = format!(
                "{}  {} ({}, {})",
                draft.recorded_at.with_timezone(&chrono::Local).format("%H:%M:%S"),
                draft.zone_name,
                gender_label(i18n, draft.gender_code),
                side_label(i18n, draft.side),
            );
            Text::new(line).size(typography::BODY_SM).into()
        }))
        .spacing(spacing::XXS);
        column = column.push(Scrollable::new(entries).height(Length::Fill));
    }

    column.into()
}

fn confirm_card<'a>(i18n: &'a I18n, selection: &'a ZoneSelection) -> Element<'a, Message> {
    let gender = gender_label(i18n, selection.gender_code);
    let side = side_label(i18n, selection.side);

    let actions = Row::new()
        .spacing(spacing::XS)
        .push(
            button(Text::new(i18n.tr("confirm-accept")))
                .style(styles::button::primary)
                .on_press(Message::ConfirmRecord),
        )
        .push(
            button(Text::new(i18n.tr("confirm-cancel")))
                .style(styles::button::unselected)
                .on_press(Message::CancelRecord),
        );

    let body = Column::new()
        .spacing(spacing::XS)
        .push(
            Text::new(i18n.tr_with_args("confirm-title", &[("zone", selection.zone_name.as_str())]))
                .size(typography::BODY_LG),
        )
        .push(
            Text::new(i18n.tr_with_args(
                "confirm-zone-code",
                &[("code", selection.zone_code.as_str())],
            ))
            .size(typography::CAPTION)
            .color(theme::muted_text_color()),
        )
        .push(
            Text::new(i18n.tr_with_args(
                "confirm-variant",
                &[("gender", gender.as_str()), ("side", side.as_str())],
            ))
            .size(typography::CAPTION)
            .color(theme::muted_text_color()),
        )
        .push(actions);

    Container::new(body)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::container::confirm_card)
        .into()
}

fn zone_picker_sidebar<'a>(
    i18n: &'a I18n,
    picker: &'a zone_picker::State,
    details: Option<&'a ZoneId>,
) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::MD).width(Length::Fill);

    if let Some(zone) = details {
        let label = picker.label(zone);
        let state_key = if picker.selection().contains(zone) {
            "picker-details-state-selected"
        } else {
            "picker-details-state-unselected"
        };
        let card = Column::new()
            .spacing(spacing::XS)
            .push(
                Text::new(i18n.tr_with_args("picker-details-title", &[("zone", label.text())]))
                    .size(typography::BODY_LG),
            )
            .push(
                Text::new(zone.as_str().to_string())
                    .size(typography::CAPTION)
                    .color(theme::muted_text_color()),
            )
            .push(Text::new(i18n.tr(state_key)).size(typography::BODY_SM))
            .push(
                button(Text::new(i18n.tr("picker-details-close")))
                    .style(styles::button::unselected)
                    .on_press(Message::CloseDetails),
            );
        column = column.push(
            Container::new(card)
                .width(Length::Fill)
                .padding(spacing::SM)
                .style(styles::container::confirm_card),
        );
    }

    let mut clear = button(Text::new(i18n.tr("picker-clear"))).style(styles::button::unselected);
    if !picker.selection().is_empty() {
        clear = clear.on_press(Message::ClearSelection);
    }
    column.push(clear).into()
}

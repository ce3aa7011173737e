// SPDX-License-Identifier: MPL-2.0
//! Navigation bar switching between the body map and the zone picker.

use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::spacing;
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Container, Row, Text},
    Element, Length,
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub current: Screen,
}

#[derive(Debug, Clone)]
pub enum Message {
    Open(Screen),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    SwitchTo(Screen),
}

/// Process a navbar message. Opening the current screen does nothing.
pub fn update(message: Message, current: Screen) -> Event {
    match message {
        Message::Open(screen) if screen != current => Event::SwitchTo(screen),
        Message::Open(_) => Event::None,
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new()
        .spacing(spacing::XS)
        .padding(spacing::SM)
        .align_y(Vertical::Center);

    for screen in Screen::ALL {
        let style = if screen == ctx.current {
            styles::button::selected
        } else {
            styles::button::unselected
        };
        row = row.push(
            button(Text::new(ctx.i18n.tr(screen.i18n_key())))
                .style(style)
                .on_press(Message::Open(screen)),
        );
    }

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::panel)
        .into()
}

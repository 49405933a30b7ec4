// SPDX-License-Identifier: MPL-2.0
//! Navigation bar shown above both screens.
//!
//! Holds the app title, one tab per screen, the diagnostics export and the
//! theme toggle.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Container, Row, Space, Text},
    Element, Length,
};

/// Screen a tab leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Viewer,
    Gallery,
}

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active: Tab,
    pub is_dark: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    SelectTab(Tab),
    ToggleTheme,
    ExportDiagnostics,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    SwitchTo(Tab),
    ToggleTheme,
    ExportDiagnostics,
}

/// Process a navbar message and return the corresponding event.
///
/// Selecting the tab that is already active does nothing.
pub fn update(message: Message, active: Tab) -> Event {
    match message {
        Message::SelectTab(tab) if tab == active => Event::None,
        Message::SelectTab(tab) => Event::SwitchTo(tab),
        Message::ToggleTheme => Event::ToggleTheme,
        Message::ExportDiagnostics => Event::ExportDiagnostics,
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("navbar-title")).size(typography::TITLE_MD);

    let theme_label = if ctx.is_dark {
        ctx.i18n.tr("navbar-theme-light")
    } else {
        ctx.i18n.tr("navbar-theme-dark")
    };
    let theme_button = button(Text::new(theme_label).size(typography::BODY))
        .on_press(Message::ToggleTheme)
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::control(ctx.is_dark));

    let diagnostics_button =
        button(Text::new(ctx.i18n.tr("navbar-diagnostics")).size(typography::BODY))
            .on_press(Message::ExportDiagnostics)
            .padding([spacing::XS, spacing::SM])
            .style(styles::button::control(ctx.is_dark));

    let row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(title)
        .push(Space::new().width(Length::Fixed(spacing::LG)))
        .push(tab_button(&ctx, Tab::Viewer, "navbar-viewer"))
        .push(tab_button(&ctx, Tab::Gallery, "navbar-gallery"))
        .push(Space::new().width(Length::Fill))
        .push(diagnostics_button)
        .push(theme_button);

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Left)
        .into()
}

fn tab_button<'a>(ctx: &ViewContext<'a>, tab: Tab, key: &str) -> Element<'a, Message> {
    button(Text::new(ctx.i18n.tr(key)).size(typography::BODY))
        .on_press(Message::SelectTab(tab))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::tab(ctx.is_dark, ctx.active == tab))
        .into()
}

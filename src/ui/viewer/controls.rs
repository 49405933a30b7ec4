// SPDX-License-Identifier: MPL-2.0
//! Floating action column: open, export, screenshot, fullscreen and reset.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::viewer::component::Message;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, tooltip, Column, Container, Text};
use iced::{Element, Length};

#[derive(Clone)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub is_dark: bool,
    /// Reset only makes sense once a model replaced the cube.
    pub has_model: bool,
}

/// One entry of the action column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Open,
    Export,
    Screenshot,
    Fullscreen,
    Reset,
}

impl Action {
    fn label_key(self) -> &'static str {
        match self {
            Action::Open => "viewer-open",
            Action::Export => "viewer-export",
            Action::Screenshot => "viewer-screenshot",
            Action::Fullscreen => "viewer-fullscreen",
            Action::Reset => "viewer-reset",
        }
    }

    fn tooltip_key(self) -> &'static str {
        match self {
            Action::Open => "viewer-open-tooltip",
            Action::Export => "viewer-export-tooltip",
            Action::Screenshot => "viewer-screenshot-tooltip",
            Action::Fullscreen => "viewer-fullscreen-tooltip",
            Action::Reset => "viewer-reset-tooltip",
        }
    }

    fn message(self) -> Message {
        match self {
            Action::Open => Message::OpenFileRequested,
            Action::Export => Message::Export,
            Action::Screenshot => Message::Screenshot,
            Action::Fullscreen => Message::ToggleFullscreen,
            Action::Reset => Message::Reset,
        }
    }
}

/// Actions shown, top to bottom.
#[must_use]
pub fn visible_actions(has_model: bool) -> Vec<Action> {
    let mut actions = vec![
        Action::Open,
        Action::Export,
        Action::Screenshot,
        Action::Fullscreen,
    ];
    if has_model {
        actions.push(Action::Reset);
    }
    actions
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let column = visible_actions(ctx.has_model).into_iter().fold(
        Column::new().spacing(spacing::XS),
        |column, action| column.push(action_button(&ctx, action)),
    );

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Top)
        .into()
}

fn action_button<'a>(ctx: &ViewContext<'a>, action: Action) -> Element<'a, Message> {
    let label = Text::new(ctx.i18n.tr(action.label_key()))
        .size(typography::BODY)
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    let button = button(label)
        .on_press(action.message())
        .padding([spacing::XS, spacing::SM])
        .width(Length::Fixed(sizing::ACTION_COLUMN_WIDTH))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(styles::button::control(ctx.is_dark));

    styles::tooltip::styled(
        button,
        ctx.i18n.tr(action.tooltip_key()),
        tooltip::Position::Left,
        ctx.is_dark,
    )
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_is_only_offered_with_a_model() {
        assert!(!visible_actions(false).contains(&Action::Reset));
        assert_eq!(visible_actions(true).last(), Some(&Action::Reset));
    }

    #[test]
    fn every_action_has_label_and_tooltip_keys() {
        let i18n = I18n::default();
        for action in visible_actions(true) {
            assert!(!i18n.tr(action.label_key()).starts_with("MISSING"));
            assert!(!i18n.tr(action.tooltip_key()).starts_with("MISSING"));
        }
    }
}

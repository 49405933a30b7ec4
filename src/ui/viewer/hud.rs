// SPDX-License-Identifier: MPL-2.0
//! Overlays drawn on top of the viewport: the compass badge, the tutorial or
//! controls hint, and the drop prompt.

use crate::i18n::fluent::I18n;
use crate::scene::CompassLabel;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::viewer::component::{Message, ViewerUiState};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{Column, Container, Space, Text};
use iced::{Element, Length};

/// Which hint the top-center pill shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    Tutorial,
    Instructions,
    Hidden,
}

impl Hint {
    /// The tutorial wins until it is dismissed; the controls hint follows
    /// until its deadline passes.
    #[must_use]
    pub fn for_state(ui: ViewerUiState) -> Self {
        if ui.tutorial_visible {
            Hint::Tutorial
        } else if ui.instructions_visible {
            Hint::Instructions
        } else {
            Hint::Hidden
        }
    }
}

/// Top-left badge with the current compass label.
pub fn compass<'a>(label: CompassLabel, is_dark: bool) -> Element<'a, Message> {
    let badge = Container::new(Text::new(label.as_str()).size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::container::hint_pill(is_dark));

    Container::new(badge)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(Horizontal::Left)
        .align_y(Vertical::Top)
        .into()
}

/// Top-center pill with the tutorial or the controls hint.
pub fn hint<'a>(i18n: &I18n, ui: ViewerUiState, is_dark: bool) -> Element<'a, Message> {
    let pill: Element<'a, Message> = match Hint::for_state(ui) {
        Hint::Tutorial => Container::new(Text::new(i18n.tr("viewer-tutorial")).size(typography::BODY))
            .padding([spacing::XS, spacing::MD])
            .style(styles::container::hint_pill(is_dark))
            .into(),
        Hint::Instructions => {
            Container::new(Text::new(i18n.tr("viewer-instructions")).size(typography::CAPTION))
                .padding([spacing::XS, spacing::MD])
                .style(styles::container::instructions_pill)
                .into()
        }
        Hint::Hidden => Space::new().into(),
    };

    Container::new(pill)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Top)
        .into()
}

/// Full-viewport prompt shown while files hover over the window.
pub fn drop_overlay<'a>(i18n: &I18n, is_dark: bool) -> Element<'a, Message> {
    let prompt = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(Text::new(i18n.tr("viewer-drop-title")).size(typography::TITLE_SM))
        .push(Text::new(i18n.tr("viewer-drop-formats")).size(typography::CAPTION));

    let card = Container::new(prompt)
        .padding(spacing::LG)
        .style(styles::container::card(is_dark));

    Container::new(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(styles::container::drop_backdrop)
        .into()
}

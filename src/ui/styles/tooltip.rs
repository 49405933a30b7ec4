// SPDX-License-Identifier: MPL-2.0
//! Tooltip styles for the viewer action buttons.
//!
//! Tooltips use the inverted surface of the current theme so they stand out
//! against the viewport.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, spacing, typography};
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Color, Element, Theme};

/// Inverted tooltip surface: dark on the light theme, light on the dark one.
pub fn tooltip_container(is_dark: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let (background, text) = if is_dark {
            (palette::GRAY_100, palette::GRAY_900)
        } else {
            (palette::GRAY_900, palette::GRAY_100)
        };

        container::Style {
            background: Some(Background::Color(background)),
            border: Border {
                radius: radius::SM.into(),
                width: border::WIDTH_SM,
                color: Color {
                    a: opacity::OVERLAY_BORDER,
                    ..palette::GRAY_400
                },
            },
            shadow: shadow::MD,
            text_color: Some(text),
            ..Default::default()
        }
    }
}

/// Wraps `content` in a tooltip showing `tip`.
pub fn styled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tip: impl Into<String>,
    position: tooltip::Position,
    is_dark: bool,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let tip_container = Container::new(Text::new(tip.into()).size(typography::CAPTION))
        .padding(spacing::XS)
        .style(tooltip_container(is_dark));

    tooltip(content, tip_container, position).gap(spacing::XS)
}

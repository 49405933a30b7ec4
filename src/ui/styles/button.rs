// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{border, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action (upload).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::INDIGO_500,
        button::Status::Disabled => palette::GRAY_400,
        button::Status::Active | button::Status::Pressed => palette::INDIGO_600,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: Border {
            color: palette::INDIGO_600,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        snap: true,
    }
}

/// Floating viewer control (export, screenshot, fullscreen, reset, open).
pub fn control(is_dark: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let scheme = ColorScheme::for_theme(is_dark);
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => {
                if is_dark {
                    Color {
                        a: 0.3,
                        ..palette::INDIGO_500
                    }
                } else {
                    palette::INDIGO_200
                }
            }
            _ => scheme.brand_surface,
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: scheme.brand_text,
            border: Border {
                color: scheme.brand_border,
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Navbar tab; the active screen is highlighted.
pub fn tab(is_dark: bool, active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let scheme = ColorScheme::for_theme(is_dark);
        let highlighted = active || matches!(status, button::Status::Hovered);
        button::Style {
            background: highlighted.then_some(Background::Color(scheme.brand_surface)),
            text_color: if active {
                scheme.brand_text
            } else {
                scheme.text_secondary
            },
            border: Border {
                radius: radius::MD.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let style = primary(&Theme::Dark, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::INDIGO_600))
        );
    }

    #[test]
    fn primary_button_greys_out_when_disabled() {
        let style = primary(&Theme::Dark, button::Status::Disabled);
        assert_eq!(style.background, Some(Background::Color(palette::GRAY_400)));
    }

    #[test]
    fn control_background_changes_on_hover() {
        let style_fn = control(true);
        let normal = style_fn(&Theme::Dark, button::Status::Active);
        let hover = style_fn(&Theme::Dark, button::Status::Hovered);
        assert_ne!(normal.background, hover.background);
    }

    #[test]
    fn inactive_tab_has_no_background() {
        let style = tab(false, false)(&Theme::Light, button::Status::Active);
        assert!(style.background.is_none());
        let style = tab(false, true)(&Theme::Light, button::Status::Active);
        assert!(style.background.is_some());
    }
}

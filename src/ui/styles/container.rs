// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Translucent pill behind the tutorial text and the compass label.
pub fn hint_pill(is_dark: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let scheme = ColorScheme::for_theme(is_dark);
        container::Style {
            background: Some(Background::Color(scheme.surface_card)),
            text_color: Some(scheme.brand_text),
            border: Border {
                color: scheme.brand_border,
                width: border::WIDTH_SM,
                radius: radius::FULL.into(),
            },
            ..Default::default()
        }
    }
}

/// Cyan-on-navy pill for the controls hint. Same in both themes.
pub fn instructions_pill(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::INDIGO_950
        })),
        text_color: Some(palette::CYAN_500),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_BORDER,
                ..palette::CYAN_500
            },
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

/// Full-viewport tint shown while files hover over the window.
pub fn drop_backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.1,
            ..palette::INDIGO_500
        })),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::INDIGO_400
            },
            width: border::WIDTH_MD,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// Card surface: the drop prompt and gallery entries.
pub fn card(is_dark: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let scheme = ColorScheme::for_theme(is_dark);
        container::Style {
            background: Some(Background::Color(scheme.surface_card)),
            text_color: Some(scheme.text_primary),
            border: Border {
                color: scheme.brand_border,
                width: border::WIDTH_SM,
                radius: radius::XL.into(),
            },
            ..Default::default()
        }
    }
}

/// Rounded frame around the rendered scene.
pub fn viewport(is_dark: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let scheme = ColorScheme::for_theme(is_dark);
        container::Style {
            background: Some(Background::Color(scheme.viewport_background)),
            border: Border {
                color: scheme.brand_border,
                width: border::WIDTH_SM,
                radius: radius::LG.into(),
            },
            ..Default::default()
        }
    }
}

/// Upload status line; success and failure use different colors.
pub fn status(is_dark: bool, success: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let scheme = ColorScheme::for_theme(is_dark);
        let (text, border_color) = if success {
            (scheme.success, scheme.brand_border)
        } else {
            (scheme.error, palette::GRAY_600)
        };
        container::Style {
            background: Some(Background::Color(scheme.surface_card)),
            text_color: Some(text),
            border: Border {
                color: border_color,
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            ..Default::default()
        }
    }
}

/// Page background behind every screen.
pub fn page(is_dark: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let scheme = ColorScheme::for_theme(is_dark);
        container::Style {
            background: Some(Background::Color(scheme.surface_primary)),
            text_color: Some(scheme.text_primary),
            ..Default::default()
        }
    }
}

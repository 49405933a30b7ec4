// SPDX-License-Identifier: MPL-2.0
//! Light and dark color schemes.
//!
//! The configured [`ThemeMode`] is resolved once at startup into a plain dark
//! flag. The navbar toggle flips that flag for the session only.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Colors used by the viewer and gallery for one theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    // Surface colors
    pub surface_primary: Color,
    pub surface_card: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,

    // Brand colors
    pub brand_text: Color,
    pub brand_surface: Color,
    pub brand_border: Color,

    pub accent: Color,

    // Semantic colors
    pub error: Color,
    pub success: Color,

    /// Background painted behind the rendered scene.
    pub viewport_background: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::GRAY_50,
            surface_card: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::WHITE
            },

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_600,

            brand_text: palette::INDIGO_600,
            brand_surface: palette::INDIGO_50,
            brand_border: palette::INDIGO_200,

            accent: palette::CYAN_500,

            error: palette::ERROR_500,
            success: palette::INDIGO_600,

            viewport_background: palette::GRAY_100,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,
            surface_card: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::GRAY_900
            },

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_400,

            brand_text: palette::INDIGO_300,
            brand_surface: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::INDIGO_600
            },
            brand_border: Color {
                a: opacity::OVERLAY_BORDER,
                ..palette::INDIGO_500
            },

            accent: palette::CYAN_500,

            error: palette::ERROR_300,
            success: palette::INDIGO_300,

            viewport_background: palette::GRAY_950,
        }
    }

    #[must_use]
    pub fn for_theme(is_dark: bool) -> Self {
        if is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Viewport background as a rasterizer color.
    #[must_use]
    pub fn viewport_clear_color(&self) -> tiny_skia::Color {
        let c = self.viewport_background;
        tiny_skia::Color::from_rgba(c.r, c.g, c.b, c.a).unwrap_or(tiny_skia::Color::BLACK)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detection errors fall back to dark.
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }
}

/// Built-in iced theme matching the dark flag.
#[must_use]
pub fn iced_theme(is_dark: bool) -> Theme {
    if is_dark {
        Theme::Dark
    } else {
        Theme::Light
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.surface_primary.r > 0.9);
    }

    #[test]
    fn dark_theme_has_dark_surface() {
        let scheme = ColorScheme::dark();
        assert!(scheme.surface_primary.r < 0.2);
        assert!(scheme.viewport_background.r < 0.1);
    }

    #[test]
    fn for_theme_selects_scheme() {
        assert_eq!(ColorScheme::for_theme(true), ColorScheme::dark());
        assert_eq!(ColorScheme::for_theme(false), ColorScheme::light());
    }

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        // System depends on the host, so only check it does not panic.
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn iced_theme_follows_flag() {
        assert_eq!(iced_theme(true), Theme::Dark);
        assert_eq!(iced_theme(false), Theme::Light);
    }
}

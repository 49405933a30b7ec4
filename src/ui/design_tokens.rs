// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants for the viewer and gallery screens.

## Organization

- **Palette**: Base colors (grayscale, indigo brand, cyan accent, semantic)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use model_lens::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let overlay_bg = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::GRAY_900
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_950: Color = Color::from_rgb(0.03, 0.03, 0.06);
    pub const GRAY_900: Color = Color::from_rgb(0.067, 0.094, 0.153); // #111827
    pub const GRAY_800: Color = Color::from_rgb(0.122, 0.161, 0.216); // #1F2937
    pub const GRAY_600: Color = Color::from_rgb(0.294, 0.333, 0.388); // #4B5563
    pub const GRAY_400: Color = Color::from_rgb(0.612, 0.639, 0.686); // #9CA3AF
    pub const GRAY_100: Color = Color::from_rgb(0.953, 0.957, 0.965); // #F3F4F6
    pub const GRAY_50: Color = Color::from_rgb(0.976, 0.980, 0.984); // #F9FAFB

    // Brand colors (indigo scale)
    pub const INDIGO_50: Color = Color::from_rgb(0.933, 0.949, 1.0); // #EEF2FF
    pub const INDIGO_200: Color = Color::from_rgb(0.780, 0.824, 0.996); // #C7D2FE
    pub const INDIGO_300: Color = Color::from_rgb(0.647, 0.706, 0.988); // #A5B4FC
    pub const INDIGO_400: Color = Color::from_rgb(0.506, 0.549, 0.973); // #818CF8
    pub const INDIGO_500: Color = Color::from_rgb(0.388, 0.400, 0.945); // #6366F1
    pub const INDIGO_600: Color = Color::from_rgb(0.310, 0.275, 0.898); // #4F46E5
    pub const INDIGO_950: Color = Color::from_rgb(0.118, 0.106, 0.294); // #1E1B4B

    // Accent (cyan), used by the controls hint
    pub const CYAN_500: Color = Color::from_rgb(0.024, 0.714, 0.831); // #06B6D4

    // Semantic colors
    pub const ERROR_300: Color = Color::from_rgb(0.988, 0.647, 0.647); // #FCA5A5
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_BORDER: f32 = 0.3;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const BUTTON_HEIGHT: f32 = 36.0;

    /// Width of the floating action column in the viewer.
    pub const ACTION_COLUMN_WIDTH: f32 = 140.0;

    /// Height of the viewport when not fullscreen.
    pub const VIEWPORT_HEIGHT: f32 = 600.0;

    /// Width of one gallery card.
    pub const CARD_WIDTH: f32 = 240.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Screen headings ("3D Model Gallery").
    pub const TITLE_LG: f32 = 30.0;

    /// App name in the navbar.
    pub const TITLE_MD: f32 = 20.0;

    /// Drop overlay headline.
    pub const TITLE_SM: f32 = 18.0;

    pub const BODY: f32 = 14.0;

    /// Hints and captions.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const XL: f32 = 16.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
    assert!(radius::XL > radius::LG);
};

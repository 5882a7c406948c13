// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Colors, spacing and sizes shared by every storefront view.

## Organization

- **Palette**: Base colors (neutral scale and the gold brand scale)
- **Opacity**: Overlay and surface opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use adena::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let scrim = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::BLACK
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

    // Neutrals
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_950: Color = Color::from_rgb(0.07, 0.07, 0.08);
    pub const GRAY_900: Color = Color::from_rgb(0.11, 0.11, 0.12);
    pub const GRAY_800: Color = Color::from_rgb(0.17, 0.17, 0.19);
    pub const GRAY_700: Color = Color::from_rgb(0.26, 0.26, 0.28);
    pub const GRAY_500: Color = Color::from_rgb(0.42, 0.44, 0.47);
    pub const GRAY_400: Color = Color::from_rgb(0.61, 0.64, 0.69);
    pub const GRAY_200: Color = Color::from_rgb(0.90, 0.91, 0.92);
    pub const GRAY_100: Color = Color::from_rgb(0.95, 0.95, 0.96);
    pub const GRAY_50: Color = Color::from_rgb(0.98, 0.98, 0.98);

    // Brand gold (#D4AF37 and neighbours)
    pub const GOLD_300: Color = Color::from_rgb(0.91, 0.82, 0.52);
    pub const GOLD_500: Color = Color::from_rgb(0.831, 0.686, 0.216);
    pub const GOLD_600: Color = Color::from_rgb(0.761, 0.635, 0.2);
    pub const GOLD_800: Color = Color::from_rgb(0.49, 0.40, 0.10);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const WARNING_500: Color = Color::from_rgb(0.961, 0.620, 0.043);
    pub const STAR_400: Color = Color::from_rgb(0.98, 0.80, 0.08);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.1;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Sticky navbar background.
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
    pub const SECTION: f32 = 64.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 20.0;
    pub const ICON_LG: f32 = 32.0;
    pub const ICON_XL: f32 = 40.0;

    pub const NAVBAR_HEIGHT: f32 = 64.0;
    pub const INPUT_HEIGHT: f32 = 44.0;
    pub const BADGE: f32 = 18.0;
    pub const INDICATOR_DOT: f32 = 10.0;

    pub const SIDEBAR_WIDTH: f32 = 290.0;
    pub const PRODUCT_CARD_WIDTH: f32 = 240.0;
    pub const PRODUCT_IMAGE_HEIGHT: f32 = 200.0;
    pub const CATEGORY_TILE_WIDTH: f32 = 220.0;
    pub const CATEGORY_TILE_HEIGHT: f32 = 260.0;
    pub const CONTENT_MAX_WIDTH: f32 = 1200.0;
    pub const HERO_TEXT_MAX_WIDTH: f32 = 720.0;
    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Hero headline.
    pub const DISPLAY: f32 = 48.0;

    /// Statistic numbers.
    pub const STAT: f32 = 40.0;

    /// Page headings.
    pub const TITLE_LG: f32 = 30.0;

    /// Brand name, section headings.
    pub const TITLE_MD: f32 = 22.0;

    /// Card titles, sidebar section headers.
    pub const TITLE_SM: f32 = 18.0;

    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    const SHADOW_COLOR: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.25);

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: SHADOW_COLOR,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 12.0,
    };

    pub const LG: Shadow = Shadow {
        color: SHADOW_COLOR,
        offset: Vector { x: 0.0, y: 10.0 },
        blur_radius: 24.0,
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
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::CAPTION);
};

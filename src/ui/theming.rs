// SPDX-License-Identifier: MPL-2.0
//! Color schemes and theme mode resolution.

use crate::store::ThemeFlag;
use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Colors used by the storefront styles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    // Surfaces
    pub background: Color,
    pub surface: Color,
    pub surface_raised: Color,
    pub border: Color,

    // Text
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Brand
    pub brand: Color,
    pub brand_hover: Color,
    pub on_brand: Color,

    pub error: Color,
    pub rating: Color,
    pub scrim: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            background: palette::GRAY_50,
            surface: palette::WHITE,
            surface_raised: palette::GRAY_100,
            border: palette::GRAY_200,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,
            text_muted: palette::GRAY_500,

            brand: palette::GOLD_500,
            brand_hover: palette::GOLD_600,
            on_brand: palette::WHITE,

            error: palette::ERROR_500,
            rating: palette::STAR_400,
            scrim: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::BLACK
            },
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            background: palette::GRAY_950,
            surface: palette::GRAY_900,
            surface_raised: palette::GRAY_800,
            border: palette::GRAY_700,

            text_primary: palette::GRAY_50,
            text_secondary: palette::GRAY_200,
            text_muted: palette::GRAY_400,

            brand: palette::GOLD_500,
            brand_hover: palette::GOLD_300,
            on_brand: palette::GRAY_950,

            error: palette::ERROR_500,
            rating: palette::STAR_400,
            scrim: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::BLACK
            },
        }
    }

    #[must_use]
    pub fn for_flag(flag: ThemeFlag) -> Self {
        match flag {
            ThemeFlag::Light => Self::light(),
            ThemeFlag::Dark => Self::dark(),
        }
    }
}

/// Base iced theme for a flag. Custom styles take their colors from
/// [`ColorScheme`].
#[must_use]
pub fn iced_theme(flag: ThemeFlag) -> Theme {
    match flag {
        ThemeFlag::Light => Theme::Light,
        ThemeFlag::Dark => Theme::Dark,
    }
}

/// Theme preference stored in `settings.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
    /// Follow the operating system.
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
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_scheme_has_light_background() {
        assert!(ColorScheme::light().background.r > 0.9);
    }

    #[test]
    fn dark_scheme_has_dark_background() {
        assert!(ColorScheme::dark().background.r < 0.2);
    }

    #[test]
    fn both_schemes_share_brand_gold() {
        assert_eq!(ColorScheme::light().brand, ColorScheme::dark().brand);
    }

    #[test]
    fn flag_selects_scheme() {
        assert_eq!(ColorScheme::for_flag(ThemeFlag::Dark), ColorScheme::dark());
        assert_eq!(ColorScheme::for_flag(ThemeFlag::Light), ColorScheme::light());
    }

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        // Depends on the host; only check it does not panic.
        let _ = ThemeMode::System.is_dark();
    }
}

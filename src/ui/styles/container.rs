// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Page background.
pub fn page(colors: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(colors.background)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Sticky navigation bar.
pub fn navbar(colors: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..colors.surface
        })),
        border: Border {
            color: colors.border,
            width: 1.0,
            ..Default::default()
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Raised card (product cards, testimonials, sidebar).
pub fn card(colors: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(colors.surface)),
        border: Border {
            color: colors.border,
            width: 1.0,
            radius: radius::LG.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Flat secondary surface (hero band, feature strip).
pub fn band(colors: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(colors.surface_raised)),
        ..Default::default()
    }
}

/// Stand-in tile for an image that is referenced but not fetched.
pub fn image_tile(colors: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(colors.surface_raised)),
        text_color: Some(colors.text_muted),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Small gold pill with a count.
pub fn badge(colors: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(colors.brand)),
        text_color: Some(colors.on_brand),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Search panel that slides below the navbar.
pub fn search_overlay(colors: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(colors.surface)),
        border: Border {
            color: colors.border,
            width: 1.0,
            ..Default::default()
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Round color swatch for a metal option.
pub fn swatch(color: Color, outline: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            color: outline,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

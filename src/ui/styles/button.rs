// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.
//!
//! Every style takes the active [`ColorScheme`] and returns the closure
//! expected by `button::style`.

use crate::ui::design_tokens::{radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Gold call-to-action button.
pub fn primary(colors: ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (background, elevation) = match status {
            button::Status::Hovered => (colors.brand_hover, shadow::LG),
            button::Status::Disabled => (colors.border, shadow::NONE),
            button::Status::Active | button::Status::Pressed => (colors.brand, shadow::MD),
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: colors.on_brand,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: elevation,
            ..Default::default()
        }
    }
}

/// Outlined button, used for secondary actions such as "Clear All".
pub fn outline(colors: ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);
        button::Style {
            background: hovered.then_some(Background::Color(colors.brand)),
            text_color: if hovered { colors.on_brand } else { colors.brand },
            border: Border {
                color: colors.brand,
                width: 1.0,
                radius: radius::MD.into(),
            },
            ..Default::default()
        }
    }
}

/// Borderless text link. `active` marks the current route.
pub fn link(colors: ColorScheme, active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let highlighted = active || matches!(status, button::Status::Hovered);
        button::Style {
            background: None,
            text_color: if highlighted {
                colors.brand
            } else {
                colors.text_primary
            },
            ..Default::default()
        }
    }
}

/// Round icon button on a surface background; turns gold on hover.
pub fn icon(colors: ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);
        button::Style {
            background: Some(Background::Color(if hovered {
                colors.brand
            } else {
                colors.surface
            })),
            text_color: if hovered {
                colors.on_brand
            } else {
                colors.text_primary
            },
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::MD,
            ..Default::default()
        }
    }
}

/// Full-width row in a sidebar list (category or metal option).
pub fn option_row(colors: ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| button::Style {
        background: matches!(status, button::Status::Hovered)
            .then_some(Background::Color(colors.surface_raised)),
        text_color: colors.text_secondary,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Slide indicator dot.
pub fn indicator(colors: ColorScheme, current: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let color = if current || matches!(status, button::Status::Hovered) {
            colors.brand
        } else {
            Color {
                a: 0.5,
                ..colors.text_muted
            }
        };
        button::Style {
            background: Some(Background::Color(color)),
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Destructive text action.
pub fn danger(colors: ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| button::Style {
        background: None,
        text_color: if matches!(status, button::Status::Hovered) {
            colors.error
        } else {
            colors.text_muted
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_hover_uses_hover_color() {
        let colors = ColorScheme::light();
        let style = primary(colors)(&Theme::Light, button::Status::Hovered);
        assert_eq!(style.background, Some(Background::Color(colors.brand_hover)));
    }

    #[test]
    fn active_link_is_gold() {
        let colors = ColorScheme::dark();
        let style = link(colors, true)(&Theme::Dark, button::Status::Active);
        assert_eq!(style.text_color, colors.brand);
        let style = link(colors, false)(&Theme::Dark, button::Status::Active);
        assert_eq!(style.text_color, colors.text_primary);
    }
}

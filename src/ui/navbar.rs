// SPDX-License-Identifier: MPL-2.0
//! Navigation bar.
//!
//! Brand, route links, the search overlay toggle, the theme toggle and the
//! account and cart shortcuts. The cart button carries a badge with the
//! number of cart entries.

use crate::app::screen::Route;
use crate::config::SEARCH_OVERLAY_HEIGHT;
use crate::i18n::fluent::I18n;
use crate::store::ThemeFlag;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, text_input, Column, Container, Row, Space, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Background, Border, Element, Length, Theme,
};

/// Search overlay state, owned by the application.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    pub search_open: bool,
    pub query: String,
}

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: ColorScheme,
    pub route: Route,
    pub theme: ThemeFlag,
    pub cart_count: usize,
    pub state: &'a State,
}

#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Route),
    ToggleSearch,
    CloseSearch,
    QueryChanged(String),
    SubmitSearch,
    ToggleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(Route),
    /// Show the product listing filtered by this name query.
    Search(String),
    ToggleTheme,
}

/// Process a navbar message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::Navigate(route) => {
            state.search_open = false;
            Event::Navigate(route)
        }
        Message::ToggleSearch => {
            state.search_open = !state.search_open;
            Event::None
        }
        // The query survives closing so reopening shows it again.
        Message::CloseSearch => {
            state.search_open = false;
            Event::None
        }
        Message::QueryChanged(query) => {
            state.query = query;
            Event::None
        }
        Message::SubmitSearch => {
            state.search_open = false;
            Event::Search(state.query.trim().to_string())
        }
        Message::ToggleTheme => Event::ToggleTheme,
    }
}

/// Render the navigation bar, with the search overlay below it when open.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill).push(build_top_bar(&ctx));

    if ctx.state.search_open {
        content = content.push(build_search_overlay(&ctx));
    }

    content.into()
}

fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let colors = ctx.colors;

    let brand = button(
        Text::new(ctx.i18n.tr("brand-name"))
            .size(typography::TITLE_MD)
            .font(iced::Font {
                weight: iced::font::Weight::Bold,
                ..iced::Font::DEFAULT
            }),
    )
    .on_press(Message::Navigate(Route::Home))
    .padding(0)
    .style(styles::button::link(colors, false));

    let links = Route::NAV_LINKS
        .iter()
        .fold(Row::new().spacing(spacing::LG), |row, route| {
            row.push(
                button(Text::new(ctx.i18n.tr(route.i18n_key())).size(typography::BODY))
                    .on_press(Message::Navigate(*route))
                    .padding(spacing::XXS)
                    .style(styles::button::link(colors, ctx.route == *route)),
            )
        });

    let theme_glyph = if ctx.theme.is_dark() { "☀" } else { "☾" };

    let actions = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(icon_button("⌕", Message::ToggleSearch, colors))
        .push(icon_button("👤", Message::Navigate(Route::Account), colors))
        .push(cart_button(ctx))
        .push(icon_button(theme_glyph, Message::ToggleTheme, colors));

    let row = Row::new()
        .spacing(spacing::XL)
        .padding([0.0, spacing::LG])
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill))
        .push(links)
        .push(Space::new().width(Length::Fill))
        .push(actions);

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::navbar(colors))
        .into()
}

fn icon_button<'a>(glyph: &'a str, message: Message, colors: ColorScheme) -> Element<'a, Message> {
    button(
        Container::new(Text::new(glyph).size(typography::BODY_LG))
            .width(Length::Fixed(sizing::ICON_LG))
            .height(Length::Fixed(sizing::ICON_LG))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
    )
    .on_press(message)
    .padding(0)
    .style(styles::button::icon(colors))
    .into()
}

fn cart_button<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new()
        .spacing(spacing::XXS)
        .align_y(Vertical::Center)
        .push(icon_button("🛒", Message::Navigate(Route::Cart), ctx.colors));

    if ctx.cart_count > 0 {
        let badge = Container::new(Text::new(ctx.cart_count.to_string()).size(typography::CAPTION))
            .width(Length::Fixed(sizing::BADGE))
            .height(Length::Fixed(sizing::BADGE))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(styles::container::badge(ctx.colors));
        row = row.push(badge);
    }

    row.into()
}

fn build_search_overlay<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let colors = ctx.colors;

    let input = text_input(&ctx.i18n.tr("search-placeholder"), &ctx.state.query)
        .on_input(Message::QueryChanged)
        .on_submit(Message::SubmitSearch)
        .padding(spacing::SM)
        .size(typography::BODY_LG)
        .width(Length::Fill)
        .style(move |_theme: &Theme, status: text_input::Status| {
            let border_color = match status {
                text_input::Status::Focused { .. } => colors.brand,
                _ => colors.border,
            };
            text_input::Style {
                background: Background::Color(colors.background),
                border: Border {
                    color: border_color,
                    width: 1.0,
                    radius: crate::ui::design_tokens::radius::FULL.into(),
                },
                icon: colors.text_muted,
                placeholder: colors.text_muted,
                value: colors.text_primary,
                selection: colors.brand,
            }
        });

    let submit = button(Text::new(ctx.i18n.tr("search-submit")).size(typography::BODY))
        .on_press(Message::SubmitSearch)
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary(colors));

    let close = icon_button("✕", Message::CloseSearch, colors);

    let row = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(input)
        .push(submit)
        .push(close);

    Container::new(
        Container::new(row)
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .padding([0.0, spacing::LG]),
    )
    .width(Length::Fill)
    .height(Length::Fixed(SEARCH_OVERLAY_HEIGHT))
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .style(styles::container::search_overlay(colors))
    .into()
}

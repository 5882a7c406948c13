// SPDX-License-Identifier: MPL-2.0
//! Static information pages: about, contact and account.

use crate::app::screen::Route;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, scrollable, text, Column, Container, Text};
use iced::{alignment::Horizontal, Element, Length, Theme};

/// Which static page to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    About,
    Contact,
    Account,
}

impl Page {
    /// Page shown for `route`, if the route is a static page.
    #[must_use]
    pub fn for_route(route: Route) -> Option<Self> {
        match route {
            Route::About => Some(Self::About),
            Route::Contact => Some(Self::Contact),
            Route::Account => Some(Self::Account),
            Route::Home | Route::Product | Route::Cart => None,
        }
    }

    fn title_key(self) -> &'static str {
        match self {
            Self::About => "about-title",
            Self::Contact => "contact-title",
            Self::Account => "account-title",
        }
    }

    fn paragraph_keys(self) -> &'static [&'static str] {
        match self {
            Self::About => &["about-story", "about-promise"],
            Self::Contact => &["contact-intro", "contact-email", "contact-hours"],
            Self::Account => &["account-intro"],
        }
    }
}

/// Contextual data needed to render a static page.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: ColorScheme,
    pub page: Page,
}

#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Route),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Navigate(Route),
}

#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::Navigate(route) => Event::Navigate(route),
    }
}

/// Render a static page.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let colors = ctx.colors;

    let paragraphs = ctx.page.paragraph_keys().iter().fold(
        Column::new().spacing(spacing::MD),
        |column, key| {
            column.push(
                Text::new(ctx.i18n.tr(key))
                    .size(typography::BODY_LG)
                    .style(move |_theme: &Theme| text::Style {
                        color: Some(colors.text_secondary),
                    }),
            )
        },
    );

    let shop = button(Text::new(ctx.i18n.tr("page-shop-button")).size(typography::BODY))
        .on_press(Message::Navigate(Route::Product))
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary(colors));

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .max_width(sizing::HERO_TEXT_MAX_WIDTH)
        .push(Text::new(ctx.i18n.tr(ctx.page.title_key())).size(typography::TITLE_LG))
        .push(paragraphs)
        .push(shop);

    scrollable(
        Container::new(content)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .height(Length::Fill)
    .into()
}

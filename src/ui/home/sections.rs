// SPDX-License-Identifier: MPL-2.0
//! Home page sections below the hero.

use super::{Message, ViewContext};
use crate::domain::content::{self, FEATURES, TESTIMONIALS};
use crate::domain::image::{ImageSource, PRODUCT_PLACEHOLDER};
use crate::domain::stats::format_thousands;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, Column, Container, Row, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length, Theme,
};

/// Section heading with a muted subtitle.
fn heading<'a>(ctx: &ViewContext<'a>, title_key: &str, subtitle_key: &str) -> Column<'a, Message> {
    let colors = ctx.colors;
    Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(Text::new(ctx.i18n.tr(title_key)).size(typography::TITLE_LG))
        .push(
            Text::new(ctx.i18n.tr(subtitle_key))
                .size(typography::BODY)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(colors.text_muted),
                }),
        )
}

fn centered<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    Container::new(
        Container::new(content)
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .padding([0.0, spacing::LG]),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Center)
    .into()
}

pub(super) fn stats<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let colors = ctx.colors;
    let now = ctx.state.now();

    let row = ctx
        .state
        .stats()
        .iter()
        .fold(Row::new().spacing(spacing::XXL), |row, stat| {
            let mut number = format_thousands(stat.counter.value_at(now));
            if stat.plus_suffix {
                number.push('+');
            }
            row.push(
                Column::new()
                    .spacing(spacing::XS)
                    .width(Length::Fill)
                    .align_x(Horizontal::Center)
                    .push(Text::new(stat.glyph).size(typography::TITLE_LG))
                    .push(
                        Text::new(number)
                            .size(typography::STAT)
                            .style(move |_theme: &Theme| text::Style {
                                color: Some(colors.brand),
                            }),
                    )
                    .push(Text::new(ctx.i18n.tr(stat.label_key)).size(typography::BODY)),
            )
        });

    Container::new(centered(row))
        .width(Length::Fill)
        .padding([spacing::XXL, 0.0])
        .style(styles::container::band(colors))
        .into()
}

pub(super) fn categories<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let colors = ctx.colors;

    let tiles = content::category_tiles().into_iter().fold(
        Row::new().spacing(spacing::LG),
        |row, tile| {
            let image = ImageSource::resolve(tile.image_url, PRODUCT_PLACEHOLDER);
            let label = crate::ui::category_label(ctx.i18n, &tile.category);
            let card = Column::new()
                .spacing(spacing::SM)
                .align_x(Horizontal::Center)
                .push(
                    Container::new(Text::new(image.host().to_string()).size(typography::CAPTION))
                        .width(Length::Fill)
                        .height(Length::Fill)
                        .align_x(Horizontal::Center)
                        .align_y(Vertical::Center)
                        .style(styles::container::image_tile(colors)),
                )
                .push(Text::new(label).size(typography::TITLE_SM));

            row.push(
                button(card)
                    .width(Length::Fixed(sizing::CATEGORY_TILE_WIDTH))
                    .height(Length::Fixed(sizing::CATEGORY_TILE_HEIGHT))
                    .padding(spacing::SM)
                    .on_press(Message::OpenCategory(tile.category))
                    .style(styles::button::option_row(colors)),
            )
        },
    );

    centered(
        Column::new()
            .spacing(spacing::XL)
            .align_x(Horizontal::Center)
            .push(heading(ctx, "home-categories-title", "home-categories-subtitle"))
            .push(tiles),
    )
}

pub(super) fn features<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let colors = ctx.colors;

    let row = FEATURES
        .iter()
        .fold(Row::new().spacing(spacing::XL), |row, feature| {
            row.push(
                Column::new()
                    .spacing(spacing::SM)
                    .width(Length::Fill)
                    .align_x(Horizontal::Center)
                    .push(
                        Text::new(feature.glyph)
                            .size(typography::TITLE_LG)
                            .style(move |_theme: &Theme| text::Style {
                                color: Some(colors.brand),
                            }),
                    )
                    .push(Text::new(ctx.i18n.tr(feature.title_key)).size(typography::TITLE_SM))
                    .push(
                        Text::new(ctx.i18n.tr(feature.description_key))
                            .size(typography::BODY)
                            .style(move |_theme: &Theme| text::Style {
                                color: Some(colors.text_secondary),
                            }),
                    ),
            )
        });

    centered(
        Column::new()
            .spacing(spacing::XL)
            .align_x(Horizontal::Center)
            .push(heading(ctx, "home-features-title", "home-features-subtitle"))
            .push(row),
    )
}

pub(super) fn testimonials<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let colors = ctx.colors;

    let row = TESTIMONIALS
        .iter()
        .fold(Row::new().spacing(spacing::LG), |row, testimonial| {
            row.push(
                Container::new(
                    Column::new()
                        .spacing(spacing::MD)
                        .push(
                            Text::new("★★★★★")
                                .size(typography::BODY_LG)
                                .style(move |_theme: &Theme| text::Style {
                                    color: Some(colors.rating),
                                }),
                        )
                        .push(Text::new(format!("“{}”", testimonial.quote)).size(typography::BODY_LG))
                        .push(
                            Text::new(format!("— {}", testimonial.author))
                                .size(typography::BODY)
                                .style(move |_theme: &Theme| text::Style {
                                    color: Some(colors.text_muted),
                                }),
                        ),
                )
                .width(Length::Fill)
                .padding(spacing::LG)
                .style(styles::container::card(colors)),
            )
        });

    centered(
        Column::new()
            .spacing(spacing::XL)
            .align_x(Horizontal::Center)
            .push(heading(ctx, "home-testimonials-title", "home-testimonials-subtitle"))
            .push(row),
    )
}

pub(super) fn closing<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let colors = ctx.colors;

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(heading(ctx, "home-cta-title", "home-cta-subtitle"))
        .push(
            button(Text::new(ctx.i18n.tr("home-cta-button")).size(typography::BODY_LG))
                .on_press(Message::ShopAll)
                .padding([spacing::SM, spacing::XL])
                .style(styles::button::primary(colors)),
        );

    Container::new(content)
        .width(Length::Fill)
        .padding([spacing::SECTION, spacing::LG])
        .align_x(Horizontal::Center)
        .style(styles::container::band(colors))
        .into()
}

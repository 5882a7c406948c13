// SPDX-License-Identifier: MPL-2.0
//! Product grid with the result count, sort picker and product cards.

use super::{Message, ViewContext};
use crate::domain::catalog::{Product, SortOrder};
use crate::domain::image::{ImageSource, PRODUCT_PLACEHOLDER};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::category_label;
use crate::ui::theming::ColorScheme;
use fluent_bundle::FluentValue;
use iced::widget::{button, pick_list, text, Column, Container, Row, Space, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    font, Element, Font, Length, Theme,
};

/// Cards per grid row.
const COLUMNS: usize = 3;

/// Sort option for the pick list.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SortOption {
    order: SortOrder,
    label: String,
}

impl std::fmt::Display for SortOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

pub(super) fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let visible = ctx.state.visible(ctx.products);

    let mut column = Column::new()
        .spacing(spacing::LG)
        .width(Length::Fill)
        .push(toolbar(ctx, visible.len()));

    if !ctx.state.selection.name_query().trim().is_empty() {
        column = column.push(query_chip(ctx));
    }

    if visible.is_empty() {
        return column.push(empty_state(ctx)).into();
    }

    for chunk in visible.chunks(COLUMNS) {
        let row = chunk
            .iter()
            .fold(Row::new().spacing(spacing::LG), |row, product| {
                row.push(card(ctx, product))
            });
        column = column.push(row);
    }

    column.into()
}

fn toolbar<'a>(ctx: &ViewContext<'a>, count: usize) -> Element<'a, Message> {
    let results = Text::new(
        ctx.i18n
            .tr_with_args("product-results", &[("count", FluentValue::from(count))]),
    )
    .size(typography::BODY);

    let options: Vec<SortOption> = SortOrder::ALL
        .iter()
        .map(|order| SortOption {
            order: *order,
            label: ctx.i18n.tr(order.i18n_key()),
        })
        .collect();
    let selected = options
        .iter()
        .find(|option| option.order == ctx.state.sort)
        .cloned();

    let picker = pick_list(options, selected, |option| Message::SortChanged(option.order))
        .padding(spacing::XS)
        .text_size(typography::BODY);

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(ctx.i18n.tr("product-title")).size(typography::TITLE_LG))
        .push(Space::new().width(Length::Fill))
        .push(results)
        .push(Text::new(ctx.i18n.tr("sort-label")).size(typography::BODY))
        .push(picker)
        .into()
}

fn query_chip<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let label = format!(
        "{} “{}”",
        ctx.i18n.tr("product-search-label"),
        ctx.state.selection.name_query().trim()
    );

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(label).size(typography::BODY))
        .push(
            button(Text::new("✕").size(typography::CAPTION))
                .on_press(Message::ClearQuery)
                .padding(spacing::XXS)
                .style(styles::button::danger(ctx.colors)),
        )
        .into()
}

fn empty_state<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let colors = ctx.colors;
    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .push(
                Text::new(ctx.i18n.tr("product-empty"))
                    .size(typography::TITLE_SM)
                    .style(move |_theme: &Theme| text::Style {
                        color: Some(colors.text_secondary),
                    }),
            )
            .push(
                button(Text::new(ctx.i18n.tr("filter-clear-all")).size(typography::BODY))
                    .on_press(Message::ClearAll)
                    .padding([spacing::XS, spacing::LG])
                    .style(styles::button::primary(colors)),
            ),
    )
    .width(Length::Fill)
    .padding(spacing::XXL)
    .align_x(Horizontal::Center)
    .into()
}

/// A product card: image tile, category, name, rating, price and actions.
fn card<'a>(ctx: &ViewContext<'a>, product: &Product) -> Element<'a, Message> {
    let colors = ctx.colors;
    let image = ImageSource::resolve(&product.image_url, PRODUCT_PLACEHOLDER);

    let mut tile = Column::new().push(
        Text::new(image.host().to_string())
            .size(typography::CAPTION)
            .style(move |_theme: &Theme| text::Style {
                color: Some(colors.text_muted),
            }),
    );
    if product.is_on_sale() {
        tile = tile.push(sale_badge(ctx.i18n.tr("product-sale"), colors));
    }

    let actions = Row::new()
        .spacing(spacing::XS)
        .push(action("♡", Message::AddToWishlist(product.id.clone()), colors))
        .push(action("🛒", Message::AddToCart(product.id.clone()), colors))
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(ctx.i18n.tr("product-delete")).size(typography::CAPTION))
                .on_press(Message::Delete(product.id.clone()))
                .padding(spacing::XXS)
                .style(styles::button::danger(colors)),
        );

    let mut price = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(
            Text::new(product.price.to_string())
                .size(typography::TITLE_SM)
                .font(Font {
                    weight: font::Weight::Bold,
                    ..Font::DEFAULT
                })
                .style(move |_theme: &Theme| text::Style {
                    color: Some(colors.brand),
                }),
        );
    if let Some(original) = product.original_price.filter(|_| product.is_on_sale()) {
        price = price.push(
            Text::new(original.to_string())
                .size(typography::BODY)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(colors.text_muted),
                }),
        );
    }

    let rating = Text::new(format!(
        "★ {} ({})",
        product.rating,
        ctx.i18n.tr_with_args(
            "product-reviews",
            &[("count", FluentValue::from(product.review_count))]
        )
    ))
    .size(typography::CAPTION)
    .style(move |_theme: &Theme| text::Style {
        color: Some(colors.rating),
    });

    let body = Column::new()
        .spacing(spacing::XS)
        .push(
            Container::new(tile)
                .width(Length::Fill)
                .height(Length::Fixed(sizing::PRODUCT_IMAGE_HEIGHT))
                .padding(spacing::SM)
                .style(styles::container::image_tile(colors)),
        )
        .push(
            Text::new(category_label(ctx.i18n, &product.category).to_uppercase())
                .size(typography::CAPTION)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(colors.text_muted),
                }),
        )
        .push(Text::new(product.name.clone()).size(typography::BODY_LG))
        .push(rating)
        .push(price)
        .push(actions);

    Container::new(body)
        .width(Length::Fixed(sizing::PRODUCT_CARD_WIDTH))
        .padding(spacing::SM)
        .style(styles::container::card(colors))
        .into()
}

fn sale_badge<'a>(label: String, colors: ColorScheme) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::badge(colors))
        .into()
}

fn action<'a>(glyph: &'a str, message: Message, colors: ColorScheme) -> Element<'a, Message> {
    button(
        Container::new(Text::new(glyph).size(typography::BODY))
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

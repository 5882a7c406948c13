// SPDX-License-Identifier: MPL-2.0
//! Cart and wishlist page.
//!
//! Cart entries with the same id are shown once with a quantity. Ids that
//! no longer match a catalog product are skipped.

use crate::app::screen::Route;
use crate::domain::catalog::{Price, Product, ProductId};
use crate::i18n::fluent::I18n;
use crate::store::CatalogStore;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, rule, scrollable, text, Column, Container, Row, Space, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length, Theme,
};

/// Contextual data needed to render the cart page.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: ColorScheme,
    pub catalog: &'a CatalogStore,
}

#[derive(Debug, Clone)]
pub enum Message {
    ContinueShopping,
    MoveToCart(ProductId),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Navigate(Route),
    AddToCart(ProductId),
}

#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::ContinueShopping => Event::Navigate(Route::Product),
        Message::MoveToCart(id) => Event::AddToCart(id),
    }
}

/// A cart row: a product and how many times it was added.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartLine<'a> {
    pub product: &'a Product,
    pub quantity: u32,
}

/// Groups cart products by id, in order of first appearance.
#[must_use]
pub fn cart_lines<'a>(products: &[&'a Product]) -> Vec<CartLine<'a>> {
    let mut lines: Vec<CartLine<'a>> = Vec::new();
    for product in products {
        match lines.iter_mut().find(|line| line.product.id == product.id) {
            Some(line) => line.quantity += 1,
            None => lines.push(CartLine {
                product,
                quantity: 1,
            }),
        }
    }
    lines
}

/// Sum of `price × quantity` over all lines.
#[must_use]
pub fn total(lines: &[CartLine<'_>]) -> Price {
    Price(
        lines
            .iter()
            .map(|line| line.product.price.value().saturating_mul(line.quantity))
            .fold(0u32, u32::saturating_add),
    )
}

/// Render the cart page.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let colors = ctx.colors;
    let cart_products = ctx.catalog.cart_products();
    let lines = cart_lines(&cart_products);
    let wishlist = ctx.catalog.wishlist_products();

    let mut cart_section = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(ctx.i18n.tr("cart-title")).size(typography::TITLE_LG));

    if lines.is_empty() {
        cart_section = cart_section.push(muted(ctx.i18n.tr("cart-empty"), colors));
    } else {
        for line in &lines {
            cart_section = cart_section.push(line_row(line, colors));
        }
        cart_section = cart_section.push(rule::horizontal(1)).push(
            Row::new()
                .push(Text::new(ctx.i18n.tr("cart-total")).size(typography::TITLE_SM))
                .push(Space::new().width(Length::Fill))
                .push(Text::new(total(&lines).to_string()).size(typography::TITLE_SM)),
        );
    }

    let mut wishlist_section = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(ctx.i18n.tr("wishlist-title")).size(typography::TITLE_MD));

    if wishlist.is_empty() {
        wishlist_section = wishlist_section.push(muted(ctx.i18n.tr("wishlist-empty"), colors));
    } else {
        for product in wishlist {
            wishlist_section = wishlist_section.push(
                Row::new()
                    .spacing(spacing::MD)
                    .align_y(Vertical::Center)
                    .push(Text::new(product.name.clone()).size(typography::BODY_LG))
                    .push(Space::new().width(Length::Fill))
                    .push(Text::new(product.price.to_string()).size(typography::BODY))
                    .push(
                        button(Text::new(ctx.i18n.tr("wishlist-move-to-cart")).size(typography::CAPTION))
                            .on_press(Message::MoveToCart(product.id.clone()))
                            .padding([spacing::XXS, spacing::SM])
                            .style(styles::button::outline(colors)),
                    ),
            );
        }
    }

    let continue_button = button(Text::new(ctx.i18n.tr("cart-continue")).size(typography::BODY))
        .on_press(Message::ContinueShopping)
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary(colors));

    let content = Column::new()
        .spacing(spacing::XL)
        .padding(spacing::LG)
        .push(
            Container::new(cart_section)
                .width(Length::Fill)
                .padding(spacing::LG)
                .style(styles::container::card(colors)),
        )
        .push(
            Container::new(wishlist_section)
                .width(Length::Fill)
                .padding(spacing::LG)
                .style(styles::container::card(colors)),
        )
        .push(continue_button);

    scrollable(
        Container::new(Container::new(content).max_width(sizing::CONTENT_MAX_WIDTH))
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .height(Length::Fill)
    .into()
}

fn line_row<'a>(line: &CartLine<'_>, colors: ColorScheme) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(Text::new(line.product.name.clone()).size(typography::BODY_LG))
        .push(muted(format!("× {}", line.quantity), colors))
        .push(Space::new().width(Length::Fill))
        .push(Text::new(line.product.price.to_string()).size(typography::BODY))
        .into()
}

fn muted<'a>(content: String, colors: ColorScheme) -> Element<'a, Message> {
    Text::new(content)
        .size(typography::BODY)
        .style(move |_theme: &Theme| text::Style {
            color: Some(colors.text_muted),
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::seed;
    use crate::store::MemoryStore;

    #[test]
    fn duplicate_ids_are_grouped_in_first_seen_order() {
        let products = seed::products();
        let refs = vec![&products[2], &products[0], &products[2]];
        let lines = cart_lines(&refs);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].product.id, products[2].id);
        assert_eq!(lines[0].quantity, 2);
        assert_eq!(lines[1].quantity, 1);
    }

    #[test]
    fn total_multiplies_by_quantity() {
        let products = seed::products();
        let refs = vec![&products[0], &products[0], &products[1]];
        let lines = cart_lines(&refs);
        let expected = products[0].price.value() * 2 + products[1].price.value();
        assert_eq!(total(&lines), Price(expected));
        assert_eq!(total(&[]), Price(0));
    }

    #[test]
    fn messages_map_to_events() {
        assert_eq!(update(Message::ContinueShopping), Event::Navigate(Route::Product));
        let id = ProductId::from(4);
        assert_eq!(update(Message::MoveToCart(id.clone())), Event::AddToCart(id));
    }

    #[test]
    fn cart_view_renders() {
        let storage = MemoryStore::new();
        let mut catalog = CatalogStore::new(seed::products(), &storage);
        let _ = catalog.add_to_cart(ProductId::from(1));
        let _ = catalog.add_to_wishlist(ProductId::from(2));
        let i18n = I18n::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            colors: ColorScheme::light(),
            catalog: &catalog,
        });
    }
}

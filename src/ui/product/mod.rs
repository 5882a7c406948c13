// SPDX-License-Identifier: MPL-2.0
//! Product listing page: filter sidebar and product grid.
//!
//! The filter selection lives here and survives navigation, so coming back
//! to the listing shows the same results. Catalog mutations (cart,
//! wishlist, delete) are forwarded to the application as events.

mod grid;
mod sidebar;

use crate::domain::catalog::{
    compute_visible, Category, CollapsedSections, FilterSelection, Metal, PriceBound, Product,
    ProductId, SidebarSection, SortOrder,
};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::theming::ColorScheme;
use iced::widget::{scrollable, Container, Row};
use iced::{alignment::Horizontal, Element, Length};

/// Listing page state.
#[derive(Debug, Clone, Default)]
pub struct State {
    pub selection: FilterSelection,
    pub sort: SortOrder,
    pub collapsed: CollapsedSections,
}

impl State {
    #[must_use]
    pub fn new(max_price: u32) -> Self {
        Self {
            selection: FilterSelection::new(max_price),
            ..Self::default()
        }
    }

    /// Products to display, filtered then sorted.
    #[must_use]
    pub fn visible<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let mut visible = compute_visible(products, &self.selection);
        self.sort.apply(&mut visible);
        visible
    }

    /// Narrows the listing to `category`, as when arriving from a category
    /// link.
    pub fn show_category(&mut self, category: Category) {
        self.selection.select_only_category(category);
    }

    /// Replaces the name query.
    pub fn search(&mut self, query: &str) {
        self.selection.set_name_query(query);
    }
}

/// Contextual data needed to render the listing.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: ColorScheme,
    pub state: &'a State,
    pub products: &'a [Product],
    pub price_step: u32,
}

#[derive(Debug, Clone)]
pub enum Message {
    ToggleCategory(Category),
    ToggleMetal(Metal),
    /// Slider moved; only the draft range changes.
    DraftPrice(PriceBound, u32),
    /// Slider released; the draft range takes effect.
    CommitPrice,
    ClearAll,
    ClearQuery,
    ToggleSection(SidebarSection),
    SortChanged(SortOrder),
    AddToCart(ProductId),
    AddToWishlist(ProductId),
    Delete(ProductId),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    AddToCart(ProductId),
    AddToWishlist(ProductId),
    Delete(ProductId),
}

/// Process a listing message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::ToggleCategory(category) => state.selection.toggle_category(category),
        Message::ToggleMetal(metal) => state.selection.toggle_metal(metal),
        Message::DraftPrice(bound, value) => state.selection.set_draft_price(bound, value),
        Message::CommitPrice => {
            state.selection.commit_price();
            tracing::debug!(range = ?state.selection.price_range(), "price filter committed");
        }
        Message::ClearAll => state.selection.clear_all(),
        Message::ClearQuery => state.selection.set_name_query(String::new()),
        Message::ToggleSection(section) => state.collapsed.toggle(section),
        Message::SortChanged(order) => state.sort = order,
        Message::AddToCart(id) => return Event::AddToCart(id),
        Message::AddToWishlist(id) => return Event::AddToWishlist(id),
        Message::Delete(id) => return Event::Delete(id),
    }
    Event::None
}

/// Render the listing page.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let row = Row::new()
        .spacing(spacing::XL)
        .padding(spacing::LG)
        .push(sidebar::view(&ctx))
        .push(grid::view(&ctx));

    scrollable(
        Container::new(Container::new(row).max_width(sizing::CONTENT_MAX_WIDTH))
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .height(Length::Fill)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::seed;

    #[test]
    fn price_slider_commits_only_on_release() {
        let mut state = State::new(20_000);
        update(&mut state, Message::DraftPrice(PriceBound::Max, 5_000));
        assert_eq!(state.selection.price_range().max, 20_000);
        assert_eq!(state.selection.draft_price_range().max, 5_000);

        update(&mut state, Message::CommitPrice);
        assert_eq!(state.selection.price_range().max, 5_000);
    }

    #[test]
    fn catalog_actions_become_events() {
        let mut state = State::default();
        let id = ProductId::from(3);
        assert_eq!(
            update(&mut state, Message::AddToCart(id.clone())),
            Event::AddToCart(id.clone())
        );
        assert_eq!(
            update(&mut state, Message::AddToWishlist(id.clone())),
            Event::AddToWishlist(id.clone())
        );
        assert_eq!(update(&mut state, Message::Delete(id.clone())), Event::Delete(id));
    }

    #[test]
    fn visible_applies_filter_then_sort() {
        let products = seed::products();
        let mut state = State::new(20_000);
        update(&mut state, Message::SortChanged(SortOrder::PriceAscending));
        let visible = state.visible(&products);
        assert_eq!(visible.len(), products.len());
        assert!(visible.windows(2).all(|pair| pair[0].price <= pair[1].price));

        update(&mut state, Message::ToggleCategory(Category::Rings));
        let visible = state.visible(&products);
        assert!(visible.iter().all(|p| p.category == Category::Rings));
    }

    #[test]
    fn category_link_replaces_selection() {
        let mut state = State::new(20_000);
        update(&mut state, Message::ToggleCategory(Category::Watches));
        update(&mut state, Message::ToggleCategory(Category::Earrings));
        state.show_category(Category::Rings);
        assert_eq!(state.selection.selected_categories().len(), 1);
        assert!(state.selection.selected_categories().contains(&Category::Rings));
    }

    #[test]
    fn clear_query_keeps_other_criteria() {
        let mut state = State::new(20_000);
        state.search("ring");
        update(&mut state, Message::ToggleMetal(Metal::Gold));
        update(&mut state, Message::ClearQuery);
        assert_eq!(state.selection.name_query(), "");
        assert!(state.selection.selected_metals().contains(&Metal::Gold));
    }

    #[test]
    fn product_view_renders() {
        let i18n = I18n::default();
        let products = seed::products();
        let mut state = State::new(20_000);
        state.search("zzz");
        let _element = view(ViewContext {
            i18n: &i18n,
            colors: ColorScheme::dark(),
            state: &state,
            products: &products,
            price_step: 100,
        });
    }
}

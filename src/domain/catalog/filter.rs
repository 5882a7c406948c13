// SPDX-License-Identifier: MPL-2.0
//! Catalog filtering.
//!
//! A [`FilterSelection`] holds the criteria chosen in the product sidebar.
//! [`compute_visible`] derives the visible product list from the catalog and
//! a selection; it is pure and keeps catalog order.
//!
//! # Criteria
//!
//! - Categories and metals: a product matches when its value is selected, or
//!   when nothing is selected in that group.
//! - Price: inclusive committed range. The sidebar slider edits a separate
//!   draft range that only takes effect on [`FilterSelection::commit_price`].
//! - Name: case-insensitive substring, empty matches everything.
//!
//! All active criteria must match (AND logic).

use super::product::{Category, Metal, Product};
use crate::config::defaults::DEFAULT_MAX_PRICE;
use std::collections::{BTreeMap, BTreeSet};

// =============================================================================
// Price Range
// =============================================================================

/// Which end of the price range is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceBound {
    Min,
    Max,
}

/// Inclusive price interval with `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub min: u32,
    pub max: u32,
}

impl PriceRange {
    /// Full range `[0, max_price]`.
    #[must_use]
    pub fn full(max_price: u32) -> Self {
        Self {
            min: 0,
            max: max_price,
        }
    }

    #[must_use]
    pub fn contains(&self, price: u32) -> bool {
        (self.min..=self.max).contains(&price)
    }
}

// =============================================================================
// Filter Selection
// =============================================================================

/// Filter criteria chosen by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection {
    selected_categories: BTreeSet<Category>,
    selected_metals: BTreeSet<Metal>,
    price_range: PriceRange,
    draft_price_range: PriceRange,
    max_price: u32,
    name_query: String,
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_PRICE)
    }
}

impl FilterSelection {
    /// Creates an empty selection whose price range spans `[0, max_price]`.
    #[must_use]
    pub fn new(max_price: u32) -> Self {
        Self {
            selected_categories: BTreeSet::new(),
            selected_metals: BTreeSet::new(),
            price_range: PriceRange::full(max_price),
            draft_price_range: PriceRange::full(max_price),
            max_price,
            name_query: String::new(),
        }
    }

    #[must_use]
    pub fn selected_categories(&self) -> &BTreeSet<Category> {
        &self.selected_categories
    }

    #[must_use]
    pub fn selected_metals(&self) -> &BTreeSet<Metal> {
        &self.selected_metals
    }

    /// Committed price range, used for filtering.
    #[must_use]
    pub fn price_range(&self) -> PriceRange {
        self.price_range
    }

    /// Price range shown by the slider, not yet applied.
    #[must_use]
    pub fn draft_price_range(&self) -> PriceRange {
        self.draft_price_range
    }

    #[must_use]
    pub fn max_price(&self) -> u32 {
        self.max_price
    }

    #[must_use]
    pub fn name_query(&self) -> &str {
        &self.name_query
    }

    /// Adds `category` to the selection, or removes it if present.
    pub fn toggle_category(&mut self, category: Category) {
        if !self.selected_categories.remove(&category) {
            self.selected_categories.insert(category);
        }
    }

    /// Adds `metal` to the selection, or removes it if present.
    pub fn toggle_metal(&mut self, metal: Metal) {
        if !self.selected_metals.remove(&metal) {
            self.selected_metals.insert(metal);
        }
    }

    /// Replaces the category selection with `category` alone.
    pub fn select_only_category(&mut self, category: Category) {
        self.selected_categories.clear();
        self.selected_categories.insert(category);
    }

    /// Moves one end of the draft range.
    ///
    /// The value is clamped into `[0, max_price]`, then against the opposite
    /// end so the draft never inverts.
    pub fn set_draft_price(&mut self, bound: PriceBound, value: u32) {
        let value = value.min(self.max_price);
        match bound {
            PriceBound::Min => {
                self.draft_price_range.min = value.min(self.draft_price_range.max);
            }
            PriceBound::Max => {
                self.draft_price_range.max = value.max(self.draft_price_range.min);
            }
        }
    }

    /// Applies the draft range to filtering.
    pub fn commit_price(&mut self) {
        self.price_range = self.draft_price_range;
    }

    pub fn set_name_query(&mut self, query: impl Into<String>) {
        self.name_query = query.into();
    }

    /// Clears categories, metals, the name query and both price ranges.
    pub fn clear_all(&mut self) {
        self.selected_categories.clear();
        self.selected_metals.clear();
        self.price_range = PriceRange::full(self.max_price);
        self.draft_price_range = PriceRange::full(self.max_price);
        self.name_query.clear();
    }

    fn price_is_active(&self) -> bool {
        self.price_range != PriceRange::full(self.max_price)
    }

    fn name_is_active(&self) -> bool {
        !self.name_query.trim().is_empty()
    }

    /// Returns `true` if any criterion narrows the catalog.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active_count() > 0
    }

    /// Number of active criteria. Each selected category or metal counts
    /// once; a narrowed price range and a name query count once each.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.selected_categories.len()
            + self.selected_metals.len()
            + usize::from(self.price_is_active())
            + usize::from(self.name_is_active())
    }

    /// Returns `true` if `product` satisfies every active criterion.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        let category_ok = self.selected_categories.is_empty()
            || self.selected_categories.contains(&product.category);
        let metal_ok =
            self.selected_metals.is_empty() || self.selected_metals.contains(&product.metal);
        let price_ok =
            !self.price_is_active() || self.price_range.contains(product.price.value());
        let name_ok = !self.name_is_active()
            || product
                .name
                .to_lowercase()
                .contains(&self.name_query.trim().to_lowercase());
        category_ok && metal_ok && price_ok && name_ok
    }
}

/// Returns the products matching `selection`, in catalog order.
#[must_use]
pub fn compute_visible<'a>(products: &'a [Product], selection: &FilterSelection) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|product| selection.matches(product))
        .collect()
}

/// Number of products in each category present in `products`.
#[must_use]
pub fn category_counts(products: &[Product]) -> BTreeMap<Category, usize> {
    let mut counts = BTreeMap::new();
    for product in products {
        *counts.entry(product.category.clone()).or_insert(0) += 1;
    }
    counts
}

// =============================================================================
// Sorting
// =============================================================================

/// Ordering applied to the visible product list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Catalog order.
    #[default]
    Featured,
    PriceAscending,
    PriceDescending,
    /// Highest rating first.
    Rating,
}

impl SortOrder {
    pub const ALL: [SortOrder; 4] = [
        SortOrder::Featured,
        SortOrder::PriceAscending,
        SortOrder::PriceDescending,
        SortOrder::Rating,
    ];

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Self::Featured => "sort-featured",
            Self::PriceAscending => "sort-price-ascending",
            Self::PriceDescending => "sort-price-descending",
            Self::Rating => "sort-rating",
        }
    }

    /// Sorts `products` in place. Stable, so ties keep catalog order.
    pub fn apply(self, products: &mut [&Product]) {
        match self {
            Self::Featured => {}
            Self::PriceAscending => products.sort_by_key(|p| p.price),
            Self::PriceDescending => products.sort_by(|a, b| b.price.cmp(&a.price)),
            Self::Rating => products.sort_by(|a, b| b.rating.value().total_cmp(&a.rating.value())),
        }
    }
}

// =============================================================================
// Sidebar Sections
// =============================================================================

/// Collapsible sidebar section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SidebarSection {
    Categories,
    Price,
    Metals,
}

/// Collapse state of the sidebar sections. All sections start expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollapsedSections(BTreeSet<SidebarSection>);

impl CollapsedSections {
    pub fn toggle(&mut self, section: SidebarSection) {
        if !self.0.remove(&section) {
            self.0.insert(section);
        }
    }

    #[must_use]
    pub fn is_collapsed(&self, section: SidebarSection) -> bool {
        self.0.contains(&section)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::product::{Price, ProductId, Rating};

    fn product(id: u32, category: Category, metal: Metal, price: u32) -> Product {
        Product {
            id: ProductId::from(id),
            name: format!("Item {id}"),
            price: Price(price),
            original_price: None,
            category,
            metal,
            rating: Rating::new(4.0),
            review_count: 0,
            image_url: String::new(),
        }
    }

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.to_string()).collect()
    }

    // -------------------------------------------------------------------------
    // Selection tests
    // -------------------------------------------------------------------------

    #[test]
    fn default_selection_is_inactive() {
        let selection = FilterSelection::default();
        assert!(!selection.is_active());
        assert_eq!(selection.active_count(), 0);
        assert_eq!(selection.price_range(), PriceRange::full(DEFAULT_MAX_PRICE));
        assert_eq!(selection.draft_price_range(), selection.price_range());
    }

    #[test]
    fn double_toggle_restores_sets() {
        let mut selection = FilterSelection::default();
        selection.toggle_category(Category::Rings);
        selection.toggle_metal(Metal::Gold);
        assert_eq!(selection.active_count(), 2);

        selection.toggle_category(Category::Rings);
        selection.toggle_metal(Metal::Gold);
        assert_eq!(selection, FilterSelection::default());
    }

    #[test]
    fn draft_min_is_clamped_to_draft_max() {
        let mut selection = FilterSelection::default();
        selection.set_draft_price(PriceBound::Max, 500);
        selection.set_draft_price(PriceBound::Min, 9_000);
        assert_eq!(selection.draft_price_range().min, 500);
    }

    #[test]
    fn draft_max_is_clamped_to_draft_min_and_max_price() {
        let mut selection = FilterSelection::new(1_000);
        selection.set_draft_price(PriceBound::Max, 50_000);
        assert_eq!(selection.draft_price_range().max, 1_000);

        selection.set_draft_price(PriceBound::Min, 700);
        selection.set_draft_price(PriceBound::Max, 200);
        assert_eq!(selection.draft_price_range(), PriceRange { min: 700, max: 700 });
    }

    #[test]
    fn draft_only_applies_after_commit() {
        let mut selection = FilterSelection::default();
        selection.set_draft_price(PriceBound::Max, 3_000);
        assert_eq!(selection.price_range().max, DEFAULT_MAX_PRICE);
        assert!(!selection.is_active());

        selection.commit_price();
        assert_eq!(selection.price_range().max, 3_000);
        assert_eq!(selection.active_count(), 1);
    }

    #[test]
    fn clear_all_resets_everything() {
        let mut selection = FilterSelection::default();
        selection.toggle_category(Category::Watches);
        selection.toggle_metal(Metal::Silver);
        selection.set_draft_price(PriceBound::Min, 1_000);
        selection.commit_price();
        selection.set_draft_price(PriceBound::Max, 2_000);
        selection.set_name_query("ring");

        selection.clear_all();
        assert_eq!(selection, FilterSelection::default());
    }

    #[test]
    fn select_only_category_replaces_selection() {
        let mut selection = FilterSelection::default();
        selection.toggle_category(Category::Rings);
        selection.toggle_category(Category::Watches);
        selection.select_only_category(Category::Earrings);
        let selected: Vec<_> = selection.selected_categories().iter().cloned().collect();
        assert_eq!(selected, vec![Category::Earrings]);
    }

    // -------------------------------------------------------------------------
    // compute_visible tests
    // -------------------------------------------------------------------------

    #[test]
    fn empty_selection_returns_all_in_order() {
        let products = vec![
            product(3, Category::Rings, Metal::Gold, 100),
            product(1, Category::Watches, Metal::Silver, 20_000),
            product(2, Category::Other("anklets".into()), Metal::Other("tin".into()), 0),
        ];
        let visible = compute_visible(&products, &FilterSelection::default());
        assert_eq!(ids(&visible), vec!["3", "1", "2"]);
    }

    #[test]
    fn category_filter_keeps_matching_products() {
        let products = vec![
            product(1, Category::Rings, Metal::Gold, 100),
            product(2, Category::Necklaces, Metal::Gold, 100),
        ];
        let mut selection = FilterSelection::default();
        selection.toggle_category(Category::Rings);
        assert_eq!(ids(&compute_visible(&products, &selection)), vec!["1"]);
    }

    #[test]
    fn untouched_price_range_keeps_products_above_max_price() {
        let products = vec![
            product(1, Category::Rings, Metal::Gold, 1_200),
            product(2, Category::Watches, Metal::Gold, 25_000),
        ];
        let visible = compute_visible(&products, &FilterSelection::default());
        assert_eq!(ids(&visible), vec!["1", "2"]);

        let visible = compute_visible(&products, &FilterSelection::new(1_000));
        assert_eq!(ids(&visible), vec!["1", "2"]);
    }

    #[test]
    fn committed_range_with_category_keeps_single_ring() {
        let products = vec![
            product(1, Category::Rings, Metal::Gold, 1_200),
            product(2, Category::Necklaces, Metal::Silver, 800),
        ];
        let mut selection = FilterSelection::default();
        selection.toggle_category(Category::Rings);
        selection.set_draft_price(PriceBound::Min, 0);
        selection.set_draft_price(PriceBound::Max, 2_000);
        selection.commit_price();

        assert_eq!(selection.price_range(), PriceRange { min: 0, max: 2_000 });
        assert_eq!(ids(&compute_visible(&products, &selection)), vec!["1"]);
    }

    #[test]
    fn groups_combine_with_and_logic() {
        let products = vec![
            product(1, Category::Rings, Metal::Gold, 100),
            product(2, Category::Rings, Metal::Silver, 100),
            product(3, Category::Necklaces, Metal::Gold, 100),
            product(4, Category::Earrings, Metal::Gold, 100),
        ];
        let mut selection = FilterSelection::default();
        selection.toggle_category(Category::Rings);
        selection.toggle_category(Category::Necklaces);
        selection.toggle_metal(Metal::Gold);
        assert_eq!(ids(&compute_visible(&products, &selection)), vec!["1", "3"]);
    }

    #[test]
    fn price_range_is_inclusive() {
        let products = vec![
            product(1, Category::Rings, Metal::Gold, 999),
            product(2, Category::Rings, Metal::Gold, 1_000),
            product(3, Category::Rings, Metal::Gold, 2_000),
            product(4, Category::Rings, Metal::Gold, 2_001),
        ];
        let mut selection = FilterSelection::default();
        selection.set_draft_price(PriceBound::Min, 1_000);
        selection.set_draft_price(PriceBound::Max, 2_000);
        selection.commit_price();
        assert_eq!(ids(&compute_visible(&products, &selection)), vec!["2", "3"]);
    }

    #[test]
    fn name_query_is_case_insensitive() {
        let mut products = vec![
            product(1, Category::Rings, Metal::Gold, 100),
            product(2, Category::Rings, Metal::Gold, 100),
        ];
        products[0].name = "Classic Solitaire Ring".into();
        products[1].name = "Emerald Pendant".into();

        let mut selection = FilterSelection::default();
        selection.set_name_query("  SOLITAIRE ");
        assert_eq!(ids(&compute_visible(&products, &selection)), vec!["1"]);
        assert_eq!(selection.active_count(), 1);

        selection.set_name_query("   ");
        assert_eq!(compute_visible(&products, &selection).len(), 2);
    }

    #[test]
    fn category_counts_tally_products() {
        let products = vec![
            product(1, Category::Rings, Metal::Gold, 100),
            product(2, Category::Necklaces, Metal::Gold, 100),
            product(3, Category::Necklaces, Metal::Silver, 100),
        ];
        let counts = category_counts(&products);
        assert_eq!(counts.get(&Category::Necklaces), Some(&2));
        assert_eq!(counts.get(&Category::Rings), Some(&1));
        assert_eq!(counts.get(&Category::Watches), None);
    }

    // -------------------------------------------------------------------------
    // Sorting and sections
    // -------------------------------------------------------------------------

    #[test]
    fn sort_orders_are_stable() {
        let mut products = vec![
            product(1, Category::Rings, Metal::Gold, 300),
            product(2, Category::Rings, Metal::Gold, 100),
            product(3, Category::Rings, Metal::Gold, 300),
        ];
        products[1].rating = Rating::new(4.9);

        let mut visible: Vec<&Product> = products.iter().collect();
        SortOrder::PriceAscending.apply(&mut visible);
        assert_eq!(ids(&visible), vec!["2", "1", "3"]);

        SortOrder::PriceDescending.apply(&mut visible);
        assert_eq!(ids(&visible), vec!["1", "3", "2"]);

        let mut visible: Vec<&Product> = products.iter().collect();
        SortOrder::Rating.apply(&mut visible);
        assert_eq!(ids(&visible), vec!["2", "1", "3"]);

        let mut visible: Vec<&Product> = products.iter().collect();
        SortOrder::Featured.apply(&mut visible);
        assert_eq!(ids(&visible), vec!["1", "2", "3"]);
    }

    #[test]
    fn sections_toggle_independently() {
        let mut sections = CollapsedSections::default();
        assert!(!sections.is_collapsed(SidebarSection::Price));
        sections.toggle(SidebarSection::Price);
        assert!(sections.is_collapsed(SidebarSection::Price));
        assert!(!sections.is_collapsed(SidebarSection::Metals));
        sections.toggle(SidebarSection::Price);
        assert!(!sections.is_collapsed(SidebarSection::Price));
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Product catalog: value types, filtering and the built-in product list.

pub mod filter;
pub mod product;
pub mod seed;

pub use filter::{
    category_counts, compute_visible, CollapsedSections, FilterSelection, PriceBound, PriceRange,
    SidebarSection, SortOrder,
};
pub use product::{Category, Metal, Price, Product, ProductId, Rating};

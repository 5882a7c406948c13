// SPDX-License-Identifier: MPL-2.0
//! Built-in catalog shipped with the application.

use super::product::{Category, Metal, Price, Product, ProductId, Rating};

struct Entry {
    id: u32,
    name: &'static str,
    price: u32,
    original_price: Option<u32>,
    category: &'static str,
    metal: &'static str,
    rating: f32,
    reviews: u32,
    image: &'static str,
}

const ENTRIES: [Entry; 6] = [
    Entry {
        id: 1,
        name: "Classic Solitaire Ring",
        price: 7_999,
        original_price: Some(9_999),
        category: "rings",
        metal: "platinum",
        rating: 4.8,
        reviews: 154,
        image: "https://placehold.co/600x600/F0F0F0/333?text=Solitaire+Ring",
    },
    Entry {
        id: 2,
        name: "Diamond Cluster Necklace",
        price: 4_500,
        original_price: None,
        category: "necklaces",
        metal: "gold",
        rating: 4.5,
        reviews: 88,
        image: "https://placehold.co/600x600/E8E8E8/333?text=Cluster+Necklace",
    },
    Entry {
        id: 3,
        name: "Rose Gold Hoop Earrings",
        price: 1_250,
        original_price: Some(1_500),
        category: "earrings",
        metal: "rosegold",
        rating: 4.9,
        reviews: 210,
        image: "https://placehold.co/600x600/F5E6E6/333?text=Rose+Hoops",
    },
    Entry {
        id: 4,
        name: "Tennis Bracelet (Silver)",
        price: 3_500,
        original_price: None,
        category: "bracelets",
        metal: "silver",
        rating: 4.2,
        reviews: 45,
        image: "https://placehold.co/600x600/D0D0D0/333?text=Tennis+Bracelet",
    },
    Entry {
        id: 5,
        name: "Luxury Chronograph Watch",
        price: 19_500,
        original_price: Some(22_000),
        category: "watches",
        metal: "platinum",
        rating: 4.7,
        reviews: 12,
        image: "https://placehold.co/600x600/E0E0E0/333?text=Luxury+Watch",
    },
    Entry {
        id: 6,
        name: "Emerald Cut Pendant",
        price: 6_200,
        original_price: None,
        category: "necklaces",
        metal: "gold",
        rating: 4.6,
        reviews: 93,
        image: "https://placehold.co/600x600/F0F0E0/333?text=Emerald+Pendant",
    },
];

/// Returns the built-in product list in display order.
#[must_use]
pub fn products() -> Vec<Product> {
    ENTRIES
        .iter()
        .map(|entry| Product {
            id: ProductId::from(entry.id),
            name: entry.name.to_string(),
            price: Price(entry.price),
            original_price: entry.original_price.map(Price),
            category: Category::from_id(entry.category),
            metal: Metal::from_id(entry.metal),
            rating: Rating::new(entry.rating),
            review_count: entry.reviews,
            image_url: entry.image.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_ids_are_unique() {
        let products = products();
        let ids: HashSet<_> = products.iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn seed_uses_only_known_categories_and_metals() {
        for product in products() {
            assert!(Category::KNOWN.contains(&product.category), "{}", product.name);
            assert!(Metal::KNOWN.contains(&product.metal), "{}", product.name);
        }
    }

    #[test]
    fn seed_prices_fit_default_filter_range() {
        let max = crate::config::defaults::DEFAULT_MAX_PRICE;
        assert!(products().iter().all(|p| p.price.value() <= max));
    }
}

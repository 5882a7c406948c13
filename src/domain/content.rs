// SPDX-License-Identifier: MPL-2.0
//! Static home page content: hero slides, statistics, category tiles,
//! features and testimonials.
//!
//! Marketing copy that belongs to the catalog (slide titles, quotes) is kept
//! as data. Section labels are Fluent keys resolved by the view.

use crate::domain::catalog::Category;
use crate::domain::slider::{Slide, SlideDeck};
use crate::domain::stats::CounterAnimation;
use crate::error::Result;
use std::time::Duration;

/// Builds the hero deck.
///
/// # Errors
///
/// Never fails for the built-in slide list; the `Result` comes from
/// [`SlideDeck::new`].
pub fn hero_deck() -> Result<SlideDeck> {
    SlideDeck::new(vec![
        Slide {
            id: 1,
            title: "Discover Every Facet of Luxury".to_string(),
            subtitle: "Exclusive, conflict-free diamonds & fine jewelry. Crafted for those who \
                       demand excellence."
                .to_string(),
            call_to_action_text: "Shop Diamonds".to_string(),
            call_to_action_link: "/product".to_string(),
            image_url: "https://wpbingo-adena.myshopify.com/cdn/shop/files/slider2-1.jpg".to_string(),
        },
        Slide {
            id: 2,
            title: "The Solitaire Collection".to_string(),
            subtitle: "Timeless elegance. Find the perfect piece to celebrate your most precious \
                       moments."
                .to_string(),
            call_to_action_text: "View Rings".to_string(),
            call_to_action_link: "/product?category=rings".to_string(),
            image_url: "https://wpbingo-adena.myshopify.com/cdn/shop/files/slider5-1.jpg".to_string(),
        },
    ])
}

/// A statistic shown with a count-up animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    /// Text glyph standing in for the icon.
    pub glyph: &'static str,
    /// Fluent key of the label under the number.
    pub label_key: &'static str,
    /// Appends `+` to the rendered number.
    pub plus_suffix: bool,
    pub counter: CounterAnimation,
}

/// The three home page statistics, not yet started.
#[must_use]
pub fn stats() -> Vec<Stat> {
    vec![
        Stat {
            glyph: "🌐",
            label_key: "stat-countries",
            plus_suffix: true,
            counter: CounterAnimation::new(0, 10, Duration::from_millis(2_000)),
        },
        Stat {
            glyph: "💎",
            label_key: "stat-diamonds",
            plus_suffix: false,
            counter: CounterAnimation::new(0, 799_103, Duration::from_millis(3_000)),
        },
        Stat {
            glyph: "🔍",
            label_key: "stat-daily-searches",
            plus_suffix: true,
            counter: CounterAnimation::new(0, 1_154, Duration::from_millis(2_500)),
        },
    ]
}

/// A home page tile linking to a pre-filtered product listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTile {
    pub category: Category,
    pub image_url: &'static str,
}

#[must_use]
pub fn category_tiles() -> Vec<CategoryTile> {
    vec![
        CategoryTile {
            category: Category::Rings,
            image_url: "https://wpbingo-adena.myshopify.com/cdn/shop/files/banner-12.jpg",
        },
        CategoryTile {
            category: Category::Necklaces,
            image_url: "https://wpbingo-adena.myshopify.com/cdn/shop/files/banner-13.png",
        },
        CategoryTile {
            category: Category::Bracelets,
            image_url: "https://wpbingo-adena.myshopify.com/cdn/shop/files/banner-14.jpg",
        },
        CategoryTile {
            category: Category::Earrings,
            image_url: "https://wpbingo-adena.myshopify.com/cdn/shop/files/banner-15.jpg",
        },
    ]
}

/// A selling point with a title and description, both Fluent keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub glyph: &'static str,
    pub title_key: &'static str,
    pub description_key: &'static str,
}

pub const FEATURES: [Feature; 3] = [
    Feature {
        glyph: "💎",
        title_key: "feature-ethical-title",
        description_key: "feature-ethical-description",
    },
    Feature {
        glyph: "★",
        title_key: "feature-clarity-title",
        description_key: "feature-clarity-description",
    },
    Feature {
        glyph: "✦",
        title_key: "feature-service-title",
        description_key: "feature-service-description",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub id: u32,
    pub quote: &'static str,
    pub author: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 2] = [
    Testimonial {
        id: 1,
        quote: "Absolutely stunning craftsmanship, my wife adored the ring!",
        author: "James A.",
    },
    Testimonial {
        id: 2,
        quote: "The quality and sparkle are unmatched. Highly recommended!",
        author: "Priya S.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_deck_has_unique_slide_ids() {
        let deck = hero_deck().expect("built-in deck is non-empty");
        let mut ids: Vec<u32> = deck.iter().map(|s| s.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), deck.len());
    }

    #[test]
    fn stats_start_at_zero() {
        for stat in stats() {
            assert!(!stat.counter.is_started());
            assert_eq!(stat.counter.from, 0);
        }
    }

    #[test]
    fn category_tiles_use_known_categories() {
        for tile in category_tiles() {
            assert!(Category::KNOWN.contains(&tile.category));
        }
    }
}

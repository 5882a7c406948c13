// SPDX-License-Identifier: MPL-2.0
//! Product value types.

use crate::domain::stats::format_thousands;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Identifiers and Values
// =============================================================================

/// Product identifier.
///
/// Catalog data mixes numeric and textual ids, so both are stored as text.
/// Ids compare by their textual form: `ProductId::from(7)` equals
/// `ProductId::from("7")`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u32> for ProductId {
    fn from(value: u32) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Price in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(pub u32);

impl Price {
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", format_thousands(u64::from(self.0)))
    }
}

/// Average review score, clamped to `0.0..=5.0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Rating(f32);

impl Rating {
    pub const MAX: f32 = 5.0;

    /// Creates a rating, clamping into range. NaN becomes zero.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, Self::MAX))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

// =============================================================================
// Category
// =============================================================================

/// Product category. Unknown identifiers are kept as [`Category::Other`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Rings,
    Necklaces,
    Earrings,
    Bracelets,
    Watches,
    Other(String),
}

impl Category {
    /// Categories offered by the filter sidebar, in display order.
    pub const KNOWN: [Category; 5] = [
        Category::Rings,
        Category::Necklaces,
        Category::Earrings,
        Category::Bracelets,
        Category::Watches,
    ];

    /// Parses a category identifier (case-insensitive).
    #[must_use]
    pub fn from_id(id: &str) -> Self {
        match id.trim().to_ascii_lowercase().as_str() {
            "rings" | "ring" => Self::Rings,
            "necklaces" | "necklace" => Self::Necklaces,
            "earrings" | "earring" => Self::Earrings,
            "bracelets" | "bracelet" => Self::Bracelets,
            "watches" | "watch" => Self::Watches,
            other => Self::Other(other.to_string()),
        }
    }

    /// Stable identifier, as used in links and storage.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Rings => "rings",
            Self::Necklaces => "necklaces",
            Self::Earrings => "earrings",
            Self::Bracelets => "bracelets",
            Self::Watches => "watches",
            Self::Other(id) => id,
        }
    }

    /// Fluent key of the display name. `None` for unknown categories, which
    /// display their identifier.
    #[must_use]
    pub fn i18n_key(&self) -> Option<&'static str> {
        match self {
            Self::Rings => Some("category-rings"),
            Self::Necklaces => Some("category-necklaces"),
            Self::Earrings => Some("category-earrings"),
            Self::Bracelets => Some("category-bracelets"),
            Self::Watches => Some("category-watches"),
            Self::Other(_) => None,
        }
    }
}

// =============================================================================
// Metal
// =============================================================================

/// Product metal. Unknown identifiers are kept as [`Metal::Other`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Metal {
    Gold,
    Silver,
    Platinum,
    RoseGold,
    Other(String),
}

impl Metal {
    /// Metals offered by the filter sidebar, in display order.
    pub const KNOWN: [Metal; 4] = [Metal::Gold, Metal::Silver, Metal::Platinum, Metal::RoseGold];

    /// Parses a metal identifier (case-insensitive, spaces and dashes ignored).
    #[must_use]
    pub fn from_id(id: &str) -> Self {
        let normalized: String = id
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "gold" => Self::Gold,
            "silver" => Self::Silver,
            "platinum" => Self::Platinum,
            "rosegold" => Self::RoseGold,
            _ => Self::Other(normalized),
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Gold => "gold",
            Self::Silver => "silver",
            Self::Platinum => "platinum",
            Self::RoseGold => "rosegold",
            Self::Other(id) => id,
        }
    }

    #[must_use]
    pub fn i18n_key(&self) -> Option<&'static str> {
        match self {
            Self::Gold => Some("metal-gold"),
            Self::Silver => Some("metal-silver"),
            Self::Platinum => Some("metal-platinum"),
            Self::RoseGold => Some("metal-rose-gold"),
            Self::Other(_) => None,
        }
    }

    /// Swatch color as RGB bytes.
    #[must_use]
    pub fn swatch(&self) -> [u8; 3] {
        match self {
            Self::Gold => [0xFF, 0xD7, 0x00],
            Self::Silver => [0xC0, 0xC0, 0xC0],
            Self::Platinum => [0xE5, 0xE4, 0xE2],
            Self::RoseGold => [0xB7, 0x6E, 0x79],
            Self::Other(_) => [0x80, 0x80, 0x80],
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    /// Price before discount, shown struck through.
    pub original_price: Option<Price>,
    pub category: Category,
    pub metal: Metal,
    pub rating: Rating,
    pub review_count: u32,
    pub image_url: String,
}

impl Product {
    /// Returns `true` if the product is discounted.
    #[must_use]
    pub fn is_on_sale(&self) -> bool {
        self.original_price.is_some_and(|original| original > self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_and_text_ids_compare_equal() {
        assert_eq!(ProductId::from(7), ProductId::from("7"));
        assert_ne!(ProductId::from(7), ProductId::from("07"));
        assert_eq!(ProductId::from(12).to_string(), "12");
    }

    #[test]
    fn price_displays_with_separators() {
        assert_eq!(Price(7999).to_string(), "$7,999");
        assert_eq!(Price(19500).to_string(), "$19,500");
        assert_eq!(Price(0).to_string(), "$0");
    }

    #[test]
    fn rating_is_clamped() {
        assert_eq!(Rating::new(7.2).value(), 5.0);
        assert_eq!(Rating::new(-1.0).value(), 0.0);
        assert_eq!(Rating::new(f32::NAN).value(), 0.0);
        assert_eq!(Rating::new(4.76).to_string(), "4.8");
    }

    #[test]
    fn category_ids_round_trip_and_keep_unknowns() {
        for category in Category::KNOWN {
            assert_eq!(Category::from_id(category.id()), category);
        }
        assert_eq!(Category::from_id("Ring"), Category::Rings);
        assert_eq!(
            Category::from_id("anklets"),
            Category::Other("anklets".to_string())
        );
        assert_eq!(Category::from_id("anklets").i18n_key(), None);
    }

    #[test]
    fn metal_parsing_ignores_spacing() {
        assert_eq!(Metal::from_id("Rose Gold"), Metal::RoseGold);
        assert_eq!(Metal::from_id("rose-gold"), Metal::RoseGold);
        assert_eq!(Metal::from_id("rosegold"), Metal::RoseGold);
        assert_eq!(Metal::from_id("Titanium"), Metal::Other("titanium".to_string()));
    }

    #[test]
    fn sale_requires_higher_original_price() {
        let mut product = Product {
            id: ProductId::from(1),
            name: "Ring".to_string(),
            price: Price(100),
            original_price: Some(Price(150)),
            category: Category::Rings,
            metal: Metal::Gold,
            rating: Rating::new(4.0),
            review_count: 0,
            image_url: String::new(),
        };
        assert!(product.is_on_sale());
        product.original_price = Some(Price(100));
        assert!(!product.is_on_sale());
        product.original_price = None;
        assert!(!product.is_on_sale());
    }
}

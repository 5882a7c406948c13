// SPDX-License-Identifier: MPL-2.0
//! Product catalog container.
//!
//! Holds the product list together with the cart and wishlist id sequences.
//! Mutations that must be persisted return a [`PersistEffect`] instead of
//! writing to storage themselves; the caller applies it against a
//! [`KeyValueStore`].

use super::storage::KeyValueStore;
use crate::domain::catalog::{Product, ProductId};
use crate::error::{Error, Result};

/// Storage key of the cart id sequence.
pub const CART_KEY: &str = "AddToCart";

/// Storage key of the wishlist id sequence.
pub const WISHLIST_KEY: &str = "AddToWishList";

/// A pending write of a whole id sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a persist effect does nothing until applied"]
pub struct PersistEffect {
    pub key: &'static str,
    pub ids: Vec<ProductId>,
}

impl PersistEffect {
    /// Writes the sequence to `store` as CBOR.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails or the store rejects the write.
    pub fn apply(&self, store: &mut dyn KeyValueStore) -> Result<()> {
        let mut bytes = Vec::new();
        ciborium::into_writer(&self.ids, &mut bytes).map_err(Error::from)?;
        store.set(self.key, bytes)
    }
}

/// Catalog state owned by the application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogStore {
    products: Vec<Product>,
    cart: Vec<ProductId>,
    wishlist: Vec<ProductId>,
}

impl CatalogStore {
    /// Creates the container, reading the cart and wishlist back from
    /// `storage`. Absent or malformed sequences start empty.
    #[must_use]
    pub fn new(products: Vec<Product>, storage: &dyn KeyValueStore) -> Self {
        Self {
            products,
            cart: read_ids(storage, CART_KEY),
            wishlist: read_ids(storage, WISHLIST_KEY),
        }
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| &product.id == id)
    }

    /// Cart ids in insertion order. The same id may appear several times.
    #[must_use]
    pub fn cart(&self) -> &[ProductId] {
        &self.cart
    }

    #[must_use]
    pub fn wishlist(&self) -> &[ProductId] {
        &self.wishlist
    }

    /// Removes every product with `id`. Returns `true` if one was removed.
    ///
    /// Cart and wishlist ids are left untouched.
    pub fn delete_product(&mut self, id: &ProductId) -> bool {
        let before = self.products.len();
        self.products.retain(|product| &product.id != id);
        let removed = self.products.len() != before;
        if removed {
            tracing::debug!(%id, "product deleted");
        }
        removed
    }

    /// Appends `id` to the cart.
    pub fn add_to_cart(&mut self, id: ProductId) -> PersistEffect {
        self.cart.push(id);
        PersistEffect {
            key: CART_KEY,
            ids: self.cart.clone(),
        }
    }

    /// Appends `id` to the wishlist.
    pub fn add_to_wishlist(&mut self, id: ProductId) -> PersistEffect {
        self.wishlist.push(id);
        PersistEffect {
            key: WISHLIST_KEY,
            ids: self.wishlist.clone(),
        }
    }

    /// Products referenced by the cart, in cart order. Ids that are no
    /// longer in the catalog are skipped.
    #[must_use]
    pub fn cart_products(&self) -> Vec<&Product> {
        self.resolve(&self.cart)
    }

    /// Products referenced by the wishlist, in wishlist order.
    #[must_use]
    pub fn wishlist_products(&self) -> Vec<&Product> {
        self.resolve(&self.wishlist)
    }

    fn resolve(&self, ids: &[ProductId]) -> Vec<&Product> {
        ids.iter().filter_map(|id| self.product(id)).collect()
    }
}

fn read_ids(storage: &dyn KeyValueStore, key: &str) -> Vec<ProductId> {
    let Some(bytes) = storage.get(key) else {
        return Vec::new();
    };
    match ciborium::from_reader::<Vec<ProductId>, _>(bytes) {
        Ok(ids) => ids,
        Err(err) => {
            tracing::warn!(key, error = ?err, "ignoring malformed stored id sequence");
            Vec::new()
        }
    }
}

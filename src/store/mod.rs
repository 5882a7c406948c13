// SPDX-License-Identifier: MPL-2.0
//! Application state containers and on-device storage.

pub mod catalog;
pub mod storage;
pub mod theme;

pub use catalog::{CatalogStore, PersistEffect, CART_KEY, WISHLIST_KEY};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use theme::{ThemeFlag, ThemeStore};

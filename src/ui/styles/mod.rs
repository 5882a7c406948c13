// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for all storefront widgets.

pub mod button;
pub mod container;

// SPDX-License-Identifier: MPL-2.0
//! Routes the user can navigate between.

use crate::domain::catalog::Category;

/// In-app pages, addressed by a URL-like path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Product,
    About,
    Contact,
    Account,
    Cart,
}

impl Route {
    /// Routes shown as text links in the navbar, in order.
    pub const NAV_LINKS: [Route; 4] = [Route::Home, Route::Product, Route::About, Route::Contact];

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Product => "/product",
            Route::About => "/about",
            Route::Contact => "/contact",
            Route::Account => "/account",
            Route::Cart => "/cart",
        }
    }

    /// Parses a path. Query strings and trailing slashes are ignored, and
    /// `/products` and `/shop` are accepted for the product listing.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default().trim();
        let trimmed = path.trim_end_matches('/');
        match trimmed.to_ascii_lowercase().as_str() {
            "" => Some(Route::Home),
            "/product" | "/products" | "/shop" => Some(Route::Product),
            "/about" => Some(Route::About),
            "/contact" => Some(Route::Contact),
            "/account" => Some(Route::Account),
            "/cart" => Some(Route::Cart),
            _ => None,
        }
    }

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Route::Home => "nav-home",
            Route::Product => "nav-product",
            Route::About => "nav-about",
            Route::Contact => "nav-contact",
            Route::Account => "nav-account",
            Route::Cart => "nav-cart",
        }
    }
}

/// A parsed in-app link: a route plus an optional category pre-selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub route: Route,
    pub category: Option<Category>,
}

impl Link {
    /// Parses links such as `/product?category=rings` or `/shop/rings`.
    #[must_use]
    pub fn parse(href: &str) -> Option<Self> {
        if let Some(route) = Route::from_path(href) {
            let category = href
                .split_once('?')
                .map(|(_, query)| query)
                .and_then(|query| {
                    query
                        .split('&')
                        .filter_map(|pair| pair.split_once('='))
                        .find(|(key, _)| *key == "category")
                })
                .map(|(_, value)| Category::from_id(value))
                .filter(|_| route == Route::Product);
            return Some(Self { route, category });
        }

        // `/shop/<category>` form.
        let rest = href.trim().strip_prefix("/shop/")?;
        let id = rest.trim_end_matches('/');
        if id.is_empty() || id.contains('/') {
            return None;
        }
        Some(Self {
            route: Route::Product,
            category: Some(Category::from_id(id)),
        })
    }
}

impl From<Route> for Link {
    fn from(route: Route) -> Self {
        Self {
            route,
            category: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_round_trips_through_its_path() {
        for route in [
            Route::Home,
            Route::Product,
            Route::About,
            Route::Contact,
            Route::Account,
            Route::Cart,
        ] {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn paths_are_normalized() {
        assert_eq!(Route::from_path("/cart/"), Some(Route::Cart));
        assert_eq!(Route::from_path("/Products?sort=price"), Some(Route::Product));
        assert_eq!(Route::from_path(""), Some(Route::Home));
        assert_eq!(Route::from_path("/blog"), None);
    }

    #[test]
    fn links_carry_category_query() {
        let link = Link::parse("/product?category=rings").expect("valid link");
        assert_eq!(link.route, Route::Product);
        assert_eq!(link.category, Some(Category::Rings));

        let link = Link::parse("/shop/rings").expect("valid link");
        assert_eq!(link.route, Route::Product);
        assert_eq!(link.category, Some(Category::Rings));
    }

    #[test]
    fn category_query_is_ignored_off_the_product_route() {
        let link = Link::parse("/about?category=rings").expect("valid link");
        assert_eq!(link, Link::from(Route::About));
    }

    #[test]
    fn unknown_links_are_rejected() {
        assert_eq!(Link::parse("/blog"), None);
        assert_eq!(Link::parse("/shop/a/b"), None);
        assert_eq!(Link::parse("/shop/"), Some(Link::from(Route::Product)));
        assert_eq!(Link::parse("https://example.com"), None);
    }
}

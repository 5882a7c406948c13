// SPDX-License-Identifier: MPL-2.0
//! Image references for products and banners.
//!
//! Images are referenced by URL only and never fetched. Views render the
//! resolved source as a labelled tile.

/// Placeholder used when a product image is missing or unusable.
pub const PRODUCT_PLACEHOLDER: &str = "https://placehold.co/600x600/C0C9D0/000000?text=Jewelry";

/// Placeholder used when a hero image is missing or unusable.
pub const HERO_PLACEHOLDER: &str = "https://placehold.co/1200x600/1E40AF/ffffff?text=Hero+Image";

/// A resolved image reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// The original, usable URL.
    Remote(String),
    /// The fallback URL that replaced an unusable one.
    Placeholder(&'static str),
}

impl ImageSource {
    /// Keeps `url` if it is a non-empty `http(s)` URL, otherwise falls back
    /// to `placeholder`.
    #[must_use]
    pub fn resolve(url: &str, placeholder: &'static str) -> Self {
        let trimmed = url.trim();
        let lower = trimmed.to_ascii_lowercase();
        let has_host = lower
            .strip_prefix("https://")
            .or_else(|| lower.strip_prefix("http://"))
            .is_some_and(|rest| !rest.is_empty());
        if has_host {
            Self::Remote(trimmed.to_string())
        } else {
            Self::Placeholder(placeholder)
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Remote(url) => url,
            Self::Placeholder(url) => url,
        }
    }

    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }

    /// Host part of the URL, for compact display.
    #[must_use]
    pub fn host(&self) -> &str {
        let url = self.url();
        let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
        rest.split(['/', '?']).next().unwrap_or(rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_urls_are_kept() {
        let source = ImageSource::resolve(" https://example.com/a.jpg ", PRODUCT_PLACEHOLDER);
        assert_eq!(source, ImageSource::Remote("https://example.com/a.jpg".into()));
        assert!(!source.is_placeholder());
        assert_eq!(source.host(), "example.com");
    }

    #[test]
    fn unusable_urls_fall_back() {
        for url in ["", "   ", "ftp://example.com/a.jpg", "a.jpg", "https://"] {
            let source = ImageSource::resolve(url, HERO_PLACEHOLDER);
            assert!(source.is_placeholder(), "{url:?}");
            assert_eq!(source.url(), HERO_PLACEHOLDER);
        }
    }

    #[test]
    fn scheme_match_is_case_insensitive() {
        assert!(!ImageSource::resolve("HTTP://example.com", PRODUCT_PLACEHOLDER).is_placeholder());
    }
}

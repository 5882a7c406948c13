// SPDX-License-Identifier: MPL-2.0
//! Promotional slides shown by the hero carousel.

use crate::error::{Error, Result};

/// One entry in the rotating hero sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub id: u32,
    pub title: String,
    pub subtitle: String,
    pub call_to_action_text: String,
    /// Route path the call-to-action button leads to.
    pub call_to_action_link: String,
    pub image_url: String,
}

/// Ordered, non-empty sequence of slides fixed at configuration time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideDeck {
    slides: Vec<Slide>,
}

impl SlideDeck {
    /// Builds a deck from an ordered slide list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptySlideDeck`] if `slides` is empty.
    pub fn new(slides: Vec<Slide>) -> Result<Self> {
        if slides.is_empty() {
            return Err(Error::EmptySlideDeck);
        }
        Ok(Self { slides })
    }

    /// Number of slides, always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always `false`; provided for API symmetry with collections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the slide at `index`, clamped into range.
    #[must_use]
    pub fn get(&self, index: usize) -> &Slide {
        &self.slides[index.min(self.slides.len() - 1)]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slide> {
        self.slides.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slide(id: u32) -> Slide {
        Slide {
            id,
            title: format!("Slide {id}"),
            subtitle: String::new(),
            call_to_action_text: "Shop".to_string(),
            call_to_action_link: "/product".to_string(),
            image_url: String::new(),
        }
    }

    #[test]
    fn empty_deck_is_rejected() {
        assert_eq!(SlideDeck::new(Vec::new()), Err(Error::EmptySlideDeck));
    }

    #[test]
    fn deck_preserves_order() {
        let deck = SlideDeck::new(vec![slide(3), slide(1), slide(2)]).unwrap();
        let ids: Vec<u32> = deck.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(deck.len(), 3);
        assert!(!deck.is_empty());
    }

    #[test]
    fn get_clamps_out_of_range_index() {
        let deck = SlideDeck::new(vec![slide(1), slide(2)]).unwrap();
        assert_eq!(deck.get(0).id, 1);
        assert_eq!(deck.get(99).id, 2);
    }
}

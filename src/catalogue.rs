//! Catalogue management module
//!
//! Holds the fixed, ordered list of rated link items, the filter state owned
//! by the UI, and the pure filter predicate that derives the visible subset.

use crate::error::{LinkdexError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Highest rating an item can carry
pub const MAX_RATING: u8 = 5;

/// A single catalogue entry
///
/// Items are statically defined (or loaded once at startup) and never
/// created, mutated, or destroyed while the application runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Display name, non-empty
    pub name: String,
    /// Rating in [1,5]
    pub rating: u8,
    /// Absolute URL of the linked resource
    pub url: String,
}

impl Item {
    /// Create a new item
    pub fn new(name: &str, rating: u8, url: &str) -> Self {
        Self {
            name: name.to_string(),
            rating,
            url: url.to_string(),
        }
    }

    /// Validate the item invariants
    pub fn is_valid(&self) -> bool {
        self.validation_error().is_none()
    }

    /// Get the first invariant violation, if any
    pub fn validation_error(&self) -> Option<String> {
        if self.name.trim().is_empty() {
            return Some("item name must not be empty".to_string());
        }
        if self.rating < 1 || self.rating > MAX_RATING {
            return Some(format!(
                "rating for '{}' must be between 1 and {}, got {}",
                self.name, MAX_RATING, self.rating
            ));
        }
        match url::Url::parse(&self.url) {
            Ok(_) => None,
            Err(e) => Some(format!("url for '{}' is not absolute: {}", self.name, e)),
        }
    }
}

/// The fixed ordered sequence of catalogue items
///
/// Order is display order; filtering only ever derives a view and never
/// reorders or removes entries from the source list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalogue {
    pub items: Vec<Item>,
}

impl Default for Catalogue {
    fn default() -> Self {
        Self {
            items: vec![
                Item::new(
                    "Microsoft Azure AI",
                    4,
                    "https://azure.microsoft.com/en-ca/solutions/ai/",
                ),
                Item::new("TensorFlow", 5, "https://www.tensorflow.org/"),
                Item::new(
                    "Google AI Platform",
                    4,
                    "https://cloud.google.com/ai-platform/docs/technical-overview/",
                ),
                Item::new(
                    "Amazon AI Web service",
                    3,
                    "https://aws.amazon.com/ru/machine-learning/ai-services/",
                ),
                Item::new("H20 AI Cloud", 2, "https://h2o.ai/platform/ai-cloud/"),
            ],
        }
    }
}

impl Catalogue {
    /// Load a catalogue from a JSON file
    ///
    /// The file holds an array of items. Loading validates every entry and
    /// fails with the first violation.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let catalogue: Self = serde_json::from_str(&content)?;
        catalogue.validate()?;
        Ok(catalogue)
    }

    /// Validate all catalogue invariants
    pub fn validate(&self) -> Result<()> {
        if self.items.is_empty() {
            return Err(LinkdexError::catalogue("catalogue must not be empty"));
        }
        for item in &self.items {
            if let Some(msg) = item.validation_error() {
                return Err(LinkdexError::catalogue(msg));
            }
        }
        Ok(())
    }

    /// Number of items in the catalogue
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalogue holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Filter inputs owned by the presentation surface
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    /// Case-insensitive substring to match against item names
    pub search_text: String,
    /// Minimum rating threshold; `None` is treated as 0
    pub minimum_rating: Option<u8>,
}

impl FilterState {
    /// The threshold actually applied; absence counts as 0
    pub fn effective_minimum(&self) -> u8 {
        self.minimum_rating.unwrap_or(0)
    }

    /// Raise the threshold by one, saturating at [`MAX_RATING`]
    pub fn raise_minimum(&mut self) {
        let next = (self.effective_minimum() + 1).min(MAX_RATING);
        self.minimum_rating = Some(next);
    }

    /// Lower the threshold by one; dropping below 1 clears it to unset
    pub fn lower_minimum(&mut self) {
        match self.effective_minimum() {
            0 | 1 => self.minimum_rating = None,
            n => self.minimum_rating = Some(n - 1),
        }
    }
}

/// Derive the visible subset of `items`
///
/// An item is visible iff its lower-cased name contains the lower-cased
/// `search_text` as a substring (empty matches everything) and its rating is
/// at least `minimum_rating`. The result preserves the original relative
/// order. Thresholds above [`MAX_RATING`] simply match nothing.
pub fn visible_items<'a>(
    items: &'a [Item],
    search_text: &str,
    minimum_rating: u8,
) -> Vec<&'a Item> {
    let needle = search_text.to_lowercase();
    items
        .iter()
        .filter(|item| {
            item.name.to_lowercase().contains(&needle) && item.rating >= minimum_rating
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalogue_is_valid() {
        let catalogue = Catalogue::default();
        assert_eq!(catalogue.len(), 5);
        assert!(catalogue.validate().is_ok());
    }

    #[test]
    fn test_item_validation() {
        assert!(Item::new("TensorFlow", 5, "https://www.tensorflow.org/").is_valid());
        assert!(!Item::new("", 3, "https://example.com/").is_valid());
        assert!(!Item::new("Zero", 0, "https://example.com/").is_valid());
        assert!(!Item::new("Six", 6, "https://example.com/").is_valid());
        assert!(!Item::new("Relative", 3, "/not/absolute").is_valid());
    }

    #[test]
    fn test_filter_state_threshold_cycle() {
        let mut filter = FilterState::default();
        assert_eq!(filter.effective_minimum(), 0);

        filter.raise_minimum();
        assert_eq!(filter.minimum_rating, Some(1));

        for _ in 0..10 {
            filter.raise_minimum();
        }
        assert_eq!(filter.minimum_rating, Some(MAX_RATING));

        for _ in 0..MAX_RATING {
            filter.lower_minimum();
        }
        assert_eq!(filter.minimum_rating, None);
        assert_eq!(filter.effective_minimum(), 0);
    }
}

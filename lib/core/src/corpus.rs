use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Display attributes carried through the recommender untouched.
///
/// Defaults are resolved once at ingestion; see [`ItemAttributes::default`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemAttributes {
    /// Raw image reference, `None` when absent
    pub image_url: Option<String>,
    /// Defaults to `"-"`
    pub category: String,
    /// Defaults to `"Information unavailable"`
    pub opening_hours: String,
    /// Defaults to `"Check at the location"`
    pub ticket_price: String,
    pub facilities: Option<String>,
    pub maps_url: Option<String>,
    /// Long-form description for display. Defaults to `"Description unavailable."`
    pub description: String,
}

impl ItemAttributes {
    pub const DEFAULT_CATEGORY: &'static str = "-";
    pub const DEFAULT_OPENING_HOURS: &'static str = "Information unavailable";
    pub const DEFAULT_TICKET_PRICE: &'static str = "Check at the location";
    pub const DEFAULT_DESCRIPTION: &'static str = "Description unavailable.";
}

impl Default for ItemAttributes {
    fn default() -> Self {
        Self {
            image_url: None,
            category: Self::DEFAULT_CATEGORY.to_string(),
            opening_hours: Self::DEFAULT_OPENING_HOURS.to_string(),
            ticket_price: Self::DEFAULT_TICKET_PRICE.to_string(),
            facilities: None,
            maps_url: None,
            description: Self::DEFAULT_DESCRIPTION.to_string(),
        }
    }
}

/// A catalog entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    /// Lookup key
    pub name: String,
    /// Text the term-weighting model is fitted on; empty when missing
    pub text: String,
    #[serde(default)]
    pub attributes: ItemAttributes,
}

impl Item {
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            attributes: ItemAttributes::default(),
        }
    }

    #[inline]
    #[must_use]
    pub fn with_attributes(mut self, attributes: ItemAttributes) -> Self {
        self.attributes = attributes;
        self
    }
}

/// Immutable, ordered catalog with name lookup
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    items: Vec<Item>,
    // name -> first row carrying it
    by_name: AHashMap<String, usize>,
}

impl Corpus {
    pub fn new(items: Vec<Item>) -> Self {
        let mut by_name = AHashMap::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            if by_name.contains_key(&item.name) {
                warn!(name = %item.name, row = index, "duplicate item name, lookups resolve to the first row");
                continue;
            }
            by_name.insert(item.name.clone(), index);
        }
        Self { items, by_name }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Row of the first item named `name`
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    pub fn find(&self, name: &str) -> Option<&Item> {
        self.index_of(name).map(|i| &self.items[i])
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn texts(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.text.as_str()).collect()
    }

    /// Items named in `names`, in catalog order, at most `limit`.
    /// Falls back to the first `limit` items when none of the names exist.
    pub fn popular<S: AsRef<str>>(&self, names: &[S], limit: usize) -> Vec<&Item> {
        let picked: Vec<&Item> = self
            .items
            .iter()
            .filter(|item| names.iter().any(|n| n.as_ref() == item.name))
            .take(limit)
            .collect();

        if picked.is_empty() {
            self.items.iter().take(limit).collect()
        } else {
            picked
        }
    }
}

impl FromIterator<Item> for Corpus {
    fn from_iter<T: IntoIterator<Item = Item>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

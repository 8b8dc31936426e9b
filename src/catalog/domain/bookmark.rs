use crate::catalog::domain::{Product, ProductId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A bookmarked product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookmarkItem {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub subtitle: String,
    pub manufacturer_name: String,
    pub manufacturer_id: i64,
    pub added_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl BookmarkItem {
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            subtitle: product.subtitle.clone().unwrap_or_default(),
            manufacturer_name: product.manufacturer.name.clone(),
            manufacturer_id: product.manufacturer.id,
            added_at: Utc::now(),
            image_url: product.thumbnail().map(str::to_string),
            package_type: product.specifications.package_type.clone(),
            category: product.category.clone(),
        }
    }

    /// A bookmark needs at least an id, a name and a manufacturer to be
    /// renderable later; anything less is dropped on add.
    fn is_valid(&self) -> bool {
        self.id.0 != 0 && !self.name.is_empty() && self.manufacturer_id != 0
    }
}

/// The bookmark set, unique by product id with toggle semantics.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BookmarkList {
    pub items: Vec<BookmarkItem>,
}

impl BookmarkList {
    /// Adds a bookmark, stamping `added_at`.
    ///
    /// Duplicate ids and items failing validation are ignored.
    ///
    /// # Returns
    /// `true` if the bookmark was added
    pub fn add(&mut self, item: BookmarkItem) -> bool {
        if !item.is_valid() || self.is_bookmarked(item.id) {
            return false;
        }
        self.items.push(BookmarkItem {
            added_at: Utc::now(),
            ..item
        });
        true
    }

    /// Removes a bookmark; no-op if absent.
    pub fn remove(&mut self, id: ProductId) {
        self.items.retain(|item| item.id != id);
    }

    /// Present → remove, absent → add.
    ///
    /// # Returns
    /// `true` if the product is bookmarked after the call
    pub fn toggle(&mut self, item: BookmarkItem) -> bool {
        if self.is_bookmarked(item.id) {
            self.remove(item.id);
            false
        } else {
            self.add(item)
        }
    }

    pub fn is_bookmarked(&self, id: ProductId) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bookmark(id: i64) -> BookmarkItem {
        BookmarkItem {
            id: ProductId(id),
            name: format!("IC-{}", id),
            subtitle: String::new(),
            manufacturer_name: "Macroblock".to_string(),
            manufacturer_id: 3,
            added_at: Utc::now(),
            image_url: None,
            package_type: None,
            category: Some("LED Driver IC".to_string()),
        }
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut list = BookmarkList::default();
        assert!(list.toggle(bookmark(1)));
        assert!(list.is_bookmarked(ProductId(1)));
        assert_eq!(list.count(), 1);

        assert!(!list.toggle(bookmark(1)));
        assert!(!list.is_bookmarked(ProductId(1)));
        assert_eq!(list.count(), 0);
    }

    #[test]
    fn test_duplicate_add_is_ignored() {
        let mut list = BookmarkList::default();
        assert!(list.add(bookmark(1)));
        assert!(!list.add(bookmark(1)));
        assert_eq!(list.count(), 1);
    }

    #[test]
    fn test_invalid_bookmark_is_dropped() {
        let mut list = BookmarkList::default();
        let mut nameless = bookmark(1);
        nameless.name = String::new();
        assert!(!list.add(nameless));
        assert_eq!(list.count(), 0);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut list = BookmarkList::default();
        list.add(bookmark(1));
        list.remove(ProductId(9));
        assert_eq!(list.count(), 1);
    }

    #[test]
    fn test_clear() {
        let mut list = BookmarkList::default();
        list.add(bookmark(1));
        list.add(bookmark(2));
        list.clear();
        assert_eq!(list.count(), 0);
    }
}

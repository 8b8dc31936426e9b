use crate::catalog::domain::{Product, ProductId, Specifications};
use serde::{Deserialize, Serialize};

/// Upper bound on the compare set; side-by-side columns stop fitting
/// beyond four products.
pub const MAX_COMPARE_ITEMS: usize = 4;

/// One product selected for side-by-side specification comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompareItem {
    pub id: ProductId,
    pub name: String,
    pub manufacturer: String,
    #[serde(default)]
    pub part_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Carried for the comparison table only; no logic reads into it.
    #[serde(default)]
    pub specifications: Specifications,
}

impl CompareItem {
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            manufacturer: product.manufacturer.name.clone(),
            part_number: product.part_number.clone().unwrap_or_default(),
            thumbnail: product.thumbnail().map(str::to_string),
            category: product.category.clone(),
            specifications: product.specifications.clone(),
        }
    }
}

/// Result of a toggle, surfaced to the UI as a transient notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOutcome {
    Added,
    Removed,
    /// The set already holds `MAX_COMPARE_ITEMS`; nothing was mutated.
    ListFull,
}

/// The bounded compare set plus the dialog-visibility flag.
///
/// Membership is unique by product id and capped at `MAX_COMPARE_ITEMS`.
/// The dialog flag is independent of set contents.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CompareList {
    pub items: Vec<CompareItem>,
    #[serde(default)]
    pub dialog_open: bool,
}

impl CompareList {
    /// Toggles a product's membership.
    ///
    /// Present → removed. Absent → added, unless the set is already full,
    /// in which case nothing changes and `ListFull` is returned so the UI
    /// can show a notice.
    pub fn toggle(&mut self, item: CompareItem) -> CompareOutcome {
        if let Some(position) = self.items.iter().position(|existing| existing.id == item.id) {
            self.items.remove(position);
            return CompareOutcome::Removed;
        }
        if self.items.len() >= MAX_COMPARE_ITEMS {
            return CompareOutcome::ListFull;
        }
        self.items.push(item);
        CompareOutcome::Added
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Empties the set; the dialog flag is left untouched.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn open_dialog(&mut self) {
        self.dialog_open = true;
    }

    pub fn close_dialog(&mut self) {
        self.dialog_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64) -> CompareItem {
        CompareItem {
            id: ProductId(id),
            name: format!("IC-{}", id),
            manufacturer: "Macroblock".to_string(),
            part_number: format!("IC-{}GP", id),
            thumbnail: None,
            category: None,
            specifications: Specifications::default(),
        }
    }

    #[test]
    fn test_toggle_adds_and_removes() {
        let mut list = CompareList::default();
        assert_eq!(list.toggle(item(1)), CompareOutcome::Added);
        assert!(list.contains(ProductId(1)));

        assert_eq!(list.toggle(item(1)), CompareOutcome::Removed);
        assert!(!list.contains(ProductId(1)));
        assert!(list.is_empty());
    }

    #[test]
    fn test_fifth_distinct_add_is_rejected() {
        let mut list = CompareList::default();
        for id in 1..=4 {
            assert_eq!(list.toggle(item(id)), CompareOutcome::Added);
        }
        assert_eq!(list.len(), MAX_COMPARE_ITEMS);

        let before = list.items.clone();
        assert_eq!(list.toggle(item(5)), CompareOutcome::ListFull);
        assert_eq!(list.items, before);
    }

    #[test]
    fn test_bound_holds_across_arbitrary_toggles() {
        let mut list = CompareList::default();
        for id in [1, 2, 3, 2, 4, 5, 6, 3, 7, 8, 1, 9] {
            list.toggle(item(id));
            assert!(list.len() <= MAX_COMPARE_ITEMS);
        }
    }

    #[test]
    fn test_toggle_full_list_still_removes_members() {
        let mut list = CompareList::default();
        for id in 1..=4 {
            list.toggle(item(id));
        }
        // removal must work even at capacity
        assert_eq!(list.toggle(item(3)), CompareOutcome::Removed);
        assert_eq!(list.len(), 3);
        assert_eq!(list.toggle(item(5)), CompareOutcome::Added);
    }

    #[test]
    fn test_dialog_flag_is_independent_of_contents() {
        let mut list = CompareList::default();
        list.toggle(item(1));
        list.open_dialog();
        assert!(list.dialog_open);

        list.clear();
        assert!(list.is_empty());
        assert!(list.dialog_open);

        list.close_dialog();
        assert!(!list.dialog_open);
    }
}

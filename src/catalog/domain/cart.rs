use crate::catalog::domain::{Product, ProductId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One product entry in the quote cart, with its own quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub subtitle: String,
    pub manufacturer_name: String,
    pub manufacturer_id: i64,
    pub quantity: u32,
    pub added_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_type: Option<String>,
}

impl CartLineItem {
    /// Builds a cart line from a catalog product.
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            subtitle: product.subtitle.clone().unwrap_or_default(),
            manufacturer_name: product.manufacturer.name.clone(),
            manufacturer_id: product.manufacturer.id,
            quantity,
            added_at: Utc::now(),
            image_url: product.thumbnail().map(str::to_string),
            package_type: product.specifications.package_type.clone(),
        }
    }
}

/// Cart lines for one manufacturer, used by the grouped cart view.
#[derive(Debug, Clone, PartialEq)]
pub struct ManufacturerGroup {
    pub manufacturer_id: i64,
    pub manufacturer_name: String,
    pub items: Vec<CartLineItem>,
}

/// The quote cart: a list of line items keyed by product id.
///
/// Invariants: quantity is always >= 1, and each product id appears in at
/// most one line (re-adding an existing id merges by summing quantities).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QuoteCart {
    pub items: Vec<CartLineItem>,
}

impl QuoteCart {
    /// Adds a line item, merging with an existing line for the same id.
    ///
    /// Merging sums the quantities and refreshes `added_at`; the stored
    /// metadata (name, image, package) is replaced by the incoming item's.
    /// An item with a zero quantity is rejected as a no-op, matching the
    /// invalid-input handling of the quantity controls.
    ///
    /// # Returns
    /// `true` if the cart changed
    pub fn add_item(&mut self, item: CartLineItem) -> bool {
        if item.quantity == 0 {
            return false;
        }

        match self.items.iter_mut().find(|line| line.id == item.id) {
            Some(existing) => {
                let merged_quantity = existing.quantity.saturating_add(item.quantity);
                *existing = CartLineItem {
                    quantity: merged_quantity,
                    added_at: Utc::now(),
                    ..item
                };
            }
            None => {
                self.items.push(CartLineItem {
                    added_at: Utc::now(),
                    ..item
                });
            }
        }
        true
    }

    /// Removes the line matching `id`; a no-op (not an error) if absent.
    pub fn remove_item(&mut self, id: ProductId) {
        self.items.retain(|line| line.id != id);
    }

    /// Sets the quantity for a line and refreshes its `added_at`.
    ///
    /// Requests below the quantity floor of 1 are ignored, as are ids not
    /// present in the cart.
    ///
    /// # Returns
    /// `true` if a line was updated
    pub fn update_quantity(&mut self, id: ProductId, quantity: u32) -> bool {
        if quantity < 1 {
            return false;
        }
        match self.items.iter_mut().find(|line| line.id == id) {
            Some(line) => {
                line.quantity = quantity;
                line.added_at = Utc::now();
                true
            }
            None => false,
        }
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Number of distinct line items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of all line quantities.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Whether a product is already in the cart.
    pub fn is_in_quote(&self, id: ProductId) -> bool {
        self.items.iter().any(|line| line.id == id)
    }

    /// Groups lines by manufacturer, preserving first-seen manufacturer
    /// order so the cart page renders stably as quantities change.
    pub fn grouped_by_manufacturer(&self) -> Vec<ManufacturerGroup> {
        let mut groups: Vec<ManufacturerGroup> = Vec::new();
        for line in &self.items {
            match groups
                .iter_mut()
                .find(|group| group.manufacturer_id == line.manufacturer_id)
            {
                Some(group) => group.items.push(line.clone()),
                None => groups.push(ManufacturerGroup {
                    manufacturer_id: line.manufacturer_id,
                    manufacturer_name: line.manufacturer_name.clone(),
                    items: vec![line.clone()],
                }),
            }
        }
        groups
    }
}

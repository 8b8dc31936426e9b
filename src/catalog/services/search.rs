use crate::catalog::domain::Product;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// State of the search modal, persisted as its own slice.
///
/// Only the query and the last-search timestamp survive a reload; the
/// open flag and any transient error are session-local.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchState {
    #[serde(skip)]
    pub is_open: bool,
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub last_search_time: Option<DateTime<Utc>>,
    #[serde(skip)]
    pub error: Option<String>,
}

impl SearchState {
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.error = None;
    }

    /// Records that a search over the loaded list completed.
    pub fn mark_searched(&mut self) {
        self.last_search_time = Some(Utc::now());
        self.error = None;
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.last_search_time = None;
        self.error = None;
    }
}

/// Naive substring search over the already-loaded product list.
///
/// Case-insensitive match against name, subtitle, part number and
/// manufacturer name; a blank query matches everything.
pub fn search_products<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return products.iter().collect();
    }
    products
        .iter()
        .filter(|product| {
            product.name.to_lowercase().contains(&needle)
                || product
                    .subtitle
                    .as_deref()
                    .is_some_and(|s| s.to_lowercase().contains(&needle))
                || product
                    .part_number
                    .as_deref()
                    .is_some_and(|p| p.to_lowercase().contains(&needle))
                || product.manufacturer.name.to_lowercase().contains(&needle)
        })
        .collect()
}

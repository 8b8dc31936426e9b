use crate::application::store::Slice;
use crate::catalog::domain::{
    BookmarkItem, BookmarkList, CartLineItem, CompareItem, CompareList, CompareOutcome, QuoteCart,
};
use crate::catalog::services::SearchState;
use crate::ports::outbound::{NoticeReporter, SliceStorage, StorageSync};
use crate::shared::Result;
use std::sync::Arc;

/// Storage key for the search modal slice.
pub const SEARCH_SLICE_KEY: &str = "search-store";
/// Storage key for the quote cart slice.
pub const QUOTE_CART_SLICE_KEY: &str = "quote-cart-storage";
/// Storage key for the bookmarks slice.
pub const BOOKMARKS_SLICE_KEY: &str = "bookmarks-storage";
/// Storage key for the compare list slice.
pub const COMPARE_SLICE_KEY: &str = "compare-items-storage";

/// The four persisted slices of client state, bundled for one context.
///
/// Every UI surface of a context (navbar badge, cart page, compare
/// dialog) shares the same `ClientStore`; a second context (another tab)
/// mounts its own over the same storage and the same sync hub, and the
/// slices keep each other consistent through the sync port.
pub struct ClientStore {
    cart: Slice<QuoteCart>,
    bookmarks: Slice<BookmarkList>,
    compare: Slice<CompareList>,
    search: Slice<SearchState>,
}

impl ClientStore {
    /// Mounts all slices, rehydrating each from durable storage.
    pub fn mount(storage: Arc<dyn SliceStorage>, sync: Arc<dyn StorageSync>) -> Self {
        Self {
            cart: Slice::mount(QUOTE_CART_SLICE_KEY, Arc::clone(&storage), Arc::clone(&sync)),
            bookmarks: Slice::mount(BOOKMARKS_SLICE_KEY, Arc::clone(&storage), Arc::clone(&sync)),
            compare: Slice::mount(COMPARE_SLICE_KEY, Arc::clone(&storage), Arc::clone(&sync)),
            search: Slice::mount(SEARCH_SLICE_KEY, storage, sync),
        }
    }

    pub fn cart(&self) -> &Slice<QuoteCart> {
        &self.cart
    }

    pub fn bookmarks(&self) -> &Slice<BookmarkList> {
        &self.bookmarks
    }

    pub fn compare(&self) -> &Slice<CompareList> {
        &self.compare
    }

    pub fn search(&self) -> &Slice<SearchState> {
        &self.search
    }

    /// "Add to quote" handler: merge the line into the cart and confirm
    /// with a transient notice.
    pub fn add_to_cart(&self, item: CartLineItem, reporter: &dyn NoticeReporter) -> Result<()> {
        let name = item.name.clone();
        let added = self.cart.set(|cart| cart.add_item(item))?;
        if added {
            reporter.notice(&format!("{} added to quote cart", name));
        }
        Ok(())
    }

    /// Compare toggle handler; a full list surfaces a non-blocking
    /// warning and leaves the set untouched.
    pub fn toggle_compare(
        &self,
        item: CompareItem,
        reporter: &dyn NoticeReporter,
    ) -> Result<CompareOutcome> {
        let name = item.name.clone();
        let outcome = self.compare.set(|list| list.toggle(item))?;
        match outcome {
            CompareOutcome::Added => reporter.notice(&format!("{} added to comparison", name)),
            CompareOutcome::Removed => {
                reporter.notice(&format!("{} removed from comparison", name))
            }
            CompareOutcome::ListFull => reporter.warn(
                "Comparison list is full: up to 4 products can be compared at once",
            ),
        }
        Ok(outcome)
    }

    /// Bookmark toggle handler.
    ///
    /// # Returns
    /// `true` if the product is bookmarked after the call
    pub fn toggle_bookmark(
        &self,
        item: BookmarkItem,
        reporter: &dyn NoticeReporter,
    ) -> Result<bool> {
        let name = item.name.clone();
        let bookmarked = self.bookmarks.set(|list| list.toggle(item))?;
        if bookmarked {
            reporter.notice(&format!("{} bookmarked", name));
        } else {
            reporter.notice(&format!("{} removed from bookmarks", name));
        }
        Ok(bookmarked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::memory::{MemorySliceStorage, StorageHub};
    use crate::catalog::domain::{ProductId, Specifications};
    use chrono::Utc;
    use std::sync::Mutex;

    struct RecordingReporter {
        messages: Mutex<Vec<String>>,
    }

    impl RecordingReporter {
        fn new() -> Self {
            Self {
                messages: Mutex::new(Vec::new()),
            }
        }

        fn joined(&self) -> String {
            self.messages.lock().unwrap().join("\n")
        }
    }

    impl NoticeReporter for RecordingReporter {
        fn notice(&self, message: &str) {
            self.messages.lock().unwrap().push(message.to_string());
        }
        fn warn(&self, message: &str) {
            self.messages.lock().unwrap().push(message.to_string());
        }
        fn error(&self, message: &str) {
            self.messages.lock().unwrap().push(message.to_string());
        }
    }

    fn mounted_store() -> (ClientStore, Arc<MemorySliceStorage>, Arc<StorageHub>) {
        let storage = Arc::new(MemorySliceStorage::new());
        let hub = StorageHub::new();
        let store = ClientStore::mount(storage.clone(), hub.context());
        (store, storage, hub)
    }

    fn line(id: i64) -> CartLineItem {
        CartLineItem {
            id: ProductId(id),
            name: format!("IC-{}", id),
            subtitle: String::new(),
            manufacturer_name: "Macroblock".to_string(),
            manufacturer_id: 3,
            quantity: 1,
            added_at: Utc::now(),
            image_url: None,
            package_type: None,
        }
    }

    fn compare_item(id: i64) -> CompareItem {
        CompareItem {
            id: ProductId(id),
            name: format!("IC-{}", id),
            manufacturer: "Macroblock".to_string(),
            part_number: String::new(),
            thumbnail: None,
            category: None,
            specifications: Specifications::default(),
        }
    }

    #[test]
    fn test_mount_rehydrates_all_slices() {
        let (store, _storage, _hub) = mounted_store();
        assert!(store.cart().is_ready());
        assert!(store.bookmarks().is_ready());
        assert!(store.compare().is_ready());
        assert!(store.search().is_ready());
    }

    #[test]
    fn test_add_to_cart_reports_notice() {
        let (store, _storage, _hub) = mounted_store();
        let reporter = RecordingReporter::new();

        store.add_to_cart(line(1), &reporter).unwrap();
        assert_eq!(store.cart().get().item_count(), 1);
        assert!(reporter.joined().contains("added to quote cart"));
    }

    #[test]
    fn test_toggle_compare_reports_full_list() {
        let (store, _storage, _hub) = mounted_store();
        let reporter = RecordingReporter::new();

        for id in 1..=4 {
            assert_eq!(
                store.toggle_compare(compare_item(id), &reporter).unwrap(),
                CompareOutcome::Added
            );
        }
        let outcome = store.toggle_compare(compare_item(5), &reporter).unwrap();
        assert_eq!(outcome, CompareOutcome::ListFull);
        assert_eq!(store.compare().get().len(), 4);
        assert!(reporter.joined().contains("full"));
    }

    #[test]
    fn test_toggle_bookmark_round_trip() {
        let (store, _storage, _hub) = mounted_store();
        let reporter = RecordingReporter::new();

        let item = BookmarkItem {
            id: ProductId(1),
            name: "MBI5124".to_string(),
            subtitle: String::new(),
            manufacturer_name: "Macroblock".to_string(),
            manufacturer_id: 3,
            added_at: Utc::now(),
            image_url: None,
            package_type: None,
            category: None,
        };
        assert!(store.toggle_bookmark(item.clone(), &reporter).unwrap());
        assert!(!store.toggle_bookmark(item, &reporter).unwrap());
        assert_eq!(store.bookmarks().get().count(), 0);
    }

    #[test]
    fn test_two_stores_stay_consistent_across_contexts() {
        let storage = Arc::new(MemorySliceStorage::new());
        let hub = StorageHub::new();
        let tab_a = ClientStore::mount(storage.clone(), hub.context());
        let tab_b = ClientStore::mount(storage, hub.context());
        let reporter = RecordingReporter::new();

        tab_a.add_to_cart(line(1), &reporter).unwrap();
        assert_eq!(tab_b.cart().get().item_count(), 1);

        tab_b.cart().set(|cart| cart.clear()).unwrap();
        assert_eq!(tab_a.cart().get().item_count(), 0);
    }
}

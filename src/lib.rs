//! quotedesk - client-side core for a B2B electronics component catalog
//!
//! This library provides the persisted client store, quote cart, compare
//! list, bookmark list, filter engine and quote submission flow behind a
//! component catalog, following hexagonal architecture and Domain-Driven
//! Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`catalog`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases, DTOs and the client store
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use quotedesk::prelude::*;
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! // Create adapters
//! let storage = Arc::new(MemorySliceStorage::new());
//! let hub = StorageHub::new();
//! let reporter = StderrNoticeReporter::new();
//!
//! // Mount the persisted store (one per tab/surface)
//! let store = ClientStore::mount(storage, hub.context());
//!
//! // Load the catalog
//! let catalog_client = RestCatalogClient::new("https://example.supabase.co/rest/v1")?;
//! let load = LoadCatalogUseCase::new(
//!     CachingProductSource::new(catalog_client.clone()),
//!     catalog_client,
//!     StderrNoticeReporter::new(),
//! );
//! let snapshot = load.execute(None).await?;
//!
//! // Filter and add to the quote cart
//! let criteria = snapshot.default_criteria();
//! for product in FilterEngine::apply(&snapshot.products, &criteria) {
//!     store.add_to_cart(CartLineItem::from_product(&product, 10), &reporter)?;
//! }
//!
//! // Submit the quote request
//! let gateway = RestQuoteGateway::new("https://example.com/api/quote-request")?;
//! let submit = SubmitQuoteUseCase::new(gateway, StderrNoticeReporter::new());
//! let contact = ContactInfo {
//!     name: "Kim Lee".to_string(),
//!     email: "kim@example.com".to_string(),
//!     company: None,
//!     phone: None,
//! };
//! let receipt = submit.execute(contact, None, store.cart()).await?;
//! println!("request id: {}", receipt.request_id);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod catalog;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrNoticeReporter;
    pub use crate::adapters::outbound::filesystem::FileSliceStorage;
    pub use crate::adapters::outbound::memory::{MemorySliceStorage, StorageHub};
    pub use crate::adapters::outbound::network::{
        CachingProductSource, RestCatalogClient, RestQuoteGateway,
    };
    pub use crate::application::dto::{ContactInfo, QuoteReceipt, QuoteRequest};
    pub use crate::application::store::{ClientStore, Slice};
    pub use crate::application::use_cases::{
        CatalogSnapshot, LoadCatalogUseCase, SubmitQuoteUseCase,
    };
    pub use crate::catalog::domain::{
        BookmarkItem, BookmarkList, CartLineItem, CompareItem, CompareList, CompareOutcome,
        Manufacturer, Product, ProductId, QuoteCart, ReferenceEntry, SpecRange, Specifications,
        MAX_COMPARE_ITEMS,
    };
    pub use crate::catalog::services::{
        search_products, FilterBounds, FilterCriteria, FilterEngine, FilterStats, SearchState,
    };
    pub use crate::ports::outbound::{
        NoticeReporter, ProductDataSource, QuoteGateway, ReferenceDataSource, SliceStorage,
        StorageSync,
    };
    pub use crate::shared::Result;
}

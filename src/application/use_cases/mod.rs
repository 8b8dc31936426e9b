/// Application use cases
pub mod load_catalog;
pub mod submit_quote;

pub use load_catalog::{CatalogSnapshot, LoadCatalogUseCase};
pub use submit_quote::SubmitQuoteUseCase;

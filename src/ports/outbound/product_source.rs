use crate::catalog::domain::{Product, ProductId};
use crate::catalog::services::FilterCriteria;
use crate::shared::Result;
use async_trait::async_trait;

/// ProductDataSource port for fetching the product catalog
///
/// This port abstracts the hosted database service behind a fetch/query
/// interface. The filter engine runs client-side; the optional criteria
/// argument only lets an adapter narrow the transfer when it can.
///
/// # Async Support
/// All methods are async network calls. Implementations must be
/// `Send + Sync` to support concurrent access.
#[async_trait]
pub trait ProductDataSource: Send + Sync {
    /// Fetches the product list, optionally narrowed by the given criteria
    ///
    /// # Errors
    /// Returns an error if the request fails or the response cannot be
    /// parsed. Callers keep their previous list visible on failure.
    async fn fetch_products(&self, criteria: Option<&FilterCriteria>) -> Result<Vec<Product>>;

    /// Fetches a single product by id
    ///
    /// # Errors
    /// Returns an error if the request fails or no product carries the id.
    async fn fetch_product_by_id(&self, id: ProductId) -> Result<Product>;
}

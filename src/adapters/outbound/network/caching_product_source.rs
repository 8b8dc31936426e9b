use crate::catalog::domain::{Product, ProductId};
use crate::catalog::services::FilterCriteria;
use crate::ports::outbound::ProductDataSource;
use crate::shared::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// CachingProductSource wraps a ProductDataSource and caches products
/// by id.
///
/// Decorator pattern: detail pages re-request products the list view
/// already transferred, so a by-id lookup is served from cache when
/// possible. List fetches pass through untouched (the criteria argument
/// makes them a poor cache key) but refresh the by-id cache as a side
/// effect. The cache is thread-safe and suitable for concurrent access.
pub struct CachingProductSource<S: ProductDataSource> {
    inner: S,
    by_id: Arc<DashMap<ProductId, Product>>,
}

impl<S: ProductDataSource> CachingProductSource<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            by_id: Arc::new(DashMap::new()),
        }
    }

    /// Current cache size (for tests/monitoring).
    #[cfg(test)]
    pub fn cached_count(&self) -> usize {
        self.by_id.len()
    }
}

#[async_trait]
impl<S: ProductDataSource> ProductDataSource for CachingProductSource<S> {
    async fn fetch_products(&self, criteria: Option<&FilterCriteria>) -> Result<Vec<Product>> {
        let products = self.inner.fetch_products(criteria).await?;
        for product in &products {
            self.by_id.insert(product.id, product.clone());
        }
        Ok(products)
    }

    async fn fetch_product_by_id(&self, id: ProductId) -> Result<Product> {
        if let Some(cached) = self.by_id.get(&id) {
            return Ok(cached.clone());
        }
        let product = self.inner.fetch_product_by_id(id).await?;
        self.by_id.insert(id, product.clone());
        Ok(product)
    }
}

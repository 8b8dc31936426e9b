use async_trait::async_trait;
use quotedesk::prelude::*;

/// Mock ProductDataSource for testing
pub struct MockProductSource {
    pub products: Vec<Product>,
    pub should_fail: bool,
}

impl MockProductSource {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            products: Vec::new(),
            should_fail: true,
        }
    }
}

#[async_trait]
impl ProductDataSource for MockProductSource {
    async fn fetch_products(&self, _criteria: Option<&FilterCriteria>) -> Result<Vec<Product>> {
        if self.should_fail {
            anyhow::bail!("Mock product source failure");
        }
        Ok(self.products.clone())
    }

    async fn fetch_product_by_id(&self, id: ProductId) -> Result<Product> {
        if self.should_fail {
            anyhow::bail!("Mock product source failure");
        }
        self.products
            .iter()
            .find(|product| product.id == id)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no product with id {}", id))
    }
}

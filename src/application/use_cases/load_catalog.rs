use crate::catalog::domain::{Product, ReferenceEntry};
use crate::catalog::services::{FilterBounds, FilterCriteria};
use crate::ports::outbound::{NoticeReporter, ProductDataSource, ReferenceDataSource};
use crate::shared::Result;

/// Everything the catalog pages render from: the product list plus the
/// reference lists that populate filter option menus.
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    pub products: Vec<Product>,
    pub manufacturers: Vec<ReferenceEntry>,
    pub categories: Vec<ReferenceEntry>,
    pub applications: Vec<ReferenceEntry>,
}

impl CatalogSnapshot {
    /// Filter criteria seeded with slider bounds observed in this
    /// snapshot's products.
    pub fn default_criteria(&self) -> FilterCriteria {
        FilterCriteria::with_bounds(&FilterBounds::from_products(&self.products))
    }
}

/// LoadCatalogUseCase - fetches the product list and reference data
///
/// Reference lists are fetched concurrently. There is no retry logic:
/// a failed load is reported and the caller keeps whatever snapshot it
/// already had (stale-but-visible).
///
/// # Type Parameters
/// * `PS` - ProductDataSource implementation
/// * `RS` - ReferenceDataSource implementation
/// * `NR` - NoticeReporter implementation
pub struct LoadCatalogUseCase<PS, RS, NR> {
    product_source: PS,
    reference_source: RS,
    notice_reporter: NR,
}

impl<PS, RS, NR> LoadCatalogUseCase<PS, RS, NR>
where
    PS: ProductDataSource,
    RS: ReferenceDataSource,
    NR: NoticeReporter,
{
    pub fn new(product_source: PS, reference_source: RS, notice_reporter: NR) -> Self {
        Self {
            product_source,
            reference_source,
            notice_reporter,
        }
    }

    /// Fetches a fresh snapshot.
    ///
    /// # Errors
    /// Returns the first fetch error; nothing partial is returned.
    pub async fn execute(&self, criteria: Option<&FilterCriteria>) -> Result<CatalogSnapshot> {
        let products = self.product_source.fetch_products(criteria);
        let manufacturers = self.reference_source.fetch_manufacturers();
        let categories = self.reference_source.fetch_categories();
        let applications = self.reference_source.fetch_applications();

        let (products, manufacturers, categories, applications) =
            futures::join!(products, manufacturers, categories, applications);

        Ok(CatalogSnapshot {
            products: products?,
            manufacturers: manufacturers?,
            categories: categories?,
            applications: applications?,
        })
    }

    /// Refreshes `snapshot` in place, leaving it untouched on failure.
    ///
    /// This is the page-level behavior: a failed background fetch logs a
    /// notice and the previous results stay on screen.
    ///
    /// # Returns
    /// `true` if the snapshot was replaced
    pub async fn refresh_into(
        &self,
        snapshot: &mut CatalogSnapshot,
        criteria: Option<&FilterCriteria>,
    ) -> bool {
        match self.execute(criteria).await {
            Ok(fresh) => {
                *snapshot = fresh;
                true
            }
            Err(e) => {
                self.notice_reporter
                    .error(&format!("Catalog refresh failed: {}", e));
                false
            }
        }
    }
}

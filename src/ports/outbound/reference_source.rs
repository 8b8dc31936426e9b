use crate::catalog::domain::ReferenceEntry;
use crate::shared::Result;
use async_trait::async_trait;

/// ReferenceDataSource port for manufacturer/category/application lists
///
/// These simple `{id, name, description}` lists populate filter option
/// menus and static marketing content.
#[async_trait]
pub trait ReferenceDataSource: Send + Sync {
    async fn fetch_manufacturers(&self) -> Result<Vec<ReferenceEntry>>;

    async fn fetch_categories(&self) -> Result<Vec<ReferenceEntry>>;

    async fn fetch_applications(&self) -> Result<Vec<ReferenceEntry>>;
}

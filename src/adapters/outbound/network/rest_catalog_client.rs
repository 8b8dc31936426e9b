use crate::catalog::domain::{Product, ProductId, ReferenceEntry};
use crate::catalog::services::FilterCriteria;
use crate::ports::outbound::{ProductDataSource, ReferenceDataSource};
use crate::shared::error::CatalogError;
use crate::shared::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Default request timeout. One attempt per request: a failed fetch is
/// surfaced to the caller, which keeps its previous results visible.
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// RestCatalogClient adapter for the hosted database's REST interface
///
/// Speaks a PostgREST-style JSON API: collections are paths, predicates
/// are query parameters. Implements both ProductDataSource and
/// ReferenceDataSource, covering products and the reference lists.
#[derive(Clone)]
pub struct RestCatalogClient {
    client: reqwest::Client,
    base_url: String,
}

impl RestCatalogClient {
    /// Creates a client for the given API root (e.g.
    /// `https://example.supabase.co/rest/v1`).
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, Duration::from_secs(REQUEST_TIMEOUT_SECS))
    }

    /// Creates a client from a loaded config file.
    pub fn from_config(config: &crate::config::ConfigFile) -> Result<Self> {
        let base_url = config.api_base_url.as_deref().ok_or_else(|| {
            anyhow::anyhow!(
                "Missing config field: api_base_url\n\n💡 Hint: Set api_base_url in quotedesk.config.yml to the REST root of your product database."
            )
        })?;
        let timeout = config
            .request_timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(REQUEST_TIMEOUT_SECS));
        Self::with_timeout(base_url, timeout)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("quotedesk/{}", version);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            anyhow::bail!("API base URL must start with http:// or https://: {}", base_url);
        }

        Ok(Self { client, base_url })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        resource: &str,
        query: &str,
    ) -> Result<T> {
        let url = if query.is_empty() {
            format!("{}/{}", self.base_url, resource)
        } else {
            format!("{}/{}?{}", self.base_url, resource, query)
        };

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CatalogError::DataSource {
                resource: resource.to_string(),
                details: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(CatalogError::DataSource {
                resource: resource.to_string(),
                details: format!("API returned status code {}", response.status()),
            }
            .into());
        }

        response.json().await.map_err(|e| {
            CatalogError::DataSource {
                resource: resource.to_string(),
                details: format!("response could not be parsed: {}", e),
            }
            .into()
        })
    }

    /// Builds the server-side narrowing for criteria the API can apply
    /// cheaply (manufacturer membership). Everything else is the filter
    /// engine's job once the list is in memory.
    fn products_query(criteria: Option<&FilterCriteria>) -> String {
        let Some(criteria) = criteria else {
            return String::new();
        };
        let manufacturers: Vec<&str> = criteria.manufacturers.selected().collect();
        if manufacturers.is_empty() {
            return String::new();
        }
        let encoded: Vec<String> = manufacturers
            .iter()
            .map(|name| urlencoding::encode(name).into_owned())
            .collect();
        format!("manufacturer_name=in.({})", encoded.join(","))
    }
}

#[async_trait]
impl ProductDataSource for RestCatalogClient {
    async fn fetch_products(&self, criteria: Option<&FilterCriteria>) -> Result<Vec<Product>> {
        let query = Self::products_query(criteria);
        self.get_json("products", &query).await
    }

    async fn fetch_product_by_id(&self, id: ProductId) -> Result<Product> {
        let query = format!("id=eq.{}", id);
        let mut matches: Vec<Product> = self.get_json("products", &query).await?;
        match matches.pop() {
            Some(product) => Ok(product),
            None => Err(CatalogError::DataSource {
                resource: "products".to_string(),
                details: format!("no product with id {}", id),
            }
            .into()),
        }
    }
}

#[async_trait]
impl ReferenceDataSource for RestCatalogClient {
    async fn fetch_manufacturers(&self) -> Result<Vec<ReferenceEntry>> {
        self.get_json("manufacturers", "").await
    }

    async fn fetch_categories(&self) -> Result<Vec<ReferenceEntry>> {
        self.get_json("categories", "").await
    }

    async fn fetch_applications(&self) -> Result<Vec<ReferenceEntry>> {
        self.get_json("applications", "").await
    }
}

pub mod caching_product_source;
pub mod rest_catalog_client;
pub mod rest_quote_gateway;

pub use caching_product_source::CachingProductSource;
pub use rest_catalog_client::RestCatalogClient;
pub use rest_quote_gateway::RestQuoteGateway;

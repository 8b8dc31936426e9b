use crate::application::dto::{QuoteReceipt, QuoteRequest};
use crate::ports::outbound::QuoteGateway;
use crate::shared::error::CatalogError;
use crate::shared::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct QuoteResponseBody {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: Option<String>,
    // the endpoint replies in camelCase
    #[serde(default, alias = "requestId")]
    request_id: Option<String>,
}

/// RestQuoteGateway adapter posting quote requests to the submission
/// endpoint.
///
/// Fire-and-forget: a single POST per call, no retry. Failures are
/// reported back so the UI can prompt the user to retry with the cart
/// intact.
pub struct RestQuoteGateway {
    client: reqwest::Client,
    endpoint: String,
}

impl RestQuoteGateway {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(format!("quotedesk/{}", version))
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Creates a gateway from a loaded config file.
    pub fn from_config(config: &crate::config::ConfigFile) -> Result<Self> {
        let endpoint = config.quote_endpoint.as_deref().ok_or_else(|| {
            anyhow::anyhow!(
                "Missing config field: quote_endpoint\n\n💡 Hint: Set quote_endpoint in quotedesk.config.yml to your quote-request submission URL."
            )
        })?;
        Self::new(endpoint)
    }
}

#[async_trait]
impl QuoteGateway for RestQuoteGateway {
    async fn submit(&self, request: &QuoteRequest) -> Result<QuoteReceipt> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| CatalogError::QuoteSubmission {
                details: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(CatalogError::QuoteSubmission {
                details: format!("endpoint returned status code {}", response.status()),
            }
            .into());
        }

        let body: QuoteResponseBody =
            response.json().await.map_err(|e| CatalogError::QuoteSubmission {
                details: format!("response could not be parsed: {}", e),
            })?;

        if !body.success {
            return Err(CatalogError::QuoteSubmission {
                details: body
                    .message
                    .unwrap_or_else(|| "request was rejected".to_string()),
            }
            .into());
        }

        Ok(QuoteReceipt {
            request_id: body
                .request_id
                .unwrap_or_else(|| request.client_request_id.to_string()),
            message: body
                .message
                .unwrap_or_else(|| "Quote request received".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_body_defaults() {
        let body: QuoteResponseBody = serde_json::from_str("{}").unwrap();
        assert!(!body.success);
        assert!(body.message.is_none());
        assert!(body.request_id.is_none());
    }

    #[test]
    fn test_from_config_requires_endpoint() {
        let config = crate::config::ConfigFile::default();
        assert!(RestQuoteGateway::from_config(&config).is_err());

        let config = crate::config::ConfigFile {
            quote_endpoint: Some("https://example.com/api/quote-request".to_string()),
            ..Default::default()
        };
        assert!(RestQuoteGateway::from_config(&config).is_ok());
    }

    #[test]
    fn test_response_body_full() {
        let body: QuoteResponseBody = serde_json::from_str(
            r#"{"success":true,"message":"received","request_id":"1712"}"#,
        )
        .unwrap();
        assert!(body.success);
        assert_eq!(body.request_id.as_deref(), Some("1712"));
    }

    #[test]
    fn test_response_body_accepts_camel_case_request_id() {
        let body: QuoteResponseBody = serde_json::from_str(
            r#"{"success":true,"message":"received","requestId":"1712"}"#,
        )
        .unwrap();
        assert_eq!(body.request_id.as_deref(), Some("1712"));
    }
}

use crate::application::dto::{QuoteReceipt, QuoteRequest};
use crate::shared::Result;
use async_trait::async_trait;

/// QuoteGateway port for submitting quote requests
///
/// Fire-and-forget semantics: one attempt per call, no automatic retry.
/// On success the caller clears the cart; on failure the cart is left
/// intact and the user is prompted to retry.
#[async_trait]
pub trait QuoteGateway: Send + Sync {
    /// Submits a quote request
    ///
    /// # Returns
    /// A receipt carrying the server-assigned request id and a
    /// human-readable confirmation message
    ///
    /// # Errors
    /// Returns an error if the request fails or the server rejects it.
    async fn submit(&self, request: &QuoteRequest) -> Result<QuoteReceipt>;
}

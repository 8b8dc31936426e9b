use async_trait::async_trait;
use quotedesk::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock QuoteGateway for testing that records submitted requests
#[derive(Default, Clone)]
pub struct MockQuoteGateway {
    pub submitted: Arc<Mutex<Vec<QuoteRequest>>>,
    pub should_fail: bool,
}

impl MockQuoteGateway {
    pub fn new() -> Self {
        Self {
            submitted: Arc::new(Mutex::new(Vec::new())),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            submitted: Arc::new(Mutex::new(Vec::new())),
            should_fail: true,
        }
    }

    pub fn submission_count(&self) -> usize {
        self.submitted.lock().unwrap().len()
    }

    pub fn last_submission(&self) -> Option<QuoteRequest> {
        self.submitted.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl QuoteGateway for MockQuoteGateway {
    async fn submit(&self, request: &QuoteRequest) -> Result<QuoteReceipt> {
        if self.should_fail {
            anyhow::bail!("Mock quote gateway failure");
        }
        self.submitted.lock().unwrap().push(request.clone());
        Ok(QuoteReceipt {
            request_id: request.client_request_id.to_string(),
            message: "Quote request received".to_string(),
        })
    }
}

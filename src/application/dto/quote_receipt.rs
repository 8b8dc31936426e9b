use serde::{Deserialize, Serialize};

/// Server acknowledgement of a submitted quote request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteReceipt {
    pub request_id: String,
    pub message: String,
}

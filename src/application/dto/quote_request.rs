use crate::catalog::domain::CartLineItem;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Contact details attached to a quote request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// The quote-request payload sent to the submission endpoint.
///
/// `client_request_id` is generated per submission so a retried request
/// can be recognized server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub client_request_id: Uuid,
    pub contact: ContactInfo,
    pub items: Vec<CartLineItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl QuoteRequest {
    pub fn new(contact: ContactInfo, items: Vec<CartLineItem>, notes: Option<String>) -> Self {
        Self {
            client_request_id: Uuid::new_v4(),
            contact,
            items,
            notes,
        }
    }
}

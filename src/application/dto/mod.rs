/// Application-layer DTOs
pub mod quote_receipt;
pub mod quote_request;

pub use quote_receipt::QuoteReceipt;
pub use quote_request::{ContactInfo, QuoteRequest};

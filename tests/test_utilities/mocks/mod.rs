/// Mock implementations for testing
mod mock_notice_reporter;
mod mock_product_source;
mod mock_quote_gateway;
mod mock_reference_source;

pub use mock_notice_reporter::MockNoticeReporter;
pub use mock_product_source::MockProductSource;
pub use mock_quote_gateway::MockQuoteGateway;
pub use mock_reference_source::MockReferenceSource;

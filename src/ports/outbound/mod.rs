/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (durable client storage, the hosted
/// product database, the quote-request endpoint, user notices).
pub mod notice_reporter;
pub mod product_source;
pub mod quote_gateway;
pub mod reference_source;
pub mod slice_storage;

pub use notice_reporter::NoticeReporter;
pub use product_source::ProductDataSource;
pub use quote_gateway::QuoteGateway;
pub use reference_source::ReferenceDataSource;
pub use slice_storage::{SliceStorage, StorageSync};

use thiserror::Error;

/// Application-specific errors for the catalog core.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to fetch {resource}: {details}\n\n💡 Hint: Check your network connection; the previous results remain visible until a refresh succeeds")]
    DataSource { resource: String, details: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Storage operation failed for slice '{key}': {details}")]
    Storage { key: String, details: String },

    #[error("Quote request could not be submitted: {details}\n\n💡 Hint: Your cart is unchanged; you can retry the request")]
    QuoteSubmission { details: String },
}

impl CatalogError {
    /// Shorthand for a validation failure with a plain message.
    pub fn validation(message: impl Into<String>) -> Self {
        CatalogError::Validation {
            message: message.into(),
        }
    }
}

/// Type alias for Result with anyhow::Error as the error type,
/// giving one consistent error-handling pattern across the codebase.
pub type Result<T> = std::result::Result<T, anyhow::Error>;

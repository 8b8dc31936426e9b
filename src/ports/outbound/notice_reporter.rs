/// NoticeReporter port for transient user-facing notices
///
/// This port abstracts the toast/notice surface used for expected
/// failures (compare list full, missing contact fields) and confirmations
/// (item added, quote submitted). Infrastructure failures that fall back
/// silently do not go through this port.
pub trait NoticeReporter: Send + Sync {
    /// Reports an informational notice (e.g., "added to quote cart")
    fn notice(&self, message: &str);

    /// Reports a non-blocking warning (e.g., "compare list is full")
    fn warn(&self, message: &str);

    /// Reports a blocking, user-actionable failure (e.g., missing fields)
    fn error(&self, message: &str);
}

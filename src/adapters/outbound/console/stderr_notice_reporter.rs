use crate::ports::outbound::NoticeReporter;

/// StderrNoticeReporter adapter: prints transient notices to stderr.
///
/// Headless stand-in for the toast surface, used by tests and
/// non-browser embeddings.
pub struct StderrNoticeReporter;

impl StderrNoticeReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StderrNoticeReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl NoticeReporter for StderrNoticeReporter {
    fn notice(&self, message: &str) {
        eprintln!("ℹ️  {}", message);
    }

    fn warn(&self, message: &str) {
        eprintln!("⚠️  {}", message);
    }

    fn error(&self, message: &str) {
        eprintln!("❌ {}", message);
    }
}

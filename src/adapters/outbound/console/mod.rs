pub mod stderr_notice_reporter;

pub use stderr_notice_reporter::StderrNoticeReporter;

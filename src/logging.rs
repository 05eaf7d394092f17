//! Structured log view of an error record.
//!
//! [`RecordLog`] borrows from the [`ErrorRecord`](crate::ErrorRecord) that
//! created it and cannot outlive it. It is meant to be consumed immediately,
//! either written into a formatter with [`RecordLog::write_to`] or handed to
//! `tracing` with [`RecordLog::emit`].
//!
//! Messages are caller-controlled, so every formatted field is bounded.

use crate::StatusCode;
use std::borrow::Cow;
use std::fmt;

/// Maximum length for the message field in formatted output
const MAX_FIELD_OUTPUT_LEN: usize = 1024;

/// Truncation indicator appended to truncated strings
const TRUNCATION_INDICATOR: &str = "...[TRUNCATED]";

/// Structured log entry with borrowed data from an `ErrorRecord`.
///
/// # Example
///
/// ```rust
/// let err = status_errors::bad_request_with("missing field 'id'");
/// err.with_log(|log| {
///     assert_eq!(log.status_code().as_u16(), 400);
///     assert_eq!(log.message(), "missing field 'id'");
/// });
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RecordLog<'a> {
    pub(crate) status_code: StatusCode,
    pub(crate) message: &'a str,
}

impl<'a> RecordLog<'a> {
    /// Write the entry to a formatter without allocating for short messages.
    ///
    /// Format: `[<code>] reason='<reason>' message='<message>'`
    pub fn write_to(&self, f: &mut impl fmt::Write) -> fmt::Result {
        write!(
            f,
            "[{}] reason='{}' message='{}'",
            self.status_code,
            self.status_code.canonical_reason(),
            truncate_with_indicator(self.message)
        )
    }

    /// Forward the entry to `tracing`.
    ///
    /// Client errors are emitted at `warn`, server errors at `error`.
    pub fn emit(&self) {
        let message = truncate_with_indicator(self.message);
        if self.status_code.is_server_error() {
            tracing::error!(
                status_code = self.status_code.as_u16(),
                reason = self.status_code.canonical_reason(),
                error_message = %message,
                "error record"
            );
        } else {
            tracing::warn!(
                status_code = self.status_code.as_u16(),
                reason = self.status_code.canonical_reason(),
                error_message = %message,
                "error record"
            );
        }
    }

    /// Code of the logged record.
    #[inline]
    pub const fn status_code(&self) -> StatusCode {
        self.status_code
    }

    /// Untruncated message; bounding is left to the consumer.
    #[inline]
    pub const fn message(&self) -> &'a str {
        self.message
    }
}

impl fmt::Display for RecordLog<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

/// Truncate a string for display, keeping a visible indicator.
///
/// Returns a Cow<str> to avoid allocation when no truncation is needed.
fn truncate_with_indicator(s: &str) -> Cow<'_, str> {
    if s.len() <= MAX_FIELD_OUTPUT_LEN {
        return Cow::Borrowed(s);
    }

    let max_content_len = MAX_FIELD_OUTPUT_LEN.saturating_sub(TRUNCATION_INDICATOR.len());

    // Last char boundary at or before the limit
    let mut idx = max_content_len;
    while idx > 0 && !s.is_char_boundary(idx) {
        idx -= 1;
    }

    if idx == 0 {
        return Cow::Borrowed(TRUNCATION_INDICATOR);
    }

    let mut result = String::with_capacity(idx + TRUNCATION_INDICATOR.len());
    result.push_str(&s[..idx]);
    result.push_str(TRUNCATION_INDICATOR);
    Cow::Owned(result)
}

//! Descriptor and record models.
//!
//! An [`ErrorDescriptor`] is static configuration: one error kind's name,
//! status code and default message. An [`ErrorRecord`] is the value a
//! generator hands back to its caller.
//!
//! # Record Immutability
//!
//! `ErrorRecord` has no public constructor and no setters. The only way to
//! obtain one is through a generator, which stamps the status code captured
//! from its descriptor. Callers choose the message, never the code.
//!
//! # Message Storage
//!
//! Messages are `Cow<'static, str>`. Default messages from const descriptors
//! stay borrowed, so producing a default record does not allocate. Caller
//! overrides are owned and may carry request data, so they are zeroized when
//! the record drops.

use crate::StatusCode;
use crate::logging::RecordLog;
use std::borrow::Cow;
use std::fmt;
use zeroize::Zeroize;

// ============================================================================
// Error Descriptor
// ============================================================================

/// Static definition of one error kind.
///
/// # Example
///
/// ```rust
/// # use status_errors::{ErrorDescriptor, StatusCode};
/// const TEAPOT_GONE: ErrorDescriptor =
///     ErrorDescriptor::new_static("teapotGone", StatusCode::NotFound, "Teapot Gone");
/// assert_eq!(TEAPOT_GONE.name(), "teapotGone");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorDescriptor {
    name: Cow<'static, str>,
    status_code: StatusCode,
    message: Cow<'static, str>,
}

impl ErrorDescriptor {
    /// Create a descriptor from static strings, usable in const items.
    #[inline]
    pub const fn new_static(
        name: &'static str,
        status_code: StatusCode,
        message: &'static str,
    ) -> Self {
        Self {
            name: Cow::Borrowed(name),
            status_code,
            message: Cow::Borrowed(message),
        }
    }

    /// Create a descriptor from runtime values.
    #[inline]
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        status_code: StatusCode,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            name: name.into(),
            status_code,
            message: message.into(),
        }
    }

    /// Key under which the generator is registered.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    /// Fixed status code of every record derived from this descriptor.
    #[inline]
    pub const fn status_code(&self) -> StatusCode {
        self.status_code
    }

    /// Message used when the caller supplies none.
    #[inline]
    pub fn message(&self) -> &str {
        self.message.as_ref()
    }

    #[inline]
    pub(crate) fn name_cow(&self) -> &Cow<'static, str> {
        &self.name
    }

    #[inline]
    pub(crate) fn message_cow(&self) -> &Cow<'static, str> {
        &self.message
    }
}

// ============================================================================
// Error Record
// ============================================================================

/// Immutable `{status_code, message}` value produced by a generator.
///
/// Each invocation yields a fresh record owned solely by the caller. Two
/// records produced from the same arguments compare equal but share nothing.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[must_use = "error records should be returned or logged"]
pub struct ErrorRecord {
    status_code: StatusCode,
    message: Cow<'static, str>,
}

impl ErrorRecord {
    #[inline]
    pub(crate) fn new(status_code: StatusCode, message: Cow<'static, str>) -> Self {
        Self {
            status_code,
            message,
        }
    }

    /// Status code stamped by the generator.
    #[inline]
    pub const fn status_code(&self) -> StatusCode {
        self.status_code
    }

    /// Resolved message: the caller's override, or the descriptor default.
    #[inline]
    pub fn message(&self) -> &str {
        self.message.as_ref()
    }

    /// True when the message is borrowed from static configuration.
    #[inline]
    pub fn has_static_message(&self) -> bool {
        matches!(self.message, Cow::Borrowed(_))
    }

    /// Create a structured log view with a lifetime tied to this record.
    ///
    /// ```rust
    /// let err = status_errors::not_found();
    /// let mut line = String::new();
    /// err.log_entry().write_to(&mut line).unwrap();
    /// assert_eq!(line, "[404] reason='Not Found' message='Not Found'");
    /// ```
    #[inline]
    pub fn log_entry(&self) -> RecordLog<'_> {
        RecordLog {
            status_code: self.status_code,
            message: self.message.as_ref(),
        }
    }

    /// Callback form of [`log_entry`](Self::log_entry).
    #[inline]
    pub fn with_log<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&RecordLog<'_>) -> R,
    {
        let log = self.log_entry();
        f(&log)
    }
}

impl Zeroize for ErrorRecord {
    fn zeroize(&mut self) {
        if let Cow::Owned(ref mut s) = self.message {
            s.zeroize();
        }
    }
}

impl Drop for ErrorRecord {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl fmt::Debug for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorRecord")
            .field("status_code", &self.status_code.as_u16())
            .field("message", &self.message())
            .finish()
    }
}

impl fmt::Display for ErrorRecord {
    /// Format: `"[{code}] {message}"`, e.g. `"[404] Not Found"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.status_code, self.message)
    }
}

impl std::error::Error for ErrorRecord {}

//! Ready-made entry points for the built-in descriptors.
//!
//! Generators are built from [`definitions`](crate::definitions) on first use
//! and shared for the rest of the process.
//!
//! ```rust
//! use status_errors::{bad_request, bad_request_with, StatusCode};
//!
//! let err = bad_request();
//! assert_eq!((err.status_code(), err.message()), (StatusCode::BadRequest, "Bad Request"));
//!
//! let err = bad_request_with("X");
//! assert_eq!((err.status_code(), err.message()), (StatusCode::BadRequest, "X"));
//! ```

use crate::definitions::{self, names};
use crate::{ErrorMethod, ErrorMethodTable, ErrorRecord};
use std::borrow::Cow;
use std::sync::LazyLock;

static BUILTIN_METHODS: LazyLock<ErrorMethodTable> =
    LazyLock::new(|| ErrorMethodTable::build(&definitions::BUILTIN));

static BAD_REQUEST: LazyLock<&'static ErrorMethod> =
    LazyLock::new(|| shared_method(names::BAD_REQUEST));

static NOT_FOUND: LazyLock<&'static ErrorMethod> =
    LazyLock::new(|| shared_method(names::NOT_FOUND));

static GATEWAY_TIMEOUT: LazyLock<&'static ErrorMethod> =
    LazyLock::new(|| shared_method(names::GATEWAY_TIMEOUT));

/// Entry of the shared table. Every name in `names` is registered by `BUILTIN`.
fn shared_method(name: &str) -> &'static ErrorMethod {
    BUILTIN_METHODS
        .get(name)
        .expect("built-in name is registered in definitions::BUILTIN")
}

/// Shared table built from [`definitions::BUILTIN`].
#[inline]
pub fn builtin_methods() -> &'static ErrorMethodTable {
    &BUILTIN_METHODS
}

/// `400 Bad Request` with the default message.
#[inline]
pub fn bad_request() -> ErrorRecord {
    BAD_REQUEST.default_error()
}

/// `400` with a custom message.
#[inline]
pub fn bad_request_with(message: impl Into<Cow<'static, str>>) -> ErrorRecord {
    BAD_REQUEST.with_message(message)
}

/// `404 Not Found` with the default message.
#[inline]
pub fn not_found() -> ErrorRecord {
    NOT_FOUND.default_error()
}

/// `404` with a custom message.
#[inline]
pub fn not_found_with(message: impl Into<Cow<'static, str>>) -> ErrorRecord {
    NOT_FOUND.with_message(message)
}

/// `504 Gateway Timeout` with the default message.
#[inline]
pub fn gateway_timeout() -> ErrorRecord {
    GATEWAY_TIMEOUT.default_error()
}

/// `504` with a custom message.
#[inline]
pub fn gateway_timeout_with(message: impl Into<Cow<'static, str>>) -> ErrorRecord {
    GATEWAY_TIMEOUT.with_message(message)
}

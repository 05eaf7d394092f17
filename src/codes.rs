//! Status code set - the closed range of codes an error record may carry.
//!
//! Codes are a fixed enum rather than a raw integer, so a record can never be
//! built with a code outside the supported set. Runtime integers (for example
//! from a configuration file) go through [`StatusCode::try_from`], which is
//! the only fallible path in the crate.
//!
//! # Example
//!
//! ```rust
//! use status_errors::StatusCode;
//!
//! let code = StatusCode::try_from(404).unwrap();
//! assert_eq!(code, StatusCode::NotFound);
//! assert_eq!(code.canonical_reason(), "Not Found");
//! assert!(StatusCode::try_from(500).is_err());
//! ```

use std::fmt;

// ============================================================================
// Status Code
// ============================================================================

/// Status code attached to every [`ErrorRecord`](crate::ErrorRecord).
///
/// # Copy Semantics
///
/// Small fieldless enum. Generators capture it by value, so each one owns an
/// independent copy of its descriptor's code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u16", into = "u16"))]
#[repr(u16)]
pub enum StatusCode {
    /// 400: the request was malformed.
    BadRequest = 400,
    /// 404: the requested resource does not exist.
    NotFound = 404,
    /// 504: an upstream dependency did not answer in time.
    GatewayTimeout = 504,
}

impl StatusCode {
    /// Every supported code, in ascending order.
    pub const ALL: [StatusCode; 3] = [
        StatusCode::BadRequest,
        StatusCode::NotFound,
        StatusCode::GatewayTimeout,
    ];

    /// Get the raw numeric value.
    #[inline]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }

    /// Standard reason phrase for this code.
    #[inline]
    pub const fn canonical_reason(self) -> &'static str {
        match self {
            Self::BadRequest => "Bad Request",
            Self::NotFound => "Not Found",
            Self::GatewayTimeout => "Gateway Timeout",
        }
    }

    /// 4xx range.
    #[inline]
    pub const fn is_client_error(self) -> bool {
        matches!(self.as_u16(), 400..=499)
    }

    /// 5xx range.
    #[inline]
    pub const fn is_server_error(self) -> bool {
        matches!(self.as_u16(), 500..=599)
    }

    /// Look up a code with runtime validation.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `value` is not one of 400, 404 or 504.
    #[inline]
    pub const fn from_u16(value: u16) -> Result<Self, StatusCodeError> {
        match value {
            400 => Ok(Self::BadRequest),
            404 => Ok(Self::NotFound),
            504 => Ok(Self::GatewayTimeout),
            _ => Err(StatusCodeError::Unsupported { value }),
        }
    }
}

impl TryFrom<u16> for StatusCode {
    type Error = StatusCodeError;

    #[inline]
    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::from_u16(value)
    }
}

impl From<StatusCode> for u16 {
    #[inline]
    fn from(code: StatusCode) -> Self {
        code.as_u16()
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u16())
    }
}

/// Error type for status code validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusCodeError {
    /// Value is not in the supported set.
    Unsupported {
        /// The rejected value.
        value: u16,
    },
}

impl fmt::Display for StatusCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported { value } => {
                write!(f, "Status code {} is not supported (expected 400, 404 or 504)", value)
            }
        }
    }
}

impl std::error::Error for StatusCodeError {}

// ============================================================================
// Tests
// ============================================================================

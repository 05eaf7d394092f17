//! Built-in error descriptors.
//!
//! Three kinds ship with the crate. Each name is the key its generator is
//! registered under; each default message is the status code's canonical
//! reason phrase.
//!
//! | name             | code | default message     |
//! |------------------|------|---------------------|
//! | `badRequest`     | 400  | `Bad Request`       |
//! | `notFound`       | 404  | `Not Found`         |
//! | `gatewayTimeout` | 504  | `Gateway Timeout`   |
//!
//! # Governance
//!
//! Names must be unique within [`BUILTIN`]; the `tests` module at the bottom
//! of this file enforces it, along with the code/reason pairing.

use crate::{ErrorDescriptor, StatusCode, define_descriptors};

/// Registration keys for the built-in generators.
pub mod names {
    /// Key of the `400` generator.
    pub const BAD_REQUEST: &str = "badRequest";
    /// Key of the `404` generator.
    pub const NOT_FOUND: &str = "notFound";
    /// Key of the `504` generator.
    pub const GATEWAY_TIMEOUT: &str = "gatewayTimeout";
}

// -----------------------------------------------------------------------------
// 4xx - Client errors
// -----------------------------------------------------------------------------
define_descriptors! {
    /// Malformed request.
    BAD_REQUEST = (names::BAD_REQUEST, StatusCode::BadRequest, "Bad Request"),
    /// Missing resource.
    NOT_FOUND   = (names::NOT_FOUND, StatusCode::NotFound, "Not Found"),
}

// -----------------------------------------------------------------------------
// 5xx - Upstream errors
// -----------------------------------------------------------------------------
define_descriptors! {
    /// Upstream did not answer in time.
    GATEWAY_TIMEOUT = (names::GATEWAY_TIMEOUT, StatusCode::GatewayTimeout, "Gateway Timeout"),
}

/// All built-in descriptors, in registration order.
pub static BUILTIN: [ErrorDescriptor; 3] = [BAD_REQUEST, NOT_FOUND, GATEWAY_TIMEOUT];

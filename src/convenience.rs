//! Convenience macros for declaring descriptors and creating built-in errors.
//!
//! # Usage
//!
//! ```rust
//! # use status_errors::{bad_request, gateway_timeout, not_found};
//! let a = bad_request!();
//! let b = not_found!("No user with that id");
//! let upstream = "billing";
//! let c = gateway_timeout!("{} did not answer within {}s", upstream, 30);
//!
//! assert_eq!(a.message(), "Bad Request");
//! assert_eq!(b.message(), "No user with that id");
//! assert_eq!(c.message(), "billing did not answer within 30s");
//! ```
//!
//! A single literal is treated as a format string, so inline captures such as
//! `not_found!("no user {id}")` are filled in. A literal with no placeholders
//! stays allocation-free: it is borrowed as `&'static str`.

// ============================================================================
// Internal Helper Macro
// ============================================================================

#[doc(hidden)]
#[macro_export]
macro_rules! __create_builtin_error {
    ($method:path) => {
        $method()
    };
    ($method:path, $message:literal) => {
        match format_args!($message).as_str() {
            Some(message) => $method(message),
            None => $method(format!($message)),
        }
    };
    ($method:path, $fmt:literal $(, $arg:expr)+ $(,)?) => {
        $method(format!($fmt $(, $arg)+))
    };
}

// ============================================================================
// Error Creation Macros
// ============================================================================

/// Create a `400 Bad Request` record.
///
/// - `bad_request!()` uses the default message
/// - `bad_request!("literal")` overrides it
/// - `bad_request!("fmt {}", arg)` overrides it with a formatted message
#[macro_export]
macro_rules! bad_request {
    () => {
        $crate::__create_builtin_error!($crate::builtin::bad_request)
    };
    ($message:literal) => {
        $crate::__create_builtin_error!($crate::builtin::bad_request_with, $message)
    };
    ($fmt:literal $(, $arg:expr)+ $(,)?) => {
        $crate::__create_builtin_error!($crate::builtin::bad_request_with, $fmt $(, $arg)+)
    };
}

/// Create a `404 Not Found` record.
///
/// Same forms as [`bad_request!`].
#[macro_export]
macro_rules! not_found {
    () => {
        $crate::__create_builtin_error!($crate::builtin::not_found)
    };
    ($message:literal) => {
        $crate::__create_builtin_error!($crate::builtin::not_found_with, $message)
    };
    ($fmt:literal $(, $arg:expr)+ $(,)?) => {
        $crate::__create_builtin_error!($crate::builtin::not_found_with, $fmt $(, $arg)+)
    };
}

/// Create a `504 Gateway Timeout` record.
///
/// Same forms as [`bad_request!`].
#[macro_export]
macro_rules! gateway_timeout {
    () => {
        $crate::__create_builtin_error!($crate::builtin::gateway_timeout)
    };
    ($message:literal) => {
        $crate::__create_builtin_error!($crate::builtin::gateway_timeout_with, $message)
    };
    ($fmt:literal $(, $arg:expr)+ $(,)?) => {
        $crate::__create_builtin_error!($crate::builtin::gateway_timeout_with, $fmt $(, $arg)+)
    };
}

// ============================================================================
// Descriptor Definition Macros
// ============================================================================

/// Define one descriptor constant.
///
/// Leading attributes, including doc comments, are carried onto the constant.
///
/// # Example
///
/// ```rust
/// # use status_errors::{define_descriptor, StatusCode};
/// define_descriptor!(USER_MISSING, "userMissing", StatusCode::NotFound, "User not found");
/// assert_eq!(USER_MISSING.status_code(), StatusCode::NotFound);
/// ```
#[macro_export]
macro_rules! define_descriptor {
    ($(#[$meta:meta])* $const_name:ident, $name:expr, $status:expr, $message:expr) => {
        $(#[$meta])*
        pub const $const_name: $crate::ErrorDescriptor =
            $crate::ErrorDescriptor::new_static($name, $status, $message);
    };
}

/// Define several descriptor constants at once.
///
/// # Example
///
/// ```rust
/// # use status_errors::{define_descriptors, StatusCode};
/// define_descriptors! {
///     USER_MISSING = ("userMissing", StatusCode::NotFound, "User not found"),
///     BAD_CURSOR   = ("badCursor", StatusCode::BadRequest, "Invalid cursor"),
/// }
/// assert_eq!(BAD_CURSOR.message(), "Invalid cursor");
/// ```
#[macro_export]
macro_rules! define_descriptors {
    ($( $(#[$meta:meta])* $const_name:ident = ($name:expr, $status:expr, $message:expr) ),+ $(,)?) => {
        $(
            $crate::define_descriptor!($(#[$meta])* $const_name, $name, $status, $message);
        )+
    };
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::StatusCode;

    #[test]
    fn default_forms() {
        assert_eq!(bad_request!().status_code(), StatusCode::BadRequest);
        assert_eq!(not_found!().message(), "Not Found");
        assert_eq!(gateway_timeout!().message(), "Gateway Timeout");
    }

    #[test]
    fn literal_form_stays_borrowed() {
        let err = not_found!("gone");
        assert_eq!(err.message(), "gone");
        assert!(err.has_static_message());
    }

    #[test]
    fn literal_with_inline_capture_is_formatted() {
        let id = 42;
        let err = not_found!("no user {id}");
        assert_eq!(err.status_code(), StatusCode::NotFound);
        assert_eq!(err.message(), "no user 42");
        assert!(!err.has_static_message());
    }

    #[test]
    fn escaped_braces_in_literal() {
        let err = bad_request!("expected {{id}}");
        assert_eq!(err.message(), "expected {id}");
    }

    #[test]
    fn format_form() {
        let id = 42;
        let err = bad_request!("invalid id {}", id);
        assert_eq!(err.status_code(), StatusCode::BadRequest);
        assert_eq!(err.message(), "invalid id 42");
        assert!(!err.has_static_message());
    }

    #[test]
    fn macros_accept_trailing_comma() {
        let secs = 30;
        let err = gateway_timeout!("after {}s", secs,);
        assert_eq!(err.message(), "after 30s");
    }

    #[test]
    fn define_macros_expand_to_consts() {
        define_descriptors! {
            /// Documented local descriptor.
            LOCAL_A = ("localA", StatusCode::NotFound, "A"),
            LOCAL_B = ("localB", StatusCode::GatewayTimeout, "B"),
        }
        assert_eq!(LOCAL_A.name(), "localA");
        assert_eq!(LOCAL_B.status_code(), StatusCode::GatewayTimeout);
    }
}

//! # Status Errors
//!
//! Factory functions for structured error values with a fixed status code
//! and a default or overridden message.
//!
//! ## Model
//!
//! 1. An **error descriptor** names one kind of error and fixes its status
//!    code and default message
//! 2. The **factory builder** turns a list of descriptors into a table of
//!    generators, one per name
//! 3. A **generator** returns a fresh **error record** with the descriptor's
//!    code and either the default message or the caller's
//!
//! Records are immutable. The status code comes from the descriptor and
//! cannot be changed by the caller; only the message can vary.
//!
//! ## Quick Start
//!
//! ```rust
//! use status_errors::{bad_request, gateway_timeout_with, not_found, StatusCode};
//!
//! let err = bad_request();
//! assert_eq!(err.status_code(), StatusCode::BadRequest);
//! assert_eq!(err.message(), "Bad Request");
//!
//! let err = gateway_timeout_with("Timed out");
//! assert_eq!(err.status_code().as_u16(), 504);
//! assert_eq!(err.to_string(), "[504] Timed out");
//!
//! assert_eq!(not_found().message(), "Not Found");
//! ```
//!
//! ## Custom Tables
//!
//! ```rust
//! use status_errors::{ErrorDescriptor, ErrorFactoryBuilder, StatusCode};
//!
//! let table = ErrorFactoryBuilder::new()
//!     .descriptor(ErrorDescriptor::new_static("noSuchOrder", StatusCode::NotFound, "Order not found"))
//!     .descriptor(ErrorDescriptor::new_static("badCursor", StatusCode::BadRequest, "Invalid cursor"))
//!     .build();
//!
//! let err = table.invoke::<&str>("noSuchOrder", None).unwrap();
//! assert_eq!(err.message(), "Order not found");
//! ```
//!
//! ## Using Records as Errors
//!
//! [`ErrorRecord`] implements `std::error::Error`, and [`Result`] uses it as
//! the error type:
//!
//! ```rust
//! use status_errors::{not_found_with, Result};
//!
//! fn find(id: u32) -> Result<&'static str> {
//!     if id == 7 { Ok("seven") } else { Err(not_found_with(format!("no item {}", id))) }
//! }
//!
//! assert_eq!(find(3).unwrap_err().message(), "no item 3");
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for descriptors and status codes,
//!   `Serialize` for records

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::result;

pub mod builtin;
pub mod codes;
pub mod convenience;
pub mod definitions;
pub mod factory;
pub mod logging;
pub mod models;

pub use builtin::*;
pub use codes::*;
pub use factory::*;
pub use logging::*;
pub use models::*;

/// Type alias for Results using our error type.
pub type Result<T> = result::Result<T, ErrorRecord>;

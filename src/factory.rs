//! Error factory builder.
//!
//! Turns a list of [`ErrorDescriptor`]s into an [`ErrorMethodTable`]: one
//! generator per descriptor name. A generator takes an optional message and
//! returns a fresh [`ErrorRecord`] with the descriptor's status code and
//! either the caller's message or the default captured at build time.
//!
//! # Capture Semantics
//!
//! Every generator owns its own copy of the status code and default message.
//! Nothing is shared between generators and nothing is mutable after build,
//! so generators are `Send + Sync` and can be called from any thread.
//!
//! # Duplicate Names
//!
//! Names are keys. A later descriptor with an already registered name
//! replaces the earlier generator in place (last write wins). This is not an
//! error; a debug event is emitted through `tracing`.
//!
//! # Example
//!
//! ```rust
//! use status_errors::{ErrorDescriptor, ErrorMethodTable, StatusCode};
//!
//! let table = ErrorMethodTable::build(&[
//!     ErrorDescriptor::new_static("missingUser", StatusCode::NotFound, "User not found"),
//!     ErrorDescriptor::new_static("slowBackend", StatusCode::GatewayTimeout, "Backend timeout"),
//! ]);
//!
//! let err = table.invoke::<&str>("missingUser", None).unwrap();
//! assert_eq!(err.status_code(), StatusCode::NotFound);
//! assert_eq!(err.message(), "User not found");
//!
//! let err = table.get("slowBackend").unwrap().with_message("db took 31s");
//! assert_eq!(err.message(), "db took 31s");
//! ```

use crate::{ErrorDescriptor, ErrorRecord, StatusCode};
use smallvec::SmallVec;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Generator closure signature.
type Generate = dyn Fn(Option<Cow<'static, str>>) -> ErrorRecord + Send + Sync;

// ============================================================================
// Error Method
// ============================================================================

/// A named generator bound to one descriptor.
#[derive(Clone)]
pub struct ErrorMethod {
    name: Cow<'static, str>,
    status_code: StatusCode,
    generate: Arc<Generate>,
}

impl ErrorMethod {
    /// Build the generator for a single descriptor.
    pub fn from_descriptor(descriptor: &ErrorDescriptor) -> Self {
        let status_code = descriptor.status_code();
        let default_message = descriptor.message_cow().clone();

        Self {
            name: descriptor.name_cow().clone(),
            status_code,
            generate: Arc::new(move |message: Option<Cow<'static, str>>| {
                let message = message.unwrap_or_else(|| default_message.clone());
                ErrorRecord::new(status_code, message)
            }),
        }
    }

    /// Name this generator is registered under.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    /// Status code stamped on every record from this generator.
    #[inline]
    pub const fn status_code(&self) -> StatusCode {
        self.status_code
    }

    /// Produce a record. `None` selects the default message.
    #[inline]
    pub fn invoke<M>(&self, message: Option<M>) -> ErrorRecord
    where
        M: Into<Cow<'static, str>>,
    {
        (self.generate)(message.map(Into::into))
    }

    /// Produce a record with the default message.
    #[inline]
    pub fn default_error(&self) -> ErrorRecord {
        (self.generate)(None)
    }

    /// Produce a record with a caller-supplied message, used verbatim.
    #[inline]
    pub fn with_message(&self, message: impl Into<Cow<'static, str>>) -> ErrorRecord {
        (self.generate)(Some(message.into()))
    }
}

impl fmt::Debug for ErrorMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorMethod")
            .field("name", &self.name())
            .field("status_code", &self.status_code.as_u16())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Error Method Table
// ============================================================================

/// Name-to-generator mapping. Read-only after build.
///
/// Tables are small (a handful of kinds), so entries live inline and lookup
/// is a linear scan in registration order.
#[derive(Clone, Default)]
pub struct ErrorMethodTable {
    methods: SmallVec<[ErrorMethod; 4]>,
}

impl ErrorMethodTable {
    /// Build one generator per distinct descriptor name.
    pub fn build<'a, I>(descriptors: I) -> Self
    where
        I: IntoIterator<Item = &'a ErrorDescriptor>,
    {
        let mut methods: SmallVec<[ErrorMethod; 4]> = SmallVec::new();

        for descriptor in descriptors {
            let method = ErrorMethod::from_descriptor(descriptor);
            match methods.iter_mut().find(|m| m.name == method.name) {
                Some(existing) => {
                    tracing::debug!(
                        name = %method.name,
                        replaced = existing.status_code.as_u16(),
                        status_code = method.status_code.as_u16(),
                        "duplicate error descriptor name, later definition wins"
                    );
                    *existing = method;
                }
                None => methods.push(method),
            }
        }

        tracing::trace!(count = methods.len(), "error method table built");
        Self { methods }
    }

    /// Look up a generator by name.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&ErrorMethod> {
        self.methods.iter().find(|m| m.name() == name)
    }

    /// True when a generator is registered under `name`.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Look up and invoke in one step. Unknown names yield `None`.
    #[inline]
    pub fn invoke<M>(&self, name: &str, message: Option<M>) -> Option<ErrorRecord>
    where
        M: Into<Cow<'static, str>>,
    {
        self.get(name).map(|m| m.invoke(message))
    }

    /// Number of distinct names.
    #[inline]
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// True when no descriptor was supplied.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Registered names, in first-registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.methods.iter().map(ErrorMethod::name)
    }

    /// Generators in first-registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, ErrorMethod> {
        self.methods.iter()
    }
}

impl<'t> IntoIterator for &'t ErrorMethodTable {
    type Item = &'t ErrorMethod;
    type IntoIter = std::slice::Iter<'t, ErrorMethod>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for ErrorMethodTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.methods.iter()).finish()
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Chained front end for [`ErrorMethodTable::build`].
///
/// ```rust
/// # use status_errors::{definitions, ErrorDescriptor, ErrorFactoryBuilder, StatusCode};
/// let table = ErrorFactoryBuilder::new()
///     .descriptors(&definitions::BUILTIN)
///     .descriptor(ErrorDescriptor::new("quotaMissing", StatusCode::NotFound, "No quota"))
///     .build();
/// assert_eq!(table.len(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ErrorFactoryBuilder {
    descriptors: Vec<ErrorDescriptor>,
}

impl ErrorFactoryBuilder {
    /// Empty builder.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one descriptor.
    #[must_use]
    pub fn descriptor(mut self, descriptor: ErrorDescriptor) -> Self {
        self.descriptors.push(descriptor);
        self
    }

    /// Append several descriptors, preserving order.
    #[must_use]
    pub fn descriptors<'a, I>(mut self, descriptors: I) -> Self
    where
        I: IntoIterator<Item = &'a ErrorDescriptor>,
    {
        self.descriptors.extend(descriptors.into_iter().cloned());
        self
    }

    /// Build the table from the descriptors collected so far.
    pub fn build(&self) -> ErrorMethodTable {
        ErrorMethodTable::build(&self.descriptors)
    }
}

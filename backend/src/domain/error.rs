//! Domain-level error types.
//!
//! These errors are transport agnostic. The HTTP adapter maps them to status
//! codes and renders them inside the response envelope.

use std::fmt;

use quizdesk_model::ResourceNames;

use super::TraceId;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// The payload is missing fields, mistyped, or outside an enumeration.
    ValidationFailed,
    /// The identifier does not match the store's identifier format.
    MalformedIdentifier,
    /// No document matches the identifier.
    NotFound,
    /// The document store is unreachable or failed.
    StoreFault,
}

impl ErrorCode {
    /// Whether the failure is attributable to the caller.
    ///
    /// Client faults are logged at `debug`; the rest at `error`.
    pub fn is_client_fault(self) -> bool {
        !matches!(self, Self::StoreFault)
    }
}

/// Domain error payload.
///
/// ## Invariants
/// - `message` and `detail` are non-empty once trimmed of whitespace.
///
/// # Examples
/// ```
/// use quizdesk_backend::domain::{Error, ErrorCode};
/// use quizdesk_model::{Quiz, Resource};
///
/// let err = Error::not_found(&Quiz::NAMES);
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert_eq!(err.message(), "Quiz not found");
/// assert_eq!(err.detail(), "No quiz exists with the provided ID");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    message: String,
    detail: String,
    trace_id: Option<String>,
}

impl Error {
    fn from_parts(code: ErrorCode, message: String, detail: String) -> Self {
        Self {
            code,
            message,
            detail,
            trace_id: TraceId::current().map(|id| id.to_string()),
        }
    }

    /// Convenience constructor for [`ErrorCode::ValidationFailed`].
    pub fn validation_failed(detail: impl Into<String>) -> Self {
        Self::from_parts(
            ErrorCode::ValidationFailed,
            "Validation failed".to_owned(),
            non_blank(detail.into(), "payload failed validation"),
        )
    }

    /// Convenience constructor for [`ErrorCode::MalformedIdentifier`].
    pub fn malformed_identifier(names: &ResourceNames, raw: &str) -> Self {
        Self::from_parts(
            ErrorCode::MalformedIdentifier,
            format!("Invalid {} ID format", names.singular),
            format!("'{raw}' is not a valid {} ID", names.singular),
        )
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(names: &ResourceNames) -> Self {
        Self::from_parts(
            ErrorCode::NotFound,
            format!("{} not found", names.singular_title),
            format!("No {} exists with the provided ID", names.singular),
        )
    }

    /// Convenience constructor for [`ErrorCode::StoreFault`].
    ///
    /// `action` completes the summary, e.g. `retrieve quizzes` becomes
    /// `Failed to retrieve quizzes`.
    pub fn store_fault(action: &str, detail: impl Into<String>) -> Self {
        Self::from_parts(
            ErrorCode::StoreFault,
            format!("Failed to {action}"),
            non_blank(detail.into(), "document store failure"),
        )
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Short summary returned as the envelope `message`.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Detail returned as the envelope `error`.
    pub fn detail(&self) -> &str {
        self.detail.as_str()
    }

    /// Correlation identifier captured when the error was raised.
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Attach a trace identifier to the error.
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }
}

fn non_blank(value: String, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_owned()
    } else {
        value
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.message, self.detail)
    }
}

impl std::error::Error for Error {}

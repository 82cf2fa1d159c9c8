//! Store-assigned document identifiers.
//!
//! The document store hands out UUIDs. Anything arriving over the wire is
//! parsed before it can address a document, so a malformed identifier is
//! rejected without touching the store.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Errors returned when parsing a [`DocumentId`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentIdError {
    /// The identifier was empty.
    #[error("document id must not be empty")]
    Empty,
    /// The identifier is not in the store's UUID format.
    #[error("'{value}' is not a valid document id")]
    Malformed {
        /// The rejected raw identifier.
        value: String,
    },
}

/// Identifier of a stored quiz or announcement.
///
/// # Examples
/// ```
/// use quizdesk_model::DocumentId;
///
/// let id = DocumentId::parse("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("valid id");
/// assert_eq!(id.to_string(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
/// assert!(DocumentId::parse("not-an-id").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DocumentId(Uuid);

impl DocumentId {
    /// Parse an identifier received from a client or a path segment.
    ///
    /// Only the lower-case hyphenated form the store emits is accepted. The
    /// simple, braced, `urn:uuid:` and upper-case spellings are malformed, as
    /// is surrounding whitespace.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, DocumentIdError> {
        let raw = raw.as_ref();
        if raw.is_empty() {
            return Err(DocumentIdError::Empty);
        }
        let mut canonical = Uuid::encode_buffer();
        match Uuid::parse_str(raw) {
            Ok(uuid) if uuid.hyphenated().encode_lower(&mut canonical) == raw => Ok(Self(uuid)),
            _ => Err(DocumentIdError::Malformed {
                value: raw.to_owned(),
            }),
        }
    }

    /// Generate a fresh identifier, as a store does on insert.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap a UUID read back from the store.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DocumentId {
    type Err = DocumentIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DocumentId {
    type Error = DocumentIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<DocumentId> for String {
    fn from(value: DocumentId) -> Self {
        value.to_string()
    }
}

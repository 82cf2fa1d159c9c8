//! Behaviour shared by every stored resource kind.

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{DocumentId, ValidationError};

/// Names used in routes, log fields, and envelope messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceNames {
    /// Lower-case singular, e.g. `quiz`.
    pub singular: &'static str,
    /// Lower-case plural, e.g. `quizzes`.
    pub plural: &'static str,
    /// Capitalised singular, e.g. `Quiz`.
    pub singular_title: &'static str,
    /// Capitalised plural, e.g. `Quizzes`.
    pub plural_title: &'static str,
    /// Collection path, e.g. `/quizzes`.
    pub path: &'static str,
}

/// A document kind with a server-assigned identifier and a validated draft.
///
/// # Examples
/// ```
/// use quizdesk_model::{Quiz, Resource};
/// use serde_json::json;
///
/// let draft = Quiz::validate(&json!({
///     "title": "T",
///     "description": "D",
///     "questionCount": 5,
///     "duration": 10,
///     "difficulty": "easy",
///     "category": "C",
/// }))
/// .expect("valid payload");
/// assert_eq!(draft.title, "T");
/// assert_eq!(Quiz::NAMES.path, "/quizzes");
/// ```
pub trait Resource:
    Clone + fmt::Debug + PartialEq + Send + Sync + Serialize + DeserializeOwned + 'static
{
    /// Identifier-less fields submitted on create and update.
    type Draft: Clone + fmt::Debug + PartialEq + Send + Sync + Serialize + DeserializeOwned + 'static;

    /// Naming used by transports and messages.
    const NAMES: ResourceNames;

    /// Identifier assigned by the store.
    fn id(&self) -> DocumentId;

    /// Attach a store-assigned identifier to a draft.
    fn from_draft(id: DocumentId, draft: Self::Draft) -> Self;

    /// Copy the resource's fields without its identifier.
    fn to_draft(&self) -> Self::Draft;

    /// Validate a raw payload, returning the typed draft or the first
    /// violation.
    fn validate(payload: &Value) -> Result<Self::Draft, ValidationError>;
}

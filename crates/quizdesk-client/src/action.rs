//! Actions dispatched to the client state store.

use std::fmt;

use quizdesk_model::{Announcement, DocumentId, Quiz};

use crate::ListPayload;

/// Stage of one async action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lifecycle<T> {
    /// The request was issued and has not settled.
    Pending,
    /// The server confirmed the operation.
    Fulfilled(T),
    /// The request failed; carries a non-empty reason.
    Rejected(String),
}

impl<T> Lifecycle<T> {
    const fn stage(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Fulfilled(_) => "fulfilled",
            Self::Rejected(_) => "rejected",
        }
    }
}

/// Lifecycle event of one operation on a resource collection.
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceAction<D> {
    /// List every document.
    FetchAll(Lifecycle<ListPayload<D>>),
    /// Create a document.
    Add(Lifecycle<D>),
    /// Replace a document.
    Update(Lifecycle<D>),
    /// Remove a document; fulfilled with its identifier.
    Delete(Lifecycle<DocumentId>),
}

impl<D> ResourceAction<D> {
    const fn operation(&self) -> &'static str {
        match self {
            Self::FetchAll(_) => "fetchAll",
            Self::Add(_) => "add",
            Self::Update(_) => "update",
            Self::Delete(_) => "delete",
        }
    }

    const fn stage(&self) -> &'static str {
        match self {
            Self::FetchAll(lifecycle) => lifecycle.stage(),
            Self::Add(lifecycle) | Self::Update(lifecycle) => lifecycle.stage(),
            Self::Delete(lifecycle) => lifecycle.stage(),
        }
    }
}

/// Any action the store understands.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Quiz collection event.
    Quizzes(ResourceAction<Quiz>),
    /// Announcement collection event.
    Announcements(ResourceAction<Announcement>),
}

/// Renders the action type, e.g. `quizzes/fetchAll/pending`.
impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (slice, operation, stage) = match self {
            Self::Quizzes(action) => ("quizzes", action.operation(), action.stage()),
            Self::Announcements(action) => ("announcements", action.operation(), action.stage()),
        };
        write!(f, "{slice}/{operation}/{stage}")
    }
}

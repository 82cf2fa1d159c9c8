//! Shared data model for quizzes and announcements.
//!
//! Both the HTTP backend and the client library depend on this crate so the
//! wire contract lives in one place:
//!
//! - [`Quiz`] and [`Announcement`] documents with their drafts
//! - [`DocumentId`], the store's identifier format
//! - the validation rules applied before every create and update
//! - [`Envelope`], the uniform response wrapper
//!
//! # Example
//!
//! ```
//! use quizdesk_model::{Announcement, Resource};
//! use serde_json::json;
//!
//! let error = Announcement::validate(&json!({"title": "Hi"})).expect_err("incomplete");
//! assert_eq!(error.message(), "\"content\" is required");
//! ```

mod announcement;
mod envelope;
mod id;
mod quiz;
mod resource;
pub mod validation;

pub use announcement::{Announcement, AnnouncementDraft, Priority};
pub use envelope::Envelope;
pub use id::{DocumentId, DocumentIdError};
pub use quiz::{Difficulty, Quiz, QuizDraft};
pub use resource::{Resource, ResourceNames};
pub use validation::{ValidationError, WireEnum};

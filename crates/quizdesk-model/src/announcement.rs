//! Announcement documents.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::validation::{PayloadReader, ValidationError, WireEnum};
use crate::{DocumentId, Resource, ResourceNames};

/// Display priority of an announcement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Informational.
    Low,
    /// Worth noticing.
    Medium,
    /// Urgent.
    High,
}

impl WireEnum for Priority {
    const VARIANTS: &'static [Self] = &[Self::Low, Self::Medium, Self::High];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Announcement fields as submitted on create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnouncementDraft {
    /// Headline.
    pub title: String,
    /// Body text.
    pub content: String,
    /// Calendar date, expected as ISO-8601 (`2026-10-19`) but kept verbatim.
    pub date: String,
    /// Display priority.
    pub priority: Priority,
}

/// A stored announcement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    /// Store-assigned identifier.
    #[serde(rename = "_id")]
    pub id: DocumentId,
    /// Headline.
    pub title: String,
    /// Body text.
    pub content: String,
    /// Calendar date as submitted.
    pub date: String,
    /// Display priority.
    pub priority: Priority,
}

impl Resource for Announcement {
    type Draft = AnnouncementDraft;

    const NAMES: ResourceNames = ResourceNames {
        singular: "announcement",
        plural: "announcements",
        singular_title: "Announcement",
        plural_title: "Announcements",
        path: "/announcements",
    };

    fn id(&self) -> DocumentId {
        self.id
    }

    fn from_draft(id: DocumentId, draft: AnnouncementDraft) -> Self {
        let AnnouncementDraft {
            title,
            content,
            date,
            priority,
        } = draft;
        Self {
            id,
            title,
            content,
            date,
            priority,
        }
    }

    fn to_draft(&self) -> AnnouncementDraft {
        AnnouncementDraft {
            title: self.title.clone(),
            content: self.content.clone(),
            date: self.date.clone(),
            priority: self.priority,
        }
    }

    fn validate(payload: &Value) -> Result<AnnouncementDraft, ValidationError> {
        let mut reader = PayloadReader::new(payload)?;
        let draft = AnnouncementDraft {
            title: reader.string("title")?,
            content: reader.string("content")?,
            date: reader.string("date")?,
            priority: reader.one_of("priority")?,
        };
        reader.finish()?;
        Ok(draft)
    }
}

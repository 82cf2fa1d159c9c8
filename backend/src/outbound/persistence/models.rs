//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and never
//! reach the domain. Conversions check the narrowing between the model's
//! unsigned counts and the schema's `INTEGER` columns.

use diesel::prelude::*;
use quizdesk_model::{
    Announcement, AnnouncementDraft, Difficulty, DocumentId, Priority, Quiz, QuizDraft, WireEnum,
};
use uuid::Uuid;

use super::schema::{announcements, quizzes};
use crate::domain::ports::DocumentStoreError;

fn to_column(field: &str, value: u32) -> Result<i32, DocumentStoreError> {
    i32::try_from(value)
        .map_err(|_| DocumentStoreError::query(format!("{field} {value} exceeds INTEGER range")))
}

fn from_column(field: &str, value: i32) -> Result<u32, DocumentStoreError> {
    u32::try_from(value)
        .map_err(|_| DocumentStoreError::query(format!("stored {field} {value} is negative")))
}

fn decode_enum<E: WireEnum>(field: &str, raw: &str) -> Result<E, DocumentStoreError> {
    E::from_wire(raw)
        .ok_or_else(|| DocumentStoreError::query(format!("stored {field} '{raw}' is not recognised")))
}

/// Row struct for reading from the quizzes table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = quizzes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct QuizRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub question_count: i32,
    pub duration: i32,
    pub difficulty: String,
    pub category: String,
}

impl QuizRow {
    pub(crate) fn into_document(self) -> Result<Quiz, DocumentStoreError> {
        Ok(Quiz {
            id: DocumentId::from_uuid(self.id),
            question_count: from_column("question_count", self.question_count)?,
            duration: from_column("duration", self.duration)?,
            difficulty: decode_enum::<Difficulty>("difficulty", &self.difficulty)?,
            title: self.title,
            description: self.description,
            category: self.category,
        })
    }
}

/// Column values written on insert and full replace.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = quizzes)]
pub(crate) struct QuizFields<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub question_count: i32,
    pub duration: i32,
    pub difficulty: &'static str,
    pub category: &'a str,
}

impl<'a> QuizFields<'a> {
    pub(crate) fn from_draft(draft: &'a QuizDraft) -> Result<Self, DocumentStoreError> {
        Ok(Self {
            title: &draft.title,
            description: &draft.description,
            question_count: to_column("question_count", draft.question_count)?,
            duration: to_column("duration", draft.duration)?,
            difficulty: draft.difficulty.as_str(),
            category: &draft.category,
        })
    }
}

/// Row struct for reading from the announcements table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = announcements)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct AnnouncementRow {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub date: String,
    pub priority: String,
}

impl AnnouncementRow {
    pub(crate) fn into_document(self) -> Result<Announcement, DocumentStoreError> {
        Ok(Announcement {
            id: DocumentId::from_uuid(self.id),
            priority: decode_enum::<Priority>("priority", &self.priority)?,
            title: self.title,
            content: self.content,
            date: self.date,
        })
    }
}

/// Column values written on insert and full replace.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = announcements)]
pub(crate) struct AnnouncementFields<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub date: &'a str,
    pub priority: &'static str,
}

impl<'a> From<&'a AnnouncementDraft> for AnnouncementFields<'a> {
    fn from(draft: &'a AnnouncementDraft) -> Self {
        Self {
            title: &draft.title,
            content: &draft.content,
            date: &draft.date,
            priority: draft.priority.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn quiz_row() -> QuizRow {
        QuizRow {
            id: Uuid::nil(),
            title: "T".to_owned(),
            description: "D".to_owned(),
            question_count: 5,
            duration: 10,
            difficulty: "medium".to_owned(),
            category: "C".to_owned(),
        }
    }

    #[rstest]
    fn quiz_row_converts_to_document() {
        let quiz = quiz_row().into_document().expect("valid row");
        assert_eq!(quiz.difficulty, Difficulty::Medium);
        assert_eq!(quiz.question_count, 5);
        assert_eq!(quiz.id, DocumentId::from_uuid(Uuid::nil()));
    }

    #[rstest]
    #[case(QuizRow { difficulty: "extreme".to_owned(), ..quiz_row() }, "extreme")]
    #[case(QuizRow { duration: -1, ..quiz_row() }, "negative")]
    fn corrupt_quiz_rows_are_query_errors(#[case] row: QuizRow, #[case] fragment: &str) {
        let error = row.into_document().expect_err("corrupt row");
        assert!(matches!(error, DocumentStoreError::Query { .. }));
        assert!(error.to_string().contains(fragment));
    }

    #[rstest]
    fn oversized_counts_do_not_narrow_silently() {
        let draft = QuizDraft {
            title: "T".to_owned(),
            description: "D".to_owned(),
            question_count: u32::MAX,
            duration: 1,
            difficulty: Difficulty::Easy,
            category: "C".to_owned(),
        };
        assert!(QuizFields::from_draft(&draft).is_err());
    }

    #[rstest]
    fn announcement_fields_use_wire_priority() {
        let draft = AnnouncementDraft {
            title: "Exam week".to_owned(),
            content: "Midterms start Monday.".to_owned(),
            date: "2026-10-19".to_owned(),
            priority: Priority::Low,
        };
        assert_eq!(AnnouncementFields::from(&draft).priority, "low");
    }
}

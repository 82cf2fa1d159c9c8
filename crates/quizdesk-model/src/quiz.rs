//! Quiz documents.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::validation::{PayloadReader, ValidationError, WireEnum};
use crate::{DocumentId, Resource, ResourceNames};

/// How hard a quiz is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Introductory level.
    Easy,
    /// Intermediate level.
    Medium,
    /// Advanced level.
    Hard,
}

impl WireEnum for Difficulty {
    const VARIANTS: &'static [Self] = &[Self::Easy, Self::Medium, Self::Hard];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Quiz fields as submitted on create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizDraft {
    /// Quiz title.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Number of questions, at least one.
    pub question_count: u32,
    /// Time limit in minutes, at least one.
    pub duration: u32,
    /// Difficulty level.
    pub difficulty: Difficulty,
    /// Subject category.
    pub category: String,
}

/// A stored quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    /// Store-assigned identifier.
    #[serde(rename = "_id")]
    pub id: DocumentId,
    /// Quiz title.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Number of questions.
    pub question_count: u32,
    /// Time limit in minutes.
    pub duration: u32,
    /// Difficulty level.
    pub difficulty: Difficulty,
    /// Subject category.
    pub category: String,
}

impl Resource for Quiz {
    type Draft = QuizDraft;

    const NAMES: ResourceNames = ResourceNames {
        singular: "quiz",
        plural: "quizzes",
        singular_title: "Quiz",
        plural_title: "Quizzes",
        path: "/quizzes",
    };

    fn id(&self) -> DocumentId {
        self.id
    }

    fn from_draft(id: DocumentId, draft: QuizDraft) -> Self {
        let QuizDraft {
            title,
            description,
            question_count,
            duration,
            difficulty,
            category,
        } = draft;
        Self {
            id,
            title,
            description,
            question_count,
            duration,
            difficulty,
            category,
        }
    }

    fn to_draft(&self) -> QuizDraft {
        QuizDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            question_count: self.question_count,
            duration: self.duration,
            difficulty: self.difficulty,
            category: self.category.clone(),
        }
    }

    fn validate(payload: &Value) -> Result<QuizDraft, ValidationError> {
        let mut reader = PayloadReader::new(payload)?;
        let draft = QuizDraft {
            title: reader.string("title")?,
            description: reader.string("description")?,
            question_count: reader.integer("questionCount", 1)?,
            duration: reader.integer("duration", 1)?,
            difficulty: reader.one_of("difficulty")?,
            category: reader.string("category")?,
        };
        reader.finish()?;
        Ok(draft)
    }
}

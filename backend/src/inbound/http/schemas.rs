//! OpenAPI schema definitions for model types.
//!
//! The shared model crate stays framework-agnostic by not deriving
//! `ToSchema`. These wrappers mirror the wire shape of each type so the
//! adapter layer can document it with utoipa.

#![expect(
    dead_code,
    reason = "Schema wrappers are only read by utoipa's derive output"
)]

use utoipa::ToSchema;

/// OpenAPI schema for [`quizdesk_model::Difficulty`].
#[derive(ToSchema)]
#[schema(as = quizdesk_model::Difficulty)]
pub enum DifficultySchema {
    #[schema(rename = "easy")]
    Easy,
    #[schema(rename = "medium")]
    Medium,
    #[schema(rename = "hard")]
    Hard,
}

/// OpenAPI schema for [`quizdesk_model::Priority`].
#[derive(ToSchema)]
#[schema(as = quizdesk_model::Priority)]
pub enum PrioritySchema {
    #[schema(rename = "low")]
    Low,
    #[schema(rename = "medium")]
    Medium,
    #[schema(rename = "high")]
    High,
}

/// OpenAPI schema for [`quizdesk_model::QuizDraft`], the create and update
/// body.
#[derive(ToSchema)]
#[schema(as = quizdesk_model::QuizDraft, rename_all = "camelCase")]
pub struct QuizDraftSchema {
    #[schema(example = "Fractions")]
    title: String,
    #[schema(example = "Adding and simplifying fractions")]
    description: String,
    #[schema(minimum = 1, maximum = 2_147_483_647, example = 10)]
    question_count: u32,
    /// Time limit in minutes.
    #[schema(minimum = 1, maximum = 2_147_483_647, example = 15)]
    duration: u32,
    difficulty: DifficultySchema,
    #[schema(example = "Maths")]
    category: String,
}

/// OpenAPI schema for [`quizdesk_model::Quiz`].
#[derive(ToSchema)]
#[schema(as = quizdesk_model::Quiz, rename_all = "camelCase")]
pub struct QuizSchema {
    #[schema(rename = "_id", format = "uuid")]
    id: String,
    title: String,
    description: String,
    question_count: u32,
    duration: u32,
    difficulty: DifficultySchema,
    category: String,
}

/// OpenAPI schema for [`quizdesk_model::AnnouncementDraft`].
#[derive(ToSchema)]
#[schema(as = quizdesk_model::AnnouncementDraft)]
pub struct AnnouncementDraftSchema {
    #[schema(example = "Exam week")]
    title: String,
    #[schema(example = "Midterms start Monday.")]
    content: String,
    #[schema(example = "2026-10-19")]
    date: String,
    priority: PrioritySchema,
}

/// OpenAPI schema for [`quizdesk_model::Announcement`].
#[derive(ToSchema)]
#[schema(as = quizdesk_model::Announcement)]
pub struct AnnouncementSchema {
    #[schema(rename = "_id", format = "uuid")]
    id: String,
    title: String,
    content: String,
    date: String,
    priority: PrioritySchema,
}

/// Failure envelope returned with every 4xx and 5xx status.
#[derive(ToSchema)]
pub struct FailureEnvelopeSchema {
    #[schema(example = false)]
    success: bool,
    #[schema(example = "Validation failed")]
    message: String,
    #[schema(example = "\"title\" is required")]
    error: String,
}

/// Envelope carrying a single quiz.
#[derive(ToSchema)]
pub struct QuizEnvelopeSchema {
    success: bool,
    #[schema(example = "Quiz created successfully")]
    message: String,
    data: QuizSchema,
}

/// Envelope carrying every quiz.
#[derive(ToSchema)]
pub struct QuizListEnvelopeSchema {
    success: bool,
    #[schema(example = "Quizzes retrieved successfully")]
    message: String,
    data: Vec<QuizSchema>,
    count: usize,
}

/// Envelope carrying a single announcement.
#[derive(ToSchema)]
pub struct AnnouncementEnvelopeSchema {
    success: bool,
    #[schema(example = "Announcement created successfully")]
    message: String,
    data: AnnouncementSchema,
}

/// Envelope carrying every announcement.
#[derive(ToSchema)]
pub struct AnnouncementListEnvelopeSchema {
    success: bool,
    #[schema(example = "Announcements retrieved successfully")]
    message: String,
    data: Vec<AnnouncementSchema>,
    count: usize,
}

//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the resource and health endpoints plus the schema
//! wrappers from [`crate::inbound::http::schemas`]. Swagger UI serves it in
//! debug builds.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{
    AnnouncementDraftSchema, AnnouncementEnvelopeSchema, AnnouncementListEnvelopeSchema,
    AnnouncementSchema, DifficultySchema, FailureEnvelopeSchema, PrioritySchema, QuizDraftSchema,
    QuizEnvelopeSchema, QuizListEnvelopeSchema, QuizSchema,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Quizdesk API",
        description = "CRUD over quizzes and announcements with a uniform response envelope."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::quizzes::list_quizzes,
        crate::inbound::http::quizzes::create_quiz,
        crate::inbound::http::quizzes::update_quiz,
        crate::inbound::http::quizzes::delete_quiz,
        crate::inbound::http::announcements::list_announcements,
        crate::inbound::http::announcements::create_announcement,
        crate::inbound::http::announcements::update_announcement,
        crate::inbound::http::announcements::delete_announcement,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        QuizSchema,
        QuizDraftSchema,
        DifficultySchema,
        AnnouncementSchema,
        AnnouncementDraftSchema,
        PrioritySchema,
        QuizEnvelopeSchema,
        QuizListEnvelopeSchema,
        AnnouncementEnvelopeSchema,
        AnnouncementListEnvelopeSchema,
        FailureEnvelopeSchema,
    )),
    tags(
        (name = "quizzes", description = "Quiz CRUD"),
        (name = "announcements", description = "Announcement CRUD"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

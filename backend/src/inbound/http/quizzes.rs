//! Quiz HTTP handlers.
//!
//! ```text
//! GET    /quizzes
//! POST   /quizzes
//! PUT    /quizzes/{id}
//! DELETE /quizzes/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde_json::Value;

use crate::domain::ApiResult;
use crate::inbound::http::resources;
use crate::inbound::http::schemas::{
    FailureEnvelopeSchema, QuizDraftSchema, QuizEnvelopeSchema, QuizListEnvelopeSchema,
};
use crate::inbound::http::state::HttpState;

/// List every quiz.
#[utoipa::path(
    get,
    path = "/quizzes",
    tags = ["quizzes"],
    responses(
        (status = 200, description = "All quizzes", body = QuizListEnvelopeSchema),
        (status = 500, description = "Store failure", body = FailureEnvelopeSchema)
    )
)]
#[get("/quizzes")]
pub async fn list_quizzes(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    resources::list(state.quizzes.as_ref()).await
}

/// Create a quiz.
#[utoipa::path(
    post,
    path = "/quizzes",
    tags = ["quizzes"],
    request_body = QuizDraftSchema,
    responses(
        (status = 201, description = "Created quiz", body = QuizEnvelopeSchema),
        (status = 400, description = "Validation failed", body = FailureEnvelopeSchema),
        (status = 500, description = "Store failure", body = FailureEnvelopeSchema)
    )
)]
#[post("/quizzes")]
pub async fn create_quiz(
    state: web::Data<HttpState>,
    payload: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    resources::create(state.quizzes.as_ref(), payload.into_inner()).await
}

/// Replace every field of a quiz.
#[utoipa::path(
    put,
    path = "/quizzes/{id}",
    tags = ["quizzes"],
    params(("id" = String, Path, description = "Quiz identifier")),
    request_body = QuizDraftSchema,
    responses(
        (status = 200, description = "Updated quiz", body = QuizEnvelopeSchema),
        (status = 400, description = "Malformed identifier or invalid payload", body = FailureEnvelopeSchema),
        (status = 404, description = "No such quiz", body = FailureEnvelopeSchema),
        (status = 500, description = "Store failure", body = FailureEnvelopeSchema)
    )
)]
#[put("/quizzes/{id}")]
pub async fn update_quiz(
    state: web::Data<HttpState>,
    id: web::Path<String>,
    payload: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    resources::update(state.quizzes.as_ref(), &id, payload.into_inner()).await
}

/// Delete a quiz, returning its last-known contents.
#[utoipa::path(
    delete,
    path = "/quizzes/{id}",
    tags = ["quizzes"],
    params(("id" = String, Path, description = "Quiz identifier")),
    responses(
        (status = 200, description = "Deleted quiz", body = QuizEnvelopeSchema),
        (status = 400, description = "Malformed identifier", body = FailureEnvelopeSchema),
        (status = 404, description = "No such quiz", body = FailureEnvelopeSchema),
        (status = 500, description = "Store failure", body = FailureEnvelopeSchema)
    )
)]
#[delete("/quizzes/{id}")]
pub async fn delete_quiz(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<HttpResponse> {
    resources::delete(state.quizzes.as_ref(), &id).await
}

#[cfg(test)]
#[path = "quizzes_tests.rs"]
mod tests;

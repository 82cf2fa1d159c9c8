//! Announcement HTTP handlers.
//!
//! ```text
//! GET    /announcements
//! POST   /announcements
//! PUT    /announcements/{id}
//! DELETE /announcements/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde_json::Value;

use crate::domain::ApiResult;
use crate::inbound::http::resources;
use crate::inbound::http::schemas::{
    AnnouncementDraftSchema, AnnouncementEnvelopeSchema, AnnouncementListEnvelopeSchema,
    FailureEnvelopeSchema,
};
use crate::inbound::http::state::HttpState;

/// List every announcement.
#[utoipa::path(
    get,
    path = "/announcements",
    tags = ["announcements"],
    responses(
        (status = 200, description = "All announcements", body = AnnouncementListEnvelopeSchema),
        (status = 500, description = "Store failure", body = FailureEnvelopeSchema)
    )
)]
#[get("/announcements")]
pub async fn list_announcements(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    resources::list(state.announcements.as_ref()).await
}

/// Create an announcement.
#[utoipa::path(
    post,
    path = "/announcements",
    tags = ["announcements"],
    request_body = AnnouncementDraftSchema,
    responses(
        (status = 201, description = "Created announcement", body = AnnouncementEnvelopeSchema),
        (status = 400, description = "Validation failed", body = FailureEnvelopeSchema),
        (status = 500, description = "Store failure", body = FailureEnvelopeSchema)
    )
)]
#[post("/announcements")]
pub async fn create_announcement(
    state: web::Data<HttpState>,
    payload: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    resources::create(state.announcements.as_ref(), payload.into_inner()).await
}

/// Replace every field of an announcement.
#[utoipa::path(
    put,
    path = "/announcements/{id}",
    tags = ["announcements"],
    params(("id" = String, Path, description = "Announcement identifier")),
    request_body = AnnouncementDraftSchema,
    responses(
        (status = 200, description = "Updated announcement", body = AnnouncementEnvelopeSchema),
        (status = 400, description = "Malformed identifier or invalid payload", body = FailureEnvelopeSchema),
        (status = 404, description = "No such announcement", body = FailureEnvelopeSchema),
        (status = 500, description = "Store failure", body = FailureEnvelopeSchema)
    )
)]
#[put("/announcements/{id}")]
pub async fn update_announcement(
    state: web::Data<HttpState>,
    id: web::Path<String>,
    payload: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    resources::update(state.announcements.as_ref(), &id, payload.into_inner()).await
}

/// Delete an announcement, returning its last-known contents.
#[utoipa::path(
    delete,
    path = "/announcements/{id}",
    tags = ["announcements"],
    params(("id" = String, Path, description = "Announcement identifier")),
    responses(
        (status = 200, description = "Deleted announcement", body = AnnouncementEnvelopeSchema),
        (status = 400, description = "Malformed identifier", body = FailureEnvelopeSchema),
        (status = 404, description = "No such announcement", body = FailureEnvelopeSchema),
        (status = 500, description = "Store failure", body = FailureEnvelopeSchema)
    )
)]
#[delete("/announcements/{id}")]
pub async fn delete_announcement(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<HttpResponse> {
    resources::delete(state.announcements.as_ref(), &id).await
}

#[cfg(test)]
#[path = "announcements_tests.rs"]
mod tests;

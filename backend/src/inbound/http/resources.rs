//! Envelope construction shared by the resource handlers.
//!
//! Each handler module picks its service from [`super::state::HttpState`] and
//! delegates here, so both resources answer with identical shapes.

use actix_web::HttpResponse;
use quizdesk_model::{Envelope, Resource};
use serde_json::Value;
use tracing::info;

use crate::domain::ApiResult;
use crate::domain::ports::ResourceService;

pub(crate) async fn list<D: Resource>(service: &dyn ResourceService<D>) -> ApiResult<HttpResponse> {
    let items = service.list().await?;
    Ok(HttpResponse::Ok().json(Envelope::listed(
        format!("{} retrieved successfully", D::NAMES.plural_title),
        items,
    )))
}

pub(crate) async fn create<D: Resource>(
    service: &dyn ResourceService<D>,
    payload: Value,
) -> ApiResult<HttpResponse> {
    let created = service.create(payload).await?;
    info!(resource = D::NAMES.singular, id = %created.id(), "document created");
    Ok(HttpResponse::Created().json(Envelope::success(
        format!("{} created successfully", D::NAMES.singular_title),
        created,
    )))
}

pub(crate) async fn update<D: Resource>(
    service: &dyn ResourceService<D>,
    id: &str,
    payload: Value,
) -> ApiResult<HttpResponse> {
    let updated = service.update(id, payload).await?;
    info!(resource = D::NAMES.singular, id = %updated.id(), "document replaced");
    Ok(HttpResponse::Ok().json(Envelope::success(
        format!("{} updated successfully", D::NAMES.singular_title),
        updated,
    )))
}

pub(crate) async fn delete<D: Resource>(
    service: &dyn ResourceService<D>,
    id: &str,
) -> ApiResult<HttpResponse> {
    let removed = service.delete(id).await?;
    info!(resource = D::NAMES.singular, id = %removed.id(), "document removed");
    Ok(HttpResponse::Ok().json(Envelope::success(
        format!("{} deleted successfully", D::NAMES.singular_title),
        removed,
    )))
}

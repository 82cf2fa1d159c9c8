//! Domain types, ports and services.
//!
//! Purpose: keep resource semantics independent of HTTP and persistence.
//! Inbound adapters call the [`ports::ResourceService`] driving port; outbound
//! adapters implement [`ports::DocumentStore`].
//!
//! Public surface:
//! - Error / ErrorCode: transport agnostic failure payload.
//! - TraceId: request-scoped correlation identifier.
//! - ResourceServiceImpl: CRUD service over any document store.

pub mod error;
pub mod ports;
mod resource_service;
pub mod trace_id;

pub use self::error::{Error, ErrorCode};
pub use self::resource_service::ResourceServiceImpl;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use quizdesk_backend::domain::{ApiResult, Error};
/// use quizdesk_model::{Quiz, Resource};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found(&Quiz::NAMES))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;

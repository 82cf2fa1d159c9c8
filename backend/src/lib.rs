//! Quizdesk HTTP backend.
//!
//! Hexagonal layout: [`domain`] holds errors, ports and the resource service;
//! [`inbound::http`] exposes the REST surface; [`outbound`] provides the
//! PostgreSQL and in-memory document stores.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
#[cfg(feature = "test-support")]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;

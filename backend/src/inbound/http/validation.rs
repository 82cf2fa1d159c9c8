//! Request body extraction settings for inbound HTTP adapters.
//!
//! Bodies are extracted as raw JSON and validated by the domain, so the only
//! failures left here are unreadable bodies. Those still answer with a
//! failure envelope rather than actix's plain-text default.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, web};
use tracing::debug;

use crate::domain::Error;

/// Largest accepted request body in bytes.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

fn describe(err: &JsonPayloadError) -> String {
    match err {
        JsonPayloadError::ContentType => "request body must be sent as application/json".to_owned(),
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            format!("request body exceeds {MAX_BODY_BYTES} bytes")
        }
        JsonPayloadError::Deserialize(source) => format!("request body is not valid JSON: {source}"),
        other => other.to_string(),
    }
}

fn reject_payload(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let detail = describe(&err);
    debug!(path = %req.path(), error = %err, "rejected unreadable request body");
    Error::validation_failed(detail).into()
}

/// JSON extractor configuration applied to every resource route.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(MAX_BODY_BYTES)
        .error_handler(reject_payload)
}

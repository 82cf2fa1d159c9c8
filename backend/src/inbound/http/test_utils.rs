//! Test helpers for inbound HTTP components.

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use serde_json::{Value, json};

use super::state::HttpState;
use crate::middleware::Trace;

/// Build an app serving the resource routes over `state`.
pub(crate) fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .configure(super::configure)
}

/// A quiz body that passes validation.
pub(crate) fn quiz_payload() -> Value {
    json!({
        "title": "T",
        "description": "D",
        "questionCount": 5,
        "duration": 10,
        "difficulty": "easy",
        "category": "C",
    })
}

/// An announcement body that passes validation.
pub(crate) fn announcement_payload() -> Value {
    json!({
        "title": "Exam week",
        "content": "Midterms start Monday.",
        "date": "2026-10-19",
        "priority": "high",
    })
}

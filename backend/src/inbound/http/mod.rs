//! HTTP inbound adapter exposing REST endpoints.

pub mod announcements;
pub mod error;
pub mod health;
pub mod quizzes;
mod resources;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub(crate) mod test_utils;
pub mod validation;

use actix_web::web;


/// Register the resource routes and their JSON body settings.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use quizdesk_backend::inbound::http::{configure, state::HttpState};
///
/// let _app = App::new()
///     .app_data(web::Data::new(HttpState::in_memory()))
///     .configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(validation::json_config())
        .service(quizzes::list_quizzes)
        .service(quizzes::create_quiz)
        .service(quizzes::update_quiz)
        .service(quizzes::delete_quiz)
        .service(announcements::list_announcements)
        .service(announcements::create_announcement)
        .service(announcements::update_announcement)
        .service(announcements::delete_announcement);
}

//! Builders wiring document stores into HTTP state.

use std::sync::Arc;

use quizdesk_backend::domain::ResourceServiceImpl;
use quizdesk_backend::domain::ports::ResourceService;
use quizdesk_backend::inbound::http::state::HttpState;
use quizdesk_backend::outbound::persistence::{DbPool, DieselAnnouncementStore, DieselQuizStore};
use quizdesk_model::{Announcement, Quiz};
use tracing::info;

use super::ServerConfig;

fn diesel_state(pool: &DbPool) -> HttpState {
    let quizzes: Arc<dyn ResourceService<Quiz>> = Arc::new(ResourceServiceImpl::<Quiz, _>::new(
        Arc::new(DieselQuizStore::new(pool.clone())),
    ));
    let announcements: Arc<dyn ResourceService<Announcement>> =
        Arc::new(ResourceServiceImpl::<Announcement, _>::new(Arc::new(
            DieselAnnouncementStore::new(pool.clone()),
        )));
    HttpState::new(quizzes, announcements)
}

/// Use PostgreSQL stores when a pool is configured, otherwise in-memory ones.
pub(super) fn build_http_state(config: &ServerConfig) -> HttpState {
    match &config.db_pool {
        Some(pool) => {
            info!("serving documents from PostgreSQL");
            diesel_state(pool)
        }
        None => {
            info!("no database configured; serving documents from memory");
            HttpState::in_memory()
        }
    }
}

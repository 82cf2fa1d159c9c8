//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on the resource driving ports and remain testable without I/O.

use std::sync::Arc;

use quizdesk_model::{Announcement, Quiz};

use crate::domain::ResourceServiceImpl;
use crate::domain::ports::ResourceService;
use crate::outbound::memory::InMemoryDocumentStore;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Quiz CRUD service.
    pub quizzes: Arc<dyn ResourceService<Quiz>>,
    /// Announcement CRUD service.
    pub announcements: Arc<dyn ResourceService<Announcement>>,
}

impl HttpState {
    /// Construct state from the two resource services.
    pub fn new(
        quizzes: Arc<dyn ResourceService<Quiz>>,
        announcements: Arc<dyn ResourceService<Announcement>>,
    ) -> Self {
        Self {
            quizzes,
            announcements,
        }
    }

    /// State backed by empty in-memory collections.
    ///
    /// # Examples
    /// ```
    /// use quizdesk_backend::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::in_memory();
    /// let _quizzes = state.quizzes.clone();
    /// ```
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(ResourceServiceImpl::<Quiz, _>::new(Arc::new(
                InMemoryDocumentStore::<Quiz>::new(),
            ))),
            Arc::new(ResourceServiceImpl::<Announcement, _>::new(Arc::new(
                InMemoryDocumentStore::<Announcement>::new(),
            ))),
        )
    }
}

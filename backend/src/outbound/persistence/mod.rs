//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete [`DocumentStore`](crate::domain::ports::DocumentStore)
//! implementations backed by PostgreSQL via `diesel-async` and `bb8` pooling.
//!
//! - **Thin adapters**: stores only translate between Diesel rows and model
//!   documents.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) never leave this module.
//! - **Typed errors**: pool and Diesel failures become
//!   [`DocumentStoreError`](crate::domain::ports::DocumentStoreError)s.
//!
//! # Example
//!
//! ```no_run
//! use quizdesk_backend::outbound::persistence::{DbPool, DieselQuizStore, PoolConfig};
//!
//! # async fn wire() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/quizdesk")).await?;
//! let _quizzes = DieselQuizStore::new(pool);
//! # Ok(())
//! # }
//! ```

mod diesel_announcement_store;
mod diesel_quiz_store;
mod error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_announcement_store::DieselAnnouncementStore;
pub use diesel_quiz_store::DieselQuizStore;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};

//! Driving port for resource CRUD.
//!
//! Inbound adapters hand raw JSON payloads and raw identifier strings to this
//! port; validation and identifier parsing belong to the domain.

use async_trait::async_trait;
use quizdesk_model::Resource;
use serde_json::Value;

use crate::domain::Error;

/// List, create, update and delete `D` documents.
#[async_trait]
pub trait ResourceService<D: Resource>: Send + Sync {
    /// Every stored document.
    async fn list(&self) -> Result<Vec<D>, Error>;

    /// Validate `payload` and insert it.
    async fn create(&self, payload: Value) -> Result<D, Error>;

    /// Check `id`, validate `payload`, then replace the addressed document.
    async fn update(&self, id: &str, payload: Value) -> Result<D, Error>;

    /// Check `id`, then remove the addressed document.
    async fn delete(&self, id: &str) -> Result<D, Error>;
}

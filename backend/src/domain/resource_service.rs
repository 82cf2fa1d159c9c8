//! Resource CRUD service.
//!
//! Implements the [`ResourceService`] driving port over any
//! [`DocumentStore`]. Identifier checks run before validation, and both run
//! before the store is touched.

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use quizdesk_model::{DocumentId, Resource};
use serde_json::Value;
use tracing::debug;

use crate::domain::Error;
use crate::domain::ports::{DocumentStore, DocumentStoreError, ResourceService};

fn map_store_error(action: &str, err: &DocumentStoreError) -> Error {
    debug!(error = %err, action, "document store operation failed");
    Error::store_fault(action, err.to_string())
}

fn parse_id<D: Resource>(raw: &str) -> Result<DocumentId, Error> {
    DocumentId::parse(raw).map_err(|err| {
        debug!(error = %err, resource = D::NAMES.singular, "rejected malformed identifier");
        Error::malformed_identifier(&D::NAMES, raw)
    })
}

fn validate<D: Resource>(payload: &Value) -> Result<D::Draft, Error> {
    D::validate(payload).map_err(|err| {
        debug!(field = err.field(), resource = D::NAMES.singular, "payload failed validation");
        Error::validation_failed(err.message())
    })
}

/// Resource service over a document store.
pub struct ResourceServiceImpl<D, S: ?Sized> {
    store: Arc<S>,
    resource: PhantomData<fn() -> D>,
}

impl<D, S: ?Sized> ResourceServiceImpl<D, S> {
    /// Create a service backed by `store`.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            resource: PhantomData,
        }
    }
}

impl<D, S: ?Sized> Clone for ResourceServiceImpl<D, S> {
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.store))
    }
}

#[async_trait]
impl<D, S> ResourceService<D> for ResourceServiceImpl<D, S>
where
    D: Resource,
    S: DocumentStore<D> + ?Sized,
{
    async fn list(&self) -> Result<Vec<D>, Error> {
        self.store
            .find_all()
            .await
            .map_err(|err| map_store_error(&format!("retrieve {}", D::NAMES.plural), &err))
    }

    async fn create(&self, payload: Value) -> Result<D, Error> {
        let draft = validate::<D>(&payload)?;
        self.store
            .insert(draft)
            .await
            .map_err(|err| map_store_error(&format!("create {}", D::NAMES.singular), &err))
    }

    async fn update(&self, id: &str, payload: Value) -> Result<D, Error> {
        let id = parse_id::<D>(id)?;
        let draft = validate::<D>(&payload)?;
        self.store
            .replace(&id, draft)
            .await
            .map_err(|err| map_store_error(&format!("update {}", D::NAMES.singular), &err))?
            .ok_or_else(|| Error::not_found(&D::NAMES))
    }

    async fn delete(&self, id: &str) -> Result<D, Error> {
        let id = parse_id::<D>(id)?;
        self.store
            .remove(&id)
            .await
            .map_err(|err| map_store_error(&format!("delete {}", D::NAMES.singular), &err))?
            .ok_or_else(|| Error::not_found(&D::NAMES))
    }
}

#[cfg(test)]
#[path = "resource_service_tests.rs"]
mod tests;

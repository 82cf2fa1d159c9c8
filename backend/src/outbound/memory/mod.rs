//! In-memory document store.
//!
//! Used when no database URL is configured and as the store behind handler
//! tests. Documents keep insertion order, which is this store's native order.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use quizdesk_model::{DocumentId, Resource};

use crate::domain::ports::{DocumentStore, DocumentStoreError};

/// Process-local collection of `D` documents.
#[derive(Debug)]
pub struct InMemoryDocumentStore<D> {
    documents: Mutex<Vec<D>>,
}

impl<D> Default for InMemoryDocumentStore<D> {
    fn default() -> Self {
        Self {
            documents: Mutex::new(Vec::new()),
        }
    }
}

impl<D: Resource> InMemoryDocumentStore<D> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<D>>, DocumentStoreError> {
        self.documents.lock().map_err(|_| {
            DocumentStoreError::connection(format!(
                "{} collection lock poisoned",
                D::NAMES.plural
            ))
        })
    }
}

#[async_trait]
impl<D: Resource> DocumentStore<D> for InMemoryDocumentStore<D> {
    async fn find_all(&self) -> Result<Vec<D>, DocumentStoreError> {
        Ok(self.lock()?.clone())
    }

    async fn insert(&self, draft: D::Draft) -> Result<D, DocumentStoreError> {
        let document = D::from_draft(DocumentId::generate(), draft);
        self.lock()?.push(document.clone());
        Ok(document)
    }

    async fn replace(
        &self,
        id: &DocumentId,
        draft: D::Draft,
    ) -> Result<Option<D>, DocumentStoreError> {
        let mut documents = self.lock()?;
        let Some(slot) = documents.iter_mut().find(|doc| doc.id() == *id) else {
            return Ok(None);
        };
        *slot = D::from_draft(*id, draft);
        Ok(Some(slot.clone()))
    }

    async fn remove(&self, id: &DocumentId) -> Result<Option<D>, DocumentStoreError> {
        let mut documents = self.lock()?;
        let position = documents.iter().position(|doc| doc.id() == *id);
        Ok(position.map(|index| documents.remove(index)))
    }
}

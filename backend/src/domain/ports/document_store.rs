//! Driven port over the document store holding one resource collection.

use async_trait::async_trait;
use quizdesk_model::{DocumentId, Resource};

use super::define_port_error;

define_port_error! {
    /// Errors raised by document store adapters.
    pub enum DocumentStoreError {
        /// Store connection could not be established.
        Connection { message: String } =>
            "document store connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "document store query failed: {message}",
    }
}

/// Port for reading and writing one collection of `D` documents.
///
/// Writes are single-document atomic. `replace` and `remove` report a missing
/// document as `Ok(None)` rather than an error.
#[async_trait]
pub trait DocumentStore<D: Resource>: Send + Sync {
    /// Every document, in store-native order.
    async fn find_all(&self) -> Result<Vec<D>, DocumentStoreError>;

    /// Insert a draft; the store assigns the identifier.
    async fn insert(&self, draft: D::Draft) -> Result<D, DocumentStoreError>;

    /// Replace every field of the document with `id`.
    async fn replace(
        &self,
        id: &DocumentId,
        draft: D::Draft,
    ) -> Result<Option<D>, DocumentStoreError>;

    /// Remove the document with `id`, returning its last-known contents.
    async fn remove(&self, id: &DocumentId) -> Result<Option<D>, DocumentStoreError>;
}

#[cfg(test)]
mockall::mock! {
    /// Mock quiz store used by service tests.
    pub QuizStore {}

    #[async_trait]
    impl DocumentStore<quizdesk_model::Quiz> for QuizStore {
        async fn find_all(&self) -> Result<Vec<quizdesk_model::Quiz>, DocumentStoreError>;
        async fn insert(
            &self,
            draft: quizdesk_model::QuizDraft,
        ) -> Result<quizdesk_model::Quiz, DocumentStoreError>;
        async fn replace(
            &self,
            id: &DocumentId,
            draft: quizdesk_model::QuizDraft,
        ) -> Result<Option<quizdesk_model::Quiz>, DocumentStoreError>;
        async fn remove(
            &self,
            id: &DocumentId,
        ) -> Result<Option<quizdesk_model::Quiz>, DocumentStoreError>;
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(DocumentStoreError::connection("pool timed out"), "connection failed: pool timed out")]
    #[case(DocumentStoreError::query("relation missing"), "query failed: relation missing")]
    fn errors_carry_adapter_message(#[case] error: DocumentStoreError, #[case] fragment: &str) {
        assert!(error.to_string().contains(fragment));
    }
}

//! PostgreSQL-backed quiz collection.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use quizdesk_model::{DocumentId, Quiz, QuizDraft};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{QuizFields, QuizRow};
use super::pool::DbPool;
use super::schema::quizzes;
use crate::domain::ports::{DocumentStore, DocumentStoreError};

/// Diesel implementation of the quiz [`DocumentStore`].
#[derive(Clone)]
pub struct DieselQuizStore {
    pool: DbPool,
}

impl DieselQuizStore {
    /// Create a store over `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentStore<Quiz> for DieselQuizStore {
    async fn find_all(&self) -> Result<Vec<Quiz>, DocumentStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<QuizRow> = quizzes::table
            .order(quizzes::seq.asc())
            .select(QuizRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows.into_iter().map(QuizRow::into_document).collect()
    }

    async fn insert(&self, draft: QuizDraft) -> Result<Quiz, DocumentStoreError> {
        let fields = QuizFields::from_draft(&draft)?;
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::insert_into(quizzes::table)
            .values(&fields)
            .returning(QuizRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?
            .into_document()
    }

    async fn replace(
        &self,
        id: &DocumentId,
        draft: QuizDraft,
    ) -> Result<Option<Quiz>, DocumentStoreError> {
        let fields = QuizFields::from_draft(&draft)?;
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::update(quizzes::table.find(*id.as_uuid()))
            .set(&fields)
            .returning(QuizRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?
            .map(QuizRow::into_document)
            .transpose()
    }

    async fn remove(&self, id: &DocumentId) -> Result<Option<Quiz>, DocumentStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::delete(quizzes::table.find(*id.as_uuid()))
            .returning(QuizRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?
            .map(QuizRow::into_document)
            .transpose()
    }
}

//! PostgreSQL-backed announcement collection.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use quizdesk_model::{Announcement, AnnouncementDraft, DocumentId};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{AnnouncementFields, AnnouncementRow};
use super::pool::DbPool;
use super::schema::announcements;
use crate::domain::ports::{DocumentStore, DocumentStoreError};

/// Diesel implementation of the announcement [`DocumentStore`].
#[derive(Clone)]
pub struct DieselAnnouncementStore {
    pool: DbPool,
}

impl DieselAnnouncementStore {
    /// Create a store over `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentStore<Announcement> for DieselAnnouncementStore {
    async fn find_all(&self) -> Result<Vec<Announcement>, DocumentStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<AnnouncementRow> = announcements::table
            .order(announcements::seq.asc())
            .select(AnnouncementRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows.into_iter().map(AnnouncementRow::into_document).collect()
    }

    async fn insert(&self, draft: AnnouncementDraft) -> Result<Announcement, DocumentStoreError> {
        let fields = AnnouncementFields::from(&draft);
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::insert_into(announcements::table)
            .values(&fields)
            .returning(AnnouncementRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?
            .into_document()
    }

    async fn replace(
        &self,
        id: &DocumentId,
        draft: AnnouncementDraft,
    ) -> Result<Option<Announcement>, DocumentStoreError> {
        let fields = AnnouncementFields::from(&draft);
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::update(announcements::table.find(*id.as_uuid()))
            .set(&fields)
            .returning(AnnouncementRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?
            .map(AnnouncementRow::into_document)
            .transpose()
    }

    async fn remove(&self, id: &DocumentId) -> Result<Option<Announcement>, DocumentStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::delete(announcements::table.find(*id.as_uuid()))
            .returning(AnnouncementRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?
            .map(AnnouncementRow::into_document)
            .transpose()
    }
}

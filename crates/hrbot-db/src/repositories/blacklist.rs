//! SQLite implementation of BlacklistRepository

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::{debug, instrument};

use hrbot_core::entities::{BlacklistEntry, NewBlacklistEntry};
use hrbot_core::traits::{BlacklistRepository, RepoResult};
use hrbot_core::value_objects::{format_added_at, local_now, BlacklistQuery};

use crate::models::BlacklistModel;

use super::error::{blacklist_column, map_db_error};

const SELECT_COLUMNS: &str = "id, discord_tag, passport_number, list_type, reason, expiry_date, added_at, added_by";

/// SQLite implementation of BlacklistRepository
#[derive(Clone)]
pub struct SqliteBlacklistRepository {
    pool: SqlitePool,
}

impl SqliteBlacklistRepository {
    /// Create a new SqliteBlacklistRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BlacklistRepository for SqliteBlacklistRepository {
    #[instrument(skip(self))]
    async fn find(&self, query: &BlacklistQuery) -> RepoResult<Option<BlacklistEntry>> {
        for (kind, value) in query.keys() {
            let sql = format!(
                "SELECT {SELECT_COLUMNS} FROM blacklist WHERE {} = ?1 ORDER BY id LIMIT 1",
                blacklist_column(kind)
            );

            let row = sqlx::query_as::<_, BlacklistModel>(&sql)
                .bind(value)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_db_error)?;

            if let Some(model) = row {
                debug!(?kind, id = model.id, "Blacklist hit");
                return BlacklistEntry::try_from(model).map(Some);
            }
        }

        Ok(None)
    }

    #[instrument(skip(self))]
    async fn list(&self, limit: i64) -> RepoResult<Vec<BlacklistEntry>> {
        let sql = format!("SELECT {SELECT_COLUMNS} FROM blacklist ORDER BY id DESC LIMIT ?1");

        let rows = sqlx::query_as::<_, BlacklistModel>(&sql)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        rows.into_iter().map(BlacklistEntry::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn create(&self, entry: &NewBlacklistEntry) -> RepoResult<BlacklistEntry> {
        let added_at = local_now();

        let result = sqlx::query(
            r"
            INSERT INTO blacklist (discord_tag, passport_number, list_type, reason, expiry_date, added_at, added_by)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            ",
        )
        .bind(&entry.tag)
        .bind(&entry.document_number)
        .bind(entry.list_type.as_str())
        .bind(&entry.reason)
        .bind(&entry.expiry_date)
        .bind(format_added_at(&added_at))
        .bind(&entry.added_by)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(entry.clone().into_entry(result.last_insert_rowid(), added_at))
    }

    #[instrument(skip(self))]
    async fn delete(&self, query: &BlacklistQuery) -> RepoResult<u64> {
        let mut removed = 0;

        // One independent statement per key: tag OR document number
        for (kind, value) in query.keys() {
            let sql = format!("DELETE FROM blacklist WHERE {} = ?1", blacklist_column(kind));

            let result = sqlx::query(&sql)
                .bind(value)
                .execute(&self.pool)
                .await
                .map_err(map_db_error)?;

            removed += result.rows_affected();
        }

        Ok(removed)
    }
}

//! SQLite implementation of AuditRepository

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::instrument;

use hrbot_core::entities::{AuditEntry, NewAuditEntry};
use hrbot_core::traits::{AuditRepository, RepoResult};
use hrbot_core::value_objects::format_audit_date;

use crate::models::AuditModel;

use super::error::map_db_error;

/// SQLite implementation of AuditRepository
#[derive(Clone)]
pub struct SqliteAuditRepository {
    pool: SqlitePool,
}

impl SqliteAuditRepository {
    /// Create a new SqliteAuditRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuditRepository for SqliteAuditRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<AuditEntry>> {
        let result = sqlx::query_as::<_, AuditModel>(
            r"
            SELECT id, discord_tag, id_number, employee_name, employee_passport,
                   action_type, action_reason, audit_date, server_id
            FROM audits
            WHERE id = ?1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(AuditEntry::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_passport(&self, passport: &str) -> RepoResult<Vec<AuditEntry>> {
        let rows = sqlx::query_as::<_, AuditModel>(
            r"
            SELECT id, discord_tag, id_number, employee_name, employee_passport,
                   action_type, action_reason, audit_date, server_id
            FROM audits
            WHERE employee_passport = ?1
            ORDER BY id
            ",
        )
        .bind(passport)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(AuditEntry::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn create(&self, entry: &NewAuditEntry) -> RepoResult<AuditEntry> {
        let result = sqlx::query(
            r"
            INSERT INTO audits (discord_tag, id_number, employee_name, employee_passport,
                                action_type, action_reason, audit_date, server_id)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            ",
        )
        .bind(&entry.requester_tag)
        .bind(&entry.id_number)
        .bind(&entry.employee_name)
        .bind(&entry.employee_passport)
        .bind(&entry.action_type)
        .bind(&entry.action_reason)
        .bind(format_audit_date(&entry.audit_date))
        .bind(&entry.server_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(entry.clone().into_entry(result.last_insert_rowid()))
    }
}

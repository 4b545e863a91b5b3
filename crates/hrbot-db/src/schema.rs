//! Schema bootstrap
//!
//! Column names and types match databases created by earlier releases of the
//! bot, so an existing `hrbot.db` opens unchanged. Every column except `id` is
//! nullable there and stays nullable here.

use sqlx::SqlitePool;
use tracing::{debug, instrument};

const CREATE_BLACKLIST: &str = r"
    CREATE TABLE IF NOT EXISTS blacklist (
        id INTEGER PRIMARY KEY,
        discord_tag TEXT,
        passport_number TEXT,
        list_type TEXT,
        reason TEXT,
        expiry_date TEXT NULL,
        added_at TEXT,
        added_by TEXT
    )
";

const CREATE_AUDITS: &str = r"
    CREATE TABLE IF NOT EXISTS audits (
        id INTEGER PRIMARY KEY,
        discord_tag TEXT,
        id_number TEXT,
        employee_name TEXT,
        employee_passport TEXT,
        action_type TEXT,
        action_reason TEXT,
        audit_date TEXT,
        server_id TEXT
    )
";

/// Create both tables if absent. Safe to run on every startup.
#[instrument(skip(pool))]
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in [CREATE_BLACKLIST, CREATE_AUDITS] {
        sqlx::query(statement).execute(pool).await?;
    }
    debug!("Schema ensured");
    Ok(())
}

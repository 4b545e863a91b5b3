//! Blacklist database model

use sqlx::FromRow;

/// Database model for the `blacklist` table
#[derive(Debug, Clone, FromRow)]
pub struct BlacklistModel {
    pub id: i64,
    pub discord_tag: Option<String>,
    pub passport_number: Option<String>,
    pub list_type: Option<String>,
    pub reason: Option<String>,
    pub expiry_date: Option<String>,
    /// `YYYY-MM-DD HH:MM:SS`
    pub added_at: Option<String>,
    pub added_by: Option<String>,
}

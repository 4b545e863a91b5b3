//! # hrbot-db
//!
//! Record store implementing the repository traits with SQLite via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management (single connection, see [`pool`])
//! - Idempotent schema creation
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use hrbot_db::{create_pool, ensure_schema, DatabaseConfig, SqliteBlacklistRepository};
//! use hrbot_core::{BlacklistQuery, BlacklistRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::new("sqlite://hrbot.db")).await?;
//!     ensure_schema(&pool).await?;
//!
//!     let repo = SqliteBlacklistRepository::new(pool);
//!     let hit = repo.find(&BlacklistQuery::by_document_number("P12345")).await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;
pub mod schema;

// Re-export commonly used types
pub use pool::{create_pool, DatabaseConfig, SqlitePool};
pub use repositories::{SqliteAuditRepository, SqliteBlacklistRepository};
pub use schema::ensure_schema;

//! Timestamp formats used by the two tables
//!
//! Blacklist entries and audits are stamped with server-local time, each in its
//! own fixed textual format. The two formats differ on purpose: `added_at` sorts
//! lexically, `audit_date` is what staff read in the audit channel.

use chrono::{Local, NaiveDateTime, Timelike};

use crate::error::DomainError;

/// Format of `blacklist.added_at` (`YYYY-MM-DD HH:MM:SS`)
pub const BLACKLIST_ADDED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format of `audits.audit_date` (`DD.MM.YYYY HH:MM:SS`)
pub const AUDIT_DATE_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

/// Current server-local time, truncated to whole seconds
pub fn local_now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

pub fn format_added_at(at: &NaiveDateTime) -> String {
    at.format(BLACKLIST_ADDED_AT_FORMAT).to_string()
}

pub fn format_audit_date(at: &NaiveDateTime) -> String {
    at.format(AUDIT_DATE_FORMAT).to_string()
}

/// Parse a stored `added_at` value
pub fn parse_added_at(value: &str) -> Result<NaiveDateTime, DomainError> {
    NaiveDateTime::parse_from_str(value, BLACKLIST_ADDED_AT_FORMAT)
        .map_err(|_| DomainError::InvalidTimestamp(value.to_string()))
}

/// Parse a stored `audit_date` value
pub fn parse_audit_date(value: &str) -> Result<NaiveDateTime, DomainError> {
    NaiveDateTime::parse_from_str(value, AUDIT_DATE_FORMAT)
        .map_err(|_| DomainError::InvalidTimestamp(value.to_string()))
}

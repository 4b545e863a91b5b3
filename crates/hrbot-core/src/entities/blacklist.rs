//! Blacklist entity - a flagged subject addressable by tag and/or document number

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use crate::value_objects::KeyKind;

/// Blacklist category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    /// Restriction scoped to one faction
    Faction,
    /// Community-wide restriction
    #[default]
    General,
}

impl ListType {
    /// Stored value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Faction => "faction",
            Self::General => "general",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Faction => "Faction",
            Self::General => "General",
        }
    }
}

impl fmt::Display for ListType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "faction" => Ok(Self::Faction),
            "general" => Ok(Self::General),
            other => Err(DomainError::InvalidListType(other.to_string())),
        }
    }
}

/// Persisted blacklist entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlacklistEntry {
    pub id: i64,
    pub tag: Option<String>,
    pub document_number: Option<String>,
    pub list_type: ListType,
    pub reason: String,
    /// Advisory only, never enforced
    pub expiry_date: Option<String>,
    pub added_at: NaiveDateTime,
    pub added_by: String,
}

impl BlacklistEntry {
    /// Whether any lookup can ever reach this entry
    pub fn is_matchable(&self) -> bool {
        self.tag.is_some() || self.document_number.is_some()
    }

    /// Whether the entry carries `value` under the given key
    pub fn matches(&self, kind: KeyKind, value: &str) -> bool {
        let stored = match kind {
            KeyKind::Tag => self.tag.as_deref(),
            KeyKind::DocumentNumber => self.document_number.as_deref(),
        };
        stored == Some(value)
    }
}

/// Blacklist entry before insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBlacklistEntry {
    pub tag: Option<String>,
    pub document_number: Option<String>,
    pub list_type: ListType,
    pub reason: String,
    pub expiry_date: Option<String>,
    pub added_by: String,
}

impl NewBlacklistEntry {
    /// Create a new entry with normalized optional fields
    ///
    /// Optional values are trimmed; blank ones become `None`. The reason is kept verbatim.
    pub fn new(
        tag: Option<&str>,
        document_number: Option<&str>,
        list_type: ListType,
        reason: impl Into<String>,
        expiry_date: Option<&str>,
        added_by: impl Into<String>,
    ) -> Self {
        Self {
            tag: normalize(tag),
            document_number: normalize(document_number),
            list_type,
            reason: reason.into(),
            expiry_date: normalize(expiry_date),
            added_by: added_by.into(),
        }
    }

    /// Attach the store-assigned id and timestamp
    pub fn into_entry(self, id: i64, added_at: NaiveDateTime) -> BlacklistEntry {
        BlacklistEntry {
            id,
            tag: self.tag,
            document_number: self.document_number,
            list_type: self.list_type,
            reason: self.reason,
            expiry_date: self.expiry_date,
            added_at,
            added_by: self.added_by,
        }
    }
}

fn normalize(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

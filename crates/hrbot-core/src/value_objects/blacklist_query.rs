//! Blacklist lookup query
//!
//! A lookup names which key(s) the caller supplied. When both are present the
//! keys are consulted in [`MATCH_PRIORITY`] order and the first hit wins.

use serde::{Deserialize, Serialize};

/// The column a lookup key addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyKind {
    /// Discord tag of the flagged user
    Tag,
    /// Passport-equivalent document number
    DocumentNumber,
}

/// Resolution order for multi-key lookups: tag before document number
pub const MATCH_PRIORITY: [KeyKind; 2] = [KeyKind::Tag, KeyKind::DocumentNumber];

/// Blacklist lookup / removal criteria
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "by", rename_all = "snake_case")]
pub enum BlacklistQuery {
    Tag { tag: String },
    DocumentNumber { document_number: String },
    Either { tag: String, document_number: String },
}

impl BlacklistQuery {
    /// Query by tag only
    pub fn by_tag(tag: impl Into<String>) -> Self {
        Self::Tag { tag: tag.into() }
    }

    /// Query by document number only
    pub fn by_document_number(document_number: impl Into<String>) -> Self {
        Self::DocumentNumber {
            document_number: document_number.into(),
        }
    }

    /// Build a query from optional inputs
    ///
    /// Blank values count as absent. Returns `None` when neither key is usable.
    pub fn from_parts(tag: Option<&str>, document_number: Option<&str>) -> Option<Self> {
        let tag = tag.map(str::trim).filter(|s| !s.is_empty());
        let document_number = document_number.map(str::trim).filter(|s| !s.is_empty());

        match (tag, document_number) {
            (Some(tag), Some(document_number)) => Some(Self::Either {
                tag: tag.to_string(),
                document_number: document_number.to_string(),
            }),
            (Some(tag), None) => Some(Self::by_tag(tag)),
            (None, Some(document_number)) => Some(Self::by_document_number(document_number)),
            (None, None) => None,
        }
    }

    /// The value supplied for a key, if any
    pub fn key(&self, kind: KeyKind) -> Option<&str> {
        match (self, kind) {
            (Self::Tag { tag } | Self::Either { tag, .. }, KeyKind::Tag) => Some(tag.as_str()),
            (
                Self::DocumentNumber { document_number }
                | Self::Either {
                    document_number, ..
                },
                KeyKind::DocumentNumber,
            ) => Some(document_number.as_str()),
            _ => None,
        }
    }

    pub fn tag(&self) -> Option<&str> {
        self.key(KeyKind::Tag)
    }

    pub fn document_number(&self) -> Option<&str> {
        self.key(KeyKind::DocumentNumber)
    }

    /// Supplied keys in resolution order
    pub fn keys(&self) -> impl Iterator<Item = (KeyKind, &str)> + '_ {
        MATCH_PRIORITY
            .into_iter()
            .filter_map(move |kind| self.key(kind).map(|value| (kind, value)))
    }
}

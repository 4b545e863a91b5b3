//! Button `custom_id` encoding for cross-reference alerts
//!
//! Format: `xref:<action>:<document number>`. Discord caps `custom_id` at 100
//! characters, which bounds the document numbers that can carry buttons.

use std::fmt;

const PREFIX: &str = "xref";
const MAX_CUSTOM_ID_LEN: usize = 100;

/// Follow-up chosen by a reviewer on a cross-reference alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentAction {
    /// Proceed despite the match; no state change.
    Allow { document_number: String },
    /// Delete every blacklist entry carrying the document number.
    Remove { document_number: String },
}

impl ComponentAction {
    pub fn allow(document_number: impl Into<String>) -> Self {
        Self::Allow {
            document_number: document_number.into(),
        }
    }

    pub fn remove(document_number: impl Into<String>) -> Self {
        Self::Remove {
            document_number: document_number.into(),
        }
    }

    pub fn document_number(&self) -> &str {
        match self {
            Self::Allow { document_number } | Self::Remove { document_number } => {
                document_number.as_str()
            }
        }
    }

    fn verb(&self) -> &'static str {
        match self {
            Self::Allow { .. } => "allow",
            Self::Remove { .. } => "remove",
        }
    }

    /// Encoded id, or `None` when it would exceed Discord's limit.
    pub fn custom_id(&self) -> Option<String> {
        let id = self.to_string();
        (id.chars().count() <= MAX_CUSTOM_ID_LEN).then_some(id)
    }

    /// Decode a `custom_id`; unknown prefixes and verbs yield `None`.
    pub fn parse(custom_id: &str) -> Option<Self> {
        let mut parts = custom_id.splitn(3, ':');
        if parts.next()? != PREFIX {
            return None;
        }
        let verb = parts.next()?;
        let document_number = parts.next().filter(|d| !d.is_empty())?;

        match verb {
            "allow" => Some(Self::allow(document_number)),
            "remove" => Some(Self::remove(document_number)),
            _ => None,
        }
    }
}

impl fmt::Display for ComponentAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{PREFIX}:{}:{}", self.verb(), self.document_number())
    }
}

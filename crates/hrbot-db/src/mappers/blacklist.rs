//! Blacklist model -> entity mapper

use hrbot_core::entities::{BlacklistEntry, ListType};
use hrbot_core::error::DomainError;
use hrbot_core::value_objects::parse_added_at;

use crate::models::BlacklistModel;

impl TryFrom<BlacklistModel> for BlacklistEntry {
    type Error = DomainError;

    fn try_from(model: BlacklistModel) -> Result<Self, Self::Error> {
        let list_type = model
            .list_type
            .as_deref()
            .unwrap_or_default()
            .parse::<ListType>()?;
        let added_at = parse_added_at(model.added_at.as_deref().unwrap_or_default())?;

        Ok(BlacklistEntry {
            id: model.id,
            tag: model.discord_tag,
            document_number: model.passport_number,
            list_type,
            reason: model.reason.unwrap_or_default(),
            expiry_date: model.expiry_date,
            added_at,
            added_by: model.added_by.unwrap_or_default(),
        })
    }
}

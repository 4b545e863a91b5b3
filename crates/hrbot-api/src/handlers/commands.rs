//! Slash command handlers
//!
//! Every command answers in-band: access denials, malformed options and store
//! failures all become ephemeral replies rather than HTTP errors.

use hrbot_core::{BlacklistQuery, DomainError};
use hrbot_discord::commands::{
    AUDIT, BLACKLIST, BLACKLIST_CHECK, BLACKLIST_REMOVE, PASSPORT_OPTION, TAG_OPTION,
};
use hrbot_discord::{Interaction, InteractionResponse};
use hrbot_service::{
    AddBlacklistRequest, AuditService, BlacklistService, ServiceError, ServiceResult,
    SubmitAuditRequest,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, instrument};

use crate::state::AppState;

use super::replies;

/// Route an application command to its handler
#[instrument(skip_all, fields(command = interaction.command_name()))]
pub async fn dispatch(state: &AppState, interaction: &Interaction) -> InteractionResponse {
    let Some(name) = interaction.command_name() else {
        return InteractionResponse::ephemeral(replies::UNKNOWN_COMMAND);
    };

    let result = match name {
        AUDIT => audit(state, interaction).await,
        BLACKLIST => blacklist(state, interaction).await,
        BLACKLIST_CHECK => blacklist_check(state, interaction).await,
        BLACKLIST_REMOVE => blacklist_remove(state, interaction).await,
        other => {
            debug!(command = other, "Unknown command");
            return InteractionResponse::ephemeral(replies::UNKNOWN_COMMAND);
        }
    };

    result.unwrap_or_else(|e| replies::failure(name, &e))
}

/// `/audit`: audit channel and audit role only
async fn audit(state: &AppState, interaction: &Interaction) -> ServiceResult<InteractionResponse> {
    state
        .access()
        .require_audit(interaction.channel_id, interaction.member_roles())?;

    let request: SubmitAuditRequest = options(interaction)?;
    let server_id = interaction
        .guild_id
        .map(|id| id.to_string())
        .unwrap_or_default();

    let outcome = AuditService::new(state.service_context())
        .submit(request, &interaction.invoker_tag(), &server_id)
        .await?;

    Ok(replies::audit_summary(&outcome.audit))
}

/// `/blacklist`
async fn blacklist(state: &AppState, interaction: &Interaction) -> ServiceResult<InteractionResponse> {
    state.access().require_blacklist(interaction.member_roles())?;

    let request: AddBlacklistRequest = options(interaction)?;
    let entry = BlacklistService::new(state.service_context())
        .add(request, &interaction.invoker_tag())
        .await?;

    Ok(replies::blacklist_added(&entry))
}

/// `/blacklist_check`
async fn blacklist_check(
    state: &AppState,
    interaction: &Interaction,
) -> ServiceResult<InteractionResponse> {
    state.access().require_blacklist(interaction.member_roles())?;

    let query = lookup_query(interaction)?;
    let entry = BlacklistService::new(state.service_context())
        .lookup(&query)
        .await?;

    Ok(replies::lookup_result(entry.as_ref()))
}

/// `/blacklist_remove`
async fn blacklist_remove(
    state: &AppState,
    interaction: &Interaction,
) -> ServiceResult<InteractionResponse> {
    state.access().require_blacklist(interaction.member_roles())?;

    let query = lookup_query(interaction)?;
    let removed = BlacklistService::new(state.service_context())
        .remove(&query)
        .await?;

    Ok(replies::removed(removed))
}

fn lookup_query(interaction: &Interaction) -> ServiceResult<BlacklistQuery> {
    BlacklistQuery::from_parts(
        interaction.option_str(TAG_OPTION),
        interaction.option_str(PASSPORT_OPTION),
    )
    .ok_or_else(|| DomainError::EmptyBlacklistQuery.into())
}

/// Deserialize the command's options into a request DTO
fn options<T: DeserializeOwned>(interaction: &Interaction) -> ServiceResult<T> {
    let map: Map<String, Value> = interaction
        .data
        .iter()
        .flat_map(|data| &data.options)
        .filter_map(|option| Some((option.name.clone(), option.value.clone()?)))
        .collect();

    serde_json::from_value(Value::Object(map)).map_err(|e| ServiceError::validation(e.to_string()))
}

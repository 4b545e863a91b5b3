//! Cross-reference alert buttons
//!
//! Resolving an alert edits it in place: the embed stays, both buttons are
//! disabled and the message states who resolved it and how.

use hrbot_discord::notifier::alert_components;
use hrbot_discord::{ComponentAction, Interaction, InteractionCallbackData, InteractionResponse};
use hrbot_service::{BlacklistService, ServiceResult};
use tracing::{debug, instrument};

use crate::state::AppState;

use super::replies;

/// Route a button press on an alert
#[instrument(skip_all, fields(custom_id = interaction.custom_id()))]
pub async fn dispatch(state: &AppState, interaction: &Interaction) -> InteractionResponse {
    let Some(action) = interaction.custom_id().and_then(ComponentAction::parse) else {
        debug!("Unrecognised component");
        return InteractionResponse::ephemeral(replies::UNKNOWN_ACTION);
    };

    resolve(state, interaction, &action)
        .await
        .unwrap_or_else(|e| replies::failure("xref", &e))
}

async fn resolve(
    state: &AppState,
    interaction: &Interaction,
    action: &ComponentAction,
) -> ServiceResult<InteractionResponse> {
    state.access().require_blacklist(interaction.member_roles())?;

    let service = BlacklistService::new(state.service_context());
    let resolver = interaction.invoker_tag();

    let resolution = match action {
        ComponentAction::Allow { document_number } => {
            service.acknowledge(document_number).await?;
            format!("Allowed despite the blacklist by {resolver}.")
        }
        ComponentAction::Remove { document_number } => {
            let removed = service.remove_by_document_number(document_number).await?;
            format!("Removed from the blacklist by {resolver} ({removed} entries).")
        }
    };

    let embeds = interaction
        .message
        .as_ref()
        .map(|m| m.embeds.clone())
        .unwrap_or_default();

    let data = InteractionCallbackData {
        content: Some(resolution),
        embeds: Some(embeds),
        components: Some(alert_components(action.document_number(), true)),
        flags: None,
    };

    Ok(InteractionResponse::update_message(data))
}

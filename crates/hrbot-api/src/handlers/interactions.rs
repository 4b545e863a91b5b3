//! Interactions endpoint
//!
//! POST /interactions receives every command and button press Discord routes
//! to the application.

use axum::{extract::State, Json};
use hrbot_discord::{InteractionResponse, InteractionType};
use tracing::{debug, instrument};

use crate::extractors::VerifiedInteraction;
use crate::state::AppState;

use super::{commands, components, replies};

/// Handle a signed interaction
///
/// POST /interactions
#[instrument(skip_all, fields(interaction_id = %interaction.id, kind = ?interaction.kind))]
pub async fn handle_interaction(
    State(state): State<AppState>,
    VerifiedInteraction(interaction): VerifiedInteraction,
) -> Json<InteractionResponse> {
    let response = match interaction.kind {
        InteractionType::Ping => InteractionResponse::pong(),
        InteractionType::ApplicationCommand => commands::dispatch(&state, &interaction).await,
        InteractionType::MessageComponent => components::dispatch(&state, &interaction).await,
        InteractionType::Autocomplete | InteractionType::ModalSubmit => {
            debug!("Unsupported interaction type");
            InteractionResponse::ephemeral(replies::UNKNOWN_COMMAND)
        }
    };

    Json(response)
}

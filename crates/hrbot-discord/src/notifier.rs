//! Cross-reference alerts posted to the notification channel

use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

use hrbot_core::{CrossReferenceNotifier, CrossReferenceSignal, DomainError, Snowflake};

use crate::client::DiscordClient;
use crate::components::ComponentAction;
use crate::types::{colors, ActionRow, Button, ButtonStyle, CreateMessage, DiscordEmbed};

pub const ALERT_TITLE: &str = "Blacklist match";

/// Posts [`CrossReferenceSignal`]s as an embed with Allow / Remove buttons.
#[derive(Debug, Clone)]
pub struct DiscordNotifier {
    client: DiscordClient,
}

impl DiscordNotifier {
    pub fn new(client: DiscordClient) -> Self {
        Self { client }
    }

    /// Guild name for display; any failure falls back to the raw id.
    async fn resolve_server_name(&self, signal: &CrossReferenceSignal) -> Option<String> {
        if signal.server_name.is_some() {
            return signal.server_name.clone();
        }

        let guild_id = Snowflake::parse(&signal.server_id).ok()?;
        match self.client.get_guild(guild_id).await {
            Ok(guild) => Some(guild.name),
            Err(e) => {
                debug!(error = %e, %guild_id, "Could not resolve guild name");
                None
            }
        }
    }
}

#[async_trait]
impl CrossReferenceNotifier for DiscordNotifier {
    #[instrument(skip_all, fields(entry_id = signal.entry_id))]
    async fn notify(&self, signal: &CrossReferenceSignal) -> Result<(), DomainError> {
        let Some(channel_id) = self.client.config().notification_channel_id else {
            debug!("No notification channel configured, skipping alert");
            return Ok(());
        };

        let mut signal = signal.clone();
        signal.server_name = self.resolve_server_name(&signal).await;

        let message = render_alert(&signal);
        self.client.create_message(channel_id, &message).await?;

        info!(%channel_id, "Cross-reference alert posted");
        Ok(())
    }
}

/// Alert message for a signal.
pub fn render_alert(signal: &CrossReferenceSignal) -> CreateMessage {
    let embed = DiscordEmbed::new(ALERT_TITLE)
        .description("An audited employee matches a blacklist entry.")
        .color(colors::RED)
        .field("Server", signal.server_label(), true)
        .field("Requested by", &signal.requester_tag, true)
        .field("Subject", format!("Passport: {}", signal.document_number), false)
        .field("List", signal.list_type.display_name(), true)
        .field("Reason", &signal.reason, false)
        .footer(format!("Entry #{}", signal.entry_id));

    CreateMessage {
        content: None,
        embeds: vec![embed],
        components: alert_components(&signal.document_number, false),
    }
}

/// Allow / Remove buttons for a document number.
///
/// Empty when the encoded ids would not fit Discord's `custom_id` limit; the
/// alert is still posted without buttons.
pub fn alert_components(document_number: &str, disabled: bool) -> Vec<ActionRow> {
    let allow = ComponentAction::allow(document_number).custom_id();
    let remove = ComponentAction::remove(document_number).custom_id();

    let (Some(allow), Some(remove)) = (allow, remove) else {
        warn!(
            len = document_number.len(),
            "Document number too long for alert buttons"
        );
        return Vec::new();
    };

    let buttons = [
        Button::new(ButtonStyle::Success, "Allow", allow),
        Button::new(ButtonStyle::Danger, "Remove from blacklist", remove),
    ]
    .into_iter()
    .map(|b| if disabled { b.disabled() } else { b })
    .collect();

    vec![ActionRow::new(buttons)]
}

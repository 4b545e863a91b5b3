//! Inbound interaction payloads and the responses sent back
//!
//! Only the fields the bot reads are modelled; everything else in Discord's
//! payload is ignored on deserialization.

use serde::{Deserialize, Serialize};

use hrbot_core::Snowflake;

use crate::types::{ActionRow, DiscordEmbed, Message, User};

/// Message flag hiding a response from everyone but the invoker.
pub const EPHEMERAL: u64 = 1 << 6;

/// Interaction kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "u8")]
pub enum InteractionType {
    Ping,
    ApplicationCommand,
    MessageComponent,
    Autocomplete,
    ModalSubmit,
}

impl TryFrom<u8> for InteractionType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Ping),
            2 => Ok(Self::ApplicationCommand),
            3 => Ok(Self::MessageComponent),
            4 => Ok(Self::Autocomplete),
            5 => Ok(Self::ModalSubmit),
            other => Err(format!("unknown interaction type {other}")),
        }
    }
}

/// Guild member attached to guild interactions.
#[derive(Debug, Clone, Deserialize)]
pub struct Member {
    pub user: Option<User>,
    #[serde(default)]
    pub roles: Vec<Snowflake>,
}

/// A slash command option as received.
#[derive(Debug, Clone, Deserialize)]
pub struct CommandOptionValue {
    pub name: String,
    #[serde(default)]
    pub value: Option<serde_json::Value>,
}

/// `data` of a command or component interaction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InteractionData {
    /// Command name (commands only).
    pub name: Option<String>,
    #[serde(default)]
    pub options: Vec<CommandOptionValue>,
    /// Button id (components only).
    pub custom_id: Option<String>,
}

/// An interaction delivered to the HTTP endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Interaction {
    pub id: Snowflake,
    pub application_id: Snowflake,
    #[serde(rename = "type")]
    pub kind: InteractionType,
    #[serde(default)]
    pub data: Option<InteractionData>,
    pub guild_id: Option<Snowflake>,
    pub channel_id: Option<Snowflake>,
    /// Present for guild interactions.
    pub member: Option<Member>,
    /// Present for DM interactions.
    pub user: Option<User>,
    pub token: String,
    /// The message a component is attached to.
    pub message: Option<Message>,
}

impl Interaction {
    /// The invoking user, from either `member.user` or `user`.
    pub fn invoker(&self) -> Option<&User> {
        self.member
            .as_ref()
            .and_then(|m| m.user.as_ref())
            .or(self.user.as_ref())
    }

    /// Invoker tag, or `"unknown"` when Discord sent no user.
    pub fn invoker_tag(&self) -> String {
        self.invoker()
            .map_or_else(|| "unknown".to_string(), User::tag)
    }

    /// Role ids of the invoking member; empty outside guilds.
    pub fn member_roles(&self) -> &[Snowflake] {
        self.member
            .as_ref()
            .map(|m| m.roles.as_slice())
            .unwrap_or_default()
    }

    pub fn command_name(&self) -> Option<&str> {
        self.data.as_ref().and_then(|d| d.name.as_deref())
    }

    pub fn custom_id(&self) -> Option<&str> {
        self.data.as_ref().and_then(|d| d.custom_id.as_deref())
    }

    /// String value of a command option, if supplied.
    pub fn option_str(&self, name: &str) -> Option<&str> {
        self.data
            .as_ref()?
            .options
            .iter()
            .find(|o| o.name == name)?
            .value
            .as_ref()?
            .as_str()
    }
}

// ============================================================================
// Responses
// ============================================================================

const PONG: u8 = 1;
const CHANNEL_MESSAGE_WITH_SOURCE: u8 = 4;
const UPDATE_MESSAGE: u8 = 7;

/// Message payload of an interaction response.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InteractionCallbackData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embeds: Option<Vec<DiscordEmbed>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<ActionRow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<u64>,
}

impl InteractionCallbackData {
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Default::default()
        }
    }

    pub fn embed(embed: DiscordEmbed) -> Self {
        Self {
            embeds: Some(vec![embed]),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn components(mut self, components: Vec<ActionRow>) -> Self {
        self.components = Some(components);
        self
    }

    #[must_use]
    pub fn ephemeral(mut self) -> Self {
        self.flags = Some(self.flags.unwrap_or(0) | EPHEMERAL);
        self
    }

    pub fn is_ephemeral(&self) -> bool {
        self.flags.is_some_and(|f| f & EPHEMERAL != 0)
    }
}

/// Response body returned from the interactions endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InteractionResponse {
    #[serde(rename = "type")]
    pub kind: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<InteractionCallbackData>,
}

impl InteractionResponse {
    pub fn pong() -> Self {
        Self {
            kind: PONG,
            data: None,
        }
    }

    /// Reply in the channel the interaction came from.
    pub fn message(data: InteractionCallbackData) -> Self {
        Self {
            kind: CHANNEL_MESSAGE_WITH_SOURCE,
            data: Some(data),
        }
    }

    /// Ephemeral plain-text reply.
    pub fn ephemeral(content: impl Into<String>) -> Self {
        Self::message(InteractionCallbackData::content(content).ephemeral())
    }

    /// Edit the message a component is attached to.
    pub fn update_message(data: InteractionCallbackData) -> Self {
        Self {
            kind: UPDATE_MESSAGE,
            data: Some(data),
        }
    }
}

use serde::{Deserialize, Serialize};

use hrbot_core::Snowflake;

/// Embed colors used by the bot.
pub mod colors {
    pub const RED: u32 = 0xE7_4C_3C;
    pub const GREEN: u32 = 0x2E_CC_71;
    pub const BLUE: u32 = 0x34_98_DB;
    pub const ORANGE: u32 = 0xE6_7E_22;
}

/// A Discord embed object for rich message formatting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiscordEmbed {
    /// Embed title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Embed description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Embed color as a decimal integer (e.g., `16711680` for red).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,

    /// Embed fields.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<DiscordEmbedField>,

    /// Footer text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<DiscordEmbedFooter>,
}

impl DiscordEmbed {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn color(mut self, color: u32) -> Self {
        self.color = Some(color);
        self
    }

    /// Append a field. Discord rejects blank values, so those render as `-`.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        let mut value = value.into();
        if value.trim().is_empty() {
            value = BLANK_FIELD.to_string();
        }
        self.fields.push(DiscordEmbedField {
            name: name.into(),
            value,
            inline: Some(inline),
        });
        self
    }

    #[must_use]
    pub fn footer(mut self, text: impl Into<String>) -> Self {
        self.footer = Some(DiscordEmbedFooter { text: text.into() });
        self
    }

    /// Value of the first field with the given name.
    pub fn field_value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }
}

/// Placeholder for blank field values.
pub const BLANK_FIELD: &str = "-";

/// A field within a Discord embed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscordEmbedField {
    /// Field name.
    pub name: String,
    /// Field value.
    pub value: String,
    /// Whether this field should be displayed inline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline: Option<bool>,
}

/// Footer for a Discord embed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscordEmbedFooter {
    /// Footer text.
    pub text: String,
}

// ============================================================================
// Components
// ============================================================================

const ACTION_ROW: u8 = 1;
const BUTTON: u8 = 2;

/// Button styles (only the ones the bot renders).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    Success = 3,
    Danger = 4,
}

impl Serialize for ButtonStyle {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

/// A top-level row of message components.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionRow {
    #[serde(rename = "type")]
    kind: u8,
    pub components: Vec<Button>,
}

impl ActionRow {
    pub fn new(components: Vec<Button>) -> Self {
        Self {
            kind: ACTION_ROW,
            components,
        }
    }
}

/// An interactive button carrying a `custom_id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Button {
    #[serde(rename = "type")]
    kind: u8,
    pub style: ButtonStyle,
    pub label: String,
    pub custom_id: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
}

impl Button {
    pub fn new(style: ButtonStyle, label: impl Into<String>, custom_id: impl Into<String>) -> Self {
        Self {
            kind: BUTTON,
            style,
            label: label.into(),
            custom_id: custom_id.into(),
            disabled: false,
        }
    }

    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

// ============================================================================
// Messages and guilds
// ============================================================================

/// Body of `POST /channels/{id}/messages`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub embeds: Vec<DiscordEmbed>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<ActionRow>,
}

/// The subset of a Discord message object the bot reads.
#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub id: Snowflake,
    pub channel_id: Snowflake,
    #[serde(default)]
    pub embeds: Vec<DiscordEmbed>,
}

/// The subset of a Discord guild object the bot reads.
#[derive(Debug, Clone, Deserialize)]
pub struct Guild {
    pub id: Snowflake,
    pub name: String,
}

/// A Discord user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Snowflake,
    pub username: String,
    /// `"0"` for accounts migrated to unique usernames.
    #[serde(default)]
    pub discriminator: Option<String>,
}

impl User {
    /// Display tag: the bare username for migrated accounts, `name#1234` otherwise.
    pub fn tag(&self) -> String {
        match self.discriminator.as_deref() {
            None | Some("" | "0") => self.username.clone(),
            Some(discriminator) => format!("{}#{discriminator}", self.username),
        }
    }
}

//! Slash command definitions registered at startup

use serde::Serialize;

pub const AUDIT: &str = "audit";
pub const BLACKLIST: &str = "blacklist";
pub const BLACKLIST_CHECK: &str = "blacklist_check";
pub const BLACKLIST_REMOVE: &str = "blacklist_remove";

/// Lookup key options shared by the blacklist commands
pub const TAG_OPTION: &str = "discord_tag";
pub const PASSPORT_OPTION: &str = "passport";

const STRING_OPTION: u8 = 3;
const CHAT_INPUT: u8 = 1;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionChoice {
    pub name: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandOption {
    #[serde(rename = "type")]
    kind: u8,
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<OptionChoice>,
}

impl CommandOption {
    fn string(name: &'static str, description: &'static str, required: bool) -> Self {
        Self {
            kind: STRING_OPTION,
            name,
            description,
            required,
            choices: Vec::new(),
        }
    }

    fn with_choices(mut self, choices: &[(&'static str, &'static str)]) -> Self {
        self.choices = choices
            .iter()
            .map(|&(name, value)| OptionChoice { name, value })
            .collect();
        self
    }
}

/// Body element of `PUT /applications/{id}/commands`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandDefinition {
    #[serde(rename = "type")]
    kind: u8,
    pub name: &'static str,
    pub description: &'static str,
    pub options: Vec<CommandOption>,
}

impl CommandDefinition {
    fn new(name: &'static str, description: &'static str, options: Vec<CommandOption>) -> Self {
        Self {
            kind: CHAT_INPUT,
            name,
            description,
            options,
        }
    }
}

/// The bot's full global command set.
pub fn command_definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            AUDIT,
            "Log a personnel action",
            vec![
                CommandOption::string("id_number", "Staff ID / badge number", true),
                CommandOption::string("employee_name", "Employee full name", true),
                CommandOption::string("employee_passport", "Employee passport number", true),
                CommandOption::string("action_type", "Action taken (hire, promotion, dismissal...)", true),
                CommandOption::string("action_reason", "Reason for the action", true),
            ],
        ),
        CommandDefinition::new(
            BLACKLIST,
            "Add a subject to the blacklist",
            vec![
                CommandOption::string(TAG_OPTION, "Discord tag of the subject", true),
                CommandOption::string(PASSPORT_OPTION, "Passport number of the subject", true),
                CommandOption::string("list_type", "Blacklist category", true)
                    .with_choices(&[("Faction", "faction"), ("General", "general")]),
                CommandOption::string("reason", "Reason for blacklisting", true),
                CommandOption::string("expiry_date", "Expiry date (informational)", false),
            ],
        ),
        CommandDefinition::new(
            BLACKLIST_CHECK,
            "Look up a subject on the blacklist",
            vec![
                CommandOption::string(TAG_OPTION, "Discord tag to look up", false),
                CommandOption::string(PASSPORT_OPTION, "Passport number to look up", false),
            ],
        ),
        CommandDefinition::new(
            BLACKLIST_REMOVE,
            "Remove entries from the blacklist",
            vec![
                CommandOption::string(TAG_OPTION, "Remove entries with this tag", false),
                CommandOption::string(PASSPORT_OPTION, "Remove entries with this passport number", false),
            ],
        ),
    ]
}

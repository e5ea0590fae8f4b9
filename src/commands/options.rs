//! Extraction of the caller and typed options from a slash command payload.

use serenity::model::application::CommandInteraction;
use serenity::model::permissions::Permissions;

/// The member invoking a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub id: String,
    pub name: String,
    pub is_admin: bool,
}

impl Caller {
    pub fn new(id: impl Into<String>, name: impl Into<String>, is_admin: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_admin,
        }
    }

    /// Administrator capability comes from the member's resolved permissions in the guild.
    /// Outside a guild there is no member, so nobody is an administrator.
    pub fn from_interaction(interaction: &CommandInteraction) -> Self {
        let is_admin = interaction
            .member
            .as_ref()
            .and_then(|m| m.permissions)
            .is_some_and(|p| p.contains(Permissions::ADMINISTRATOR));
        Self::new(
            interaction.user.id.to_string(),
            interaction.user.name.clone(),
            is_admin,
        )
    }
}

/// The account a transaction is recorded for or looked up by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: String,
    pub name: String,
}

impl Customer {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

pub fn user_option(interaction: &CommandInteraction, name: &str) -> Option<Customer> {
    let user_id = interaction
        .data
        .options
        .iter()
        .find(|o| o.name == name)
        .and_then(|o| o.value.as_user_id())?;
    let display = interaction
        .data
        .resolved
        .users
        .get(&user_id)
        .map(|u| u.name.clone())
        .unwrap_or_else(|| format!("<@{user_id}>"));
    Some(Customer::new(user_id.to_string(), display))
}

pub fn string_option<'a>(interaction: &'a CommandInteraction, name: &str) -> Option<&'a str> {
    interaction
        .data
        .options
        .iter()
        .find(|o| o.name == name)
        .and_then(|o| o.value.as_str())
}

pub fn integer_option(interaction: &CommandInteraction, name: &str) -> Option<i64> {
    interaction
        .data
        .options
        .iter()
        .find(|o| o.name == name)
        .and_then(|o| o.value.as_i64())
}

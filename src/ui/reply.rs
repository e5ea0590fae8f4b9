//! Platform-neutral reply values produced by command logic, and their serenity renderings.

use super::style::COLOR_STORE;
use serenity::builder::{
    CreateEmbed, CreateInteractionResponse, CreateInteractionResponseMessage, CreateMessage,
};

/// Who can see a reply. `Private` maps to an ephemeral interaction response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Private,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedSpec {
    pub title: String,
    pub description: String,
    pub fields: Vec<(String, String)>,
    pub color: u32,
}

impl EmbedSpec {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            fields: Vec::new(),
            color: COLOR_STORE,
        }
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    pub fn to_embed(&self) -> CreateEmbed {
        self.fields.iter().fold(
            CreateEmbed::new()
                .title(&self.title)
                .description(&self.description)
                .color(self.color),
            |embed, (name, value)| embed.field(name, value, false),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyBody {
    Text(String),
    Embed(EmbedSpec),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub visibility: Visibility,
    pub body: ReplyBody,
}

impl Reply {
    pub fn public_text(text: impl Into<String>) -> Self {
        Self {
            visibility: Visibility::Public,
            body: ReplyBody::Text(text.into()),
        }
    }

    pub fn private_text(text: impl Into<String>) -> Self {
        Self {
            visibility: Visibility::Private,
            body: ReplyBody::Text(text.into()),
        }
    }

    pub fn embed(visibility: Visibility, embed: EmbedSpec) -> Self {
        Self {
            visibility,
            body: ReplyBody::Embed(embed),
        }
    }

    pub fn is_private(&self) -> bool {
        self.visibility == Visibility::Private
    }

    /// Every piece of user-visible text, concatenated. Handy for assertions and logs.
    pub fn plain_text(&self) -> String {
        match &self.body {
            ReplyBody::Text(text) => text.clone(),
            ReplyBody::Embed(embed) => {
                let mut out = format!("{}\n{}", embed.title, embed.description);
                for (name, value) in &embed.fields {
                    out.push('\n');
                    out.push_str(name);
                    out.push('\n');
                    out.push_str(value);
                }
                out
            }
        }
    }

    pub fn to_interaction_response(&self) -> CreateInteractionResponse {
        let msg = CreateInteractionResponseMessage::new().ephemeral(self.is_private());
        let msg = match &self.body {
            ReplyBody::Text(text) => msg.content(text),
            ReplyBody::Embed(embed) => msg.embed(embed.to_embed()),
        };
        CreateInteractionResponse::Message(msg)
    }

    /// Channel message form. Channel messages have no ephemeral mode, so visibility is ignored.
    pub fn to_message(&self) -> CreateMessage {
        match &self.body {
            ReplyBody::Text(text) => CreateMessage::new().content(text),
            ReplyBody::Embed(embed) => CreateMessage::new().embed(embed.to_embed()),
        }
    }
}

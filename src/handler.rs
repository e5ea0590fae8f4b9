use crate::commands;
use serenity::async_trait;
use serenity::client::Context;
use serenity::model::application::Interaction;
use serenity::model::{channel::Message, gateway::Ready, id::GuildId};
use serenity::prelude::EventHandler;
use std::str::FromStr;

/// Every slash command the bot registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlashCommand {
    AddTransaction,
    TotalTransaction,
    SetStock,
}

impl SlashCommand {
    pub const ALL: [SlashCommand; 3] = [
        SlashCommand::AddTransaction,
        SlashCommand::TotalTransaction,
        SlashCommand::SetStock,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SlashCommand::AddTransaction => commands::add_transaction::run::NAME,
            SlashCommand::TotalTransaction => commands::total_transaction::run::NAME,
            SlashCommand::SetStock => commands::stock::run::NAME,
        }
    }
}

impl FromStr for SlashCommand {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SlashCommand::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or(())
    }
}

pub struct Handler {
    pub allowed_guild_id: GuildId,
}

#[async_trait]
impl EventHandler for Handler {
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(command) = &interaction else {
            return;
        };
        match SlashCommand::from_str(command.data.name.as_str()) {
            Ok(SlashCommand::AddTransaction) => {
                commands::add_transaction::run::run_slash(&ctx, command).await
            }
            Ok(SlashCommand::TotalTransaction) => {
                commands::total_transaction::run::run_slash(&ctx, command).await
            }
            Ok(SlashCommand::SetStock) => commands::stock::run::run_slash(&ctx, command).await,
            Err(()) => {
                tracing::debug!(target="handler", name=%command.data.name, "unknown command");
            }
        }
    }

    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }
        commands::stock::run::run_prefix(&ctx, &msg).await;
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        tracing::info!(target="handler", user=%ready.user.tag(), "bot is connected and ready");
        let commands_to_register = vec![
            commands::add_transaction::register(),
            commands::total_transaction::register(),
            commands::stock::register(),
        ];
        match self
            .allowed_guild_id
            .set_commands(&ctx.http, commands_to_register)
            .await
        {
            Ok(registered) => tracing::info!(
                target="handler",
                guild_id=%self.allowed_guild_id,
                count=registered.len(),
                "registered guild commands"
            ),
            Err(e) => tracing::error!(
                target="handler",
                guild_id=%self.allowed_guild_id,
                error=?e,
                "error creating guild commands"
            ),
        }
    }
}

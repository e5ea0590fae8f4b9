//! Handles `/set_stock` and `!stock`.

use super::logic::{is_stock_trigger, set_stock, stock_report};
use crate::AppState;
use crate::commands::Caller;
use crate::commands::options::integer_option;
use crate::error::CommandError;
use crate::interactions::util::{reply_to_message, respond};
use serenity::builder::{CreateCommand, CreateCommandOption};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::model::channel::Message;
use serenity::model::permissions::Permissions;
use serenity::prelude::*;

pub const NAME: &str = "set_stock";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Ubah jumlah stock robux (admin only)")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Integer,
                "jumlah",
                "Jumlah stock baru (contoh: 52000)",
            )
            .required(true),
        )
        .default_member_permissions(Permissions::ADMINISTRATOR)
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        tracing::warn!(command = NAME, "missing_app_state");
        return;
    };
    let caller = Caller::from_interaction(interaction);
    let result = match integer_option(interaction, "jumlah") {
        Some(value) => set_stock(&app_state, &caller, value).await,
        None => Err(CommandError::MissingOption("jumlah").into()),
    };
    respond(ctx, interaction, NAME, result).await;
}

/// Answers `!stock`; any other message is ignored.
pub async fn run_prefix(ctx: &Context, msg: &Message) {
    if !is_stock_trigger(&msg.content) {
        return;
    }
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        tracing::warn!(command = "stock", "missing_app_state");
        return;
    };
    let result = stock_report(&app_state).await.map_err(Into::into);
    reply_to_message(ctx, msg, "stock", result).await;
}

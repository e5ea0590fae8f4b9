//! Handles the command logic for `/total_transaksi`.

use super::logic::query_total;
use crate::AppState;
use crate::commands::Caller;
use crate::commands::options::user_option;
use crate::interactions::util::respond;
use serenity::builder::{CreateCommand, CreateCommandOption};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::prelude::*;

pub const NAME: &str = "total_transaksi";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Lihat total transaksi kamu atau user lain (admin only)")
        .add_option(
            CreateCommandOption::new(CommandOptionType::User, "user", "User target")
                .required(false),
        )
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        tracing::warn!(command = NAME, "missing_app_state");
        return;
    };
    let caller = Caller::from_interaction(interaction);
    let target = user_option(interaction, "user");
    let result = query_total(&app_state, &caller, target.as_ref()).await;
    respond(ctx, interaction, NAME, result).await;
}

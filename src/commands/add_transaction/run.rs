//! Handles the command logic for `/add_transaksi`.

use super::logic::add_transaction;
use crate::AppState;
use crate::commands::Caller;
use crate::commands::options::{integer_option, string_option, user_option};
use crate::error::CommandError;
use crate::interactions::util::respond;
use serenity::builder::{CreateCommand, CreateCommandOption};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::model::permissions::Permissions;
use serenity::prelude::*;

pub const NAME: &str = "add_transaksi";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Tambah transaksi customer (hanya admin)")
        .add_option(
            CreateCommandOption::new(CommandOptionType::User, "user", "Customer").required(true),
        )
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "item", "Nama barang")
                .required(true),
        )
        .add_option(
            CreateCommandOption::new(CommandOptionType::Integer, "harga", "Harga barang")
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

    let result = match (
        user_option(interaction, "user"),
        string_option(interaction, "item"),
        integer_option(interaction, "harga"),
    ) {
        (Some(target), Some(item), Some(price)) => {
            add_transaction(
                &app_state,
                &caller,
                &target,
                item,
                price,
                chrono::Local::now(),
            )
            .await
        }
        (None, _, _) => Err(CommandError::MissingOption("user").into()),
        (_, None, _) => Err(CommandError::MissingOption("item").into()),
        (_, _, None) => Err(CommandError::MissingOption("harga").into()),
    };
    respond(ctx, interaction, NAME, result).await;
}

//! Contains the core logic for reading and updating the Robux stock.

use crate::AppState;
use crate::commands::Caller;
use crate::error::{CommandError, HandlerError, StoreError};
use crate::ui::format::{CurrencyFormatter, ROBUX};
use crate::ui::style::{EMOJI_OK, STOCK_REFRESH_NOTICE, STOCK_TITLE};
use crate::ui::{EmbedSpec, Reply, Visibility};
use tracing::info;

pub const STOCK_TRIGGER: &str = "!stock";

/// Case-insensitive exact match on the trigger; surrounding whitespace is ignored.
pub fn is_stock_trigger(content: &str) -> bool {
    content.trim().to_lowercase() == STOCK_TRIGGER
}

pub async fn set_stock(
    state: &AppState,
    caller: &Caller,
    new_value: i64,
) -> Result<Reply, HandlerError> {
    if !caller.is_admin {
        return Err(CommandError::Unauthorized {
            action: "mengubah stock",
        }
        .into());
    }
    let record = state.stock.set(new_value).await?;
    info!(target = "command.set_stock", admin = %caller.id, stock = record.stock, "stock updated");
    Ok(Reply::public_text(format!(
        "{EMOJI_OK} Stock berhasil diubah menjadi: **{}**",
        state.formatter.currency(ROBUX, record.stock)
    )))
}

/// Public embed showing the current stock. Available to everyone.
pub async fn stock_report(state: &AppState) -> Result<Reply, StoreError> {
    let record = state.stock.load().await?;
    let description = format!(
        "**Stock robux tersedia saat ini:** {}\n\n{}",
        state.formatter.currency(ROBUX, record.stock),
        STOCK_REFRESH_NOTICE
    );
    Ok(Reply::embed(
        Visibility::Public,
        EmbedSpec::new(STOCK_TITLE, description),
    ))
}

//! Contains the core logic for the `/add_transaksi` command.

use crate::AppState;
use crate::commands::{Caller, Customer};
use crate::database::models::TransactionRecord;
use crate::error::{CommandError, HandlerError};
use crate::ui::Reply;
use crate::ui::format::{CurrencyFormatter, RUPIAH};
use crate::ui::style::EMOJI_OK;
use chrono::{DateTime, Local};
use tracing::info;

/// Appends a purchase for `target`. Only administrators may record purchases.
pub async fn add_transaction(
    state: &AppState,
    caller: &Caller,
    target: &Customer,
    item: &str,
    price: i64,
    now: DateTime<Local>,
) -> Result<Reply, HandlerError> {
    if !caller.is_admin {
        return Err(CommandError::Unauthorized {
            action: "menambah transaksi",
        }
        .into());
    }

    let fmt = state.formatter.as_ref();
    let record = TransactionRecord {
        item: item.to_string(),
        price,
        date: fmt.timestamp(now),
    };
    state.transactions.append(&target.id, record).await?;
    info!(target = "command.add_transaksi", admin = %caller.id, customer = %target.id, item, price, "transaction recorded");

    Ok(Reply::public_text(format!(
        "{EMOJI_OK} Transaksi berhasil ditambahkan untuk **{}**:\n> Barang: **{}**\n> Harga: {}",
        target.name,
        item,
        fmt.currency(RUPIAH, price)
    )))
}

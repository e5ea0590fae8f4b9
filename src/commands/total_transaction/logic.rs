//! Authorization branching and rendering for `/total_transaksi`.
//!
//! | caller    | `user` given | outcome                                   |
//! |-----------|--------------|-------------------------------------------|
//! | member    | yes          | `Forbidden`                               |
//! | member    | no           | own list, private                         |
//! | admin     | no           | `MissingArgument`                         |
//! | admin     | yes          | target's list, public                     |
//!
//! An empty history is an informational reply, never an error. Its visibility follows
//! the branch: private for a self-query, public for an admin looking up someone else.

use crate::AppState;
use crate::commands::{Caller, Customer};
use crate::database::models::TransactionRecord;
use crate::error::{CommandError, HandlerError};
use crate::ui::format::{CurrencyFormatter, RUPIAH, format_transaction_list, total_price};
use crate::ui::style::{EMOJI_BOX, EMOJI_EMPTY, TOTAL_FIELD_NAME};
use crate::ui::{EmbedSpec, Reply, Visibility};

pub async fn query_total(
    state: &AppState,
    caller: &Caller,
    target: Option<&Customer>,
) -> Result<Reply, HandlerError> {
    let fmt = state.formatter.as_ref();
    match (caller.is_admin, target) {
        (false, Some(_)) => Err(CommandError::Forbidden.into()),
        (false, None) => {
            let records = state.transactions.records_for(&caller.id).await?;
            if records.is_empty() {
                return Ok(Reply::private_text(format!(
                    "{EMOJI_EMPTY} Kamu belum punya transaksi."
                )));
            }
            Ok(Reply::embed(
                Visibility::Private,
                transaction_embed(format!("{EMOJI_BOX} List Transaksi Kamu"), &records, fmt),
            ))
        }
        (true, None) => Err(CommandError::MissingArgument.into()),
        (true, Some(target)) => {
            let records = state.transactions.records_for(&target.id).await?;
            if records.is_empty() {
                return Ok(Reply::public_text(format!(
                    "{EMOJI_EMPTY} {} belum punya transaksi.",
                    target.name
                )));
            }
            Ok(Reply::embed(
                Visibility::Public,
                transaction_embed(
                    format!("{EMOJI_BOX} List Transaksi - {}", target.name),
                    &records,
                    fmt,
                ),
            ))
        }
    }
}

fn transaction_embed(
    title: String,
    records: &[TransactionRecord],
    fmt: &dyn CurrencyFormatter,
) -> EmbedSpec {
    EmbedSpec::new(title, format_transaction_list(records, fmt)).field(
        TOTAL_FIELD_NAME,
        fmt.currency(RUPIAH, total_price(records)),
    )
}

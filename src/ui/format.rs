//! Locale-aware rendering of amounts, timestamps, and transaction lists.

use crate::database::models::TransactionRecord;
use chrono::{DateTime, Datelike, Local, Timelike};

pub const RUPIAH: &str = "Rp";
pub const ROBUX: &str = "R$";

/// Swappable number/date presentation used by every reply.
pub trait CurrencyFormatter: Send + Sync {
    /// Digit-grouped integer without decimals.
    fn group(&self, amount: i64) -> String;

    /// Long date with short time.
    fn timestamp(&self, at: DateTime<Local>) -> String;

    fn currency(&self, prefix: &str, amount: i64) -> String {
        format!("{prefix} {}", self.group(amount))
    }
}

/// Indonesian (`id-ID`) conventions: `15.000`, `18 Oktober 2026 pukul 20.38`.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdLocale;

const MONTHS_ID: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

impl CurrencyFormatter for IdLocale {
    fn group(&self, amount: i64) -> String {
        let digits = amount.unsigned_abs().to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
        if amount < 0 {
            out.push('-');
        }
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push('.');
            }
            out.push(ch);
        }
        out
    }

    fn timestamp(&self, at: DateTime<Local>) -> String {
        format!(
            "{} {} {} pukul {:02}.{:02}",
            at.day(),
            MONTHS_ID[at.month0() as usize],
            at.year(),
            at.hour(),
            at.minute()
        )
    }
}

/// Sum of all prices; saturates instead of overflowing on absurd inputs.
pub fn total_price(records: &[TransactionRecord]) -> i64 {
    records
        .iter()
        .fold(0i64, |acc, r| acc.saturating_add(r.price))
}

/// Discord rejects embed descriptions longer than this many characters.
pub const EMBED_DESCRIPTION_LIMIT: usize = 4096;

/// Numbered entries in storage order, separated by a blank line, cut to fit an embed.
pub fn format_transaction_list(records: &[TransactionRecord], fmt: &dyn CurrencyFormatter) -> String {
    format_transaction_list_within(records, fmt, EMBED_DESCRIPTION_LIMIT)
}

/// Like [`format_transaction_list`] but bounded to `limit` characters. Entries that don't fit
/// are replaced by a trailing note counting them.
pub fn format_transaction_list_within(
    records: &[TransactionRecord],
    fmt: &dyn CurrencyFormatter,
    limit: usize,
) -> String {
    let entries: Vec<String> = records
        .iter()
        .enumerate()
        .map(|(i, r)| {
            format!(
                "**{}.** {}\nHarga: {}\nTanggal: {}",
                i + 1,
                r.item,
                fmt.currency(RUPIAH, r.price),
                r.date
            )
        })
        .collect();

    let full = entries.join("\n\n");
    if full.chars().count() <= limit {
        return full;
    }

    let mut out = String::new();
    let mut used = 0;
    let mut shown = 0;
    for entry in &entries {
        let sep = if shown == 0 { 0 } else { 2 };
        let note_len = omitted_note(entries.len() - shown - 1).chars().count() + 2;
        let entry_len = entry.chars().count();
        if used + sep + entry_len + note_len > limit {
            break;
        }
        if sep > 0 {
            out.push_str("\n\n");
        }
        out.push_str(entry);
        used += sep + entry_len;
        shown += 1;
    }
    if shown > 0 {
        out.push_str("\n\n");
    }
    out.push_str(&omitted_note(entries.len() - shown));
    out
}

fn omitted_note(count: usize) -> String {
    format!("_…dan {count} transaksi lainnya._")
}

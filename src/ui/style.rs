//! Central UI style constants.
pub const COLOR_STORE: u32 = 0x00FF88; // Green

pub const EMOJI_OK: &str = "✅";
pub const EMOJI_BOX: &str = "📦";
pub const EMOJI_EMPTY: &str = "📭";

pub const STOCK_TITLE: &str = "📦 STOCK ROBUX";
pub const STOCK_REFRESH_NOTICE: &str = "*Stock otomatis diupdate setiap 25 menit sekali.*";
pub const TOTAL_FIELD_NAME: &str = "💰 Total Transaksi";

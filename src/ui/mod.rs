//! Reply values, styling, and locale formatting shared by all commands.
pub mod format;
pub mod reply;
pub mod style;

pub use format::{CurrencyFormatter, IdLocale};
pub use reply::{EmbedSpec, Reply, ReplyBody, Visibility};

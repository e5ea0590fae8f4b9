//! Implements the `/total_transaksi` command.

pub mod logic;
pub mod run;

pub use run::register;

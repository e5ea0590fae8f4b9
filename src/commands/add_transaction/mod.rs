//! Implements the `/add_transaksi` command for recording a purchase.

pub mod logic;
pub mod run;

pub use run::register;

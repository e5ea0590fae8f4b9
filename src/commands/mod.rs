// src/commands/mod.rs
// One directory per command: `logic.rs` holds the decision making, `run.rs` the Discord glue.

pub mod add_transaction;
pub mod options;
pub mod stock;
pub mod total_transaction;

pub use options::{Caller, Customer};

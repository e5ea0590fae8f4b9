//! Implements `/set_stock` and the passive `!stock` trigger.

pub mod logic;
pub mod run;

pub use run::register;

// Library entry so integration tests can reference internal modules.
// The binary (`main.rs`) only wires configuration, logging, and the Discord client.
pub mod commands;
pub mod config;
pub mod database;
pub mod error;
pub mod handler;
pub mod interactions;
pub mod model;
pub mod ui;

pub use model::AppState;

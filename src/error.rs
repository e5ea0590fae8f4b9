//! Error types shared by the stores, the command logic, and startup.

use std::path::PathBuf;
use thiserror::Error;

/// Failure reading or writing one of the JSON documents.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn json(path: &std::path::Path, source: serde_json::Error) -> Self {
        StoreError::Json {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Rejections surfaced to the caller as a private reply.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("🚫 Hanya admin yang bisa {action}!")]
    Unauthorized { action: &'static str },
    #[error("🚫 Kamu tidak bisa melihat transaksi orang lain!")]
    Forbidden,
    #[error("⚠️ Admin harus memilih user untuk melihat total transaksinya.")]
    MissingArgument,
    /// A required option was absent from the interaction payload.
    #[error("⚠️ Opsi `{0}` wajib diisi.")]
    MissingOption(&'static str),
}

/// Anything a command handler can fail with.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("expected {0} in the environment")]
    Missing(&'static str),
    #[error("{name} must be a valid number, got {value:?}")]
    Invalid { name: &'static str, value: String },
}

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong before a scan starts.
///
/// Scans themselves never fail; these errors come from supplying their input.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid tag name {0:?}: expected an identifier like `div` or `Motion.div`")]
    InvalidToken(String),

    #[error("invalid line window {0:?}: expected FIRST:LAST with 1-based line numbers")]
    InvalidWindow(String),

    #[error("no window named {0:?} in config")]
    UnknownWindow(String),

    #[error("failed to parse config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

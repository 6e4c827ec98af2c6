//! Error types for the simulator binary.
//!
//! [`AppError`] wraps the failures that end the program. Rejected user
//! input never becomes an [`AppError`]: the shell reports it and keeps the
//! previous session state.

/// Top-level error for the simulator binary.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: foodchain_core::ConfigError,
    },

    /// Reading commands or writing output failed.
    #[error("terminal I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// The chain could not be serialized for the `json` command.
    #[error("json error: {source}")]
    Json {
        /// The underlying serialization error.
        #[from]
        source: serde_json::Error,
    },
}

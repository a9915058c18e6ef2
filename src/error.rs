//! Error types for the identity resolver

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing required environment variable: {0}")]
    MissingConfig(&'static str),

    #[error("Invalid value for {key}: {reason}")]
    InvalidConfig { key: &'static str, reason: String },

    #[error("Session file error ({path}): {source}")]
    SessionIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failure reported by the Telegram client, passed through verbatim.
    #[error("{0}")]
    TelegramError(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Authorization failed: {0}")]
    AuthorizationFailed(String),

    #[error("No user has \"{0}\" as username")]
    UsernameNotFound(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<grammers_client::InvocationError> for Error {
    fn from(err: grammers_client::InvocationError) -> Self {
        Error::TelegramError(err.to_string())
    }
}

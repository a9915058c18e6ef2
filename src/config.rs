//! Configuration for the Telegram API credentials and the session file
//!
//! Loaded once at startup from the process environment (and `.env`), then
//! passed explicitly to whatever needs it.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Default session file name, stored beside the executable
pub const SESSION_FILE_NAME: &str = "session.txt";

pub const API_ID_VAR: &str = "API_ID";
pub const API_HASH_VAR: &str = "API_HASH";
pub const PHONE_VAR: &str = "TELEGRAM_PHONE";
pub const SESSION_FILE_VAR: &str = "SESSION_FILE";

/// Application credentials issued by my.telegram.org
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_id: i32,
    pub api_hash: String,
}

/// Main configuration struct
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    pub session_file: PathBuf,
    /// Phone number for interactive login; prompted for when absent
    pub phone: Option<String>,
}

impl Config {
    /// Load `.env`, then read configuration from the process environment.
    ///
    /// An explicit `session_file` takes precedence over `SESSION_FILE`.
    pub fn load(session_file: Option<PathBuf>) -> Result<Self> {
        Self::load_dotenv();
        Self::from_lookup(|key| env::var(key).ok(), session_file)
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F, session_file: Option<PathBuf>) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_id = lookup(API_ID_VAR).ok_or(Error::MissingConfig(API_ID_VAR))?;
        let api_id = api_id
            .trim()
            .parse::<i32>()
            .map_err(|e| Error::InvalidConfig {
                key: API_ID_VAR,
                reason: e.to_string(),
            })?;

        let api_hash = lookup(API_HASH_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(Error::MissingConfig(API_HASH_VAR))?;

        let phone = lookup(PHONE_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        let session_file = session_file
            .or_else(|| lookup(SESSION_FILE_VAR).filter(|v| !v.is_empty()).map(PathBuf::from))
            .unwrap_or_else(default_session_file);

        Ok(Self {
            credentials: Credentials { api_id, api_hash },
            session_file,
            phone,
        })
    }

    /// Load .env file into environment variables using dotenvy
    fn load_dotenv() {
        // Current directory and its parents first, then beside the executable
        if dotenvy::dotenv().is_err() {
            if let Some(dir) = executable_dir() {
                let _ = dotenvy::from_path(dir.join(".env"));
            }
        }
    }
}

fn executable_dir() -> Option<PathBuf> {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
}

/// `session.txt` next to the running binary, or in the working directory
/// when the executable path cannot be determined.
pub fn default_session_file() -> PathBuf {
    executable_dir()
        .map(|dir| dir.join(SESSION_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(SESSION_FILE_NAME))
}

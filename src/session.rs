//! Session persistence for the Telegram client
//!
//! Provides:
//! - A plain-text session file holding zero or one opaque token
//! - Tolerant loading (any read failure means "start fresh")
//! - Wholesale overwrite on save
//!
//! There is no locking: two concurrent runs share the file and the last
//! writer wins.

use std::fmt;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Opaque session token. Empty means no session has been stored yet.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Tokens are credentials; keep them out of logs.
impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SessionToken")
            .field(&format_args!("<{} bytes>", self.0.len()))
            .finish()
    }
}

/// What the client should start from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionHandle {
    /// No stored session, a new login may be required
    Fresh,
    /// Resume a previously authorized session
    Resume(SessionToken),
}

impl SessionHandle {
    pub fn from_token(token: SessionToken) -> Self {
        if token.is_empty() {
            SessionHandle::Fresh
        } else {
            SessionHandle::Resume(token)
        }
    }
}

/// File-backed store for a single session token.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the session file empty if it does not exist yet.
    pub fn ensure_exists(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }
        OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .map(|_| ())
            .map_err(|source| self.io_error(source))
    }

    /// Read the stored token, trimmed. Read failures fall back to an empty token.
    pub fn load(&self) -> SessionToken {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = SessionToken::new(contents.trim());
                debug!(path = %self.path.display(), empty = token.is_empty(), "Loaded session file");
                token
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Could not read session file, starting fresh");
                SessionToken::empty()
            }
        }
    }

    /// Overwrite the session file with `token`.
    pub fn save(&self, token: &SessionToken) -> Result<()> {
        fs::write(&self.path, token.as_str()).map_err(|source| self.io_error(source))?;
        debug!(path = %self.path.display(), "Saved session file");
        Ok(())
    }

    fn io_error(&self, source: std::io::Error) -> Error {
        Error::SessionIo {
            path: self.path.display().to_string(),
            source,
        }
    }
}

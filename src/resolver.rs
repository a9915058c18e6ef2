//! Username → account id resolution backed by a persisted session

use std::io::Write;

use tracing::{debug, info};

use crate::config::{Config, Credentials};
use crate::error::Result;
use crate::session::{SessionHandle, SessionStore};
use crate::telegram::{Account, TelegramConnection, TelegramService};

/// Strip a single leading `@`.
pub fn normalize_username(username: &str) -> &str {
    username.strip_prefix('@').unwrap_or(username)
}

pub struct Resolver<S> {
    credentials: Credentials,
    store: SessionStore,
    service: S,
}

impl<S: TelegramService> Resolver<S> {
    pub fn new(config: &Config, service: S) -> Self {
        Self {
            credentials: config.credentials.clone(),
            store: SessionStore::new(&config.session_file),
            service,
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Resolve `username`, write the id as one line to `out`, then persist
    /// the session the connection ended up with.
    ///
    /// The session file is only written after a successful lookup.
    pub async fn resolve<W: Write>(&self, username: &str, out: &mut W) -> Result<Account> {
        let username = normalize_username(username);

        self.store.ensure_exists()?;
        let handle = SessionHandle::from_token(self.store.load());
        debug!(resume = matches!(handle, SessionHandle::Resume(_)), "Session handle ready");

        let connection = self.service.connect(handle, &self.credentials).await?;
        connection.ensure_authorized().await?;

        let account = connection.resolve_username(username).await?;
        info!(username, id = account.id, "Resolved username");

        writeln!(out, "{}", account.id)?;
        out.flush()?;

        self.store.save(&connection.export_session())?;
        Ok(account)
    }
}

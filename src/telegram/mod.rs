//! The Telegram client seam
//!
//! Everything protocol-related (transport, key exchange, login flows, flood
//! waits) lives in the client library. The resolver only needs three things
//! from it: open a connection from a session, make sure it is authorized, and
//! turn a username into an account.

mod client;

pub use client::{GrammersConnection, GrammersService};

use crate::config::Credentials;
use crate::error::Result;
use crate::session::{SessionHandle, SessionToken};

/// Account record returned by a username lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: i64,
    pub username: Option<String>,
}

/// Opens connections to Telegram.
///
/// The connection is released when the returned value is dropped, so every
/// exit path (including `?` early returns) closes it.
#[allow(async_fn_in_trait)]
pub trait TelegramService {
    type Connection: TelegramConnection;

    async fn connect(
        &self,
        session: SessionHandle,
        credentials: &Credentials,
    ) -> Result<Self::Connection>;
}

/// An open, possibly unauthorized, connection.
#[allow(async_fn_in_trait)]
pub trait TelegramConnection {
    /// Log in if the session is not authorized yet. May prompt the user.
    async fn ensure_authorized(&self) -> Result<()>;

    async fn resolve_username(&self, username: &str) -> Result<Account>;

    /// Serialize the current session state, which may differ from the one
    /// the connection started with.
    fn export_session(&self) -> SessionToken;
}

//! grammers-backed implementation of the Telegram seam

use std::io::{self, Write};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use grammers_client::{Client, Config as ClientConfig, InitParams, SignInError};
use grammers_session::Session;
use tracing::{debug, info, warn};

use super::{Account, TelegramConnection, TelegramService};
use crate::config::Credentials;
use crate::error::{Error, Result};
use crate::session::{SessionHandle, SessionToken};

/// Connects through grammers using the MTProto API.
#[derive(Debug, Clone, Default)]
pub struct GrammersService {
    phone: Option<String>,
}

impl GrammersService {
    /// `phone` is used for a first login; without it the user is prompted.
    pub fn new(phone: Option<String>) -> Self {
        Self { phone }
    }
}

impl TelegramService for GrammersService {
    type Connection = GrammersConnection;

    async fn connect(
        &self,
        session: SessionHandle,
        credentials: &Credentials,
    ) -> Result<GrammersConnection> {
        let session = match &session {
            SessionHandle::Fresh => Session::new(),
            SessionHandle::Resume(token) => decode_token(token).unwrap_or_else(|| {
                warn!("Stored session token is not usable, starting a fresh session");
                Session::new()
            }),
        };

        let client = Client::connect(ClientConfig {
            session,
            api_id: credentials.api_id,
            api_hash: credentials.api_hash.clone(),
            params: InitParams::default(),
        })
        .await
        .map_err(|e| Error::ConnectionError(e.to_string()))?;

        info!("Connected to Telegram");

        Ok(GrammersConnection {
            client,
            phone: self.phone.clone(),
        })
    }
}

/// Live grammers client. Dropping it closes the connection.
pub struct GrammersConnection {
    client: Client,
    phone: Option<String>,
}

impl TelegramConnection for GrammersConnection {
    async fn ensure_authorized(&self) -> Result<()> {
        if self.client.is_authorized().await? {
            debug!("Session already authorized");
            return Ok(());
        }

        info!("Session is not authorized, starting login");

        let phone = match &self.phone {
            Some(phone) => phone.clone(),
            None => prompt("Please enter your phone (international format): ")?,
        };

        let token = self
            .client
            .request_login_code(&phone)
            .await
            .map_err(|e| Error::AuthorizationFailed(e.to_string()))?;

        let code = prompt("Please enter the code you received: ")?;

        let user = match self.client.sign_in(&token, &code).await {
            Ok(user) => user,
            Err(SignInError::PasswordRequired(password_token)) => {
                let hint = password_token.hint().unwrap_or("none").to_string();
                let password = prompt(&format!("Please enter your password (hint: {}): ", hint))?;
                self.client
                    .check_password(password_token, password.as_bytes())
                    .await
                    .map_err(|e| Error::AuthorizationFailed(e.to_string()))?
            }
            Err(e) => return Err(Error::AuthorizationFailed(e.to_string())),
        };

        info!(user_id = user.id(), "Signed in");
        Ok(())
    }

    async fn resolve_username(&self, username: &str) -> Result<Account> {
        let chat = self
            .client
            .resolve_username(username)
            .await?
            .ok_or_else(|| Error::UsernameNotFound(username.to_string()))?;

        Ok(Account {
            id: chat.id(),
            username: chat.username().map(str::to_string),
        })
    }

    fn export_session(&self) -> SessionToken {
        encode_session(self.client.session())
    }
}

impl Drop for GrammersConnection {
    fn drop(&mut self) {
        debug!("Closing Telegram connection");
    }
}

/// Session bytes as a standard base64 string.
fn encode_session(session: &Session) -> SessionToken {
    SessionToken::new(STANDARD.encode(session.save()))
}

fn decode_token(token: &SessionToken) -> Option<Session> {
    let bytes = STANDARD.decode(token.as_str()).ok()?;
    Session::load(&bytes).ok()
}

/// Ask on stderr so stdout only ever carries the result line.
fn prompt(message: &str) -> Result<String> {
    let mut stderr = io::stderr();
    stderr.write_all(message.as_bytes())?;
    stderr.flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

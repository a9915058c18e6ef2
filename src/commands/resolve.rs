//! `get_telegram_id <username>` command
//!
//! Maps the resolver result onto the command-line contract: everything the
//! user sees goes to the given writer (stdout), errors included.

use std::io::Write;

use tracing::error;

use crate::config::Config;
use crate::resolver::Resolver;
use crate::telegram::TelegramService;

pub const USAGE: &str = "Usage: get_telegram_id <username>";

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Resolved(i64),
    Usage,
    Failed(String),
}

impl Outcome {
    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::Resolved(_) => 0,
            Outcome::Usage => 1,
            Outcome::Failed(_) => 2,
        }
    }
}

/// Print the usage line for a missing username.
pub fn usage<W: Write>(out: &mut W) -> Outcome {
    let _ = writeln!(out, "{}", USAGE);
    Outcome::Usage
}

/// Resolve `username` and report the result on `out`.
pub async fn run<S, W>(config: &Config, service: S, username: &str, out: &mut W) -> Outcome
where
    S: TelegramService,
    W: Write,
{
    let resolver = Resolver::new(config, service);

    match resolver.resolve(username, out).await {
        Ok(account) => Outcome::Resolved(account.id),
        Err(e) => {
            error!(error = ?e, "Resolution failed");
            let message = e.to_string();
            let _ = writeln!(out, "ERROR: {}", message);
            Outcome::Failed(message)
        }
    }
}

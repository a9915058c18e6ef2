//! Telegram username → account id resolver
//!
//! This library provides tools to:
//! - Load API credentials from the environment and `.env`
//! - Persist the client session as an opaque token in a local file
//! - Resolve a username to its numeric account id through grammers

pub mod config;
pub mod error;
pub mod resolver;
pub mod session;
pub mod telegram;

// Re-export common types
pub use config::{Config, Credentials};
pub use error::{Error, Result};
pub use resolver::{normalize_username, Resolver};
pub use session::{SessionHandle, SessionStore, SessionToken};
pub use telegram::{Account, GrammersService, TelegramConnection, TelegramService};

pub mod commands;

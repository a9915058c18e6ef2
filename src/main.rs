//! get_telegram_id - print the numeric id behind a Telegram username
//!
//! Usage: `get_telegram_id <username>`
//!
//! Exit codes: 0 resolved, 1 usage, 2 lookup failed.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use telegram_id::commands::resolve;
use telegram_id::{Config, GrammersService};

#[derive(Parser)]
#[command(name = "get_telegram_id")]
#[command(about = "Resolve a Telegram username to its numeric account id", long_about = None)]
#[command(version)]
struct Cli {
    /// Username to resolve, with or without a leading @
    username: Option<String>,

    /// Session file (defaults to session.txt beside the executable)
    #[arg(long, env = "SESSION_FILE")]
    session_file: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    // Logs go to stderr; stdout is reserved for the result line
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("telegram_id=warn".parse()?),
        )
        .with_writer(io::stderr)
        .init();

    let mut stdout = io::stdout();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(_) => return Ok(ExitCode::from(resolve::usage(&mut stdout).exit_code())),
    };

    let Some(username) = cli.username else {
        return Ok(ExitCode::from(resolve::usage(&mut stdout).exit_code()));
    };

    let config = Config::load(cli.session_file)?;
    let service = GrammersService::new(config.phone.clone());

    let outcome = resolve::run(&config, service, &username, &mut stdout).await;
    Ok(ExitCode::from(outcome.exit_code()))
}

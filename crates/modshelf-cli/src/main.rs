//! CLI entry point - the composition root.
//!
//! Resolves configuration, loads the catalog and hands control to the
//! shell. There are no command-line flags; everything after startup is
//! read interactively.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use modshelf_cli::{CliError, EditorLines, Session, ShellConfig, Shell, load_catalog};
use modshelf_core::{LineSource, ReaderLines, TokenQueue};

/// Log filter override, checked before `RUST_LOG`.
const LOG_ENV: &str = "MODSHELF_LOG";

fn main() -> ExitCode {
    // Load environment variables
    dotenvy::dotenv().ok();

    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            err.downcast_ref::<CliError>()
                .map_or(ExitCode::FAILURE, |cli| ExitCode::from(cli.exit_code()))
        }
    }
}

fn init_tracing() {
    let filter = std::env::var(LOG_ENV)
        .ok()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run() -> Result<()> {
    let config = ShellConfig::from_env()?;
    tracing::debug!(?config, "Resolved configuration");

    let catalog = load_catalog(&config, &mut io::stdout().lock())?;

    let source: Box<dyn LineSource> = if io::stdin().is_terminal() {
        Box::new(EditorLines::new(Some(config.history_file.clone())).map_err(CliError::from)?)
    } else {
        Box::new(ReaderLines::new(io::stdin().lock(), io::stdout()))
    };

    let session = Session::new(
        Box::new(catalog),
        TokenQueue::new(source),
        Box::new(io::stdout()),
    );
    Shell::new(session).run().map_err(CliError::from)?;
    Ok(())
}

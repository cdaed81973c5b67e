//! Terminal map viewer entry point.
use anyhow::Result;
use client_frontend_cli::presentation::TerminalSession;
use client_frontend_cli::{CliConfig, ViewerApp, logging};

fn main() -> Result<()> {
    // A missing .env file is fine.
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();
    let guard = logging::init(config.log_dir.as_deref())?;
    tracing::info!(log = %guard.path().display(), "map viewer starting");

    let app = ViewerApp::load(&config)?;
    let mut session = TerminalSession::open()?;
    app.run(session.terminal())
}

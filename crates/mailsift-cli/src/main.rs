//! mailsift - inbox attachment download and analysis tool.

mod cli;
mod commands {
    pub mod analyze;
    pub mod download;
}

use clap::Parser;
use cli::{Cli, Command};
use mailsift_core::StdoutEmitter;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing; logs go to stderr so emitted JSON stays parseable
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    let cli = Cli::parse();
    let emitter = StdoutEmitter::new();

    match cli.cmd {
        Command::Download {
            message_id,
            out_dir,
            attachment_id,
            inbox,
        } => commands::download::run(message_id, out_dir, attachment_id, inbox, &emitter).await,
        Command::Analyze { path, max_chars } => {
            commands::analyze::run(path, max_chars, &emitter).await
        }
    }
}

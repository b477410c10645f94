//! depmap CLI binary.

use anyhow::Result;
use depmap::cli::Cli;
use tracing_subscriber::EnvFilter;

/// Main entry point for the depmap CLI.
///
/// Uses tokio's current_thread runtime; every command is a single sequential
/// load-analyze-print pass.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Controlled via RUST_LOG, e.g. RUST_LOG=depmap=debug
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("depmap=info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::debug!("Starting depmap CLI");

    let cli = Cli::parse_args();
    cli.execute().await?;

    tracing::debug!("depmap CLI completed successfully");
    Ok(())
}

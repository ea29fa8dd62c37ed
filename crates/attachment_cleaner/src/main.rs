//! Attachment Cleaner CLI binary.
//!
//! Deletes stale, unattached uploads from a WordPress site. Runs in dry-run
//! mode unless `WPAC_MODE=dangerous`.

use clap::Parser;

mod cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use attachment_cleaner::{CleanerConfig, init_logging};
    use cli::{Cli, run_cleaner};

    let cli = Cli::parse();

    // Credentials and mode usually live in .env next to the binary
    dotenvy::dotenv().ok();

    let config = CleanerConfig::load(cli.config.as_deref())?;

    let log_file = cli.log_file.as_deref().unwrap_or(config.log_file().as_path());
    init_logging(log_file, cli.verbose)?;

    run_cleaner(&cli, &config).await?;

    Ok(())
}

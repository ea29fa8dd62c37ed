//! Cleaning run command handler.

use super::{Cli, OutputFormat};
use attachment_cleaner::{
    CleanerConfig, CleanerResult, JsonError, RunOptions, RunSummary, WordPressClient, run,
};

/// Execute one run against the configured site and print its summary.
pub async fn run_cleaner(cli: &Cli, config: &CleanerConfig) -> CleanerResult<()> {
    let client = WordPressClient::new(config.base_url(), config.credentials())?;
    let options = RunOptions::from_config(config, cli.limit);

    tracing::info!(
        base_url = %config.base_url(),
        mode = %options.mode(),
        "Starting attachment cleanup"
    );

    let summary = run(&client, &options).await?;
    print_summary(&summary, cli.format)
}

fn print_summary(summary: &RunSummary, format: OutputFormat) -> CleanerResult<()> {
    match format {
        OutputFormat::Human => {
            let report = summary.report();
            println!(
                "[{}] fetched {}, candidates {}: {} simulated, {} deleted, {} rejected",
                report.mode(),
                summary.fetched(),
                summary.candidates(),
                report.simulated(),
                report.succeeded(),
                report.rejected()
            );
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(summary)
                .map_err(|e| JsonError::new(format!("Failed to serialize summary: {}", e)))?;
            println!("{}", json);
        }
    }
    Ok(())
}

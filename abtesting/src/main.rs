//! Command line client for the console A/B testing API

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use abtesting::{ABHitAction, ABHttpApi, ABTestApi, HitReporter};
use shared::config::AB_TESTING_ROOT;
use shared::{ApiEndpoint, ComponentId, logging};

#[derive(Parser, Debug)]
#[command(name = "ab-client")]
#[command(about = "Query console A/B test flags and report hits")]
struct Args {
    /// Console base URL
    #[arg(long, env = "AB_API_BASE_URL", default_value = "http://127.0.0.1:10000")]
    base_url: String,

    /// API root below the base URL
    #[arg(long, default_value = AB_TESTING_ROOT)]
    root_path: String,

    /// Request timeout in milliseconds
    #[arg(long, default_value = "10000")]
    timeout_ms: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch the current flag values and print them as JSON
    Values,
    /// Report a UI event
    Hit {
        /// upgrade_account_clicked, banner_viewed or banner_clicked
        action: ABHitAction,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    logging::init_tracing(ComponentId::AbClient, Some(&args.log_level));

    let endpoint = ApiEndpoint::new(&args.base_url, &args.root_path)?
        .with_timeout(Duration::from_millis(args.timeout_ms));
    let api = Arc::new(ABHttpApi::new(endpoint)?);

    match args.command {
        Command::Values => {
            let values = api
                .fetch_values()
                .await
                .context("Session expired, log in to the console again")?;
            println!("{}", serde_json::to_string_pretty(&values)?);
        }
        Command::Hit { action } => {
            HitReporter::new(api).report(action).await?;
            info!(%action, "Hit handed off");
        }
    }

    Ok(())
}

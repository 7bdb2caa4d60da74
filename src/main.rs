// s3-bucket-sizes: Report the size of S3 buckets from CloudWatch metrics.
#![forbid(unsafe_code)]
use anyhow::Result;
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;
mod cloudwatch;
mod common;
mod report;
mod s3;

// Environment variable used to configure log filtering
const LOG_ENV: &str = "S3BS_LOG";

// Log filter used when LOG_ENV isn't set
const DEFAULT_LOG_FILTER: &str = "warn";

// Logs go to stderr so they never mix with the report on stdout.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let matches = cli::parse_args();
    let config  = cli::client_config(&matches)?;

    info!(
        "Reporting for profile '{}' in region '{}'",
        config.profile_name(),
        config.region.name(),
    );

    let sdk_config = config.sdk_config().await;

    let s3_client         = s3::Client::new(&sdk_config);
    let cloudwatch_client = cloudwatch::Client::new(&sdk_config);

    let stdout = io::stdout();

    report::run(&config, &s3_client, &cloudwatch_client, stdout.lock()).await
}

// Command line interface parsing
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::{
    anyhow,
    Result,
};
use clap::{
    crate_description,
    crate_name,
    crate_version,
    value_parser,
    Arg,
    ArgMatches,
    Command,
};
use crate::common::{
    ClientConfig,
    Region,
    SizeUnit,
    DEFAULT_CONCURRENCY,
    DEFAULT_REGION,
    SIZE_UNITS,
};
use std::str::FromStr;
use tracing::debug;

// Default unit that sizes are displayed in
const DEFAULT_UNIT: &str = "legacy";

// Should match common::DEFAULT_CONCURRENCY
const DEFAULT_CONCURRENCY_ARG: &str = "8";

// Upper bound on in-flight CloudWatch requests
const MAX_CONCURRENCY: i64 = 256;

// Create clap app
fn create_app() -> Command {
    debug!("Creating CLI app");

    Command::new(crate_name!())
        .version(crate_version!())
        .about(crate_description!())
        .arg(
            Arg::new("REGION")
                .env("AWS_REGION")
                .hide_env_values(true)
                .long("region")
                .short('r')
                .value_name("REGION")
                .help("Set the AWS region to create the clients in.")
                .default_value(DEFAULT_REGION)
        )
        .arg(
            Arg::new("PROFILE")
                .env("AWS_PROFILE")
                .hide_env_values(true)
                .long("profile")
                .short('p')
                .value_name("PROFILE")
                .help("Named profile to load credentials from.")
        )
        .arg(
            Arg::new("UNIT")
                .env("S3BS_UNIT")
                .hide_env_values(true)
                .long("unit")
                .short('u')
                .value_name("UNIT")
                .help("Sets the unit to use for size display.")
                .default_value(DEFAULT_UNIT)
                .value_parser(SIZE_UNITS)
        )
        .arg(
            Arg::new("CONCURRENCY")
                .env("S3BS_CONCURRENCY")
                .hide_env_values(true)
                .long("concurrency")
                .short('c')
                .value_name("REQUESTS")
                .help("Maximum number of CloudWatch requests in flight.")
                .default_value(DEFAULT_CONCURRENCY_ARG)
                .value_parser(value_parser!(u16).range(1..=MAX_CONCURRENCY))
        )
}

/// Parse the command line arguments.
pub fn parse_args() -> ArgMatches {
    debug!("Parsing command line arguments");

    create_app().get_matches()
}

/// Build a `ClientConfig` from parsed arguments.
pub fn client_config(matches: &ArgMatches) -> Result<ClientConfig> {
    // Unwraps of defaulted arguments are safe, clap always provides a value.
    let region = matches.get_one::<String>("REGION")
        .map(String::as_str)
        .unwrap_or(DEFAULT_REGION);

    let unit = matches.get_one::<String>("UNIT")
        .map(String::as_str)
        .unwrap_or(DEFAULT_UNIT);

    let unit = SizeUnit::from_str(unit)
        .map_err(|e| anyhow!("Invalid unit '{}': {}", unit, e))?;

    let concurrency = matches.get_one::<u16>("CONCURRENCY")
        .map(|c| usize::from(*c))
        .unwrap_or(DEFAULT_CONCURRENCY);

    let config = ClientConfig {
        profile:     matches.get_one::<String>("PROFILE").cloned(),
        region:      Region::default().set_region(region),
        unit:        unit,
        concurrency: concurrency,
    };

    debug!("Client config: {:?}", config);

    Ok(config)
}

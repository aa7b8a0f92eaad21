//! marquee - composition root.
//!
//! Wires a JSON file source, a clock and the grouping config into a
//! `ReleaseService`, then prints the requested view as JSON on stdout.

mod cli;
mod error;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use marquee_core::impls::JsonFileSource;
use marquee_core::ports::{Clock, FixedClock, SystemClock};
use marquee_core::{GroupingConfig, ReleaseService};

use crate::cli::{Cli, Commands};
use crate::error::CliError;

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn to_json(value: &impl serde::Serialize, pretty: bool) -> Result<String, CliError> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(out)
}

async fn run<C: Clock>(cli: Cli, clock: C) -> Result<String, CliError> {
    let input = cli.input.ok_or_else(|| {
        CliError::Arguments("no catalogue given (use --input or MARQUEE_INPUT)".to_string())
    })?;
    let config = GroupingConfig::default().with_unparseable(cli.unparseable.into());
    let service = ReleaseService::new(JsonFileSource::new(input), clock, config)?;

    match cli.command {
        Commands::Group { pretty } => to_json(&service.grouped().await?, pretty),
        Commands::Latest => to_json(&service.latest().await?, false),
        Commands::Upcoming { limit } => {
            let mut upcoming = service.grouped().await?.upcoming;
            if let Some(limit) = limit {
                upcoming.truncate(limit);
            }
            to_json(&upcoming, false)
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.today {
        Some(date) => run(cli, FixedClock(date)).await,
        None => run(cli, SystemClock).await,
    };

    match result {
        Ok(out) => println!("{out}"),
        Err(e) => {
            eprintln!("{}", e.report());
            std::process::exit(e.exit_code());
        }
    }
}

//! quakefetch CLI - bulk downloader for USGS earthquake event data.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use quakefetch_lib::ClientConfig;
use quakefetch_lib::url::SERVICE_LIMIT;
use std::num::{NonZeroU32, NonZeroUsize};
use std::time::Duration;

mod commands;
mod display;
mod logging;

use commands::fetch::FetchArgs;

#[derive(Parser)]
#[command(name = "quakefetch")]
#[command(about = "Bulk downloader for USGS earthquake event data", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress progress and log output)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Base URL of the FDSN event service
    #[arg(
        long,
        global = true,
        env = "QUAKEFETCH_BASE_URL",
        default_value = quakefetch_lib::url::SERVICE_URL
    )]
    base_url: String,

    /// Give up on any single HTTP request after this many seconds
    #[arg(long, global = true)]
    request_timeout_secs: Option<u64>,
}

impl Cli {
    /// Client configuration from the global flags.
    fn client_config(&self) -> ClientConfig {
        ClientConfig::default()
            .with_base_url(&self.base_url)
            .with_request_timeout(self.request_timeout_secs.map(Duration::from_secs))
    }
}

/// Parses a page size between 1 and the service maximum.
fn parse_page_size(text: &str) -> std::result::Result<NonZeroU32, String> {
    let size: NonZeroU32 = text
        .parse()
        .map_err(|_| format!("{text:?} is not a positive whole number"))?;
    if size > SERVICE_LIMIT {
        return Err(format!("page size may be at most {SERVICE_LIMIT}"));
    }
    Ok(size)
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch all events in a date range and print their columns as JSON
    Fetch {
        /// Start date (YYYY-MM-DD). Prompted for when omitted.
        #[arg(short, long)]
        start: Option<String>,

        /// End date (YYYY-MM-DD). Prompted for when omitted.
        #[arg(short, long)]
        end: Option<String>,

        /// Records per page (service maximum is 20000)
        #[arg(long, default_value = "20000", value_parser = parse_page_size)]
        page_size: NonZeroU32,

        /// Maximum concurrent page requests
        #[arg(long, default_value = "10")]
        concurrency: NonZeroUsize,

        /// Give up on a page after this many seconds
        #[arg(long)]
        page_timeout_secs: Option<u64>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,

        /// Skip the service API version check
        #[arg(long)]
        skip_version_check: bool,
    },

    /// Show how many events a date range matches
    Count {
        /// Start date (YYYY-MM-DD). Prompted for when omitted.
        #[arg(short, long)]
        start: Option<String>,

        /// End date (YYYY-MM-DD). Prompted for when omitted.
        #[arg(short, long)]
        end: Option<String>,

        /// Records per page used to report the page count
        #[arg(long, default_value = "20000", value_parser = parse_page_size)]
        page_size: NonZeroU32,
    },

    /// Show the service API version
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);
    let config = cli.client_config();

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Fetch {
            start,
            end,
            page_size,
            concurrency,
            page_timeout_secs,
            pretty,
            skip_version_check,
        } => {
            let args = FetchArgs {
                start,
                end,
                page_size,
                concurrency,
                page_timeout_secs,
                pretty,
                skip_version_check,
            };
            commands::fetch::fetch(&config, args, cli.quiet).await
        }
        Commands::Count {
            start,
            end,
            page_size,
        } => {
            commands::count::count(&config, start.as_deref(), end.as_deref(), page_size).await
        }
        Commands::Version => commands::version::version(&config).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_size_within_service_limit() {
        let cli = Cli::try_parse_from(["quakefetch", "count", "--page-size", "20000"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Count { page_size, .. }) if page_size == SERVICE_LIMIT
        ));

        assert!(Cli::try_parse_from(["quakefetch", "fetch", "--page-size", "20001"]).is_err());
        assert!(Cli::try_parse_from(["quakefetch", "count", "--page-size", "0"]).is_err());
    }

    #[test]
    fn test_request_timeout_flag() {
        let cli = Cli::try_parse_from([
            "quakefetch",
            "--base-url",
            "http://127.0.0.1:9000/",
            "version",
            "--request-timeout-secs",
            "30",
        ])
        .unwrap();
        let config = cli.client_config();
        assert_eq!(config.base_url, "http://127.0.0.1:9000/");
        assert_eq!(config.request_timeout, Some(Duration::from_secs(30)));

        let cli = Cli::try_parse_from(["quakefetch", "version"]).unwrap();
        assert!(cli.client_config().request_timeout.is_none());
    }
}

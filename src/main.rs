//! car-search: query the car search endpoint from the command line
//!
//! Prints the records returned by the backend as a JSON array on stdout.

use anyhow::Result;
use car_search::{config, CarSearch, HttpClient, SearchParams};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Debug, Parser)]
#[command(name = "car-search", version, about = "Query the car search endpoint")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Gateway root URL, overriding the settings
    #[arg(long)]
    base_url: Option<String>,

    /// Identifier placed in the path
    #[arg(long)]
    id: Option<String>,

    /// Search query, e.g. "make:Ford"
    #[arg(short, long)]
    query: Option<String>,

    /// Zero-based page index
    #[arg(long)]
    page: Option<u32>,

    /// Page size
    #[arg(long)]
    size: Option<u32>,

    /// Sort criterion as FIELD,DIRECTION; may be repeated
    #[arg(long)]
    sort: Vec<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn params(&self) -> SearchParams {
        let mut params = SearchParams::new();
        if let Some(ref id) = self.id {
            params = params.id(id);
        }
        if let Some(ref query) = self.query {
            params = params.query(query.as_str());
        }
        if let Some(page) = self.page {
            params = params.page(page);
        }
        if let Some(size) = self.size {
            params = params.size(size);
        }
        for sort in &self.sort {
            params = params.append("sort", sort.as_str());
        }
        params
    }
}

/// `--verbose` forces debug output; otherwise RUST_LOG applies, falling
/// back to info when it is unset or unparsable
fn log_filter(verbose: bool, rust_log: Option<String>) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the records
    FmtSubscriber::builder()
        .with_env_filter(log_filter(cli.verbose, std::env::var("RUST_LOG").ok()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting car-search v{}", car_search::VERSION);

    let mut settings = config::load(cli.config.as_deref())?;
    if let Some(ref base_url) = cli.base_url {
        settings.client.base_url = base_url.clone();
    }

    let client = HttpClient::with_settings(&settings.outgoing)?;
    let search = CarSearch::from_settings(&settings.client, Arc::new(client))?;
    info!("Searching {}{}", search.base_url(), search.template().as_str());

    let records = search.query(cli.params()).await?;
    info!("Received {} records", records.len());

    println!("{}", serde_json::to_string_pretty(&records)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_params() {
        let cli = Cli::parse_from([
            "car-search",
            "--id",
            "42",
            "-q",
            "make:Ford",
            "--sort",
            "price,asc",
            "--sort",
            "id,desc",
        ]);
        let params = cli.params();
        let params = params.as_params();

        assert_eq!(params.first("id"), Some("42"));
        assert_eq!(params.first("query"), Some("make:Ford"));
        assert_eq!(params.get("sort").unwrap(), ["price,asc", "id,desc"]);
        assert!(!params.contains("page"));
    }

    #[test]
    fn test_log_filter() {
        assert_eq!(log_filter(true, Some("warn".to_string())).to_string(), "debug");
        assert_eq!(
            log_filter(false, Some("car_search=trace".to_string())).to_string(),
            "car_search=trace"
        );
        assert_eq!(log_filter(false, None).to_string(), "info");
        assert_eq!(log_filter(false, Some("car_search=loud".to_string())).to_string(), "info");
    }
}

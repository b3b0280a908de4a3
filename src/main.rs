// Entrypoint for the CLI application.
// - Reads configuration once and hands it to the API client.
// - Returns `anyhow::Result` so a fatal fetch error exits non-zero with a message.

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::Parser;
use qiita_weekly::{api::QiitaClient, config::Config, dates::parse_reference_date, ui::run_week};

/// Print the most-stocked Qiita articles posted on each of the last seven days.
///
/// Set QIITA_TOKEN (or put a token in ~/.qiita_token) to raise the API rate limit.
#[derive(Parser, Debug)]
#[command(name = "qiita-weekly")]
#[command(version, about)]
struct Args {
    /// Last day of the week to search (YYYY-MM-DD); defaults to today
    #[arg(value_parser = parse_reference_date)]
    date: Option<NaiveDate>,

    /// Base URL of the Qiita API (overrides QIITA_API_URL)
    #[arg(long)]
    api_url: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let mut config = Config::from_env();
    if let Some(url) = args.api_url {
        config = config.with_api_url(url);
    }
    log::debug!("Using API at {}", config.api_url);

    let client = QiitaClient::new(&config).context("Failed to set up the API client")?;
    let reference = args.date.unwrap_or_else(|| Local::now().date_naive());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_week(&client, reference, &mut out)
}

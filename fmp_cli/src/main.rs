mod commands;
mod config;
mod output;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fmp_api::Client;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "fmp")]
#[command(about = "Query market data from Financial Modeling Prep")]
struct Cli {
    /// API key (falls back to the FMP_API_KEY environment variable)
    #[arg(long, env = "FMP_API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    /// TOML file overriding client settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format: table, markdown, json or csv
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Fail on request errors instead of reporting them and carrying on
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Earnings, IPO, split, dividend and economic calendars
    Calendar(commands::calendar::CalendarArgs),
    /// Quotes for one or more symbols, or a whole exchange
    Quote(commands::quotes::QuoteArgs),
    /// Most active stocks, biggest gainers or losers
    Movers(commands::quotes::MoversArgs),
    /// Market open/close status and holidays
    MarketHours,
    /// Per-sector performance
    Sectors(commands::quotes::SectorsArgs),
    /// Index quotes and index constituents
    Indexes(commands::indexes::IndexesArgs),
    /// Forex and commodity prices
    Markets(commands::markets::MarketsArgs),
    /// Senate trades and disclosures
    Senate(commands::senate::SenateArgs),
    /// Institutional, fund and ETF holdings
    Holders(commands::institutional::HoldersArgs),
    /// SEC filings, 13F reports and CIK lookups
    Filings(commands::institutional::FilingsArgs),
    /// Technical indicator series
    Indicator(commands::indicators::IndicatorArgs),
    /// Dividend, split and end-of-day history
    History(commands::history::HistoryArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("fmp=info".parse()?)
                .add_directive("fmp_api=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = OutputFormat::parse(&cli.output);
    let settings = config::load_settings(cli.config.as_deref(), cli.strict)?;
    let api_key = cli
        .api_key
        .clone()
        .context("missing API key: pass --api-key or set FMP_API_KEY")?;
    let client = Client::with_settings(api_key, settings)?;

    match &cli.command {
        Commands::Calendar(args) => commands::calendar::run(args, &client, &format).await?,
        Commands::Quote(args) => commands::quotes::run_quote(args, &client, &format).await?,
        Commands::Movers(args) => commands::quotes::run_movers(args, &client, &format).await?,
        Commands::MarketHours => commands::quotes::run_market_hours(&client, &format).await?,
        Commands::Sectors(args) => commands::quotes::run_sectors(args, &client, &format).await?,
        Commands::Indexes(args) => commands::indexes::run(args, &client, &format).await?,
        Commands::Markets(args) => commands::markets::run(args, &client, &format).await?,
        Commands::Senate(args) => commands::senate::run(args, &client, &format).await?,
        Commands::Holders(args) => {
            commands::institutional::run_holders(args, &client, &format).await?
        }
        Commands::Filings(args) => {
            commands::institutional::run_filings(args, &client, &format).await?
        }
        Commands::Indicator(args) => commands::indicators::run(args, &client, &format).await?,
        Commands::History(args) => commands::history::run(args, &client, &format).await?,
    }

    Ok(())
}

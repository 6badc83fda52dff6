use anyhow::Result;
use clap::{Args, ValueEnum};
use fmp_api::{Client, Outcome, Record};

use crate::output::{print_outcome, print_records, OutputFormat};

#[derive(Args)]
pub struct QuoteArgs {
    /// Symbols to quote; a failed symbol is reported and skipped
    #[arg(required_unless_present = "exchange")]
    pub symbols: Vec<String>,

    /// Quote every listing on an exchange (e.g. NYSE) instead
    #[arg(long, conflicts_with = "symbols")]
    pub exchange: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Movers {
    Actives,
    Gainers,
    Losers,
}

#[derive(Args)]
pub struct MoversArgs {
    #[arg(value_enum, default_value = "actives")]
    pub kind: Movers,
}

#[derive(Args)]
pub struct SectorsArgs {
    /// Rows to return
    #[arg(long)]
    pub limit: Option<u32>,
}

pub async fn run_quote(args: &QuoteArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    if let Some(exchange) = &args.exchange {
        return print_outcome(client.exchange_realtime(exchange).await?, format);
    }

    let mut rows: Vec<Record> = Vec::new();
    let mut failed = Vec::new();
    for symbol in &args.symbols {
        match client.quote_short(symbol).await? {
            Outcome::Data(payload) => rows.extend(payload.into_records()),
            Outcome::Empty => eprintln!("No quote for {}", symbol),
            Outcome::Failed(_) => failed.push(symbol.as_str()),
        }
    }

    if !rows.is_empty() {
        print_records(&rows, format)?;
    }
    if !failed.is_empty() {
        eprintln!("Failed to quote: {}", failed.join(", "));
    }
    Ok(())
}

pub async fn run_movers(args: &MoversArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let outcome = match args.kind {
        Movers::Actives => client.actives().await?,
        Movers::Gainers => client.gainers().await?,
        Movers::Losers => client.losers().await?,
    };
    print_outcome(outcome, format)
}

pub async fn run_market_hours(client: &Client, format: &OutputFormat) -> Result<()> {
    print_outcome(client.market_hours().await?, format)
}

pub async fn run_sectors(args: &SectorsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    print_outcome(client.sectors_performance(args.limit).await?, format)
}

use anyhow::Result;
use clap::{Args, ValueEnum};
use fmp_api::Client;

use crate::output::{print_outcome, OutputFormat};

#[derive(Clone, Copy, ValueEnum)]
pub enum Feed {
    Trading,
    Disclosure,
}

#[derive(Args)]
pub struct SenateArgs {
    #[arg(value_enum, default_value = "trading")]
    pub feed: Feed,

    /// Filter by ticker instead of reading the latest filings
    #[arg(long)]
    pub symbol: Option<String>,

    /// Page of the latest-filings feed
    #[arg(long, conflicts_with = "symbol")]
    pub page: Option<u32>,
}

pub async fn run(args: &SenateArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let outcome = match (args.feed, &args.symbol) {
        (Feed::Trading, Some(symbol)) => client.senate_trading_symbol(symbol).await?,
        (Feed::Trading, None) => client.senate_trading_rss(args.page).await?,
        (Feed::Disclosure, Some(symbol)) => client.senate_disclosure_symbol(symbol).await?,
        (Feed::Disclosure, None) => client.senate_disclosure_rss(args.page).await?,
    };
    print_outcome(outcome, format)
}

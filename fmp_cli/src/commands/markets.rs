use anyhow::Result;
use clap::{Args, ValueEnum};
use fmp_api::Client;

use crate::output::{print_outcome, OutputFormat};

#[derive(Clone, Copy, ValueEnum)]
pub enum Market {
    Forex,
    Commodities,
}

#[derive(Args)]
pub struct MarketsArgs {
    #[arg(value_enum)]
    pub market: Market,

    /// Full quotes instead of the price summary
    #[arg(long, conflicts_with = "available")]
    pub quotes: bool,

    /// List tradable symbols only
    #[arg(long)]
    pub available: bool,
}

pub async fn run(args: &MarketsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let outcome = match (args.market, args.available, args.quotes) {
        (Market::Forex, true, _) => client.available_forex().await?,
        (Market::Forex, false, true) => client.forex_list().await?,
        (Market::Forex, false, false) => client.forex().await?,
        (Market::Commodities, true, _) => client.available_commodities().await?,
        (Market::Commodities, false, _) => client.commodities_list().await?,
    };
    print_outcome(outcome, format)
}

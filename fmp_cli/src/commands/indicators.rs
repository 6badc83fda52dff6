use anyhow::Result;
use clap::Args;
use fmp_api::Client;

use crate::output::{print_outcome, OutputFormat};

#[derive(Args)]
pub struct IndicatorArgs {
    pub symbol: String,

    /// Lookback period
    #[arg(long, default_value = "10")]
    pub period: u32,

    /// Indicator: SMA, EMA, WMA, DEMA, TEMA, williams, RSI, ADX, standardDeviation
    #[arg(long = "type", default_value = "SMA")]
    pub statistics_type: String,

    /// Candle interval: 1min, 5min, 15min, 30min, 1hour, 4hour, daily
    #[arg(long, default_value = "daily")]
    pub interval: String,
}

pub async fn run(args: &IndicatorArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let outcome = client
        .technical_indicators(
            &args.symbol,
            args.period,
            &args.statistics_type,
            &args.interval,
        )
        .await?;
    print_outcome(outcome, format)
}

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use fmp_api::Client;

use crate::output::{print_outcome, OutputFormat};

#[derive(Clone, Copy, ValueEnum)]
pub enum CalendarKind {
    Earnings,
    Ipo,
    Splits,
    Dividends,
    Economic,
}

#[derive(Args)]
pub struct CalendarArgs {
    /// Which calendar to fetch
    #[arg(value_enum)]
    pub kind: CalendarKind,

    /// Start date (YYYY-MM-DD); the window may span at most three months
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// End date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<NaiveDate>,

    /// Earnings history for one symbol instead of the market-wide calendar
    #[arg(long, conflicts_with_all = ["from", "to"])]
    pub symbol: Option<String>,

    /// Rows to return with --symbol
    #[arg(long)]
    pub limit: Option<u32>,
}

pub async fn run(args: &CalendarArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    if let Some(from) = args.from {
        if let Some(to) = args.to {
            if from > to {
                anyhow::bail!("--from {} is after --to {}", from, to);
            }
        }
    }

    let outcome = match (args.kind, &args.symbol) {
        (CalendarKind::Earnings, Some(symbol)) => {
            client.historical_earning_calendar(symbol, args.limit).await?
        }
        (_, Some(_)) => anyhow::bail!("--symbol is only supported for the earnings calendar"),
        (CalendarKind::Earnings, None) => client.earning_calendar(args.from, args.to).await?,
        (CalendarKind::Ipo, None) => client.ipo_calendar(args.from, args.to).await?,
        (CalendarKind::Splits, None) => client.stock_split_calendar(args.from, args.to).await?,
        (CalendarKind::Dividends, None) => client.dividend_calendar(args.from, args.to).await?,
        (CalendarKind::Economic, None) => client.economic_calendar(args.from, args.to).await?,
    };
    print_outcome(outcome, format)
}

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use fmp_api::{Client, Outcome, Payload};

use crate::output::{print_outcome, OutputFormat};

#[derive(Clone, Copy, ValueEnum)]
pub enum History {
    Dividends,
    Splits,
    /// End-of-day prices on one date, delisted symbols included
    Eod,
}

#[derive(Args)]
pub struct HistoryArgs {
    #[arg(value_enum)]
    pub kind: History,

    pub symbol: String,

    /// Date for `eod` (YYYY-MM-DD)
    #[arg(long, required_if_eq("kind", "eod"))]
    pub date: Option<NaiveDate>,
}

pub async fn run(args: &HistoryArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let outcome = match (args.kind, args.date) {
        (History::Dividends, _) => client.historical_stock_dividend(&args.symbol).await?,
        (History::Splits, _) => client.historical_stock_split(&args.symbol).await?,
        (History::Eod, Some(date)) => {
            client
                .historical_survivorship_bias_free_eod(&args.symbol, date)
                .await?
        }
        (History::Eod, None) => anyhow::bail!("--date is required for eod"),
    };
    print_outcome(flatten_historical(outcome), format)
}

/// Dividend and split history arrive as `{"symbol": .., "historical": [..]}`;
/// the rows of interest are the inner array.
fn flatten_historical(outcome: Outcome) -> Outcome {
    match outcome {
        Outcome::Data(Payload::Record(mut record)) => match record.remove("historical") {
            Some(serde_json::Value::Array(items)) => {
                let rows: Vec<_> = items
                    .into_iter()
                    .filter_map(|item| match item {
                        serde_json::Value::Object(row) => Some(row),
                        _ => None,
                    })
                    .collect();
                if rows.is_empty() {
                    Outcome::Empty
                } else {
                    Outcome::Data(Payload::Records(rows))
                }
            }
            Some(other) => {
                record.insert("historical".to_string(), other);
                Outcome::Data(Payload::Record(record))
            }
            None => Outcome::Data(Payload::Record(record)),
        },
        other => other,
    }
}

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, ValueEnum};
use fmp_api::Client;

use crate::output::{print_download, print_outcome, OutputFormat};

#[derive(Clone, Copy, ValueEnum)]
pub enum Index {
    Sp500,
    Nasdaq,
    Dowjones,
}

#[derive(Args)]
pub struct IndexesArgs {
    /// List an index's constituents instead of quoting all indexes
    #[arg(value_enum)]
    pub constituents: Option<Index>,

    /// Show constituent changes over time
    #[arg(long, requires = "constituents")]
    pub historical: bool,

    /// Save the constituents as CSV; without a path the configured filename is used
    #[arg(long, requires = "constituents", conflicts_with = "historical", num_args = 0..=1)]
    pub download: Option<Option<PathBuf>>,

    /// List every available index symbol
    #[arg(long, conflicts_with = "constituents")]
    pub available: bool,
}

pub async fn run(args: &IndexesArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let Some(index) = args.constituents else {
        let outcome = if args.available {
            client.available_indexes().await?
        } else {
            client.indexes().await?
        };
        return print_outcome(outcome, format);
    };

    if let Some(dest) = &args.download {
        let filenames = &client.settings().filenames;
        let default = match index {
            Index::Sp500 => &filenames.sp500_constituents,
            Index::Nasdaq => &filenames.nasdaq_constituents,
            Index::Dowjones => &filenames.dowjones_constituents,
        };
        let dest = dest.clone().unwrap_or_else(|| PathBuf::from(default));
        let outcome = match index {
            Index::Sp500 => client.sp500_constituent_csv(Some(dest.as_path())).await?,
            Index::Nasdaq => client.nasdaq_constituent_csv(Some(dest.as_path())).await?,
            Index::Dowjones => client.dowjones_constituent_csv(Some(dest.as_path())).await?,
        };
        return print_download(outcome, &dest);
    }

    let outcome = match (index, args.historical) {
        (Index::Sp500, false) => client.sp500_constituent().await?,
        (Index::Sp500, true) => client.historical_sp500_constituent().await?,
        (Index::Nasdaq, false) => client.nasdaq_constituent().await?,
        (Index::Nasdaq, true) => client.historical_nasdaq_constituent().await?,
        (Index::Dowjones, false) => client.dowjones_constituent().await?,
        (Index::Dowjones, true) => client.historical_dowjones_constituent().await?,
    };
    print_outcome(outcome, format)
}

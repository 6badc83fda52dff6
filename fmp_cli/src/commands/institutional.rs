use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand, ValueEnum};
use fmp_api::Client;

use crate::output::{print_download, print_outcome, OutputFormat};

#[derive(Clone, Copy, ValueEnum)]
pub enum Holding {
    Institutional,
    MutualFund,
    Etf,
    EtfSectors,
    EtfCountries,
    /// Quarterly institutional ownership summary
    Ownership,
}

#[derive(Args)]
pub struct HoldersArgs {
    #[arg(value_enum)]
    pub kind: Holding,

    pub symbol: String,

    /// Quarters to return (ownership only)
    #[arg(long)]
    pub limit: Option<u32>,

    /// Include the quarter in progress (ownership only)
    #[arg(long)]
    pub current_quarter: bool,
}

#[derive(Args)]
pub struct FilingsArgs {
    #[command(subcommand)]
    pub command: FilingsCommand,
}

#[derive(Subcommand)]
pub enum FilingsCommand {
    /// Latest SEC filings
    Feed {
        #[arg(long)]
        limit: Option<u32>,
        /// Save as CSV; without a path the configured filename is used
        #[arg(long, conflicts_with = "limit", num_args = 0..=1)]
        download: Option<Option<PathBuf>>,
    },
    /// Every institutional investment manager CIK
    CikList,
    /// Find filer CIKs by name
    CikSearch { name: String },
    /// Company name for a CIK
    Cik { cik: String },
    /// Form 13F holdings for a filer
    Form13f {
        cik: String,
        /// Reporting date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Security details for a CUSIP
    Cusip { cusip: String },
}

pub async fn run_holders(args: &HoldersArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let symbol = args.symbol.as_str();
    let outcome = match args.kind {
        Holding::Institutional => client.institutional_holders(symbol).await?,
        Holding::MutualFund => client.mutual_fund_holders(symbol).await?,
        Holding::Etf => client.etf_holders(symbol).await?,
        Holding::EtfSectors => client.etf_sector_weightings(symbol).await?,
        Holding::EtfCountries => client.etf_country_weightings(symbol).await?,
        Holding::Ownership => {
            client
                .institutional_symbol_ownership(symbol, args.limit, args.current_quarter)
                .await?
        }
    };
    print_outcome(outcome, format)
}

pub async fn run_filings(args: &FilingsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let outcome = match &args.command {
        FilingsCommand::Feed {
            download: Some(dest),
            ..
        } => {
            let dest = dest
                .clone()
                .unwrap_or_else(|| PathBuf::from(&client.settings().filenames.sec_rss_feeds));
            let outcome = client.sec_rss_feeds_csv(Some(dest.as_path())).await?;
            return print_download(outcome, &dest);
        }
        FilingsCommand::Feed { limit, .. } => client.sec_rss_feeds(*limit).await?,
        FilingsCommand::CikList => client.cik_list().await?,
        FilingsCommand::CikSearch { name } => client.cik_search(name).await?,
        FilingsCommand::Cik { cik } => client.cik(cik).await?,
        FilingsCommand::Form13f { cik, date } => client.form_13f(cik, *date).await?,
        FilingsCommand::Cusip { cusip } => client.cusip(cusip).await?,
    };
    print_outcome(outcome, format)
}

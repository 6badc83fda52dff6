use std::path::Path;

use chrono::NaiveDate;

use crate::{
    config::ApiVersion,
    query::{Params, Query},
    types::Outcome,
    Client, Error,
};

impl Client {
    async fn by_symbol(&self, resource: &str, symbol: &str) -> Result<Outcome, Error> {
        self.get_resource(ApiVersion::V3, resource, &[symbol], &Params::new())
            .await
    }

    /// Institutional and individual holders of a stock.
    pub async fn institutional_holders(&self, symbol: &str) -> Result<Outcome, Error> {
        self.by_symbol("institutional-holder", symbol).await
    }

    pub async fn mutual_fund_holders(&self, symbol: &str) -> Result<Outcome, Error> {
        self.by_symbol("mutual-fund-holder", symbol).await
    }

    pub async fn etf_holders(&self, symbol: &str) -> Result<Outcome, Error> {
        self.by_symbol("etf-holder", symbol).await
    }

    /// Share of an ETF's assets invested in each sector.
    pub async fn etf_sector_weightings(&self, symbol: &str) -> Result<Outcome, Error> {
        self.by_symbol("etf-sector-weightings", symbol).await
    }

    /// Share of an ETF's assets invested in each country.
    pub async fn etf_country_weightings(&self, symbol: &str) -> Result<Outcome, Error> {
        self.by_symbol("etf-country-weightings", symbol).await
    }

    /// Real-time feed of SEC filings.
    pub async fn sec_rss_feeds(&self, limit: Option<u32>) -> Result<Outcome, Error> {
        let query = Params::new().with_limit(self.limit_or_default(limit));
        self.get(ApiVersion::V3, "rss_feed", &query).await
    }

    /// Saves the SEC filings feed as CSV. `dest` defaults to the configured
    /// `sec_rss_feeds` filename. The CSV variant takes no limit.
    pub async fn sec_rss_feeds_csv(&self, dest: Option<&Path>) -> Result<Outcome<u64>, Error> {
        let dest = dest.unwrap_or_else(|| Path::new(&self.settings().filenames.sec_rss_feeds));
        self.download(ApiVersion::V3, "rss_feed", &Params::new(), dest)
            .await
    }

    /// Every institutional investment manager by CIK.
    pub async fn cik_list(&self) -> Result<Outcome, Error> {
        self.get(ApiVersion::V3, "cik_list", &Params::new()).await
    }

    /// Form 13F filer CIKs matching a name.
    pub async fn cik_search(&self, name: &str) -> Result<Outcome, Error> {
        self.by_symbol("cik-search", name).await
    }

    /// Company name registered for a CIK.
    pub async fn cik(&self, cik: &str) -> Result<Outcome, Error> {
        self.by_symbol("cik", cik).await
    }

    /// Form 13F holdings for a filer, optionally for one reporting date.
    pub async fn form_13f(&self, cik: &str, date: Option<NaiveDate>) -> Result<Outcome, Error> {
        let mut query = Params::new();
        if let Some(date) = date {
            query = query.with_date(date);
        }
        self.get_resource(ApiVersion::V3, "form-thirteen", &[cik], &query)
            .await
    }

    /// Security details for a CUSIP.
    pub async fn cusip(&self, cusip: &str) -> Result<Outcome, Error> {
        self.by_symbol("cusip", cusip).await
    }

    /// Quarterly institutional ownership of a stock.
    pub async fn institutional_symbol_ownership(
        &self,
        symbol: &str,
        limit: Option<u32>,
        include_current_quarter: bool,
    ) -> Result<Outcome, Error> {
        let query = Params::new()
            .with_limit(self.limit_or_default(limit))
            .with("symbol", symbol)
            .with_flag("includeCurrentQuarter", include_current_quarter);
        self.get(
            ApiVersion::V4,
            "institutional-ownership/symbol-ownership",
            &query,
        )
        .await
    }
}

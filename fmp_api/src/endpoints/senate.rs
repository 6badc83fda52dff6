//! Senate trading and disclosure feeds. All of these live under the v4 API.

use crate::{
    config::ApiVersion,
    query::{Params, Query},
    types::Outcome,
    Client, Error,
};

impl Client {
    async fn senate_feed(&self, path: &str, page: Option<u32>) -> Result<Outcome, Error> {
        let mut query = Params::new();
        if let Some(page) = page {
            query = query.with_page(page);
        }
        self.get(ApiVersion::V4, path, &query).await
    }

    /// Most recently reported Senate trades.
    pub async fn senate_trading_rss(&self, page: Option<u32>) -> Result<Outcome, Error> {
        self.senate_feed("senate-trading-rss-feed", page).await
    }

    /// Senate trades in one symbol.
    pub async fn senate_trading_symbol(&self, symbol: &str) -> Result<Outcome, Error> {
        let query = Params::new().with("symbol", symbol);
        self.get(ApiVersion::V4, "senate-trading", &query).await
    }

    /// Most recently filed Senate disclosures.
    pub async fn senate_disclosure_rss(&self, page: Option<u32>) -> Result<Outcome, Error> {
        self.senate_feed("senate-disclosure-rss-feed", page).await
    }

    pub async fn senate_disclosure_symbol(&self, symbol: &str) -> Result<Outcome, Error> {
        let query = Params::new().with("symbol", symbol);
        self.get(ApiVersion::V4, "senate-disclosure", &query).await
    }
}

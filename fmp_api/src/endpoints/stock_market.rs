use crate::{
    config::ApiVersion,
    query::{Params, Query},
    types::Outcome,
    Client, Error,
};

impl Client {
    /// Stocks with the highest trading volume today.
    pub async fn actives(&self) -> Result<Outcome, Error> {
        self.get(ApiVersion::V3, "actives", &Params::new()).await
    }

    /// Stocks with the largest gain today.
    pub async fn gainers(&self) -> Result<Outcome, Error> {
        self.get(ApiVersion::V3, "gainers", &Params::new()).await
    }

    /// Stocks with the largest loss today.
    pub async fn losers(&self) -> Result<Outcome, Error> {
        self.get(ApiVersion::V3, "losers", &Params::new()).await
    }

    /// Whether the market is open, plus exchange holidays. Answers with a single object.
    pub async fn market_hours(&self) -> Result<Outcome, Error> {
        self.get(ApiVersion::V3, "market-hours", &Params::new())
            .await
    }

    /// Per-sector performance.
    pub async fn sectors_performance(&self, limit: Option<u32>) -> Result<Outcome, Error> {
        let query = Params::new().with_limit(self.limit_or_default(limit));
        self.get(ApiVersion::V3, "sectors-performance", &query).await
    }
}

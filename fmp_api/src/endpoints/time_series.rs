use chrono::NaiveDate;

use crate::{
    config::ApiVersion,
    query::{format_date, Params},
    types::Outcome,
    Client, Error,
};

impl Client {
    /// Price and volume snapshot for one symbol.
    pub async fn quote_short(&self, symbol: &str) -> Result<Outcome, Error> {
        self.get_resource(ApiVersion::V3, "quote-short", &[symbol], &Params::new())
            .await
    }

    /// Real-time quotes for every listing on an exchange (e.g. `NYSE`).
    pub async fn exchange_realtime(&self, exchange: &str) -> Result<Outcome, Error> {
        self.quotes(exchange).await
    }

    /// Dividend history for one symbol. Answers with a single object.
    pub async fn historical_stock_dividend(&self, symbol: &str) -> Result<Outcome, Error> {
        self.get_resource(
            ApiVersion::V3,
            "historical-price-full/stock_dividend",
            &[symbol],
            &Params::new(),
        )
        .await
    }

    /// Split history for one symbol. Answers with a single object.
    pub async fn historical_stock_split(&self, symbol: &str) -> Result<Outcome, Error> {
        self.get_resource(
            ApiVersion::V3,
            "historical-price-full/stock_split",
            &[symbol],
            &Params::new(),
        )
        .await
    }

    /// End-of-day prices as of `date`, including since-delisted symbols.
    pub async fn historical_survivorship_bias_free_eod(
        &self,
        symbol: &str,
        date: NaiveDate,
    ) -> Result<Outcome, Error> {
        let date = format_date(date);
        self.get_resource(
            ApiVersion::V4,
            "historical-price-full",
            &[symbol, date.as_str()],
            &Params::new(),
        )
        .await
    }
}

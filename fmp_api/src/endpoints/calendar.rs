use chrono::NaiveDate;

use crate::{
    config::ApiVersion,
    query::{Params, Query},
    types::Outcome,
    Client, Error,
};

impl Client {
    async fn calendar(
        &self,
        path: &str,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Outcome, Error> {
        // The API caps the from/to window at three months.
        let query = Params::new().with_date_range(from, to);
        self.get(ApiVersion::V3, path, &query).await
    }

    /// Past and upcoming earnings announcements with estimated and actual EPS.
    pub async fn earning_calendar(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Outcome, Error> {
        self.calendar("earning_calendar", from, to).await
    }

    /// Earnings history for one company.
    pub async fn historical_earning_calendar(
        &self,
        symbol: &str,
        limit: Option<u32>,
    ) -> Result<Outcome, Error> {
        let query = Params::new()
            .with_limit(self.limit_or_default(limit))
            .with("symbol", symbol);
        self.get_resource(
            ApiVersion::V3,
            "historical/earning_calendar",
            &[symbol],
            &query,
        )
        .await
    }

    /// Confirmed and scheduled IPOs.
    pub async fn ipo_calendar(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Outcome, Error> {
        self.calendar("ipo_calendar", from, to).await
    }

    /// Upcoming stock splits with their ratios.
    pub async fn stock_split_calendar(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Outcome, Error> {
        self.calendar("stock_split_calendar", from, to).await
    }

    /// Upcoming dividend payments, ex-dividend dates and amounts.
    pub async fn dividend_calendar(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Outcome, Error> {
        self.calendar("stock_dividend_calendar", from, to).await
    }

    /// Upcoming economic data releases.
    pub async fn economic_calendar(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Outcome, Error> {
        self.calendar("economic_calendar", from, to).await
    }
}

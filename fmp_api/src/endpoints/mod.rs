//! Endpoint catalog. Each method maps typed arguments onto a path and a
//! [`Params`](crate::query::Params) and hands them to the shared executor.

mod calendar;
mod commodities;
mod forex;
mod institutional;
mod market_indexes;
mod senate;
mod stock_market;
mod technical_indicators;
mod time_series;

use crate::{config::ApiVersion, query::Params, types::Outcome, Client, Error};

impl Client {
    /// Real-time quotes for every instrument in a group (`index`, `commodity`,
    /// `forex`, or an exchange code such as `NYSE`).
    pub async fn quotes(&self, group: &str) -> Result<Outcome, Error> {
        self.get_resource(ApiVersion::V3, "quotes", &[group], &Params::new())
            .await
    }
}

use crate::{config::ApiVersion, query::Params, types::Outcome, Client, Error};

impl Client {
    /// Commodities traded on exchanges worldwide.
    pub async fn available_commodities(&self) -> Result<Outcome, Error> {
        self.get(
            ApiVersion::V3,
            "symbol/available-commodities",
            &Params::new(),
        )
        .await
    }

    /// Quotes for every commodity.
    pub async fn commodities_list(&self) -> Result<Outcome, Error> {
        self.quotes("commodity").await
    }
}

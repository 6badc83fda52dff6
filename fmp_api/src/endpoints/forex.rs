use crate::{config::ApiVersion, query::Params, types::Outcome, Client, Error};

impl Client {
    /// Current FX prices for all pairs.
    pub async fn forex(&self) -> Result<Outcome, Error> {
        self.get(ApiVersion::V3, "fx", &Params::new()).await
    }

    /// Quotes for every currency pair.
    pub async fn forex_list(&self) -> Result<Outcome, Error> {
        self.quotes("forex").await
    }

    pub async fn available_forex(&self) -> Result<Outcome, Error> {
        self.get(
            ApiVersion::V3,
            "symbol/available-forex-currency-pairs",
            &Params::new(),
        )
        .await
    }
}

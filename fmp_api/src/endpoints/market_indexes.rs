use std::path::Path;

use crate::{config::ApiVersion, query::Params, types::Outcome, Client, Error};

impl Client {
    /// Quotes for the major market indexes.
    pub async fn indexes(&self) -> Result<Outcome, Error> {
        self.quotes("index").await
    }

    /// Current S&P 500 constituents.
    pub async fn sp500_constituent(&self) -> Result<Outcome, Error> {
        self.get(ApiVersion::V3, "sp500_constituent", &Params::new())
            .await
    }

    /// Saves the S&P 500 constituents as CSV. `dest` defaults to the
    /// configured `sp500_constituents` filename.
    pub async fn sp500_constituent_csv(&self, dest: Option<&Path>) -> Result<Outcome<u64>, Error> {
        let dest = dest.unwrap_or_else(|| Path::new(&self.settings().filenames.sp500_constituents));
        self.download(ApiVersion::V3, "sp500_constituent", &Params::new(), dest)
            .await
    }

    /// Additions to and removals from the S&P 500 over time.
    pub async fn historical_sp500_constituent(&self) -> Result<Outcome, Error> {
        self.get(
            ApiVersion::V3,
            "historical/sp500_constituent",
            &Params::new(),
        )
        .await
    }

    pub async fn nasdaq_constituent(&self) -> Result<Outcome, Error> {
        self.get(ApiVersion::V3, "nasdaq_constituent", &Params::new())
            .await
    }

    /// Saves the NASDAQ constituents as CSV. `dest` defaults to the
    /// configured `nasdaq_constituents` filename.
    pub async fn nasdaq_constituent_csv(&self, dest: Option<&Path>) -> Result<Outcome<u64>, Error> {
        let dest =
            dest.unwrap_or_else(|| Path::new(&self.settings().filenames.nasdaq_constituents));
        self.download(ApiVersion::V3, "nasdaq_constituent", &Params::new(), dest)
            .await
    }

    pub async fn historical_nasdaq_constituent(&self) -> Result<Outcome, Error> {
        self.get(
            ApiVersion::V3,
            "historical/nasdaq_constituent",
            &Params::new(),
        )
        .await
    }

    pub async fn dowjones_constituent(&self) -> Result<Outcome, Error> {
        self.get(ApiVersion::V3, "dowjones_constituent", &Params::new())
            .await
    }

    /// Saves the Dow Jones constituents as CSV. `dest` defaults to the
    /// configured `dowjones_constituents` filename.
    pub async fn dowjones_constituent_csv(
        &self,
        dest: Option<&Path>,
    ) -> Result<Outcome<u64>, Error> {
        let dest =
            dest.unwrap_or_else(|| Path::new(&self.settings().filenames.dowjones_constituents));
        self.download(ApiVersion::V3, "dowjones_constituent", &Params::new(), dest)
            .await
    }

    pub async fn historical_dowjones_constituent(&self) -> Result<Outcome, Error> {
        self.get(
            ApiVersion::V3,
            "historical/dowjones_constituent",
            &Params::new(),
        )
        .await
    }

    /// Every index symbol the API knows, with name and exchange.
    pub async fn available_indexes(&self) -> Result<Outcome, Error> {
        self.get(ApiVersion::V3, "symbol/available-indexes", &Params::new())
            .await
    }
}

use crate::{
    config::ApiVersion,
    query::Params,
    types::Outcome,
    validation::{validate_statistics_type, validate_time_delta},
    Client, Error,
};

impl Client {
    /// Indicator series for one symbol, e.g. a 10-period daily `SMA`.
    ///
    /// `statistics_type` and `time_delta` are checked against their
    /// allow-lists first; an invalid value is always returned as
    /// [`Error::Validation`] and no request is sent.
    pub async fn technical_indicators(
        &self,
        symbol: &str,
        period: u32,
        statistics_type: &str,
        time_delta: &str,
    ) -> Result<Outcome, Error> {
        let time_delta = validate_time_delta(time_delta)?;
        let query = Params::new()
            .with("period", period)
            .with("type", validate_statistics_type(statistics_type)?);
        self.get_resource(
            ApiVersion::V3,
            "technical_indicator",
            &[time_delta, symbol],
            &query,
        )
        .await
    }
}

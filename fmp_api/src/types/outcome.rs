use crate::types::{Payload, Record};
use crate::Error;

/// Result of one endpoint call under the quiet error policy.
///
/// `Empty` and `Failed` are kept apart so a caller can tell "the service has
/// no rows for this" from "the call did not work".
#[derive(Debug)]
pub enum Outcome<T = Payload> {
    /// A well-formed, non-empty response.
    Data(T),
    /// A well-formed response with no rows: `[]`, `{}` or an empty body.
    Empty,
    /// The request failed; the error was already logged.
    Failed(Error),
}

impl<T> Outcome<T> {
    pub fn is_data(&self) -> bool {
        matches!(self, Outcome::Data(_))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Outcome::Empty)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }

    pub fn failure(&self) -> Option<&Error> {
        match self {
            Outcome::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// The data, if any. Both `Empty` and `Failed` map to `None`.
    pub fn data(self) -> Option<T> {
        match self {
            Outcome::Data(data) => Some(data),
            _ => None,
        }
    }

    /// Converts back into a `Result`, treating `Empty` as `Ok(None)`.
    pub fn into_result(self) -> Result<Option<T>, Error> {
        match self {
            Outcome::Data(data) => Ok(Some(data)),
            Outcome::Empty => Ok(None),
            Outcome::Failed(e) => Err(e),
        }
    }
}

impl Outcome<Payload> {
    /// The record sequence: `Some(vec![])` for an empty response, `None` when
    /// the call failed.
    pub fn into_records(self) -> Option<Vec<Record>> {
        match self {
            Outcome::Data(payload) => Some(payload.into_records()),
            Outcome::Empty => Some(Vec::new()),
            Outcome::Failed(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_and_failed_are_distinct() {
        let empty: Outcome = Outcome::Empty;
        assert_eq!(empty.into_records(), Some(Vec::new()));

        let failed: Outcome = Outcome::Failed(Error::RequestFailed("refused".into()));
        assert!(failed.failure().is_some());
        assert_eq!(failed.into_records(), None);
    }

    #[test]
    fn data_into_records() {
        let payload = Payload::from(json!([{"symbol": "AAPL"}, {"symbol": "MSFT"}]));
        let records = Outcome::Data(payload).into_records().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1]["symbol"], "MSFT");
    }

    #[test]
    fn into_result() {
        assert!(matches!(Outcome::<u64>::Empty.into_result(), Ok(None)));
        assert!(matches!(Outcome::Data(3u64).into_result(), Ok(Some(3))));
        assert!(Outcome::<u64>::Failed(Error::InvalidPath).into_result().is_err());
    }
}

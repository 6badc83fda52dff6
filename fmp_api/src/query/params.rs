use url::Url;

use super::common::{Query, QueryCommon};

/// General-purpose query: the common filters plus endpoint-specific pairs.
///
/// Pairs are appended in insertion order after the common filters.
#[derive(Clone, Debug, Default)]
pub struct Params {
    pub common: QueryCommon,
    pairs: Vec<(String, String)>,
}

impl Query for Params {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        for (key, value) in self.pairs.iter() {
            url.query_pairs_mut().append_pair(key, value);
        }
        url
    }
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a required parameter.
    pub fn with(mut self, key: &str, value: impl ToString) -> Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    /// Adds a parameter only when a value is present.
    pub fn with_opt<T: ToString>(self, key: &str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.with(key, value),
            None => self,
        }
    }

    /// Adds `key=true` when the flag is set; `false` is the API default and is omitted.
    pub fn with_flag(self, key: &str, flag: bool) -> Self {
        if flag {
            self.with(key, true)
        } else {
            self
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

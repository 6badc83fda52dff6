//! Client settings: base URLs, timeout, default limit, and download filenames.

use std::time::Duration;

use serde::Deserialize;

/// Which generation of the REST API an endpoint lives under.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiVersion {
    /// `/api/v3/`, the legacy generation most endpoints still use.
    V3,
    /// `/api/v4/`, the current generation.
    V4,
}

/// How request failures are reported to callers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Log the failure and return [`crate::Outcome::Failed`]. This is the default,
    /// so a caller looping over many symbols is never interrupted by one failure.
    #[default]
    Quiet,
    /// Log the failure and return it as `Err`.
    Strict,
}

/// Default destination filenames for the CSV download endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Filenames {
    pub sp500_constituents: String,
    pub nasdaq_constituents: String,
    pub dowjones_constituents: String,
    pub sec_rss_feeds: String,
}

impl Default for Filenames {
    fn default() -> Self {
        Self {
            sp500_constituents: "sp500_constituents.csv".to_string(),
            nasdaq_constituents: "nasdaq_constituents.csv".to_string(),
            dowjones_constituents: "dowjones_constituents.csv".to_string(),
            sec_rss_feeds: "sec_rss_feeds.csv".to_string(),
        }
    }
}

/// Immutable client configuration, built once and handed to
/// [`crate::Client::with_settings`].
///
/// Every field has a default, so a partial TOML or JSON document only needs
/// the values it overrides.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL for [`ApiVersion::V3`], with trailing slash.
    pub base_url_v3: String,
    /// Base URL for [`ApiVersion::V4`], with trailing slash.
    pub base_url_v4: String,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Row limit sent by endpoints whose caller left `limit` unset.
    pub default_limit: u32,
    pub filenames: Filenames,
    pub error_policy: ErrorPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url_v3: "https://financialmodelingprep.com/api/v3/".to_string(),
            base_url_v4: "https://financialmodelingprep.com/api/v4/".to_string(),
            timeout_ms: 30_000,
            default_limit: 10,
            filenames: Filenames::default(),
            error_policy: ErrorPolicy::Quiet,
        }
    }
}

impl Settings {
    /// Points both API generations at one host, e.g. a mock server.
    /// The version prefixes `api/v3/` and `api/v4/` are kept.
    pub fn with_host(mut self, host: &str) -> Self {
        let host = host.trim_end_matches('/');
        self.base_url_v3 = format!("{}/api/v3/", host);
        self.base_url_v4 = format!("{}/api/v4/", host);
        self
    }

    pub fn with_error_policy(mut self, error_policy: ErrorPolicy) -> Self {
        self.error_policy = error_policy;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn base_url(&self, version: ApiVersion) -> &str {
        match version {
            ApiVersion::V3 => &self.base_url_v3,
            ApiVersion::V4 => &self.base_url_v4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_production() {
        let settings = Settings::default();
        assert_eq!(
            settings.base_url(ApiVersion::V3),
            "https://financialmodelingprep.com/api/v3/"
        );
        assert_eq!(
            settings.base_url(ApiVersion::V4),
            "https://financialmodelingprep.com/api/v4/"
        );
        assert_eq!(settings.default_limit, 10);
        assert_eq!(settings.timeout(), Duration::from_secs(30));
        assert_eq!(settings.error_policy, ErrorPolicy::Quiet);
    }

    #[test]
    fn with_host_keeps_version_prefixes() {
        let settings = Settings::default().with_host("http://127.0.0.1:9000/");
        assert_eq!(settings.base_url_v3, "http://127.0.0.1:9000/api/v3/");
        assert_eq!(settings.base_url_v4, "http://127.0.0.1:9000/api/v4/");
    }

    #[test]
    fn sub_second_timeout_is_kept() {
        let settings = Settings::default().with_timeout(Duration::from_millis(250));
        assert_eq!(settings.timeout_ms, 250);
        assert_eq!(settings.timeout(), Duration::from_millis(250));
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            default_limit = 50
            error_policy = "strict"

            [filenames]
            sp500_constituents = "spx.csv"
            "#,
        )
        .unwrap();
        assert_eq!(settings.default_limit, 50);
        assert_eq!(settings.error_policy, ErrorPolicy::Strict);
        assert_eq!(settings.filenames.sp500_constituents, "spx.csv");
        assert_eq!(settings.filenames.sec_rss_feeds, "sec_rss_feeds.csv");
        assert_eq!(settings.timeout_ms, 30_000);
    }
}

//! HTTP client for the Financial Modeling Prep REST API.

use std::path::Path;

use url::Url;

use crate::{
    config::{ApiVersion, ErrorPolicy, Settings},
    query::Query,
    types::{Outcome, Payload},
    Error,
};

/// HTTP client for the Financial Modeling Prep REST API.
///
/// Holds the API key, the immutable [`Settings`] and one pooled
/// `reqwest::Client` built with the configured timeout. Every call performs
/// exactly one GET; nothing is cached or retried.
pub struct Client {
    http: reqwest::Client,
    api_key: String,
    settings: Settings,
}

impl Client {
    /// Creates a new client pointing at the production API with default settings.
    pub fn new(api_key: impl Into<String>) -> Result<Self, Error> {
        Self::with_settings(api_key, Settings::default())
    }

    /// Creates a new client with explicit settings.
    pub fn with_settings(api_key: impl Into<String>, settings: Settings) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(settings.timeout())
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed(e.to_string())
            })?;
        Ok(Self {
            http,
            api_key: api_key.into(),
            settings,
        })
    }

    /// Creates a new client serving both API versions from a custom host. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, api_key: impl Into<String>) -> Result<Self, Error> {
        Self::with_settings(api_key, Settings::default().with_host(base_url))
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The limit to send when the caller left it unset.
    pub(crate) fn limit_or_default(&self, limit: Option<u32>) -> u32 {
        limit.unwrap_or(self.settings.default_limit)
    }

    /// Builds the full request URL. The API key always comes first and is
    /// added here, so no query can leave it out.
    pub fn get_url(&self, version: ApiVersion, path: &str, query: &impl Query) -> Result<Url, Error> {
        self.resource_url(version, path, &[], query)
    }

    /// Builds the URL for a fixed `path` followed by caller-supplied
    /// `segments`. Each segment is percent-encoded as one path segment, so
    /// `/`, `?` or `#` in a symbol or name cannot reach another endpoint.
    pub fn resource_url(
        &self,
        version: ApiVersion,
        path: &str,
        segments: &[&str],
        query: &impl Query,
    ) -> Result<Url, Error> {
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            return Err(Error::InvalidPath);
        }
        // "." and ".." are dropped by the url crate rather than encoded.
        if segments.iter().any(|s| matches!(*s, "" | "." | "..")) {
            tracing::error!("Invalid path segment for {}: {:?}", path, segments);
            return Err(Error::InvalidPath);
        }
        let mut url = Url::parse(&format!("{}{}", self.settings.base_url(version), path))
            .map_err(|e| {
                tracing::error!("Invalid URL constructed: {}", e);
                Error::from(e)
            })?;
        if !segments.is_empty() {
            url.path_segments_mut()
                .map_err(|_| Error::InvalidPath)?
                .pop_if_empty()
                .extend(segments);
        }
        url.query_pairs_mut().append_pair("apikey", &self.api_key);
        Ok(query.add_to_url(&url))
    }

    /// Fetches `path` and decodes the JSON body.
    ///
    /// Request failures are logged once and then reported according to the
    /// configured [`ErrorPolicy`]. Path and URL errors are always returned as `Err`.
    pub async fn get<Q: Query>(
        &self,
        version: ApiVersion,
        path: &str,
        query: &Q,
    ) -> Result<Outcome, Error> {
        self.get_resource(version, path, &[], query).await
    }

    /// Like [`Client::get`], with caller-supplied path segments appended to
    /// the fixed `path` (see [`Client::resource_url`]).
    pub async fn get_resource<Q: Query>(
        &self,
        version: ApiVersion,
        path: &str,
        segments: &[&str],
        query: &Q,
    ) -> Result<Outcome, Error> {
        let url = self.resource_url(version, path, segments, query)?;
        let resource = resource_name(path, segments);
        let result = match self.send(url, &resource).await {
            Ok(body) => decode(&resource, &body),
            Err(e) => Err(e),
        };
        self.settle(result)
    }

    /// Fetches `path` as CSV and writes the raw body to `dest`, byte for byte.
    ///
    /// Returns the number of bytes written. An empty body is
    /// [`Outcome::Empty`] and request failures follow the error policy; both
    /// leave `dest` untouched. A failed write is always [`Error::Io`].
    pub async fn download<Q: Query>(
        &self,
        version: ApiVersion,
        path: &str,
        query: &Q,
        dest: impl AsRef<Path>,
    ) -> Result<Outcome<u64>, Error> {
        let dest = dest.as_ref();
        let mut url = self.get_url(version, path, query)?;
        // The API only offers CSV for downloads.
        url.query_pairs_mut().append_pair("datatype", "csv");

        let body = match self.send(url, path).await {
            Ok(body) => body,
            Err(e) => return self.settle(Err(e)),
        };
        if body.iter().all(u8::is_ascii_whitespace) {
            tracing::warn!("Response for {} appears to have no data.", path);
            return Ok(Outcome::Empty);
        }
        tokio::fs::write(dest, &body).await.map_err(|source| {
            tracing::error!("Failed to write {}: {}", dest.display(), source);
            Error::Io {
                path: dest.to_path_buf(),
                source,
            }
        })?;
        tracing::info!("Saving {} as {}.", path, dest.display());
        Ok(Outcome::Data(body.len() as u64))
    }

    /// One GET round trip. Every failure is logged here exactly once.
    async fn send(&self, url: Url, path: &str) -> Result<Vec<u8>, Error> {
        tracing::debug!(path, "GET {}", url.path());
        let resp = self
            .http
            .get(url)
            .header("accept", "application/json, text/csv, */*")
            .send()
            .await
            .map_err(|e| {
                // reqwest errors carry the full URL, API key included.
                let e = e.without_url();
                let reason = if e.is_timeout() {
                    format!("timed out: {}", e)
                } else {
                    e.to_string()
                };
                tracing::error!("Failed to get resource {}: {}", path, reason);
                Error::RequestFailed(reason)
            })?;

        let status = resp.status();
        let body = resp.bytes().await.map_err(|e| {
            let e = e.without_url();
            tracing::error!("Failed to read response body for {}: {}", path, e);
            Error::RequestFailed(e.to_string())
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&String::from_utf8_lossy(&body));
            tracing::error!(
                "Request for {} failed with status {}: {}",
                path,
                status,
                snippet
            );
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        Ok(body.to_vec())
    }

    /// Applies the error policy: request-class failures become
    /// [`Outcome::Failed`] under [`ErrorPolicy::Quiet`].
    fn settle<T>(&self, result: Result<Outcome<T>, Error>) -> Result<Outcome<T>, Error> {
        match result {
            Err(e) if e.is_request() && self.settings.error_policy == ErrorPolicy::Quiet => {
                Ok(Outcome::Failed(e))
            }
            other => other,
        }
    }
}

/// Decodes a success body. An empty body, `[]` or `{}` means "no data".
fn decode(path: &str, body: &[u8]) -> Result<Outcome, Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        tracing::warn!("Response for {} appears to have no data.", path);
        return Ok(Outcome::Empty);
    }

    let payload = serde_json::from_slice::<serde_json::Value>(body)
        .map(Payload::from)
        .map_err(|e| {
            let snippet = truncate_body(&String::from_utf8_lossy(body));
            tracing::error!("Failed to parse resource {}: {} | body: {}", path, e, snippet);
            Error::Decode {
                reason: e.to_string(),
                body: snippet,
            }
        })?;

    if payload.is_empty() {
        tracing::warn!("Response for {} appears to have no data.", path);
        return Ok(Outcome::Empty);
    }
    Ok(Outcome::Data(payload))
}

/// Human-readable resource name for logs; never contains the API key.
fn resource_name(path: &str, segments: &[&str]) -> String {
    std::iter::once(path.trim_start_matches('/'))
        .chain(segments.iter().copied())
        .collect::<Vec<_>>()
        .join("/")
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}

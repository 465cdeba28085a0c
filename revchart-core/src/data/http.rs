//! HTTP record source.
//!
//! Fetches the full record set from a JSON endpoint (`GET <url>` returning
//! an array of income-statement rows). The HTTP client is built inside
//! each `fetch_all` call and dropped before it returns, so no connection
//! pool outlives a fetch.

use std::time::Duration;

use reqwest::header::ACCEPT;
use tracing::debug;

use super::provider::{decode_json_records, RecordSource, SourceError, SourceKind};
use crate::domain::RevenueRecord;

/// Default request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// JSON-over-HTTP record source.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    timeout: Duration,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn client(&self) -> Result<reqwest::blocking::Client, SourceError> {
        reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("revchart/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SourceError::NetworkUnreachable(format!("build HTTP client: {e}")))
    }
}

impl RecordSource for HttpSource {
    fn name(&self) -> &str {
        &self.url
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Http
    }

    fn fetch_all(&self) -> Result<Vec<RevenueRecord>, SourceError> {
        let client = self.client()?;

        debug!(url = %self.url, timeout_secs = self.timeout.as_secs(), "GET records");
        let response = client
            .get(&self.url)
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|e| SourceError::NetworkUnreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .map_err(|e| SourceError::MalformedPayload(format!("read body: {e}")))?;

        decode_json_records(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_keeps_url_and_timeout() {
        let src = HttpSource::new("http://localhost:3000/api/income")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(src.url(), "http://localhost:3000/api/income");
        assert_eq!(src.name(), "http://localhost:3000/api/income");
        assert_eq!(src.kind(), SourceKind::Http);
        assert_eq!(src.timeout, Duration::from_secs(5));
    }

    #[test]
    fn invalid_url_is_reported_as_unreachable() {
        let src = HttpSource::new("not a url");
        assert!(matches!(
            src.fetch_all(),
            Err(SourceError::NetworkUnreachable(_))
        ));
    }
}

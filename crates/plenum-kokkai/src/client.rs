use std::time::Duration;

use plenum_core::dates::format_iso_date;

use crate::api::SpeechPage;
use crate::collect::CollectConfig;

const TIMEOUT: Duration = Duration::from_secs(30);

/// Failure of a single paginated request. Aborts pagination for the current
/// term only; never retried.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] ureq::Error),
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Synchronous client for the Kokkai speech search endpoint.
///
/// One agent per run with a fixed global timeout; no authentication, no
/// connection management beyond what the transport does transparently.
pub struct KokkaiClient {
    agent: ureq::Agent,
    base_url: String,
}

impl KokkaiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let agent = ureq::Agent::config_builder()
            .timeout_global(Some(TIMEOUT))
            .build()
            .new_agent();
        Self {
            agent,
            base_url: base_url.into(),
        }
    }

    /// Fetch one page of records for `term` starting at the 1-based cursor.
    pub fn fetch_page(
        &self,
        cfg: &CollectConfig,
        term: &str,
        start: u64,
    ) -> Result<SpeechPage, FetchError> {
        let mut response = self
            .agent
            .get(&self.base_url)
            .query("any", term)
            .query("startRecord", &start.to_string())
            .query("maximumRecords", &cfg.page_size.to_string())
            .query("recordPacking", "json")
            .query("from", &format_iso_date(cfg.window.start))
            .query("until", &format_iso_date(cfg.window.end))
            .call()?;
        let body = response.body_mut().read_to_string()?;
        Ok(serde_json::from_str(&body)?)
    }
}

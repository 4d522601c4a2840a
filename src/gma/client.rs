use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info, warn};

use crate::domain::{margin, Snapshot};
use crate::error::{FetchError, ParseError, Result};

use super::types::TallyResponse;

/// Upstream default timeouts are effectively unbounded; a scheduled watcher
/// should fail fast and let the next invocation retry.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the GMA election results feed.
pub struct TallyClient {
    client: Client,
    url: String,
    referer: String,
}

impl TallyClient {
    pub fn new(url: String, referer: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(FetchError::Request)?;

        Ok(Self {
            client,
            url,
            referer,
        })
    }

    /// Fetch and decode the latest tally. The referer header is required by
    /// the upstream service to authorize the request.
    pub async fn fetch(&self) -> Result<TallyResponse> {
        info!(url = %self.url, "fetching results feed");

        let body = self
            .client
            .get(&self.url)
            .header(reqwest::header::REFERER, &self.referer)
            .send()
            .await
            .map_err(FetchError::Request)?
            .text()
            .await
            .map_err(FetchError::Request)?;

        let response: TallyResponse =
            serde_json::from_str(&body).map_err(ParseError::Decode)?;

        debug!(
            contests = response.result.len(),
            as_of = %response.result_as_of,
            "decoded results feed"
        );

        Ok(response)
    }

    /// Fetch the latest tally and reduce it to a snapshot for the configured
    /// target candidate.
    pub async fn fetch_snapshot(&self, target: &str) -> Result<Snapshot> {
        let response = self.fetch().await?;
        snapshot_from_tally(&response, target)
    }
}

/// Reduce a decoded tally to the persisted snapshot shape.
pub fn snapshot_from_tally(response: &TallyResponse, target: &str) -> Result<Snapshot> {
    if !response.tallies().any(|(name, _)| name == target) {
        // The scan treats a missing target as a zero tally, which reads as a
        // misleadingly large negative lead. Surface it loudly.
        warn!(target, "target candidate not present in feed");
    }

    let lead = margin::lead(target, response.tallies());
    let processed = margin::processed_fraction(&response.election_returns_processed)?;

    Ok(Snapshot::new(lead, processed))
}

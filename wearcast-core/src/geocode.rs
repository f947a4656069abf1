//! Forward geocoding via OSM Nominatim. Free, no API key; the one courtesy
//! requirement is a descriptive User-Agent.

use std::time::Duration;

use anyhow::{Context, anyhow};
use reqwest::Client;
use serde::Deserialize;

use crate::error::{RunError, truncate_body};
use crate::model::Coordinates;

const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";
const REQUEST_TIMEOUT_SECS: u64 = 10;
const USER_AGENT: &str = "wearcast/0.1 (morning outfit briefing bot)";

/// Nominatim returns lat/lon as strings.
#[derive(Debug, Deserialize)]
struct SearchHit {
    lat: String,
    lon: String,
}

#[derive(Debug, Clone)]
pub struct GeocodeClient {
    http: Client,
    base_url: String,
}

impl GeocodeClient {
    pub fn new() -> Result<Self, RunError> {
        Self::with_base_url(NOMINATIM_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, RunError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build geocoding HTTP client")?;

        Ok(Self { http, base_url: base_url.into() })
    }

    /// Resolve a free-text address to coordinates using the first search hit.
    /// No hit at all is an upstream data error; the run ends there.
    pub async fn resolve(&self, address: &str) -> Result<Coordinates, RunError> {
        let url = format!("{}/search", self.base_url);

        let res = self
            .http
            .get(&url)
            .query(&[("q", address), ("format", "json"), ("limit", "1")])
            .send()
            .await
            .context("Failed to send request to Nominatim")?;

        let status = res.status();
        let body = res.text().await.context("Failed to read Nominatim response body")?;

        if !status.is_success() {
            return Err(anyhow!(
                "Nominatim request failed with status {}: {}",
                status,
                truncate_body(&body),
            )
            .into());
        }

        let hits: Vec<SearchHit> =
            serde_json::from_str(&body).context("Failed to parse Nominatim JSON")?;

        let hit = hits.into_iter().next().ok_or_else(|| {
            RunError::UpstreamData(format!("no geocoding match for address '{address}'"))
        })?;

        let latitude = parse_component("latitude", &hit.lat)?;
        let longitude = parse_component("longitude", &hit.lon)?;

        tracing::debug!(latitude, longitude, "geocoded '{address}'");
        Ok(Coordinates { latitude, longitude })
    }
}

fn parse_component(name: &str, raw: &str) -> Result<f64, RunError> {
    raw.parse::<f64>().map_err(|_| {
        RunError::UpstreamData(format!("geocoding returned an unparsable {name}: '{raw}'"))
    })
}

//! Daily forecast retrieval from Open-Meteo.

use std::time::Duration;

use anyhow::{Context, anyhow};
use reqwest::Client;
use serde::Deserialize;

use crate::error::{RunError, truncate_body};
use crate::model::{Coordinates, DailyForecast};

const OPEN_METEO_URL: &str = "https://api.open-meteo.com";
const REQUEST_TIMEOUT_SECS: u64 = 20;

const DAILY_FIELDS: &str = "temperature_2m_max,temperature_2m_min,precipitation_sum,\
weathercode,precipitation_probability_max,windspeed_10m_max";

/// Each daily variable arrives as an array indexed by day; index 0 is today.
/// Entries can be null, and whole arrays can be absent.
#[derive(Debug, Default, Deserialize)]
struct DailySeries {
    #[serde(default)]
    temperature_2m_min: Vec<Option<f64>>,
    #[serde(default)]
    temperature_2m_max: Vec<Option<f64>>,
    #[serde(default)]
    precipitation_sum: Vec<Option<f64>>,
    #[serde(default)]
    weathercode: Vec<Option<i32>>,
    #[serde(default)]
    precipitation_probability_max: Vec<Option<f64>>,
    #[serde(default)]
    windspeed_10m_max: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    daily: Option<DailySeries>,
}

#[derive(Debug, Clone)]
pub struct ForecastClient {
    http: Client,
    base_url: String,
}

impl ForecastClient {
    pub fn new() -> Result<Self, RunError> {
        Self::with_base_url(OPEN_METEO_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, RunError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to build forecast HTTP client")?;

        Ok(Self { http, base_url: base_url.into() })
    }

    /// Fetch today's forecast for the given point.
    ///
    /// A missing minimum or maximum temperature is fatal; every other field
    /// falls back to a neutral default (probability 0, amount 0.0, wind 0.0,
    /// code -1 which classifies as the fallback condition).
    pub async fn fetch_today(
        &self,
        coords: Coordinates,
        timezone: &str,
    ) -> Result<DailyForecast, RunError> {
        let url = format!("{}/v1/forecast", self.base_url);

        let res = self
            .http
            .get(&url)
            .query(&[
                ("latitude", coords.latitude.to_string()),
                ("longitude", coords.longitude.to_string()),
                ("daily", DAILY_FIELDS.to_string()),
                // m/s to match the windy threshold; the API default is km/h.
                ("windspeed_unit", "ms".to_string()),
                ("timezone", timezone.to_string()),
            ])
            .send()
            .await
            .context("Failed to send request to Open-Meteo")?;

        let status = res.status();
        let body = res.text().await.context("Failed to read Open-Meteo response body")?;

        if !status.is_success() {
            return Err(anyhow!(
                "Open-Meteo request failed with status {}: {}",
                status,
                truncate_body(&body),
            )
            .into());
        }

        let parsed: ForecastResponse =
            serde_json::from_str(&body).context("Failed to parse Open-Meteo JSON")?;

        let daily = parsed.daily.ok_or_else(|| {
            RunError::UpstreamData("forecast response carried no daily block".to_string())
        })?;

        tracing::debug!(days = daily.temperature_2m_min.len(), "parsed daily series");

        let min_temp = first(&daily.temperature_2m_min).ok_or_else(|| {
            RunError::UpstreamData("today's minimum temperature is missing".to_string())
        })?;
        let max_temp = first(&daily.temperature_2m_max).ok_or_else(|| {
            RunError::UpstreamData("today's maximum temperature is missing".to_string())
        })?;

        Ok(DailyForecast {
            min_temp: min_temp.round() as i32,
            max_temp: max_temp.round() as i32,
            condition_code: first(&daily.weathercode).unwrap_or(-1),
            precipitation_probability: first(&daily.precipitation_probability_max)
                .map(|p| p.round().clamp(0.0, 100.0) as u8)
                .unwrap_or(0),
            precipitation_amount: first(&daily.precipitation_sum).unwrap_or(0.0).max(0.0),
            wind_speed: first(&daily.windspeed_10m_max).unwrap_or(0.0).max(0.0),
        })
    }
}

fn first<T: Copy>(series: &[Option<T>]) -> Option<T> {
    series.first().copied().flatten()
}

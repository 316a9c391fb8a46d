use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Request, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::{
    Config,
    model::{ForecastResponse, GeocodingResponse},
};

use super::WeatherProvider;

/// Open-Meteo geocoding + forecast APIs. No API key required.
#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    config: Config,
    http: Client,
}

impl OpenMeteoProvider {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// `GET /v1/search` asking for a single match.
    fn search_request(&self, name: &str) -> Result<Request> {
        self.http
            .get(self.config.search_endpoint())
            .query(&[
                ("name", name),
                ("count", "1"),
                ("language", self.config.language.as_str()),
                ("format", "json"),
            ])
            .build()
            .context("Failed to build Open-Meteo geocoding request")
    }

    /// `GET /v1/forecast` for current conditions only.
    fn forecast_request(&self, latitude: f64, longitude: f64) -> Result<Request> {
        self.http
            .get(self.config.forecast_endpoint())
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("current_weather", "true".to_string()),
            ])
            .build()
            .context("Failed to build Open-Meteo forecast request")
    }

    async fn send<T: DeserializeOwned>(&self, request: Request, what: &str) -> Result<T> {
        let res = self
            .http
            .execute(request)
            .await
            .with_context(|| format!("Failed to send request to Open-Meteo ({what})"))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .with_context(|| format!("Failed to read Open-Meteo {what} response body"))?;

        parse_body(status, &body, what)
    }
}

#[async_trait]
impl WeatherProvider for OpenMeteoProvider {
    #[instrument(skip(self))]
    async fn geocode(&self, name: &str) -> Result<GeocodingResponse> {
        let request = self.search_request(name)?;
        self.send(request, "geocoding").await
    }

    #[instrument(skip(self))]
    async fn current_weather(&self, latitude: f64, longitude: f64) -> Result<ForecastResponse> {
        let request = self.forecast_request(latitude, longitude)?;
        self.send(request, "forecast").await
    }
}

/// Decode a response body as JSON whatever the status code.
///
/// Open-Meteo answers bad requests with a JSON `{"error": true, "reason": ..}`
/// body; that decodes to a response without the expected payload and is
/// classified by the workflow, not here.
fn parse_body<T: DeserializeOwned>(status: StatusCode, body: &str, what: &str) -> Result<T> {
    if status.is_success() {
        debug!(%status, bytes = body.len(), "Open-Meteo {what} response");
    } else {
        warn!(%status, body = %truncate_body(body), "Open-Meteo {what} request failed");
    }

    serde_json::from_str(body)
        .with_context(|| format!("Failed to parse Open-Meteo {what} JSON: {}", truncate_body(body)))
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

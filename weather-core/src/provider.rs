use crate::{
    Config,
    model::{ForecastResponse, GeocodingResponse},
    provider::openmeteo::OpenMeteoProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openmeteo;

/// The two remote calls a lookup is made of.
///
/// Implementations only fetch and decode. Judging whether a decoded response
/// is usable (empty results, missing current weather) is left to
/// [`crate::workflow::lookup`].
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Search places by free-text name, asking for a single match.
    async fn geocode(&self, name: &str) -> anyhow::Result<GeocodingResponse>;

    /// Current conditions at the given coordinates.
    async fn current_weather(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> anyhow::Result<ForecastResponse>;
}

/// Construct the Open-Meteo provider from config.
pub fn provider_from_config(config: &Config) -> Box<dyn WeatherProvider> {
    Box::new(OpenMeteoProvider::new(config.clone()))
}

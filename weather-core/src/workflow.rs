//! The lookup pipeline: validate the query, geocode it, fetch current weather.

use tracing::{debug, info, instrument, warn};

use crate::{
    error::LookupError,
    model::{CurrentWeather, LookupResult, Place},
    provider::WeatherProvider,
};

/// Resolve `query` to a place and fetch its current weather.
///
/// The forecast call depends on the geocoded coordinates, so the two calls
/// always run one after the other and the second is skipped when the first
/// finds nothing.
#[instrument(skip(provider))]
pub async fn lookup<P>(provider: &P, query: &str) -> Result<LookupResult, LookupError>
where
    P: WeatherProvider + ?Sized,
{
    let name = query.trim();
    if name.is_empty() {
        return Err(LookupError::EmptyQuery);
    }

    let place = resolve_place(provider, name).await?;
    let weather = fetch_current(provider, &place).await?;

    info!(
        place = %place.display_name(),
        weathercode = weather.weathercode,
        "lookup complete"
    );

    Ok(LookupResult { place, weather })
}

async fn resolve_place<P>(provider: &P, name: &str) -> Result<Place, LookupError>
where
    P: WeatherProvider + ?Sized,
{
    let response = provider.geocode(name).await.map_err(|e| {
        warn!(error = ?e, "geocoding failed");
        LookupError::failed(e)
    })?;

    let place = response
        .results
        .and_then(|results| results.into_iter().next())
        .ok_or(LookupError::CityNotFound)?;

    debug!(
        "Found location: {} ({:.4}, {:.4})",
        place.name, place.latitude, place.longitude
    );

    Ok(place)
}

async fn fetch_current<P>(provider: &P, place: &Place) -> Result<CurrentWeather, LookupError>
where
    P: WeatherProvider + ?Sized,
{
    let response = provider
        .current_weather(place.latitude, place.longitude)
        .await
        .map_err(|e| {
            warn!(error = ?e, "forecast failed");
            LookupError::failed(e)
        })?;

    response.current_weather.ok_or(LookupError::WeatherUnavailable)
}

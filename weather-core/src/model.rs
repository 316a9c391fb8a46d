use serde::Deserialize;

/// A resolved geocoding match.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Place {
    pub name: String,
    /// First-level administrative area (state, region, ...).
    #[serde(default)]
    pub admin1: Option<String>,
    #[serde(default)]
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Place {
    /// Human-readable location line, e.g. "Paris, Île-de-France, France".
    ///
    /// The region is left out when it is missing or repeats the place name,
    /// and empty parts are skipped.
    pub fn display_name(&self) -> String {
        let admin1 = self
            .admin1
            .as_deref()
            .filter(|region| *region != self.name);

        [Some(self.name.as_str()), admin1, Some(self.country.as_str())]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Current conditions as reported by the forecast endpoint.
///
/// Values are kept exactly as returned: °C, km/h, provider weather code and a
/// local ISO-8601 timestamp without offset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CurrentWeather {
    pub temperature: f64,
    pub windspeed: f64,
    pub weathercode: i64,
    pub time: String,
}

/// Everything needed to render one successful lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupResult {
    pub place: Place,
    pub weather: CurrentWeather,
}

/// Body of `GET /v1/search`. `results` is missing entirely when nothing matched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeocodingResponse {
    #[serde(default)]
    pub results: Option<Vec<Place>>,
}

/// Body of `GET /v1/forecast?current_weather=true`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub current_weather: Option<CurrentWeather>,
}

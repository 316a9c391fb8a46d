//! Display-ready values derived from a successful lookup.

use chrono::NaiveDateTime;

use crate::{condition::condition_for, model::LookupResult};

/// Everything the result panel shows, already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherReport {
    pub emoji: &'static str,
    pub location: String,
    pub observed_at: String,
    pub temperature: String,
    pub wind_speed: String,
    pub condition: &'static str,
}

impl From<&LookupResult> for WeatherReport {
    fn from(result: &LookupResult) -> Self {
        let condition = condition_for(result.weather.weathercode);

        Self {
            emoji: condition.emoji,
            location: result.place.display_name(),
            observed_at: format_observation_time(&result.weather.time),
            temperature: format!("{}°C", round_half_up(result.weather.temperature)),
            wind_speed: format!("{} km/h", round_half_up(result.weather.windspeed)),
            condition: condition.label,
        }
    }
}

/// Round to the nearest integer, halves going toward positive infinity
/// (`2.5 -> 3`, `-2.5 -> -2`).
pub fn round_half_up(value: f64) -> i64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor as i64 + 1
    } else {
        floor as i64
    }
}

/// Render the provider's local timestamp (`2024-01-01T12:00`) for humans.
///
/// Anything that does not parse is shown as received.
pub fn format_observation_time(raw: &str) -> String {
    ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|ts| ts.format("%-d %b %Y, %H:%M").to_string())
        .unwrap_or_else(|| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::testing::{london, overcast};
    use rstest::rstest;

    #[test]
    fn london_overcast_report() {
        let result = LookupResult {
            place: london(),
            weather: overcast(),
        };

        let report = WeatherReport::from(&result);

        assert_eq!(report.temperature, "14°C");
        assert_eq!(report.wind_speed, "10 km/h");
        assert_eq!(report.condition, "Overcast");
        assert_eq!(report.emoji, "☁️");
        assert_eq!(report.location, "London, England, United Kingdom");
        assert_eq!(report.observed_at, "1 Jan 2024, 12:00");
    }

    #[test]
    fn unknown_code_degrades_gracefully() {
        let mut weather = overcast();
        weather.weathercode = 77;
        let result = LookupResult {
            place: london(),
            weather,
        };

        let report = WeatherReport::from(&result);

        assert_eq!(report.condition, "Unknown");
        assert_eq!(report.emoji, "❔");
    }

    #[rstest]
    #[case(14.2, 14)]
    #[case(9.7, 10)]
    #[case(2.5, 3)]
    #[case(-2.5, -2)]
    #[case(-2.6, -3)]
    #[case(-0.4, 0)]
    #[case(0.0, 0)]
    #[case(0.49999999999999994, 0)]
    #[case(4503599627370497.0, 4503599627370497)]
    fn rounds_half_up(#[case] value: f64, #[case] expected: i64) {
        assert_eq!(round_half_up(value), expected);
    }

    #[test]
    fn negative_temperature_has_no_negative_zero() {
        let mut weather = overcast();
        weather.temperature = -0.3;
        let result = LookupResult {
            place: london(),
            weather,
        };

        assert_eq!(WeatherReport::from(&result).temperature, "0°C");
    }

    #[rstest]
    #[case("2024-07-14T09:05", "14 Jul 2024, 09:05")]
    #[case("2024-07-14T09:05:30", "14 Jul 2024, 09:05")]
    #[case("yesterday", "yesterday")]
    fn formats_observation_time(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(format_observation_time(raw), expected);
    }
}

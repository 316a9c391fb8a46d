use weathernow_core::{UiState, WeatherReport};

/// Text shown for the current page state.
pub fn render(state: &UiState) -> String {
    match state {
        UiState::Idle => String::new(),
        UiState::Loading => "Loading...".to_string(),
        UiState::Error(message) => error_banner(message),
        UiState::Success(result) => result_panel(&WeatherReport::from(result)),
    }
}

fn error_banner(message: &str) -> String {
    format!("✖ {message}")
}

fn result_panel(report: &WeatherReport) -> String {
    format!(
        "{emoji}  {location}\n   {observed}\n\n   Temperature  {temp}\n   Wind Speed   {wind}\n   Condition    {cond}",
        emoji = report.emoji,
        location = report.location,
        observed = report.observed_at,
        temp = report.temperature,
        wind = report.wind_speed,
        cond = report.condition,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use weathernow_core::{CurrentWeather, LookupResult, Place};

    #[test]
    fn idle_renders_nothing() {
        assert!(render(&UiState::Idle).is_empty());
    }

    #[test]
    fn error_renders_banner() {
        let out = render(&UiState::Error("City not found.".into()));
        assert!(out.contains("City not found."));
    }

    #[test]
    fn success_renders_panel() {
        let result = LookupResult {
            place: Place {
                name: "Paris".into(),
                admin1: Some("Île-de-France".into()),
                country: "France".into(),
                latitude: 48.85341,
                longitude: 2.3488,
            },
            weather: CurrentWeather {
                temperature: 21.6,
                windspeed: 3.2,
                weathercode: 1,
                time: "2024-06-01T15:00".into(),
            },
        };

        let out = render(&UiState::Success(result));

        assert!(out.contains("🌤️"));
        assert!(out.contains("Paris, Île-de-France, France"));
        assert!(out.contains("1 Jun 2024, 15:00"));
        assert!(out.contains("22°C"));
        assert!(out.contains("3 km/h"));
        assert!(out.contains("Mainly clear"));
    }
}

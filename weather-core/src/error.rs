//! Failure kinds of a city lookup.

use thiserror::Error;

/// Why a lookup did not produce a result.
///
/// The `Display` text is the short message shown in the error banner.
#[derive(Error, Debug)]
pub enum LookupError {
    /// Blank input; nothing was sent.
    #[error("Please enter a city name.")]
    EmptyQuery,

    /// The geocoding step returned no match.
    #[error("City not found.")]
    CityNotFound,

    /// The forecast step returned no current conditions.
    #[error("Weather unavailable.")]
    WeatherUnavailable,

    /// Transport, decoding or any other unexpected failure in either step.
    #[error("Something went wrong.")]
    LookupFailed {
        #[source]
        source: anyhow::Error,
    },
}

impl LookupError {
    pub fn failed(source: impl Into<anyhow::Error>) -> Self {
        Self::LookupFailed {
            source: source.into(),
        }
    }

    /// Message for the error banner.
    #[must_use]
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn user_messages_are_distinct() {
        let messages = [
            LookupError::EmptyQuery.user_message(),
            LookupError::CityNotFound.user_message(),
            LookupError::WeatherUnavailable.user_message(),
            LookupError::failed(anyhow::anyhow!("boom")).user_message(),
        ];

        for (i, a) in messages.iter().enumerate() {
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn lookup_failed_hides_cause_but_keeps_source() {
        let err = LookupError::failed(anyhow::anyhow!("connection reset by peer"));

        assert_eq!(err.user_message(), "Something went wrong.");
        let source = err.source().expect("cause is kept");
        assert!(source.to_string().contains("connection reset"));
    }
}

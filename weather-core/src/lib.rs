//! Core library for the `weathernow` tool.
//!
//! This crate defines:
//! - The city lookup workflow (geocode, then fetch current weather)
//! - Abstraction over the weather provider, with an Open-Meteo implementation
//! - The page state machine and display formatting
//! - Configuration of endpoints
//!
//! It is used by `weathernow-cli`, but can also be reused by other front ends.

pub mod condition;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod report;
pub mod state;
pub mod workflow;

pub use condition::{ConditionInfo, condition_for};
pub use config::Config;
pub use error::LookupError;
pub use model::{CurrentWeather, LookupResult, Place};
pub use provider::{WeatherProvider, openmeteo::OpenMeteoProvider, provider_from_config};
pub use report::WeatherReport;
pub use state::{Session, Ticket, UiState};
pub use workflow::lookup;

use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{InquireError, Text};
use tracing::debug;
use weathernow_core::{Config, Session, UiState, WeatherProvider, lookup, provider_from_config};

use crate::render::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weathernow", version, about = "Live weather for any city")]
pub struct Cli {
    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the current weather for a city.
    Show {
        /// City name; several words are joined with spaces.
        #[arg(required = true)]
        city: Vec<String>,
    },

    /// Keep asking for cities until cancelled (Esc or Ctrl-C).
    Interactive,

    /// Edit the geocoding / forecast endpoints.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Show { city } => {
                let provider = provider_from_config(&load_config()?);
                let mut session = Session::new();

                match show_output(session.search(provider.as_ref(), &city.join(" ")).await) {
                    Ok(panel) => println!("{panel}"),
                    Err(banner) => {
                        eprintln!("{banner}");
                        std::process::exit(1);
                    }
                }
            }
            Command::Interactive => {
                let provider = provider_from_config(&load_config()?);
                interactive(provider.as_ref()).await?;
            }
            Command::Configure => configure()?,
        }

        Ok(())
    }
}

fn load_config() -> anyhow::Result<Config> {
    let config = Config::load()?;
    debug!(
        geocoding = %config.search_endpoint(),
        forecast = %config.forecast_endpoint(),
        language = %config.language,
        "configuration loaded"
    );
    Ok(config)
}

/// Settled state of a one-shot lookup: the result panel, or the error banner.
fn show_output(state: &UiState) -> Result<String, String> {
    match state {
        UiState::Error(_) => Err(render(state)),
        _ => Ok(render(state)),
    }
}

async fn interactive(provider: &dyn WeatherProvider) -> anyhow::Result<()> {
    let mut session = Session::new();

    loop {
        let city = match Text::new("City:")
            .with_placeholder("Enter city name...")
            .prompt()
        {
            Ok(city) => city,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e).context("Failed to read city name"),
        };

        let ticket = session.begin();
        println!("{}", render(session.state()));

        let outcome = lookup(provider, &city).await;
        if !session.finish(ticket, outcome) {
            debug!(%city, "lookup superseded, keeping newer state");
            continue;
        }
        println!("{}\n", render(session.state()));
    }

    Ok(())
}

fn configure() -> anyhow::Result<()> {
    let current = Config::load()?;

    let config = Config {
        geocoding_url: Text::new("Geocoding API base URL:")
            .with_default(&current.geocoding_url)
            .prompt()?,
        forecast_url: Text::new("Forecast API base URL:")
            .with_default(&current.forecast_url)
            .prompt()?,
        language: Text::new("Language for place names:")
            .with_default(&current.language)
            .prompt()?,
    };

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}

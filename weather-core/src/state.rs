//! What the page shows, and how a submission moves it between states.

use tracing::debug;

use crate::{
    error::LookupError, model::LookupResult, provider::WeatherProvider, workflow::lookup,
};

/// The page is in exactly one of these at any time.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum UiState {
    #[default]
    Idle,
    Loading,
    Error(String),
    Success(LookupResult),
}

impl UiState {
    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading)
    }
}

/// Identifies one submission. Only the latest ticket may change the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

/// Holds the current [`UiState`] and guards it against out-of-order outcomes.
///
/// Every submission gets a fresh [`Ticket`]. An outcome arriving for an older
/// ticket (a superseded request that finished late) is dropped, so the state
/// always reflects the most recent submission.
#[derive(Debug, Default)]
pub struct Session {
    state: UiState,
    latest: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Whether the submit control should be disabled.
    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Start a submission: clear any previous error or result and show loading.
    pub fn begin(&mut self) -> Ticket {
        self.latest += 1;
        self.state = UiState::Loading;
        Ticket(self.latest)
    }

    /// Apply the outcome of the submission identified by `ticket`.
    ///
    /// Returns `false` and leaves the state untouched when `ticket` has been
    /// superseded by a later [`Session::begin`].
    pub fn finish(
        &mut self,
        ticket: Ticket,
        outcome: Result<LookupResult, LookupError>,
    ) -> bool {
        if ticket.0 != self.latest || !self.state.is_loading() {
            debug!(?ticket, latest = self.latest, "discarding stale lookup outcome");
            return false;
        }

        self.state = match outcome {
            Ok(result) => UiState::Success(result),
            Err(err) => UiState::Error(err.user_message()),
        };
        true
    }

    /// Submit `query` and wait for it to settle.
    pub async fn search<P>(&mut self, provider: &P, query: &str) -> &UiState
    where
        P: WeatherProvider + ?Sized,
    {
        let ticket = self.begin();
        let outcome = lookup(provider, query).await;
        self.finish(ticket, outcome);
        &self.state
    }
}

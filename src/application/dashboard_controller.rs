// Dashboard controller - Use case for polling and filtering the collection
use crate::application::clock_repository::{PollOutcome, WorldClockRepository};
use crate::domain::view_state::DashboardViewState;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Owns the view state and orchestrates sequenced polls against the
/// repository.
///
/// All mutation happens on the caller's task; fetches run in spawned tasks
/// and report back through the outcome channel the caller provides. Each
/// poll carries a monotonically increasing sequence number and an outcome is
/// applied only if it is newer than the last applied one, so a slow response
/// overtaken by a later poll can never regress the state.
pub struct DashboardController {
    repository: Arc<dyn WorldClockRepository>,
    state: DashboardViewState,
    next_seq: u64,
    applied_seq: u64,
}

impl DashboardController {
    pub fn new(repository: Arc<dyn WorldClockRepository>, use_24_hour: bool) -> Self {
        Self {
            repository,
            state: DashboardViewState::new(use_24_hour),
            next_seq: 0,
            applied_seq: 0,
        }
    }

    pub fn state(&self) -> &DashboardViewState {
        &self.state
    }

    /// Enter the loading phase and spawn a fetch for it.
    ///
    /// The spawned task sends its outcome into `outcomes`; if the receiver
    /// is gone by then (view torn down), the send fails and the response is
    /// discarded rather than applied.
    pub fn spawn_poll(&mut self, outcomes: &mpsc::Sender<PollOutcome>) {
        self.next_seq += 1;
        let seq = self.next_seq;
        self.state.begin_loading();
        debug!(seq, "starting world clocks poll");

        let repository = self.repository.clone();
        let outcomes = outcomes.clone();
        tokio::spawn(async move {
            let result = repository.fetch_world_clocks().await;
            let _ = outcomes.send(PollOutcome { seq, result }).await;
        });
    }

    /// Apply one poll outcome. Returns whether the state changed.
    pub fn apply_poll(&mut self, outcome: PollOutcome) -> bool {
        if outcome.seq <= self.applied_seq {
            debug!(
                seq = outcome.seq,
                applied = self.applied_seq,
                "discarding stale poll outcome"
            );
            return false;
        }
        self.applied_seq = outcome.seq;

        match outcome.result {
            Ok(cities) => {
                info!(count = cities.len(), "world clocks refreshed");
                self.state.apply_cities(cities);
            }
            Err(err) => {
                warn!(%err, "world clocks poll failed");
                self.state.apply_error(err.to_string());
            }
        }
        true
    }

    pub fn set_search_term(&mut self, term: String) {
        self.state.search_term = term;
    }

    pub fn clear_search(&mut self) {
        self.state.search_term.clear();
    }

    /// Flip the 12/24-hour display mode. Pure view state, no fetch.
    pub fn toggle_format(&mut self) {
        self.state.use_24_hour = !self.state.use_24_hour;
    }
}

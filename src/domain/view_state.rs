// Dashboard view state - the loading/ready/error machine and the search filter
use super::city::CityRecord;

/// Where the dashboard is in its fetch lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewPhase {
    /// A poll is in flight (initial mount, timer refresh, or user retry).
    Loading,
    /// The last poll succeeded and `cities` holds its result.
    Ready,
    /// The last poll failed; the message is shown verbatim with a retry
    /// affordance.
    Error(String),
}

/// Everything the screen is rendered from.
///
/// `cities` keeps the fetch order of the last successful poll and is never
/// re-sorted; the search filter only affects what `visible` returns.
#[derive(Debug, Clone)]
pub struct DashboardViewState {
    pub cities: Vec<CityRecord>,
    pub search_term: String,
    pub use_24_hour: bool,
    pub phase: ViewPhase,
}

impl DashboardViewState {
    pub fn new(use_24_hour: bool) -> Self {
        Self {
            cities: Vec::new(),
            search_term: String::new(),
            use_24_hour,
            phase: ViewPhase::Loading,
        }
    }

    /// Re-enter the loading phase for a new poll attempt. A previous error
    /// is cleared here, on the attempt, not on its completion.
    pub fn begin_loading(&mut self) {
        self.phase = ViewPhase::Loading;
    }

    /// Replace the collection wholesale with a successful poll result.
    pub fn apply_cities(&mut self, cities: Vec<CityRecord>) {
        self.cities = cities;
        self.phase = ViewPhase::Ready;
    }

    /// Record a failed poll. The previous collection is discarded so the
    /// error view never sits on top of data it may disagree with.
    pub fn apply_error(&mut self, message: String) {
        self.cities.clear();
        self.phase = ViewPhase::Error(message);
    }

    /// Cities whose name contains the search term, case-insensitively, in
    /// fetch order. Pure; recomputed on every render.
    pub fn visible(&self) -> Vec<&CityRecord> {
        let needle = self.search_term.to_lowercase();
        self.cities
            .iter()
            .filter(|c| c.city.to_lowercase().contains(&needle))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> CityRecord {
        CityRecord {
            city: name.to_string(),
            offset_hours: 0.0,
            is_day: true,
            is_dst: false,
        }
    }

    fn ready_state(names: &[&str]) -> DashboardViewState {
        let mut state = DashboardViewState::new(true);
        state.apply_cities(names.iter().map(|n| record(n)).collect());
        state
    }

    #[test]
    fn test_empty_term_returns_all_in_order() {
        let state = ready_state(&["New York", "London", "Tokyo"]);
        let names: Vec<&str> = state.visible().iter().map(|c| c.city.as_str()).collect();
        assert_eq!(names, vec!["New York", "London", "Tokyo"]);
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let mut state = ready_state(&["London", "Paris", "Los Angeles"]);

        state.search_term = "lon".to_string();
        let names: Vec<&str> = state.visible().iter().map(|c| c.city.as_str()).collect();
        assert_eq!(names, vec!["London"]);

        state.search_term = "LO".to_string();
        let names: Vec<&str> = state.visible().iter().map(|c| c.city.as_str()).collect();
        assert_eq!(names, vec!["London", "Los Angeles"]);
    }

    #[test]
    fn test_clearing_term_restores_full_list() {
        let mut state = ready_state(&["London", "Paris"]);
        state.search_term = "lon".to_string();
        assert_eq!(state.visible().len(), 1);

        state.search_term.clear();
        let names: Vec<&str> = state.visible().iter().map(|c| c.city.as_str()).collect();
        assert_eq!(names, vec!["London", "Paris"]);
        assert_eq!(state.cities.len(), 2);
    }

    #[test]
    fn test_error_discards_previous_cities() {
        let mut state = ready_state(&["London"]);
        state.begin_loading();
        state.apply_error("failed to fetch world clocks: 502 Bad Gateway".to_string());

        assert!(state.cities.is_empty());
        assert_eq!(
            state.phase,
            ViewPhase::Error("failed to fetch world clocks: 502 Bad Gateway".to_string())
        );
    }

    #[test]
    fn test_success_after_error_clears_it() {
        let mut state = DashboardViewState::new(true);
        state.apply_error("network down".to_string());

        state.begin_loading();
        assert_eq!(state.phase, ViewPhase::Loading);

        state.apply_cities(vec![record("Tokyo")]);
        assert_eq!(state.phase, ViewPhase::Ready);
        assert_eq!(state.cities.len(), 1);
    }
}

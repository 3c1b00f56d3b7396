// Full dashboard screen rendering
use crate::domain::view_state::{DashboardViewState, ViewPhase};
use crate::presentation::card::render_card;
use chrono::{DateTime, Utc};
use colored::Colorize;

const TITLE: &str = "World Clock Dashboard";
const SUBTITLE: &str = "Track time across the globe";
const HELP: &str = "commands: search <term> | clear | toggle | retry | quit";

/// Render the whole dashboard to a string.
///
/// Pure function of `(state, now_utc)`: the caller clears the terminal and
/// prints the result, so every tick redraws from scratch and two renders of
/// the same inputs are identical.
pub fn render_screen(state: &DashboardViewState, now_utc: DateTime<Utc>, columns: usize) -> String {
    let mut out = String::new();

    let mode = if state.use_24_hour { "[24h]" } else { "[12h]" };
    out.push_str(&format!("{} {}\n", TITLE.bold(), mode.cyan()));
    out.push_str(&format!("{}\n", SUBTITLE.dimmed()));
    if !state.search_term.is_empty() {
        out.push_str(&format!("filter: \"{}\"\n", state.search_term));
    }
    out.push_str(&format!("{}\n\n", HELP.dimmed()));

    match &state.phase {
        ViewPhase::Loading => {
            out.push_str("Loading world clocks...\n");
        }
        ViewPhase::Error(message) => {
            out.push_str(&format!("{}\n", format!("Error: {}", message).red()));
            out.push_str("Type 'retry' to try again.\n");
        }
        ViewPhase::Ready => {
            let visible = state.visible();
            if visible.is_empty() {
                out.push_str(&format!(
                    "No cities found matching \"{}\"\n",
                    state.search_term
                ));
            } else {
                for chunk in visible.chunks(columns.max(1)) {
                    let cards: Vec<Vec<String>> = chunk
                        .iter()
                        .map(|record| render_card(record, now_utc, state.use_24_hour))
                        .collect();
                    out.push_str(&join_row(&cards));
                    out.push('\n');
                }
            }
        }
    }

    out
}

/// Join a row of equal-height card blocks side by side.
fn join_row(cards: &[Vec<String>]) -> String {
    let height = cards.iter().map(|c| c.len()).max().unwrap_or(0);
    let mut out = String::new();
    for line_idx in 0..height {
        let row: Vec<&str> = cards
            .iter()
            .map(|card| card.get(line_idx).map(String::as_str).unwrap_or(""))
            .collect();
        out.push_str(row.join("  ").trim_end());
        out.push('\n');
    }
    out
}

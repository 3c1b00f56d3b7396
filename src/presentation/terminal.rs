// Terminal event loop - timers, poll outcomes, stdin commands
use crate::application::clock_repository::PollOutcome;
use crate::application::dashboard_controller::DashboardController;
use crate::infrastructure::config::DashboardConfig;
use crate::presentation::input::{parse_command, Command};
use crate::presentation::screen::render_screen;
use chrono::Utc;
use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::time::{self, MissedTickBehavior};
use tracing::{info, warn};

/// Drive the dashboard until quit or ctrl-c.
///
/// One task owns the controller; everything arrives interleaved through the
/// select below, so ticks always read a consistent snapshot and no locking
/// exists anywhere. The poll timer, render timer and outcome receiver live
/// in this scope: leaving the loop drops them, which both cancels the timers
/// and closes the channel, so a fetch still in flight at teardown sends into
/// a closed channel and its response is discarded, never applied.
pub async fn run_dashboard(
    mut controller: DashboardController,
    config: &DashboardConfig,
) -> anyhow::Result<()> {
    let (outcome_tx, mut outcome_rx) = mpsc::channel::<PollOutcome>(8);
    let columns = config.display.columns.max(1);

    // Initial mount kicks off the first poll right away; the timer then
    // fires one poll interval later, not immediately.
    controller.spawn_poll(&outcome_tx);

    let poll_period = Duration::from_secs(config.refresh.poll_interval_secs.max(1));
    let mut poll_timer = time::interval_at(time::Instant::now() + poll_period, poll_period);
    poll_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut render_timer =
        time::interval(Duration::from_millis(config.refresh.tick_interval_ms.max(1)));

    let mut input_lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("shutdown signal received");
                break;
            }
            _ = poll_timer.tick() => {
                controller.spawn_poll(&outcome_tx);
                draw(&controller, columns)?;
            }
            Some(outcome) = outcome_rx.recv() => {
                if controller.apply_poll(outcome) {
                    draw(&controller, columns)?;
                }
            }
            _ = render_timer.tick() => {
                draw(&controller, columns)?;
            }
            line = input_lines.next_line(), if stdin_open => {
                match line {
                    Ok(Some(line)) => {
                        match parse_command(&line) {
                            Some(Command::Search(term)) => controller.set_search_term(term),
                            Some(Command::ClearSearch) => controller.clear_search(),
                            Some(Command::ToggleFormat) => controller.toggle_format(),
                            Some(Command::Retry) => controller.spawn_poll(&outcome_tx),
                            Some(Command::Quit) => break,
                            None => {}
                        }
                        draw(&controller, columns)?;
                    }
                    Ok(None) => {
                        // stdin closed; keep rendering on timers alone
                        stdin_open = false;
                    }
                    Err(err) => {
                        warn!(%err, "failed to read command input");
                        stdin_open = false;
                    }
                }
            }
        }
    }

    info!("dashboard stopped");
    Ok(())
}

/// Clear the terminal and repaint the whole screen from current state.
fn draw(controller: &DashboardController, columns: usize) -> anyhow::Result<()> {
    let screen = render_screen(controller.state(), Utc::now(), columns);
    let mut stdout = std::io::stdout().lock();
    write!(stdout, "\x1b[2J\x1b[H{}", screen)?;
    stdout.flush()?;
    Ok(())
}

//! This is the module handling the `run` sub-command.
//!
//! The tracker runs in its own task, here we only render what it publishes and forward the
//! operator's input:
//!
//! - any line on stdin toggles alert mode,
//! - `q` (or `quit`) stops,
//! - Ctrl-C stops.
//!

use std::io::Write;

use chrono::Utc;
use eyre::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, trace};

use tracker_engine::{Config, StatusPanel, SystemClock, Tracker, TrackerView, UniformJitter};

use crate::RunOpts;

/// What to do with one line of operator input.
///
#[derive(Debug, PartialEq)]
pub enum Command {
    Quit,
    Toggle,
}

impl From<&str> for Command {
    fn from(line: &str) -> Self {
        match line.trim().to_lowercase().as_str() {
            "q" | "quit" | "exit" => Command::Quit,
            _ => Command::Toggle,
        }
    }
}

/// One rendering of the view, text or JSON.
///
pub fn render(view: &TrackerView, json: bool) -> Result<String> {
    let panel = StatusPanel::new(view);
    Ok(if json {
        panel.to_json()?
    } else {
        panel.to_line()
    })
}

/// Run the tracker until told otherwise, returns the final state.
///
#[tracing::instrument(skip(cfg, out))]
pub async fn run_tracker<W: Write>(
    cfg: &Config,
    ropts: &RunOpts,
    out: &mut W,
) -> Result<TrackerView> {
    trace!("run_tracker");

    let period = ropts.interval.unwrap_or(cfg.tracker.interval);
    let jitter = match ropts.seed.or(cfg.tracker.seed) {
        Some(seed) => UniformJitter::seeded(cfg.tracker.jitter, seed)?,
        None => UniformJitter::new(cfg.tracker.jitter)?,
    };

    let mut view = TrackerView::starting_at(cfg.tracker.start(), Utc::now());
    if ropts.alert {
        view.toggle_alert();
    }

    let tracker = Tracker::spawn(view, period, jitter, SystemClock)?;
    let mut changes = tracker.subscribe();

    if ropts.json {
        writeln!(out, "{}", render(&view, true)?)?;
    } else {
        writeln!(out, "{}", StatusPanel::new(&view).to_table())?;
        writeln!(out, "Press Enter to toggle alert mode, q to quit.")?;
    }
    out.flush()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;

    loop {
        tokio::select! {
            changed = changes.changed() => {
                if changed.is_err() {
                    break;
                }
                let current = *changes.borrow_and_update();
                writeln!(out, "{}", render(&current, ropts.json)?)?;
                out.flush()?;

                if ropts.ticks.is_some_and(|n| current.updates >= n) {
                    info!("{} updates done", current.updates);
                    break;
                }
            }
            line = lines.next_line(), if stdin_open => {
                match line? {
                    Some(line) => match Command::from(line.as_str()) {
                        Command::Quit => break,
                        Command::Toggle => {
                            let mode = tracker.toggle().await?;
                            debug!("operator toggled alert mode to {mode}");

                            // The new mode is already published, show it now and mark it seen.
                            //
                            let current = *changes.borrow_and_update();
                            writeln!(out, "{}", render(&current, ropts.json)?)?;
                            out.flush()?;
                        }
                    },
                    None => {
                        debug!("stdin closed");
                        stdin_open = false;
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("interrupted");
                break;
            }
        }
    }

    Ok(tracker.stop().await?)
}

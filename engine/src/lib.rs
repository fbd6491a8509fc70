//! Engine for `moto-tracker`.
//!
//! The state is one `TrackerView`: a simulated location, an alert flag and the time of the
//! last location change.  Around it:
//!
//! - `Jitter` and `Clock` are the two seams the updates depend on, random draws and time,
//! - `Tracker` drives the periodic updates from a tokio task and owns its timer,
//! - `StatusPanel` and `MapView` turn a view into something to display,
//! - `Config` is the on-disk configuration.
//!
//! ```no_run
//! use tracker_engine::{Config, SystemClock, Tracker, TrackerView, UniformJitter};
//!
//! # async fn demo() -> Result<(), tracker_engine::TrackerStatus> {
//! let cfg = Config::default();
//! let view = TrackerView::initialize(chrono::Utc::now());
//! let jitter = UniformJitter::new(cfg.tracker.jitter)?;
//!
//! let tracker = Tracker::spawn(view, cfg.tracker.interval, jitter, SystemClock)?;
//! tracker.toggle().await?;
//! let last = tracker.stop().await?;
//! # Ok(())
//! # }
//! ```
//!

use clap::{crate_name, crate_version};

pub use alert::*;
pub use clock::*;
pub use config::*;
pub use error::*;
pub use jitter::*;
pub use map::*;
pub use panel::*;
pub use tracker::*;
pub use view::*;

mod alert;
mod clock;
mod config;
mod error;
mod jitter;
mod map;
mod panel;
mod tracker;
mod view;

const NAME: &str = crate_name!();
const VERSION: &str = crate_version!();

/// Returns engine version
///
pub fn version() -> String {
    format!("{}/{}", NAME, VERSION)
}

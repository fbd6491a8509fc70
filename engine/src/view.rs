//! The Tracker View state and its three operations.
//!
//! `TrackerView` is a plain value: `initialize()` builds it, `tick()` moves the location and
//! refreshes the timestamp, `toggle_alert()` flips the alert mode.  None of them can fail and
//! none of them knows about timers, see `Tracker` for the periodic part.
//!

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use tracker_common::Coordinate;

use crate::{AlertMode, Jitter};

/// Everything we display.
///
/// `last_update` is the time of the most recent location change, or of the initialization
/// if there has been none yet.
///
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct TrackerView {
    /// Current simulated location
    pub coordinate: Coordinate,
    /// Alert flag
    pub alert: AlertMode,
    /// Time of the last location change
    pub last_update: DateTime<Utc>,
    /// Number of updates since initialization
    pub updates: u64,
}

impl TrackerView {
    /// Default location, alert off.
    ///
    pub fn initialize(now: DateTime<Utc>) -> Self {
        Self::starting_at(Coordinate::default(), now)
    }

    /// Same as `initialize()` but from a given location.
    ///
    #[tracing::instrument]
    pub fn starting_at(coordinate: Coordinate, now: DateTime<Utc>) -> Self {
        TrackerView {
            coordinate,
            alert: AlertMode::default(),
            last_update: now,
            updates: 0,
        }
    }

    /// Perturb the location by one draw per axis, latitude first.
    ///
    /// Out of range values are kept as-is and only logged.
    ///
    pub fn tick<J: Jitter + ?Sized>(&mut self, jitter: &mut J, now: DateTime<Utc>) -> Coordinate {
        let dlat = jitter.draw();
        let dlng = jitter.draw();

        self.coordinate = self.coordinate.offset(dlat, dlng);
        self.last_update = now;
        self.updates += 1;
        trace!("update #{} to {}", self.updates, self.coordinate);

        if !self.coordinate.is_valid() {
            warn!("location {} is outside geographic bounds", self.coordinate);
        }
        self.coordinate
    }

    /// Flip the alert mode, returns the new one.
    ///
    pub fn toggle_alert(&mut self) -> AlertMode {
        let mode = self.alert.toggle();
        trace!("alert mode is now {mode}");
        mode
    }

    #[inline]
    pub fn is_alert(&self) -> bool {
        self.alert.is_active()
    }
}

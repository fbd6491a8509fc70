use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackerStatus {
    #[error("Jitter bound {0} is negative or too large")]
    BadJitter(f64),
    #[error("Zoom level {0} is above the maximum of {1}")]
    BadZoom(u8, u8),
    #[error("Tracker task failed: {0}")]
    Join(String),
    #[error("Tracker is stopped.")]
    Stopped,
    #[error("Update interval can not be {0:?}")]
    ZeroInterval(Duration),
}

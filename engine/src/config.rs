//! Tracker configuration, loaded through `tracker_common::ConfigFile`.
//!
//! ```hcl
//! version = 1
//!
//! tracker {
//!   latitude  = 51.505
//!   longitude = -0.09
//!   interval  = "3s"
//!   jitter    = 0.0005
//!   seed      = 42
//! }
//!
//! map {
//!   zoom        = 13
//!   url         = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png"
//!   subdomains  = ["a", "b", "c"]
//!   attribution = "© OpenStreetMap contributors"
//! }
//! ```
//!
//! Every field is optional and falls back to the values above (without `seed`).
//!

use std::time::Duration;

use serde::{Deserialize, Serialize};

use tracker_common::{Coordinate, Versioned, DEFAULT_LAT, DEFAULT_LNG};

use crate::{check_bound, TileSource, TrackerStatus, DEFAULT_JITTER, DEFAULT_ZOOM, MAX_ZOOM};

/// Current version
pub const CVERSION: usize = 1;

/// Default update period
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(3000);

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct Config {
    pub version: usize,
    pub tracker: TrackerConfig,
    pub map: MapConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            version: CVERSION,
            tracker: TrackerConfig::default(),
            map: MapConfig::default(),
        }
    }
}

impl Versioned for Config {
    const CVERSION: usize = CVERSION;

    fn version(&self) -> usize {
        self.version
    }
}

impl Config {
    /// Check values the tracker can not work with.
    ///
    #[tracing::instrument]
    pub fn validate(&self) -> Result<(), TrackerStatus> {
        let t = &self.tracker;
        if t.interval.is_zero() {
            return Err(TrackerStatus::ZeroInterval(t.interval));
        }
        check_bound(t.jitter)?;
        if self.map.zoom > MAX_ZOOM {
            return Err(TrackerStatus::BadZoom(self.map.zoom, MAX_ZOOM));
        }
        Ok(())
    }
}

/// Simulation parameters.
///
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct TrackerConfig {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(with = "humantime_duration")]
    pub interval: Duration,
    pub jitter: f64,
    pub seed: Option<u64>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig {
            latitude: DEFAULT_LAT,
            longitude: DEFAULT_LNG,
            interval: DEFAULT_INTERVAL,
            jitter: DEFAULT_JITTER,
            seed: None,
        }
    }
}

impl TrackerConfig {
    #[inline]
    pub fn start(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// What the map surface is fed with.
///
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct MapConfig {
    pub zoom: u8,
    pub url: String,
    pub subdomains: Vec<String>,
    pub attribution: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        let tiles = TileSource::default();
        MapConfig {
            zoom: DEFAULT_ZOOM,
            url: tiles.url,
            subdomains: tiles.subdomains,
            attribution: tiles.attribution,
        }
    }
}

impl MapConfig {
    pub fn tiles(&self) -> TileSource {
        TileSource {
            url: self.url.clone(),
            subdomains: self.subdomains.clone(),
            attribution: self.attribution.clone(),
        }
    }
}

/// Durations are written the human way, "3s", "1500ms", "1m 30s".
///
mod humantime_duration {
    use std::time::Duration;

    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, ser: S) -> Result<S::Ok, S::Error> {
        ser.collect_str(&humantime::format_duration(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<Duration, D::Error> {
        let s = String::deserialize(de)?;
        humantime::parse_duration(&s).map_err(de::Error::custom)
    }
}

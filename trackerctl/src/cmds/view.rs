//! This is the module handling the `status` and `map` sub-commands.
//!

use chrono::Utc;
use eyre::Result;
use tracing::trace;

use tracker_engine::{Config, MapView, StatusPanel, TrackerView};

use crate::ViewOpts;

/// Initial view as configured, optionally with alert mode on.
///
pub fn initial_view(cfg: &Config, alert: bool) -> TrackerView {
    let mut view = TrackerView::starting_at(cfg.tracker.start(), Utc::now());
    if alert {
        view.toggle_alert();
    }
    view
}

/// Render the status panel
///
#[tracing::instrument(skip(cfg))]
pub fn show_status(cfg: &Config, vopts: &ViewOpts) -> Result<String> {
    trace!("show_status");

    let panel = StatusPanel::new(&initial_view(cfg, vopts.alert));
    Ok(if vopts.json {
        panel.to_json()?
    } else {
        panel.to_table()
    })
}

/// Render the map description
///
#[tracing::instrument(skip(cfg))]
pub fn show_map(cfg: &Config, vopts: &ViewOpts) -> Result<String> {
    trace!("show_map");

    let map = MapView::new(&initial_view(cfg, vopts.alert), &cfg.map);
    Ok(if vopts.json {
        let mut data = serde_json::to_value(&map)?;
        data["tile_url"] = serde_json::Value::String(map.center_tile_url());
        serde_json::to_string(&data)?
    } else {
        map.to_table()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(false, "System Armed")]
    #[case(true, "Alert Mode Active")]
    fn test_show_status(#[case] alert: bool, #[case] label: &str) {
        let cfg = Config::default();
        let out = show_status(&cfg, &ViewOpts { alert, json: false }).unwrap();

        assert!(out.contains(label));
        assert!(out.contains("51.505000, -0.090000"));
    }

    #[test]
    fn test_show_map_json() {
        let cfg = Config::default();
        let out = show_map(&cfg, &ViewOpts { alert: false, json: true }).unwrap();

        let data: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(13, data["zoom"]);
        assert_eq!(
            "https://b.tile.openstreetmap.org/13/4093/2724.png",
            data["tile_url"]
        );
    }

    #[test]
    fn test_initial_view_from_config() {
        let mut cfg = Config::default();
        cfg.tracker.latitude = 48.85;
        cfg.tracker.longitude = 2.35;

        let view = initial_view(&cfg, true);
        assert_eq!("48.850000, 2.350000", view.coordinate.to_string());
        assert!(view.is_alert());
        assert_eq!(0, view.updates);
    }
}

//! Status panel, the textual part of the view.
//!
use chrono::{DateTime, Local, Utc};
use serde::Serialize;
use tabled::builder::Builder;
use tabled::settings::Style;

use crate::{AlertMode, Color, Icon, TrackerView};

/// Header title
pub const TITLE: &str = "Motorbike Security System";

/// Everything shown around the map, already formatted.
///
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StatusPanel {
    pub title: &'static str,
    /// `lat, lng` with 6 decimals
    pub location: String,
    pub alert: AlertMode,
    pub status: &'static str,
    pub color: Color,
    pub button: &'static str,
    pub icon: Icon,
    /// Local time of day
    pub last_update: String,
    pub updates: u64,
}

impl StatusPanel {
    pub fn new(view: &TrackerView) -> Self {
        StatusPanel {
            title: TITLE,
            location: view.coordinate.to_string(),
            alert: view.alert,
            status: view.alert.status_label(),
            color: view.alert.color(),
            button: view.alert.button_label(),
            icon: view.alert.icon(),
            last_update: time_of_day(view.last_update),
            updates: view.updates,
        }
    }

    /// Full table.
    ///
    pub fn to_table(&self) -> String {
        let mut builder = Builder::default();
        builder.push_record(vec![self.title, ""]);
        builder.push_record(vec!["Location", self.location.as_str()]);
        builder.push_record(vec!["Status", self.status]);
        builder.push_record(vec!["Last Update", self.last_update.as_str()]);
        builder.push_record(vec![self.icon.to_string(), self.button.to_string()]);

        builder.build().with(Style::modern()).to_string()
    }

    /// One line, for continuous output.
    ///
    pub fn to_line(&self) -> String {
        format!(
            "[{}] #{} {} | {}",
            self.last_update, self.updates, self.location, self.status
        )
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Display timestamps in local time.
///
pub fn time_of_day(tm: DateTime<Utc>) -> String {
    tm.with_timezone(&Local).format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn view() -> TrackerView {
        TrackerView::initialize(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap())
    }

    #[test]
    fn test_panel_toggle_scenario() {
        let mut view = view();

        let panel = StatusPanel::new(&view);
        assert_eq!("✅ System Armed", panel.status);
        assert_eq!("51.505000, -0.090000", panel.location);
        assert_eq!(Color::Green, panel.color);
        assert_eq!("Enable Alert Mode", panel.button);

        view.toggle_alert();
        let panel = StatusPanel::new(&view);
        assert_eq!("🚨 Alert Mode Active", panel.status);
        assert_eq!(Color::Red, panel.color);
        assert_eq!("Disable Alert Mode", panel.button);

        view.toggle_alert();
        let panel = StatusPanel::new(&view);
        assert_eq!("✅ System Armed", panel.status);
    }

    #[test]
    fn test_panel_last_update_is_local() {
        let view = view();
        let panel = StatusPanel::new(&view);

        let expected = view.last_update.with_timezone(&Local).format("%H:%M:%S").to_string();
        assert_eq!(expected, panel.last_update);
        assert_eq!(8, panel.last_update.len());
    }

    #[test]
    fn test_panel_renderings() {
        let panel = StatusPanel::new(&view());

        let table = panel.to_table();
        assert!(table.contains(TITLE));
        assert!(table.contains("System Armed"));
        assert!(table.contains("shield-check"));

        let line = panel.to_line();
        assert!(line.contains("#0 51.505000, -0.090000"));

        let json: serde_json::Value = serde_json::from_str(&panel.to_json().unwrap()).unwrap();
        assert_eq!("safe", json["alert"]);
        assert_eq!("green", json["color"]);
        assert_eq!("51.505000, -0.090000", json["location"]);
    }
}

//! Description of the map surface.
//!
//! We do not fetch tiles ourselves, `MapView` is what a map widget needs to draw the view:
//! center, zoom, one marker with its popup and the tile source.  The center tile URL is
//! computed the same way Leaflet does, subdomain included.
//!

use serde::Serialize;
use tabled::builder::Builder;
use tabled::settings::Style;

use tracker_common::{Coordinate, Tile};

use crate::{Icon, MapConfig, TrackerView};

/// Default zoom level
pub const DEFAULT_ZOOM: u8 = 13;
/// OSM does not go further
pub const MAX_ZOOM: u8 = 19;

/// OpenStreetMap standard tiles
pub const OSM_TILES: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
/// Mandatory OSM attribution
pub const OSM_ATTRIBUTION: &str =
    "© OpenStreetMap contributors (https://www.openstreetmap.org/copyright)";

/// Marker popup, first line
pub const POPUP: &str = "Your motorbike is here!";

/// Tile URL template and its attribution.
///
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TileSource {
    /// Template with `{s}`, `{z}`, `{x}` and `{y}` placeholders
    pub url: String,
    /// Values for `{s}`
    pub subdomains: Vec<String>,
    pub attribution: String,
}

impl Default for TileSource {
    fn default() -> Self {
        TileSource {
            url: OSM_TILES.to_string(),
            subdomains: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            attribution: OSM_ATTRIBUTION.to_string(),
        }
    }
}

impl TileSource {
    /// Fill in the template for one tile.
    ///
    pub fn url_for(&self, tile: &Tile) -> String {
        let sub = if self.subdomains.is_empty() {
            ""
        } else {
            let idx = (u64::from(tile.x) + u64::from(tile.y)) % self.subdomains.len() as u64;
            self.subdomains[idx as usize].as_str()
        };
        self.url
            .replace("{s}", sub)
            .replace("{z}", &tile.z.to_string())
            .replace("{x}", &tile.x.to_string())
            .replace("{y}", &tile.y.to_string())
    }
}

/// The single marker on the map.
///
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Marker {
    pub position: Coordinate,
    pub popup: String,
    pub icon: Icon,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MapView {
    pub center: Coordinate,
    pub zoom: u8,
    pub marker: Marker,
    pub tiles: TileSource,
}

impl MapView {
    /// Center and marker both follow the tracked location.
    ///
    pub fn new(view: &TrackerView, cfg: &MapConfig) -> Self {
        let popup = format!("{POPUP}\nStatus: {}", view.alert.popup_label());
        MapView {
            center: view.coordinate,
            zoom: cfg.zoom,
            marker: Marker {
                position: view.coordinate,
                popup,
                icon: view.alert.icon(),
            },
            tiles: cfg.tiles(),
        }
    }

    pub fn center_tile(&self) -> Tile {
        self.center.tile(self.zoom)
    }

    pub fn center_tile_url(&self) -> String {
        self.tiles.url_for(&self.center_tile())
    }

    /// Render as a table.
    ///
    pub fn to_table(&self) -> String {
        let mut builder = Builder::default();
        builder.push_record(vec!["Map", ""]);
        builder.push_record(vec!["Center".to_string(), self.center.to_string()]);
        builder.push_record(vec!["Zoom".to_string(), self.zoom.to_string()]);
        builder.push_record(vec!["Marker".to_string(), self.marker.position.to_string()]);
        builder.push_record(vec!["Popup".to_string(), self.marker.popup.clone()]);
        builder.push_record(vec!["Tile".to_string(), self.center_tile().to_string()]);
        builder.push_record(vec!["Tile URL".to_string(), self.center_tile_url()]);
        builder.push_record(vec!["Attribution".to_string(), self.tiles.attribution.clone()]);

        builder.build().with(Style::modern()).to_string()
    }
}

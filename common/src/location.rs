//! Location related module
//!
//! v1: basic format, only Lat, Lng
//! v2: added slippy map tiles (see [OSM wiki](https://wiki.openstreetmap.org/wiki/Slippy_map_tilenames))
//!
use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Default latitude, central London
pub const DEFAULT_LAT: f64 = 51.505;
/// Default longitude
pub const DEFAULT_LNG: f64 = -0.09;

/// Web-Mercator is undefined beyond this latitude
pub const MAX_MERCATOR_LAT: f64 = 85.051_128_78;

/// Actual location, in decimal degrees.
///
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct Coordinate {
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub lng: f64,
}

impl Default for Coordinate {
    fn default() -> Self {
        Coordinate {
            lat: DEFAULT_LAT,
            lng: DEFAULT_LNG,
        }
    }
}

impl Coordinate {
    #[inline]
    pub fn new(lat: f64, lng: f64) -> Self {
        Coordinate { lat, lng }
    }

    /// Return a new coordinate moved by `dlat`/`dlng` degrees.  No wrapping or clamping is
    /// done, callers decide what to do with out-of-range values.
    ///
    #[inline]
    pub fn offset(&self, dlat: f64, dlng: f64) -> Self {
        Coordinate {
            lat: self.lat + dlat,
            lng: self.lng + dlng,
        }
    }

    /// Latitude in [-90, 90] and longitude in [-180, 180]
    ///
    pub fn is_valid(&self) -> bool {
        (-90. ..=90.).contains(&self.lat) && (-180. ..=180.).contains(&self.lng)
    }

    /// Planar distance in degrees, good enough for jitter-sized offsets.
    ///
    pub fn distance(&self, other: &Coordinate) -> f64 {
        (self.lat - other.lat).hypot(self.lng - other.lng)
    }

    /// Tile containing this location at the given zoom level.
    ///
    pub fn tile(&self, zoom: u8) -> Tile {
        Tile::from_coordinate(self, zoom)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lng)
    }
}

/// One slippy map tile, `z/x/y`.
///
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Tile {
    pub x: u32,
    pub y: u32,
    pub z: u8,
}

impl Tile {
    /// Project a coordinate with Web-Mercator.
    ///
    /// Latitude is clamped to the projection limits and longitude is brought back into
    /// [-180, 180) for the computation only, the coordinate itself is not modified.
    ///
    #[tracing::instrument]
    pub fn from_coordinate(loc: &Coordinate, zoom: u8) -> Self {
        let n = 2f64.powi(i32::from(zoom));
        let max = n - 1.;

        let lat = loc.lat.clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT).to_radians();
        let lng = (loc.lng + 180.).rem_euclid(360.) - 180.;

        let x = ((lng + 180.) / 360. * n).floor().clamp(0., max);
        let y = ((1. - (lat.tan() + 1. / lat.cos()).ln() / PI) / 2. * n)
            .floor()
            .clamp(0., max);
        trace!("tile {zoom}/{x}/{y}");

        Tile {
            x: x as u32,
            y: y as u32,
            z: zoom,
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.z, self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[test]
    fn test_default_location() {
        let loc = Coordinate::default();
        assert_eq!(51.505, loc.lat);
        assert_eq!(-0.09, loc.lng);
        assert_eq!("51.505000, -0.090000", loc.to_string());
    }

    #[rstest]
    #[case(0., 0., true)]
    #[case(90., 180., true)]
    #[case(-90., -180., true)]
    #[case(90.0001, 0., false)]
    #[case(0., -180.0001, false)]
    fn test_is_valid(#[case] lat: f64, #[case] lng: f64, #[case] valid: bool) {
        assert_eq!(valid, Coordinate::new(lat, lng).is_valid());
    }

    #[test]
    fn test_offset_does_not_clamp() {
        let loc = Coordinate::new(89.9999, 179.9999).offset(0.0005, 0.0005);
        assert!(!loc.is_valid());
        assert_eq!("90.000400, 180.000400", loc.to_string());
    }

    #[test_pretty_log::test]
    fn test_distance() {
        let a = Coordinate::new(0., 0.);
        let b = Coordinate::new(3., 4.);
        assert_eq!(5., a.distance(&b));
        assert_eq!(0., b.distance(&b));
    }

    #[rstest]
    #[case(51.505, -0.09, 13, (4093, 2724))]
    #[case(50.8, 4.4, 10, (524, 343))]
    #[case(0., 0., 0, (0, 0))]
    #[case(0., 0., 1, (1, 1))]
    #[case(85.2, 179.99, 2, (3, 0))]
    #[case(-85.2, -180., 2, (0, 3))]
    fn test_tile_from_coordinate(
        #[case] lat: f64,
        #[case] lng: f64,
        #[case] zoom: u8,
        #[case] xy: (u32, u32),
    ) {
        let tile = Coordinate::new(lat, lng).tile(zoom);
        assert_eq!(xy, (tile.x, tile.y));
        assert_eq!(zoom, tile.z);
    }

    #[test]
    fn test_tile_display() {
        let tile = Coordinate::default().tile(13);
        assert_eq!("13/4093/2724", tile.to_string());
    }

    proptest! {
        #[test]
        fn test_tile_always_in_range(lat in -200f64..200., lng in -400f64..400., zoom in 0u8..=19) {
            let tile = Coordinate::new(lat, lng).tile(zoom);
            let n = 1u32 << zoom;
            prop_assert!(tile.x < n);
            prop_assert!(tile.y < n);
        }
    }
}

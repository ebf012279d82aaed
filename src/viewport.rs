use std::fmt;

use crate::constants::SINGLE_POINT_ZOOM;
use crate::types::FeatureCollection;
use crate::utils::round_coordinate;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Viewport {
    /// Nothing to show; renders as `0,0,0`.
    Empty,
    Center { lon: f64, lat: f64, zoom: u8 },
    /// Let the API fit the overlay bounds.
    Auto,
}

impl Viewport {
    /// A lone point has no bounding box to fit, so it gets a fixed close zoom.
    pub fn from_geojson(geojson: &FeatureCollection) -> Self {
        match geojson.features.as_slice() {
            [] => Viewport::Empty,
            [feature] => match feature.geometry.single_position() {
                // `+ 0.0` folds -0.0 into 0.0 so it never renders as `-0`
                Some([lon, lat]) => Viewport::Center {
                    lon: round_coordinate(lon) + 0.0,
                    lat: round_coordinate(lat) + 0.0,
                    zoom: SINGLE_POINT_ZOOM,
                },
                None => Viewport::Auto,
            },
            _ => Viewport::Auto,
        }
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, Viewport::Auto)
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Viewport::Empty => f.write_str("0,0,0"),
            Viewport::Center { lon, lat, zoom } => write!(f, "{lon},{lat},{zoom}"),
            Viewport::Auto => f.write_str("auto"),
        }
    }
}

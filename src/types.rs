use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::{DEFAULT_ALT, DEFAULT_HEIGHT, DEFAULT_STYLE, DEFAULT_WIDTH};

/// One input row. Point maps read the coordinate fields, area maps read
/// `geometry`; both honor a per-record `color`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, alias = "x_icon", skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Value>,
}

impl Record {
    pub fn point(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: Some(latitude),
            longitude: Some(longitude),
            ..Self::default()
        }
    }

    pub fn area(geometry: Value) -> Self {
        Self {
            geometry: Some(geometry),
            ..Self::default()
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn latitude(&self) -> Option<f64> {
        self.latitude.or(self.lat)
    }

    pub fn longitude(&self) -> Option<f64> {
        self.longitude.or(self.lng).or(self.lon)
    }
}

/// Map-wide marker defaults applied when a record has no override.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Markers {
    pub color: Option<String>,
    pub icon: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapOptions {
    pub width: u32,
    pub height: u32,
    pub style: String,
    pub alt: String,
    pub markers: Markers,
    pub access_token: Option<String>,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            style: DEFAULT_STYLE.to_string(),
            alt: DEFAULT_ALT.to_string(),
            markers: Markers::default(),
            access_token: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MultiPoint {
    #[serde(rename = "type")]
    pub type_field: &'static str,
    pub coordinates: Vec<[f64; 2]>,
}

impl MultiPoint {
    pub fn new(coordinates: Vec<[f64; 2]>) -> Self {
        Self {
            type_field: "MultiPoint",
            coordinates,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Geometry {
    MultiPoint(MultiPoint),
    /// Caller supplied GeoJSON geometry, serialized exactly as given.
    Raw(Value),
}

impl Geometry {
    /// The lone `[lon, lat]` pair when this is a MultiPoint holding exactly one
    /// position.
    pub fn single_position(&self) -> Option<[f64; 2]> {
        match self {
            Geometry::MultiPoint(points) => match points.coordinates.as_slice() {
                [position] => Some(*position),
                _ => None,
            },
            Geometry::Raw(value) => {
                if value.get("type").and_then(Value::as_str) != Some("MultiPoint") {
                    return None;
                }
                match value.get("coordinates").and_then(Value::as_array)?.as_slice() {
                    [position] => {
                        let pair = position.as_array()?;
                        Some([pair.first()?.as_f64()?, pair.get(1)?.as_f64()?])
                    }
                    _ => None,
                }
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MarkerProperties {
    #[serde(rename = "marker-color")]
    pub marker_color: String,
    #[serde(rename = "marker-symbol", skip_serializing_if = "Option::is_none")]
    pub marker_symbol: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AreaProperties {
    pub fill: String,
    #[serde(rename = "fill-opacity")]
    pub fill_opacity: f64,
    pub stroke: String,
    #[serde(rename = "stroke-width")]
    pub stroke_width: u32,
    #[serde(rename = "stroke-opacity")]
    pub stroke_opacity: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Properties {
    Marker(MarkerProperties),
    Area(AreaProperties),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub type_field: &'static str,
    pub geometry: Geometry,
    pub properties: Properties,
}

impl Feature {
    pub fn new(geometry: Geometry, properties: Properties) -> Self {
        Self {
            type_field: "Feature",
            geometry,
            properties,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub type_field: &'static str,
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            type_field: "FeatureCollection",
            features,
        }
    }
}

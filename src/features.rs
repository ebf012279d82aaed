use std::collections::HashMap;

use crate::constants::{
    AREA_FILL_OPACITY, AREA_STROKE_OPACITY, AREA_STROKE_WIDTH, DEFAULT_AREA_COLOR,
    DEFAULT_MARKER_COLOR,
};
use crate::error::{MapError, Result};
use crate::types::{
    AreaProperties, Feature, Geometry, MarkerProperties, Markers, MultiPoint, Properties, Record,
};
use crate::utils::round_coordinate;

/// Which kind of overlay a map draws from its records.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MapKind {
    /// Markers, one MultiPoint feature per (color, icon) group.
    #[default]
    Point,
    /// Filled shapes, one feature per record.
    Area,
}

impl MapKind {
    pub fn generate_features(self, records: &[Record], markers: &Markers) -> Result<Vec<Feature>> {
        match self {
            MapKind::Point => point_features(records, markers),
            MapKind::Area => area_features(records, markers),
        }
    }
}

impl std::str::FromStr for MapKind {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "point" | "points" | "marker" | "markers" => Ok(MapKind::Point),
            "area" | "areas" | "polygon" | "polygons" => Ok(MapKind::Area),
            other => Err(format!("Unknown map kind: {other}")),
        }
    }
}

struct MarkerGroup<'a> {
    color: &'a str,
    icon: Option<&'a str>,
    coordinates: Vec<[f64; 2]>,
}

fn point_features(records: &[Record], markers: &Markers) -> Result<Vec<Feature>> {
    let default_color = markers.color.as_deref().unwrap_or(DEFAULT_MARKER_COLOR);
    let default_icon = markers.icon.as_deref();

    let mut groups: Vec<MarkerGroup<'_>> = Vec::new();
    let mut group_index: HashMap<(&str, Option<&str>), usize> = HashMap::new();
    for (index, record) in records.iter().enumerate() {
        let color = record.color.as_deref().unwrap_or(default_color);
        let icon = record.icon.as_deref().or(default_icon);
        let position = record_position(index, record)?;

        let slot = *group_index.entry((color, icon)).or_insert_with(|| {
            groups.push(MarkerGroup {
                color,
                icon,
                coordinates: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].coordinates.push(position);
    }

    Ok(groups
        .into_iter()
        .map(|group| {
            Feature::new(
                Geometry::MultiPoint(MultiPoint::new(group.coordinates)),
                Properties::Marker(MarkerProperties {
                    marker_color: group.color.to_string(),
                    marker_symbol: group.icon.map(str::to_string),
                }),
            )
        })
        .collect())
}

fn record_position(index: usize, record: &Record) -> Result<[f64; 2]> {
    let longitude = record.longitude().ok_or(MapError::MissingCoordinate {
        index,
        field: "longitude",
    })?;
    let latitude = record.latitude().ok_or(MapError::MissingCoordinate {
        index,
        field: "latitude",
    })?;
    Ok([round_coordinate(longitude), round_coordinate(latitude)])
}

fn area_features(records: &[Record], markers: &Markers) -> Result<Vec<Feature>> {
    let default_color = markers.color.as_deref().unwrap_or(DEFAULT_AREA_COLOR);

    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let geometry = record
                .geometry
                .clone()
                .ok_or(MapError::MissingGeometry { index })?;
            let color = record.color.as_deref().unwrap_or(default_color);
            Ok(Feature::new(
                Geometry::Raw(geometry),
                Properties::Area(AreaProperties {
                    fill: color.to_string(),
                    fill_opacity: AREA_FILL_OPACITY,
                    stroke: color.to_string(),
                    stroke_width: AREA_STROKE_WIDTH,
                    stroke_opacity: AREA_STROKE_OPACITY,
                }),
            ))
        })
        .collect()
}

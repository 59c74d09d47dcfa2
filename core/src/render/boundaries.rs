//! Country boundary layer loaded from GeoJSON.
//!
//! Only `Polygon` and `MultiPolygon` geometries are drawn. Features without a
//! geometry, or with any other geometry type, are skipped.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::RenderError;

/// A closed ring as `(longitude, latitude)` pairs.
pub type Ring = Vec<(f64, f64)>;

/// One polygon: the exterior ring first, then any holes.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub rings: Vec<Ring>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundaryLayer {
    polygons: Vec<Polygon>,
}

#[derive(Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Deserialize)]
struct Feature {
    geometry: Option<RawGeometry>,
}

#[derive(Deserialize)]
struct RawGeometry {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    coordinates: Value,
}

// GeoJSON positions may carry an altitude after longitude and latitude.
type Position = Vec<f64>;

impl BoundaryLayer {
    pub fn load(path: &Path) -> Result<Self, RenderError> {
        let json = fs::read_to_string(path).map_err(|source| RenderError::ReadBoundaries {
            path: path.to_path_buf(),
            source,
        })?;
        let layer = Self::from_geojson_str(&json)?;
        debug!("Loaded {} boundary polygons from {}", layer.len(), path.display());
        Ok(layer)
    }

    pub fn from_geojson_str(json: &str) -> Result<Self, RenderError> {
        let collection: FeatureCollection = serde_json::from_str(json)?;
        let mut polygons = Vec::new();

        for geometry in collection.features.into_iter().filter_map(|f| f.geometry) {
            match geometry.kind.as_str() {
                "Polygon" => {
                    let rings: Vec<Vec<Position>> = serde_json::from_value(geometry.coordinates)?;
                    polygons.push(to_polygon(rings));
                }
                "MultiPolygon" => {
                    let parts: Vec<Vec<Vec<Position>>> = serde_json::from_value(geometry.coordinates)?;
                    polygons.extend(parts.into_iter().map(to_polygon));
                }
                other => debug!("Ignoring {other} geometry in boundary layer"),
            }
        }

        Ok(Self { polygons })
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }
}

fn to_polygon(rings: Vec<Vec<Position>>) -> Polygon {
    let rings = rings
        .into_iter()
        .map(|ring| {
            ring.into_iter()
                .filter_map(|position| match position.as_slice() {
                    [longitude, latitude, ..] => Some((*longitude, *latitude)),
                    _ => None,
                })
                .collect::<Ring>()
        })
        .filter(|ring| ring.len() >= 3)
        .collect();
    Polygon { rings }
}

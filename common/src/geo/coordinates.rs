//! # Coordinate Collection
//!
//! The plotted points of one run, stored as two parallel sequences the way a
//! scatter plot consumes them. Entries are only ever appended in pairs, so the
//! longitude and latitude sequences always have the same length.

use super::location::LocationRecord;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub longitude: f64,
    pub latitude: f64,
}

impl From<&LocationRecord> for Coordinate {
    fn from(record: &LocationRecord) -> Self {
        Self {
            longitude: record.longitude,
            latitude: record.latitude,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoordinateCollection {
    longitudes: Vec<f64>,
    latitudes: Vec<f64>,
}

impl CoordinateCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, coordinate: Coordinate) {
        self.longitudes.push(coordinate.longitude);
        self.latitudes.push(coordinate.latitude);
    }

    pub fn len(&self) -> usize {
        self.longitudes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.longitudes.is_empty()
    }

    pub fn longitudes(&self) -> &[f64] {
        &self.longitudes
    }

    pub fn latitudes(&self) -> &[f64] {
        &self.latitudes
    }

    pub fn iter(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.longitudes
            .iter()
            .zip(&self.latitudes)
            .map(|(&longitude, &latitude)| Coordinate {
                longitude,
                latitude,
            })
    }
}

impl FromIterator<Coordinate> for CoordinateCollection {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        let mut collection = Self::new();
        for coordinate in iter {
            collection.push(coordinate);
        }
        collection
    }
}

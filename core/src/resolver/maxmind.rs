//! MaxMind DB adapter.
//!
//! Reads a GeoLite2-City style `.mmdb` file. The whole file is loaded into
//! memory when the geolocator is opened and released when it is dropped.

use std::collections::BTreeMap;
use std::net::IpAddr;
use std::path::{Path, PathBuf};

use ipmapper_common::geo::location::LocationRecord;
use ipmapper_common::geolocation::{GeolocationError, Geolocator};
use maxminddb::{MaxMindDbError, Reader};
use serde::Deserialize;
use tracing::{debug, info};

const ENGLISH: &str = "en";

pub struct MaxMindGeolocator {
    reader: Reader<Vec<u8>>,
    path: PathBuf,
}

impl MaxMindGeolocator {
    pub fn open(path: &Path) -> Result<Self, GeolocationError> {
        let reader = Reader::open_readfile(path).map_err(|source| GeolocationError::Open {
            path: path.to_path_buf(),
            source: Box::new(source),
        })?;
        info!("Opened geolocation database {}", path.display());
        Ok(Self {
            reader,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Geolocator for MaxMindGeolocator {
    fn locate(&self, address: IpAddr) -> Result<Option<LocationRecord>, GeolocationError> {
        let result = self
            .reader
            .lookup(address)
            .map_err(|source| lookup_error(address, source))?;
        let record: Option<CityRecord> = result
            .decode()
            .map_err(|source| lookup_error(address, source))?;

        let location = record.and_then(CityRecord::into_location_record);
        if location.is_none() {
            debug!("{address} has no coordinates in {}", self.path.display());
        }
        Ok(location)
    }

    fn name(&self) -> &'static str {
        "MaxMind"
    }
}

fn lookup_error(address: IpAddr, source: MaxMindDbError) -> GeolocationError {
    GeolocationError::Lookup {
        address,
        source: Box::new(source),
    }
}

// Subset of the GeoLite2-City record layout. Every field is optional in the
// database, so every field is optional here.
#[derive(Debug, Deserialize)]
struct CityRecord {
    city: Option<NamedEntity>,
    country: Option<CountryEntity>,
    location: Option<LocationEntity>,
}

#[derive(Debug, Deserialize)]
struct NamedEntity {
    names: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Deserialize)]
struct CountryEntity {
    iso_code: Option<String>,
    names: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Deserialize)]
struct LocationEntity {
    latitude: Option<f64>,
    longitude: Option<f64>,
    accuracy_radius: Option<u16>,
    time_zone: Option<String>,
}

impl CityRecord {
    /// `None` when the record carries no usable coordinates.
    fn into_location_record(self) -> Option<LocationRecord> {
        let location = self.location?;
        let (latitude, longitude) = (location.latitude?, location.longitude?);

        let (country_code, country) = match self.country {
            Some(country) => (country.iso_code, english_name(country.names)),
            None => (None, None),
        };

        Some(LocationRecord {
            latitude,
            longitude,
            city: self.city.and_then(|city| english_name(city.names)),
            country_code,
            country,
            accuracy_radius_km: location.accuracy_radius,
            time_zone: location.time_zone,
        })
    }
}

fn english_name(names: Option<BTreeMap<String, String>>) -> Option<String> {
    names?.remove(ENGLISH)
}

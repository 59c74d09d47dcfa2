pub mod mmdb;

use std::collections::HashMap;
use std::io;
use std::net::IpAddr;

use ipmapper_common::geo::location::LocationRecord;
use ipmapper_common::geolocation::{GeolocationError, Geolocator};

/// In-memory geolocator keyed by exact address.
#[derive(Default)]
pub struct FakeGeolocator {
    records: HashMap<IpAddr, LocationRecord>,
}

impl FakeGeolocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, address: &str, record: LocationRecord) -> Self {
        self.records.insert(address.parse().unwrap(), record);
        self
    }
}

impl Geolocator for FakeGeolocator {
    fn locate(&self, address: IpAddr) -> Result<Option<LocationRecord>, GeolocationError> {
        Ok(self.records.get(&address).cloned())
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}

/// Fails every lookup, like a database that turns out to be corrupt mid-run.
pub struct FailingGeolocator;

impl Geolocator for FailingGeolocator {
    fn locate(&self, address: IpAddr) -> Result<Option<LocationRecord>, GeolocationError> {
        Err(GeolocationError::Lookup {
            address,
            source: Box::new(io::Error::new(io::ErrorKind::InvalidData, "corrupt search tree")),
        })
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}

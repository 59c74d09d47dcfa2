//! # Geolocation Resolver
//!
//! Turns one address string into a [`Lookup`]. The resolver owns a single
//! [`Geolocator`] for the whole run and performs exactly one lookup per call;
//! there is no retry and no cache beyond the open database itself.
//!
//! A miss ([`Lookup::NotFound`]) is a normal result. A string that does not
//! parse as an IP address is a [`ResolveError::MalformedAddress`], and a
//! database failure is a [`ResolveError::Database`]; neither is ever reported
//! as a miss.

use std::net::{AddrParseError, IpAddr};

use ipmapper_common::geo::location::LocationRecord;
use ipmapper_common::geolocation::{GeolocationError, Geolocator};
use thiserror::Error;
use tracing::trace;

pub mod maxmind;

#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    Found(LocationRecord),
    NotFound,
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("'{address}' is not a valid IP address")]
    MalformedAddress {
        address: String,
        #[source]
        source: AddrParseError,
    },
    #[error(transparent)]
    Database(#[from] GeolocationError),
}

pub struct GeolocationResolver {
    geolocator: Box<dyn Geolocator>,
}

impl GeolocationResolver {
    pub fn new(geolocator: Box<dyn Geolocator>) -> Self {
        Self { geolocator }
    }

    pub fn resolve(&self, address: &str) -> Result<Lookup, ResolveError> {
        let ip: IpAddr = address
            .parse()
            .map_err(|source| ResolveError::MalformedAddress {
                address: address.to_owned(),
                source,
            })?;

        let lookup = match self.geolocator.locate(ip)? {
            Some(record) => Lookup::Found(record),
            None => Lookup::NotFound,
        };
        trace!("{} lookup for {ip}: {lookup:?}", self.geolocator.name());
        Ok(lookup)
    }

    pub fn geolocator_name(&self) -> &'static str {
        self.geolocator.name()
    }
}

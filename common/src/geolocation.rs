//! The outbound port for address-to-location lookups.
//!
//! Adapters (the MaxMind reader in `ipmapper-core`, fakes in tests) implement
//! [`Geolocator`]; the resolver only ever talks to the trait.

use std::net::IpAddr;
use std::path::PathBuf;

use thiserror::Error;

use crate::geo::location::LocationRecord;

type BoxedSource = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum GeolocationError {
    #[error("cannot open geolocation database {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: BoxedSource,
    },
    #[error("geolocation database lookup failed for {address}")]
    Lookup {
        address: IpAddr,
        #[source]
        source: BoxedSource,
    },
}

pub trait Geolocator {
    /// Looks up a single address.
    ///
    /// `Ok(None)` means the database has no entry covering `address`, which is
    /// an expected outcome. `Err` is reserved for a database that cannot answer.
    fn locate(&self, address: IpAddr) -> Result<Option<LocationRecord>, GeolocationError>;

    /// Short name used in log lines.
    fn name(&self) -> &'static str;
}

//! Shared models for `ipmapper`.
//!
//! * **[`geo`]**: location records and the coordinate collection that feeds the map.
//! * **[`geolocation`]**: the [`geolocation::Geolocator`] port implemented by database adapters.
//! * **[`config`]**: run configuration and the render style.

pub mod config;
pub mod geo;
pub mod geolocation;

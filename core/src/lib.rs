//! # ipmapper core
//!
//! The batch pipeline behind the `ipmapper` binary:
//!
//! 1. [`input`] reads whitespace-separated address tokens.
//! 2. [`dedup`] collapses them into an [`dedup::AddressSet`].
//! 3. [`resolver`] looks each address up through a [`ipmapper_common::geolocation::Geolocator`].
//! 4. [`collector`] turns hits into a coordinate collection and skips misses.
//! 5. [`render`] draws the points over a country boundary layer.
//!
//! [`pipeline`] wires the stages together for a single run.

pub mod collector;
pub mod dedup;
pub mod input;
pub mod pipeline;
pub mod render;
pub mod resolver;

#[cfg(test)]
mod test_utils;

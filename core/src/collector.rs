//! # Coordinate Collector
//!
//! Runs every distinct address through the resolver, one at a time, and keeps
//! the hits. Misses are dropped without leaving a trace in the output: there
//! is no placeholder and no `(0, 0)` point for an address the database does not
//! know.

use ipmapper_common::config::MalformedPolicy;
use ipmapper_common::geo::coordinates::{Coordinate, CoordinateCollection};
use ipmapper_common::geo::location::LocationRecord;
use tracing::{debug, warn};

use crate::dedup::AddressSet;
use crate::resolver::{GeolocationResolver, Lookup, ResolveError};

/// Counters for one collection pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectStats {
    pub distinct: usize,
    pub resolved: usize,
    pub not_found: usize,
    pub malformed: usize,
}

/// How a single address ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Resolved,
    NotFound,
    Malformed,
}

/// Reported to the progress callback after each address.
#[derive(Debug, Clone, Copy)]
pub struct Progress<'a> {
    /// Zero-based position in the address set.
    pub index: usize,
    pub total: usize,
    pub address: &'a str,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Default)]
pub struct Collection {
    pub coordinates: CoordinateCollection,
    pub stats: CollectStats,
}

/// Every successful lookup, with the full record kept.
#[derive(Debug, Clone, Default)]
pub struct RecordCollection {
    pub hits: Vec<(String, LocationRecord)>,
    pub stats: CollectStats,
}

pub fn collect_coordinates(
    addresses: &AddressSet,
    resolver: &GeolocationResolver,
    policy: MalformedPolicy,
    on_progress: &mut dyn FnMut(Progress<'_>),
) -> Result<Collection, ResolveError> {
    let mut coordinates = CoordinateCollection::new();
    let stats = resolve_each(addresses, resolver, policy, on_progress, |_, record| {
        coordinates.push(Coordinate::from(&record));
    })?;
    Ok(Collection { coordinates, stats })
}

pub fn collect_records(
    addresses: &AddressSet,
    resolver: &GeolocationResolver,
    policy: MalformedPolicy,
    on_progress: &mut dyn FnMut(Progress<'_>),
) -> Result<RecordCollection, ResolveError> {
    let mut hits = Vec::new();
    let stats = resolve_each(addresses, resolver, policy, on_progress, |address, record| {
        hits.push((address.to_owned(), record));
    })?;
    Ok(RecordCollection { hits, stats })
}

fn resolve_each<F>(
    addresses: &AddressSet,
    resolver: &GeolocationResolver,
    policy: MalformedPolicy,
    on_progress: &mut dyn FnMut(Progress<'_>),
    mut on_hit: F,
) -> Result<CollectStats, ResolveError>
where
    F: FnMut(&str, LocationRecord),
{
    let total = addresses.len();
    let mut stats = CollectStats {
        distinct: total,
        ..Default::default()
    };

    for (index, address) in addresses.iter().enumerate() {
        debug!("On IP {index} out of {total}: {address}");

        let outcome = match resolver.resolve(address) {
            Ok(Lookup::Found(record)) => {
                on_hit(address, record);
                stats.resolved += 1;
                Outcome::Resolved
            }
            Ok(Lookup::NotFound) => {
                debug!("{address} is not in the database");
                stats.not_found += 1;
                Outcome::NotFound
            }
            Err(err @ ResolveError::MalformedAddress { .. }) => match policy {
                MalformedPolicy::Abort => return Err(err),
                MalformedPolicy::Skip => {
                    warn!("Skipping {err}");
                    stats.malformed += 1;
                    Outcome::Malformed
                }
            },
            Err(err) => return Err(err),
        };

        on_progress(Progress {
            index,
            total,
            address,
            outcome,
        });
    }

    Ok(stats)
}

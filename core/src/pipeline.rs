//! One full run: read → deduplicate → resolve → collect → render → save.

use std::path::{Path, PathBuf};

use anyhow::Context;
use ipmapper_common::config::Config;
use tracing::info;

use crate::collector::{self, CollectStats, Progress};
use crate::dedup::AddressSet;
use crate::input;
use crate::render::{BoundaryLayer, MapRenderer, PointLayer, RenderedMap};
use crate::resolver::GeolocationResolver;

pub struct MapOutcome {
    pub stats: CollectStats,
    /// Number of tokens in the input file, duplicates included.
    pub tokens: usize,
    /// Points drawn on the map.
    pub plotted: usize,
    pub output: PathBuf,
    pub map: RenderedMap,
}

pub fn run(
    input_path: &Path,
    config: &Config,
    resolver: &GeolocationResolver,
    on_progress: &mut dyn FnMut(Progress<'_>),
) -> anyhow::Result<MapOutcome> {
    let tokens = input::read_addresses(input_path)?;
    let addresses = AddressSet::from_addresses(tokens.iter().map(String::as_str));
    info!(
        "Resolving {} distinct addresses ({} read) with {}",
        addresses.len(),
        tokens.len(),
        resolver.geolocator_name()
    );

    let boundaries = BoundaryLayer::load(&config.boundaries)
        .with_context(|| format!("loading boundary layer {}", config.boundaries.display()))?;

    let collection = collector::collect_coordinates(&addresses, resolver, config.malformed, on_progress)
        .context("address resolution aborted")?;
    let points = PointLayer::from(&collection.coordinates);

    let map = MapRenderer::new(config.style.clone()).render(&boundaries, &points)?;
    map.save_png(&config.output)?;
    info!("Wrote {}x{} map to {}", map.width(), map.height(), config.output.display());

    Ok(MapOutcome {
        stats: collection.stats,
        tokens: tokens.len(),
        plotted: points.len(),
        output: config.output.clone(),
        map,
    })
}

use std::fs;
use std::rc::Rc;

use ipmapper_common::config::MalformedPolicy;
use ipmapper_core::collector::{self, CollectStats};
use ipmapper_core::dedup::AddressSet;
use ipmapper_core::input;
use ipmapper_core::pipeline;
use ipmapper_core::resolver::{GeolocationResolver, ResolveError};

use crate::support::{Shared, TableGeolocator, config_in, write_input};

fn dns_resolvers() -> TableGeolocator {
    TableGeolocator::default()
        .with("8.8.8.8", 37.751, -97.822)
        .with("1.1.1.1", -33.494, 143.2104)
        .with("9.9.9.9", 37.751, -97.822)
}

#[test]
fn duplicate_address_is_collapsed_before_lookup() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    let input = write_input(dir.path(), "8.8.8.8\n1.1.1.1\n8.8.8.8");

    let table = Rc::new(dns_resolvers());
    let resolver = GeolocationResolver::new(Box::new(Shared(Rc::clone(&table))));
    let outcome = pipeline::run(&input, &config, &resolver, &mut |_| {}).unwrap();

    assert_eq!(outcome.tokens, 3);
    assert_eq!(outcome.plotted, 2);
    assert_eq!(table.calls(), 2, "each distinct address is looked up exactly once");
    assert!(config.output.exists());
}

#[test]
fn dedup_yields_exactly_the_distinct_tokens() {
    let tokens = input::parse_addresses("a b a c\nb\td a");
    let set = AddressSet::from_addresses(tokens.iter().map(String::as_str));

    let mut expected = vec!["a", "b", "c", "d"];
    expected.sort();
    assert_eq!(set.iter().collect::<Vec<_>>(), expected);
}

#[test]
fn collection_length_is_distinct_minus_misses() {
    let addresses = AddressSet::from_addresses(["8.8.8.8", "1.1.1.1", "192.0.2.1", "198.51.100.7"]);
    let resolver = GeolocationResolver::new(Box::new(dns_resolvers()));

    let collection =
        collector::collect_coordinates(&addresses, &resolver, MalformedPolicy::Skip, &mut |_| {}).unwrap();

    let coordinates = &collection.coordinates;
    assert_eq!(coordinates.longitudes().len(), coordinates.latitudes().len());
    assert_eq!(coordinates.len(), addresses.len() - collection.stats.not_found);
    assert_eq!(
        collection.stats,
        CollectStats {
            distinct: 4,
            resolved: 2,
            not_found: 2,
            malformed: 0,
        }
    );
    assert!(coordinates.iter().all(|c| c.longitude != 0.0 || c.latitude != 0.0));
}

#[test]
fn same_coordinate_from_two_addresses_is_two_points() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    let input = write_input(dir.path(), "8.8.8.8 9.9.9.9");
    let resolver = GeolocationResolver::new(Box::new(dns_resolvers()));

    let outcome = pipeline::run(&input, &config, &resolver, &mut |_| {}).unwrap();

    assert_eq!(outcome.plotted, 2);
}

#[test]
fn empty_input_still_renders_the_boundary_layer() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    let input = write_input(dir.path(), "");
    let resolver = GeolocationResolver::new(Box::new(dns_resolvers()));

    let outcome = pipeline::run(&input, &config, &resolver, &mut |_| {}).unwrap();

    assert_eq!(outcome.plotted, 0);
    assert_eq!(outcome.stats, CollectStats::default());
    let bytes = fs::read(&config.output).unwrap();
    assert_eq!(&bytes[..4], b"\x89PNG");

    // 10E 50N sits inside "Eastland": the land color proves the boundary layer was drawn.
    let (r, g, b, _) = config.style.land_color;
    let (x, y) = (outcome.map.width() / 2 + 10, outcome.map.height() / 2 - 50);
    let pixel = outcome.map.pixmap().pixel(x, y).unwrap();
    assert_eq!((pixel.red(), pixel.green(), pixel.blue()), (r, g, b));
}

#[test]
fn malformed_tokens_are_skipped_and_counted() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    let input = write_input(dir.path(), "8.8.8.8 256.1.1.1 localhost 192.0.2.1");
    let resolver = GeolocationResolver::new(Box::new(dns_resolvers()));

    let outcome = pipeline::run(&input, &config, &resolver, &mut |_| {}).unwrap();

    assert_eq!(outcome.stats.malformed, 2);
    assert_eq!(outcome.stats.not_found, 1);
    assert_eq!(outcome.plotted, 1);
}

#[test]
fn strict_mode_aborts_on_malformed_token_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config_in(dir.path());
    config.malformed = MalformedPolicy::Abort;
    let input = write_input(dir.path(), "8.8.8.8 not-an-address");
    let resolver = GeolocationResolver::new(Box::new(dns_resolvers()));

    let err = pipeline::run(&input, &config, &resolver, &mut |_| {}).err().unwrap();

    let resolve_err = err.downcast_ref::<ResolveError>().unwrap();
    assert!(matches!(resolve_err, ResolveError::MalformedAddress { address, .. } if address == "not-an-address"));
    assert!(!config.output.exists());
}

#[test]
fn missing_input_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    let resolver = GeolocationResolver::new(Box::new(dns_resolvers()));

    let result = pipeline::run(&dir.path().join("nope.txt"), &config, &resolver, &mut |_| {});

    assert!(result.is_err());
    assert!(!config.output.exists());
}

#[test]
fn invalid_boundary_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    fs::write(&config.boundaries, "not json").unwrap();
    let input = write_input(dir.path(), "8.8.8.8\n1.1.1.1");
    let table = Rc::new(dns_resolvers());
    let resolver = GeolocationResolver::new(Box::new(Shared(Rc::clone(&table))));

    let result = pipeline::run(&input, &config, &resolver, &mut |_| {});

    assert!(result.is_err());
    assert_eq!(table.calls(), 0, "boundaries are checked before any lookup");
    assert!(!config.output.exists());
}

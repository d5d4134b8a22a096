//! Behavioural tests for place-name resolution and its Manila fallback.

use std::cell::{Cell, RefCell};

use backload_core::{CityDirectory, LocationLookup};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[derive(Debug, Default)]
struct LocationWorld {
    directory: RefCell<Option<CityDirectory>>,
    lookup: Cell<Option<LocationLookup>>,
}

#[fixture]
fn world() -> LocationWorld {
    LocationWorld::default()
}

#[given("the Philippine city directory")]
fn given_directory(world: &LocationWorld) {
    world.directory.replace(Some(CityDirectory::philippines()));
}

#[when("I locate {name}")]
fn when_locate(world: &LocationWorld, name: String) {
    let borrowed = world.directory.borrow();
    let directory = borrowed.as_ref().expect("directory should be loaded");
    world
        .lookup
        .set(Some(directory.locate(name.trim_matches('"'))));
}

#[then("the location is known")]
fn then_known(world: &LocationWorld) {
    let lookup = world.lookup.get().expect("lookup should run");
    assert!(matches!(lookup, LocationLookup::Known(_)));
}

#[then("the location is a fallback")]
fn then_fallback(world: &LocationWorld) {
    let lookup = world.lookup.get().expect("lookup should run");
    assert!(lookup.is_fallback());
}

#[then("the latitude is {lat}")]
fn then_latitude(world: &LocationWorld, lat: f64) {
    let lookup = world.lookup.get().expect("lookup should run");
    assert!((lookup.coordinate().lat - lat).abs() < 1e-9);
}

#[scenario(path = "tests/features/location.feature", index = 0)]
fn known_city(world: LocationWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/location.feature", index = 1)]
fn unknown_place(world: LocationWorld) {
    let _ = world;
}

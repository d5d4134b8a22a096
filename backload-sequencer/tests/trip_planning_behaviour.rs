//! Behavioural tests for planning trips between Philippine cities.
#![expect(clippy::expect_used, reason = "steps fail fast on malformed scenarios")]

use std::cell::{Cell, RefCell};

use backload_core::{CandidateRoute, CargoListing, CityDirectory, Coordinate, Pesos};
use backload_sequencer::{TripPlan, TripPlanner};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[derive(Debug)]
struct PlanWorld {
    directory: CityDirectory,
    route: RefCell<Option<CandidateRoute>>,
    listings: RefCell<Vec<CargoListing>>,
    base_earnings: Cell<Pesos>,
    plan: RefCell<Option<TripPlan>>,
}

#[fixture]
fn world() -> PlanWorld {
    PlanWorld {
        directory: CityDirectory::philippines(),
        route: RefCell::new(None),
        listings: RefCell::new(Vec::new()),
        base_earnings: Cell::new(Pesos::ZERO),
        plan: RefCell::new(None),
    }
}

fn city(world: &PlanWorld, name: &str) -> (String, Coordinate) {
    let name = name.trim_matches('"');
    let lookup = world.directory.locate(name);
    assert!(!lookup.is_fallback(), "{name} should be a known city");
    (name.to_owned(), lookup.coordinate())
}

fn with_plan<T>(world: &PlanWorld, check: impl FnOnce(&TripPlan) -> T) -> T {
    let borrowed = world.plan.borrow();
    check(borrowed.as_ref().expect("trip should be planned"))
}

#[given("a trip from {from} to {to}")]
fn given_trip(world: &PlanWorld, from: String, to: String) {
    let (origin_name, origin) = city(world, &from);
    let (destination_name, destination) = city(world, &to);
    world.route.replace(Some(
        CandidateRoute::new(origin, destination).with_names(origin_name, destination_name),
    ));
}

#[given("an open listing {id} from {from} to {to} paying {price} pesos")]
fn given_listing(world: &PlanWorld, id: String, from: String, to: String, price: i64) {
    let (origin_name, origin) = city(world, &from);
    let (destination_name, destination) = city(world, &to);
    let listing = CargoListing::new(id.trim_matches('"'), origin, destination, Pesos(price))
        .with_names(origin_name, destination_name);
    world.listings.borrow_mut().push(listing);
}

#[given("base earnings of {amount} pesos")]
fn given_base_earnings(world: &PlanWorld, amount: i64) {
    world.base_earnings.set(Pesos(amount));
}

#[when("I plan the trip")]
fn when_plan(world: &PlanWorld) {
    let borrowed = world.route.borrow();
    let route = borrowed.as_ref().expect("route should be set");
    let plan = TripPlanner::new()
        .plan(route, &world.listings.borrow(), world.base_earnings.get())
        .expect("cities have valid coordinates");
    world.plan.replace(Some(plan));
}

#[then("{count} backload is added")]
fn then_one_backload(world: &PlanWorld, count: usize) {
    assert_eq!(with_plan(world, |plan| plan.matches.len()), count);
}

#[then("{count} backloads are added")]
fn then_backloads(world: &PlanWorld, count: usize) {
    assert_eq!(with_plan(world, |plan| plan.matches.len()), count);
}

#[then("the route visits {stops}")]
fn then_route_visits(world: &PlanWorld, stops: String) {
    let expected: Vec<&str> = stops.trim_matches('"').split(", ").collect();
    with_plan(world, |plan| {
        let actual: Vec<&str> = plan
            .route
            .ordered_waypoints
            .iter()
            .map(|w| w.name.as_str())
            .collect();
        assert_eq!(actual, expected);
    });
}

#[then("the trip covers {km} km")]
fn then_distance(world: &PlanWorld, km: u32) {
    assert_eq!(with_plan(world, |plan| plan.route.total_distance_km), km);
}

#[then("the trip earns {amount} pesos")]
fn then_earnings(world: &PlanWorld, amount: i64) {
    assert_eq!(with_plan(world, |plan| plan.earnings), Pesos(amount));
}

#[scenario(path = "tests/features/trip_planning.feature", index = 0)]
fn return_load_is_added(world: PlanWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/trip_planning.feature", index = 1)]
fn distant_listings_ignored(world: PlanWorld) {
    let _ = world;
}

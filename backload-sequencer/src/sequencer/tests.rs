//! Unit tests for the nearest-neighbour sequencer.

use backload_core::test_support::GridMetric;
use backload_core::{Coordinate, CoordinateError, SequenceError, Sequencer, Waypoint, WaypointKind};
use rstest::rstest;

use super::*;

/// A stop on the grid's equator, `lng` kilometres east of the origin.
fn stop(name: &str, lng: f64, kind: WaypointKind, cargo: Option<&str>) -> Waypoint {
    Waypoint {
        name: name.to_owned(),
        coordinate: Coordinate { lat: 0.0, lng },
        kind,
        cargo_ref: cargo.map(str::to_owned),
    }
}

fn grid(config: SequencerConfig) -> NearestNeighbourSequencer<GridMetric> {
    NearestNeighbourSequencer::with_metric(GridMetric, config)
}

fn names(result: &RouteResult) -> Vec<&str> {
    result
        .ordered_waypoints
        .iter()
        .map(|w| w.name.as_str())
        .collect()
}

fn zigzag() -> Vec<Waypoint> {
    vec![
        stop("origin", 0.0, WaypointKind::Origin, None),
        stop("nine", 9.0, WaypointKind::Pickup, None),
        stop("one", 1.0, WaypointKind::Pickup, None),
        stop("five", 5.0, WaypointKind::Pickup, None),
        stop("end", 10.0, WaypointKind::Destination, None),
    ]
}

#[test]
fn orders_zigzag_by_nearest_stop() {
    let result = grid(SequencerConfig::default())
        .sequence(&zigzag())
        .expect("valid stops");
    assert_eq!(names(&result), ["origin", "one", "five", "nine", "end"]);
    assert_eq!(result.original_distance_km, 26);
    assert_eq!(result.total_distance_km, 10);
    assert_eq!(result.savings_km, 16);
    assert_eq!(result.savings_percent, 62);
}

#[test]
fn unpinned_search_chooses_final_stop() {
    let stops = vec![
        stop("origin", 0.0, WaypointKind::Origin, None),
        stop("far", 10.0, WaypointKind::Pickup, None),
        stop("mid", 4.0, WaypointKind::Pickup, None),
        stop("end", 3.0, WaypointKind::Destination, None),
    ];
    let pinned = grid(SequencerConfig::default())
        .sequence(&stops)
        .expect("valid stops");
    assert_eq!(names(&pinned), ["origin", "mid", "far", "end"]);
    assert_eq!(pinned.total_distance_km, 17);

    let free = grid(SequencerConfig {
        pin_destination: false,
        ..SequencerConfig::default()
    })
    .sequence(&stops)
    .expect("valid stops");
    assert_eq!(names(&free), ["origin", "end", "mid", "far"]);
    assert_eq!(free.total_distance_km, 10);
    assert_eq!(free.savings_km, 7);
    assert_eq!(free.savings_percent, 41);
}

#[test]
fn only_a_trailing_destination_is_pinned() {
    let stops = vec![
        stop("origin", 0.0, WaypointKind::Origin, None),
        stop("end", 10.0, WaypointKind::Destination, None),
        stop("near", 1.0, WaypointKind::Pickup, None),
    ];
    let result = grid(SequencerConfig::default())
        .sequence(&stops)
        .expect("valid stops");
    assert_eq!(names(&result), ["origin", "near", "end"]);
}

#[rstest]
#[case(true, &["origin", "pickup", "dropoff", "end"], 18)]
#[case(false, &["origin", "dropoff", "pickup", "end"], 10)]
fn dropoffs_wait_for_their_pickup(
    #[case] respect_pickup_order: bool,
    #[case] expected: &[&str],
    #[case] total_km: u32,
) {
    let stops = vec![
        stop("origin", 0.0, WaypointKind::Origin, None),
        stop("pickup", 6.0, WaypointKind::Pickup, Some("cargo")),
        stop("dropoff", 2.0, WaypointKind::Dropoff, Some("cargo")),
        stop("end", 10.0, WaypointKind::Destination, None),
    ];
    let result = grid(SequencerConfig {
        respect_pickup_order,
        ..SequencerConfig::default()
    })
    .sequence(&stops)
    .expect("valid stops");
    assert_eq!(names(&result), expected);
    assert_eq!(result.total_distance_km, total_km);
}

#[test]
fn dropoff_without_pickup_is_unconstrained() {
    let stops = vec![
        stop("origin", 0.0, WaypointKind::Origin, None),
        stop("stray", 1.0, WaypointKind::Dropoff, Some("elsewhere")),
        stop("pickup", 2.0, WaypointKind::Pickup, Some("cargo")),
        stop("end", 10.0, WaypointKind::Destination, None),
    ];
    let result = grid(SequencerConfig::pickups_first())
        .sequence(&stops)
        .expect("valid stops");
    assert_eq!(names(&result), ["origin", "stray", "pickup", "end"]);
}

#[test]
fn distance_ties_favour_earlier_input() {
    let stops = vec![
        stop("origin", 0.0, WaypointKind::Origin, None),
        stop("west", -3.0, WaypointKind::Pickup, None),
        stop("east", 3.0, WaypointKind::Pickup, None),
        stop("end", 10.0, WaypointKind::Destination, None),
    ];
    let result = grid(SequencerConfig::default())
        .sequence(&stops)
        .expect("valid stops");
    assert_eq!(names(&result), ["origin", "west", "east", "end"]);
}

#[rstest]
#[case(0, 0)]
#[case(1, 0)]
#[case(2, 9)]
fn short_inputs_are_returned_unchanged(#[case] len: usize, #[case] distance_km: u32) {
    let stops: Vec<_> = zigzag().into_iter().take(len).collect();
    let result = grid(SequencerConfig::default())
        .sequence(&stops)
        .expect("valid stops");
    assert_eq!(result.ordered_waypoints, stops);
    assert_eq!(result.total_distance_km, distance_km);
    assert_eq!(result.original_distance_km, distance_km);
    assert_eq!(result.savings_km, 0);
    assert_eq!(result.savings_percent, 0);
}

#[test]
fn names_the_invalid_waypoint() {
    let mut stops = zigzag();
    if let Some(bad) = stops.get_mut(2) {
        bad.coordinate.lng = 181.0;
    }
    let err = grid(SequencerConfig::default())
        .sequence(&stops)
        .expect_err("longitude 181 is invalid");
    assert_eq!(
        err,
        SequenceError::InvalidCoordinate {
            waypoint: "one".to_owned(),
            source: CoordinateError::LongitudeOutOfRange { lng: 181.0 },
        }
    );
}

#[test]
fn even_short_inputs_are_validated() {
    let stops = [stop("origin", f64::NAN, WaypointKind::Origin, None)];
    let err = grid(SequencerConfig::default())
        .sequence(&stops)
        .expect_err("NaN is invalid");
    assert!(matches!(err, SequenceError::InvalidCoordinate { .. }));
}

#[test]
fn great_circle_route_between_two_cities() {
    let stops = [
        Waypoint::origin("Davao City", Coordinate { lat: 7.0707, lng: 125.6087 }),
        Waypoint::destination("Cebu City", Coordinate { lat: 10.3157, lng: 123.8854 }),
    ];
    let result = optimize_route(&stops).expect("valid stops");
    assert_eq!(result.total_distance_km, 408);
}

#[test]
fn default_config_pins_without_cargo_constraints() {
    let sequencer = NearestNeighbourSequencer::default();
    assert!(sequencer.config().pin_destination);
    assert!(!sequencer.config().respect_pickup_order);
    assert!(SequencerConfig::pickups_first().respect_pickup_order);
}

#[test]
fn default_search_takes_nearest_stop_regardless_of_cargo() {
    // Roughly 6.7 km and 2.2 km east of the origin along the equator.
    let stops = [
        Waypoint::origin("origin", Coordinate { lat: 0.0, lng: 0.0 }),
        Waypoint {
            name: "pickup".to_owned(),
            coordinate: Coordinate { lat: 0.0, lng: 0.06 },
            kind: WaypointKind::Pickup,
            cargo_ref: Some("cargo".to_owned()),
        },
        Waypoint {
            name: "dropoff".to_owned(),
            coordinate: Coordinate { lat: 0.0, lng: 0.02 },
            kind: WaypointKind::Dropoff,
            cargo_ref: Some("cargo".to_owned()),
        },
        Waypoint::destination("end", Coordinate { lat: 0.0, lng: 0.10 }),
    ];
    let result = optimize_route(&stops).expect("valid stops");
    assert_eq!(names(&result), ["origin", "dropoff", "pickup", "end"]);
    assert!(result.total_distance_km < result.original_distance_km);
    assert!(result.savings_km > 0);
}

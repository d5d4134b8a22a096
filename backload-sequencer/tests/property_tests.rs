//! Property-based tests for the nearest-neighbour sequencer.
//!
//! # Invariants tested
//!
//! - **Permutation:** the ordered stops are the input stops, each exactly once.
//! - **Fixed start:** the first input stop is visited first.
//! - **Fixed end:** a trailing destination is visited last.
//! - **Pickup order:** no dropoff precedes its pickup.
//! - **Trivial routes:** inputs of two stops or fewer are returned unchanged.
//! - **Savings consistency:** `savings == max(0, original - total)` and the
//!   percentage is `round(savings / original * 100)`, zero when nothing was
//!   driven.
#![expect(clippy::expect_used, reason = "generated inputs are always valid")]

use std::collections::HashSet;

use backload_core::test_support::{GridMetric, listing};
use backload_core::{CandidateRoute, Coordinate, MatchResult, Sequencer, Waypoint, WaypointKind};
use backload_sequencer::{NearestNeighbourSequencer, SequencerConfig, build_waypoints};
use proptest::prelude::*;

fn point() -> impl Strategy<Value = (f64, f64)> {
    (-30.0_f64..30.0, -30.0_f64..30.0)
}

fn coordinate((lat, lng): (f64, f64)) -> Coordinate {
    Coordinate { lat, lng }
}

/// A trip with up to five backloads, assembled the way the planner does.
fn trip() -> impl Strategy<Value = Vec<Waypoint>> {
    (
        point(),
        point(),
        prop::collection::vec((point(), point()), 0..=5),
    )
        .prop_map(|(origin, destination, loads)| {
            let route = CandidateRoute::new(coordinate(origin), coordinate(destination));
            let matches: Vec<MatchResult> = loads
                .into_iter()
                .enumerate()
                .map(|(i, (pickup, dropoff))| MatchResult {
                    listing: listing(&format!("load-{i}"), pickup, dropoff, 1_000),
                    detour_to_pickup_km: 0,
                    detour_from_delivery_km: 0,
                    detour_km: 0,
                    match_score: 100,
                })
                .collect();
            build_waypoints(&route, &matches, matches.len())
        })
}

/// Arbitrary stops of arbitrary kinds, without cargo links.
fn loose_stops() -> impl Strategy<Value = Vec<Waypoint>> {
    prop::collection::vec(point(), 0..10).prop_map(|points| {
        points
            .into_iter()
            .enumerate()
            .map(|(i, p)| Waypoint {
                name: format!("stop-{i}"),
                coordinate: coordinate(p),
                kind: WaypointKind::Pickup,
                cargo_ref: None,
            })
            .collect()
    })
}

fn config() -> impl Strategy<Value = SequencerConfig> {
    (any::<bool>(), any::<bool>()).prop_map(|(pin_destination, respect_pickup_order)| {
        SequencerConfig {
            pin_destination,
            respect_pickup_order,
        }
    })
}

/// `round(savings / original * 100)`, or zero for a zero-length input route.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::as_conversions,
    reason = "percentages are rounded from a ratio in 0..=1"
)]
fn rounded_percent(savings_km: u32, original_km: u32) -> u8 {
    if original_km == 0 {
        return 0;
    }
    (f64::from(savings_km) / f64::from(original_km) * 100.0).round() as u8
}

fn names(stops: &[Waypoint]) -> Vec<String> {
    let mut names: Vec<String> = stops.iter().map(|w| w.name.clone()).collect();
    names.sort();
    names
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn output_is_a_permutation_of_input(stops in loose_stops(), config in config()) {
        let result = NearestNeighbourSequencer::with_metric(GridMetric, config)
            .sequence(&stops)
            .expect("grid stops are valid");
        prop_assert_eq!(result.ordered_waypoints.len(), stops.len());
        prop_assert_eq!(names(&result.ordered_waypoints), names(&stops));
        prop_assert_eq!(result.ordered_waypoints.first(), stops.first());
    }

    #[test]
    fn short_inputs_are_unchanged(stops in loose_stops().prop_map(|mut s| { s.truncate(2); s })) {
        let result = NearestNeighbourSequencer::with_metric(GridMetric, SequencerConfig::default())
            .sequence(&stops)
            .expect("grid stops are valid");
        prop_assert_eq!(&result.ordered_waypoints, &stops);
        prop_assert_eq!(result.total_distance_km, result.original_distance_km);
        prop_assert_eq!(result.savings_km, 0);
        prop_assert_eq!(result.savings_percent, 0);
    }

    #[test]
    fn savings_are_consistent(stops in trip(), config in config()) {
        let result = NearestNeighbourSequencer::with_metric(GridMetric, config)
            .sequence(&stops)
            .expect("grid stops are valid");
        prop_assert_eq!(
            result.savings_km,
            result.original_distance_km.saturating_sub(result.total_distance_km)
        );
        prop_assert!(result.savings_percent <= 100);
        prop_assert_eq!(
            result.savings_percent,
            rounded_percent(result.savings_km, result.original_distance_km)
        );
    }

    #[test]
    fn trips_start_at_origin_and_end_at_destination(stops in trip()) {
        let result = NearestNeighbourSequencer::with_metric(GridMetric, SequencerConfig::default())
            .sequence(&stops)
            .expect("grid stops are valid");
        prop_assert_eq!(
            result.ordered_waypoints.first().map(|w| w.kind),
            Some(WaypointKind::Origin)
        );
        prop_assert_eq!(
            result.ordered_waypoints.last().map(|w| w.kind),
            Some(WaypointKind::Destination)
        );
    }

    #[test]
    fn dropoffs_follow_their_pickups(stops in trip()) {
        let result = NearestNeighbourSequencer::with_metric(GridMetric, SequencerConfig::pickups_first())
            .sequence(&stops)
            .expect("grid stops are valid");
        let mut picked_up = HashSet::new();
        for stop in &result.ordered_waypoints {
            let Some(cargo) = stop.cargo_ref.as_deref() else {
                continue;
            };
            match stop.kind {
                WaypointKind::Pickup => {
                    picked_up.insert(cargo);
                }
                WaypointKind::Dropoff => {
                    prop_assert!(picked_up.contains(cargo), "{cargo} delivered before pickup");
                }
                _ => {}
            }
        }
    }
}

//! Facade crate for the backload matching engine.
//!
//! This crate re-exports the core domain types and exposes the detour matcher
//! and the route sequencer behind feature flags.
//!
//! # Examples
//! ```
//! # #[cfg(all(feature = "matcher", feature = "sequencer"))]
//! # {
//! use backload_engine::{CandidateRoute, CargoListing, Coordinate, Pesos, TripPlanner};
//!
//! let davao = Coordinate { lat: 7.0707, lng: 125.6087 };
//! let cebu = Coordinate { lat: 10.3157, lng: 123.8854 };
//! let route = CandidateRoute::new(davao, cebu);
//! let listings = [CargoListing::new("return", cebu, davao, Pesos(18_000))];
//!
//! let plan = TripPlanner::new().plan(&route, &listings, Pesos(25_000))?;
//! assert_eq!(plan.route.total_distance_km, 1224);
//! # }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]

pub use backload_core::{
    CandidateRoute, CargoListing, CityDirectory, Coordinate, CoordinateError, CostModel,
    DistanceMetric, EfficiencyScore, FuelEstimate, Haversine, ListingIndex, ListingStatus,
    ListingStore, LocationLookup, LocationResolver, MatchError, MatchResult, Matcher, Pesos,
    RouteResult, SequenceError, Sequencer, TravelDuration, VehicleClass, Waypoint, WaypointKind,
    distance_km, efficiency, estimate_duration, fuel_cost,
};

#[cfg(feature = "matcher")]
pub use backload_matcher::{DEFAULT_MAX_DETOUR_KM, DetourMatcher, MatcherConfig, find_matches};

#[cfg(feature = "sequencer")]
pub use backload_sequencer::{
    DEFAULT_MAX_BACKLOADS, NearestNeighbourSequencer, PlanError, PlannerConfig, SequencerConfig,
    TripPlan, TripPlanner, build_waypoints, optimize_route,
};

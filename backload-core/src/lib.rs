//! Core domain types for the backload matching engine.
//!
//! The crate holds everything the matcher and sequencer share: coordinates
//! and the distance metric, listings, waypoints and routes, the fuel and
//! duration estimators, the efficiency scorer, and the traits the engine's
//! strategies implement. All computations are pure and synchronous.
//!
//! # Examples
//! ```
//! use backload_core::{Coordinate, Pesos, VehicleClass, distance_km, efficiency};
//!
//! let davao = Coordinate::new(7.0707, 125.6087)?;
//! let cebu = Coordinate::new(10.3157, 123.8854)?;
//! let km = distance_km(&davao, &cebu)?;
//! assert_eq!(km, 408);
//!
//! let score = efficiency(Pesos(20_000), f64::from(km), VehicleClass::SixWheeler);
//! assert!(score.score > 0);
//! # Ok::<(), backload_core::CoordinateError>(())
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod coordinate;
pub mod distance;
mod duration;
pub mod efficiency;
pub mod fuel;
pub mod listing;
pub mod location;
pub mod matching;
mod money;
pub mod route;
pub mod sequencing;
pub mod store;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;
pub mod vehicle;
pub mod waypoint;

pub use coordinate::{Coordinate, CoordinateError};
pub use distance::{DistanceMetric, EARTH_RADIUS_KM, Haversine, distance_km};
pub use duration::TravelDuration;
pub use efficiency::{EfficiencyScore, PERFECT_EARNINGS_PER_KM, efficiency};
pub use fuel::{
    CostModel, DEFAULT_AVERAGE_SPEED_KMH, DEFAULT_FUEL_PRICE_PER_LITRE, FuelEstimate,
    estimate_duration, fuel_cost,
};
pub use listing::{CargoListing, ListingStatus};
pub use location::{CityDirectory, LocationLookup, LocationResolver};
pub use matching::{MatchError, MatchResult, Matcher};
pub use money::Pesos;
pub use route::{CandidateRoute, RouteResult};
pub use sequencing::{SequenceError, Sequencer};
pub use store::{ListingIndex, ListingIndexError, ListingStore, listings_near, search_area};
pub use vehicle::VehicleClass;
pub use waypoint::{Waypoint, WaypointKind};

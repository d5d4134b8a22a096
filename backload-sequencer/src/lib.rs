//! Route sequencing and trip planning for backload runs.
//!
//! [`NearestNeighbourSequencer`] is the default implementation of the
//! [`Sequencer`](backload_core::Sequencer) trait. Starting from the first
//! waypoint it repeatedly drives to the closest remaining stop, keeping a
//! trailing destination as the final stop and never delivering cargo before
//! collecting it. The greedy search is `O(n²)` and meant for the handful of
//! stops a trip with a few backloads has.
//!
//! [`TripPlanner`] chains the pieces together: it ranks listings with a
//! [`Matcher`](backload_core::Matcher), folds the best few into the trip with
//! [`build_waypoints`], sequences the stops, and costs the result.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod plan;
mod sequencer;

pub use plan::{
    DEFAULT_MAX_BACKLOADS, PlanError, PlannerConfig, TripPlan, TripPlanner, build_waypoints,
};
pub use sequencer::{NearestNeighbourSequencer, SequencerConfig, optimize_route};

//! Order a trip's stops to cut the distance driven.

use thiserror::Error;

use crate::{CoordinateError, RouteResult, Waypoint};

/// Errors returned by [`Sequencer::sequence`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SequenceError {
    /// A waypoint's coordinate could not be measured.
    #[error("waypoint '{waypoint}' has an invalid coordinate: {source}")]
    InvalidCoordinate {
        /// Name of the offending waypoint.
        waypoint: String,
        /// Validation failure.
        #[source]
        source: CoordinateError,
    },
}

/// Order a set of waypoints to reduce the distance driven.
///
/// Implementations must return a permutation of the input, keep the first
/// waypoint first, and report savings against the input order. Sequencers
/// must be `Send + Sync` to operate safely across threads.
pub trait Sequencer: Send + Sync {
    /// Sequence `waypoints`, producing a route or an error.
    fn sequence(&self, waypoints: &[Waypoint]) -> Result<RouteResult, SequenceError>;
}

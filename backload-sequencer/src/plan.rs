//! Trip planning: matching, stop assembly, sequencing, and costing in one
//! pass.

use backload_core::{
    CandidateRoute, CargoListing, CostModel, EfficiencyScore, FuelEstimate, MatchError,
    MatchResult, Matcher, Pesos, RouteResult, SequenceError, Sequencer, TravelDuration,
    VehicleClass, Waypoint,
};
use backload_matcher::DetourMatcher;
use log::debug;
use thiserror::Error;

use crate::{NearestNeighbourSequencer, SequencerConfig};

/// Number of backloads folded into a trip when none is configured.
pub const DEFAULT_MAX_BACKLOADS: usize = 3;

/// Assemble the stops for `route` carrying the best `max_backloads` matches.
///
/// The result is `[origin, pickup, dropoff, ..., destination]` with pickups
/// and dropoffs in match order.
///
/// # Examples
/// ```
/// use backload_core::{CandidateRoute, Coordinate, WaypointKind};
/// use backload_sequencer::build_waypoints;
///
/// let route = CandidateRoute::new(
///     Coordinate { lat: 7.0707, lng: 125.6087 },
///     Coordinate { lat: 10.3157, lng: 123.8854 },
/// );
/// let stops = build_waypoints(&route, &[], 3);
/// let kinds: Vec<_> = stops.iter().map(|w| w.kind).collect();
/// assert_eq!(kinds, [WaypointKind::Origin, WaypointKind::Destination]);
/// ```
#[must_use]
pub fn build_waypoints(
    route: &CandidateRoute,
    matches: &[MatchResult],
    max_backloads: usize,
) -> Vec<Waypoint> {
    let selected = matches.iter().take(max_backloads);
    let mut waypoints = Vec::with_capacity(2 * selected.len() + 2);
    waypoints.push(route.origin_waypoint());
    for found in selected {
        waypoints.push(Waypoint::pickup(&found.listing));
        waypoints.push(Waypoint::dropoff(&found.listing));
    }
    waypoints.push(route.destination_waypoint());
    waypoints
}

/// Configuration for [`TripPlanner`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlannerConfig {
    /// Most backloads to add to a trip.
    pub max_backloads: usize,
    /// Fuel price and average speed used to cost the trip.
    pub cost_model: CostModel,
    /// Truck driving the trip.
    pub vehicle: VehicleClass,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_backloads: DEFAULT_MAX_BACKLOADS,
            cost_model: CostModel::default(),
            vehicle: VehicleClass::default(),
        }
    }
}

/// A costed trip with its backloads in visiting order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripPlan {
    /// Backloads added to the trip, best first.
    pub matches: Vec<MatchResult>,
    /// Sequenced stops with distance and savings.
    pub route: RouteResult,
    /// Fuel burned over the sequenced distance.
    pub fuel: FuelEstimate,
    /// Driving time over the sequenced distance.
    pub duration: TravelDuration,
    /// Profitability of the whole trip.
    pub efficiency: EfficiencyScore,
    /// Base earnings plus the asking price of every backload.
    pub earnings: Pesos,
}

/// Errors raised while planning a trip.
#[derive(Debug, Error)]
pub enum PlanError {
    /// Matching listings against the route failed.
    #[error("failed to match backloads: {source}")]
    Match {
        /// Source error from the matcher.
        #[from]
        source: MatchError,
    },
    /// Ordering the trip's stops failed.
    #[error("failed to sequence trip stops: {source}")]
    Sequence {
        /// Source error from the sequencer.
        #[from]
        source: SequenceError,
    },
}

/// Plans trips by chaining a matcher, a sequencer, and the cost model.
///
/// # Examples
/// ```
/// use backload_core::{CandidateRoute, CargoListing, Coordinate, Pesos};
/// use backload_sequencer::TripPlanner;
///
/// let davao = Coordinate { lat: 7.0707, lng: 125.6087 };
/// let cebu = Coordinate { lat: 10.3157, lng: 123.8854 };
/// let route = CandidateRoute::new(davao, cebu);
/// let listings = [CargoListing::new("return", cebu, davao, Pesos(18_000))];
///
/// let plan = TripPlanner::new().plan(&route, &listings, Pesos(25_000))?;
/// assert_eq!(plan.matches.len(), 1);
/// assert_eq!(plan.earnings, Pesos(43_000));
/// assert_eq!(plan.route.ordered_waypoints.len(), 4);
/// # Ok::<(), backload_sequencer::PlanError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TripPlanner<Mt = DetourMatcher, Sq = NearestNeighbourSequencer>
where
    Mt: Matcher,
    Sq: Sequencer,
{
    matcher: Mt,
    sequencer: Sq,
    config: PlannerConfig,
}

impl TripPlanner<DetourMatcher, NearestNeighbourSequencer> {
    /// Construct a great-circle planner using default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(PlannerConfig::default())
    }

    /// Construct a great-circle planner with explicit configuration.
    ///
    /// Stops are sequenced with [`SequencerConfig::pickups_first`].
    #[must_use]
    pub fn with_config(config: PlannerConfig) -> Self {
        Self::with_parts(
            DetourMatcher::new(),
            NearestNeighbourSequencer::with_config(SequencerConfig::pickups_first()),
            config,
        )
    }
}

impl Default for TripPlanner<DetourMatcher, NearestNeighbourSequencer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Mt, Sq> TripPlanner<Mt, Sq>
where
    Mt: Matcher,
    Sq: Sequencer,
{
    /// Construct a planner from explicit strategies.
    pub const fn with_parts(matcher: Mt, sequencer: Sq, config: PlannerConfig) -> Self {
        Self {
            matcher,
            sequencer,
            config,
        }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plan a trip along `route`, adding the best backloads from `listings`.
    ///
    /// Fuel, duration, and efficiency are computed over the sequenced
    /// distance. Earnings are `base_earnings` plus each selected listing's
    /// asking price. A trip with no eligible listings is planned as the bare
    /// origin-to-destination run.
    ///
    /// # Errors
    /// Returns [`PlanError::Match`] when matching fails and
    /// [`PlanError::Sequence`] when a stop cannot be measured.
    pub fn plan(
        &self,
        route: &CandidateRoute,
        listings: &[CargoListing],
        base_earnings: Pesos,
    ) -> Result<TripPlan, PlanError> {
        let mut matches = self.matcher.find_matches(route, listings)?;
        matches.truncate(self.config.max_backloads);
        let waypoints = build_waypoints(route, &matches, self.config.max_backloads);
        let sequenced = self.sequencer.sequence(&waypoints)?;

        let distance_km = f64::from(sequenced.total_distance_km);
        let model = &self.config.cost_model;
        let vehicle = self.config.vehicle;
        let earnings =
            base_earnings + matches.iter().map(|m| m.listing.asking_price).sum::<Pesos>();
        debug!(
            "planned trip with {} backloads over {} km earning {earnings}",
            matches.len(),
            sequenced.total_distance_km
        );
        Ok(TripPlan {
            fuel: model.estimate_fuel(distance_km, vehicle),
            duration: model.estimate_duration(distance_km),
            efficiency: model.efficiency(earnings, distance_km, vehicle),
            earnings,
            matches,
            route: sequenced,
        })
    }
}

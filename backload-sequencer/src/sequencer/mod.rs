//! `NearestNeighbourSequencer` implementation.
//!
//! Supports a fixed final stop when the input ends with the trip's
//! destination.

use std::collections::HashMap;

use backload_core::{
    CoordinateError, DistanceMetric, Haversine, RouteResult, SequenceError, Sequencer, Waypoint,
    WaypointKind,
};
use log::{debug, trace, warn};

/// Configuration for [`NearestNeighbourSequencer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequencerConfig {
    /// Keep a trailing [`WaypointKind::Destination`] as the final stop.
    ///
    /// When `false`, the greedy search decides the final stop itself.
    pub pin_destination: bool,
    /// Never visit a dropoff before the pickup of the same cargo.
    ///
    /// Off by default, so the search always takes the nearest stop.
    pub respect_pickup_order: bool,
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            pin_destination: true,
            respect_pickup_order: false,
        }
    }
}

impl SequencerConfig {
    /// Pinned destination, with each dropoff held back until its pickup.
    ///
    /// [`TripPlanner`](crate::TripPlanner) sequences trips this way.
    #[must_use]
    pub const fn pickups_first() -> Self {
        Self {
            pin_destination: true,
            respect_pickup_order: true,
        }
    }
}

/// Greedy sequencer that always drives to the nearest remaining stop.
///
/// The first waypoint is the fixed start. Distances are measured once into a
/// matrix, so a run costs `n²` metric calls plus an `O(n²)` search. Ties on
/// distance go to the waypoint supplied first.
#[derive(Debug, Clone)]
pub struct NearestNeighbourSequencer<M = Haversine>
where
    M: DistanceMetric,
{
    metric: M,
    config: SequencerConfig,
}

impl NearestNeighbourSequencer<Haversine> {
    /// Construct a great-circle sequencer using default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SequencerConfig::default())
    }

    /// Construct a great-circle sequencer with explicit configuration.
    #[must_use]
    pub const fn with_config(config: SequencerConfig) -> Self {
        Self::with_metric(Haversine, config)
    }
}

impl Default for NearestNeighbourSequencer<Haversine> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> NearestNeighbourSequencer<M>
where
    M: DistanceMetric,
{
    /// Construct a sequencer measuring distance with `metric`.
    pub const fn with_metric(metric: M, config: SequencerConfig) -> Self {
        Self { metric, config }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &SequencerConfig {
        &self.config
    }

    fn measure(&self, waypoints: &[Waypoint]) -> Result<DistanceMatrix, SequenceError> {
        for waypoint in waypoints {
            waypoint
                .coordinate
                .validate()
                .map_err(|source| invalid(waypoint, source))?;
        }
        let mut rows = Vec::with_capacity(waypoints.len());
        for from in waypoints {
            let row = waypoints
                .iter()
                .map(|to| {
                    self.metric
                        .distance_km(&from.coordinate, &to.coordinate)
                        .map_err(|source| invalid(to, source))
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }
        Ok(DistanceMatrix { rows })
    }

    fn visiting_order(&self, waypoints: &[Waypoint], matrix: &DistanceMatrix) -> Vec<usize> {
        let count = waypoints.len();
        let fixed_end = waypoints
            .last()
            .filter(|w| self.config.pin_destination && w.kind == WaypointKind::Destination)
            .map(|_| count - 1);
        let partners = if self.config.respect_pickup_order {
            pickup_partners(waypoints)
        } else {
            vec![None; count]
        };

        let mut visited = vec![false; count];
        mark(&mut visited, 0);
        if let Some(end) = fixed_end {
            mark(&mut visited, end);
        }
        let mut order = Vec::with_capacity(count);
        order.push(0);
        let mut current = 0;
        while let Some(next) = next_stop(current, &visited, &partners, matrix) {
            trace!(
                "visiting stop {next} at {} km from stop {current}",
                matrix.km(current, next)
            );
            mark(&mut visited, next);
            order.push(next);
            current = next;
        }
        if let Some(end) = fixed_end {
            order.push(end);
        }
        order
    }
}

impl<M> Sequencer for NearestNeighbourSequencer<M>
where
    M: DistanceMetric,
{
    fn sequence(&self, waypoints: &[Waypoint]) -> Result<RouteResult, SequenceError> {
        let matrix = self.measure(waypoints)?;
        let input_order: Vec<usize> = (0..waypoints.len()).collect();
        let original_km = matrix.path_km(&input_order);
        if waypoints.len() <= 2 {
            return Ok(RouteResult::unchanged(waypoints.to_vec(), original_km));
        }

        let order = self.visiting_order(waypoints, &matrix);
        let total_km = matrix.path_km(&order);
        let ordered = order
            .iter()
            .filter_map(|&index| waypoints.get(index).cloned())
            .collect();
        debug!(
            "sequenced {} waypoints: {total_km} km against {original_km} km in input order",
            waypoints.len()
        );
        Ok(RouteResult::new(ordered, total_km, original_km))
    }
}

/// Order `waypoints` with the default great-circle sequencer.
///
/// # Errors
/// Returns [`SequenceError::InvalidCoordinate`] naming the first waypoint
/// whose coordinate is not finite or out of range.
///
/// # Examples
/// ```
/// use backload_core::{Coordinate, Waypoint};
/// use backload_sequencer::optimize_route;
///
/// let stops = [
///     Waypoint::origin("Davao City", Coordinate { lat: 7.0707, lng: 125.6087 }),
///     Waypoint::destination("Cebu City", Coordinate { lat: 10.3157, lng: 123.8854 }),
/// ];
/// let route = optimize_route(&stops)?;
/// assert_eq!(route.total_distance_km, 408);
/// assert_eq!(route.savings_km, 0);
/// # Ok::<(), backload_core::SequenceError>(())
/// ```
pub fn optimize_route(waypoints: &[Waypoint]) -> Result<RouteResult, SequenceError> {
    NearestNeighbourSequencer::new().sequence(waypoints)
}

fn invalid(waypoint: &Waypoint, source: CoordinateError) -> SequenceError {
    SequenceError::InvalidCoordinate {
        waypoint: waypoint.name.clone(),
        source,
    }
}

fn mark(visited: &mut [bool], index: usize) {
    if let Some(slot) = visited.get_mut(index) {
        *slot = true;
    }
}

fn is_visited(visited: &[bool], index: usize) -> bool {
    visited.get(index).copied().unwrap_or(true)
}

/// For each dropoff, the index of the pickup carrying the same cargo.
fn pickup_partners(waypoints: &[Waypoint]) -> Vec<Option<usize>> {
    let pickups: HashMap<&str, usize> = waypoints
        .iter()
        .enumerate()
        .filter(|(_, w)| w.kind == WaypointKind::Pickup)
        .filter_map(|(i, w)| w.cargo_ref.as_deref().map(|cargo| (cargo, i)))
        .collect();
    waypoints
        .iter()
        .map(|w| match (w.kind, w.cargo_ref.as_deref()) {
            (WaypointKind::Dropoff, Some(cargo)) => pickups.get(cargo).copied(),
            _ => None,
        })
        .collect()
}

fn next_stop(
    current: usize,
    visited: &[bool],
    partners: &[Option<usize>],
    matrix: &DistanceMatrix,
) -> Option<usize> {
    let unvisited = move || (0..visited.len()).filter(move |&i| !is_visited(visited, i));
    let eligible = unvisited().filter(|&i| {
        partners
            .get(i)
            .copied()
            .flatten()
            .is_none_or(|pickup| is_visited(visited, pickup))
    });
    nearest(current, eligible, matrix).or_else(|| {
        let fallback = nearest(current, unvisited(), matrix);
        if let Some(index) = fallback {
            warn!("no stop satisfies pickup order from stop {current}; taking stop {index}");
        }
        fallback
    })
}

/// Closest candidate to `from`; the lowest index wins ties.
fn nearest(
    from: usize,
    candidates: impl Iterator<Item = usize>,
    matrix: &DistanceMatrix,
) -> Option<usize> {
    candidates.min_by_key(|&to| (matrix.km(from, to), to))
}

/// Pairwise leg distances in whole kilometres.
struct DistanceMatrix {
    rows: Vec<Vec<u32>>,
}

impl DistanceMatrix {
    fn km(&self, from: usize, to: usize) -> u32 {
        self.rows
            .get(from)
            .and_then(|row| row.get(to))
            .copied()
            .unwrap_or(u32::MAX)
    }

    fn path_km(&self, order: &[usize]) -> u32 {
        order
            .windows(2)
            .filter_map(|pair| match pair {
                [from, to] => Some(self.km(*from, *to)),
                _ => None,
            })
            .fold(0, u32::saturating_add)
    }
}

#[cfg(test)]
mod tests;

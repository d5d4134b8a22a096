//! Planned trips and sequenced routes.
//!
//! A [`CandidateRoute`] is the trip a trucker intends to drive; a
//! [`RouteResult`] is an ordered set of stops with its distance and the
//! saving against visiting the stops in the order they were supplied.

use crate::{Coordinate, Waypoint};

/// The trip a trucker has planned, before any backloads are added.
///
/// # Examples
/// ```
/// use backload_core::{CandidateRoute, Coordinate};
///
/// let route = CandidateRoute::new(
///     Coordinate { lat: 7.0707, lng: 125.6087 },
///     Coordinate { lat: 10.3157, lng: 123.8854 },
/// )
/// .with_names("Davao City", "Cebu City");
/// assert_eq!(route.destination_name, "Cebu City");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CandidateRoute {
    /// Where the trip starts.
    pub origin: Coordinate,
    /// Where the trip ends.
    pub destination: Coordinate,
    /// Display name of the origin.
    #[cfg_attr(feature = "serde", serde(default))]
    pub origin_name: String,
    /// Display name of the destination.
    #[cfg_attr(feature = "serde", serde(default))]
    pub destination_name: String,
}

impl CandidateRoute {
    /// Construct a route between two coordinates with default names.
    pub fn new(origin: Coordinate, destination: Coordinate) -> Self {
        Self {
            origin,
            destination,
            origin_name: "Origin".to_owned(),
            destination_name: "Destination".to_owned(),
        }
    }

    /// Set the endpoint names, returning `self` for chaining.
    pub fn with_names(
        mut self,
        origin_name: impl Into<String>,
        destination_name: impl Into<String>,
    ) -> Self {
        self.origin_name = origin_name.into();
        self.destination_name = destination_name.into();
        self
    }

    /// The route's origin as a waypoint.
    pub fn origin_waypoint(&self) -> Waypoint {
        Waypoint::origin(self.origin_name.clone(), self.origin)
    }

    /// The route's destination as a waypoint.
    pub fn destination_waypoint(&self) -> Waypoint {
        Waypoint::destination(self.destination_name.clone(), self.destination)
    }
}

/// An ordered route with its distance and savings.
///
/// `ordered_waypoints` is always a permutation of the sequencer's input.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteResult {
    /// Stops in visiting order.
    pub ordered_waypoints: Vec<Waypoint>,
    /// Distance of the ordered route.
    pub total_distance_km: u32,
    /// Distance of the route in input order.
    pub original_distance_km: u32,
    /// `original - total`, or `0` when the ordering is no shorter.
    pub savings_km: u32,
    /// Savings as a rounded percentage of the original distance.
    pub savings_percent: u8,
}

impl RouteResult {
    /// Assemble a result, deriving the savings fields.
    ///
    /// # Examples
    /// ```
    /// use backload_core::RouteResult;
    ///
    /// let result = RouteResult::new(Vec::new(), 600, 800);
    /// assert_eq!(result.savings_km, 200);
    /// assert_eq!(result.savings_percent, 25);
    /// ```
    pub fn new(
        ordered_waypoints: Vec<Waypoint>,
        total_distance_km: u32,
        original_distance_km: u32,
    ) -> Self {
        let savings_km = original_distance_km.saturating_sub(total_distance_km);
        Self {
            ordered_waypoints,
            total_distance_km,
            original_distance_km,
            savings_km,
            savings_percent: savings_percent(savings_km, original_distance_km),
        }
    }

    /// A result that keeps the input order.
    pub fn unchanged(waypoints: Vec<Waypoint>, distance_km: u32) -> Self {
        Self::new(waypoints, distance_km, distance_km)
    }

    /// An empty route.
    pub fn empty() -> Self {
        Self::unchanged(Vec::new(), 0)
    }
}

fn savings_percent(savings_km: u32, original_distance_km: u32) -> u8 {
    if original_distance_km == 0 {
        return 0;
    }
    let percent = (f64::from(savings_km) / f64::from(original_distance_km) * 100.0).round();
    percent.clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(600, 800, 200, 25)]
    #[case(800, 600, 0, 0)]
    #[case(0, 0, 0, 0)]
    #[case(2, 3, 1, 33)]
    #[case(1, 3, 2, 67)]
    fn derives_savings(
        #[case] total: u32,
        #[case] original: u32,
        #[case] savings: u32,
        #[case] percent: u8,
    ) {
        let result = RouteResult::new(Vec::new(), total, original);
        assert_eq!(result.savings_km, savings);
        assert_eq!(result.savings_percent, percent);
    }

    #[test]
    fn unchanged_has_no_savings() {
        let result = RouteResult::unchanged(Vec::new(), 408);
        assert_eq!(result.total_distance_km, 408);
        assert_eq!(result.original_distance_km, 408);
        assert_eq!(result.savings_km, 0);
        assert_eq!(result.savings_percent, 0);
    }

    #[test]
    fn candidate_route_exposes_endpoint_waypoints() {
        let origin = Coordinate { lat: 7.0, lng: 125.0 };
        let destination = Coordinate { lat: 10.0, lng: 123.0 };
        let route = CandidateRoute::new(origin, destination);
        assert_eq!(route.origin_waypoint().name, "Origin");
        assert_eq!(route.destination_waypoint().coordinate, destination);
    }
}

//! Stops along a computed route.

use crate::{CargoListing, Coordinate};

/// The role a stop plays in a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WaypointKind {
    /// Where the trucker sets off.
    Origin,
    /// Where the trucker's planned trip ends.
    Destination,
    /// Where a backload is collected.
    Pickup,
    /// Where a backload is delivered.
    Dropoff,
}

/// A named stop.
///
/// `cargo_ref` links pickups and dropoffs back to the listing they serve and
/// is `None` for the trip's origin and destination.
///
/// # Examples
/// ```
/// use backload_core::{Coordinate, Waypoint, WaypointKind};
///
/// let start = Waypoint::origin("Davao City", Coordinate { lat: 7.0707, lng: 125.6087 });
/// assert_eq!(start.kind, WaypointKind::Origin);
/// assert!(start.cargo_ref.is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waypoint {
    /// Display name.
    pub name: String,
    /// Location of the stop.
    pub coordinate: Coordinate,
    /// Role of the stop.
    pub kind: WaypointKind,
    /// Listing served at this stop, for pickups and dropoffs.
    pub cargo_ref: Option<String>,
}

impl Waypoint {
    /// The start of a trip.
    pub fn origin(name: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            name: name.into(),
            coordinate,
            kind: WaypointKind::Origin,
            cargo_ref: None,
        }
    }

    /// The planned end of a trip.
    pub fn destination(name: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            name: name.into(),
            coordinate,
            kind: WaypointKind::Destination,
            cargo_ref: None,
        }
    }

    /// The pickup stop for `listing`.
    pub fn pickup(listing: &CargoListing) -> Self {
        Self {
            name: stop_name("Pickup", &listing.origin_name, listing),
            coordinate: listing.origin,
            kind: WaypointKind::Pickup,
            cargo_ref: Some(listing.id.clone()),
        }
    }

    /// The dropoff stop for `listing`.
    pub fn dropoff(listing: &CargoListing) -> Self {
        Self {
            name: stop_name("Dropoff", &listing.destination_name, listing),
            coordinate: listing.destination,
            kind: WaypointKind::Dropoff,
            cargo_ref: Some(listing.id.clone()),
        }
    }
}

fn stop_name(prefix: &str, place: &str, listing: &CargoListing) -> String {
    if place.is_empty() {
        format!("{prefix}: {}", listing.id)
    } else {
        format!("{prefix}: {place}")
    }
}

//! Cargo listings as seen by the matching engine.
//!
//! Only the fields the engine reads are modelled; the marketplace keeps the
//! full document elsewhere.

use crate::{Coordinate, Pesos};

/// Lifecycle state of a listing in the marketplace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ListingStatus {
    /// Accepting bids; the only state eligible for backload matching.
    #[default]
    Open,
    /// A trucker has been contracted.
    Booked,
    /// The cargo has been delivered.
    Delivered,
    /// The shipper withdrew the listing.
    Cancelled,
}

/// A snapshot of a cargo listing.
///
/// # Examples
/// ```
/// use backload_core::{CargoListing, Coordinate, ListingStatus, Pesos};
///
/// let listing = CargoListing::new(
///     "cargo-1",
///     Coordinate { lat: 10.3157, lng: 123.8854 },
///     Coordinate { lat: 7.0707, lng: 125.6087 },
///     Pesos(18_000),
/// );
/// assert_eq!(listing.status, ListingStatus::Open);
/// assert!(listing.is_open());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CargoListing {
    /// Identifier assigned by the listing repository.
    pub id: String,
    /// Pickup location.
    pub origin: Coordinate,
    /// Delivery location.
    pub destination: Coordinate,
    /// Display name of the pickup location.
    #[cfg_attr(feature = "serde", serde(default))]
    pub origin_name: String,
    /// Display name of the delivery location.
    #[cfg_attr(feature = "serde", serde(default))]
    pub destination_name: String,
    /// Lifecycle state.
    #[cfg_attr(feature = "serde", serde(default))]
    pub status: ListingStatus,
    /// Price the shipper is asking.
    pub asking_price: Pesos,
    /// Cargo weight in tonnes.
    #[cfg_attr(feature = "serde", serde(default))]
    pub weight_tonnes: f64,
    /// Free-text cargo description, e.g. `"Dry goods"`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub cargo_type: String,
    /// Road distance quoted by the shipper, when known.
    #[cfg_attr(feature = "serde", serde(default))]
    pub route_distance_km: Option<f64>,
}

impl CargoListing {
    /// Construct an open listing with empty descriptive fields.
    pub fn new(
        id: impl Into<String>,
        origin: Coordinate,
        destination: Coordinate,
        asking_price: Pesos,
    ) -> Self {
        Self {
            id: id.into(),
            origin,
            destination,
            origin_name: String::new(),
            destination_name: String::new(),
            status: ListingStatus::Open,
            asking_price,
            weight_tonnes: 0.0,
            cargo_type: String::new(),
            route_distance_km: None,
        }
    }

    /// Set the pickup and delivery names, returning `self` for chaining.
    pub fn with_names(
        mut self,
        origin_name: impl Into<String>,
        destination_name: impl Into<String>,
    ) -> Self {
        self.origin_name = origin_name.into();
        self.destination_name = destination_name.into();
        self
    }

    /// Set the status, returning `self` for chaining.
    pub fn with_status(mut self, status: ListingStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the cargo description and weight, returning `self` for chaining.
    pub fn with_cargo(mut self, cargo_type: impl Into<String>, weight_tonnes: f64) -> Self {
        self.cargo_type = cargo_type.into();
        self.weight_tonnes = weight_tonnes;
        self
    }

    /// Report whether the listing can be matched.
    pub fn is_open(&self) -> bool {
        self.status == ListingStatus::Open
    }
}

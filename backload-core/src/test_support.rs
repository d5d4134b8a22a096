//! Test-only helpers: a planar distance metric, an in-memory listing store,
//! and listing builders.

use geo::{Coord, Intersects, Rect};

use crate::{
    CargoListing, Coordinate, CoordinateError, DistanceMetric, ListingStore, Pesos,
};

/// Manhattan distance treating one degree as one kilometre.
///
/// Makes hand-computed expectations exact: the distance from `(0, 0)` to
/// `(3, 4)` is `7`.
#[derive(Default, Debug, Copy, Clone)]
pub struct GridMetric;

impl DistanceMetric for GridMetric {
    fn distance_km(&self, a: &Coordinate, b: &Coordinate) -> Result<u32, CoordinateError> {
        a.validate()?;
        b.validate()?;
        let units = (a.lat - b.lat).abs() + (a.lng - b.lng).abs();
        Ok(units.round() as u32)
    }
}

/// In-memory `ListingStore` performing a linear scan.
#[derive(Default, Debug)]
pub struct MemoryListingStore {
    listings: Vec<CargoListing>,
}

impl MemoryListingStore {
    /// Create a store from a collection of listings.
    pub fn with_listings<I>(listings: I) -> Self
    where
        I: IntoIterator<Item = CargoListing>,
    {
        Self {
            listings: listings.into_iter().collect(),
        }
    }
}

impl ListingStore for MemoryListingStore {
    fn listings_in_bbox(
        &self,
        bbox: &Rect<f64>,
    ) -> Box<dyn Iterator<Item = CargoListing> + Send + '_> {
        let bbox = *bbox;
        Box::new(
            self.listings
                .iter()
                // `Intersects` treats boundary points as inside the rectangle.
                .filter(move |l| bbox.intersects(&Coord::from(l.origin)))
                .cloned(),
        )
    }
}

/// An open listing between two `(lat, lng)` pairs.
pub fn listing(id: &str, pickup: (f64, f64), dropoff: (f64, f64), price: i64) -> CargoListing {
    CargoListing::new(
        id,
        Coordinate {
            lat: pickup.0,
            lng: pickup.1,
        },
        Coordinate {
            lat: dropoff.0,
            lng: dropoff.1,
        },
        Pesos(price),
    )
}

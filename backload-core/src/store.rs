//! Read access to listing snapshots, with spatial pre-filtering.
//!
//! The `ListingStore` trait lets the matcher cap a large listing pool to the
//! listings whose pickup lies near the route's destination before scoring
//! them. [`ListingIndex`] is an in-memory R\*-tree implementation.

use std::f64::consts::FRAC_PI_2;

use geo::{Coord, Rect};
use rstar::{AABB, RTree, RTreeObject};
use thiserror::Error;

use crate::{CargoListing, Coordinate, CoordinateError, EARTH_RADIUS_KM};

/// Read-only access to cargo listings keyed by pickup location.
///
/// The bounding box uses WGS84 coordinates (`x = longitude`, `y = latitude`)
/// and includes boundary points. Regions crossing the antimeridian must be
/// split by the caller; [`listings_near`] does this.
///
/// # Examples
///
/// ```rust
/// use geo::{Coord, Intersects, Rect};
/// use backload_core::{CargoListing, Coordinate, ListingStore, Pesos};
///
/// struct VecStore(Vec<CargoListing>);
///
/// impl ListingStore for VecStore {
///     fn listings_in_bbox(
///         &self,
///         bbox: &Rect<f64>,
///     ) -> Box<dyn Iterator<Item = CargoListing> + Send + '_> {
///         let bbox = *bbox;
///         Box::new(
///             self.0
///                 .iter()
///                 .filter(move |l| bbox.intersects(&Coord::from(l.origin)))
///                 .cloned(),
///         )
///     }
/// }
///
/// let here = Coordinate { lat: 0.0, lng: 0.0 };
/// let store = VecStore(vec![CargoListing::new("a", here, here, Pesos(1))]);
/// let bbox = Rect::new(Coord { x: -1.0, y: -1.0 }, Coord { x: 1.0, y: 1.0 });
/// assert_eq!(store.listings_in_bbox(&bbox).count(), 1);
/// ```
pub trait ListingStore: Send + Sync {
    /// Return listings whose pickup falls within `bbox`.
    fn listings_in_bbox(
        &self,
        bbox: &Rect<f64>,
    ) -> Box<dyn Iterator<Item = CargoListing> + Send + '_>;
}

/// Raised when a listing cannot be placed in a [`ListingIndex`].
#[derive(Debug, Clone, PartialEq, Error)]
#[error("listing {listing_id} has an invalid pickup coordinate: {source}")]
pub struct ListingIndexError {
    /// Identifier of the offending listing.
    pub listing_id: String,
    /// Validation failure.
    #[source]
    pub source: CoordinateError,
}

#[derive(Debug, Clone, PartialEq)]
struct IndexedListing {
    position: usize,
    pickup: [f64; 2],
}

impl RTreeObject for IndexedListing {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.pickup)
    }
}

/// In-memory R\*-tree over listing pickups.
///
/// Queries return listings in the order they were supplied.
#[derive(Debug)]
pub struct ListingIndex {
    listings: Vec<CargoListing>,
    tree: RTree<IndexedListing>,
}

impl ListingIndex {
    /// Index a listing snapshot.
    ///
    /// Fails on the first listing whose pickup is not a valid coordinate.
    pub fn new(listings: Vec<CargoListing>) -> Result<Self, ListingIndexError> {
        let entries = listings
            .iter()
            .enumerate()
            .map(|(position, listing)| {
                listing
                    .origin
                    .validate()
                    .map_err(|source| ListingIndexError {
                        listing_id: listing.id.clone(),
                        source,
                    })?;
                Ok(IndexedListing {
                    position,
                    pickup: [listing.origin.lng, listing.origin.lat],
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            listings,
            tree: RTree::bulk_load(entries),
        })
    }

    /// Number of indexed listings.
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    /// Report whether the index holds no listings.
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

impl ListingStore for ListingIndex {
    fn listings_in_bbox(
        &self,
        bbox: &Rect<f64>,
    ) -> Box<dyn Iterator<Item = CargoListing> + Send + '_> {
        let envelope =
            AABB::from_corners([bbox.min().x, bbox.min().y], [bbox.max().x, bbox.max().y]);
        let mut positions: Vec<usize> = self
            .tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|entry| entry.position)
            .collect();
        positions.sort_unstable();
        Box::new(
            positions
                .into_iter()
                .filter_map(|position| self.listings.get(position).cloned()),
        )
    }
}

/// Bounding boxes covering every point within `radius_km` of `center`.
///
/// Returns one box, or two disjoint boxes when the area crosses the
/// antimeridian. Areas containing a pole span all longitudes.
pub fn search_area(center: &Coordinate, radius_km: f64) -> Result<Vec<Rect<f64>>, CoordinateError> {
    center.validate()?;
    let radius = (radius_km.max(0.0) / EARTH_RADIUS_KM).min(std::f64::consts::PI);
    let lat = center.lat.to_radians();
    let min_lat = lat - radius;
    let max_lat = lat + radius;

    if min_lat <= -FRAC_PI_2 || max_lat >= FRAC_PI_2 {
        return Ok(vec![lat_band(min_lat, max_lat, -180.0, 180.0)]);
    }

    let ratio = radius.sin() / lat.cos();
    if ratio >= 1.0 {
        return Ok(vec![lat_band(min_lat, max_lat, -180.0, 180.0)]);
    }
    let delta_lng = ratio.asin().to_degrees();
    let west = center.lng - delta_lng;
    let east = center.lng + delta_lng;

    let boxes = if west < -180.0 {
        vec![
            lat_band(min_lat, max_lat, west + 360.0, 180.0),
            lat_band(min_lat, max_lat, -180.0, east),
        ]
    } else if east > 180.0 {
        vec![
            lat_band(min_lat, max_lat, west, 180.0),
            lat_band(min_lat, max_lat, -180.0, east - 360.0),
        ]
    } else {
        vec![lat_band(min_lat, max_lat, west, east)]
    };
    Ok(boxes)
}

fn lat_band(min_lat: f64, max_lat: f64, west: f64, east: f64) -> Rect<f64> {
    Rect::new(
        Coord {
            x: west,
            y: min_lat.to_degrees().max(-90.0),
        },
        Coord {
            x: east,
            y: max_lat.to_degrees().min(90.0),
        },
    )
}

/// Listings whose pickup lies within `radius_km` of `center`.
///
/// The result is a superset filter: listings on the edge of a box may lie a
/// little further than `radius_km` away, so callers still measure exact
/// distances. The boxes from [`search_area`] never overlap, so each listing
/// in the store is returned at most once, even when ids repeat.
pub fn listings_near<S>(
    store: &S,
    center: &Coordinate,
    radius_km: f64,
) -> Result<Vec<CargoListing>, CoordinateError>
where
    S: ListingStore + ?Sized,
{
    let found = search_area(center, radius_km)?
        .iter()
        .flat_map(|bbox| store.listings_in_bbox(bbox).collect::<Vec<_>>())
        .collect();
    Ok(found)
}

//! Great-circle distances between coordinates.
//!
//! The engine works on whole kilometres: every leg is rounded once, here, and
//! all totals downstream are sums of rounded legs.

use crate::{Coordinate, CoordinateError};

/// Mean Earth radius used by the Haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Measure the distance between two coordinates in whole kilometres.
///
/// Implementations must be symmetric, return `0` for identical inputs, and
/// reject invalid coordinates with [`CoordinateError`] instead of returning a
/// sentinel. Metrics must be `Send + Sync` so matchers and sequencers can be
/// shared across threads.
///
/// # Examples
/// ```
/// use backload_core::{Coordinate, DistanceMetric, Haversine};
///
/// let davao = Coordinate::new(7.0707, 125.6087)?;
/// let cebu = Coordinate::new(10.3157, 123.8854)?;
/// assert_eq!(Haversine.distance_km(&davao, &cebu)?, 408);
/// # Ok::<(), backload_core::CoordinateError>(())
/// ```
pub trait DistanceMetric: Send + Sync {
    /// Return the distance from `a` to `b`, rounded to the nearest kilometre.
    fn distance_km(&self, a: &Coordinate, b: &Coordinate) -> Result<u32, CoordinateError>;
}

/// Haversine great-circle distance on a sphere of radius [`EARTH_RADIUS_KM`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Haversine;

impl DistanceMetric for Haversine {
    fn distance_km(&self, a: &Coordinate, b: &Coordinate) -> Result<u32, CoordinateError> {
        a.validate()?;
        b.validate()?;
        Ok(round_km(haversine_km(a, b)))
    }
}

/// Haversine distance between two coordinates in whole kilometres.
///
/// Shorthand for [`Haversine::distance_km`].
pub fn distance_km(a: &Coordinate, b: &Coordinate) -> Result<u32, CoordinateError> {
    Haversine.distance_km(a, b)
}

fn haversine_km(a: &Coordinate, b: &Coordinate) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let lat_a = a.lat.to_radians();
    let lat_b = b.lat.to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lng / 2.0).sin().powi(2);
    // `min` guards against `h` drifting just above 1.0 for antipodal points.
    let c = 2.0 * h.sqrt().min(1.0).asin();
    EARTH_RADIUS_KM * c
}

fn round_km(km: f64) -> u32 {
    // Half the Earth's circumference fits comfortably in `u32`.
    km.round().clamp(0.0, f64::from(u32::MAX)) as u32
}

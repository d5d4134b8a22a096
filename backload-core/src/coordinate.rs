//! WGS84 coordinates as supplied by the geocoding collaborator.

use geo::{Coord, Point};
use thiserror::Error;

/// A latitude/longitude pair in decimal degrees.
///
/// Fields are public so snapshots from the listing repository can be built
/// without ceremony; [`Coordinate::validate`] is applied wherever a distance
/// is computed, so invalid values fail fast rather than producing `NaN`.
///
/// # Examples
/// ```
/// use backload_core::Coordinate;
///
/// let davao = Coordinate::new(7.0707, 125.6087)?;
/// assert_eq!(davao.lat, 7.0707);
/// # Ok::<(), backload_core::CoordinateError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    /// Latitude in degrees, `-90.0..=90.0`.
    pub lat: f64,
    /// Longitude in degrees, `-180.0..=180.0`.
    pub lng: f64,
}

/// Raised when a coordinate cannot take part in a distance computation.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CoordinateError {
    /// Latitude or longitude was `NaN` or infinite.
    #[error("coordinate ({lat}, {lng}) is not finite")]
    NonFinite {
        /// Offending latitude.
        lat: f64,
        /// Offending longitude.
        lng: f64,
    },
    /// Latitude fell outside `-90.0..=90.0`.
    #[error("latitude {lat} is outside -90..=90")]
    LatitudeOutOfRange {
        /// Offending latitude.
        lat: f64,
    },
    /// Longitude fell outside `-180.0..=180.0`.
    #[error("longitude {lng} is outside -180..=180")]
    LongitudeOutOfRange {
        /// Offending longitude.
        lng: f64,
    },
}

impl Coordinate {
    /// Validate and construct a coordinate.
    pub fn new(lat: f64, lng: f64) -> Result<Self, CoordinateError> {
        let coordinate = Self { lat, lng };
        coordinate.validate()?;
        Ok(coordinate)
    }

    /// Check that both components are finite and within range.
    pub fn validate(&self) -> Result<(), CoordinateError> {
        if !self.lat.is_finite() || !self.lng.is_finite() {
            return Err(CoordinateError::NonFinite {
                lat: self.lat,
                lng: self.lng,
            });
        }
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(CoordinateError::LatitudeOutOfRange { lat: self.lat });
        }
        if !(-180.0..=180.0).contains(&self.lng) {
            return Err(CoordinateError::LongitudeOutOfRange { lng: self.lng });
        }
        Ok(())
    }

    /// Return the coordinate as a `geo` point (`x = lng`, `y = lat`).
    pub fn to_point(self) -> Point<f64> {
        Point::from(Coord::from(self))
    }
}

impl From<Coordinate> for Coord<f64> {
    fn from(value: Coordinate) -> Self {
        Self {
            x: value.lng,
            y: value.lat,
        }
    }
}

//! Resolve place names to coordinates.
//!
//! Unknown names fall back to the directory's default coordinate so map
//! rendering never fails; each fallback is logged because it degrades match
//! and route quality.

use std::collections::HashMap;

use crate::Coordinate;

/// Look up the coordinate of a named place.
///
/// # Examples
///
/// ```rust
/// use backload_core::{Coordinate, LocationResolver};
///
/// struct Equator;
///
/// impl LocationResolver for Equator {
///     fn resolve(&self, _name: &str) -> Option<Coordinate> {
///         Some(Coordinate { lat: 0.0, lng: 0.0 })
///     }
/// }
///
/// assert!(Equator.resolve("anywhere").is_some());
/// ```
pub trait LocationResolver: Send + Sync {
    /// Return the coordinate for `name`, or `None` when it is unknown.
    fn resolve(&self, name: &str) -> Option<Coordinate>;
}

/// Outcome of [`CityDirectory::locate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocationLookup {
    /// The name was found.
    Known(Coordinate),
    /// The name was unknown; the directory's default was substituted.
    Fallback(Coordinate),
}

impl LocationLookup {
    /// The coordinate to use, whichever way it was obtained.
    pub const fn coordinate(self) -> Coordinate {
        match self {
            Self::Known(coordinate) | Self::Fallback(coordinate) => coordinate,
        }
    }

    /// Report whether the default coordinate was substituted.
    pub const fn is_fallback(self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// Default coordinate for unresolved names: Manila.
pub const MANILA: Coordinate = Coordinate {
    lat: 14.5995,
    lng: 120.9842,
};

const PHILIPPINE_CITIES: [(&str, f64, f64); 16] = [
    ("Manila", 14.5995, 120.9842),
    ("Quezon City", 14.6760, 121.0437),
    ("Caloocan", 14.6507, 120.9676),
    ("Batangas City", 13.7565, 121.0583),
    ("Baguio", 16.4023, 120.5960),
    ("Legazpi", 13.1391, 123.7438),
    ("Iloilo City", 10.7202, 122.5621),
    ("Bacolod", 10.6765, 122.9509),
    ("Cebu City", 10.3157, 123.8854),
    ("Tacloban", 11.2444, 125.0039),
    ("Cagayan de Oro", 8.4542, 124.6319),
    ("Butuan", 8.9475, 125.5406),
    ("Davao City", 7.0707, 125.6087),
    ("General Santos", 6.1164, 125.1716),
    ("Zamboanga City", 6.9214, 122.0790),
    ("Puerto Princesa", 9.7392, 118.7353),
];

/// Case-insensitive table of place names.
///
/// # Examples
/// ```
/// use backload_core::{CityDirectory, LocationResolver};
///
/// let directory = CityDirectory::philippines();
/// let davao = directory.resolve("davao city").expect("known city");
/// assert_eq!(davao.lat, 7.0707);
///
/// let lookup = directory.locate("Atlantis");
/// assert!(lookup.is_fallback());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CityDirectory {
    places: HashMap<String, Coordinate>,
    default_coordinate: Coordinate,
}

impl CityDirectory {
    /// Construct an empty directory that falls back to `default_coordinate`.
    pub fn new(default_coordinate: Coordinate) -> Self {
        Self {
            places: HashMap::new(),
            default_coordinate,
        }
    }

    /// A directory of major Philippine cities, defaulting to Manila.
    pub fn philippines() -> Self {
        PHILIPPINE_CITIES
            .iter()
            .fold(Self::new(MANILA), |directory, &(name, lat, lng)| {
                directory.with_place(name, Coordinate { lat, lng })
            })
    }

    /// Add or replace a place while returning `self` for chaining.
    pub fn with_place(mut self, name: &str, coordinate: Coordinate) -> Self {
        self.insert(name, coordinate);
        self
    }

    /// Add or replace a place.
    pub fn insert(&mut self, name: &str, coordinate: Coordinate) {
        self.places.insert(normalise(name), coordinate);
    }

    /// The coordinate substituted for unknown names.
    pub const fn default_coordinate(&self) -> Coordinate {
        self.default_coordinate
    }

    /// Number of known places.
    pub fn len(&self) -> usize {
        self.places.len()
    }

    /// Report whether the directory knows no places.
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// Resolve `name`, substituting the default coordinate when unknown.
    pub fn locate(&self, name: &str) -> LocationLookup {
        self.resolve(name).map_or_else(
            || {
                log::warn!(
                    "unresolved location '{name}'; falling back to ({}, {})",
                    self.default_coordinate.lat,
                    self.default_coordinate.lng
                );
                LocationLookup::Fallback(self.default_coordinate)
            },
            LocationLookup::Known,
        )
    }
}

impl LocationResolver for CityDirectory {
    fn resolve(&self, name: &str) -> Option<Coordinate> {
        self.places.get(&normalise(name)).copied()
    }
}

fn normalise(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

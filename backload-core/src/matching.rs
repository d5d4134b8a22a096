//! Rank cargo listings as backloads for a planned trip.
//!
//! The `Matcher` trait turns a [`CandidateRoute`] and a listing snapshot into
//! a ranked list of [`MatchResult`] values. Listings that cannot be served
//! within the matcher's detour allowance are left out; an empty result is a
//! normal outcome, not an error.

use thiserror::Error;

use crate::{CandidateRoute, CargoListing, CoordinateError};

/// A listing worth considering as a backload.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchResult {
    /// The matched listing.
    pub listing: CargoListing,
    /// Distance from the route's destination to the listing's pickup.
    pub detour_to_pickup_km: u32,
    /// Distance from the listing's dropoff back to the route's origin.
    pub detour_from_delivery_km: u32,
    /// Total extra driving: the sum of both legs.
    pub detour_km: u32,
    /// Attractiveness in `0..=100`; higher is better.
    pub match_score: u8,
}

/// Errors returned by [`Matcher::find_matches`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchError {
    /// The route's origin or destination was not a valid coordinate.
    #[error("route has an invalid coordinate: {source}")]
    InvalidRouteCoordinate {
        /// Validation failure.
        #[source]
        source: CoordinateError,
    },
    /// A listing carried an invalid pickup or dropoff coordinate.
    #[error("listing {listing_id} has an invalid coordinate: {source}")]
    InvalidListingCoordinate {
        /// Identifier of the offending listing.
        listing_id: String,
        /// Validation failure.
        #[source]
        source: CoordinateError,
    },
    /// The detour allowance was zero, negative, or not finite.
    #[error("maximum detour must be a positive number of kilometres, got {max_detour_km}")]
    InvalidMaxDetour {
        /// Rejected allowance.
        max_detour_km: f64,
    },
}

/// Rank listings against a planned trip.
///
/// Implementations must only return listings whose status is
/// [`ListingStatus::Open`](crate::ListingStatus::Open), must keep
/// `match_score` within `0..=100`, and must order results by descending score
/// with ties broken by ascending `detour_km`. Matchers must be `Send + Sync`
/// so they can run across threads.
///
/// # Examples
/// ```rust
/// use backload_core::{CandidateRoute, CargoListing, MatchError, MatchResult, Matcher};
///
/// struct NoMatches;
///
/// impl Matcher for NoMatches {
///     fn find_matches(
///         &self,
///         _route: &CandidateRoute,
///         _listings: &[CargoListing],
///     ) -> Result<Vec<MatchResult>, MatchError> {
///         Ok(Vec::new())
///     }
/// }
/// ```
pub trait Matcher: Send + Sync {
    /// Return eligible listings, best first.
    fn find_matches(
        &self,
        route: &CandidateRoute,
        listings: &[CargoListing],
    ) -> Result<Vec<MatchResult>, MatchError>;
}

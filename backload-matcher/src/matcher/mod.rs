//! `DetourMatcher` implementation.

use std::cmp::Ordering;

use backload_core::{
    CandidateRoute, CargoListing, DistanceMetric, Haversine, ListingStore, MatchError,
    MatchResult, Matcher, listings_near,
};
use log::{debug, trace};

/// Detour allowance used when none is configured.
pub const DEFAULT_MAX_DETOUR_KM: f64 = 50.0;

/// Slack added to the store query radius so pickups whose distance rounds
/// down to the allowance are still fetched.
const STORE_QUERY_MARGIN_KM: f64 = 1.0;

/// Configuration for [`DetourMatcher`].
#[derive(Debug, Clone, PartialEq)]
pub struct MatcherConfig {
    /// Largest acceptable sum of both empty legs, in kilometres. Inclusive.
    pub max_detour_km: f64,
    /// Keep only the best `n` matches when set.
    pub max_results: Option<usize>,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            max_detour_km: DEFAULT_MAX_DETOUR_KM,
            max_results: None,
        }
    }
}

impl MatcherConfig {
    /// Configuration with the given detour allowance and no result cap.
    #[must_use]
    pub const fn with_max_detour(max_detour_km: f64) -> Self {
        Self {
            max_detour_km,
            max_results: None,
        }
    }

    /// Validate the detour allowance.
    ///
    /// # Errors
    /// Returns [`MatchError::InvalidMaxDetour`] when the allowance is zero,
    /// negative, or not finite.
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.max_detour_km.is_finite() && self.max_detour_km > 0.0 {
            Ok(())
        } else {
            Err(MatchError::InvalidMaxDetour {
                max_detour_km: self.max_detour_km,
            })
        }
    }
}

/// Matcher ranking listings by the empty distance they add to a round trip.
///
/// For a route `origin → destination`, a listing's detour is the distance from
/// the route's destination to the listing's pickup plus the distance from the
/// listing's dropoff back to the route's origin. Listings whose detour is at
/// most `max_detour_km` are returned with
/// `match_score = round(100 - detour / max_detour_km * 100)`.
///
/// The matcher is generic over the [`DistanceMetric`] so tests can substitute
/// a planar metric; production code uses [`Haversine`].
#[derive(Debug, Clone)]
pub struct DetourMatcher<M = Haversine>
where
    M: DistanceMetric,
{
    metric: M,
    config: MatcherConfig,
}

impl DetourMatcher<Haversine> {
    /// Construct a great-circle matcher using default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(MatcherConfig::default())
    }

    /// Construct a great-circle matcher with explicit configuration.
    #[must_use]
    pub const fn with_config(config: MatcherConfig) -> Self {
        Self::with_metric(Haversine, config)
    }
}

impl Default for DetourMatcher<Haversine> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> DetourMatcher<M>
where
    M: DistanceMetric,
{
    /// Construct a matcher measuring distance with `metric`.
    pub const fn with_metric(metric: M, config: MatcherConfig) -> Self {
        Self { metric, config }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Match against listings drawn from `store` near the route's destination.
    ///
    /// Only listings whose pickup lies within the detour allowance of the
    /// destination can qualify, so the store is asked for that area alone
    /// before scoring. The query radius assumes `M` never reports less than
    /// the great-circle distance.
    ///
    /// # Errors
    /// Returns the same errors as [`Matcher::find_matches`].
    pub fn find_matches_in_store<S>(
        &self,
        route: &CandidateRoute,
        store: &S,
    ) -> Result<Vec<MatchResult>, MatchError>
    where
        S: ListingStore + ?Sized,
    {
        self.config.validate()?;
        validate_route(route)?;
        #[expect(
            clippy::float_arithmetic,
            reason = "query radius widens the allowance by a fixed margin"
        )]
        let radius_km = self.config.max_detour_km + STORE_QUERY_MARGIN_KM;
        let candidates = listings_near(store, &route.destination, radius_km)
            .map_err(|source| MatchError::InvalidRouteCoordinate { source })?;
        debug!(
            "store returned {} candidate listings within {radius_km} km of the destination",
            candidates.len()
        );
        self.find_matches(route, &candidates)
    }

    fn evaluate(
        &self,
        route: &CandidateRoute,
        listing: &CargoListing,
    ) -> Result<Option<MatchResult>, MatchError> {
        let invalid = |source| MatchError::InvalidListingCoordinate {
            listing_id: listing.id.clone(),
            source,
        };
        let detour_to_pickup_km = self
            .metric
            .distance_km(&route.destination, &listing.origin)
            .map_err(invalid)?;
        let detour_from_delivery_km = self
            .metric
            .distance_km(&listing.destination, &route.origin)
            .map_err(invalid)?;
        let detour_km = detour_to_pickup_km.saturating_add(detour_from_delivery_km);
        if f64::from(detour_km) > self.config.max_detour_km {
            trace!(
                "listing {} rejected: detour {detour_km} km exceeds {} km",
                listing.id, self.config.max_detour_km
            );
            return Ok(None);
        }
        let match_score = detour_score(detour_km, self.config.max_detour_km);
        trace!(
            "listing {} accepted: detour {detour_km} km, score {match_score}",
            listing.id
        );
        Ok(Some(MatchResult {
            listing: listing.clone(),
            detour_to_pickup_km,
            detour_from_delivery_km,
            detour_km,
            match_score,
        }))
    }
}

impl<M> Matcher for DetourMatcher<M>
where
    M: DistanceMetric,
{
    fn find_matches(
        &self,
        route: &CandidateRoute,
        listings: &[CargoListing],
    ) -> Result<Vec<MatchResult>, MatchError> {
        self.config.validate()?;
        validate_route(route)?;

        let mut matches = Vec::new();
        for listing in listings.iter().filter(|listing| listing.is_open()) {
            if let Some(found) = self.evaluate(route, listing)? {
                matches.push(found);
            }
        }
        matches.sort_by(rank);
        if let Some(limit) = self.config.max_results {
            matches.truncate(limit);
        }
        debug!(
            "matched {} of {} listings within {} km",
            matches.len(),
            listings.len(),
            self.config.max_detour_km
        );
        Ok(matches)
    }
}

/// Rank `listings` against `route` by great-circle detour.
///
/// Shorthand for a [`DetourMatcher`] with the given allowance and no result
/// cap.
///
/// # Errors
/// Returns [`MatchError::InvalidMaxDetour`] for a non-positive or non-finite
/// allowance, and the coordinate variants of [`MatchError`] when the route or
/// an open listing holds an invalid coordinate.
pub fn find_matches(
    route: &CandidateRoute,
    listings: &[CargoListing],
    max_detour_km: f64,
) -> Result<Vec<MatchResult>, MatchError> {
    DetourMatcher::with_config(MatcherConfig::with_max_detour(max_detour_km))
        .find_matches(route, listings)
}

fn validate_route(route: &CandidateRoute) -> Result<(), MatchError> {
    route
        .origin
        .validate()
        .and_then(|()| route.destination.validate())
        .map_err(|source| MatchError::InvalidRouteCoordinate { source })
}

#[expect(
    clippy::float_arithmetic,
    reason = "score is a linear falloff over the detour allowance"
)]
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is rounded and clamped to 0..=100 before the cast"
)]
fn detour_score(detour_km: u32, max_detour_km: f64) -> u8 {
    let score = 100.0 - f64::from(detour_km) / max_detour_km * 100.0;
    score.round().clamp(0.0, 100.0) as u8
}

/// Best score first, then shortest detour, then listing id.
fn rank(a: &MatchResult, b: &MatchResult) -> Ordering {
    b.match_score
        .cmp(&a.match_score)
        .then(a.detour_km.cmp(&b.detour_km))
        .then_with(|| a.listing.id.cmp(&b.listing.id))
}

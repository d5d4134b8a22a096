//! Detour-based backload matching.
//!
//! This crate provides [`DetourMatcher`], the default implementation of the
//! [`Matcher`](backload_core::Matcher) trait. A listing is a good backload when
//! the trucker can collect it near where their planned trip ends and deliver
//! it near where the trip began: the matcher sums those two empty legs, keeps
//! listings whose sum fits within the detour allowance, and ranks them so the
//! smallest detour scores highest.
//!
//! For large pools, [`DetourMatcher::find_matches_in_store`] first narrows the
//! candidates with a bounding-box query against a
//! [`ListingStore`](backload_core::ListingStore).
//!
//! # Examples
//!
//! ```
//! use backload_core::{CandidateRoute, CargoListing, Coordinate, Pesos};
//! use backload_matcher::find_matches;
//!
//! let davao = Coordinate::new(7.0707, 125.6087)?;
//! let cebu = Coordinate::new(10.3157, 123.8854)?;
//! let route = CandidateRoute::new(davao, cebu);
//! let return_trip = CargoListing::new("cargo-1", cebu, davao, Pesos(18_000));
//!
//! let matches = find_matches(&route, &[return_trip], 50.0)?;
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches.first().map(|m| m.match_score), Some(100));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod matcher;

pub use matcher::{DEFAULT_MAX_DETOUR_KM, DetourMatcher, MatcherConfig, find_matches};

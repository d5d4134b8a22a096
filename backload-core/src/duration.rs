//! Estimated driving time, rounded to the minute.

use std::fmt;
use std::time::Duration;

/// A travel time in whole minutes.
///
/// Displays as `"Xh Ym"`, or `"Y min"` when under an hour.
///
/// # Examples
/// ```
/// use backload_core::TravelDuration;
///
/// assert_eq!(TravelDuration::from_minutes(490).to_string(), "8h 10m");
/// assert_eq!(TravelDuration::from_minutes(45).to_string(), "45 min");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TravelDuration {
    minutes: u32,
}

impl TravelDuration {
    /// A zero-length duration.
    pub const ZERO: Self = Self { minutes: 0 };

    /// Construct a duration from whole minutes.
    pub const fn from_minutes(minutes: u32) -> Self {
        Self { minutes }
    }

    /// Total minutes.
    pub const fn minutes(self) -> u32 {
        self.minutes
    }

    /// Whole hours, discarding the remainder.
    pub const fn hours_part(self) -> u32 {
        self.minutes.div_euclid(60)
    }

    /// Minutes left over after whole hours.
    pub const fn minutes_part(self) -> u32 {
        self.minutes.rem_euclid(60)
    }

    /// Convert to a standard library [`Duration`].
    pub fn as_duration(self) -> Duration {
        Duration::from_secs(u64::from(self.minutes) * 60)
    }
}

impl fmt::Display for TravelDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.minutes < 60 {
            write!(f, "{} min", self.minutes)
        } else {
            write!(f, "{}h {}m", self.hours_part(), self.minutes_part())
        }
    }
}

pub(crate) fn minutes_for(distance_km: f64, average_speed_kmh: f64) -> u32 {
    if !average_speed_kmh.is_finite() || average_speed_kmh <= 0.0 {
        return 0;
    }
    let minutes = (distance_km / average_speed_kmh * 60.0).round();
    minutes.clamp(0.0, f64::from(u32::MAX)) as u32
}

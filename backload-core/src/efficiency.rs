//! Route efficiency scoring.
//!
//! A route earns a perfect score when it nets ₱20 per kilometre after fuel.

use crate::{CostModel, Pesos, VehicleClass, fuel::sanitise_distance};

/// Net earnings per kilometre that map to a score of 100.
pub const PERFECT_EARNINGS_PER_KM: f64 = 20.0;

/// Profitability summary for a planned trip.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EfficiencyScore {
    /// Score in `0..=100`.
    pub score: u8,
    /// Fuel cost of the trip.
    pub fuel_cost: Pesos,
    /// Earnings minus fuel cost; may be negative.
    pub net_earnings: Pesos,
    /// Net earnings per kilometre; `0.0` for zero-length trips.
    pub earnings_per_km: f64,
}

impl CostModel {
    /// Score a trip earning `earnings` over `distance_km` with `vehicle`.
    ///
    /// Zero, negative, or non-finite distances yield a score of `0` and
    /// `earnings_per_km == 0.0` instead of dividing by zero. Negative net
    /// earnings clamp to a score of `0`.
    pub fn efficiency(
        &self,
        earnings: Pesos,
        distance_km: f64,
        vehicle: VehicleClass,
    ) -> EfficiencyScore {
        let distance_km = sanitise_distance(distance_km);
        let fuel_cost = self.fuel_cost(distance_km, vehicle);
        let net_earnings = earnings - fuel_cost;
        if distance_km == 0.0 {
            return EfficiencyScore {
                score: 0,
                fuel_cost,
                net_earnings,
                earnings_per_km: 0.0,
            };
        }
        let earnings_per_km = net_earnings.as_f64() / distance_km;
        EfficiencyScore {
            score: score_for(earnings_per_km),
            fuel_cost,
            net_earnings,
            earnings_per_km,
        }
    }
}

/// Score a trip at the default fuel price.
///
/// # Examples
/// ```
/// use backload_core::{Pesos, VehicleClass, efficiency};
///
/// let result = efficiency(Pesos(0), 100.0, VehicleClass::from_label("6W Dropside"));
/// assert!(result.net_earnings < Pesos(0));
/// assert_eq!(result.score, 0);
/// ```
pub fn efficiency(earnings: Pesos, distance_km: f64, vehicle: VehicleClass) -> EfficiencyScore {
    CostModel::default().efficiency(earnings, distance_km, vehicle)
}

fn score_for(earnings_per_km: f64) -> u8 {
    let raw = (earnings_per_km / PERFECT_EARNINGS_PER_KM * 100.0).round();
    if raw.is_nan() {
        return 0;
    }
    raw.clamp(0.0, 100.0) as u8
}

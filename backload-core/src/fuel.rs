//! Fuel consumption and cost estimates.

use crate::{Pesos, TravelDuration, VehicleClass, duration::minutes_for};

/// Diesel pump price assumed when the caller supplies none, in pesos per litre.
pub const DEFAULT_FUEL_PRICE_PER_LITRE: f64 = 65.0;

/// Average road speed assumed for duration estimates, in km/h.
pub const DEFAULT_AVERAGE_SPEED_KMH: f64 = 50.0;

/// Fuel needed to cover a distance and what it costs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FuelEstimate {
    /// Distance the estimate covers.
    pub distance_km: f64,
    /// Litres burned over the distance.
    pub litres_used: f64,
    /// Cost of the burned fuel.
    pub cost: Pesos,
}

/// Prices and speeds applied by the estimators.
///
/// # Examples
/// ```
/// use backload_core::{CostModel, Pesos, VehicleClass};
///
/// let model = CostModel::default();
/// assert_eq!(model.fuel_cost(100.0, VehicleClass::TenWheeler), Pesos(2167));
/// assert_eq!(model.estimate_duration(75.0).to_string(), "1h 30m");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostModel {
    /// Fuel price in pesos per litre.
    pub price_per_litre: f64,
    /// Average travel speed in km/h.
    pub average_speed_kmh: f64,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            price_per_litre: DEFAULT_FUEL_PRICE_PER_LITRE,
            average_speed_kmh: DEFAULT_AVERAGE_SPEED_KMH,
        }
    }
}

impl CostModel {
    /// Litres and cost for driving `distance_km` with `vehicle`.
    ///
    /// Negative or non-finite distances are treated as zero.
    pub fn estimate_fuel(&self, distance_km: f64, vehicle: VehicleClass) -> FuelEstimate {
        let distance_km = sanitise_distance(distance_km);
        let litres_used = distance_km / vehicle.km_per_litre();
        FuelEstimate {
            distance_km,
            litres_used,
            cost: Pesos::from_f64_rounded(litres_used * self.price_per_litre),
        }
    }

    /// Fuel cost for driving `distance_km` with `vehicle`.
    pub fn fuel_cost(&self, distance_km: f64, vehicle: VehicleClass) -> Pesos {
        self.estimate_fuel(distance_km, vehicle).cost
    }

    /// Travel time for `distance_km` at the model's average speed.
    pub fn estimate_duration(&self, distance_km: f64) -> TravelDuration {
        estimate_duration(distance_km, self.average_speed_kmh)
    }
}

/// Fuel cost for a distance, vehicle class and pump price.
///
/// `cost = round(distance_km / km_per_litre * price_per_litre)`.
///
/// # Examples
/// ```
/// use backload_core::{Pesos, VehicleClass, fuel_cost};
///
/// let vehicle = VehicleClass::from_label("10W Wing Van (12-15 tons)");
/// assert_eq!(fuel_cost(100.0, vehicle, 65.0), Pesos(2167));
/// ```
pub fn fuel_cost(distance_km: f64, vehicle: VehicleClass, price_per_litre: f64) -> Pesos {
    CostModel {
        price_per_litre,
        ..CostModel::default()
    }
    .fuel_cost(distance_km, vehicle)
}

/// Travel time for a distance at an average speed.
///
/// A non-positive or non-finite speed yields [`TravelDuration::ZERO`].
pub fn estimate_duration(distance_km: f64, average_speed_kmh: f64) -> TravelDuration {
    TravelDuration::from_minutes(minutes_for(
        sanitise_distance(distance_km),
        average_speed_kmh,
    ))
}

pub(crate) fn sanitise_distance(distance_km: f64) -> f64 {
    if distance_km.is_finite() {
        distance_km.max(0.0)
    } else {
        0.0
    }
}

//! Vehicle classes and their fuel efficiency.
//!
//! Marketplace listings describe trucks with free-text labels such as
//! `"10W Wing Van (12-15 tons)"`. Labels are resolved to a [`VehicleClass`]
//! once, when a trucker's vehicle enters the engine, and the typed class is
//! used for every fuel computation afterwards.
//!
//! # Examples
//! ```
//! use backload_core::VehicleClass;
//!
//! let class = VehicleClass::from_label("10W Wing Van (12-15 tons)");
//! assert_eq!(class, VehicleClass::TenWheeler);
//! assert_eq!(class.km_per_litre(), 3.0);
//! ```

/// Broad truck categories used in the Philippine haulage market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum VehicleClass {
    /// Suzuki Multicab and similar micro trucks.
    Multicab,
    /// Mitsubishi L300 or Hyundai H100 light vans.
    LightVan,
    /// Four-wheel light trucks.
    FourWheeler,
    /// Six-wheel trucks.
    SixWheeler,
    /// Ten-wheel trucks and wing vans.
    TenWheeler,
    /// Twelve-wheel trucks.
    TwelveWheeler,
    /// Tractor heads hauling trailers.
    PrimeMover,
    /// Any label that matched no known class.
    #[default]
    Unclassified,
}

/// Label fragments checked in order; the first fragment found wins.
const LABEL_TABLE: [(&str, VehicleClass); 8] = [
    ("Multicab", VehicleClass::Multicab),
    ("L300", VehicleClass::LightVan),
    ("H100", VehicleClass::LightVan),
    ("4W", VehicleClass::FourWheeler),
    ("6W", VehicleClass::SixWheeler),
    ("10W", VehicleClass::TenWheeler),
    ("12W", VehicleClass::TwelveWheeler),
    ("Prime Mover", VehicleClass::PrimeMover),
];

impl VehicleClass {
    /// Every class, in label-resolution order.
    pub const ALL: [Self; 8] = [
        Self::Multicab,
        Self::LightVan,
        Self::FourWheeler,
        Self::SixWheeler,
        Self::TenWheeler,
        Self::TwelveWheeler,
        Self::PrimeMover,
        Self::Unclassified,
    ];

    /// Resolve a free-text vehicle label.
    ///
    /// Matching is case-sensitive substring search over a fixed ordered table,
    /// so `"L300 4W"` resolves to [`VehicleClass::LightVan`]. Unknown labels
    /// resolve to [`VehicleClass::Unclassified`].
    pub fn from_label(label: &str) -> Self {
        LABEL_TABLE
            .iter()
            .find(|(fragment, _)| label.contains(fragment))
            .map_or(Self::Unclassified, |(_, class)| *class)
    }

    /// Typical fuel efficiency in kilometres per litre.
    pub fn km_per_litre(self) -> f64 {
        match self {
            Self::Multicab => 8.0,
            Self::LightVan => 7.0,
            Self::FourWheeler => 6.0,
            Self::SixWheeler => 4.0,
            Self::TenWheeler => 3.0,
            Self::TwelveWheeler => 2.5,
            Self::PrimeMover => 2.0,
            Self::Unclassified => 5.0,
        }
    }

    /// Return the class as a short lowercase identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Multicab => "multicab",
            Self::LightVan => "light_van",
            Self::FourWheeler => "four_wheeler",
            Self::SixWheeler => "six_wheeler",
            Self::TenWheeler => "ten_wheeler",
            Self::TwelveWheeler => "twelve_wheeler",
            Self::PrimeMover => "prime_mover",
            Self::Unclassified => "unclassified",
        }
    }
}

impl std::fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for VehicleClass {
    type Err = String;

    /// Parse either an identifier produced by [`VehicleClass::as_str`] or a
    /// free-text label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("vehicle label must not be empty".to_owned());
        }
        Ok(Self::ALL
            .into_iter()
            .find(|class| class.as_str() == trimmed)
            .unwrap_or_else(|| Self::from_label(trimmed)))
    }
}

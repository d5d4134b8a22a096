//! Plan command implementation for the backload CLI.

use std::io::{BufReader, Write};

use backload_core::{
    CandidateRoute, CargoListing, CityDirectory, Coordinate, CostModel, DEFAULT_AVERAGE_SPEED_KMH,
    DEFAULT_FUEL_PRICE_PER_LITRE, ListingStatus, Pesos, VehicleClass,
};
use backload_matcher::{DEFAULT_MAX_DETOUR_KM, DetourMatcher, MatcherConfig};
use backload_sequencer::{
    DEFAULT_MAX_BACKLOADS, NearestNeighbourSequencer, PlannerConfig, SequencerConfig, TripPlan,
    TripPlanner,
};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::files::{file_is_file, open_utf8_file};
use crate::{
    ARG_AVERAGE_SPEED, ARG_FUEL_PRICE, ARG_MAX_BACKLOADS, ARG_MAX_DETOUR_KM, ARG_PLAN_REQUEST,
    CliError, ENV_PLAN_REQUEST,
};

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Plan a truck trip with return loads. The request is a JSON \
                 document naming the trip's origin and destination cities, \
                 the truck, the base earnings, and the open listings to \
                 consider. The plan is printed to stdout as JSON.",
    about = "Plan a trip with backloads"
)]
#[ortho_config(prefix = "BACKLOAD")]
pub(crate) struct PlanArgs {
    /// Path to a JSON file containing a plan request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Largest extra distance a backload may add, in kilometres.
    #[arg(long = ARG_MAX_DETOUR_KM, value_name = "km")]
    #[serde(default)]
    pub(crate) max_detour_km: Option<f64>,
    /// Most backloads to fold into the trip.
    #[arg(long = ARG_MAX_BACKLOADS, value_name = "count")]
    #[serde(default)]
    pub(crate) max_backloads: Option<usize>,
    /// Diesel price in pesos per litre.
    #[arg(long = ARG_FUEL_PRICE, value_name = "pesos")]
    #[serde(default)]
    pub(crate) fuel_price: Option<f64>,
    /// Average travel speed in km/h.
    #[arg(long = ARG_AVERAGE_SPEED, value_name = "kmh")]
    #[serde(default)]
    pub(crate) average_speed_kmh: Option<f64>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlanConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Detour allowance handed to the matcher.
    pub(crate) matcher: MatcherConfig,
    /// Most backloads folded into the trip.
    pub(crate) max_backloads: usize,
    /// Fuel price and speed used to cost the trip.
    pub(crate) cost_model: CostModel,
}

impl PlanConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.request_path, ARG_PLAN_REQUEST)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    fn planner_config(&self, vehicle: VehicleClass) -> PlannerConfig {
        PlannerConfig {
            max_backloads: self.max_backloads,
            cost_model: self.cost_model,
            vehicle,
        }
    }
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_PLAN_REQUEST,
            env: ENV_PLAN_REQUEST,
        })?;
        let max_detour_km = positive(
            ARG_MAX_DETOUR_KM,
            args.max_detour_km.unwrap_or(DEFAULT_MAX_DETOUR_KM),
        )?;
        let price_per_litre = positive(
            ARG_FUEL_PRICE,
            args.fuel_price.unwrap_or(DEFAULT_FUEL_PRICE_PER_LITRE),
        )?;
        let average_speed_kmh = positive(
            ARG_AVERAGE_SPEED,
            args.average_speed_kmh.unwrap_or(DEFAULT_AVERAGE_SPEED_KMH),
        )?;

        Ok(Self {
            request_path,
            matcher: MatcherConfig::with_max_detour(max_detour_km),
            max_backloads: args.max_backloads.unwrap_or(DEFAULT_MAX_BACKLOADS),
            cost_model: CostModel {
                price_per_litre,
                average_speed_kmh,
            },
        })
    }
}

fn positive(field: &'static str, value: f64) -> Result<f64, CliError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(CliError::InvalidOption { field, value })
    }
}

/// A trip to plan, as read from the request file.
///
/// Places are city names resolved through the built-in Philippine directory.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub(crate) struct PlanRequest {
    /// City the trip starts from.
    pub(crate) origin: String,
    /// City the trip ends at.
    pub(crate) destination: String,
    /// Free-text truck description, e.g. `"10W Wing Van"`.
    #[serde(default)]
    pub(crate) vehicle: String,
    /// Pay for the primary load, before backloads.
    #[serde(default)]
    pub(crate) base_earnings: Pesos,
    /// Listings to consider as backloads.
    #[serde(default)]
    pub(crate) listings: Vec<ListingEntry>,
}

/// A marketplace listing with named pickup and delivery cities.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub(crate) struct ListingEntry {
    pub(crate) id: String,
    pub(crate) origin: String,
    pub(crate) destination: String,
    pub(crate) asking_price: Pesos,
    #[serde(default)]
    pub(crate) status: ListingStatus,
    #[serde(default)]
    pub(crate) cargo_type: String,
    #[serde(default)]
    pub(crate) weight_tonnes: f64,
}

/// JSON document printed by the `plan` command.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub(crate) struct PlanReport {
    /// Trip origin as named in the request.
    pub(crate) origin: String,
    /// Trip destination as named in the request.
    pub(crate) destination: String,
    /// Truck class resolved from the request's vehicle label.
    pub(crate) vehicle: VehicleClass,
    /// Place names that were not in the directory and fell back to Manila.
    pub(crate) unresolved_locations: Vec<String>,
    /// Human-readable totals.
    pub(crate) summary: PlanSummary,
    /// The full plan.
    pub(crate) plan: TripPlan,
}

/// Display strings for the headline numbers of a plan.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub(crate) struct PlanSummary {
    pub(crate) distance: String,
    pub(crate) duration: String,
    pub(crate) fuel_cost: String,
    pub(crate) earnings: String,
    pub(crate) net_earnings: String,
}

impl PlanSummary {
    fn from_plan(plan: &TripPlan) -> Self {
        Self {
            distance: format!("{} km", plan.route.total_distance_km),
            duration: plan.duration.to_string(),
            fuel_cost: plan.fuel.cost.to_string(),
            earnings: plan.earnings.to_string(),
            net_earnings: plan.efficiency.net_earnings.to_string(),
        }
    }
}

/// Resolves request place names, remembering which ones fell back.
struct PlaceResolver {
    directory: CityDirectory,
    unresolved: Vec<String>,
}

impl PlaceResolver {
    fn new(directory: CityDirectory) -> Self {
        Self {
            directory,
            unresolved: Vec::new(),
        }
    }

    fn locate(&mut self, name: &str) -> Coordinate {
        let lookup = self.directory.locate(name);
        if lookup.is_fallback() && !self.unresolved.iter().any(|seen| seen == name) {
            self.unresolved.push(name.to_owned());
        }
        lookup.coordinate()
    }

    fn listing(&mut self, entry: &ListingEntry) -> CargoListing {
        let origin = self.locate(&entry.origin);
        let destination = self.locate(&entry.destination);
        CargoListing::new(entry.id.clone(), origin, destination, entry.asking_price)
            .with_names(entry.origin.clone(), entry.destination.clone())
            .with_status(entry.status)
            .with_cargo(entry.cargo_type.clone(), entry.weight_tonnes)
    }
}

pub(super) fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_plan_with(args, &mut stdout)
}

pub(super) fn run_plan_with(args: PlanArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_plan_config(args)?;
    let request = load_plan_request(&config.request_path)?;
    let report = build_report(&config, &request)?;
    write_plan_report(writer, &report)
}

fn resolve_plan_config(args: PlanArgs) -> Result<PlanConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Plan the trip described by `request` under `config`.
pub(super) fn build_report(
    config: &PlanConfig,
    request: &PlanRequest,
) -> Result<PlanReport, CliError> {
    let mut places = PlaceResolver::new(CityDirectory::philippines());
    let route = CandidateRoute::new(
        places.locate(&request.origin),
        places.locate(&request.destination),
    )
    .with_names(request.origin.clone(), request.destination.clone());
    let listings: Vec<CargoListing> = request
        .listings
        .iter()
        .map(|entry| places.listing(entry))
        .collect();
    let vehicle = VehicleClass::from_label(&request.vehicle);
    debug!(
        "planning {} to {} for a {vehicle} with {} listings",
        request.origin,
        request.destination,
        listings.len()
    );

    let planner = TripPlanner::with_parts(
        DetourMatcher::with_config(config.matcher.clone()),
        NearestNeighbourSequencer::with_config(SequencerConfig::pickups_first()),
        config.planner_config(vehicle),
    );
    let plan = planner
        .plan(&route, &listings, request.base_earnings)
        .map_err(|source| CliError::Plan { source })?;

    Ok(PlanReport {
        origin: request.origin.clone(),
        destination: request.destination.clone(),
        vehicle,
        unresolved_locations: places.unresolved,
        summary: PlanSummary::from_plan(&plan),
        plan,
    })
}

/// Loads a JSON-encoded [`PlanRequest`] from disk.
pub(super) fn load_plan_request(path: &Utf8Path) -> Result<PlanRequest, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenPlanRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParsePlanRequest {
        path: path.to_path_buf(),
        source,
    })
}

fn write_plan_report(writer: &mut dyn Write, report: &PlanReport) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(report).map_err(CliError::SerialisePlanReport)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WritePlanOutput)?;
    writer
        .write_all(b"\n")
        .map_err(CliError::WritePlanOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PlanConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PlanConfig::try_from(merged)
}

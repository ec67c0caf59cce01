//! Functionality for running conservation scenarios over zone records.
//!
//! Everything in this module is a pure function of its arguments: base records are never
//! modified and no state is kept between calls.
use crate::dataset::Dataset;
use crate::scenario::{Measure, SimulationSettings};
use crate::units::Dimensionless;
use crate::utility::UtilityType;
use crate::zone::{MAX_SUSTAINABILITY, ZoneRecord};
use log::debug;
use std::iter;

pub mod savings;
pub use savings::{Savings, calculate_savings};
pub mod scoring;
pub use scoring::{SustainabilityScores, aggregate_sustainability};
pub mod series;
pub use series::{MonthPoint, generate_monthly_series};
pub mod summary;
pub use summary::{ConsumptionSummary, priority_zones};

/// Simulated consumption never falls below this fraction of the base consumption
pub const MIN_MULTIPLIER: Dimensionless = Dimensionless(0.5);

/// Sustainability points gained per percentage point of the conservation factor
const SUSTAINABILITY_PER_FACTOR: f64 = 0.5;

/// Calculate the multiplier applied to base consumption for a utility.
///
/// The conservation factor always applies. Measure and investment penalties are only subtracted
/// when the simulation is enabled. The result is clamped to [`MIN_MULTIPLIER`].
///
/// # Arguments
///
/// * `conservation_factor` - Percentage reduction from the slider (0-50)
/// * `utility` - Which utility's measures to apply
/// * `settings` - The current simulation settings
pub fn multiplier(
    conservation_factor: u32,
    utility: UtilityType,
    settings: &SimulationSettings,
) -> Dimensionless {
    let mut multiplier = Dimensionless(1.0) - Dimensionless(conservation_factor as f64 / 100.0);
    if settings.simulation_enabled {
        // Penalties are subtracted one at a time, measures first
        let penalties = settings
            .active_measures(utility)
            .map(Measure::penalty)
            .chain(iter::once(settings.investment_level.penalty()));
        multiplier = penalties.fold(multiplier, |acc, penalty| acc - penalty);
    }

    multiplier.max(MIN_MULTIPLIER)
}

/// Derive simulated records from base records.
///
/// Every returned record is marked as simulated, even if the transformation leaves its values
/// unchanged. Records are returned in the same order as `base`.
///
/// # Arguments
///
/// * `base` - The base records for `utility`
/// * `conservation_factor` - Percentage reduction from the slider (0-50)
/// * `utility` - Which utility the records belong to
/// * `settings` - The current simulation settings
pub fn derive_records(
    base: &[ZoneRecord],
    conservation_factor: u32,
    utility: UtilityType,
    settings: &SimulationSettings,
) -> Vec<ZoneRecord> {
    let multiplier = multiplier(conservation_factor, utility, settings);
    let sustainability_gain = conservation_factor as f64 * SUSTAINABILITY_PER_FACTOR;
    debug!(
        "Deriving {} {utility} records with multiplier {}",
        base.len(),
        multiplier.0
    );

    base.iter()
        .map(|record| ZoneRecord {
            consumption: (record.consumption * multiplier).round(),
            per_capita: (record.per_capita * multiplier).round(),
            sustainability: (record.sustainability as f64 + sustainability_gain)
                .round()
                .min(MAX_SUSTAINABILITY as f64) as u32,
            is_simulated: true,
            ..record.clone()
        })
        .collect()
}

/// Derive simulated records using the conservation factor `settings` gives for `utility`
pub fn derive_for_utility(
    base: &[ZoneRecord],
    utility: UtilityType,
    settings: &SimulationSettings,
) -> Vec<ZoneRecord> {
    derive_records(
        base,
        settings.conservation_factor(utility),
        utility,
        settings,
    )
}

/// Everything computed for a scenario
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResults {
    /// Derived water records
    pub water: Vec<ZoneRecord>,
    /// Derived electricity records
    pub electricity: Vec<ZoneRecord>,
    /// Aggregate sustainability scores over the derived records
    pub scores: SustainabilityScores,
    /// Water saved relative to the base records
    pub water_savings: Savings,
    /// Electricity saved relative to the base records
    pub electricity_savings: Savings,
    /// Illustrative seasonal consumption curve
    pub monthly_series: [MonthPoint; 12],
}

impl SimulationResults {
    /// The derived records for the given utility
    pub fn records(&self, utility: UtilityType) -> &[ZoneRecord] {
        match utility {
            UtilityType::Water => &self.water,
            UtilityType::Electricity => &self.electricity,
        }
    }

    /// The savings for the given utility
    pub fn savings(&self, utility: UtilityType) -> &Savings {
        match utility {
            UtilityType::Water => &self.water_savings,
            UtilityType::Electricity => &self.electricity_savings,
        }
    }
}

/// Run a scenario over a dataset.
///
/// # Arguments
///
/// * `dataset` - The base records
/// * `settings` - The scenario settings
/// * `current_month` - Zero-based index of the current month, used to flag the monthly series
pub fn run(
    dataset: &Dataset,
    settings: &SimulationSettings,
    current_month: u32,
) -> SimulationResults {
    let water = derive_for_utility(&dataset.water, UtilityType::Water, settings);
    let electricity = derive_for_utility(&dataset.electricity, UtilityType::Electricity, settings);

    SimulationResults {
        scores: aggregate_sustainability(&water, &electricity),
        water_savings: calculate_savings(&dataset.water, &water),
        electricity_savings: calculate_savings(&dataset.electricity, &electricity),
        monthly_series: generate_monthly_series(current_month),
        water,
        electricity,
    }
}

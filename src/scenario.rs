//! Simulation settings: which conservation measures are active and how strongly they apply.
//!
//! Settings are read from an optional `scenario.toml` file in the dataset directory. Any setting
//! not given takes its default value, which corresponds to a fresh dashboard session with the
//! simulation switched off.
use crate::input::{input_err_msg, read_toml};
use crate::units::Dimensionless;
use crate::utility::UtilityType;
use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};
use serde_string_enum::{DeserializeLabeledStringEnum, SerializeLabeledStringEnum};
use std::path::Path;
use strum::{Display, EnumIter, IntoEnumIterator};

const SCENARIO_FILE_NAME: &str = "scenario.toml";

/// The largest value either percentage slider can take
pub const MAX_FACTOR: u32 = 50;

/// A conservation or efficiency measure which can be switched on in a scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Measure {
    /// Collection and storage of rainwater
    #[strum(to_string = "Rainwater Harvesting")]
    RainwaterHarvesting,
    /// Reuse of household wastewater
    #[strum(to_string = "Greywater Recycling")]
    GreywaterRecycling,
    /// Smart water meters
    #[strum(to_string = "Smart Metering")]
    SmartMetering,
    /// Active leak detection systems
    #[strum(to_string = "Leak Detection")]
    LeakDetection,
    /// Rooftop solar installation
    #[strum(to_string = "Solar Power")]
    Solar,
    /// LED lighting conversion
    #[strum(to_string = "LED Lighting")]
    Led,
    /// Smart grid implementation
    #[strum(to_string = "Smart Grid")]
    SmartGrid,
    /// Energy storage systems
    #[strum(to_string = "Energy Storage")]
    EnergyStorage,
}

impl Measure {
    /// The utility whose consumption this measure reduces
    pub fn utility(self) -> UtilityType {
        match self {
            Self::RainwaterHarvesting
            | Self::GreywaterRecycling
            | Self::SmartMetering
            | Self::LeakDetection => UtilityType::Water,
            Self::Solar | Self::Led | Self::SmartGrid | Self::EnergyStorage => {
                UtilityType::Electricity
            }
        }
    }

    /// The amount subtracted from the consumption multiplier when this measure is active
    pub fn penalty(self) -> Dimensionless {
        Dimensionless(match self {
            Self::SmartMetering | Self::Led => 0.01,
            Self::RainwaterHarvesting
            | Self::GreywaterRecycling
            | Self::SmartGrid
            | Self::EnergyStorage => 0.02,
            Self::LeakDetection | Self::Solar => 0.03,
        })
    }
}

/// Level of infrastructure investment backing the scenario
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    EnumIter,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum InvestmentLevel {
    /// No additional reduction
    #[string = "low"]
    Low,
    /// Moderate investment
    #[default]
    #[string = "medium"]
    Medium,
    /// Heavy investment
    #[string = "high"]
    High,
}

impl InvestmentLevel {
    /// The amount subtracted from the consumption multiplier for this level of investment
    pub fn penalty(self) -> Dimensionless {
        Dimensionless(match self {
            Self::Low => 0.0,
            Self::Medium => 0.025,
            Self::High => 0.05,
        })
    }

    /// Name of the level, as written in scenario files
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// The period over which base consumption figures are reported
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    EnumIter,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum TimePeriod {
    /// Daily figures
    #[string = "day"]
    Day,
    /// Weekly figures
    #[string = "week"]
    Week,
    /// Monthly figures
    #[default]
    #[string = "month"]
    Month,
    /// Yearly figures
    #[string = "year"]
    Year,
}

impl TimePeriod {
    /// The name of the dataset subdirectory holding figures for this period
    pub fn dir_name(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }
}

/// Water conservation measures
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WaterMeasures {
    /// Enable rainwater harvesting
    pub rainwater_harvesting: bool,
    /// Enable greywater recycling
    pub greywater_recycling: bool,
    /// Deploy smart water meters
    pub smart_metering: bool,
    /// Active leak detection systems
    pub leak_detection: bool,
}

/// Electricity efficiency measures
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ElectricityMeasures {
    /// Rooftop solar installation
    pub solar: bool,
    /// LED lighting conversion
    pub led: bool,
    /// Smart grid implementation
    pub smart_grid: bool,
    /// Energy storage systems
    pub energy_storage: bool,
}

/// The full set of user-controlled simulation settings.
///
/// NB: The percentage sliders apply whether or not the simulation is enabled, but the measures
/// and investment level only take effect when `simulation_enabled` is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationSettings {
    /// Master switch for measures and investment
    pub simulation_enabled: bool,
    /// Blanket reduction in water consumption, as a percentage (0-50)
    pub water_conservation_factor: u32,
    /// Blanket reduction in electricity consumption, as a percentage (0-50)
    pub energy_efficiency_factor: u32,
    /// Level of infrastructure investment
    pub investment_level: InvestmentLevel,
    /// Which period's base figures to load
    pub time_period: TimePeriod,
    /// Water conservation measures
    pub water: WaterMeasures,
    /// Electricity efficiency measures
    pub electricity: ElectricityMeasures,
}

/// Check that a percentage slider value is in range
fn check_factor(name: &str, value: u32) -> Result<()> {
    ensure!(
        value <= MAX_FACTOR,
        "{name} must be between 0 and {MAX_FACTOR}, got {value}"
    );

    Ok(())
}

impl SimulationSettings {
    /// Read the scenario file from the specified dataset directory.
    ///
    /// If the file is not present, default settings are used.
    pub fn from_path<P: AsRef<Path>>(dataset_dir: P) -> Result<SimulationSettings> {
        let file_path = dataset_dir.as_ref().join(SCENARIO_FILE_NAME);
        if !file_path.is_file() {
            return Ok(SimulationSettings::default());
        }

        let settings: SimulationSettings = read_toml(&file_path)?;
        settings
            .validate()
            .with_context(|| input_err_msg(&file_path))?;

        Ok(settings)
    }

    /// Validate settings after reading in file
    fn validate(&self) -> Result<()> {
        check_factor("water_conservation_factor", self.water_conservation_factor)?;
        check_factor("energy_efficiency_factor", self.energy_efficiency_factor)?;

        Ok(())
    }

    /// The percentage slider which applies to the given utility
    pub fn conservation_factor(&self, utility: UtilityType) -> u32 {
        match utility {
            UtilityType::Water => self.water_conservation_factor,
            UtilityType::Electricity => self.energy_efficiency_factor,
        }
    }

    /// Whether the given measure is switched on (regardless of `simulation_enabled`)
    pub fn is_enabled(&self, measure: Measure) -> bool {
        match measure {
            Measure::RainwaterHarvesting => self.water.rainwater_harvesting,
            Measure::GreywaterRecycling => self.water.greywater_recycling,
            Measure::SmartMetering => self.water.smart_metering,
            Measure::LeakDetection => self.water.leak_detection,
            Measure::Solar => self.electricity.solar,
            Measure::Led => self.electricity.led,
            Measure::SmartGrid => self.electricity.smart_grid,
            Measure::EnergyStorage => self.electricity.energy_storage,
        }
    }

    /// Iterate over the switched-on measures for a utility
    pub fn active_measures(&self, utility: UtilityType) -> impl Iterator<Item = Measure> + '_ {
        Measure::iter().filter(move |m| m.utility() == utility && self.is_enabled(*m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::assert_error;
    use itertools::Itertools;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_from_path_no_file() {
        let dir = tempdir().unwrap();
        assert_eq!(
            SimulationSettings::from_path(dir.path()).unwrap(),
            SimulationSettings::default()
        );
    }

    #[test]
    fn test_defaults() {
        let settings = SimulationSettings::default();
        assert!(!settings.simulation_enabled);
        assert_eq!(settings.water_conservation_factor, 0);
        assert_eq!(settings.energy_efficiency_factor, 0);
        assert_eq!(settings.investment_level, InvestmentLevel::Medium);
        assert_eq!(settings.time_period, TimePeriod::Month);
        assert_eq!(settings.active_measures(UtilityType::Water).count(), 0);
    }

    #[test]
    fn test_from_path() {
        let dir = tempdir().unwrap();
        {
            let mut file = File::create(dir.path().join(SCENARIO_FILE_NAME)).unwrap();
            writeln!(
                file,
                "simulation_enabled = true
water_conservation_factor = 25
investment_level = \"high\"

[water]
rainwater_harvesting = true
leak_detection = true"
            )
            .unwrap();
        }

        let settings = SimulationSettings::from_path(dir.path()).unwrap();
        assert!(settings.simulation_enabled);
        assert_eq!(settings.conservation_factor(UtilityType::Water), 25);
        assert_eq!(settings.conservation_factor(UtilityType::Electricity), 0);
        assert_eq!(settings.investment_level, InvestmentLevel::High);
        assert_eq!(
            settings.active_measures(UtilityType::Water).collect_vec(),
            [Measure::RainwaterHarvesting, Measure::LeakDetection]
        );
        assert_eq!(settings.active_measures(UtilityType::Electricity).count(), 0);
    }

    #[test]
    fn test_from_path_factor_out_of_range() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join(SCENARIO_FILE_NAME);
        {
            let mut file = File::create(&file_path).unwrap();
            writeln!(file, "energy_efficiency_factor = 51").unwrap();
        }

        let result = SimulationSettings::from_path(dir.path());
        assert_error!(result, input_err_msg(&file_path));
    }

    #[test]
    fn test_check_factor() {
        assert!(check_factor("factor", 0).is_ok());
        assert!(check_factor("factor", MAX_FACTOR).is_ok());
        assert_error!(
            check_factor("factor", 60),
            "factor must be between 0 and 50, got 60"
        );
    }

    #[test]
    fn test_from_path_unknown_measure() {
        let dir = tempdir().unwrap();
        {
            let mut file = File::create(dir.path().join(SCENARIO_FILE_NAME)).unwrap();
            writeln!(file, "[water]\ndesalination = true").unwrap();
        }

        assert!(SimulationSettings::from_path(dir.path()).is_err());
    }

    #[test]
    fn test_measure_utilities() {
        let water = Measure::iter()
            .filter(|m| m.utility() == UtilityType::Water)
            .collect_vec();
        assert_eq!(
            water,
            [
                Measure::RainwaterHarvesting,
                Measure::GreywaterRecycling,
                Measure::SmartMetering,
                Measure::LeakDetection
            ]
        );
        assert_eq!(Measure::Led.to_string(), "LED Lighting");
    }

    #[test]
    fn test_investment_penalty() {
        assert_eq!(InvestmentLevel::Low.penalty(), Dimensionless(0.0));
        assert_eq!(InvestmentLevel::Medium.penalty(), Dimensionless(0.025));
        assert_eq!(InvestmentLevel::High.penalty(), Dimensionless(0.05));
    }
}

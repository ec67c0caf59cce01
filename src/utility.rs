//! The types of utility whose consumption is tracked.
use strum::{Display, EnumIter};

/// A utility supplied to every zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum UtilityType {
    /// Piped water supply
    Water,
    /// Grid electricity supply
    Electricity,
}

impl UtilityType {
    /// The name of the CSV file containing this utility's zone records
    pub fn zones_file_name(self) -> &'static str {
        match self {
            Self::Water => "water_zones.csv",
            Self::Electricity => "electricity_zones.csv",
        }
    }

    /// A capitalised name for use in reports
    pub fn title(self) -> &'static str {
        match self {
            Self::Water => "Water",
            Self::Electricity => "Electricity",
        }
    }

    /// Unit for totals once scaled down by 10^6 (megalitres or megawatt-hours)
    pub fn scaled_unit(self) -> &'static str {
        match self {
            Self::Water => "ML",
            Self::Electricity => "MWh",
        }
    }

    /// Unit for per-capita figures
    pub fn per_capita_unit(self) -> &'static str {
        match self {
            Self::Water => "L",
            Self::Electricity => "kWh",
        }
    }
}

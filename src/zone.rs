//! Zones are the geographic units for which utility consumption is recorded.
use crate::id::{ZoneID, check_unique_ids, define_id_getter};
use crate::units::{Consumption, PerCapita};
use anyhow::{Context, Result, ensure};
use serde::Deserialize;

/// The highest possible sustainability score
pub const MAX_SUSTAINABILITY: u32 = 100;

/// Consumption statistics for a single zone and utility.
///
/// Base records are read from input files and never modified. Simulation produces new records
/// with `is_simulated` set.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ZoneRecord {
    /// Identifier, unique within the zone's utility record set
    pub id: ZoneID,
    /// Display name. Not necessarily unique.
    pub zone: String,
    /// Latitude in decimal degrees
    pub lat: f64,
    /// Longitude in decimal degrees
    pub lng: f64,
    /// Total consumption
    pub consumption: Consumption,
    /// Consumption per person
    pub per_capita: PerCapita,
    /// Sustainability score between 0 and 100
    pub sustainability: u32,
    /// Whether this record was produced by the simulation engine
    #[serde(skip)]
    pub is_simulated: bool,
}
define_id_getter! {ZoneRecord, ZoneID}

impl ZoneRecord {
    /// Check that the record's fields are in range
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.lat.is_finite() && (-90.0..=90.0).contains(&self.lat),
            "Latitude must be between -90 and 90"
        );
        ensure!(
            self.lng.is_finite() && (-180.0..=180.0).contains(&self.lng),
            "Longitude must be between -180 and 180"
        );
        ensure!(
            self.consumption.is_finite() && self.consumption >= Consumption(0.0),
            "Consumption must be a finite, non-negative number"
        );
        ensure!(
            self.per_capita.is_finite() && self.per_capita >= PerCapita(0.0),
            "Per-capita consumption must be a finite, non-negative number"
        );
        ensure!(
            self.sustainability <= MAX_SUSTAINABILITY,
            "Sustainability score must be between 0 and {MAX_SUSTAINABILITY}"
        );

        Ok(())
    }
}

/// Validate a set of zone records, checking each record and that IDs are unique.
///
/// Duplicate zone names are permitted.
pub fn validate_zones(records: &[ZoneRecord]) -> Result<()> {
    for record in records {
        record
            .validate()
            .with_context(|| format!("Invalid record for zone {} ({})", record.id, record.zone))?;
    }

    check_unique_ids(records)
}

//! The base zone records for every utility.
use crate::zone::ZoneRecord;

/// Base consumption records for one time period.
///
/// Loaded once and never modified; simulation derives new record sets from it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    /// Water zone records
    pub water: Vec<ZoneRecord>,
    /// Electricity zone records
    pub electricity: Vec<ZoneRecord>,
}

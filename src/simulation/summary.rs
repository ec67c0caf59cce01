//! Headline figures for a set of zone records.
use crate::units::{Consumption, Dimensionless, PerCapita};
use crate::zone::ZoneRecord;
use itertools::Itertools;

/// Totals and averages over a set of zone records
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConsumptionSummary {
    /// Summed consumption over all zones
    pub total_consumption: Consumption,
    /// Mean per-capita consumption over zones (zero if there are none)
    pub average_per_capita: PerCapita,
    /// Number of zones
    pub zone_count: usize,
}

impl ConsumptionSummary {
    /// Summarise a set of records
    pub fn from_records(records: &[ZoneRecord]) -> Self {
        let total_per_capita: PerCapita = records.iter().map(|r| r.per_capita).sum();
        Self {
            total_consumption: records.iter().map(|r| r.consumption).sum(),
            average_per_capita: total_per_capita / Dimensionless(records.len().max(1) as f64),
            zone_count: records.len(),
        }
    }
}

/// The `n` zones with the lowest sustainability scores, lowest first.
///
/// Zones with equal scores keep their original order.
pub fn priority_zones(records: &[ZoneRecord], n: usize) -> Vec<&ZoneRecord> {
    records
        .iter()
        .sorted_by_key(|r| r.sustainability)
        .take(n)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::{electricity_records, water_records};
    use crate::id::ZoneID;
    use float_cmp::assert_approx_eq;
    use rstest::rstest;

    #[rstest]
    fn test_summary(water_records: Vec<ZoneRecord>) {
        let summary = ConsumptionSummary::from_records(&water_records);
        assert_eq!(summary.zone_count, 5);
        assert_eq!(summary.total_consumption, Consumption(20_900_000.0));
        // (125 + 145 + 115 + 105 + 105) / 5
        assert_approx_eq!(PerCapita, summary.average_per_capita, PerCapita(119.0));
    }

    #[test]
    fn test_summary_empty() {
        let summary = ConsumptionSummary::from_records(&[]);
        assert_eq!(summary.zone_count, 0);
        assert_eq!(summary.total_consumption, Consumption(0.0));
        assert_eq!(summary.average_per_capita, PerCapita(0.0));
    }

    #[rstest]
    fn test_priority_zones(electricity_records: Vec<ZoneRecord>) {
        let ids = priority_zones(&electricity_records, 3)
            .into_iter()
            .map(|r| r.id)
            .collect_vec();
        // Scores are 58, 49, 53, 52
        assert_eq!(ids, [ZoneID(2), ZoneID(4), ZoneID(3)]);
    }

    #[rstest]
    fn test_priority_zones_stable(water_records: Vec<ZoneRecord>) {
        // Zones 4 and 5 both score 70
        let zones = priority_zones(&water_records, 10);
        assert_eq!(zones.len(), water_records.len());
        assert_eq!(
            zones.iter().map(|r| r.id).collect_vec(),
            [ZoneID(2), ZoneID(1), ZoneID(4), ZoneID(5), ZoneID(3)]
        );
    }
}

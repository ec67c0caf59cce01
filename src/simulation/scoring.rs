//! Aggregate sustainability scores and their qualitative ratings.
use crate::zone::ZoneRecord;
use serde::Serialize;
use strum::Display;

/// Sustainability scores averaged over zones, rounded to whole numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SustainabilityScores {
    /// Mean score over water zones
    pub water: u32,
    /// Mean score over electricity zones
    pub electricity: u32,
    /// Mean of the two utility means
    pub overall: u32,
}

/// Mean sustainability of a set of records. An empty set gives zero.
fn mean_sustainability(records: &[ZoneRecord]) -> f64 {
    let total: f64 = records.iter().map(|r| r.sustainability as f64).sum();
    total / records.len().max(1) as f64
}

/// Calculate aggregate sustainability scores for derived records.
///
/// The overall score is calculated from the unrounded per-utility means, so rounding only
/// happens once per output value.
pub fn aggregate_sustainability(
    water: &[ZoneRecord],
    electricity: &[ZoneRecord],
) -> SustainabilityScores {
    let water_mean = mean_sustainability(water);
    let electricity_mean = mean_sustainability(electricity);

    SustainabilityScores {
        water: water_mean.round() as u32,
        electricity: electricity_mean.round() as u32,
        overall: f64::midpoint(water_mean, electricity_mean).round() as u32,
    }
}

/// Progress towards sustainability targets, judged from an overall score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SustainabilityRating {
    /// Score above 70
    #[strum(to_string = "Good progress toward SDG targets")]
    Good,
    /// Score above 50
    #[strum(to_string = "Moderate progress, improvements needed")]
    Moderate,
    /// Anything lower
    #[strum(to_string = "Significant improvements required")]
    Poor,
}

impl SustainabilityRating {
    /// Rate an overall score
    pub fn from_score(score: u32) -> Self {
        match score {
            71.. => Self::Good,
            51..=70 => Self::Moderate,
            _ => Self::Poor,
        }
    }
}

/// Classification of a single zone's score, as used for colouring map markers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum SustainabilityBand {
    /// 80 or more
    Sustainable,
    /// 60 to 79
    Good,
    /// 40 to 59
    Warning,
    /// Below 40
    Critical,
}

impl SustainabilityBand {
    /// Classify a score
    pub fn from_score(score: u32) -> Self {
        match score {
            80.. => Self::Sustainable,
            60..=79 => Self::Good,
            40..=59 => Self::Warning,
            _ => Self::Critical,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::{electricity_records, water_records, zone_with_score};
    use rstest::rstest;

    #[test]
    fn test_aggregate_empty() {
        assert_eq!(
            aggregate_sustainability(&[], &[]),
            SustainabilityScores {
                water: 0,
                electricity: 0,
                overall: 0
            }
        );
    }

    #[rstest]
    fn test_aggregate(water_records: Vec<ZoneRecord>, electricity_records: Vec<ZoneRecord>) {
        // Water: (65 + 52 + 78 + 70 + 70) / 5 = 67
        // Electricity: (58 + 49 + 53 + 52) / 4 = 53
        assert_eq!(
            aggregate_sustainability(&water_records, &electricity_records),
            SustainabilityScores {
                water: 67,
                electricity: 53,
                overall: 60
            }
        );
    }

    #[test]
    fn test_overall_uses_unrounded_means() {
        // Water mean 60.5 rounds to 61 and electricity mean 60.4 rounds to 60. Averaging the
        // rounded scores would give 61, but the unrounded mean is 60.45.
        let water = [zone_with_score(60), zone_with_score(61)];
        let electricity = [60, 60, 61, 60, 61].map(zone_with_score);
        let scores = aggregate_sustainability(&water, &electricity);
        assert_eq!(scores.water, 61);
        assert_eq!(scores.electricity, 60);
        assert_eq!(scores.overall, 60);
    }

    #[rstest]
    #[case(100, SustainabilityRating::Good)]
    #[case(71, SustainabilityRating::Good)]
    #[case(70, SustainabilityRating::Moderate)]
    #[case(51, SustainabilityRating::Moderate)]
    #[case(50, SustainabilityRating::Poor)]
    #[case(0, SustainabilityRating::Poor)]
    fn test_rating(#[case] score: u32, #[case] expected: SustainabilityRating) {
        assert_eq!(SustainabilityRating::from_score(score), expected);
    }

    #[rstest]
    #[case(80, SustainabilityBand::Sustainable)]
    #[case(79, SustainabilityBand::Good)]
    #[case(60, SustainabilityBand::Good)]
    #[case(59, SustainabilityBand::Warning)]
    #[case(40, SustainabilityBand::Warning)]
    #[case(39, SustainabilityBand::Critical)]
    fn test_band(#[case] score: u32, #[case] expected: SustainabilityBand) {
        assert_eq!(SustainabilityBand::from_score(score), expected);
    }
}

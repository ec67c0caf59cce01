//! Savings of simulated consumption relative to base consumption.
use crate::units::Consumption;
use crate::zone::ZoneRecord;
use serde::Serialize;

/// Consumption saved by a scenario
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Savings {
    /// Base total minus simulated total
    pub savings: Consumption,
    /// Savings as a percentage of the base total, to two decimal places.
    ///
    /// If the base total is zero this is not a number (`"NaN"`).
    pub percent: String,
}

impl Savings {
    /// Whether `percent` is a finite number
    pub fn is_defined(&self) -> bool {
        self.percent.parse::<f64>().is_ok_and(f64::is_finite)
    }
}

/// Format a percentage to two decimal places.
///
/// Values exactly halfway between two hundredths round away from zero. Only odd multiples of 1/8
/// can lie exactly halfway, as every other hundredth-and-a-half has no exact binary form.
#[allow(clippy::float_cmp)]
fn format_percent(percent: f64) -> String {
    let eighths = percent * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
        // Nudge off the tie so `{:.2}` doesn't round it to even
        return format!("{:.2}", percent + 0.001_f64.copysign(percent));
    }

    format!("{percent:.2}")
}

/// Calculate the savings of derived records relative to base records.
///
/// NB: The percentage is not guarded against a zero base total, in which case it is `"NaN"`.
/// Use [`Savings::is_defined`] to check.
pub fn calculate_savings(base: &[ZoneRecord], derived: &[ZoneRecord]) -> Savings {
    let base_total: Consumption = base.iter().map(|r| r.consumption).sum();
    let derived_total: Consumption = derived.iter().map(|r| r.consumption).sum();
    let savings = base_total - derived_total;
    let percent = (savings / base_total).0 * 100.0;

    Savings {
        savings,
        percent: format_percent(percent),
    }
}

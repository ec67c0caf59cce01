//! A synthetic seasonal consumption curve for the year.
//!
//! This is an illustrative pattern, not historical data: water use peaks in the hot months and
//! electricity use has two peaks for heating and cooling.
use chrono::{Datelike, Local};
use serde::Serialize;
use std::f64::consts::PI;

/// Three-letter month names, starting with January
const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Baseline monthly water consumption (litres)
const BASE_WATER: f64 = 4_500_000.0;

/// Baseline monthly electricity consumption (kWh)
const BASE_ELECTRICITY: f64 = 8_500_000.0;

/// A point on the monthly consumption curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthPoint {
    /// Abbreviated month name
    #[serde(rename = "month")]
    pub name: &'static str,
    /// Water consumption for the month
    pub water: u64,
    /// Electricity consumption for the month
    pub electricity: u64,
    /// Whether this is the current calendar month
    pub is_current_month: bool,
}

/// The zero-based index of the current local calendar month
pub fn current_month_index() -> u32 {
    Local::now().month0()
}

/// Seasonal scaling shared by both utilities
fn seasonal_factor(idx: f64) -> f64 {
    (idx / 12.0 * PI * 2.0).sin() * 0.2 + 0.9
}

fn water_factor(idx: f64) -> f64 {
    1.0 + ((idx + 3.0) / 12.0 * PI * 2.0).sin() * 0.3
}

fn electricity_factor(idx: f64) -> f64 {
    1.0 + ((idx + 1.0) / 6.0 * PI * 2.0).cos() * 0.25
}

/// Generate the twelve-month curve.
///
/// # Arguments
///
/// * `current_month` - Zero-based index of the month to flag as current
pub fn generate_monthly_series(current_month: u32) -> [MonthPoint; 12] {
    std::array::from_fn(|idx| {
        let i = idx as f64;
        let seasonal = seasonal_factor(i);
        MonthPoint {
            name: MONTH_NAMES[idx],
            water: (BASE_WATER * water_factor(i) * seasonal).round() as u64,
            electricity: (BASE_ELECTRICITY * electricity_factor(i) * seasonal).round() as u64,
            is_current_month: idx as u32 == current_month,
        }
    })
}

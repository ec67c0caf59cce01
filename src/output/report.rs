//! A paginated plain-text report summarising a scenario run.
//!
//! The report covers the same ground as the dashboard's PDF export: headline scores, consumption
//! totals, the effect of any simulated measures, the zones most in need of improvement and a set
//! of standard recommendations. Every page ends with a `Page X of Y` footer.
use crate::scenario::SimulationSettings;
use crate::simulation::scoring::{SustainabilityBand, SustainabilityRating};
use crate::simulation::{ConsumptionSummary, SimulationResults, priority_zones};
use crate::utility::UtilityType;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::{error, info};
use std::fmt;
use std::fs;
use std::mem;
use std::path::Path;
use strum::IntoEnumIterator;

/// The maximum number of body lines on a page, excluding the footer
pub const LINES_PER_PAGE: usize = 50;

/// The width of a page in characters
const PAGE_WIDTH: usize = 80;

/// How many of the lowest-scoring zones to list for each utility
const PRIORITY_ZONE_COUNT: usize = 5;

/// Consumption figures are divided by this before display
const DISPLAY_SCALE: f64 = 1_000_000.0;

const RECOMMENDATIONS: [&str; 19] = [
    "1. Immediate Actions:",
    "   • Implement leak detection systems in low-sustainability zones",
    "   • Deploy smart meters for real-time consumption monitoring",
    "   • Initiate public awareness campaigns in high-consumption areas",
    "",
    "2. Medium-term Initiatives:",
    "   • Install rainwater harvesting systems in residential areas",
    "   • Upgrade to LED lighting in public spaces",
    "   • Implement greywater recycling in commercial buildings",
    "",
    "3. Long-term Investments:",
    "   • Deploy solar power systems in suitable zones",
    "   • Establish smart grid infrastructure",
    "   • Create energy storage facilities for peak load management",
    "",
    "4. Policy Recommendations:",
    "   • Introduce tiered pricing for excessive consumption",
    "   • Provide incentives for conservation measures",
    "   • Mandate sustainability reporting for large consumers",
];

/// The values a report is built from
pub struct ReportData<'a> {
    /// Results of the scenario
    pub results: &'a SimulationResults,
    /// The scenario's settings
    pub settings: &'a SimulationSettings,
    /// The date shown on the report
    pub generated_on: NaiveDate,
}

/// Accumulates lines, starting a new page when the current one is full
#[derive(Default)]
struct ReportBuilder {
    pages: Vec<Vec<String>>,
    current: Vec<String>,
}

impl ReportBuilder {
    /// Start a new page unless at least `lines` more lines fit on the current one
    fn reserve(&mut self, lines: usize) {
        if self.current.len() + lines > LINES_PER_PAGE {
            self.pages.push(mem::take(&mut self.current));
        }
    }

    fn line<S: Into<String>>(&mut self, text: S) {
        self.reserve(1);
        self.current.push(text.into());
    }

    fn blank(&mut self) {
        self.line("");
    }

    /// Add a section heading, keeping it on the same page as the first `lines` lines after it
    fn heading(&mut self, title: &str, lines: usize) {
        self.reserve(lines + 2);
        self.line(title);
        self.line("-".repeat(title.chars().count()));
    }

    fn finish(mut self) -> Report {
        if !self.current.is_empty() || self.pages.is_empty() {
            self.pages.push(self.current);
        }

        Report { pages: self.pages }
    }
}

/// A report laid out into pages
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pages: Vec<Vec<String>>,
}

impl Report {
    /// Lay out a report for the given data
    pub fn build(data: &ReportData) -> Self {
        let mut builder = ReportBuilder::default();
        add_title(&mut builder, data.generated_on);
        add_executive_summary(&mut builder, data.results);
        add_consumption_overview(&mut builder, data.results);
        if data.settings.simulation_enabled {
            add_simulation_results(&mut builder, data.results, data.settings);
        }
        add_priority_zones(&mut builder, data.results);
        add_recommendations(&mut builder);

        builder.finish()
    }

    /// The number of pages in the report
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let page_count = self.page_count();
        for (idx, page) in self.pages.iter().enumerate() {
            if idx > 0 {
                // Form feed between pages
                writeln!(f, "\x0c")?;
            }
            for line in page {
                writeln!(f, "{line}")?;
            }
            for _ in page.len()..LINES_PER_PAGE {
                writeln!(f)?;
            }

            let footer = format!("Page {} of {page_count}", idx + 1);
            writeln!(f, "{footer:>PAGE_WIDTH$}")?;
        }

        Ok(())
    }
}

fn add_title(builder: &mut ReportBuilder, generated_on: NaiveDate) {
    builder.line(format!(
        "{:^PAGE_WIDTH$}",
        "Sustainable Utilities Dashboard Report"
    ));
    builder.line(format!(
        "{:^PAGE_WIDTH$}",
        format!("Generated on: {}", generated_on.format("%Y-%m-%d"))
    ));
    builder.blank();
}

fn add_executive_summary(builder: &mut ReportBuilder, results: &SimulationResults) {
    let scores = &results.scores;
    builder.heading("Executive Summary", 4);
    builder.line(format!(
        "Overall Sustainability Score: {}% ({})",
        scores.overall,
        SustainabilityRating::from_score(scores.overall)
    ));
    builder.line(format!("Water Sustainability Score: {}%", scores.water));
    builder.line(format!(
        "Electricity Sustainability Score: {}%",
        scores.electricity
    ));
    builder.blank();
    builder.line(
        "This report provides a comprehensive analysis of water and electricity consumption",
    );
    builder.line("patterns across various zones, along with sustainability metrics and potential");
    builder.line("savings from conservation measures.");
    builder.blank();
}

fn add_consumption_overview(builder: &mut ReportBuilder, results: &SimulationResults) {
    builder.heading("Current Consumption Overview", 4);
    for utility in UtilityType::iter() {
        let title = utility.title();
        let summary = ConsumptionSummary::from_records(results.records(utility));
        builder.reserve(5);
        builder.line(format!("{title} Consumption"));
        builder.line(format!(
            "  Total {title} Consumption: {:.2} {}",
            summary.total_consumption.value() / DISPLAY_SCALE,
            utility.scaled_unit()
        ));
        builder.line(format!(
            "  Average Per Capita: {:.2} {}",
            summary.average_per_capita.value(),
            utility.per_capita_unit()
        ));
        builder.line(format!("  Number of Zones: {}", summary.zone_count));
        builder.blank();
    }
}

fn add_simulation_results(
    builder: &mut ReportBuilder,
    results: &SimulationResults,
    settings: &SimulationSettings,
) {
    builder.heading("Simulation Results & Potential Savings", 4);
    builder.line("Active Conservation Measures:");
    for utility in UtilityType::iter() {
        for measure in settings.active_measures(utility) {
            builder.line(format!("  • {measure}"));
        }
    }
    builder.blank();
    builder.line(format!(
        "Investment Level: {}",
        settings.investment_level.label().to_uppercase()
    ));
    builder.blank();

    builder.reserve(3);
    builder.line("Projected Annual Savings:");
    for utility in UtilityType::iter() {
        let savings = results.savings(utility);
        builder.line(format!(
            "  {} Savings: {:.2} {} ({}%)",
            utility.title(),
            savings.savings.value() / DISPLAY_SCALE,
            utility.scaled_unit(),
            savings.percent
        ));
    }
    builder.blank();
}

fn add_priority_zones(builder: &mut ReportBuilder, results: &SimulationResults) {
    builder.heading("Priority Zones for Improvement", 3);
    for utility in UtilityType::iter() {
        let zones = priority_zones(results.records(utility), PRIORITY_ZONE_COUNT);
        builder.reserve(zones.len() + 3);
        let title = match utility {
            UtilityType::Water => "Water Conservation Priority Zones:",
            UtilityType::Electricity => "Electricity Efficiency Priority Zones:",
        };
        builder.line(title);
        builder.line(format!(
            "  {:<40}{:>18}{:>20}",
            "Zone Name",
            format!("Consumption ({})", utility.scaled_unit()),
            "Sustainability Score"
        ));
        for (idx, zone) in zones.iter().enumerate() {
            builder.line(format!(
                "  {:<40}{:>18.2}{:>20}",
                format!("{}. {}", idx + 1, zone.zone),
                zone.consumption.value() / DISPLAY_SCALE,
                format!(
                    "{}% ({})",
                    zone.sustainability,
                    SustainabilityBand::from_score(zone.sustainability)
                )
            ));
        }
        builder.blank();
    }
}

fn add_recommendations(builder: &mut ReportBuilder) {
    builder.heading("Recommendations", 4);
    for line in RECOMMENDATIONS {
        builder.line(line);
    }
}

/// Lay out a report and write it to the specified path
pub fn write_report(file_path: &Path, data: &ReportData) -> Result<()> {
    let report = Report::build(data);
    fs::write(file_path, report.to_string())
        .with_context(|| format!("Failed to write report to {}", file_path.display()))?;

    Ok(())
}

/// Write a report, logging any error rather than returning it.
///
/// # Returns
///
/// Whether the report was written successfully
pub fn try_write_report(file_path: &Path, data: &ReportData) -> bool {
    match write_report(file_path, data) {
        Ok(()) => {
            info!("Report written to {}", file_path.display());
            true
        }
        Err(err) => {
            error!("Error generating report: {err:?}");
            false
        }
    }
}

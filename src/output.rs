//! The module responsible for writing output data to disk.
use crate::scenario::SimulationSettings;
use crate::simulation::{MonthPoint, SimulationResults};
use crate::utility::UtilityType;
use crate::zone::ZoneRecord;
use anyhow::{Context, Result, ensure};
use chrono::NaiveDate;
use csv::{QuoteStyle, WriterBuilder};
use std::fs;
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;

pub mod metadata;
use metadata::write_metadata;
pub mod report;

/// The root folder in which dataset-specific output folders will be created
const OUTPUT_DIRECTORY_ROOT: &str = "utilsim_results";

/// The output file name for the monthly consumption curve
const MONTHLY_SERIES_FILE_NAME: &str = "monthly_series.csv";

/// The output file name for the text report
pub const REPORT_FILE_NAME: &str = "report.txt";

/// Column headings for exported zone records
const EXPORT_HEADERS: [&str; 6] = [
    "Zone",
    "Consumption",
    "Per Capita",
    "Sustainability Score",
    "Latitude",
    "Longitude",
];

/// Get the default output directory for the dataset at the specified path
pub fn get_output_dir(dataset_dir: &Path) -> Result<PathBuf> {
    // Get the dataset name from the dir path. This ends up being convoluted because we need to
    // check for all possible errors.
    let dataset_dir = dataset_dir
        .canonicalize() // canonicalise in case the user has specified "."
        .context("Could not resolve path to dataset")?;

    let dataset_name = dataset_dir
        .file_name()
        .context("Dataset cannot be in root folder")?
        .to_str()
        .context("Invalid chars in dataset dir name")?;

    // Construct path
    Ok([OUTPUT_DIRECTORY_ROOT, dataset_name].iter().collect())
}

/// Create a new output directory.
///
/// If the directory exists and is not empty, it is only replaced when `allow_overwrite` is set.
///
/// # Returns
///
/// Whether an existing directory was overwritten
pub fn create_output_directory(output_dir: &Path, allow_overwrite: bool) -> Result<bool> {
    let overwrite = if let Ok(mut it) = fs::read_dir(output_dir) {
        if it.next().is_none() {
            // Empty folder
            return Ok(false);
        }

        ensure!(
            allow_overwrite,
            "Output folder already exists and is not empty. Please delete the folder or pass the \
            --overwrite command-line option."
        );

        fs::remove_dir_all(output_dir)?;
        true
    } else {
        false
    };

    fs::create_dir_all(output_dir)?;

    Ok(overwrite)
}

/// The file name for an export of a utility's records on the given date
pub fn export_file_name(utility: UtilityType, date: NaiveDate) -> String {
    format!("{utility}-consumption-data-{}.csv", date.format("%Y-%m-%d"))
}

/// Write zone records to a CSV file, one row per record.
///
/// Text fields are quoted; numbers are written without trailing zeros.
pub fn write_zone_records(file_path: &Path, records: &[ZoneRecord]) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::NonNumeric)
        .from_path(file_path)?;

    writer.write_record(EXPORT_HEADERS)?;
    for record in records {
        writer.write_record([
            record.zone.as_str(),
            &record.consumption.value().to_string(),
            &record.per_capita.value().to_string(),
            &record.sustainability.to_string(),
            &record.lat.to_string(),
            &record.lng.to_string(),
        ])?;
    }
    writer.flush()?;

    Ok(())
}

/// Export a utility's records to a dated CSV file in `output_dir`.
///
/// # Returns
///
/// The path of the file written
pub fn export_utility_records(
    output_dir: &Path,
    utility: UtilityType,
    records: &[ZoneRecord],
    date: NaiveDate,
) -> Result<PathBuf> {
    let file_path = output_dir.join(export_file_name(utility, date));
    write_zone_records(&file_path, records)
        .with_context(|| format!("Failed to export {utility} data"))?;

    Ok(file_path)
}

/// Write the monthly consumption curve to a CSV file
fn write_monthly_series(file_path: &Path, series: &[MonthPoint]) -> Result<()> {
    let mut writer = csv::Writer::from_path(file_path)?;
    for point in series {
        writer.serialize(point)?;
    }
    writer.flush()?;

    Ok(())
}

/// Write all CSV and metadata outputs for a scenario run.
///
/// The report is written separately, as its failure is not fatal.
///
/// # Arguments
///
/// * `output_dir` - Folder where files will be saved
/// * `dataset_dir` - Where the dataset was loaded from
/// * `settings` - The scenario which was run
/// * `results` - The scenario's results
/// * `date` - The date used in export file names
pub fn write_results(
    output_dir: &Path,
    dataset_dir: &Path,
    settings: &SimulationSettings,
    results: &SimulationResults,
    date: NaiveDate,
) -> Result<()> {
    for utility in UtilityType::iter() {
        export_utility_records(output_dir, utility, results.records(utility), date)?;
    }

    write_monthly_series(
        &output_dir.join(MONTHLY_SERIES_FILE_NAME),
        &results.monthly_series,
    )
    .context("Failed to write monthly series")?;

    write_metadata(output_dir, dataset_dir, settings).context("Failed to write metadata")?;

    Ok(())
}

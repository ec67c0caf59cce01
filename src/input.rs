//! Common routines for handling input data.
use crate::dataset::Dataset;
use crate::scenario::SimulationSettings;
use crate::utility::UtilityType;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

pub mod zone;
use zone::read_zones;

/// Read a series of type `T`s from a CSV file.
///
/// An empty file (header only) gives an empty `Vec`.
///
/// # Arguments
///
/// * `file_path` - Path to the CSV file
pub fn read_csv<T: DeserializeOwned>(file_path: &Path) -> Result<Vec<T>> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(file_path)
        .with_context(|| input_err_msg(file_path))?;

    reader
        .into_deserialize()
        .collect::<Result<Vec<T>, _>>()
        .with_context(|| input_err_msg(file_path))
}

/// Parse a TOML file at the specified path.
///
/// # Arguments
///
/// * `file_path` - Path to the TOML file
///
/// # Returns
///
/// * The deserialised TOML data or an error if the file could not be read or parsed.
pub fn read_toml<T: DeserializeOwned>(file_path: &Path) -> Result<T> {
    let toml_str = fs::read_to_string(file_path).with_context(|| input_err_msg(file_path))?;
    let toml_data = toml::from_str(&toml_str).with_context(|| input_err_msg(file_path))?;
    Ok(toml_data)
}

/// Format an error message to include the file path. To be used with `anyhow::Context`.
pub fn input_err_msg<P: AsRef<Path>>(file_path: P) -> String {
    format!("Error reading {}", file_path.as_ref().display())
}

/// Read a dataset and its scenario settings from the specified directory.
///
/// The scenario is read first, as its time period determines which zone files are loaded.
///
/// # Arguments
///
/// * `dataset_dir` - Folder containing zone CSV files and an optional `scenario.toml`
pub fn load_dataset<P: AsRef<Path>>(dataset_dir: P) -> Result<(Dataset, SimulationSettings)> {
    let dataset_dir = dataset_dir.as_ref();
    let settings = SimulationSettings::from_path(dataset_dir)?;

    let period_dir = dataset_dir.join(settings.time_period.dir_name());
    let zones_dir = if period_dir.is_dir() {
        period_dir.as_path()
    } else {
        dataset_dir
    };

    let dataset = Dataset {
        water: read_zones(zones_dir, UtilityType::Water)?,
        electricity: read_zones(zones_dir, UtilityType::Electricity)?,
    };

    Ok((dataset, settings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::assert_error;
    use serde::Deserialize;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Record {
        id: String,
        value: u32,
    }

    /// Create an example CSV file in dir_path
    fn create_csv_file(dir_path: &Path, contents: &str) -> std::path::PathBuf {
        let file_path = dir_path.join("test.csv");
        let mut file = File::create(&file_path).unwrap();
        writeln!(file, "{contents}").unwrap();
        file_path
    }

    #[test]
    fn test_read_csv() {
        let dir = tempdir().unwrap();
        let file_path = create_csv_file(dir.path(), "id,value\nhello,1\nworld, 2\n");
        let records: Vec<Record> = read_csv(&file_path).unwrap();
        assert_eq!(
            records,
            &[
                Record {
                    id: "hello".to_string(),
                    value: 1,
                },
                Record {
                    id: "world".to_string(),
                    value: 2,
                }
            ]
        );

        // Header only
        let file_path = create_csv_file(dir.path(), "id,value");
        let records: Vec<Record> = read_csv(&file_path).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_read_csv_bad_value() {
        let dir = tempdir().unwrap();
        let file_path = create_csv_file(dir.path(), "id,value\nhello,-1\n");
        assert_error!(read_csv::<Record>(&file_path), input_err_msg(&file_path));
    }

    #[test]
    fn test_read_toml() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct Value {
            value: u32,
        }

        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test.toml");
        {
            let mut file = File::create(&file_path).unwrap();
            writeln!(file, "value = 42").unwrap();
        }

        let value: Value = read_toml(&file_path).unwrap();
        assert_eq!(value, Value { value: 42 });

        // Missing file
        let missing = dir.path().join("missing.toml");
        assert!(read_toml::<Value>(&missing).is_err());
    }

    fn write_zones(dir_path: &Path, utility: UtilityType, rows: &str) {
        let mut file = File::create(dir_path.join(utility.zones_file_name())).unwrap();
        writeln!(
            file,
            "id,zone,lat,lng,consumption,per_capita,sustainability\n{rows}"
        )
        .unwrap();
    }

    #[test]
    fn test_load_dataset() {
        let dir = tempdir().unwrap();
        write_zones(
            dir.path(),
            UtilityType::Water,
            "1,Gandhinagar,12.978,77.572,3900000,110,72",
        );
        write_zones(
            dir.path(),
            UtilityType::Electricity,
            "1,KOLAR,13.138,78.133,10500000,290,52\n2,KOLAR,13.127,78.158,10000000,280,58",
        );

        let (dataset, settings) = load_dataset(dir.path()).unwrap();
        assert_eq!(settings, SimulationSettings::default());
        assert_eq!(dataset.water.len(), 1);
        assert_eq!(dataset.electricity.len(), 2);
    }

    #[test]
    fn test_load_dataset_time_period_dir() {
        let dir = tempdir().unwrap();
        {
            let mut file = File::create(dir.path().join("scenario.toml")).unwrap();
            writeln!(file, "time_period = \"year\"").unwrap();
        }
        let year_dir = dir.path().join("year");
        std::fs::create_dir(&year_dir).unwrap();
        write_zones(&year_dir, UtilityType::Water, "");
        write_zones(
            &year_dir,
            UtilityType::Electricity,
            "5,TIPTUR,13.252,76.493,74400000,2460,76",
        );

        let (dataset, _) = load_dataset(dir.path()).unwrap();
        assert!(dataset.water.is_empty());
        assert_eq!(dataset.electricity[0].zone, "TIPTUR");
    }
}

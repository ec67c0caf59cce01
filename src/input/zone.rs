//! Code for reading zone records from CSV files.
use super::*;
use crate::utility::UtilityType;
use crate::zone::{ZoneRecord, validate_zones};

/// Read the zone records for one utility.
///
/// # Arguments
///
/// * `dir` - Folder containing the zone CSV files
/// * `utility` - Which utility's records to read
///
/// # Returns
///
/// The records in file order, or an error if the file is missing or a record is invalid.
pub fn read_zones(dir: &Path, utility: UtilityType) -> Result<Vec<ZoneRecord>> {
    let file_path = dir.join(utility.zones_file_name());
    let records: Vec<ZoneRecord> = read_csv(&file_path)?;
    validate_zones(&records).with_context(|| input_err_msg(&file_path))?;

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::assert_error;
    use crate::id::ZoneID;
    use crate::units::{Consumption, PerCapita};
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    /// Create an example water zones file in dir_path
    fn create_zones_file(dir_path: &Path, rows: &str) {
        let file_path = dir_path.join(UtilityType::Water.zones_file_name());
        let mut file = File::create(file_path).unwrap();
        writeln!(
            file,
            "id,zone,lat,lng,consumption,per_capita,sustainability\n{rows}"
        )
        .unwrap();
    }

    #[test]
    fn test_read_zones() {
        let dir = tempdir().unwrap();
        create_zones_file(
            dir.path(),
            "1,Cauvery Stage 1,12.9716,77.5946,4500000,125,65
2,\"Jaimaruthi Nagar & Badavane\",12.98,77.55,4200000,120,68",
        );

        let zones = read_zones(dir.path(), UtilityType::Water).unwrap();
        assert_eq!(
            zones,
            [
                ZoneRecord {
                    id: ZoneID(1),
                    zone: "Cauvery Stage 1".into(),
                    lat: 12.9716,
                    lng: 77.5946,
                    consumption: Consumption(4_500_000.0),
                    per_capita: PerCapita(125.0),
                    sustainability: 65,
                    is_simulated: false,
                },
                ZoneRecord {
                    id: ZoneID(2),
                    zone: "Jaimaruthi Nagar & Badavane".into(),
                    lat: 12.98,
                    lng: 77.55,
                    consumption: Consumption(4_200_000.0),
                    per_capita: PerCapita(120.0),
                    sustainability: 68,
                    is_simulated: false,
                }
            ]
        );
    }

    #[test]
    fn test_read_zones_duplicate_id() {
        let dir = tempdir().unwrap();
        create_zones_file(
            dir.path(),
            "3,Nethajinagar,12.9825,77.548,4000000,120,70
3,NTY Layout,12.982,77.547,4200000,125,68",
        );

        let file_path = dir.path().join(UtilityType::Water.zones_file_name());
        assert_error!(
            read_zones(dir.path(), UtilityType::Water),
            input_err_msg(&file_path)
        );
    }

    #[test]
    fn test_read_zones_missing_file() {
        let dir = tempdir().unwrap();
        assert!(read_zones(dir.path(), UtilityType::Electricity).is_err());
    }
}

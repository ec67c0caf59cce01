//! Fixtures for tests
use crate::id::ZoneID;
use crate::units::{Consumption, PerCapita};
use crate::zone::ZoneRecord;
use rstest::fixture;

/// Assert that an error with the given message occurs
macro_rules! assert_error {
    ($result:expr, $msg:expr) => {
        assert_eq!(
            $result.unwrap_err().chain().next().unwrap().to_string(),
            $msg
        );
    };
}
pub(crate) use assert_error;

/// Create a base record
fn zone(
    id: u32,
    name: &str,
    (lat, lng): (f64, f64),
    consumption: f64,
    per_capita: f64,
    sustainability: u32,
) -> ZoneRecord {
    ZoneRecord {
        id: ZoneID(id),
        zone: name.into(),
        lat,
        lng,
        consumption: Consumption(consumption),
        per_capita: PerCapita(per_capita),
        sustainability,
        is_simulated: false,
    }
}

/// A base record with the given sustainability score and otherwise arbitrary values
pub fn zone_with_score(sustainability: u32) -> ZoneRecord {
    zone(
        1,
        "Central",
        (12.9716, 77.5946),
        2_900_000.0,
        95.0,
        sustainability,
    )
}

/// A base record with the given consumption and otherwise arbitrary values
pub fn zone_with_consumption(consumption: f64) -> ZoneRecord {
    zone(2, "Tank Bund", (12.97, 77.57), consumption, 100.0, 50)
}

#[fixture]
pub fn water_record() -> ZoneRecord {
    zone(
        1,
        "Cauvery Stage 1",
        (12.9716, 77.5946),
        4_500_000.0,
        125.0,
        65,
    )
}

#[fixture]
pub fn water_records(water_record: ZoneRecord) -> Vec<ZoneRecord> {
    vec![
        water_record,
        zone(
            2,
            "Cauvery Stage 2",
            (12.9716, 77.5946),
            5_200_000.0,
            145.0,
            52,
        ),
        zone(
            3,
            "Cauvery Stage 3",
            (12.9716, 77.5946),
            3_800_000.0,
            115.0,
            78,
        ),
        zone(4, "Nagamma Nagar", (12.961, 77.55), 3_700_000.0, 105.0, 70),
        // Same name as the previous zone
        zone(5, "Nagamma Nagar", (12.961, 77.55), 3_700_000.0, 105.0, 70),
    ]
}

#[fixture]
pub fn electricity_records() -> Vec<ZoneRecord> {
    vec![
        zone(
            1,
            "WHITEFIELD",
            (12.96672724, 77.74846312),
            8_500_000.0,
            235.0,
            58,
        ),
        zone(
            2,
            "VIDHANA SOUDHA",
            (12.97545574, 77.57542405),
            9_200_000.0,
            255.0,
            49,
        ),
        zone(3, "KGF", (13.0437091, 78.28602525), 10_000_000.0, 280.0, 53),
        zone(
            4,
            "KOLAR",
            (13.13819204, 78.13377304),
            10_500_000.0,
            290.0,
            52,
        ),
    ]
}

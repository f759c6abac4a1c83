//! The fixed expected schema for the trip dataset.
//!
//! The quality gate validates exactly one dataset shape: the bike-trip
//! export published by the Seattle Open Data Portal. Only set equality of
//! column names is checked; column order does not matter.

/// The 12 column names a trip dataset must carry, no more and no fewer.
pub const EXPECTED_COLUMNS: [&str; 12] = [
    "trip_id",
    "starttime",
    "stoptime",
    "bikeid",
    "tripduration",
    "from_station_name",
    "to_station_name",
    "from_station_id",
    "to_station_id",
    "usertype",
    "gender",
    "birthyear",
];

/// Returns the expected column names sorted, for set-equality comparison.
pub fn sorted_expected_columns() -> Vec<&'static str> {
    let mut names = EXPECTED_COLUMNS.to_vec();
    names.sort_unstable();
    names
}

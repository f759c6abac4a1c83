//! End-to-end gate behavior over literal trip datasets.

use pretty_assertions::assert_eq;
use std::collections::HashMap;
use tripcheck_core::{CheckKind, DataRow, DataSet, DataValue, EXPECTED_COLUMNS};
use tripcheck_validator::{TripValidator, column_set_matches};

/// Builds one realistic trip row with homogeneous per-column types.
fn trip_row(i: i64) -> DataRow {
    let mut row = HashMap::new();
    row.insert("trip_id".to_string(), DataValue::Int(431 + i));
    row.insert(
        "starttime".to_string(),
        DataValue::from("10/13/2014 10:31"),
    );
    row.insert("stoptime".to_string(), DataValue::from("10/13/2014 10:48"));
    row.insert("bikeid".to_string(), DataValue::from("SEA00298"));
    row.insert("tripduration".to_string(), DataValue::Float(985.935));
    row.insert(
        "from_station_name".to_string(),
        DataValue::from("2nd Ave & Spring St"),
    );
    row.insert(
        "to_station_name".to_string(),
        DataValue::from("Occidental Park / Occidental Ave S & S Washington St"),
    );
    row.insert("from_station_id".to_string(), DataValue::from("CBD-06"));
    row.insert("to_station_id".to_string(), DataValue::from("PS-04"));
    row.insert("usertype".to_string(), DataValue::from("Member"));
    row.insert("gender".to_string(), DataValue::from("Male"));
    row.insert("birthyear".to_string(), DataValue::Int(1960 + i));
    row
}

fn trip_dataset() -> DataSet {
    let columns = EXPECTED_COLUMNS.iter().map(|c| c.to_string()).collect();
    DataSet::from_rows(columns, (0..3).map(trip_row).collect())
}

#[test]
fn clean_three_row_dataset_passes_the_gate() {
    let report = TripValidator::new().validate(&trip_dataset()).unwrap();

    assert!(report.passed, "expected pass, got: {:?}", report.errors);
    assert_eq!(report.stats.rows_validated, 3);
    assert!(report.checks.iter().all(|(_, passed)| *passed));
}

#[test]
fn clean_three_row_dataset_passes_the_strict_gate() {
    let report = TripValidator::new().validate_strict(&trip_dataset());

    assert!(report.passed, "expected pass, got: {:?}", report.errors);
}

#[test]
fn renamed_birthyear_fails_only_the_column_set_check() {
    let columns: Vec<String> = EXPECTED_COLUMNS
        .iter()
        .map(|c| {
            if *c == "birthyear" {
                "birth_year".to_string()
            } else {
                c.to_string()
            }
        })
        .collect();
    let rows: Vec<DataRow> = (0..3)
        .map(|i| {
            let mut row = trip_row(i);
            let value = row.remove("birthyear").unwrap();
            row.insert("birth_year".to_string(), value);
            row
        })
        .collect();
    let dataset = DataSet::from_rows(columns, rows);

    let report = TripValidator::new().validate(&dataset).unwrap();
    assert!(!report.passed);

    let failed: Vec<CheckKind> = report
        .checks
        .iter()
        .filter(|(_, passed)| !*passed)
        .map(|(kind, _)| *kind)
        .collect();
    assert_eq!(failed, vec![CheckKind::ColumnSet]);

    // The column-set check alone identifies the mismatch.
    let outcome = column_set_matches(&dataset);
    assert!(!outcome.passed);
    let columns_named: Vec<&str> = outcome
        .failures
        .iter()
        .filter_map(|f| f.column.as_deref())
        .collect();
    assert!(columns_named.contains(&"birthyear"));
    assert!(columns_named.contains(&"birth_year"));
}

#[test]
fn legacy_and_strict_gates_disagree_on_a_null_cell() {
    let mut rows: Vec<DataRow> = (0..3).map(trip_row).collect();
    rows[1].insert("gender".to_string(), DataValue::Null);
    let columns = EXPECTED_COLUMNS.iter().map(|c| c.to_string()).collect();
    let dataset = DataSet::from_rows(columns, rows);

    let validator = TripValidator::new();
    assert!(validator.validate(&dataset).unwrap().passed);

    let strict = validator.validate_strict(&dataset);
    assert!(!strict.passed);
    assert_eq!(strict.errors.len(), 1);
    assert!(strict.errors[0].contains("gender"));
}

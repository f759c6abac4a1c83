//! The four quality checks, in legacy and strict flavors.
//!
//! All checks are pure functions over a borrowed [`DataSet`]; they share no
//! state and can run in any order. A row missing a column key is treated as
//! holding a null in that column.

use tripcheck_core::{
    CheckError, CheckFailure, CheckKind, CheckOutcome, DataSet, DataValue, sorted_expected_columns,
};

static NULL: DataValue = DataValue::Null;

/// Checks that the dataset carries exactly the expected 12 columns.
///
/// The sorted actual column names are compared for exact equality against
/// the sorted expected names: same names, same count, no subset or superset
/// tolerance. Order is irrelevant. A mismatch yields an explicit failing
/// outcome naming the missing and unexpected columns.
pub fn column_set_matches(dataset: &DataSet) -> CheckOutcome {
    let mut actual: Vec<&str> = dataset.columns().iter().map(String::as_str).collect();
    actual.sort_unstable();
    let expected = sorted_expected_columns();

    if actual == expected {
        return CheckOutcome::pass(CheckKind::ColumnSet);
    }

    let mut failures = Vec::new();
    for name in &expected {
        if !actual.contains(name) {
            failures.push(CheckFailure::column(
                CheckKind::ColumnSet,
                *name,
                "missing expected column",
            ));
        }
    }
    for name in &actual {
        if !expected.contains(name) {
            failures.push(CheckFailure::column(
                CheckKind::ColumnSet,
                *name,
                "unexpected column",
            ));
        }
    }
    // Same name set but different multiplicity (duplicate headers)
    if failures.is_empty() {
        failures.push(CheckFailure::dataset(
            CheckKind::ColumnSet,
            format!(
                "expected {} columns, found {}",
                expected.len(),
                actual.len()
            ),
        ));
    }

    CheckOutcome::fail(CheckKind::ColumnSet, failures)
}

/// Checks per-column type homogeneity, legacy semantics.
///
/// For each column the representative type is taken from the value at row
/// index 1; the column's verdict is whether *any* present value in the
/// column shares that type. Only the verdict of the last column iterated is
/// returned; earlier columns are evaluated but their verdicts discarded.
/// This is the legacy behavior, kept for compatibility — see
/// [`column_types_homogeneous_strict`] for the per-column version.
///
/// # Errors
///
/// Returns [`CheckError::InsufficientData`] when the dataset has fewer than
/// 2 rows, since the representative value is read from row index 1.
pub fn column_types_homogeneous(dataset: &DataSet) -> Result<CheckOutcome, CheckError> {
    if dataset.len() < 2 {
        return Err(CheckError::insufficient_data(2, dataset.len()));
    }

    let mut verdict = true;
    let mut last_failure: Option<CheckFailure> = None;

    for name in dataset.columns() {
        let representative = dataset.get_value(1, name).unwrap_or(&NULL);
        let rep_type = representative.type_name();

        let any_match = dataset
            .rows()
            .any(|row| row.get(name).is_some_and(|v| v.type_name() == rep_type));

        verdict = any_match;
        last_failure = if any_match {
            None
        } else {
            Some(CheckFailure::column(
                CheckKind::TypeHomogeneity,
                name.clone(),
                format!("no value shares the representative type '{}'", rep_type),
            ))
        };
    }

    if verdict {
        Ok(CheckOutcome::pass(CheckKind::TypeHomogeneity))
    } else {
        Ok(CheckOutcome::fail(
            CheckKind::TypeHomogeneity,
            last_failure.into_iter().collect(),
        ))
    }
}

/// Checks per-column type homogeneity, strict semantics.
///
/// Every column is checked and every verdict counts: a column passes only
/// when all of its non-null values share the type of its first non-null
/// value. Nulls carry no type information and are ignored. No minimum row
/// count is required; an empty dataset passes vacuously.
pub fn column_types_homogeneous_strict(dataset: &DataSet) -> CheckOutcome {
    let mut failures = Vec::new();

    for name in dataset.columns() {
        let mut column_type: Option<&'static str> = None;

        for (idx, row) in dataset.rows().enumerate() {
            let value = row.get(name).unwrap_or(&NULL);
            if value.is_null() {
                continue;
            }
            match column_type {
                None => column_type = Some(value.type_name()),
                Some(expected) if value.type_name() != expected => {
                    failures.push(CheckFailure::cell(
                        CheckKind::TypeHomogeneity,
                        name.clone(),
                        idx,
                        format!(
                            "value of type '{}' does not match column type '{}'",
                            value.type_name(),
                            expected
                        ),
                    ));
                }
                Some(_) => {}
            }
        }
    }

    if failures.is_empty() {
        CheckOutcome::pass(CheckKind::TypeHomogeneity)
    } else {
        CheckOutcome::fail(CheckKind::TypeHomogeneity, failures)
    }
}

/// Null-value check, legacy semantics.
///
/// Despite the name, this passes when *any* cell in the dataset is
/// non-null, not when zero nulls exist — a legacy name-vs-behavior
/// mismatch, kept for compatibility. See [`has_no_nulls_strict`] for the
/// "zero nulls" interpretation.
pub fn has_no_null_values(dataset: &DataSet) -> CheckOutcome {
    let any_non_null = dataset
        .rows()
        .any(|row| row.values().any(|v| !v.is_null()));

    if any_non_null {
        CheckOutcome::pass(CheckKind::NullValues)
    } else {
        CheckOutcome::fail(
            CheckKind::NullValues,
            vec![CheckFailure::dataset(
                CheckKind::NullValues,
                "dataset contains no non-null values",
            )],
        )
    }
}

/// Null-value check, strict semantics: passes only when no cell is null.
///
/// A row missing one of the dataset's columns counts as a null in that
/// column. Every null cell is reported.
pub fn has_no_nulls_strict(dataset: &DataSet) -> CheckOutcome {
    let mut failures = Vec::new();

    for (idx, row) in dataset.rows().enumerate() {
        for name in dataset.columns() {
            if row.get(name).unwrap_or(&NULL).is_null() {
                failures.push(CheckFailure::cell(
                    CheckKind::NullValues,
                    name.clone(),
                    idx,
                    "null value",
                ));
            }
        }
    }

    if failures.is_empty() {
        CheckOutcome::pass(CheckKind::NullValues)
    } else {
        CheckOutcome::fail(CheckKind::NullValues, failures)
    }
}

/// Checks that the dataset has at least `min` rows.
///
/// The gate's enforced threshold is 1, even though earlier documentation
/// claimed 10; the enforced behavior wins here and the default lives in
/// [`TripValidator`](crate::TripValidator).
pub fn has_minimum_rows(dataset: &DataSet, min: usize) -> CheckOutcome {
    if dataset.len() >= min {
        CheckOutcome::pass(CheckKind::RowCount)
    } else {
        CheckOutcome::fail(
            CheckKind::RowCount,
            vec![CheckFailure::dataset(
                CheckKind::RowCount,
                format!("dataset has {} row(s), minimum is {}", dataset.len(), min),
            )],
        )
    }
}

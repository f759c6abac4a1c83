//! Validation engine.
//!
//! [`TripValidator`] orchestrates the four quality checks over a dataset and
//! folds their verdicts into a [`ValidationReport`]. Every check is
//! evaluated before the verdicts are combined; the aggregate is the logical
//! AND of all verdicts with no short-circuiting.

use std::time::Instant;
use tracing::debug;
use tripcheck_core::{CheckError, CheckOutcome, DataSet, ValidationReport, ValidationStats};

use crate::checks;

/// Runs the full set of quality checks against a trip dataset.
///
/// Stateless apart from configuration: the dataset is passed in explicitly
/// on every call.
///
/// # Example
///
/// ```rust
/// use tripcheck_validator::TripValidator;
/// use tripcheck_core::DataSet;
///
/// let validator = TripValidator::new();
/// let report = validator.validate_strict(&DataSet::empty());
/// assert!(!report.passed); // empty dataset fails the row-count check
/// ```
pub struct TripValidator {
    min_rows: usize,
}

impl TripValidator {
    /// Creates a validator with the gate's enforced minimum of 1 row.
    pub fn new() -> Self {
        Self { min_rows: 1 }
    }

    /// Overrides the minimum row count.
    pub fn with_min_rows(mut self, min_rows: usize) -> Self {
        self.min_rows = min_rows;
        self
    }

    /// Runs the four legacy checks and ANDs their verdicts.
    ///
    /// All checks are evaluated eagerly; a failing check does not stop the
    /// remaining ones from running.
    ///
    /// # Errors
    ///
    /// Propagates [`CheckError::InsufficientData`] from the type check when
    /// the dataset has fewer than 2 rows, aborting the aggregate.
    pub fn validate(&self, dataset: &DataSet) -> Result<ValidationReport, CheckError> {
        let start = Instant::now();

        let columns = checks::column_set_matches(dataset);
        let types = checks::column_types_homogeneous(dataset)?;
        let nulls = checks::has_no_null_values(dataset);
        let rows = checks::has_minimum_rows(dataset, self.min_rows);

        Ok(self.build_report(vec![columns, types, nulls, rows], dataset, start))
    }

    /// Runs the strict variants of the checks and ANDs their verdicts.
    ///
    /// The strict type check has no minimum-row precondition, so this never
    /// errors: small datasets fail the row-count check instead of aborting.
    pub fn validate_strict(&self, dataset: &DataSet) -> ValidationReport {
        let start = Instant::now();

        let columns = checks::column_set_matches(dataset);
        let types = checks::column_types_homogeneous_strict(dataset);
        let nulls = checks::has_no_nulls_strict(dataset);
        let rows = checks::has_minimum_rows(dataset, self.min_rows);

        self.build_report(vec![columns, types, nulls, rows], dataset, start)
    }

    fn build_report(
        &self,
        outcomes: Vec<CheckOutcome>,
        dataset: &DataSet,
        start: Instant,
    ) -> ValidationReport {
        let mut checks = Vec::with_capacity(outcomes.len());
        let mut errors = Vec::new();

        for outcome in &outcomes {
            debug!(check = outcome.kind.name(), passed = outcome.passed);
            checks.push((outcome.kind, outcome.passed));
            errors.extend(outcome.failures.iter().map(|f| f.to_string()));
        }

        ValidationReport {
            passed: outcomes.iter().all(|o| o.passed),
            checks,
            errors,
            stats: ValidationStats {
                rows_validated: dataset.len(),
                checks_run: outcomes.len(),
                duration_ms: start.elapsed().as_millis() as u64,
            },
        }
    }
}

impl Default for TripValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tripcheck_core::{CheckKind, DataRow, DataValue, EXPECTED_COLUMNS};

    fn trip_dataset(rows: usize) -> DataSet {
        let columns: Vec<String> = EXPECTED_COLUMNS.iter().map(|c| c.to_string()).collect();
        let rows = (0..rows as i64)
            .map(|i| {
                let mut row: DataRow = HashMap::new();
                for name in EXPECTED_COLUMNS {
                    row.insert(name.to_string(), DataValue::Int(i));
                }
                row
            })
            .collect();
        DataSet::from_rows(columns, rows)
    }

    #[test]
    fn test_validate_passes_on_clean_dataset() {
        let validator = TripValidator::new();
        let report = validator.validate(&trip_dataset(3)).unwrap();

        assert!(report.passed, "expected pass, got: {:?}", report.errors);
        assert_eq!(report.stats.rows_validated, 3);
        assert_eq!(report.stats.checks_run, 4);
    }

    #[test]
    fn test_validate_propagates_insufficient_data() {
        let validator = TripValidator::new();
        for rows in [0, 1] {
            let err = validator.validate(&trip_dataset(rows)).unwrap_err();
            assert!(matches!(err, CheckError::InsufficientData { .. }));
        }
    }

    #[test]
    fn test_validate_collects_all_failures() {
        // Two rows so the type check can run; columns renamed so the column
        // set fails while the other checks still execute and pass.
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
        let rows = (0..2)
            .map(|i| {
                let mut row: DataRow = HashMap::new();
                for name in &columns {
                    row.insert(name.clone(), DataValue::Int(i));
                }
                row
            })
            .collect();
        let dataset = DataSet::from_rows(columns, rows);

        let validator = TripValidator::new();
        let report = validator.validate(&dataset).unwrap();

        assert!(!report.passed);
        assert_eq!(report.checks.len(), 4);
        let failed: Vec<CheckKind> = report
            .checks
            .iter()
            .filter(|(_, passed)| !passed)
            .map(|(kind, _)| *kind)
            .collect();
        assert_eq!(failed, vec![CheckKind::ColumnSet]);
        assert!(!report.errors.is_empty());
    }

    #[test]
    fn test_validate_strict_flags_nulls() {
        let mut dataset = trip_dataset(3);
        let mut row: DataRow = HashMap::new();
        for name in EXPECTED_COLUMNS {
            row.insert(name.to_string(), DataValue::Null);
        }
        dataset.add_row(row);

        let validator = TripValidator::new();
        let legacy = validator.validate(&dataset).unwrap();
        let strict = validator.validate_strict(&dataset);

        assert!(legacy.passed);
        assert!(!strict.passed);
        assert_eq!(strict.errors.len(), EXPECTED_COLUMNS.len());
    }

    #[test]
    fn test_min_rows_override() {
        let validator = TripValidator::new().with_min_rows(10);
        let report = validator.validate(&trip_dataset(3)).unwrap();
        assert!(!report.passed);
    }
}

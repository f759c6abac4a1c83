//! Check outcomes and the aggregate validation report.
//!
//! Each check produces a [`CheckOutcome`]: the boolean verdict the gate is
//! built on, plus structured [`CheckFailure`] diagnostics naming the
//! offending column or row. Diagnostics are additive only; the pass/fail
//! semantics are carried entirely by the boolean.

use std::fmt;

/// The quality checks the gate runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckKind {
    /// Exact expected column-name set
    ColumnSet,
    /// Per-column value type homogeneity
    TypeHomogeneity,
    /// Null-value check
    NullValues,
    /// Minimum row count
    RowCount,
}

impl CheckKind {
    /// Returns a short human-readable name for this check.
    pub fn name(&self) -> &'static str {
        match self {
            CheckKind::ColumnSet => "column_set",
            CheckKind::TypeHomogeneity => "type_homogeneity",
            CheckKind::NullValues => "null_values",
            CheckKind::RowCount => "row_count",
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single diagnostic attached to a failed check.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckFailure {
    /// Which check produced this failure
    pub kind: CheckKind,
    /// Offending column, when the failure is column-scoped
    pub column: Option<String>,
    /// Offending row index, when the failure is row-scoped
    pub row: Option<usize>,
    /// Human-readable description of the violation
    pub message: String,
}

impl CheckFailure {
    /// Creates a failure scoped to the whole dataset.
    pub fn dataset(kind: CheckKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            column: None,
            row: None,
            message: message.into(),
        }
    }

    /// Creates a failure scoped to a column.
    pub fn column(kind: CheckKind, column: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            column: Some(column.into()),
            row: None,
            message: message.into(),
        }
    }

    /// Creates a failure scoped to a cell.
    pub fn cell(
        kind: CheckKind,
        column: impl Into<String>,
        row: usize,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            column: Some(column.into()),
            row: Some(row),
            message: message.into(),
        }
    }
}

impl fmt::Display for CheckFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.kind)?;
        if let Some(column) = &self.column {
            write!(f, "column '{}'", column)?;
            if let Some(row) = self.row {
                write!(f, " (row {})", row)?;
            }
            write!(f, ": ")?;
        } else if let Some(row) = self.row {
            write!(f, "row {}: ", row)?;
        }
        f.write_str(&self.message)
    }
}

/// The result of a single check.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    /// Which check this outcome belongs to
    pub kind: CheckKind,
    /// Whether the check passed
    pub passed: bool,
    /// Diagnostics explaining the failure; empty when `passed` is true
    pub failures: Vec<CheckFailure>,
}

impl CheckOutcome {
    /// Creates a passing outcome.
    pub fn pass(kind: CheckKind) -> Self {
        Self {
            kind,
            passed: true,
            failures: Vec::new(),
        }
    }

    /// Creates a failing outcome with diagnostics.
    pub fn fail(kind: CheckKind, failures: Vec<CheckFailure>) -> Self {
        Self {
            kind,
            passed: false,
            failures,
        }
    }
}

/// Report of an aggregate validation run.
///
/// `passed` is the logical AND of every check verdict; failure diagnostics
/// are flattened to strings for display.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    /// Whether validation passed overall
    pub passed: bool,
    /// Per-check verdicts in the order the checks ran
    pub checks: Vec<(CheckKind, bool)>,
    /// Rendered failure diagnostics
    pub errors: Vec<String>,
    /// Validation statistics
    pub stats: ValidationStats,
}

/// Statistics about validation execution.
#[derive(Debug, Clone, Default)]
pub struct ValidationStats {
    /// Number of rows validated
    pub rows_validated: usize,
    /// Number of checks evaluated
    pub checks_run: usize,
    /// Validation duration in milliseconds
    pub duration_ms: u64,
}

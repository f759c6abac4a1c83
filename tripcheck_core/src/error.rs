//! Error types for the quality checks.

use thiserror::Error;

/// Errors a check can raise before producing a pass/fail outcome.
///
/// A failing check is not an error: failures are reported through
/// [`CheckOutcome`](crate::CheckOutcome). `CheckError` covers the cases
/// where a check cannot be evaluated at all.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The dataset has too few rows for the check to be evaluated.
    ///
    /// The type-homogeneity check reads its representative value from row
    /// index 1, so it needs at least 2 rows.
    #[error("insufficient data: check needs at least {needed} row(s), dataset has {actual}")]
    InsufficientData { needed: usize, actual: usize },

    /// Generic check error
    #[error("check error: {0}")]
    General(String),
}

impl CheckError {
    /// Creates a new insufficient-data error.
    pub fn insufficient_data(needed: usize, actual: usize) -> Self {
        Self::InsufficientData { needed, actual }
    }
}

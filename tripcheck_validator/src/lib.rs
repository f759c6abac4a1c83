//! # Tripcheck Validator
//!
//! Quality checks for the trip dataset gate. This crate provides the four
//! independent checks the gate is built from, plus the orchestrating
//! [`TripValidator`] engine:
//!
//! - Column-set conformance (exact expected 12-column set)
//! - Per-column type homogeneity
//! - Null-value check
//! - Minimum row count
//!
//! The checks come in two flavors. The plain functions keep the legacy gate
//! semantics exactly, including their known quirks (the type check reports
//! only the last column's verdict; the null check is satisfied by a single
//! non-null cell). The `*_strict` variants implement the likely intended
//! semantics. Both are exposed so the discrepancy stays visible to callers
//! instead of being silently baked in.
//!
//! ## Example
//!
//! ```rust
//! use tripcheck_validator::TripValidator;
//! use tripcheck_core::{DataSet, DataValue, EXPECTED_COLUMNS};
//! use std::collections::HashMap;
//!
//! let columns: Vec<String> = EXPECTED_COLUMNS.iter().map(|c| c.to_string()).collect();
//! let mut rows = Vec::new();
//! for i in 0..3 {
//!     let mut row: HashMap<String, DataValue> = HashMap::new();
//!     for name in &columns {
//!         row.insert(name.clone(), DataValue::Int(i));
//!     }
//!     rows.push(row);
//! }
//! let dataset = DataSet::from_rows(columns, rows);
//!
//! let validator = TripValidator::new();
//! let report = validator.validate(&dataset).unwrap();
//! assert!(report.passed);
//! ```

pub mod checks;
pub mod engine;

pub use checks::*;
pub use engine::*;

//! # Tripcheck Core
//!
//! Core types for the trip dataset quality gate.
//!
//! This crate provides the building blocks shared by the validator and the
//! CLI:
//!
//! - **Dataset**: an in-memory tabular dataset (`DataSet`, `DataRow`,
//!   `DataValue`)
//! - **Schema**: the fixed set of column names a trip dataset must carry
//! - **Reports**: per-check outcomes with structured failure diagnostics,
//!   and the aggregate validation report
//!
//! ## Example
//!
//! ```rust
//! use tripcheck_core::{DataSet, DataValue, EXPECTED_COLUMNS};
//! use std::collections::HashMap;
//!
//! let mut row = HashMap::new();
//! row.insert("trip_id".to_string(), DataValue::Int(1));
//! let dataset = DataSet::from_rows(vec!["trip_id".to_string()], vec![row]);
//!
//! assert_eq!(dataset.len(), 1);
//! assert_eq!(EXPECTED_COLUMNS.len(), 12);
//! ```

pub mod dataset;
pub mod error;
pub mod report;
pub mod schema;

pub use dataset::*;
pub use error::*;
pub use report::*;
pub use schema::*;

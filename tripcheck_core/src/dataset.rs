//! Dataset representation for validation.
//!
//! This module provides types for representing the tabular trip data the
//! quality checks run against.

use std::collections::HashMap;

/// A value in a dataset.
///
/// Represents the scalar types a cell of a flat CSV document can carry.
#[derive(Debug, Clone, PartialEq)]
pub enum DataValue {
    /// Null/missing value (an empty CSV cell)
    Null,
    /// String value
    String(String),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Boolean value
    Bool(bool),
}

impl DataValue {
    /// Returns true if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, DataValue::Null)
    }

    /// Returns the type name of this value.
    ///
    /// Used by the type-homogeneity checks to compare cell types.
    pub fn type_name(&self) -> &'static str {
        match self {
            DataValue::Null => "null",
            DataValue::String(_) => "string",
            DataValue::Int(_) => "int64",
            DataValue::Float(_) => "float64",
            DataValue::Bool(_) => "boolean",
        }
    }

    /// Attempts to get this value as a string.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            DataValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to get this value as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            DataValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Attempts to get this value as a float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            DataValue::Float(f) => Some(*f),
            DataValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Attempts to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            DataValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<String> for DataValue {
    fn from(s: String) -> Self {
        DataValue::String(s)
    }
}

impl From<&str> for DataValue {
    fn from(s: &str) -> Self {
        DataValue::String(s.to_string())
    }
}

impl From<i64> for DataValue {
    fn from(i: i64) -> Self {
        DataValue::Int(i)
    }
}

impl From<f64> for DataValue {
    fn from(f: f64) -> Self {
        DataValue::Float(f)
    }
}

impl From<bool> for DataValue {
    fn from(b: bool) -> Self {
        DataValue::Bool(b)
    }
}

/// A single row of data, keyed by column name.
pub type DataRow = HashMap<String, DataValue>;

/// A dataset containing named columns and multiple rows.
///
/// The column list preserves source order and is shared by all rows; a row
/// missing a column key is treated as holding a null in that column.
#[derive(Debug, Clone)]
pub struct DataSet {
    /// Column names in source order
    columns: Vec<String>,
    /// The data rows
    rows: Vec<DataRow>,
}

impl DataSet {
    /// Creates a new empty dataset with no columns.
    pub fn empty() -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Creates a new dataset from a column list and rows.
    pub fn from_rows(columns: Vec<String>, rows: Vec<DataRow>) -> Self {
        Self { columns, rows }
    }

    /// Returns the number of rows in the dataset.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the column names in source order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns an iterator over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &DataRow> {
        self.rows.iter()
    }

    /// Gets a specific row by index.
    pub fn get_row(&self, index: usize) -> Option<&DataRow> {
        self.rows.get(index)
    }

    /// Gets the value at a given row and column.
    ///
    /// Returns `None` when the row does not exist or the row lacks the
    /// column key; callers treat an absent key as a null cell.
    pub fn get_value(&self, row: usize, column: &str) -> Option<&DataValue> {
        self.rows.get(row).and_then(|r| r.get(column))
    }

    /// Adds a row to the dataset.
    pub fn add_row(&mut self, row: DataRow) {
        self.rows.push(row);
    }

    /// Takes a prefix sample of rows from the dataset.
    ///
    /// Keeps the first `size` rows; if `size` is greater than the number of
    /// rows, returns all rows. Column list is carried over unchanged.
    pub fn sample(&self, size: usize) -> DataSet {
        let sample_size = size.min(self.rows.len());
        DataSet {
            columns: self.columns.clone(),
            rows: self.rows.iter().take(sample_size).cloned().collect(),
        }
    }
}

impl Default for DataSet {
    fn default() -> Self {
        Self::empty()
    }
}

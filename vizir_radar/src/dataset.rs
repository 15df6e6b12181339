// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tabular query results as consumed by the radar builder.
//!
//! A [`ResultSet`] is row-oriented and positionally aligned with its columns. Columns carry the
//! declared base type of the query engine (`type/Integer`, `type/Text`, ...), which is classified
//! once into a closed [`ColumnKind`].

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// Semantic classification of a result column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    /// Integer or floating point values; each numeric column becomes a radar axis.
    Numeric,
    /// Text values; candidates for spoke labels.
    Textual,
    /// Anything else (dates, booleans, JSON, ...). Ignored by the radar builder.
    Other,
}

impl ColumnKind {
    /// Base type tag for integer columns.
    pub const INTEGER: &'static str = "type/Integer";
    /// Base type tag for floating point columns.
    pub const FLOAT: &'static str = "type/Float";
    /// Base type tag for text columns.
    pub const TEXT: &'static str = "type/Text";

    /// Classifies a declared base type.
    pub fn from_base_type(base_type: &str) -> Self {
        match base_type {
            Self::INTEGER | Self::FLOAT => Self::Numeric,
            Self::TEXT => Self::Textual,
            _ => Self::Other,
        }
    }
}

/// One output column of a query result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultColumn {
    /// Column name, as shown to users and referenced by settings.
    pub name: String,
    /// Declared base type tag.
    pub base_type: String,
    /// Classification derived from `base_type`.
    pub kind: ColumnKind,
}

impl ResultColumn {
    /// Creates a column and classifies its base type.
    pub fn new(name: impl Into<String>, base_type: impl Into<String>) -> Self {
        let base_type = base_type.into();
        let kind = ColumnKind::from_base_type(&base_type);
        Self {
            name: name.into(),
            base_type,
            kind,
        }
    }

    /// A `type/Float` column.
    pub fn numeric(name: impl Into<String>) -> Self {
        Self::new(name, ColumnKind::FLOAT)
    }

    /// A `type/Integer` column.
    pub fn integer(name: impl Into<String>) -> Self {
        Self::new(name, ColumnKind::INTEGER)
    }

    /// A `type/Text` column.
    pub fn textual(name: impl Into<String>) -> Self {
        Self::new(name, ColumnKind::TEXT)
    }

    /// A column with an unclassified base type (`type/DateTime`).
    pub fn other(name: impl Into<String>) -> Self {
        Self::new(name, "type/DateTime")
    }
}

/// A single cell value.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum CellValue {
    /// SQL `NULL`.
    #[default]
    Null,
    /// A number.
    Number(f64),
    /// A string.
    Text(String),
    /// A boolean.
    Bool(bool),
}

impl CellValue {
    /// Returns the value as a number, if it is a finite `Number`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(v) if v.is_finite() => Some(*v),
            _ => None,
        }
    }

    /// Renders the value as a spoke label.
    ///
    /// `Null` renders as the empty string.
    pub fn label(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Number(v) => v.to_string(),
            Self::Text(s) => s.clone(),
            Self::Bool(b) => b.to_string(),
        }
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        // Integers beyond 2^53 lose precision, same as on the JSON wire.
        Self::Number(v as f64)
    }
}

impl From<i32> for CellValue {
    fn from(v: i32) -> Self {
        Self::Number(f64::from(v))
    }
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        Self::Text(v.into())
    }
}

impl From<String> for CellValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<bool> for CellValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl<T: Into<Self>> From<Option<T>> for CellValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

/// One row of a result, positionally aligned with [`ResultSet::columns`].
pub type ResultRow = Vec<CellValue>;

/// Errors returned when building a [`ResultSet`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DatasetError {
    /// A row does not have one cell per column.
    #[error("row {row} has {found} cells, expected {expected}")]
    RowWidth {
        /// Index of the offending row.
        row: usize,
        /// Number of columns in the result.
        expected: usize,
        /// Number of cells in the row.
        found: usize,
    },
}

/// A tabular query result.
///
/// Invariant: every row has exactly `columns.len()` cells.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultSet {
    columns: Vec<ResultColumn>,
    rows: Vec<ResultRow>,
}

impl ResultSet {
    /// Creates a result set, checking that every row matches the column count.
    pub fn new(columns: Vec<ResultColumn>, rows: Vec<ResultRow>) -> Result<Self, DatasetError> {
        let expected = columns.len();
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != expected) {
            return Err(DatasetError::RowWidth {
                row,
                expected,
                found: r.len(),
            });
        }
        Ok(Self { columns, rows })
    }

    /// Columns in result order.
    pub fn columns(&self) -> &[ResultColumn] {
        &self.columns
    }

    /// Rows in result order.
    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    /// Returns the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the index of the column named `name`.
    ///
    /// When several columns share a name, the last one wins.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().rposition(|c| c.name == name)
    }

    /// Returns the index of the first column of the given kind.
    pub fn first_column_of_kind(&self, kind: ColumnKind) -> Option<usize> {
        self.columns.iter().position(|c| c.kind == kind)
    }

    /// Indices of all columns of the given kind, in column order.
    pub fn columns_of_kind(&self, kind: ColumnKind) -> impl Iterator<Item = usize> + '_ {
        self.columns
            .iter()
            .enumerate()
            .filter(move |(_, c)| c.kind == kind)
            .map(|(i, _)| i)
    }

    /// Iterates the cells of column `col`, one per row.
    pub fn column_values(&self, col: usize) -> impl Iterator<Item = &CellValue> + '_ {
        self.rows.iter().filter_map(move |r| r.get(col))
    }
}

//! Core table and column types.

use std::fmt;

use thiserror::Error;

/// A single cell value.
///
/// Columns hold values of one variant only; mixing variants within a
/// column is rejected at construction time.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Signed integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// Free text value.
    Text(String),
}

impl Value {
    /// Short name of the variant, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
        }
    }
}

/// Errors raised when assembling a table from columns.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShapeError {
    /// Two columns disagree on row count.
    #[error("column '{column}' has {got} rows, expected {expected}")]
    RaggedColumns {
        /// Name of the offending column.
        column: String,
        /// Row count of the first column.
        expected: usize,
        /// Row count of the offending column.
        got: usize,
    },
    /// A column mixes value types.
    #[error("column '{column}' mixes {first} and {second} values")]
    MixedTypes {
        /// Name of the offending column.
        column: String,
        /// Type of the column's first value.
        first: &'static str,
        /// First conflicting type encountered.
        second: &'static str,
    },
    /// Two columns share a name.
    #[error("duplicate column name '{0}'")]
    DuplicateName(String),
}

/// A named, uniformly typed column of values.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    values: Vec<Value>,
}

impl Column {
    /// Create a column of integers.
    pub fn ints(name: impl Into<String>, values: impl IntoIterator<Item = i64>) -> Self {
        Self {
            name: name.into(),
            values: values.into_iter().map(Value::Int).collect(),
        }
    }

    /// Create a column of floats.
    pub fn floats(name: impl Into<String>, values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            name: name.into(),
            values: values.into_iter().map(Value::Float).collect(),
        }
    }

    /// Create a column of text values.
    pub fn texts<S: Into<String>>(
        name: impl Into<String>,
        values: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            name: name.into(),
            values: values.into_iter().map(|s| Value::Text(s.into())).collect(),
        }
    }

    /// Create a column from already-typed values.
    ///
    /// Uniformity is checked by [`Table::from_columns`], not here.
    pub fn from_values(name: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Column name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Column values, in row order.
    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Number of rows in this column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the column has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn check_uniform(&self) -> Result<(), ShapeError> {
        let Some(first) = self.values.first() else {
            return Ok(());
        };
        for value in &self.values[1..] {
            if std::mem::discriminant(value) != std::mem::discriminant(first) {
                return Err(ShapeError::MixedTypes {
                    column: self.name.clone(),
                    first: first.kind(),
                    second: value.kind(),
                });
            }
        }
        Ok(())
    }
}

/// An ordered collection of equally sized, uniformly typed columns.
///
/// Rows are aligned by index across columns.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Assemble a table, enforcing equal column lengths, per-column type
    /// uniformity, and unique column names.
    pub fn from_columns(columns: Vec<Column>) -> Result<Self, ShapeError> {
        if let Some(first) = columns.first() {
            let expected = first.len();
            for column in &columns {
                if column.len() != expected {
                    return Err(ShapeError::RaggedColumns {
                        column: column.name.clone(),
                        expected,
                        got: column.len(),
                    });
                }
                column.check_uniform()?;
            }
            for (i, column) in columns.iter().enumerate() {
                if columns[..i].iter().any(|c| c.name == column.name) {
                    return Err(ShapeError::DuplicateName(column.name.clone()));
                }
            }
        }
        Ok(Self { columns })
    }

    /// Columns in declaration order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column names in declaration order.
    #[must_use]
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    /// Look up a column by name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Number of data rows (0 for a table with no columns).
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    /// Number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// One row of cell values, aligned with [`Self::column_names`].
    ///
    /// Returns `None` when `index` is out of range.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<Vec<&Value>> {
        if index >= self.n_rows() {
            return None;
        }
        Some(self.columns.iter().map(|c| &c.values[index]).collect())
    }

    /// Iterate over rows in order.
    pub fn rows(&self) -> impl Iterator<Item = Vec<&Value>> {
        (0..self.n_rows()).filter_map(|i| self.row(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_shape_accessors() {
        let table = Table::from_columns(vec![
            Column::ints("a", [1, 2, 3]),
            Column::texts("b", ["x", "y", "z"]),
        ])
        .unwrap();

        assert_eq!(table.n_rows(), 3);
        assert_eq!(table.n_cols(), 2);
        assert_eq!(table.column_names(), vec!["a", "b"]);
        assert_eq!(
            table.row(1).unwrap(),
            vec![&Value::Int(2), &Value::Text("y".into())]
        );
        assert!(table.row(3).is_none());
    }

    #[test]
    fn empty_table_has_zero_shape() {
        let table = Table::from_columns(vec![]).unwrap();
        assert_eq!(table.n_rows(), 0);
        assert_eq!(table.n_cols(), 0);
    }

    #[test]
    fn ragged_columns_rejected() {
        let err = Table::from_columns(vec![
            Column::ints("a", [1, 2, 3]),
            Column::ints("b", [1, 2]),
        ])
        .unwrap_err();

        assert_eq!(
            err,
            ShapeError::RaggedColumns {
                column: "b".into(),
                expected: 3,
                got: 2,
            }
        );
    }

    #[test]
    fn mixed_type_column_rejected() {
        let column =
            Column::from_values("a", vec![Value::Int(1), Value::Text("oops".into())]);
        let err = Table::from_columns(vec![column]).unwrap_err();
        assert!(matches!(err, ShapeError::MixedTypes { .. }));
    }

    #[test]
    fn duplicate_names_rejected() {
        let err = Table::from_columns(vec![
            Column::ints("a", [1]),
            Column::ints("a", [2]),
        ])
        .unwrap_err();
        assert_eq!(err, ShapeError::DuplicateName("a".into()));
    }

    #[test]
    fn column_lookup_by_name() {
        let table = Table::from_columns(vec![Column::floats("x", [1.5, 2.5])]).unwrap();
        assert_eq!(table.column("x").unwrap().len(), 2);
        assert!(table.column("y").is_none());
    }
}

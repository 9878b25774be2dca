//! CSV encoding and decoding for [`Table`].
//!
//! The codec delegates delimiting and quoting to the `csv` crate and only
//! adds the column-typing layer: on decode, each column is inferred as
//! int, then float, then text, in that order; on encode, values are
//! written with their `Display` form under a header row of column names.

use std::io::Write;

use thiserror::Error;

use crate::table::{Column, Table, Value};

/// Errors raised while decoding CSV bytes into a [`Table`].
#[derive(Debug, Error)]
pub enum ParseError {
    /// The input held no header row at all.
    #[error("empty input: no header row")]
    Empty,
    /// Malformed CSV (bad quoting, ragged rows, invalid UTF-8).
    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),
    /// Header names that cannot form a table (duplicates).
    #[error(transparent)]
    Shape(#[from] crate::table::ShapeError),
}

impl Table {
    /// Decode CSV bytes into a table.
    ///
    /// The first row is the header; every following row is data. Column
    /// types are inferred from the data cells. No schema validation is
    /// performed beyond what the CSV format itself requires.
    pub fn from_csv_bytes(bytes: &[u8]) -> Result<Self, ParseError> {
        let mut reader = csv::ReaderBuilder::new().from_reader(bytes);

        let headers = reader.headers()?.clone();
        if headers.is_empty() || bytes.is_empty() {
            return Err(ParseError::Empty);
        }

        let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
        for record in reader.records() {
            let record = record?;
            for (i, field) in record.iter().enumerate() {
                cells[i].push(field.to_string());
            }
        }

        let columns = headers
            .iter()
            .zip(cells)
            .map(|(name, raw)| Column::from_values(name, infer_values(raw)))
            .collect();

        // Rectangularity and per-column typing are guaranteed above;
        // only duplicate header names can still be rejected here.
        Ok(Self::from_columns(columns)?)
    }

    /// Encode the table as CSV into `writer`: header row of column
    /// names, then one row per data row.
    pub fn write_csv<W: Write>(&self, writer: W) -> csv::Result<()> {
        let mut out = csv::Writer::from_writer(writer);
        out.write_record(self.column_names())?;
        for row in self.rows() {
            out.write_record(row.iter().map(ToString::to_string))?;
        }
        out.flush()?;
        Ok(())
    }

    /// Encode the table as a CSV string.
    #[must_use]
    pub fn to_csv_string(&self) -> String {
        let mut buf = Vec::new();
        // Writing to a Vec<u8> cannot fail.
        self.write_csv(&mut buf).unwrap_or_default();
        String::from_utf8(buf).unwrap_or_default()
    }
}

/// Type a raw column: all-int, else all-float, else text.
fn infer_values(raw: Vec<String>) -> Vec<Value> {
    if let Some(ints) = parse_all::<i64>(&raw) {
        return ints.into_iter().map(Value::Int).collect();
    }
    if let Some(floats) = parse_all::<f64>(&raw) {
        return floats.into_iter().map(Value::Float).collect();
    }
    raw.into_iter().map(Value::Text).collect()
}

fn parse_all<T: std::str::FromStr>(raw: &[String]) -> Option<Vec<T>> {
    raw.iter().map(|s| s.trim().parse().ok()).collect()
}

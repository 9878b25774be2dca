//! Column-oriented tabular datasets.
//!
//! A [`Table`] is an ordered collection of named columns, each an ordered
//! sequence of values of uniform type. Tables round-trip through CSV with
//! the standard convention: first row is the header, comma-delimited,
//! values typed per column by inference (int, then float, then text).
//!
//! # Example
//!
//! ```rust
//! use tabular::{Column, Table};
//!
//! let table = Table::from_columns(vec![
//!     Column::ints("first column", [1, 2, 3, 4]),
//!     Column::ints("second column", [10, 20, 30, 40]),
//! ])
//! .unwrap();
//!
//! assert_eq!(table.n_rows(), 4);
//! assert_eq!(table.n_cols(), 2);
//! ```

mod codec;
mod table;

pub use codec::ParseError;
pub use table::{Column, ShapeError, Table, Value};

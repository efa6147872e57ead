//! # tinycsv
//!
//! A tiny, dialect-aware CSV parser. Each line is scanned once, character by
//! character, and split into fields according to a [`Dialect`]: a separator,
//! an optional quote character, an optional escape character and a line
//! terminator.
//!
//! ## Quick Start
//!
//! ```
//! use tinycsv::CsvReader;
//!
//! let mut reader = CsvReader::from_text("\"item1\",\"a\"\n\n\"item2\",\"b\"");
//! let rows: Vec<_> = reader.rows().collect::<Result<_, _>>().unwrap();
//! assert_eq!(rows, vec![vec!["item1", "a"], vec!["item2", "b"]]);
//! ```
//!
//! ## Single lines
//!
//! ```
//! use tinycsv::Dialect;
//!
//! let dialect = Dialect::builder().separator(';').quote(Some('\'')).build().unwrap();
//! assert_eq!(
//!     dialect.parse_line("'a;b' ; 'c'", None).unwrap(),
//!     vec!["a;b", "c"]
//! );
//! ```
//!
//! ## Features
//!
//! - `serde`: (de)serialize a [`Dialect`] from configuration, validated on load

pub mod csv;
pub mod csv_reader;
pub mod error;
pub mod line_reader;

pub use csv::{Dialect, DialectBuilder, Record};
pub use csv_reader::{CsvReader, CsvRowIterator};
pub use error::{CsvError, Result};
pub use line_reader::LineReader;

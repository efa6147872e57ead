//! Lazy CSV reading: one raw line in, one parsed record out

use crate::csv::{Dialect, Record};
use crate::error::Result;
use crate::line_reader::LineReader;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// CSV reader that parses a line source record by record
///
/// Lines are pulled one at a time from a [`LineReader`]; blank lines are
/// skipped by default. Every parsed line is labelled with its 0-based
/// position among *all* source lines, skipped ones included, so error
/// messages point at the real line.
///
/// Source lines are split on `\n` only. With a different line terminator,
/// such as a bare `\r`, several records on one source line come back as a
/// single record, since the terminator inside a line closes a field.
///
/// # Examples
///
/// ```no_run
/// use tinycsv::CsvReader;
///
/// let mut reader = CsvReader::open("data.csv").unwrap();
///
/// for row_result in reader.rows() {
///     let row = row_result.unwrap();
///     println!("{:?}", row);
/// }
/// ```
///
/// # Custom Dialect
///
/// ```
/// use tinycsv::{CsvReader, Dialect};
///
/// let dialect = Dialect::builder().separator('\t').quote(None).build().unwrap();
/// let mut reader = CsvReader::from_text("a\tb\n\nc\td\n").dialect(dialect);
///
/// assert_eq!(reader.read_row().unwrap(), Some(vec!["a".to_string(), "b".to_string()]));
/// assert_eq!(reader.read_row().unwrap(), Some(vec!["c".to_string(), "d".to_string()]));
/// assert_eq!(reader.read_row().unwrap(), None);
/// ```
pub struct CsvReader<R> {
    lines: LineReader<R>,
    dialect: Dialect,
    skip_blank_lines: bool,
    row_count: u64,
    failed: bool,
}

impl<R: BufRead> CsvReader<R> {
    /// Read CSV from any buffered reader with the default dialect
    pub fn new(reader: R) -> Self {
        Self::from_lines(LineReader::new(reader))
    }

    /// Read CSV from an existing line supplier with the default dialect
    pub fn from_lines(lines: LineReader<R>) -> Self {
        Self {
            lines,
            dialect: Dialect::default(),
            skip_blank_lines: true,
            row_count: 0,
            failed: false,
        }
    }

    /// Set the dialect used to parse every line (builder pattern)
    pub fn dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Skip lines that are empty after trimming (builder pattern, default `true`)
    ///
    /// When disabled, a blank line is parsed like any other and yields a
    /// single empty field.
    pub fn skip_blank_lines(mut self, skip: bool) -> Self {
        self.skip_blank_lines = skip;
        self
    }

    /// Read a single record
    ///
    /// Returns `Ok(None)` when EOF is reached. Parse errors are returned as
    /// they are; the reader does not try to recover.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use tinycsv::CsvReader;
    ///
    /// let mut reader = CsvReader::open("data.csv").unwrap();
    ///
    /// while let Some(row) = reader.read_row().unwrap() {
    ///     println!("{:?}", row);
    /// }
    /// ```
    pub fn read_row(&mut self) -> Result<Option<Record>> {
        loop {
            let line_number = self.lines.lines_read();
            let line = match self.lines.read_line()? {
                Some(line) => line,
                None => return Ok(None), // EOF
            };

            if self.skip_blank_lines && line.trim().is_empty() {
                log::trace!("skipping blank line {}", line_number);
                continue;
            }

            let fields = self.dialect.parse_line(&line, Some(line_number))?;
            self.row_count += 1;
            return Ok(Some(fields));
        }
    }

    /// Get iterator over rows
    ///
    /// The iterator stops after the first error.
    pub fn rows(&mut self) -> CsvRowIterator<'_, R> {
        CsvRowIterator { reader: self }
    }

    /// Get the number of records read so far
    pub fn row_count(&self) -> u64 {
        self.row_count
    }

    /// Get the number of raw lines pulled so far, blank ones included
    pub fn line_count(&self) -> usize {
        self.lines.lines_read()
    }

    fn next_row(&mut self) -> Option<Result<Record>> {
        if self.failed {
            return None;
        }
        let next = self.read_row().transpose();
        if matches!(next, Some(Err(_))) {
            self.failed = true;
        }
        next
    }
}

impl CsvReader<BufReader<File>> {
    /// Open a CSV file with the default dialect
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use tinycsv::{CsvReader, Dialect};
    ///
    /// let reader = CsvReader::open("data.csv")
    ///     .unwrap()
    ///     .dialect(Dialect::builder().separator(';').build().unwrap());
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::from_lines(LineReader::open(path)?))
    }
}

impl<'a> CsvReader<&'a [u8]> {
    /// Read CSV from an in-memory string with the default dialect
    pub fn from_text(text: &'a str) -> Self {
        Self::from_lines(LineReader::from_text(text))
    }
}

impl<R: BufRead> Iterator for CsvReader<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_row()
    }
}

/// Iterator over CSV rows
pub struct CsvRowIterator<'a, R> {
    reader: &'a mut CsvReader<R>,
}

impl<'a, R: BufRead> Iterator for CsvRowIterator<'a, R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        self.reader.next_row()
    }
}

//! Raw line supplier over any buffered reader

use crate::error::{CsvError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Pulls raw lines, one at a time, from a buffered source
///
/// Lines always end at `\n`, whatever terminator a [`Dialect`](crate::Dialect)
/// uses. Each line keeps its trailing `\n`; the last line of the input may
/// come without one. Nothing is read ahead beyond what the underlying
/// [`BufRead`] buffers.
///
/// # Examples
///
/// ```
/// use tinycsv::LineReader;
///
/// let mut lines = LineReader::from_text("a\nb");
/// assert_eq!(lines.read_line().unwrap().as_deref(), Some("a\n"));
/// assert_eq!(lines.read_line().unwrap().as_deref(), Some("b"));
/// assert_eq!(lines.read_line().unwrap(), None);
/// assert_eq!(lines.lines_read(), 2);
/// ```
pub struct LineReader<R> {
    reader: R,
    lines_read: usize,
}

impl<R: BufRead> LineReader<R> {
    /// Wrap a buffered reader
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            lines_read: 0,
        }
    }

    /// Read the next raw line
    ///
    /// Returns `Ok(None)` when EOF is reached.
    pub fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let bytes_read = self
            .reader
            .read_line(&mut line)
            .map_err(|e| CsvError::ReadError(format!("Failed to read line: {}", e)))?;

        if bytes_read == 0 {
            return Ok(None); // EOF
        }

        self.lines_read += 1;
        Ok(Some(line))
    }

    /// Number of lines read so far
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }
}

impl LineReader<BufReader<File>> {
    /// Open a file for line-by-line reading
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())
            .map_err(|e| CsvError::ReadError(format!("Failed to open CSV file: {}", e)))?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<'a> LineReader<&'a [u8]> {
    /// Treat a string as an in-memory stream of lines
    pub fn from_text(text: &'a str) -> Self {
        Self::new(text.as_bytes())
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_line().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_keeps_terminators() {
        let lines: Vec<String> = LineReader::from_text("one\ntwo\n\nthree")
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(lines, vec!["one\n", "two\n", "\n", "three"]);
    }

    #[test]
    fn test_empty_input() {
        let mut lines = LineReader::from_text("");
        assert_eq!(lines.read_line().unwrap(), None);
        assert_eq!(lines.lines_read(), 0);
    }

    #[test]
    fn test_open_file() -> Result<()> {
        let mut temp = tempfile::NamedTempFile::new().unwrap();
        write!(temp, "a\nb\n").unwrap();

        let mut lines = LineReader::open(temp.path())?;
        assert_eq!(lines.read_line()?.as_deref(), Some("a\n"));
        assert_eq!(lines.read_line()?.as_deref(), Some("b\n"));
        assert_eq!(lines.read_line()?, None);
        Ok(())
    }

    #[test]
    fn test_open_missing_file() {
        let err = LineReader::open("definitely/not/here.csv").err().unwrap();
        assert!(matches!(err, CsvError::ReadError(_)));
    }

    #[test]
    fn test_invalid_utf8_is_read_error() {
        let bytes: &[u8] = &[0xff, 0xfe, b'\n'];
        let mut lines = LineReader::new(bytes);
        assert!(matches!(lines.read_line(), Err(CsvError::ReadError(_))));
    }
}

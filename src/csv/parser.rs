//! Single-pass, character-level line parsing for a [`Dialect`]

use std::borrow::Cow;

use super::Dialect;
use crate::error::{CsvError, Result};

/// Fields of one parsed line, in order of appearance
pub type Record = Vec<String>;

/// Per-call scan state. Never outlives a single `parse_line` call.
#[derive(Debug)]
struct ScanState {
    in_quote: bool,
    escaped: bool,
    buffer: String,
    fields: Record,
}

impl ScanState {
    /// Without a quote character the whole line is one virtual quoted region
    fn new(quoting: bool) -> Self {
        Self {
            in_quote: !quoting,
            escaped: false,
            buffer: String::new(),
            fields: Vec::new(),
        }
    }

    fn close_field(&mut self) {
        self.fields.push(std::mem::take(&mut self.buffer));
    }
}

impl Dialect {
    /// Parse one line of text into its fields
    ///
    /// The line terminator is appended when missing, so the last field is
    /// always closed. `line_number` is only used to label errors.
    ///
    /// Outside quotes, ASCII whitespace is skipped and any other
    /// non-structural character is an error. When quoting is disabled every
    /// character that is not a separator, escape or terminator is data,
    /// whitespace included.
    ///
    /// # Errors
    ///
    /// - [`CsvError::MalformedLine`] when a data character appears outside quotes
    /// - [`CsvError::UnterminatedField`] when a field is still open at the end
    ///   of the line (unclosed quote, dangling escape)
    ///
    /// # Examples
    ///
    /// ```
    /// use tinycsv::Dialect;
    ///
    /// let dialect = Dialect::default();
    /// let fields = dialect.parse_line(r#""a", "b,c" ,"d\"e""#, None).unwrap();
    /// assert_eq!(fields, vec!["a", "b,c", "d\"e"]);
    ///
    /// assert!(dialect.parse_line("a,b", Some(4)).is_err());
    /// ```
    pub fn parse_line(&self, line: &str, line_number: Option<usize>) -> Result<Record> {
        let terminator = self.line_terminator();
        let line: Cow<'_, str> = if line.ends_with(terminator) {
            Cow::Borrowed(line)
        } else {
            Cow::Owned(format!("{}{}", line, terminator))
        };
        // Characters of a multi-char terminator after its first one
        let terminator_tail = terminator.chars().count() - 1;

        let quoting = self.is_quoting();
        let mut state = ScanState::new(quoting);
        let mut chars = line.char_indices().enumerate();

        while let Some((column, (offset, c))) = chars.next() {
            if state.escaped {
                state.buffer.push(c);
                state.escaped = false;
            } else if self.quote() == Some(c) {
                state.in_quote = !state.in_quote;
            } else if self.escape() == Some(c) {
                // The pending-escape branch runs first, so this only flips false to true
                state.escaped = !state.escaped;
                continue;
            } else if (c == self.separator() || line[offset..].starts_with(terminator))
                && (!quoting || !state.in_quote)
            {
                state.close_field();
                if c != self.separator() && terminator_tail > 0 {
                    chars.nth(terminator_tail - 1);
                }
            } else if c.is_ascii_whitespace() && !state.in_quote {
                // padding around fields
            } else if state.in_quote {
                state.buffer.push(c);
            } else {
                log::debug!(
                    "rejecting line {:?}: {:?} outside quote at column {}",
                    line_number,
                    c,
                    column
                );
                return Err(CsvError::MalformedLine {
                    line: line_number,
                    column,
                    character: c,
                });
            }
            state.escaped = false;
        }

        if !state.buffer.is_empty() {
            log::debug!(
                "rejecting line {:?}: unterminated field {:?}",
                line_number,
                state.buffer
            );
            return Err(CsvError::UnterminatedField {
                line: line_number,
                buffer: state.buffer,
            });
        }

        Ok(state.fields)
    }
}

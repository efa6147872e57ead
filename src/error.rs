//! Error types for CSV parsing and reading

use thiserror::Error;

/// Result type alias used throughout the crate
pub type Result<T> = std::result::Result<T, CsvError>;

/// Errors raised while building a dialect, pulling lines or parsing them
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CsvError {
    /// A non-whitespace, non-structural character appeared outside quotes
    #[error(
        "Non whitespace or separator found outside quote (line={}, col={column}, char='{character}' (ord={}))",
        line_label(.line),
        code_point(.character)
    )]
    MalformedLine {
        /// 0-based line number, if the caller supplied one
        line: Option<usize>,
        /// 0-based character index within the normalized line
        column: usize,
        /// The offending character
        character: char,
    },

    /// The scan ended with a field still open (unclosed quote or dangling escape)
    #[error("Unterminated field (line={}), buffer contains {buffer:?}", line_label(.line))]
    UnterminatedField {
        /// 0-based line number, if the caller supplied one
        line: Option<usize>,
        /// Characters accumulated for the unfinished field
        buffer: String,
    },

    /// Dialect settings are ambiguous or incomplete
    #[error("Invalid dialect: {0}")]
    InvalidDialect(String),

    /// Failed to pull a line from the underlying source
    #[error("Read error: {0}")]
    ReadError(String),
}

fn line_label(line: &Option<usize>) -> String {
    match line {
        Some(n) => n.to_string(),
        None => "unknown".to_string(),
    }
}

fn code_point(c: &char) -> u32 {
    *c as u32
}

impl CsvError {
    /// Line number attached to a parse error, if any
    pub fn line(&self) -> Option<usize> {
        match self {
            CsvError::MalformedLine { line, .. } | CsvError::UnterminatedField { line, .. } => {
                *line
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_message_with_line() {
        let err = CsvError::MalformedLine {
            line: Some(3),
            column: 7,
            character: 'x',
        };
        assert_eq!(
            err.to_string(),
            "Non whitespace or separator found outside quote (line=3, col=7, char='x' (ord=120))"
        );
        assert_eq!(err.line(), Some(3));
    }

    #[test]
    fn test_malformed_message_unknown_line() {
        let err = CsvError::MalformedLine {
            line: None,
            column: 0,
            character: 'a',
        };
        assert!(err.to_string().contains("line=unknown"));
    }

    #[test]
    fn test_unterminated_message() {
        let err = CsvError::UnterminatedField {
            line: None,
            buffer: "abc\n".to_string(),
        };
        assert_eq!(
            err.to_string(),
            r#"Unterminated field (line=unknown), buffer contains "abc\n""#
        );
    }
}

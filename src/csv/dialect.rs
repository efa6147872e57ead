//! CSV dialect configuration

use crate::error::{CsvError, Result};

/// A CSV dialect: separator, optional quote, optional escape and line terminator
///
/// A dialect is immutable once built and can be shared freely between
/// threads; parsing never mutates it.
///
/// # Examples
///
/// ```
/// use tinycsv::Dialect;
///
/// let dialect = Dialect::default();
/// assert_eq!(dialect.separator(), ',');
/// assert_eq!(dialect.quote(), Some('"'));
/// assert_eq!(dialect.escape(), Some('\\'));
/// assert_eq!(dialect.line_terminator(), "\n");
///
/// let tsv = Dialect::builder()
///     .separator('\t')
///     .quote(Some('\''))
///     .build()
///     .unwrap();
/// assert_eq!(tsv.separator(), '\t');
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "DialectBuilder", into = "DialectBuilder")
)]
pub struct Dialect {
    separator: char,
    quote: Option<char>,
    escape: Option<char>,
    line_terminator: String,
}

impl Dialect {
    pub const DEFAULT_SEPARATOR: char = ',';
    pub const DEFAULT_QUOTE: char = '"';
    pub const DEFAULT_ESCAPE: char = '\\';
    pub const DEFAULT_LINE_TERMINATOR: &'static str = "\n";

    /// Start building a dialect from the default settings
    pub fn builder() -> DialectBuilder {
        DialectBuilder::default()
    }

    /// Field separator
    pub fn separator(&self) -> char {
        self.separator
    }

    /// Quote character, `None` when quoting is disabled
    pub fn quote(&self) -> Option<char> {
        self.quote
    }

    /// Escape character, `None` when escaping is disabled
    pub fn escape(&self) -> Option<char> {
        self.escape
    }

    /// Line terminator marking the end of a record
    pub fn line_terminator(&self) -> &str {
        &self.line_terminator
    }

    /// Whether fields may be enclosed in quotes
    pub fn is_quoting(&self) -> bool {
        self.quote.is_some()
    }
}

impl Default for Dialect {
    fn default() -> Self {
        Self {
            separator: Self::DEFAULT_SEPARATOR,
            quote: Some(Self::DEFAULT_QUOTE),
            escape: Some(Self::DEFAULT_ESCAPE),
            line_terminator: Self::DEFAULT_LINE_TERMINATOR.to_string(),
        }
    }
}

/// Builder for [`Dialect`], validated on [`build`](DialectBuilder::build)
///
/// With the `serde` feature the builder doubles as the serialized form of a
/// dialect: every field is optional and missing ones keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct DialectBuilder {
    separator: char,
    quote: Option<char>,
    escape: Option<char>,
    line_terminator: String,
}

impl Default for DialectBuilder {
    fn default() -> Self {
        let Dialect {
            separator,
            quote,
            escape,
            line_terminator,
        } = Dialect::default();
        Self {
            separator,
            quote,
            escape,
            line_terminator,
        }
    }
}

impl DialectBuilder {
    /// Set the field separator (builder pattern)
    pub fn separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Set the quote character, `None` disables quoting (builder pattern)
    pub fn quote(mut self, quote: Option<char>) -> Self {
        self.quote = quote;
        self
    }

    /// Set the escape character, `None` disables escaping (builder pattern)
    pub fn escape(mut self, escape: Option<char>) -> Self {
        self.escape = escape;
        self
    }

    /// Set the line terminator (builder pattern)
    pub fn line_terminator(mut self, terminator: impl Into<String>) -> Self {
        self.line_terminator = terminator.into();
        self
    }

    /// Validate the settings and produce a [`Dialect`]
    ///
    /// # Errors
    ///
    /// Returns [`CsvError::InvalidDialect`] when:
    /// - separator, quote and escape are not mutually distinct
    /// - the line terminator is empty
    /// - the line terminator contains the separator, quote or escape character
    pub fn build(self) -> Result<Dialect> {
        let Self {
            separator,
            quote,
            escape,
            line_terminator,
        } = self;

        if quote == Some(separator) {
            return Err(CsvError::InvalidDialect(format!(
                "quote and separator are both {:?}",
                separator
            )));
        }
        if escape == Some(separator) {
            return Err(CsvError::InvalidDialect(format!(
                "escape and separator are both {:?}",
                separator
            )));
        }
        if let (Some(q), Some(e)) = (quote, escape) {
            if q == e {
                return Err(CsvError::InvalidDialect(format!(
                    "quote and escape are both {:?}",
                    q
                )));
            }
        }

        if line_terminator.is_empty() {
            return Err(CsvError::InvalidDialect(
                "line terminator must not be empty".to_string(),
            ));
        }
        let structural = std::iter::once(separator).chain(quote).chain(escape);
        for c in structural {
            if line_terminator.contains(c) {
                return Err(CsvError::InvalidDialect(format!(
                    "line terminator {:?} contains structural character {:?}",
                    line_terminator, c
                )));
            }
        }

        Ok(Dialect {
            separator,
            quote,
            escape,
            line_terminator,
        })
    }
}

impl From<Dialect> for DialectBuilder {
    fn from(dialect: Dialect) -> Self {
        Self {
            separator: dialect.separator,
            quote: dialect.quote,
            escape: dialect.escape,
            line_terminator: dialect.line_terminator,
        }
    }
}

impl TryFrom<DialectBuilder> for Dialect {
    type Error = CsvError;

    fn try_from(builder: DialectBuilder) -> Result<Self> {
        builder.build()
    }
}

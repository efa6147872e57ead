//! CSV dialects and line parsing

mod dialect;
mod parser;

pub use dialect::{Dialect, DialectBuilder};
pub use parser::Record;

//! Delimited-text (CSV, TSV) line tokenizer and streaming line pipeline
//!
//! ```
//! use tiny_csv::{BufferedLineSource, Pipeline, Tokenizer};
//!
//! let source = BufferedLineSource::new("id,name\n1,'Smith, J.'\n2,null");
//! let tokenizer = Tokenizer::builder(',')
//!     .replace_null_token(true)
//!     .build()
//!     .unwrap();
//! let records = Pipeline::new(source, tokenizer).skip(1).process().unwrap();
//! assert_eq!(
//!     records,
//!     vec![
//!         vec![Some("1".to_owned()), Some("Smith, J.".to_owned())],
//!         vec![Some("2".to_owned()), None],
//!     ]
//! );
//! ```
#![warn(missing_docs)]

mod error;
pub mod pipeline;
pub mod source;
pub mod tokenizer;

pub use error::Error;
pub use pipeline::{Pipeline, Records};
pub use source::{BufferedLineSource, Encoding, LineSource, StreamLineSource};
pub use tokenizer::{BlankValue, Field, LineProcessor, Record, Tokenizer, DEFAULT_QUOTE_CHARS};

/// Parse a whole comma-separated text.
///
/// `quote_chars` defaults to [`DEFAULT_QUOTE_CHARS`].
pub fn from_comma_separated_str(
    input: &str,
    quote_chars: Option<&[char]>,
) -> Result<Vec<Record>, Error> {
    execute(input, ',', quote_chars)
}

/// Parse a whole tab-separated text.
///
/// `quote_chars` defaults to [`DEFAULT_QUOTE_CHARS`].
pub fn from_tab_separated_str(
    input: &str,
    quote_chars: Option<&[char]>,
) -> Result<Vec<Record>, Error> {
    execute(input, '\t', quote_chars)
}

fn execute(
    input: &str,
    separator: char,
    quote_chars: Option<&[char]>,
) -> Result<Vec<Record>, Error> {
    let tokenizer = Tokenizer::builder(separator)
        .quote_chars(quote_chars.unwrap_or(&DEFAULT_QUOTE_CHARS))
        .build()?;
    Pipeline::new(BufferedLineSource::new(input), tokenizer).process()
}

use std::error;
use std::fmt;
use std::io;

use crate::source::Encoding;

/// Tokenizer configuration and line source errors
///
/// Malformed quoting is never an error: every line tokenizes.
#[non_exhaustive]
#[derive(Debug)]
pub enum Error {
    /// I/O Error
    Io(io::Error),
    /// Line bytes not valid in the source encoding, with the 1-based line number when known
    MalformedLine(Encoding, Option<u64>),
    /// Separator is also declared as a quote character
    SeparatorIsQuote(char),
    /// Separator is `\r` or `\n`, which never reach the tokenizer
    SeparatorIsLineTerminator(char),
    /// Encoding label not recognized
    UnknownEncoding(String),
}

impl Error {
    /// Stamp the line number on errors that carry one.
    pub(crate) fn at_line(mut self, line: u64) -> Self {
        if let Self::MalformedLine(_, ref mut pos) = self {
            *pos = Some(line);
        }
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(ref err) => err.fmt(f),
            Self::MalformedLine(encoding, Some(line)) => {
                write!(f, "malformed {encoding} at line {line}")
            }
            Self::MalformedLine(encoding, None) => write!(f, "malformed {encoding}"),
            Self::SeparatorIsQuote(c) => {
                write!(f, "separator {c:?} is also a quote character")
            }
            Self::SeparatorIsLineTerminator(c) => {
                write!(f, "separator {c:?} is a line terminator")
            }
            Self::UnknownEncoding(ref label) => write!(f, "unknown encoding {label:?}"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Io(ref err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

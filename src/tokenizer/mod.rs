//! Field splitting of a single delimited line.
//!
//! A quote character opens a quoted field only at the first position of
//! that field. Inside a quoted field, the active quote closes the field
//! when followed by the separator or the end of line, and a doubled active
//! quote is an escaped quote. Any other quote position is a false start:
//! the opening quote is restored and the field continues as literal text.
use log::trace;

use crate::Error;


/// Quote characters recognized when none are configured.
pub const DEFAULT_QUOTE_CHARS: [char; 2] = ['\'', '"'];

/// A single value. `None` is the null sentinel, distinct from `Some("")`.
pub type Field = Option<String>;

/// The fields of one line, in order.
pub type Record = Vec<Field>;

/// Turns one line of text into a record
pub trait LineProcessor {
    /// `line` never contains a line terminator.
    fn process(&mut self, line: &str) -> Record;
}

impl<P: LineProcessor + ?Sized> LineProcessor for &mut P {
    fn process(&mut self, line: &str) -> Record {
        (**self).process(line)
    }
}

/// Replacement for unquoted empty fields
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BlankValue {
    /// Substitute this text (possibly empty)
    Text(String),
    /// Substitute the null sentinel
    Null,
}

impl BlankValue {
    fn to_field(&self) -> Field {
        match self {
            Self::Text(text) => Some(text.clone()),
            Self::Null => None,
        }
    }
}

/// Where the scan is within the current field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    /// Nothing consumed for this field yet
    Start,
    /// Accumulating literal text
    Unquoted,
    /// Inside a field opened with this quote character
    Quoted(char),
    /// Quoted field closed, the separator or end of line comes next
    Closed,
}

impl State {
    fn is_quoted(self) -> bool {
        matches!(self, Self::Quoted(_) | Self::Closed)
    }
}

/// Delimited line tokenizer
#[derive(Clone, Debug)]
pub struct Tokenizer {
    separator: char,
    quote_chars: Vec<char>,
    blank_value: Option<BlankValue>,
    null_token: bool,
}

impl Tokenizer {
    /// Tokenizer splitting on `separator` with the default quote characters
    /// and no substitution.
    ///
    /// Use [`Tokenizer::builder`] to validate a custom configuration.
    pub fn new(separator: char) -> Tokenizer {
        Tokenizer {
            separator,
            quote_chars: DEFAULT_QUOTE_CHARS.to_vec(),
            blank_value: None,
            null_token: false,
        }
    }

    /// Comma separated values
    pub fn comma() -> Tokenizer {
        Self::new(',')
    }

    /// Tab separated values
    pub fn tab() -> Tokenizer {
        Self::new('\t')
    }

    /// Start a validated configuration
    pub fn builder(separator: char) -> TokenizerBuilder {
        TokenizerBuilder {
            inner: Self::new(separator),
        }
    }

    /// Field separator
    pub fn separator(&self) -> char {
        self.separator
    }

    /// Recognized quote characters
    pub fn quote_chars(&self) -> &[char] {
        &self.quote_chars
    }

    /// Split `line` into fields.
    ///
    /// Never fails: an empty line yields one empty field, and a line with
    /// `n` separators outside quotes yields `n + 1` fields.
    pub fn tokenize(&self, line: &str) -> Record {
        let mut record = Vec::new();
        let mut field = String::new();
        let mut state = State::Start;
        let mut chars = line.chars().peekable();
        while let Some(c) = chars.next() {
            match state {
                State::Quoted(quote) if c == quote => match chars.peek() {
                    None => state = State::Closed,
                    Some(&next) if next == self.separator => state = State::Closed,
                    Some(&next) if next == quote => {
                        // escaped quote
                        field.push(quote);
                        chars.next();
                    }
                    Some(_) => {
                        // false start
                        field.insert(0, quote);
                        field.push(c);
                        state = State::Unquoted;
                    }
                },
                State::Quoted(_) => field.push(c),
                _ if c == self.separator => {
                    record.push(self.flush(&mut field, state));
                    state = State::Start;
                }
                State::Start if self.is_quote(c) => state = State::Quoted(c),
                _ => {
                    field.push(c);
                    state = State::Unquoted;
                }
            }
        }
        record.push(self.flush(&mut field, state));
        trace!(target: "tokenizer", "{} field(s) from {line:?}", record.len());
        record
    }

    fn flush(&self, field: &mut String, state: State) -> Field {
        let raw = std::mem::take(field);
        if state.is_quoted() {
            return Some(raw);
        }
        match self.blank_value {
            Some(ref blank) if raw.is_empty() => blank.to_field(),
            _ if self.null_token && raw == "null" => None,
            _ => Some(raw),
        }
    }

    fn is_quote(&self, c: char) -> bool {
        self.quote_chars.contains(&c)
    }
}

impl Default for Tokenizer {
    fn default() -> Tokenizer {
        Self::comma()
    }
}

impl LineProcessor for Tokenizer {
    fn process(&mut self, line: &str) -> Record {
        self.tokenize(line)
    }
}

/// Validated [`Tokenizer`] configuration
#[derive(Clone, Debug)]
pub struct TokenizerBuilder {
    inner: Tokenizer,
}

impl TokenizerBuilder {
    /// Replace the default quote characters. An empty set disables quoting.
    pub fn quote_chars(mut self, quote_chars: &[char]) -> Self {
        self.inner.quote_chars = quote_chars.to_vec();
        self
    }

    /// Substitute unquoted empty fields.
    pub fn replace_blank_with(mut self, blank_value: BlankValue) -> Self {
        self.inner.blank_value = Some(blank_value);
        self
    }

    /// Substitute the null sentinel for unquoted `null` fields.
    pub fn replace_null_token(mut self, enabled: bool) -> Self {
        self.inner.null_token = enabled;
        self
    }

    /// Check the configuration.
    pub fn build(self) -> Result<Tokenizer, Error> {
        let separator = self.inner.separator;
        if separator == '\r' || separator == '\n' {
            return Err(Error::SeparatorIsLineTerminator(separator));
        }
        if self.inner.is_quote(separator) {
            return Err(Error::SeparatorIsQuote(separator));
        }
        Ok(self.inner)
    }
}

use std::fmt;
use std::str::{self, FromStr};

use uncased::UncasedStr;

use crate::Error;

/// Text encoding of a byte stream
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// UTF-8, a leading byte order mark is dropped
    #[default]
    Utf8,
    /// 7-bit US-ASCII
    Ascii,
    /// ISO-8859-1, each byte is the code point of the same value
    Latin1,
}

include!(concat!(env!("OUT_DIR"), "/encodings.rs"));

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

impl Encoding {
    /// Look up an encoding by label (`utf-8`, `latin1`, `us-ascii`...),
    /// ignoring case
    pub fn for_label(label: &str) -> Option<Encoding> {
        ENCODINGS.get(UncasedStr::new(label.trim())).copied()
    }

    /// Canonical label
    pub fn name(self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Ascii => "US-ASCII",
            Self::Latin1 => "ISO-8859-1",
        }
    }

    /// Decode one line. `first` marks the first line of a stream.
    pub(crate) fn decode(self, bytes: &[u8], first: bool) -> Result<String, Error> {
        match self {
            Self::Utf8 => {
                let bytes = if first {
                    bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes)
                } else {
                    bytes
                };
                str::from_utf8(bytes)
                    .map(str::to_owned)
                    .map_err(|_| Error::MalformedLine(self, None))
            }
            Self::Ascii if bytes.is_ascii() => {
                // ASCII is a subset of UTF-8
                Ok(bytes.iter().map(|&b| b as char).collect())
            }
            Self::Ascii => Err(Error::MalformedLine(self, None)),
            Self::Latin1 => Ok(bytes.iter().map(|&b| b as char).collect()),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Encoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::for_label(s).ok_or_else(|| Error::UnknownEncoding(s.to_owned()))
    }
}

#[cfg(test)]
mod test {
    use super::Encoding;
    use crate::Error;

    #[test]
    fn test_for_label() {
        assert_eq!(Encoding::for_label("UTF-8"), Some(Encoding::Utf8));
        assert_eq!(Encoding::for_label("utf8"), Some(Encoding::Utf8));
        assert_eq!(Encoding::for_label("Latin1"), Some(Encoding::Latin1));
        assert_eq!(Encoding::for_label(" iso-8859-1 "), Some(Encoding::Latin1));
        assert_eq!(Encoding::for_label("US-ASCII"), Some(Encoding::Ascii));
        assert_eq!(Encoding::for_label("ebcdic"), None);
        assert!(matches!(
            "koi8-r".parse::<Encoding>(),
            Err(Error::UnknownEncoding(label)) if label == "koi8-r"
        ));
        assert_eq!(Encoding::default().to_string(), "UTF-8");
    }

    #[test]
    fn test_decode() {
        let utf8 = Encoding::Utf8;
        assert_eq!(utf8.decode("été".as_bytes(), false).unwrap(), "été");
        assert_eq!(utf8.decode(b"\xEF\xBB\xBFa,b", true).unwrap(), "a,b");
        assert_eq!(utf8.decode(b"\xEF\xBB\xBFa", false).unwrap(), "\u{feff}a");
        assert!(matches!(
            utf8.decode(b"\xE9t\xE9", false),
            Err(Error::MalformedLine(Encoding::Utf8, None))
        ));
        assert_eq!(Encoding::Latin1.decode(b"\xE9t\xE9", false).unwrap(), "été");
        assert_eq!(Encoding::Ascii.decode(b"abc", false).unwrap(), "abc");
        assert!(Encoding::Ascii.decode(b"\xE9", false).is_err());
    }
}

//! Line sources feeding the pipeline

mod buffered;
mod encoding;
mod scan;
mod stream;

use memchr::memchr2;

use crate::Error;

pub use buffered::BufferedLineSource;
pub use encoding::Encoding;
pub use scan::LineReader;
pub use stream::StreamLineSource;

/// Yields one line of text at a time, without its terminator.
///
/// A source is owned by a single pipeline for its whole life.
pub trait LineSource {
    /// Advance to the next line.
    /// Return `None` once the input is exhausted or the source released.
    /// Return any error that occurs while reading the input.
    fn next_line(&mut self) -> Result<Option<String>, Error>;

    /// Total number of lines, when known up front
    fn line_count_hint(&self) -> Option<usize> {
        None
    }

    /// Free the backing medium. Safe to call more than once.
    fn release(&mut self);
}

impl<S: LineSource + ?Sized> LineSource for &mut S {
    fn next_line(&mut self) -> Result<Option<String>, Error> {
        (**self).next_line()
    }

    fn line_count_hint(&self) -> Option<usize> {
        (**self).line_count_hint()
    }

    fn release(&mut self) {
        (**self).release()
    }
}

impl<S: LineSource + ?Sized> LineSource for Box<S> {
    fn next_line(&mut self) -> Result<Option<String>, Error> {
        (**self).next_line()
    }

    fn line_count_hint(&self) -> Option<usize> {
        (**self).line_count_hint()
    }

    fn release(&mut self) {
        (**self).release()
    }
}

/// Split `text` on `\r\n`, `\r` or `\n`, each one a single break.
///
/// Empty text is one empty line, and a trailing terminator is followed
/// by an empty last line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    while let Some(i) = memchr2(b'\r', b'\n', &bytes[start..]) {
        let end = start + i;
        lines.push(&text[start..end]);
        start = if bytes[end] == b'\r' && bytes.get(end + 1) == Some(&b'\n') {
            end + 2
        } else {
            end + 1
        };
    }
    lines.push(&text[start..]);
    lines
}

#[cfg(test)]
mod test {
    use super::split_lines;

    #[test]
    fn test_split_lines() {
        assert_eq!(split_lines("a\nb\rc\r\nd"), ["a", "b", "c", "d"]);
        assert_eq!(split_lines("a\n\rb"), ["a", "", "b"]);
        assert_eq!(split_lines("a\r\n\r\nb"), ["a", "", "b"]);
    }

    #[test]
    fn test_split_edges() {
        assert_eq!(split_lines(""), [""]);
        assert_eq!(split_lines("a\n"), ["a", ""]);
        assert_eq!(split_lines("\r\n"), ["", ""]);
        assert_eq!(split_lines("été\r日本"), ["été", "日本"]);
    }
}

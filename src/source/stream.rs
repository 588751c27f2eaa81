use log::debug;

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::source::{Encoding, LineReader, LineSource};
use crate::Error;

/// Lines decoded one at a time from a byte stream
///
/// The line count is unknown up front. Releasing drops the stream, which
/// closes it; reads after release see the end of input.
pub struct StreamLineSource<R> {
    reader: Option<LineReader<R>>,
    encoding: Encoding,
    /// number of lines read so far
    line: u64,
}

impl<R: Read> StreamLineSource<R> {
    /// Read UTF-8 lines from `inner`.
    pub fn new(inner: R) -> StreamLineSource<R> {
        Self::with_encoding(inner, Encoding::default())
    }

    /// Read lines from `inner` in `encoding`.
    pub fn with_encoding(inner: R, encoding: Encoding) -> StreamLineSource<R> {
        StreamLineSource {
            reader: Some(LineReader::new(inner)),
            encoding,
            line: 0,
        }
    }

    /// Source encoding
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Whether the stream has been released
    pub fn is_released(&self) -> bool {
        self.reader.is_none()
    }
}

impl StreamLineSource<File> {
    /// Open the file at `path`.
    pub fn open<P: AsRef<Path>>(
        path: P,
        encoding: Encoding,
    ) -> Result<StreamLineSource<File>, Error> {
        let file = File::open(path)?;
        Ok(Self::with_encoding(file, encoding))
    }
}

impl<R: Read> LineSource for StreamLineSource<R> {
    fn next_line(&mut self) -> Result<Option<String>, Error> {
        let reader = match self.reader {
            Some(ref mut reader) => reader,
            None => return Ok(None),
        };
        let bytes = match reader.next_line()? {
            Some(bytes) => bytes,
            None => return Ok(None),
        };
        self.line += 1;
        let text = self
            .encoding
            .decode(bytes, self.line == 1)
            .map_err(|err| err.at_line(self.line))?;
        Ok(Some(text))
    }

    fn release(&mut self) {
        if self.reader.take().is_some() {
            debug!(target: "source", "stream released after {} line(s)", self.line);
        }
    }
}

impl<R> fmt::Debug for StreamLineSource<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamLineSource")
            .field("reader", &self.reader)
            .field("encoding", &self.encoding)
            .field("line", &self.line)
            .finish()
    }
}

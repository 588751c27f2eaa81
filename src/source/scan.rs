//! Line splitting over a reader, adapted from a growable-buffer token scanner.

use log::debug;
use memchr::memchr2;

use std::fmt;
use std::io::{self, Read};

/// Like a `BufReader` but with a growable buffer.
/// Successive calls to the `next_line` method will step through the lines
/// of a stream, a line being terminated by `\n`, `\r\n` or `\r`.
///
/// Reading stops unrecoverably at EOF or the first I/O error.
pub struct LineReader<R> {
    /// The reader provided by the client.
    inner: R,
    buf: Vec<u8>,
    pos: usize,
    cap: usize,
    eof: bool,
}

impl<R: Read> LineReader<R> {
    /// Wrap `inner` with a default 8 KiB buffer.
    pub fn new(inner: R) -> LineReader<R> {
        Self::with_capacity(inner, 8192)
    }

    fn with_capacity(inner: R, capacity: usize) -> LineReader<R> {
        LineReader {
            inner,
            buf: vec![0; capacity.max(1)],
            pos: 0,
            cap: 0,
            eof: false,
        }
    }

    /// Unwrap the reader. Buffered data is lost.
    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Advance to the next line.
    /// Return the line without its terminator.
    /// Return `None` when the end of the input is reached.
    /// Return any error that occurs while reading the input.
    pub fn next_line(&mut self) -> io::Result<Option<&[u8]>> {
        // bytes already searched for a terminator
        let mut searched = 0;
        loop {
            // (line length, bytes to consume)
            let line = {
                let data = &self.buf[self.pos..self.cap];
                match memchr2(b'\r', b'\n', &data[searched..]) {
                    Some(i) => {
                        let i = searched + i;
                        match data.get(i + 1) {
                            _ if data[i] == b'\n' => Some((i, i + 1)),
                            Some(&b'\n') => Some((i, i + 2)),
                            Some(_) => Some((i, i + 1)),
                            None if self.eof => Some((i, i + 1)),
                            None => {
                                // a lone `\r` may be the first half of `\r\n`
                                searched = i;
                                None
                            }
                        }
                    }
                    None if self.eof => {
                        if data.is_empty() {
                            return Ok(None);
                        }
                        // last line without terminator
                        Some((data.len(), data.len()))
                    }
                    None => {
                        searched = data.len();
                        None
                    }
                }
            };
            if let Some((len, amt)) = line {
                let start = self.pos;
                self.consume(amt);
                return Ok(Some(&self.buf[start..start + len]));
            }
            self.fill_buf()?;
        }
    }

    /// Consume `amt` bytes of the buffer.
    fn consume(&mut self, amt: usize) {
        debug_assert!(self.pos + amt <= self.cap);
        self.pos += amt;
    }

    /// Read more data, keeping unconsumed bytes at the start of the buffer.
    fn fill_buf(&mut self) -> io::Result<()> {
        // First, shift data to beginning of buffer if there's lots of empty space
        // or space is needed.
        if self.pos > 0 && (self.cap == self.buf.len() || self.pos > self.buf.len() / 2) {
            self.buf.copy_within(self.pos..self.cap, 0);
            self.cap -= self.pos;
            self.pos = 0;
        }
        // Is the buffer full? If so, resize.
        if self.cap == self.buf.len() {
            let len = self.buf.len() * 2;
            debug!(target: "line_reader", "grow buffer to {}", len);
            self.buf.resize(len, 0);
        }
        // Finally we can read some input.
        loop {
            match self.inner.read(&mut self.buf[self.cap..]) {
                Ok(0) => {
                    self.eof = true;
                    break;
                }
                Ok(n) => {
                    self.cap += n;
                    break;
                }
                Err(ref e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => {
                    return Err(e);
                }
            }
        }
        Ok(())
    }
}

impl<R> fmt::Debug for LineReader<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineReader")
            .field("pos", &self.pos)
            .field("cap", &self.cap)
            .field("eof", &self.eof)
            .finish()
    }
}

//! Drives a line processor over a line source.
pub use fallible_iterator::FallibleIterator;
use log::debug;

use crate::source::LineSource;
use crate::tokenizer::{LineProcessor, Record};
use crate::Error;

/// Skips leading lines, then processes every remaining line.
///
/// The source is released once per run: at the end of input, on the first
/// error, or when the run is abandoned.
#[derive(Debug)]
pub struct Pipeline<S, P> {
    source: S,
    processor: P,
    skip: usize,
}

impl<S: LineSource, P: LineProcessor> Pipeline<S, P> {
    /// Process every line of `source` with `processor`
    pub fn new(source: S, processor: P) -> Pipeline<S, P> {
        Pipeline {
            source,
            processor,
            skip: 0,
        }
    }

    /// Discard the first `skip` lines, e.g. a header.
    pub fn skip(mut self, skip: usize) -> Self {
        self.skip = skip;
        self
    }

    /// Lines discarded before processing
    pub fn skipped(&self) -> usize {
        self.skip
    }

    /// Process all lines, in order.
    ///
    /// I/O errors are returned after the source has been released.
    pub fn process(&mut self) -> Result<Vec<Record>, Error> {
        let capacity = self
            .source
            .line_count_hint()
            .map_or(0, |hint| hint.saturating_sub(self.skip));
        let mut records = Vec::with_capacity(capacity);
        let mut iter = self.records();
        while let Some(record) = iter.next()? {
            records.push(record);
        }
        debug!(target: "pipeline", "{} record(s)", records.len());
        Ok(records)
    }

    /// Lazily process lines, one record per call to `next`.
    ///
    /// Dropping the iterator before the end releases the source.
    pub fn records(&mut self) -> Records<'_, S, P> {
        Records {
            source: &mut self.source,
            processor: &mut self.processor,
            skip: self.skip,
            released: false,
        }
    }

    /// Source and processor
    pub fn into_inner(self) -> (S, P) {
        (self.source, self.processor)
    }
}

/// Records of a pipeline run
#[derive(Debug)]
pub struct Records<'p, S: LineSource, P> {
    source: &'p mut S,
    processor: &'p mut P,
    /// leading lines still to discard
    skip: usize,
    released: bool,
}

impl<S: LineSource, P> Records<'_, S, P> {
    fn release(&mut self) {
        if !self.released {
            self.released = true;
            self.source.release();
        }
    }

    fn next_line(&mut self) -> Result<Option<String>, Error> {
        if self.released {
            return Ok(None);
        }
        match self.source.next_line() {
            Ok(None) => {
                self.release();
                Ok(None)
            }
            Err(err) => {
                self.release();
                Err(err)
            }
            line => line,
        }
    }
}

impl<S: LineSource, P: LineProcessor> FallibleIterator for Records<'_, S, P> {
    type Item = Record;
    type Error = Error;

    fn next(&mut self) -> Result<Option<Record>, Error> {
        while self.skip > 0 {
            self.skip -= 1;
            // end of input while skipping is not an error
            self.next_line()?;
        }
        Ok(self
            .next_line()?
            .map(|line| self.processor.process(&line)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.released {
            return (0, Some(0));
        }
        (0, None)
    }
}

impl<S: LineSource, P> Drop for Records<'_, S, P> {
    fn drop(&mut self) {
        self.release();
    }
}

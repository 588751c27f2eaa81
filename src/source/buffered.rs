use crate::source::{split_lines, LineSource};
use crate::Error;

/// Lines of an in-memory text, split once up front
#[derive(Clone, Debug)]
pub struct BufferedLineSource<'input> {
    lines: Vec<&'input str>,
    /// index of the next line
    pos: usize,
}

impl<'input> BufferedLineSource<'input> {
    /// Split `text` on `\r\n`, `\r` or `\n`.
    pub fn new(text: &'input str) -> BufferedLineSource<'input> {
        BufferedLineSource {
            lines: split_lines(text),
            pos: 0,
        }
    }

    /// Lines not read yet
    pub fn remaining(&self) -> &[&'input str] {
        &self.lines[self.pos..]
    }
}

impl LineSource for BufferedLineSource<'_> {
    fn next_line(&mut self) -> Result<Option<String>, Error> {
        let line = self.lines.get(self.pos).map(|line| (*line).to_owned());
        if line.is_some() {
            self.pos += 1;
        }
        Ok(line)
    }

    fn line_count_hint(&self) -> Option<usize> {
        Some(self.lines.len())
    }

    fn release(&mut self) {}
}

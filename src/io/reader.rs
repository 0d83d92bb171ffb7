use std::io::{BufRead, Lines};

use super::error::Error;

/// Splits a line stream into blocks separated by divider lines.
///
/// A block is the list of non-empty, trimmed lines between two dividers.
/// Reaching the end of the stream is an error unless lenient EOF handling
/// has been switched on, which the assembler only does where the file is
/// allowed to end.
///
/// One block of pushback is supported: after [`keep`](Self::keep) the next
/// [`advance`](Self::advance) yields the current block again.
pub struct BlockReader<R> {
    lines: Lines<R>,
    lines_read: usize,
    block: Vec<String>,
    start_line: usize,
    end_line: usize,
    eof: bool,
    replay: bool,
    lenient_eof: bool,
}

impl<R: BufRead> BlockReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            lines_read: 0,
            block: Vec::new(),
            start_line: 1,
            end_line: 1,
            eof: false,
            replay: false,
            lenient_eof: false,
        }
    }

    /// Moves to the next block, or replays the kept one.
    pub fn advance(&mut self) -> Result<(), Error> {
        if self.replay {
            self.replay = false;
            return Ok(());
        }

        if self.eof {
            self.block.clear();
            self.start_line = self.lines_read;
            self.end_line = self.lines_read;
            return Err(self.eof_error());
        }

        self.block.clear();
        self.start_line = self.lines_read + 1;
        self.end_line = self.start_line;

        loop {
            let Some(line) = self.lines.next() else {
                self.eof = true;
                break;
            };
            let line = line?;
            self.lines_read += 1;

            if is_divider(&line) {
                break;
            }

            let trimmed = line.trim();
            if !trimmed.is_empty() {
                self.block.push(trimmed.to_string());
            }
            self.end_line = self.lines_read;
        }

        if self.eof && !self.lenient_eof {
            return Err(self.eof_error());
        }

        Ok(())
    }

    /// Marks the current block to be returned again by the next
    /// [`advance`](Self::advance).
    #[inline]
    pub fn keep(&mut self) {
        self.replay = true;
    }

    /// Reads the next block and hands it to `test`.
    ///
    /// If `test` rejects the block (returns `None`) it is kept for the next
    /// [`advance`](Self::advance).
    pub fn peek<T>(
        &mut self,
        test: impl FnOnce(&[String]) -> Option<T>,
    ) -> Result<Option<T>, Error> {
        self.advance()?;
        let accepted = test(&self.block);
        if accepted.is_none() {
            self.keep();
        }
        Ok(accepted)
    }

    #[inline]
    pub fn block(&self) -> &[String] {
        &self.block
    }

    /// Whether the end of the stream has been reached.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.eof
    }

    /// Whether a kept block is waiting to be replayed.
    #[inline]
    pub fn has_pending(&self) -> bool {
        self.replay
    }

    pub fn set_lenient_eof(&mut self, lenient: bool) {
        self.lenient_eof = lenient;
    }

    /// 1-based, inclusive line range of the current block.
    #[inline]
    pub fn line_range(&self) -> (usize, usize) {
        (self.start_line, self.end_line)
    }

    /// Builds a parse error pointing at the current block.
    pub fn error(&self, details: impl Into<String>) -> Error {
        Error::parse(self.start_line, self.end_line, details, self.block.join(" "))
    }

    pub(crate) fn eof_error(&self) -> Error {
        Error::UnexpectedEof {
            start_line: self.start_line,
            end_line: self.end_line,
            found: self.block.join(" "),
        }
    }
}

/// A divider is a line of one repeated `=`, `-` or `*`, optionally padded
/// with whitespace.
pub fn is_divider(line: &str) -> bool {
    let trimmed = line.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first @ ('=' | '-' | '*')) => chars.all(|c| c == first),
        _ => false,
    }
}

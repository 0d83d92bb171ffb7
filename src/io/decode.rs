//! Typed decoding of the reader's blocks.
//!
//! Each `decode_*`/`consume_*` call advances exactly one block and converts
//! it, failing with a parse error that points at that block.

use std::io::BufRead;
use std::str::FromStr;

use regex::Regex;

use super::error::Error;
use super::reader::BlockReader;
use crate::model::matrix::Matrix;

impl<R: BufRead> BlockReader<R> {
    pub fn decode_string(&mut self) -> Result<String, Error> {
        self.advance()?;
        self.single_line().map(str::to_owned)
    }

    pub fn decode_usize(&mut self) -> Result<usize, Error> {
        self.advance()?;
        let line = self.single_line()?;
        line.parse()
            .map_err(|_| self.error("expected non-negative integer"))
    }

    pub fn decode_float(&mut self) -> Result<f64, Error> {
        self.advance()?;
        let line = self.single_line()?;
        line.parse().map_err(|_| self.error("expected decimal number"))
    }

    /// A single line of exactly three decimal numbers.
    pub fn decode_vector(&mut self) -> Result<[f64; 3], Error> {
        self.advance()?;
        let line = self.single_line()?;
        let values = parse_tokens::<f64>(line)
            .filter(|v| v.len() == 3)
            .ok_or_else(|| self.error("expected vector of three decimal numbers"))?;
        Ok([values[0], values[1], values[2]])
    }

    /// One matrix row per line; every row must have the same length.
    pub fn decode_matrix<T: FromStr>(&mut self, what: &str) -> Result<Matrix<T>, Error> {
        self.advance()?;
        let rows = self
            .block()
            .iter()
            .map(|line| parse_tokens::<T>(line))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| self.error(format!("expected matrix of {what}")))?;
        Matrix::from_rows(rows).ok_or_else(|| {
            self.error(format!(
                "expected matrix of {what} with rows of equal length"
            ))
        })
    }

    /// One decimal number per line.
    pub fn decode_column(&mut self) -> Result<Vec<f64>, Error> {
        self.advance()?;
        self.block()
            .iter()
            .map(|line| line.parse::<f64>().ok())
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| self.error("expected one decimal number per line"))
    }

    /// All whitespace-separated tokens of the block, across lines.
    pub fn decode_strings(&mut self) -> Result<Vec<String>, Error> {
        self.advance()?;
        Ok(self.tokens().map(str::to_owned).collect())
    }

    pub fn decode_usizes(&mut self) -> Result<Vec<usize>, Error> {
        self.advance()?;
        self.tokens()
            .map(|t| t.parse().ok())
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| self.error("expected list of non-negative integers"))
    }

    pub fn decode_floats(&mut self) -> Result<Vec<f64>, Error> {
        self.advance()?;
        self.tokens()
            .map(|t| t.parse().ok())
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| self.error("expected list of decimal numbers"))
    }

    /// One `name count` pair per line.
    pub fn decode_type_counts(&mut self) -> Result<Vec<(String, usize)>, Error> {
        self.advance()?;
        self.block()
            .iter()
            .map(|line| {
                let mut parts = line.split_whitespace();
                match (parts.next(), parts.next(), parts.next()) {
                    (Some(name), Some(count), None) => {
                        count.parse().ok().map(|count| (name.to_owned(), count))
                    }
                    _ => None,
                }
            })
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| self.error("expected list of string-integer tuples"))
    }

    /// Consumes a block that must consist of exactly `expected`.
    pub fn consume_header(&mut self, expected: &str) -> Result<(), Error> {
        self.advance()?;
        if is_header(self.block(), expected) {
            Ok(())
        } else {
            Err(self.error(format!("expected to find {expected:?}")))
        }
    }

    /// Consumes the next block if it is exactly `expected`; otherwise keeps
    /// it and returns `false`.
    pub fn peek_header(&mut self, expected: &str) -> Result<bool, Error> {
        self.peek(|block| is_header(block, expected).then_some(()))
            .map(|found| found.is_some())
    }

    /// Consumes a single-line block fully matching `pattern` and returns
    /// its first capture group.
    pub fn consume_captured(&mut self, pattern: &Regex) -> Result<String, Error> {
        self.advance()?;
        match self.block() {
            [line] => capture(pattern, line).ok_or_else(|| {
                self.error(format!("expected pattern {:?}", pattern.as_str()))
            }),
            _ => Err(self.error("expected single line")),
        }
    }

    /// Like [`consume_captured`](Self::consume_captured), but keeps the
    /// block and returns `None` when it does not match.
    pub fn peek_captured(&mut self, pattern: &Regex) -> Result<Option<String>, Error> {
        self.peek(|block| match block {
            [line] => capture(pattern, line),
            _ => None,
        })
    }

    fn single_line(&self) -> Result<&str, Error> {
        match self.block() {
            [line] => Ok(line.as_str()),
            _ => Err(self.error("expected single line")),
        }
    }

    fn tokens(&self) -> impl Iterator<Item = &str> {
        self.block().iter().flat_map(|line| line.split_whitespace())
    }
}

fn parse_tokens<T: FromStr>(line: &str) -> Option<Vec<T>> {
    line.split_whitespace().map(|t| t.parse().ok()).collect()
}

fn is_header(block: &[String], expected: &str) -> bool {
    matches!(block, [line] if line == expected)
}

fn capture(pattern: &Regex, line: &str) -> Option<String> {
    pattern
        .captures(line)
        .filter(|caps| {
            caps.get(0)
                .is_some_and(|m| m.start() == 0 && m.end() == line.len())
        })
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_owned())
}

//! Logical-line CSV reading.
//!
//! A logical line is one complete CSV record. When a quoted field embeds a
//! newline, the record spans several physical lines; the reader stitches them
//! back together by tracking quote parity: as long as the running count of
//! `"` characters is odd, the record is still open and the next physical line
//! belongs to it.

use std::io::{self, BufRead};

/// The field delimiter used by the observed export format.
pub const DELIMITER: char = ',';

/// Reads logical CSV lines from any buffered text source.
pub struct LogicalLineReader<R> {
    inner: R,
}

impl<R: BufRead> LogicalLineReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Returns the next logical line, or `None` at end of input.
    ///
    /// If the input ends while a quote is still open, the accumulated text is
    /// returned as-is; the malformed trailing record is passed through rather
    /// than rejected.
    pub fn next_logical_line(&mut self) -> io::Result<Option<String>> {
        let mut line = match self.read_physical_line()? {
            Some(line) => line,
            None => return Ok(None),
        };

        let mut quote_count = count_quotes(&line);
        while quote_count % 2 != 0 {
            match self.read_physical_line()? {
                Some(next) => {
                    quote_count += count_quotes(&next);
                    line.push('\n');
                    line.push_str(&next);
                }
                None => break,
            }
        }
        Ok(Some(line))
    }

    fn read_physical_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if self.inner.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        // Strip the trailing line terminator; mid-record newlines are
        // re-inserted explicitly when joining.
        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') {
                buf.pop();
            }
        }
        Ok(Some(buf))
    }
}

impl<R: BufRead> Iterator for LogicalLineReader<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_logical_line().transpose()
    }
}

/// Splits a logical line on the delimiter, preserving every position
/// including empty trailing fields. Quotes are not stripped and fields are
/// not trimmed; downstream consumers decide what to do with each value.
pub fn split_fields(line: &str, delimiter: char) -> Vec<String> {
    line.split(delimiter).map(str::to_string).collect()
}

fn count_quotes(s: &str) -> usize {
    s.chars().filter(|&c| c == '"').count()
}

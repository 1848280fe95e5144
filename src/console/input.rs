//! Scanner-style integer tokenization over buffered input.

use std::collections::VecDeque;
use std::io::BufRead;

/// Errors produced while reading input tokens.
#[derive(Debug, derive_more::Display, derive_more::From)]
pub enum InputError {
    /// The underlying reader failed.
    #[display("input read failed: {_0}")]
    Io(std::io::Error),

    /// A token was read but is not an integer.
    #[display("not a number: {_0:?}")]
    #[from(ignore)]
    Malformed(String),
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Io(e) => Some(e),
            InputError::Malformed(_) => None,
        }
    }
}

/// Reads whitespace-separated integer tokens from any [`BufRead`].
///
/// Lines are split on whitespace and buffered, so several tokens on one
/// line are consumed one call at a time, mirroring scanner-style input.
#[derive(Debug)]
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    /// Wraps a reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> Result<Option<String>, InputError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }

    /// Reads the next integer token.
    ///
    /// Returns `Ok(None)` at end of input.
    ///
    /// # Errors
    ///
    /// [`InputError::Malformed`] when the next token is not an integer
    /// (the token is consumed), [`InputError::Io`] when the reader fails.
    pub fn next_int(&mut self) -> Result<Option<i32>, InputError> {
        match self.next_token()? {
            None => Ok(None),
            Some(token) => token
                .parse::<i32>()
                .map(Some)
                .map_err(|_| InputError::Malformed(token)),
        }
    }
}

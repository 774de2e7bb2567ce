//! Lazy tokenization of raws streams.

use std::io::BufRead;

use codepage_437::{CP437_CONTROL, FromCp437};
use glossa_foundation::Result;

use crate::token::Token;

/// Yields one [`Token`] per bracketed segment of a byte stream.
///
/// The sequence is forward-only. Running out of input while looking for
/// either bracket ends it normally; any other read failure is yielded once
/// as an error and then the tokenizer stays exhausted.
///
/// Bracketed text is read as UTF-8 if it is valid UTF-8, and as code page
/// 437 otherwise.
pub struct RawsTokenizer<R> {
    reader: R,
    buf: Vec<u8>,
    count: usize,
    done: bool,
}

impl<R: BufRead> RawsTokenizer<R> {
    /// Creates a tokenizer over the given reader.
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            count: 0,
            done: false,
        }
    }

    /// Number of tokens produced so far.
    #[must_use]
    pub fn tokens_read(&self) -> usize {
        self.count
    }

    /// Reads through `delim`, leaving everything before it in `buf`.
    ///
    /// Returns `false` if the stream ended first.
    fn read_through(&mut self, delim: u8) -> std::io::Result<bool> {
        self.buf.clear();
        self.reader.read_until(delim, &mut self.buf)?;
        if self.buf.last() == Some(&delim) {
            self.buf.pop();
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn next_token(&mut self) -> Result<Option<Token>> {
        if !self.read_through(b'[')? || !self.read_through(b']')? {
            return Ok(None);
        }

        self.count += 1;
        Ok(Some(Token::parse(&decode(&self.buf), self.count)))
    }
}

fn decode(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => String::from_cp437(bytes.to_vec(), &CP437_CONTROL),
    }
}

impl<R: BufRead> Iterator for RawsTokenizer<R> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<R: BufRead> std::iter::FusedIterator for RawsTokenizer<R> {}

//! Offset-tracking scanner over template source text

use regex::Regex;

use crate::error::ParseError;

/// Byte cursor over the input with token helpers
///
/// Productions backtrack by saving `pos()` and calling `restore()`; the
/// cursor itself never rewinds on a failed match.
pub(super) struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn restore(&mut self, pos: usize) {
        self.pos = pos;
    }

    pub fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Advance past one char and return it.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    pub fn starts_with(&self, token: &str) -> bool {
        self.rest().starts_with(token)
    }

    /// Advance by `len` bytes; `len` must land on a char boundary.
    pub fn advance(&mut self, len: usize) {
        debug_assert!(self.input.is_char_boundary(self.pos + len));
        self.pos += len;
    }

    /// Consume `token` if it is next; report whether it was.
    pub fn eat(&mut self, token: &str) -> bool {
        if self.starts_with(token) {
            self.pos += token.len();
            true
        } else {
            false
        }
    }

    pub fn eat_char(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    pub fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.pos += c.len_utf8();
            } else {
                break;
            }
        }
    }

    /// Match an `\A`-anchored regex at the current position and consume it.
    pub fn take(&mut self, re: &Regex) -> Option<&'a str> {
        let found = re.find(self.rest())?;
        debug_assert_eq!(found.start(), 0);
        let text = &self.rest()[..found.end()];
        if text.is_empty() {
            return None;
        }
        self.pos += text.len();
        Some(text)
    }

    /// Advance to just past `token`, returning false when it never appears.
    pub fn skip_past(&mut self, token: &str) -> bool {
        match self.rest().find(token) {
            Some(idx) => {
                self.pos += idx + token.len();
                true
            }
            None => false,
        }
    }

    /// Advance to the next `\n` (which stays unconsumed) or to end of input.
    pub fn skip_to_line_end(&mut self) {
        match self.rest().find('\n') {
            Some(idx) => self.pos += idx,
            None => self.pos = self.input.len(),
        }
    }

    pub fn error(&self, expected: impl Into<String>) -> ParseError {
        ParseError::Syntax {
            offset: self.pos,
            expected: expected.into(),
        }
    }
}

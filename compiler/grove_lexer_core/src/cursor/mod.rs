//! Character cursor with line/column tracking and one-character rollback.
//!
//! The cursor walks a `&str` one `char` at a time. Every single-character
//! [`advance`](CharacterSource::advance) remembers the state it started
//! from, so exactly one step can be undone with
//! [`rollback_one`](CharacterSource::rollback_one). Bulk moves
//! ([`Cursor::eat_until_line_end`], [`Cursor::eat_past`], [`Cursor::reset`])
//! clear that memory.

use grove_ir::LineCol;

/// Source of code points with bounded lookahead and a one-character
/// pushback.
pub trait CharacterSource {
    /// Character `k` positions ahead; `la(1)` is the next unread one.
    fn la(&self, k: usize) -> Option<char>;

    /// The most recently consumed character.
    fn prev(&self) -> Option<char>;

    /// Consume and return the next character.
    fn advance(&mut self) -> Option<char>;

    /// Undo the last [`advance`](Self::advance). Returns `false` when there
    /// is nothing to undo.
    fn rollback_one(&mut self) -> bool;

    /// Byte offset of the next unread character.
    fn pos(&self) -> u32;

    /// Line and column of the next unread character.
    fn line_col(&self) -> LineCol;

    #[inline]
    fn current(&self) -> Option<char> {
        self.la(1)
    }

    #[inline]
    fn is_eof(&self) -> bool {
        self.la(1).is_none()
    }

    /// Consume `c` if it is next.
    fn eat(&mut self, c: char) -> bool {
        if self.la(1) == Some(c) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Advance while `pred` holds for the next character.
    fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.la(1).is_some_and(&pred) {
            self.advance();
        }
    }
}

/// Saved cursor state, used for backtracking and rollback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mark {
    pos: u32,
    line: u32,
    column: u32,
    prev: Option<char>,
}

impl Mark {
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    src: &'a str,
    at: Mark,
    undo: Option<Mark>,
}

impl<'a> Cursor<'a> {
    /// Cursor at the first character of `src`.
    ///
    /// Offsets are `u32`; sources longer than `u32::MAX` bytes are not
    /// supported.
    pub fn new(src: &'a str) -> Self {
        debug_assert!(
            u32::try_from(src.len()).is_ok(),
            "source exceeds u32::MAX bytes"
        );
        Cursor {
            src,
            at: Mark {
                pos: 0,
                line: 1,
                column: 1,
                prev: None,
            },
            undo: None,
        }
    }

    /// Unread remainder of the source.
    #[inline]
    pub fn rest(&self) -> &'a str {
        self.src.get(self.at.pos as usize..).unwrap_or("")
    }

    #[inline]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.rest().starts_with(prefix)
    }

    /// Source text between two byte offsets.
    ///
    /// Offsets come from this cursor, so they sit on character boundaries.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        self.src.get(start as usize..end as usize).unwrap_or("")
    }

    /// Source text from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.at.pos)
    }

    #[inline]
    pub fn mark(&self) -> Mark {
        self.at
    }

    /// Move back to a saved mark. Clears the rollback memory.
    #[inline]
    pub fn reset(&mut self, mark: Mark) {
        self.at = mark;
        self.undo = None;
    }

    /// Consume `prefix` if the remainder starts with it.
    pub fn eat_str(&mut self, prefix: &str) -> bool {
        if self.starts_with(prefix) {
            self.bump(prefix);
            true
        } else {
            false
        }
    }

    /// Advance to the next `\n` or `\r`, or to the end of input.
    pub fn eat_until_line_end(&mut self) {
        let rest = self.rest();
        let len = memchr::memchr2(b'\n', b'\r', rest.as_bytes()).unwrap_or(rest.len());
        self.bump(&rest[..len]);
    }

    /// Advance just past the next occurrence of `needle`.
    ///
    /// Returns `false` and leaves the cursor in place when `needle` does not
    /// occur in the rest of the input.
    pub fn eat_past(&mut self, needle: &str) -> bool {
        let rest = self.rest();
        match memchr::memmem::find(rest.as_bytes(), needle.as_bytes()) {
            Some(offset) => {
                self.bump(&rest[..offset + needle.len()]);
                true
            }
            None => false,
        }
    }

    /// Advance to the end of input.
    pub fn eat_to_end(&mut self) {
        let rest = self.rest();
        self.bump(rest);
    }

    /// True when only blanks (space, tab, vertical tab, form feed) remain
    /// before the next line end.
    pub fn only_whitespace_until_line_end(&self) -> bool {
        self.rest()
            .chars()
            .take_while(|&c| c != '\n' && c != '\r')
            .all(|c| matches!(c, ' ' | '\t' | '\x0B' | '\x0C'))
    }

    /// Move over `text`, which must be a prefix of the remainder.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "text is a slice of the source, whose length fits u32"
    )]
    fn bump(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let bytes = text.as_bytes();
        let after = self.rest().as_bytes().get(text.len()).copied();
        let mut last_break = None;
        for at in memchr::memchr2_iter(b'\n', b'\r', bytes) {
            let next = bytes.get(at + 1).copied().or(after);
            if bytes[at] == b'\n' || next != Some(b'\n') {
                self.at.line += 1;
                last_break = Some(at);
            }
        }
        match last_break {
            Some(at) => self.at.column = text[at + 1..].chars().count() as u32 + 1,
            None => self.at.column += text.chars().count() as u32,
        }
        self.at.pos += text.len() as u32;
        self.at.prev = text.chars().next_back();
        self.undo = None;
    }
}

impl CharacterSource for Cursor<'_> {
    #[inline]
    fn la(&self, k: usize) -> Option<char> {
        debug_assert!(k >= 1, "lookahead is 1-based");
        self.rest().chars().nth(k.saturating_sub(1))
    }

    #[inline]
    fn prev(&self) -> Option<char> {
        self.at.prev
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "a char is at most 4 bytes"
    )]
    fn advance(&mut self) -> Option<char> {
        let c = self.rest().chars().next()?;
        self.undo = Some(self.at);
        self.at.pos += c.len_utf8() as u32;
        if c == '\n' || (c == '\r' && self.rest().as_bytes().first() != Some(&b'\n')) {
            self.at.line += 1;
            self.at.column = 1;
        } else {
            self.at.column += 1;
        }
        self.at.prev = Some(c);
        Some(c)
    }

    fn rollback_one(&mut self) -> bool {
        match self.undo.take() {
            Some(mark) => {
                self.at = mark;
                true
            }
            None => false,
        }
    }

    #[inline]
    fn pos(&self) -> u32 {
        self.at.pos
    }

    #[inline]
    fn line_col(&self) -> LineCol {
        LineCol::new(self.at.line, self.at.column)
    }
}

//! Open-delimiter tracking.
//!
//! Every `(`, `[`, `?[` and `{` pushes a frame; every `)`, `]` and `}`
//! pops one. The stack answers a single question for the rest of the
//! scanner: are we directly inside a parenthesised or bracketed region,
//! where line ends and comments do not separate statements?
//!
//! Frames opened by a `${` splice are marked so that the `}` closing them
//! also leaves the splice.

use grove_ir::{LineCol, TokenKind};

/// Kind of an open delimiter.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Delimiter {
    Paren,
    Bracket,
    /// `?[`
    SafeIndex,
    Brace,
}

impl Delimiter {
    /// The delimiter a token opens, if any.
    pub fn opened_by(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::LParen => Some(Delimiter::Paren),
            TokenKind::LBrack => Some(Delimiter::Bracket),
            TokenKind::SafeIndex => Some(Delimiter::SafeIndex),
            TokenKind::LBrace => Some(Delimiter::Brace),
            _ => None,
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            Delimiter::Paren => "(",
            Delimiter::Bracket => "[",
            Delimiter::SafeIndex => "?[",
            Delimiter::Brace => "{",
        }
    }
}

/// One open delimiter.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct DelimiterFrame {
    pub delimiter: Delimiter,
    /// Last significant token before the opener.
    pub preceding: Option<TokenKind>,
    pub position: LineCol,
    /// Byte offset of the opener.
    pub offset: u32,
    /// Opened by `${` inside an interpolated string.
    pub splice: bool,
}

impl DelimiterFrame {
    /// Does this frame make newlines and comments insignificant?
    ///
    /// `try (...)` resources keep their line ends: they separate resource
    /// declarations.
    pub fn suppresses_newlines(&self) -> bool {
        match self.delimiter {
            Delimiter::Paren => self.preceding != Some(TokenKind::Try),
            Delimiter::Bracket | Delimiter::SafeIndex => true,
            Delimiter::Brace => false,
        }
    }
}

/// Open delimiters, innermost last.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct DelimiterStack {
    frames: Vec<DelimiterFrame>,
}

impl DelimiterStack {
    pub fn new() -> Self {
        DelimiterStack { frames: Vec::new() }
    }

    #[inline]
    pub fn push(&mut self, frame: DelimiterFrame) {
        self.frames.push(frame);
    }

    /// Close the innermost frame. Popping an empty stack returns `None`.
    #[inline]
    pub fn pop(&mut self) -> Option<DelimiterFrame> {
        self.frames.pop()
    }

    #[inline]
    pub fn top(&self) -> Option<&DelimiterFrame> {
        self.frames.last()
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Only the innermost frame counts: a `{` nested in `(` makes newlines
    /// significant again.
    pub fn is_inside_suppressing_delimiter(&self) -> bool {
        self.top().is_some_and(DelimiterFrame::suppresses_newlines)
    }
}

#[cfg(test)]
mod tests;

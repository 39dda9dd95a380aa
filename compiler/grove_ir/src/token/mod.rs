//! Tokens produced by the Groovy lexer.

mod kind;

pub use kind::TokenKind;

use std::fmt;

use crate::{LineCol, Span};

/// Output channel of a token.
///
/// Hidden tokens are still emitted so the stream stays lossless, but a
/// parser reading only the default channel never sees them.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Channel {
    #[default]
    Default,
    Hidden,
}

impl Channel {
    #[inline]
    pub fn is_hidden(self) -> bool {
        matches!(self, Channel::Hidden)
    }
}

/// Cooked value of a literal token.
///
/// Floats are stored as bits so the type keeps `Eq` and `Hash`.
#[derive(Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum LiteralValue {
    Integer(u64),
    Float(u64),
    Str(String),
    Bool(bool),
    Null,
}

impl LiteralValue {
    #[inline]
    pub fn float(value: f64) -> Self {
        LiteralValue::Float(value.to_bits())
    }

    pub fn as_integer(&self) -> Option<u64> {
        match self {
            LiteralValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            LiteralValue::Float(bits) => Some(f64::from_bits(*bits)),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            LiteralValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Debug for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Integer(v) => write!(f, "Integer({v})"),
            LiteralValue::Float(bits) => write!(f, "Float({})", f64::from_bits(*bits)),
            LiteralValue::Str(s) => write!(f, "Str({s:?})"),
            LiteralValue::Bool(b) => write!(f, "Bool({b})"),
            LiteralValue::Null => f.write_str("Null"),
        }
    }
}

/// A token with its location, channel and optional literal value.
#[derive(Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    /// Position of the first character.
    pub start: LineCol,
    /// Position just past the last character.
    pub end: LineCol,
    pub channel: Channel,
    pub value: Option<LiteralValue>,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span, start: LineCol, end: LineCol) -> Self {
        Token {
            kind,
            span,
            start,
            end,
            channel: Channel::Default,
            value: None,
        }
    }

    #[must_use]
    pub fn with_channel(mut self, channel: Channel) -> Self {
        self.channel = channel;
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: LiteralValue) -> Self {
        self.value = Some(value);
        self
    }

    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.channel.is_hidden()
    }

    /// Slice of `source` this token covers.
    ///
    /// `source` must be the text the token was produced from.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.span.to_range()).unwrap_or("")
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {} ({})", self.kind, self.span, self.start)?;
        if self.channel.is_hidden() {
            f.write_str(" hidden")?;
        }
        if let Some(value) = &self.value {
            write!(f, " = {value:?}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;

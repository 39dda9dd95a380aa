//! Shared data types for the Grove lexer.
//!
//! Everything here is plain data: spans, line/column positions, tokens and
//! comments. The scanning logic lives in `grove_lexer_core` and `grove_lexer`.

mod comment;
mod span;
pub mod token;

pub use comment::{Comment, CommentKind, CommentList};
pub use span::{LineCol, Span, SpanError};
pub use token::{Channel, LiteralValue, Token, TokenKind};

//! Context-sensitive lexer for Groovy source.
//!
//! Sits on top of `grove_lexer_core`, which only answers "what is the
//! longest lexeme here under this mode". This crate owns everything that
//! depends on scan history:
//!
//! - the mode stack for interpolated strings (`"a${b}c"`, `/x$y/`, ...)
//! - the delimiter stack that makes newlines and comments insignificant
//!   inside `(...)` and `[...]`
//! - the regex-versus-division decision for `/`
//! - number validation, keyword lookup and literal values
//! - diagnostics, strict or lenient per [`LexOptions`]
//!
//! # Entry points
//!
//! [`lex`] scans a whole source and collects the result. [`CoreScanner`]
//! is the streaming form, for callers that want tokens one at a time or
//! need [`ScanHooks`].
//!
//! The token stream is lossless: concatenating the text of every token,
//! hidden ones included, reproduces the source.

mod action;
mod comments;
mod delimiters;
mod escape;
mod hooks;
mod keywords;
mod lex_error;
mod mode_stack;
mod number;
mod options;
pub mod regex_ambiguity;
mod scanner;
mod state;

pub use delimiters::{Delimiter, DelimiterFrame, DelimiterStack};
pub use grove_lexer_core::ScanMode;
pub use hooks::{NoHooks, ScanHooks};
pub use lex_error::{LexError, LexErrorKind, NumberProblem, Unterminated};
pub use mode_stack::ModeStack;
pub use options::LexOptions;
pub use scanner::CoreScanner;
pub use state::ScanState;

use grove_diagnostic::Diagnostic;
use grove_ir::{CommentList, Token};
use tracing::debug;

/// Result of a completed scan.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LexOutput {
    /// Every token in source order, hidden ones included, ending in `Eof`.
    pub tokens: Vec<Token>,
    pub comments: CommentList,
    /// Recovered errors (lenient mode, or non-fatal ones in strict mode).
    pub diagnostics: Vec<Diagnostic>,
}

impl LexOutput {
    /// Tokens a parser sees.
    pub fn significant(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|token| !token.is_hidden())
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// A scan stopped by a fatal error in strict mode.
///
/// Keeps whatever was produced before the error.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("lexing stopped at {}: {error}", error.position)]
pub struct LexFailure {
    pub error: LexError,
    pub tokens: Vec<Token>,
    pub comments: CommentList,
    /// Every diagnostic recorded, the fatal one last.
    pub diagnostics: Vec<Diagnostic>,
}

/// Scan `source` to the end.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len(), lenient = options.lenient))]
pub fn lex(source: &str, options: LexOptions) -> Result<LexOutput, LexFailure> {
    let mut scanner = CoreScanner::new(source, options);
    let mut tokens = Vec::new();
    while let Some(result) = scanner.next_token() {
        match result {
            Ok(token) => tokens.push(token),
            Err(error) => {
                let (comments, diagnostics) = scanner.into_parts();
                return Err(LexFailure {
                    error,
                    tokens,
                    comments,
                    diagnostics: diagnostics.into_vec(),
                });
            }
        }
    }
    let (comments, diagnostics) = scanner.into_parts();
    debug!(
        tokens = tokens.len(),
        comments = comments.len(),
        diagnostics = diagnostics.len(),
        "lexed"
    );
    Ok(LexOutput {
        tokens,
        comments,
        diagnostics: diagnostics.into_vec(),
    })
}

//! Lexical errors and their conversion to diagnostics.
//!
//! Every error carries:
//! - `span`: the byte range the error points at (often a single character)
//! - `position`: 1-based line and column of the caret
//! - `kind`: what went wrong
//!
//! The caret is not always the token start. Number errors point at the
//! offending digit or underscore, and a misplaced shebang points at `#`.

use std::fmt;

use grove_diagnostic::{Diagnostic, ErrorCode};
use grove_ir::{LineCol, Span};

/// A lexical error with its location.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind}")]
pub struct LexError {
    pub span: Span,
    pub position: LineCol,
    pub kind: LexErrorKind,
}

/// What went wrong.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    #[error("{reason}")]
    MalformedNumericLiteral { reason: NumberProblem },
    #[error("Unexpected character: '{}'", escape_quote(*.0))]
    UnexpectedCharacter(char),
    #[error("Shebang comment should appear at the first line")]
    MisplacedShebang,
    /// A closing delimiter with no frame it may close.
    #[error("Unbalanced closing delimiter '{0}'")]
    UnbalancedDelimiter(char),
    #[error("Unterminated {0}")]
    UnterminatedLiteral(Unterminated),
    #[error("Invalid escape sequence '\\{0}'")]
    InvalidEscape(char),
}

/// Why a number literal was rejected.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum NumberProblem {
    #[error("Number ending with underscores is invalid")]
    TrailingUnderscore,
    #[error("Invalid octal number")]
    InvalidOctalDigit,
}

/// The construct that ran out of input or line.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Unterminated {
    String,
    InterpolatedString,
    BlockComment,
}

impl fmt::Display for Unterminated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Unterminated::String => "string literal",
            Unterminated::InterpolatedString => "interpolated string",
            Unterminated::BlockComment => "block comment",
        })
    }
}

fn escape_quote(c: char) -> String {
    if c == '\'' {
        "\\'".to_owned()
    } else {
        c.to_string()
    }
}

impl LexError {
    #[cold]
    pub fn malformed_number(span: Span, position: LineCol, reason: NumberProblem) -> Self {
        LexError {
            span,
            position,
            kind: LexErrorKind::MalformedNumericLiteral { reason },
        }
    }

    #[cold]
    pub fn unexpected_character(span: Span, position: LineCol, found: char) -> Self {
        LexError {
            span,
            position,
            kind: LexErrorKind::UnexpectedCharacter(found),
        }
    }

    #[cold]
    pub fn misplaced_shebang(span: Span, position: LineCol) -> Self {
        LexError {
            span,
            position,
            kind: LexErrorKind::MisplacedShebang,
        }
    }

    #[cold]
    pub fn unbalanced_delimiter(span: Span, position: LineCol, found: char) -> Self {
        LexError {
            span,
            position,
            kind: LexErrorKind::UnbalancedDelimiter(found),
        }
    }

    #[cold]
    pub fn unterminated(span: Span, position: LineCol, what: Unterminated) -> Self {
        LexError {
            span,
            position,
            kind: LexErrorKind::UnterminatedLiteral(what),
        }
    }

    #[cold]
    pub fn invalid_escape(span: Span, position: LineCol, escaped: char) -> Self {
        LexError {
            span,
            position,
            kind: LexErrorKind::InvalidEscape(escaped),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::UnterminatedLiteral(_) => ErrorCode::E0001,
            LexErrorKind::UnexpectedCharacter(_) => ErrorCode::E0002,
            LexErrorKind::MalformedNumericLiteral { .. } => ErrorCode::E0003,
            LexErrorKind::MisplacedShebang => ErrorCode::E0004,
            LexErrorKind::InvalidEscape(_) => ErrorCode::E0005,
            LexErrorKind::UnbalancedDelimiter(_) => ErrorCode::E0006,
        }
    }

    /// Whether strict mode stops on this error.
    ///
    /// A stray closer is left for the parser to report against the
    /// surrounding structure, so it never ends the scan.
    pub fn is_fatal(&self) -> bool {
        !matches!(self.kind, LexErrorKind::UnbalancedDelimiter(_))
    }

    /// Render as a diagnostic. `recovered` marks errors the scanner kept
    /// going after.
    pub fn to_diagnostic(&self, recovered: bool) -> Diagnostic {
        let diagnostic = Diagnostic::error(self.code())
            .with_message(self.to_string())
            .at(self.span, self.position);
        let diagnostic = match self.hint() {
            Some(hint) => diagnostic.with_note(hint),
            None => diagnostic,
        };
        if recovered {
            diagnostic.recovered()
        } else {
            diagnostic
        }
    }

    fn hint(&self) -> Option<&'static str> {
        match self.kind {
            LexErrorKind::MalformedNumericLiteral {
                reason: NumberProblem::TrailingUnderscore,
            } => Some("underscores may only separate digits"),
            LexErrorKind::MalformedNumericLiteral {
                reason: NumberProblem::InvalidOctalDigit,
            } => Some("a leading `0` makes the literal octal; octal digits are 0-7"),
            LexErrorKind::MisplacedShebang => {
                Some("a `#!` line is only allowed before any other token")
            }
            LexErrorKind::InvalidEscape(_) => Some(
                r#"valid escapes are: \b, \t, \n, \f, \r, \s, \", \', \\, \$, octal and \uXXXX"#,
            ),
            LexErrorKind::UnterminatedLiteral(Unterminated::BlockComment) => {
                Some("add the closing `*/`")
            }
            LexErrorKind::UnexpectedCharacter(_)
            | LexErrorKind::UnbalancedDelimiter(_)
            | LexErrorKind::UnterminatedLiteral(_) => None,
        }
    }
}

#[cfg(test)]
mod tests;

//! Error codes for lexer diagnostics.

use std::fmt;

/// Lexer error codes.
///
/// All lexer codes live in the `E0xxx` range.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Unterminated string literal or block comment
    E0001,
    /// Unexpected character in source
    E0002,
    /// Malformed number literal
    E0003,
    /// Shebang line after the first token
    E0004,
    /// Invalid escape sequence
    E0005,
    /// Closing delimiter without an open frame
    E0006,
}

impl ErrorCode {
    /// All error code variants, for exhaustive testing.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E0004,
        ErrorCode::E0005,
        ErrorCode::E0006,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E0005 => "E0005",
            ErrorCode::E0006 => "E0006",
        }
    }

    /// One-line description, as shown by `--explain` style lookups.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unterminated literal",
            ErrorCode::E0002 => "unexpected character",
            ErrorCode::E0003 => "malformed number literal",
            ErrorCode::E0004 => "misplaced shebang",
            ErrorCode::E0005 => "invalid escape sequence",
            ErrorCode::E0006 => "unbalanced delimiter",
        }
    }

    pub fn is_lexer_error(&self) -> bool {
        self.as_str().starts_with("E0")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E0003"`. Case-insensitive.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ErrorCode::ALL
            .iter()
            .find(|code| code.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or(())
    }
}

#[cfg(test)]
mod tests;

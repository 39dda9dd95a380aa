//! Raw lexeme tags.

use grove_ir::TokenKind;

/// What the raw matcher recognised.
///
/// Tags describe the shape of a lexeme only. Keyword lookup, literal
/// values, channels and diagnostics are decided one layer up.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum RawTag {
    /// Spaces, tabs and backslash line continuations.
    Whitespace,
    /// One `\n`, `\r\n` or `\r`.
    Newline,
    LineComment,
    BlockComment,
    Shebang,

    /// A name in the default mode; may turn out to be a keyword.
    Identifier,
    /// The hyphenated `non-sealed` keyword.
    NonSealed,
    IntegerLiteral,
    FloatLiteral,
    /// Operator or separator with a fixed spelling.
    Punct(TokenKind),

    // Complete string literals
    SingleQuoted,
    DoubleQuoted,
    TripleSingleQuoted,
    TripleDoubleQuoted,
    Slashy,
    DollarSlashy,

    // Interpolated string openers, each ending in the splice `$`
    DoubleQuotedBegin,
    TripleDoubleQuotedBegin,
    SlashyBegin,
    DollarSlashyBegin,

    // Inside an interpolated string
    /// Literal text up to and including the next splice `$`.
    StringPart,
    /// Literal text up to and including the terminator.
    StringEnd,
    /// `{` opening a braced splice.
    SpliceOpen,
    /// Bare name right after a splice `$`.
    SpliceIdentifier,
    /// `.name` following a bare splice name.
    PathPart,
    /// One character that ends a bare splice; the scanner puts it back.
    RollBackOne,

    /// String text cut short by a line end or the end of input.
    UnterminatedString,
    /// `/*` without a closing `*/`.
    UnterminatedComment,
    Eof,
}

/// A raw lexeme: tag plus length in bytes from the start position.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}

impl RawToken {
    #[inline]
    pub fn new(tag: RawTag, len: u32) -> Self {
        RawToken { tag, len }
    }
}

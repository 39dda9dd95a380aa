//! What happens after a lexeme is matched.
//!
//! [`plan`] maps a raw tag, in the mode it was matched in, to the token
//! kind it starts as and the ordered list of [`LexicalAction`]s the
//! scanner runs before emitting it. The lists are static, so the whole
//! table is data and can be read at a glance.

use grove_ir::{CommentKind, TokenKind};
use grove_lexer_core::{RawTag, ScanMode};

use crate::escape::EscapeFamily;
use crate::Unterminated;

/// One side effect of matching a lexeme.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub(crate) enum LexicalAction {
    /// Push a delimiter frame for the opener just matched.
    EnterDelimiter,
    /// Pop a delimiter frame. Closing a braced splice also leaves it.
    ExitDelimiter,
    /// `{` after a splice `$`: the type selector becomes the default mode
    /// and a splice frame opens.
    EnterSplice,
    /// Bare splice name: the type selector becomes path continuation.
    EnterPath,
    /// Enter a string body with the type selector on top of it.
    BeginString(ScanMode),
    /// A splice `$` inside a string body.
    PushTypeSelector,
    PopMode,
    /// Hidden, and not counted as a token for the shebang rule.
    Trivia,
    /// Hidden directly inside `(`, `[` or `?[`.
    HideInsideDelimiters,
    /// Hidden inside delimiters, or when code follows on the same line.
    HideBlockComment,
    CollectComment(CommentKind),
    /// Keyword, literal word, or identifier by capitalisation.
    ClassifyName,
    ValidateNumber,
    CheckShebang,
    /// Cook the string value between `open` and `close` delimiter bytes.
    CookString {
        family: EscapeFamily,
        open: u8,
        close: u8,
    },
    /// End a bare splice path by giving the last character back, or close
    /// the string outright when that character ends the input.
    RollBackOne,
    ReportUnterminated(Unterminated),
}

use LexicalAction as A;

const fn cook(family: EscapeFamily, open: u8, close: u8) -> LexicalAction {
    A::CookString {
        family,
        open,
        close,
    }
}

const NONE: &[LexicalAction] = &[];
const TRIVIA: &[LexicalAction] = &[A::Trivia];
const NEWLINE: &[LexicalAction] = &[A::HideInsideDelimiters];
const LINE_COMMENT: &[LexicalAction] = &[
    A::CollectComment(CommentKind::Line),
    A::HideInsideDelimiters,
];
const BLOCK_COMMENT: &[LexicalAction] = &[
    A::CollectComment(CommentKind::Block),
    A::HideBlockComment,
];
const SHEBANG: &[LexicalAction] = &[A::CheckShebang, A::Trivia];
const NAME: &[LexicalAction] = &[A::ClassifyName];
const NUMBER: &[LexicalAction] = &[A::ValidateNumber];
const OPEN: &[LexicalAction] = &[A::EnterDelimiter];
const CLOSE: &[LexicalAction] = &[A::ExitDelimiter];

const QUOTED: &[LexicalAction] = &[cook(EscapeFamily::Quoted, 1, 1)];
const TRIPLE_QUOTED: &[LexicalAction] = &[cook(EscapeFamily::Quoted, 3, 3)];
const SLASHY: &[LexicalAction] = &[cook(EscapeFamily::Slashy, 1, 1)];
const DOLLAR_SLASHY: &[LexicalAction] = &[cook(EscapeFamily::DollarSlashy, 2, 2)];

const DOUBLE_QUOTED_BEGIN: &[LexicalAction] = &[
    cook(EscapeFamily::Quoted, 1, 1),
    A::BeginString(ScanMode::DoubleQuoteString),
];
const TRIPLE_DOUBLE_QUOTED_BEGIN: &[LexicalAction] = &[
    cook(EscapeFamily::Quoted, 3, 1),
    A::BeginString(ScanMode::TripleDoubleQuoteString),
];
const SLASHY_BEGIN: &[LexicalAction] = &[
    cook(EscapeFamily::Slashy, 1, 1),
    A::BeginString(ScanMode::SlashyString),
];
const DOLLAR_SLASHY_BEGIN: &[LexicalAction] = &[
    cook(EscapeFamily::DollarSlashy, 2, 1),
    A::BeginString(ScanMode::DollarSlashyString),
];

const QUOTED_PART: &[LexicalAction] = &[cook(EscapeFamily::Quoted, 0, 1), A::PushTypeSelector];
const SLASHY_PART: &[LexicalAction] = &[cook(EscapeFamily::Slashy, 0, 1), A::PushTypeSelector];
const DOLLAR_SLASHY_PART: &[LexicalAction] = &[
    cook(EscapeFamily::DollarSlashy, 0, 1),
    A::PushTypeSelector,
];

const DOUBLE_QUOTED_END: &[LexicalAction] = &[cook(EscapeFamily::Quoted, 0, 1), A::PopMode];
const TRIPLE_DOUBLE_QUOTED_END: &[LexicalAction] =
    &[cook(EscapeFamily::Quoted, 0, 3), A::PopMode];
const SLASHY_END: &[LexicalAction] = &[cook(EscapeFamily::Slashy, 0, 1), A::PopMode];
const DOLLAR_SLASHY_END: &[LexicalAction] =
    &[cook(EscapeFamily::DollarSlashy, 0, 2), A::PopMode];

const SPLICE_OPEN: &[LexicalAction] = &[A::EnterSplice];
const SPLICE_NAME: &[LexicalAction] = &[A::EnterPath];
const ROLLBACK: &[LexicalAction] = &[A::RollBackOne];
const UNTERMINATED_STRING: &[LexicalAction] = &[A::ReportUnterminated(Unterminated::String)];
const UNTERMINATED_INTERPOLATION: &[LexicalAction] =
    &[A::ReportUnterminated(Unterminated::InterpolatedString)];
const UNTERMINATED_COMMENT: &[LexicalAction] =
    &[A::ReportUnterminated(Unterminated::BlockComment)];

/// Initial token kind and actions for `tag` matched under `mode`.
pub(crate) fn plan(tag: RawTag, mode: ScanMode) -> (TokenKind, &'static [LexicalAction]) {
    match tag {
        RawTag::Whitespace => (TokenKind::Whitespace, TRIVIA),
        RawTag::Newline => (TokenKind::Newline, NEWLINE),
        RawTag::LineComment => (TokenKind::LineComment, LINE_COMMENT),
        RawTag::BlockComment => (TokenKind::BlockComment, BLOCK_COMMENT),
        RawTag::Shebang => (TokenKind::Shebang, SHEBANG),

        RawTag::Identifier => (TokenKind::Identifier, NAME),
        RawTag::NonSealed => (TokenKind::NonSealed, NONE),
        RawTag::IntegerLiteral => (TokenKind::IntegerLiteral, NUMBER),
        RawTag::FloatLiteral => (TokenKind::FloatingPointLiteral, NUMBER),
        RawTag::Punct(kind) => (kind, punct(kind)),

        RawTag::SingleQuoted | RawTag::DoubleQuoted => (TokenKind::StringLiteral, QUOTED),
        RawTag::TripleSingleQuoted | RawTag::TripleDoubleQuoted => {
            (TokenKind::StringLiteral, TRIPLE_QUOTED)
        }
        RawTag::Slashy => (TokenKind::StringLiteral, SLASHY),
        RawTag::DollarSlashy => (TokenKind::StringLiteral, DOLLAR_SLASHY),

        RawTag::DoubleQuotedBegin => (TokenKind::GStringBegin, DOUBLE_QUOTED_BEGIN),
        RawTag::TripleDoubleQuotedBegin => (TokenKind::GStringBegin, TRIPLE_DOUBLE_QUOTED_BEGIN),
        RawTag::SlashyBegin => (TokenKind::GStringBegin, SLASHY_BEGIN),
        RawTag::DollarSlashyBegin => (TokenKind::GStringBegin, DOLLAR_SLASHY_BEGIN),

        RawTag::StringPart => (TokenKind::GStringPart, part(mode)),
        RawTag::StringEnd => (TokenKind::GStringEnd, end(mode)),
        RawTag::SpliceOpen => (TokenKind::LBrace, SPLICE_OPEN),
        RawTag::SpliceIdentifier => (TokenKind::Identifier, SPLICE_NAME),
        RawTag::PathPart => (TokenKind::GStringPathPart, NONE),
        RawTag::RollBackOne => (TokenKind::RollBackOne, ROLLBACK),

        RawTag::UnterminatedString if mode.is_string() => {
            (TokenKind::UnexpectedChar, UNTERMINATED_INTERPOLATION)
        }
        RawTag::UnterminatedString => (TokenKind::UnexpectedChar, UNTERMINATED_STRING),
        RawTag::UnterminatedComment => (TokenKind::UnexpectedChar, UNTERMINATED_COMMENT),
        RawTag::Eof => (TokenKind::Eof, NONE),
    }
}

fn punct(kind: TokenKind) -> &'static [LexicalAction] {
    match kind {
        TokenKind::LParen | TokenKind::LBrack | TokenKind::SafeIndex | TokenKind::LBrace => OPEN,
        TokenKind::RParen | TokenKind::RBrack | TokenKind::RBrace => CLOSE,
        _ => NONE,
    }
}

fn part(mode: ScanMode) -> &'static [LexicalAction] {
    match mode {
        ScanMode::SlashyString => SLASHY_PART,
        ScanMode::DollarSlashyString => DOLLAR_SLASHY_PART,
        _ => QUOTED_PART,
    }
}

fn end(mode: ScanMode) -> &'static [LexicalAction] {
    match mode {
        ScanMode::TripleDoubleQuoteString => TRIPLE_DOUBLE_QUOTED_END,
        ScanMode::SlashyString => SLASHY_END,
        ScanMode::DollarSlashyString => DOLLAR_SLASHY_END,
        _ => DOUBLE_QUOTED_END,
    }
}

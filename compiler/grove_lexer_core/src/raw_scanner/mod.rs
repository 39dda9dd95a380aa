//! Longest-match lexeme recognition, one rule set per [`ScanMode`].
//!
//! [`next_lexeme`] never looks at scan history. Whatever depends on earlier
//! tokens (whether `/` may open a slash literal) arrives through
//! [`MatchContext`].

mod number;
mod strings;

use grove_ir::TokenKind;

use crate::{ident, CharacterSource, Cursor, RawTag, RawToken, ScanMode};

/// Facts about the token history the raw matcher cannot see itself.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct MatchContext {
    /// `/` at this position may open a slash-delimited literal.
    pub regex_allowed: bool,
}

/// Match the longest lexeme at the cursor under `mode`'s rules.
///
/// On success the cursor sits just past the lexeme. Returns `None`, with
/// the cursor untouched, when no rule matches. At end of input the result
/// is a zero-length [`RawTag::Eof`].
pub fn next_lexeme(
    cursor: &mut Cursor<'_>,
    mode: ScanMode,
    ctx: MatchContext,
) -> Option<RawToken> {
    let start = cursor.mark();
    if cursor.is_eof() {
        return Some(RawToken::new(RawTag::Eof, 0));
    }
    let tag = match mode {
        ScanMode::Default => default_mode(cursor, ctx),
        ScanMode::DoubleQuoteString => Some(strings::double_quote_body(cursor)),
        ScanMode::TripleDoubleQuoteString => Some(strings::triple_double_quote_body(cursor)),
        ScanMode::SlashyString => Some(strings::slashy_body(cursor)),
        ScanMode::DollarSlashyString => Some(strings::dollar_slashy_body(cursor)),
        ScanMode::TypeSelector => type_selector(cursor),
        ScanMode::PathContinuation => path_continuation(cursor),
    };
    if let Some(tag) = tag {
        Some(RawToken::new(tag, cursor.pos() - start.pos()))
    } else {
        cursor.reset(start);
        None
    }
}

fn default_mode(cursor: &mut Cursor<'_>, ctx: MatchContext) -> Option<RawTag> {
    let c = cursor.current()?;
    match c {
        ' ' | '\t' => {
            eat_blanks(cursor);
            Some(RawTag::Whitespace)
        }
        '\\' if at_line_escape(cursor) => {
            eat_blanks(cursor);
            Some(RawTag::Whitespace)
        }
        '\n' => {
            cursor.advance();
            Some(RawTag::Newline)
        }
        '\r' => {
            cursor.advance();
            cursor.eat('\n');
            Some(RawTag::Newline)
        }
        '/' => Some(slash(cursor, ctx)),
        '#' if cursor.la(2) == Some('!') => {
            shebang(cursor);
            Some(RawTag::Shebang)
        }
        '\'' => Some(strings::single_quote(cursor)),
        '"' => Some(strings::double_quote(cursor)),
        '$' if cursor.la(2) == Some('/') => {
            strings::dollar_slashy(cursor).or_else(|| identifier(cursor))
        }
        '0'..='9' => Some(number::scan(cursor)),
        '!' => bang(cursor),
        _ if ident::is_start(c) => identifier(cursor),
        _ => punct(cursor),
    }
}

/// Runs of spaces, tabs and backslash-newline continuations.
fn eat_blanks(cursor: &mut Cursor<'_>) {
    loop {
        cursor.eat_while(|c| c == ' ' || c == '\t');
        if !at_line_escape(cursor) {
            break;
        }
        cursor.advance();
        if cursor.advance() == Some('\r') {
            cursor.eat('\n');
        }
    }
}

/// A `#!` line and any `#!` lines directly below it.
fn shebang(cursor: &mut Cursor<'_>) {
    loop {
        cursor.eat_until_line_end();
        let mark = cursor.mark();
        let broke = cursor.eat_str("\r\n") || cursor.eat_str("\n") || cursor.eat_str("\r");
        if !broke || !cursor.starts_with("#!") {
            cursor.reset(mark);
            return;
        }
    }
}

fn at_line_escape(cursor: &Cursor<'_>) -> bool {
    cursor.current() == Some('\\') && matches!(cursor.la(2), Some('\n' | '\r'))
}

fn slash(cursor: &mut Cursor<'_>, ctx: MatchContext) -> RawTag {
    match cursor.la(2) {
        Some('/') => {
            cursor.eat_until_line_end();
            return RawTag::LineComment;
        }
        Some('*') => {
            cursor.eat_str("/*");
            if cursor.eat_past("*/") {
                return RawTag::BlockComment;
            }
            cursor.eat_to_end();
            return RawTag::UnterminatedComment;
        }
        _ => {}
    }
    if ctx.regex_allowed {
        if let Some(tag) = strings::slashy(cursor) {
            return tag;
        }
    }
    cursor.advance();
    if cursor.eat('=') {
        RawTag::Punct(TokenKind::DivAssign)
    } else {
        RawTag::Punct(TokenKind::Div)
    }
}

/// `!in` and `!instanceof` only count when a separator follows.
fn bang(cursor: &mut Cursor<'_>) -> Option<RawTag> {
    if followed_by(cursor, "!instanceof", &[' ', '\t', '\r', '\n']) {
        cursor.eat_str("!instanceof");
        return Some(RawTag::Punct(TokenKind::NotInstanceof));
    }
    if followed_by(cursor, "!in", &[' ', '\t', '\r', '\n', '[', '(', '{']) {
        cursor.eat_str("!in");
        return Some(RawTag::Punct(TokenKind::NotIn));
    }
    punct(cursor)
}

fn followed_by(cursor: &Cursor<'_>, prefix: &str, next: &[char]) -> bool {
    cursor.starts_with(prefix)
        && cursor
            .rest()
            .get(prefix.len()..)
            .and_then(|rest| rest.chars().next())
            .is_some_and(|c| next.contains(&c))
}

fn identifier(cursor: &mut Cursor<'_>) -> Option<RawTag> {
    let start = cursor.pos();
    cursor.advance()?;
    cursor.eat_while(ident::is_continue);
    if cursor.slice_from(start) == "non" && cursor.eat_str("-sealed") {
        return Some(RawTag::NonSealed);
    }
    Some(RawTag::Identifier)
}

/// Fixed-spelling operators, longest first so the first hit is the longest
/// match. `/` and `/=` are handled by [`slash`].
const OPERATORS: &[(&str, TokenKind)] = &[
    (">>>=", TokenKind::UrshiftAssign),
    ("<..<", TokenKind::RangeExclusiveFull),
    ("...", TokenKind::Ellipsis),
    ("..<", TokenKind::RangeExclusiveRight),
    ("<..", TokenKind::RangeExclusiveLeft),
    ("??.", TokenKind::SafeChainDot),
    ("**=", TokenKind::PowerAssign),
    ("<=>", TokenKind::Spaceship),
    ("===", TokenKind::Identical),
    ("!==", TokenKind::NotIdentical),
    ("==>", TokenKind::Implies),
    ("==~", TokenKind::RegexMatch),
    ("<<=", TokenKind::LshiftAssign),
    (">>=", TokenKind::RshiftAssign),
    ("..", TokenKind::RangeInclusive),
    ("*.", TokenKind::SpreadDot),
    ("?.", TokenKind::SafeDot),
    ("?[", TokenKind::SafeIndex),
    ("?:", TokenKind::Elvis),
    ("?=", TokenKind::ElvisAssign),
    (".&", TokenKind::MethodPointer),
    ("::", TokenKind::MethodReference),
    ("=~", TokenKind::RegexFind),
    ("**", TokenKind::Power),
    ("->", TokenKind::Arrow),
    ("==", TokenKind::Equal),
    ("<=", TokenKind::Le),
    (">=", TokenKind::Ge),
    ("!=", TokenKind::NotEqual),
    ("&&", TokenKind::And),
    ("||", TokenKind::Or),
    ("++", TokenKind::Inc),
    ("--", TokenKind::Dec),
    ("+=", TokenKind::AddAssign),
    ("-=", TokenKind::SubAssign),
    ("*=", TokenKind::MulAssign),
    ("&=", TokenKind::AndAssign),
    ("|=", TokenKind::OrAssign),
    ("^=", TokenKind::XorAssign),
    ("%=", TokenKind::ModAssign),
    ("(", TokenKind::LParen),
    (")", TokenKind::RParen),
    ("{", TokenKind::LBrace),
    ("}", TokenKind::RBrace),
    ("[", TokenKind::LBrack),
    ("]", TokenKind::RBrack),
    (";", TokenKind::Semi),
    (",", TokenKind::Comma),
    (".", TokenKind::Dot),
    ("=", TokenKind::Assign),
    (">", TokenKind::Gt),
    ("<", TokenKind::Lt),
    ("!", TokenKind::Not),
    ("~", TokenKind::BitNot),
    ("?", TokenKind::Question),
    (":", TokenKind::Colon),
    ("+", TokenKind::Add),
    ("-", TokenKind::Sub),
    ("*", TokenKind::Mul),
    ("&", TokenKind::BitAnd),
    ("|", TokenKind::BitOr),
    ("^", TokenKind::Xor),
    ("%", TokenKind::Mod),
    ("@", TokenKind::At),
];

fn punct(cursor: &mut Cursor<'_>) -> Option<RawTag> {
    OPERATORS
        .iter()
        .find(|(text, _)| cursor.starts_with(text))
        .map(|&(text, kind)| {
            cursor.eat_str(text);
            RawTag::Punct(kind)
        })
}

/// Right after a splice `$`: `{` or a bare name.
fn type_selector(cursor: &mut Cursor<'_>) -> Option<RawTag> {
    let c = cursor.current()?;
    if c == '{' {
        cursor.advance();
        return Some(RawTag::SpliceOpen);
    }
    if ident::is_start_in_gstring(c) {
        cursor.advance();
        cursor.eat_while(ident::is_continue_in_gstring);
        return Some(RawTag::SpliceIdentifier);
    }
    None
}

/// After a bare splice name: `.name`, or one character to give back.
fn path_continuation(cursor: &mut Cursor<'_>) -> Option<RawTag> {
    if cursor.current() == Some('.') && cursor.la(2).is_some_and(ident::is_start_in_gstring) {
        cursor.advance();
        cursor.advance();
        cursor.eat_while(ident::is_continue_in_gstring);
        return Some(RawTag::PathPart);
    }
    cursor.advance()?;
    Some(RawTag::RollBackOne)
}

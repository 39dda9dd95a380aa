//! String-family bodies: quoted, triple-quoted, slashy and dollar-slashy.
//!
//! Each opener in the default mode either closes the literal (a complete
//! string) or stops at a splice `$` (an interpolated-string opener). Inside
//! an interpolated string the matching `*_body` function picks up the text
//! between splices.

use crate::{ident, CharacterSource, Cursor, RawTag};

enum Stop {
    Closed,
    Splice,
    Unterminated,
}

/// A splice starts at the `$` under the cursor when a name or `{` follows.
fn splice_follows(cursor: &Cursor<'_>) -> bool {
    cursor
        .la(2)
        .is_some_and(|c| c == '{' || ident::is_start_in_gstring(c))
}

/// Is the `quote` under the cursor the first of a closing triple?
///
/// A quote stays content when fewer than three quotes follow, or when it is
/// part of a longer quote run that still leaves a full terminator after it.
fn closes_triple(cursor: &Cursor<'_>, quote: char) -> bool {
    let q = |k| cursor.la(k) == Some(quote);
    let content = !q(2) || !q(3) || (q(4) && (!q(5) || !q(6)));
    !content
}

fn eat_escape(cursor: &mut Cursor<'_>) {
    cursor.advance();
    if cursor.advance() == Some('\r') {
        cursor.eat('\n');
    }
}

fn quoted_body(cursor: &mut Cursor<'_>, quote: char, triple: bool, interpolate: bool) -> Stop {
    loop {
        let Some(c) = cursor.current() else {
            return Stop::Unterminated;
        };
        match c {
            '\n' | '\r' if !triple => return Stop::Unterminated,
            '\\' => eat_escape(cursor),
            '$' if interpolate => {
                cursor.advance();
                return Stop::Splice;
            }
            _ if c == quote => {
                if !triple {
                    cursor.advance();
                    return Stop::Closed;
                }
                if closes_triple(cursor, quote) {
                    for _ in 0..3 {
                        cursor.advance();
                    }
                    return Stop::Closed;
                }
                cursor.advance();
            }
            _ => {
                cursor.advance();
            }
        }
    }
}

pub(super) fn single_quote(cursor: &mut Cursor<'_>) -> RawTag {
    if cursor.eat_str("'''") {
        return match quoted_body(cursor, '\'', true, false) {
            Stop::Closed => RawTag::TripleSingleQuoted,
            Stop::Splice | Stop::Unterminated => RawTag::UnterminatedString,
        };
    }
    cursor.advance();
    match quoted_body(cursor, '\'', false, false) {
        Stop::Closed => RawTag::SingleQuoted,
        Stop::Splice | Stop::Unterminated => RawTag::UnterminatedString,
    }
}

pub(super) fn double_quote(cursor: &mut Cursor<'_>) -> RawTag {
    if cursor.eat_str("\"\"\"") {
        return match quoted_body(cursor, '"', true, true) {
            Stop::Closed => RawTag::TripleDoubleQuoted,
            Stop::Splice => RawTag::TripleDoubleQuotedBegin,
            Stop::Unterminated => RawTag::UnterminatedString,
        };
    }
    cursor.advance();
    match quoted_body(cursor, '"', false, true) {
        Stop::Closed => RawTag::DoubleQuoted,
        Stop::Splice => RawTag::DoubleQuotedBegin,
        Stop::Unterminated => RawTag::UnterminatedString,
    }
}

pub(super) fn double_quote_body(cursor: &mut Cursor<'_>) -> RawTag {
    body_tag(quoted_body(cursor, '"', false, true))
}

pub(super) fn triple_double_quote_body(cursor: &mut Cursor<'_>) -> RawTag {
    body_tag(quoted_body(cursor, '"', true, true))
}

fn body_tag(stop: Stop) -> RawTag {
    match stop {
        Stop::Closed => RawTag::StringEnd,
        Stop::Splice => RawTag::StringPart,
        Stop::Unterminated => RawTag::UnterminatedString,
    }
}

/// `/.../` or `/...$` in the default mode.
///
/// A plain slash literal needs at least one character of content, so a
/// failed match leaves `/` to be read as division.
pub(super) fn slashy(cursor: &mut Cursor<'_>) -> Option<RawTag> {
    let mark = cursor.mark();
    cursor.advance();
    let mut content = false;
    loop {
        match cursor.current() {
            None => break,
            Some('/') => {
                if content {
                    cursor.advance();
                    return Some(RawTag::Slashy);
                }
                break;
            }
            Some('$') if splice_follows(cursor) => {
                cursor.advance();
                return Some(RawTag::SlashyBegin);
            }
            Some('\\') if cursor.la(2) == Some('/') => {
                cursor.advance();
                cursor.advance();
            }
            Some(_) => {
                cursor.advance();
            }
        }
        content = true;
    }
    cursor.reset(mark);
    None
}

pub(super) fn slashy_body(cursor: &mut Cursor<'_>) -> RawTag {
    loop {
        match cursor.current() {
            None => return RawTag::UnterminatedString,
            Some('/') => {
                cursor.advance();
                return RawTag::StringEnd;
            }
            Some('$') if cursor.la(2) == Some('/') => {
                cursor.advance();
                cursor.advance();
                return RawTag::StringEnd;
            }
            Some('$') if splice_follows(cursor) => {
                cursor.advance();
                return RawTag::StringPart;
            }
            Some('\\') if cursor.la(2) == Some('/') => {
                cursor.advance();
                cursor.advance();
            }
            Some(_) => {
                cursor.advance();
            }
        }
    }
}

enum Step {
    Char,
    End,
    Splice,
    Eof,
}

/// One unit of dollar-slashy content: an escape (`$$`, `$/`, `$/$`), a
/// plain character, a splice `$`, or the `/$` terminator.
fn dollar_slashy_step(cursor: &mut Cursor<'_>) -> Step {
    match cursor.current() {
        None => Step::Eof,
        Some('/') if cursor.la(2) == Some('$') => {
            cursor.advance();
            cursor.advance();
            Step::End
        }
        Some('$') => match cursor.la(2) {
            Some('/') => {
                cursor.advance();
                cursor.advance();
                cursor.eat('$');
                Step::Char
            }
            Some('$') => {
                cursor.advance();
                cursor.advance();
                Step::Char
            }
            _ if splice_follows(cursor) => {
                cursor.advance();
                Step::Splice
            }
            _ => {
                cursor.advance();
                Step::Char
            }
        },
        Some(_) => {
            cursor.advance();
            Step::Char
        }
    }
}

/// `$/.../$` or `$/...$` in the default mode, starting at `$/`.
pub(super) fn dollar_slashy(cursor: &mut Cursor<'_>) -> Option<RawTag> {
    let mark = cursor.mark();
    cursor.eat_str("$/");
    let mut content = false;
    loop {
        match dollar_slashy_step(cursor) {
            Step::Char => content = true,
            Step::End if content => return Some(RawTag::DollarSlashy),
            Step::Splice => return Some(RawTag::DollarSlashyBegin),
            Step::End | Step::Eof => break,
        }
    }
    cursor.reset(mark);
    None
}

pub(super) fn dollar_slashy_body(cursor: &mut Cursor<'_>) -> RawTag {
    loop {
        match dollar_slashy_step(cursor) {
            Step::Char => {}
            Step::End => return RawTag::StringEnd,
            Step::Splice => return RawTag::StringPart,
            Step::Eof => return RawTag::UnterminatedString,
        }
    }
}

//! Shape of numeric literals.
//!
//! Only the extent and the integer/float split are decided here. Digit
//! grouping and radix checks run once the whole literal is known.

use crate::{CharacterSource, Cursor, RawTag};

fn is_digit_or_underscore(c: char) -> bool {
    c.is_ascii_digit() || c == '_'
}

fn is_hex_or_underscore(c: char) -> bool {
    c.is_ascii_hexdigit() || c == '_'
}

/// Scan a literal starting at an ASCII digit.
pub(super) fn scan(cursor: &mut Cursor<'_>) -> RawTag {
    if cursor.current() == Some('0') {
        match (cursor.la(2), cursor.la(3)) {
            (Some('x' | 'X'), Some(c)) if c.is_ascii_hexdigit() => return hex(cursor),
            (Some('b' | 'B'), Some('0' | '1')) => {
                cursor.advance();
                cursor.advance();
                cursor.eat_while(|c| matches!(c, '0' | '1' | '_'));
                return suffix(cursor, false);
            }
            _ => {}
        }
    }
    cursor.eat_while(is_digit_or_underscore);

    let mut float = false;
    if cursor.current() == Some('.') && cursor.la(2).is_some_and(|c| c.is_ascii_digit()) {
        cursor.advance();
        cursor.eat_while(is_digit_or_underscore);
        float = true;
    }
    if exponent(cursor, 'e') {
        float = true;
    }
    suffix(cursor, float)
}

fn hex(cursor: &mut Cursor<'_>) -> RawTag {
    cursor.advance();
    cursor.advance();
    cursor.eat_while(is_hex_or_underscore);

    // A hex float needs its binary exponent; without one the `.` is not ours.
    let mark = cursor.mark();
    if cursor.eat('.') {
        cursor.eat_while(is_hex_or_underscore);
    }
    if exponent(cursor, 'p') {
        return suffix(cursor, true);
    }
    cursor.reset(mark);
    suffix(cursor, false)
}

/// `e`/`p` marker, optional sign, then at least one digit.
fn exponent(cursor: &mut Cursor<'_>, marker: char) -> bool {
    if !cursor
        .current()
        .is_some_and(|c| c.eq_ignore_ascii_case(&marker))
    {
        return false;
    }
    let digits_at = if matches!(cursor.la(2), Some('+' | '-')) {
        3
    } else {
        2
    };
    if !cursor.la(digits_at).is_some_and(|c| c.is_ascii_digit()) {
        return false;
    }
    for _ in 1..digits_at {
        cursor.advance();
    }
    cursor.eat_while(is_digit_or_underscore);
    true
}

fn suffix(cursor: &mut Cursor<'_>, float: bool) -> RawTag {
    match cursor.current() {
        Some('f' | 'F' | 'd' | 'D') => {
            cursor.advance();
            RawTag::FloatLiteral
        }
        Some('g' | 'G') => {
            cursor.advance();
            if float {
                RawTag::FloatLiteral
            } else {
                RawTag::IntegerLiteral
            }
        }
        Some('l' | 'L' | 'i' | 'I') if !float => {
            cursor.advance();
            RawTag::IntegerLiteral
        }
        _ if float => RawTag::FloatLiteral,
        _ => RawTag::IntegerLiteral,
    }
}
